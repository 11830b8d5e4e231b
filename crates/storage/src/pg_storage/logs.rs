//! LogStore implementation for PgStorage.

use super::*;

use crate::traits::LogStore;
use async_trait::async_trait;
use logbook_core::LogInput;

#[async_trait]
impl LogStore for PgStorage {
    async fn list_logs(&self) -> Result<Vec<LogRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {LOG_COLUMNS} FROM logs ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_log).collect()
    }

    async fn get_log(&self, id: i64) -> Result<Option<LogRecord>, StorageError> {
        let row = sqlx::query(&format!("SELECT {LOG_COLUMNS} FROM logs WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_log).transpose()
    }

    async fn create_log(&self, input: &LogInput) -> Result<LogRecord, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO logs (owner, log_text) VALUES ($1, $2) RETURNING {LOG_COLUMNS}"
        ))
        .bind(&input.owner)
        .bind(&input.log_text)
        .fetch_one(&self.pool)
        .await?;
        row_to_log(&row)
    }

    async fn update_log(
        &self,
        id: i64,
        input: &LogInput,
    ) -> Result<Option<LogRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE logs
             SET owner = $1, log_text = $2, updated_at = NOW()
             WHERE id = $3
             RETURNING {LOG_COLUMNS}"
        ))
        .bind(&input.owner)
        .bind(&input.log_text)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_log).transpose()
    }

    async fn delete_log(&self, id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM logs WHERE id = $1").bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

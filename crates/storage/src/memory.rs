//! In-memory LogStore used by `serve --in-memory` and tests.

use async_trait::async_trait;
use chrono::Utc;
use logbook_core::{LogInput, LogRecord};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::LogStore;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<LogRecord>,
    last_id: i64,
}

/// Process-local `logs` table. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    table: RwLock<Table>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LogStore for MemoryStorage {
    async fn list_logs(&self) -> Result<Vec<LogRecord>, StorageError> {
        let table = self.table.read().await;
        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn get_log(&self, id: i64) -> Result<Option<LogRecord>, StorageError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn create_log(&self, input: &LogInput) -> Result<LogRecord, StorageError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let now = Utc::now();
        let record = LogRecord::new(
            table.last_id,
            input.owner.clone(),
            input.log_text.clone(),
            now,
            now,
        );
        table.rows.push(record.clone());
        Ok(record)
    }

    async fn update_log(
        &self,
        id: i64,
        input: &LogInput,
    ) -> Result<Option<LogRecord>, StorageError> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        row.owner.clone_from(&input.owner);
        row.log_text.clone_from(&input.log_text);
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_log(&self, id: i64) -> Result<bool, StorageError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|r| r.id != id);
        Ok(table.rows.len() < before)
    }
}

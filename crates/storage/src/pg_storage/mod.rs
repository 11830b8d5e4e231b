//! PostgreSQL storage backend using sqlx.

mod logs;

use crate::error::StorageError;
use chrono::{DateTime, Utc};
use logbook_core::{
    LogRecord, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use super::pg_migrations::run_pg_migrations;

pub(crate) const LOG_COLUMNS: &str = "id, owner, log_text, created_at, updated_at";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, bootstrapping the schema first.
    pub async fn from_pool(pool: PgPool) -> Result<Self, StorageError> {
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

pub(crate) fn row_to_log(row: &sqlx::postgres::PgRow) -> Result<LogRecord, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
    Ok(LogRecord::new(
        row.try_get("id")?,
        row.try_get("owner")?,
        row.try_get("log_text")?,
        created_at,
        updated_at,
    ))
}

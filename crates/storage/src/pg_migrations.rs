//! PostgreSQL schema bootstrap for logbook storage.

use anyhow::Result;
use sqlx::PgPool;

/// Create the `logs` table and its ordering index if they are missing.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS logs (
            id BIGSERIAL PRIMARY KEY,
            owner TEXT NOT NULL,
            log_text TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_logs_created ON logs (created_at DESC)")
        .execute(pool)
        .await?;

    tracing::debug!("logs schema ready");
    Ok(())
}

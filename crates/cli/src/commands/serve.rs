use anyhow::Result;
use logbook_http::AppState;
use logbook_storage::StorageBackend;
use std::sync::Arc;

pub(crate) async fn run(host: &str, port: u16, database_url: Option<&str>) -> Result<()> {
    let storage = match database_url {
        Some(url) => {
            let backend = StorageBackend::new_postgres(url).await?;
            tracing::info!("Connected to PostgreSQL");
            backend
        },
        None => {
            tracing::warn!("No database URL configured, records are kept in memory only");
            StorageBackend::new_memory()
        },
    };

    let state = Arc::new(AppState::new(Arc::new(storage)));
    let addr = format!("{host}:{port}");
    logbook_http::serve(state, &addr).await
}

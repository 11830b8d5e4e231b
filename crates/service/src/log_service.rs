use std::sync::Arc;

use logbook_core::{LogInput, LogRecord};
use logbook_storage::{LogStore, StorageBackend};

use crate::ServiceError;

pub struct LogService {
    storage: Arc<StorageBackend>,
}

impl LogService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn list_logs(&self) -> Result<Vec<LogRecord>, ServiceError> {
        Ok(self.storage.list_logs().await?)
    }

    pub async fn get_log(&self, id: i64) -> Result<LogRecord, ServiceError> {
        self.storage.get_log(id).await?.ok_or(ServiceError::NotFound(id))
    }

    pub async fn create_log(&self, input: LogInput) -> Result<LogRecord, ServiceError> {
        let input = prepare(&input)?;
        let record = self.storage.create_log(&input).await?;
        tracing::info!(id = record.id, owner = %record.owner, "log created");
        Ok(record)
    }

    pub async fn update_log(&self, id: i64, input: LogInput) -> Result<LogRecord, ServiceError> {
        let input = prepare(&input)?;
        let record = self.storage.update_log(id, &input).await?.ok_or(ServiceError::NotFound(id))?;
        tracing::info!(id, "log updated");
        Ok(record)
    }

    pub async fn delete_log(&self, id: i64) -> Result<(), ServiceError> {
        if !self.storage.delete_log(id).await? {
            return Err(ServiceError::NotFound(id));
        }
        tracing::info!(id, "log deleted");
        Ok(())
    }
}

/// Trims both fields and applies the minimum-length rule.
fn prepare(input: &LogInput) -> Result<LogInput, ServiceError> {
    let input = LogInput::new(&input.owner, &input.log_text);
    input.validate()?;
    Ok(input)
}

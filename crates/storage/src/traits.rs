//! Storage backend trait abstraction

use async_trait::async_trait;
use logbook_core::{LogInput, LogRecord};

use crate::error::StorageError;

/// CRUD operations on the `logs` table.
///
/// Inputs are expected to be validated by the caller; stores persist
/// whatever they are given.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Every record, newest first (`created_at DESC, id DESC`).
    async fn list_logs(&self) -> Result<Vec<LogRecord>, StorageError>;

    /// Get a record by ID.
    async fn get_log(&self, id: i64) -> Result<Option<LogRecord>, StorageError>;

    /// Insert a record. The store assigns `id`, `created_at` and `updated_at`.
    async fn create_log(&self, input: &LogInput) -> Result<LogRecord, StorageError>;

    /// Overwrite `owner` and `log_text` and refresh `updated_at`.
    /// Returns `None` if the ID does not exist.
    async fn update_log(&self, id: i64, input: &LogInput)
    -> Result<Option<LogRecord>, StorageError>;

    /// Delete a record by ID. Returns `true` if a row was removed.
    async fn delete_log(&self, id: i64) -> Result<bool, StorageError>;
}

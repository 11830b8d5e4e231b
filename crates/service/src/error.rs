//! Typed error enum for the service layer.

use logbook_core::ValidationErrors;
use logbook_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and input failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, decode, bootstrap).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (too-short fields).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No log with this id.
    #[error("log {0} not found")]
    NotFound(i64),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            _ => false,
        }
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Storage(StorageError::NotFound { .. }))
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

//! Unified storage backend with enum dispatch.

use std::sync::Arc;

use async_trait::async_trait;
use logbook_core::{LogInput, LogRecord};

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::pg_storage::PgStorage;
use crate::traits::LogStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <PgStorage as LogStore>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <MemoryStorage as LogStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(PgStorage),
    /// Shared so clones of the backend see the same rows.
    Memory(Arc<MemoryStorage>),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(PgStorage::new(database_url).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(Arc::new(MemoryStorage::new()))
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

#[async_trait]
impl LogStore for StorageBackend {
    async fn list_logs(&self) -> Result<Vec<LogRecord>, StorageError> {
        dispatch!(self, list_logs())
    }

    async fn get_log(&self, id: i64) -> Result<Option<LogRecord>, StorageError> {
        dispatch!(self, get_log(id))
    }

    async fn create_log(&self, input: &LogInput) -> Result<LogRecord, StorageError> {
        dispatch!(self, create_log(input))
    }

    async fn update_log(
        &self,
        id: i64,
        input: &LogInput,
    ) -> Result<Option<LogRecord>, StorageError> {
        dispatch!(self, update_log(id, input))
    }

    async fn delete_log(&self, id: i64) -> Result<bool, StorageError> {
        dispatch!(self, delete_log(id))
    }
}

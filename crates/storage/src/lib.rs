//! Storage layer for logbook
//!
//! One `logs` table behind the [`LogStore`] trait, backed by PostgreSQL in
//! production and by an in-memory list for development and tests.

mod backend;
pub mod error;
mod memory;
mod pg_migrations;
mod pg_storage;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_storage::PgStorage;
pub use traits::LogStore;

//! Shared constants for logbook.

/// Minimum number of characters required for `owner` and `log_text`.
pub const MIN_FIELD_CHARS: usize = 2;

/// Records shown per page when the caller does not choose a size.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Port the HTTP server listens on by default.
pub const DEFAULT_PORT: u16 = 4000;

/// Interface the HTTP server binds by default.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Base URL of the REST API used by the client when none is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:4000/api";

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Message returned for a missing or unparsable record id.
pub const LOG_NOT_FOUND_MESSAGE: &str = "Log not found";

/// Message returned for unhandled server faults. Details stay in the server log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

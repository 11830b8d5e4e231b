//! Core types for logbook
//!
//! Domain records shared by the server, the storage layer and the client,
//! plus the in-memory pagination state the client keeps in sync with
//! confirmed mutations.

pub mod constants;
pub mod env_config;
mod error;
mod log_record;
pub mod pagination;

pub use constants::*;
pub use error::*;
pub use log_record::*;
pub use pagination::{Keyed, Pagination};

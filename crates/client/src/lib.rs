//! Client side of logbook
//!
//! [`LogsClient`] speaks the REST contract; [`LogsView`] owns the fetched
//! list and its page cursor and reconciles both after each confirmed
//! mutation.

mod client;
mod error;
mod submit;
mod view;

pub use client::LogsClient;
pub use error::{ClientError, ViewError};
pub use submit::{SubmitGate, SubmitTicket};
pub use view::{LoadState, LogsView};

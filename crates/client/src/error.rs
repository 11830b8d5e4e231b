//! Typed error enums for the client crate.

use logbook_core::ValidationErrors;
use thiserror::Error;

/// Failure of one REST call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed: connect/transport failure, or a
    /// success body that could not be decoded.
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a 4xx/5xx status.
    #[error("server responded {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Server { status: u16, message: Option<String> },

    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ClientError {
    /// Human-readable text for a notification or error panel.
    ///
    /// Prefers the server-supplied `message`, then the transport error's
    /// own text, then `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        let message = match self {
            Self::Server { message: Some(msg), .. } if !msg.trim().is_empty() => msg.clone(),
            Self::Server { status, .. } => format!("Request failed with status code {status}"),
            Self::Network(e) => e.to_string(),
            Self::ClientInit(msg) => msg.clone(),
        };
        if message.trim().is_empty() { fallback.to_owned() } else { message }
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Server { status: 404, .. })
    }
}

/// Failure of a view-model action.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Form input rejected before any request was made.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// The same control already has a submission in flight.
    #[error("a submission is already in progress")]
    Busy,

    /// The REST call failed; `fallback` is the action's default message.
    #[error("{source}")]
    Request {
        #[source]
        source: ClientError,
        fallback: &'static str,
    },
}

impl ViewError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => errors.to_string(),
            Self::Busy => self.to_string(),
            Self::Request { source, fallback } => source.user_message(fallback),
        }
    }
}

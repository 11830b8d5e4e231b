//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a `{"message": ...}`
//! JSON body. Handlers return `Result<Json<T>, ApiError>`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use logbook_core::{INTERNAL_ERROR_MESSAGE, LOG_NOT_FOUND_MESSAGE};
use logbook_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: input failed validation.
    BadRequest(String),
    /// 404 Not Found: requested log does not exist.
    NotFound(String),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl ApiError {
    #[must_use]
    pub fn log_not_found() -> Self {
        Self::NotFound(LOG_NOT_FOUND_MESSAGE.to_owned())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_owned())
            },
        };
        let body = serde_json::json!({"message": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

/// Malformed or mistyped request bodies get the same `{message}` shape as
/// validation failures.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => Self::log_not_found(),
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::Storage(_) => Self::Internal(err.into()),
        }
    }
}

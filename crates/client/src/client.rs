use std::time::Duration;

use logbook_core::{LogInput, LogRecord};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Only bounds connection setup; requests themselves have no deadline.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Error body the server sends with 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the logs REST API.
///
/// One request per call, no retries: the first failure is returned to the
/// caller as is.
#[derive(Debug, Clone)]
pub struct LogsClient {
    client: reqwest::Client,
    base_url: String,
}

impl LogsClient {
    /// Creates a client for an API rooted at `base_url` (for example
    /// `http://127.0.0.1:4000/api`).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url: base_url.trim().trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /logs`: the full, unpaginated list.
    pub async fn fetch_logs(&self) -> Result<Vec<LogRecord>, ClientError> {
        tracing::debug!(url = %self.logs_url(), "fetching logs");
        let response = self.client.get(self.logs_url()).send().await?;
        decode(response).await
    }

    /// `GET /logs/:id`.
    pub async fn get_log(&self, id: i64) -> Result<LogRecord, ClientError> {
        tracing::debug!(id, "fetching log");
        let response = self.client.get(self.log_url(id)).send().await?;
        decode(response).await
    }

    /// `POST /logs`: returns the record as the server stored it.
    pub async fn create_log(&self, input: &LogInput) -> Result<LogRecord, ClientError> {
        tracing::debug!(owner = %input.owner, "creating log");
        let response = self.client.post(self.logs_url()).json(input).send().await?;
        decode(response).await
    }

    /// `PUT /logs/:id`.
    pub async fn update_log(&self, id: i64, input: &LogInput) -> Result<LogRecord, ClientError> {
        tracing::debug!(id, "updating log");
        let response = self.client.put(self.log_url(id)).json(input).send().await?;
        decode(response).await
    }

    /// `DELETE /logs/:id`. The success body is empty and ignored.
    pub async fn delete_log(&self, id: i64) -> Result<(), ClientError> {
        tracing::debug!(id, "deleting log");
        let response = self.client.delete(self.log_url(id)).send().await?;
        check_status(response).await?;
        Ok(())
    }

    fn logs_url(&self) -> String {
        format!("{}/logs", self.base_url)
    }

    fn log_url(&self, id: i64) -> String {
        format!("{}/logs/{id}", self.base_url)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body).ok().map(|b| b.message);
    tracing::debug!(status = status.as_u16(), ?message, "request failed");
    Err(ClientError::Server { status: status.as_u16(), message })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    Ok(check_status(response).await?.json::<T>().await?)
}

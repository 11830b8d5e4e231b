use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use logbook_core::{LogInput, LogRecord};

use crate::api_error::ApiError;
use crate::AppState;

/// Ids that do not parse as integers cannot name a row.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|_| ApiError::log_not_found())
}

pub async fn list_logs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LogRecord>>, ApiError> {
    Ok(Json(state.log_service.list_logs().await?))
}

pub async fn get_log(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<LogRecord>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.log_service.get_log(id).await?))
}

pub async fn create_log(
    State(state): State<Arc<AppState>>,
    body: Result<Json<LogInput>, JsonRejection>,
) -> Result<Json<LogRecord>, ApiError> {
    let Json(req) = body?;
    Ok(Json(state.log_service.create_log(req).await?))
}

pub async fn update_log(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<LogInput>, JsonRejection>,
) -> Result<Json<LogRecord>, ApiError> {
    let id = parse_id(&id)?;
    let Json(req) = body?;
    Ok(Json(state.log_service.update_log(id, req).await?))
}

pub async fn delete_log(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.log_service.delete_log(id).await?;
    Ok(StatusCode::OK)
}

//! REST API response helpers.
//!
//! Successful bodies are the shared wire models from `coverreg_shared`;
//! every failure is `{ "error": "<message>" }` with a matching status.

use axum::{http::StatusCode, Json};
use coverreg_shared::ErrorBody;
use serde::Serialize;

use crate::error::ServerError;

/// Error half of every handler result.
pub type ApiError = (StatusCode, Json<ErrorBody>);

/// Result type of every JSON handler.
pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Create an error response
pub fn error_response(status: StatusCode, error: &str) -> ApiError {
    (status, Json(ErrorBody::new(error)))
}

impl From<ServerError> for (StatusCode, Json<ErrorBody>) {
    fn from(err: ServerError) -> Self {
        error_response(err.status(), &err.public_message())
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub catalog: String,
    pub endpoints: [&'static str; 4],
}

//! Error types for noodlehub-web

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Recipe data could not be loaded (500)
    #[error("Recipe data unavailable: {0}")]
    DataSource(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<noodlehub_common::Error> for ApiError {
    fn from(err: noodlehub_common::Error) -> Self {
        use noodlehub_common::Error as E;
        match err {
            E::NotFound(what) => ApiError::NotFound(what),
            source @ (E::DataSource { .. } | E::Parse(_) | E::DuplicateId(_)) => {
                ApiError::DataSource(source.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::DataSource(msg) => {
                error!("Recipe data unavailable: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "DATA_SOURCE", msg)
            }
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

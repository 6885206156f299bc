//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fba_core::FbaError;
use tracing::error;

/// Body returned for any failure not caused by the caller.
pub const GENERIC_FAILURE: &str = "Failed to analyze match";

/// Errors surfaced by the route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Caller input was missing or malformed.
    BadRequest(String),
    /// Anything else. The detail is logged, never returned.
    Internal(String),
}

impl From<FbaError> for ApiError {
    fn from(err: FbaError) -> Self {
        if err.is_validation() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(detail) => {
                error!(%detail, "Analysis error");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

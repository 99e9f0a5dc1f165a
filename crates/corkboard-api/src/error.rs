use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use corkboard_db::StoreError;
use serde_json::json;
use thiserror::Error;

/// Client-facing error taxonomy. Each variant maps to exactly one status
/// code and one JSON body shape.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing content or username")]
    Validation,
    #[error("Message not found")]
    NotFound,
    #[error("{0}")]
    Storage(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            other => ApiError::Storage(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": ["Missing content or username"] })),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Message not found" })),
            )
                .into_response(),
            ApiError::Storage(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "errors": [message] })),
            )
                .into_response(),
        }
    }
}

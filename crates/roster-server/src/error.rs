//! API error types with JSON responses.
//!
//! Handlers decide which variant a failure becomes; this module only owns
//! the status code and the `{ success: false, message }` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_store::StoreError;

use crate::response::ApiResponse;

/// Public message for unexpected failures.
pub const SERVER_ERROR: &str = "Server error";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or mistyped request field (400).
    #[error("{0}")]
    Validation(String),

    /// Malformed request outside the body, e.g. a bad path id (400).
    #[error("{0}")]
    BadRequest(String),

    /// No record for the given id, or no such route (404).
    #[error("{0}")]
    NotFound(String),

    /// Route exists but not for this method (405).
    #[error("{0}")]
    MethodNotAllowed(String),

    /// Store rejected a write; the store's message is returned (400).
    #[error(transparent)]
    Persistence(StoreError),

    /// Unexpected failure (500). Carries only the public message; the cause
    /// is logged where it happens.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Internal error with the generic public message.
    pub fn server_error() -> Self {
        Self::Internal(SERVER_ERROR.to_string())
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) | Self::Persistence(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

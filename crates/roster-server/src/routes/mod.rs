//! Route definitions for the HTTP API.

pub mod info;
pub mod students;

use axum::Router;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the complete router with all routes.
///
/// Unmatched paths and methods answer with the usual JSON failure body.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(info::routes())
        .merge(students::routes())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed("Method not allowed".to_string())
}

//! roster-server: HTTP API server for the Roster student records service
//!
//! This crate provides:
//! - REST endpoints for creating, listing, fetching, updating and deleting students
//! - A static `/info` endpoint
//! - Typed request validation and JSON error responses
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request ID generation and propagation
//! - Request tracing and logging
//! - CORS handling
//!
//! Handlers reach storage only through the `StudentRepository` held in
//! `AppState`, so any implementation can be plugged in.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use roster_server::{build_app, AppState, ServerConfig};
//! use roster_store::MemoryStore;
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(Arc::new(MemoryStore::new()));
//! let app = build_app(state, &config)?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig, StoreBackend};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use roster_core;
pub use roster_store;

use crate::middleware::request_id::{make_request_span, propagate_request_id_layer, request_id_layer};

/// Build the router with the full middleware stack.
///
/// Layer order, outermost first: request id, request id propagation, CORS, trace.
pub fn build_app(state: AppState, config: &ServerConfig) -> Result<Router, ConfigError> {
    let cors = build_cors_layer(&config.cors_allowed_origins)?;

    Ok(routes::build_router(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(cors)
        .layer(propagate_request_id_layer())
        .layer(request_id_layer()))
}

/// Build CORS layer from a comma-separated origin list, or "*" for any origin.
pub fn build_cors_layer(allowed_origins: &str) -> Result<CorsLayer, ConfigError> {
    if allowed_origins.trim() == "*" {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse().map_err(|_| ConfigError::InvalidValue {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: format!("invalid origin {s:?}"),
            })
        })
        .collect::<Result<Vec<http::HeaderValue>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

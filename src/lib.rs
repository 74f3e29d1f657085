//! # Restoration API - Image Restoration Backend
//!
//! ## Modules
//!
//! - [`config`] - Server bind configuration read from environment variables
//! - [`handlers`] - HTTP request handlers for the service endpoints
//! - [`telemetry`] - Tracing subscriber setup for the application binary
//! - [`utils`] - Utility constants

pub mod config;
pub mod handlers;
pub mod telemetry;
pub mod utils;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::health_check;

/// Creates the Axum router with application routes.
///
/// The router carries no shared state: every registered handler is a pure
/// function of the request. Unmatched paths and non-matching methods fall
/// through to Axum's default `404 Not Found` / `405 Method Not Allowed`
/// responses.
pub fn app() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
}

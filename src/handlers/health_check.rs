//! # Health Check Handler
//!
//! Simple health check endpoint for monitoring application availability.
//! This endpoint can be used by load balancers, monitoring systems, or
//! deployment tools to verify that the application is running.

use axum::Json;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::utils::constant::SERVICE_ID;

/// Health check response payload.
///
/// Exactly two fields: a liveness flag and the identifier of the backend
/// variant that served the request. Monitoring tooling matches on the full
/// object, so nothing may be added or removed without a coordinated change.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    ok: bool,
    service: &'static str,
}

/// Health check endpoint that reports the service as alive.
///
/// This is a simple endpoint that indicates the application is running and
/// able to respond to HTTP requests. It performs no downstream checks, holds
/// no state, and cannot fail; the payload is identical on every invocation.
///
/// # Returns
///
/// Always returns `200 OK` with body `{"ok":true,"service":"python"}`.
#[instrument]
pub async fn health_check() -> Json<HealthStatus> {
    debug!("Health check endpoint accessed");
    Json(HealthStatus {
        ok: true,
        service: SERVICE_ID,
    })
}

//! # Telemetry
//!
//! Tracing subscriber setup for the application binary. Integration tests
//! install their own subscriber with a test writer instead of calling this.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter applied when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "restoration_api=debug,tower_http=info";

/// Installs the global tracing subscriber.
///
/// Combines an env filter (`RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`]) with a fmt layer. Should only be called once,
/// from `main`.
pub fn init_telemetry() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

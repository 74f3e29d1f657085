//! # Application Constants
//!
//! This module defines configuration constants used throughout the
//! restoration API backend.

/// Backend identifier reported by the health endpoint
///
/// The deployment runs several backend variants behind one gateway, and
/// dashboards key on this tag to tell which variant answered a probe. The
/// value must stay in sync with the gateway configuration.
pub const SERVICE_ID: &str = "python";

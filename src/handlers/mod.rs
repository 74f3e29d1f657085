//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the restoration API
//! backend. Each handler is responsible for processing specific HTTP requests
//! and returning appropriate responses.
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Application health monitoring

mod health_check;

pub use health_check::*;

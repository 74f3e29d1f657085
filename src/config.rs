//! # Server Configuration
//!
//! Bind address configuration sourced from environment variables. Values are
//! read once at startup and never consulted again after the listener is bound.

use std::env;
use std::num::ParseIntError;

use thiserror::Error;

/// Bind host used when `APP_HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Bind port used when `APP_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// Errors that can occur while reading server configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid APP_PORT: {0}")]
    InvalidPort(#[from] ParseIntError),
}

/// Server bind configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Reads server configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `APP_HOST` - Bind host, defaults to `0.0.0.0`
    /// - `APP_PORT` - Bind port, defaults to `8000`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `APP_PORT` is set to something
    /// that does not parse as a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("APP_PORT") {
            Ok(raw) => raw.parse()?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// The `host:port` address the listener binds on.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

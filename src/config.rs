//! Configuration management for the contact manager server.
//!
//! Loads and validates configuration from environment variables, with an
//! optional `.env` file picked up via `dotenvy`.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Minimum signing secret length in bytes (256 bits for HMAC-SHA256).
const MIN_SECRET_BYTES: usize = 32;

/// Configuration for the contact manager server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Symmetric signing secret for bearer tokens.
    ///
    /// Set once at startup and never rotated during the process lifetime;
    /// restarting with a different secret invalidates all outstanding tokens.
    pub jwt_secret: String,

    /// Socket address the HTTP server binds to (default: "127.0.0.1:8080")
    pub bind_addr: String,

    /// Token lifetime in hours (default: 24)
    pub token_ttl_hours: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTACT_JWT_SECRET`: token signing secret, at least 32 bytes
    ///
    /// Optional environment variables:
    /// - `CONTACT_BIND_ADDR`: bind address (default: "127.0.0.1:8080")
    /// - `CONTACT_TOKEN_TTL_HOURS`: token lifetime in hours (default: 24)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let jwt_secret = env::var("CONTACT_JWT_SECRET")
            .map_err(|_| ConfigError::MissingVar("CONTACT_JWT_SECRET".to_string()))?;

        if jwt_secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_JWT_SECRET".to_string(),
                reason: format!("Must be at least {} bytes", MIN_SECRET_BYTES),
            });
        }

        let bind_addr =
            env::var("CONTACT_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        let token_ttl_hours = Self::parse_env_u64("CONTACT_TOKEN_TTL_HOURS", 24)?;
        if token_ttl_hours == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_TOKEN_TTL_HOURS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            jwt_secret,
            bind_addr,
            token_ttl_hours,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

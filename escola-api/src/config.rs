//! API Configuration Module
//!
//! Bind address, CORS, request timeout, reset exposure and log format.
//! Configuration is loaded from environment variables with defaults suited
//! to local development against the client test suite (port 5000, reset on).

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use crate::error::ApiError;

/// Configuration errors raised at startup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid port value: {0}")]
    InvalidPort(String),

    #[error("Invalid boolean for {key}: {value} (expected \"true\" or \"false\")")]
    InvalidFlag { key: String, value: String },

    #[error("Invalid bind address {addr}: {reason}")]
    InvalidBindAddress { addr: String, reason: String },

    #[error("Invalid production configuration: {0}")]
    Production(String),
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::invalid_input(err.to_string())
    }
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

// ============================================================================
// API CONFIGURATION
// ============================================================================

/// API configuration for the HTTP adapter.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Interface to bind.
    pub bind_host: String,

    /// TCP port to listen on.
    pub port: u16,

    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,

    /// Max age for CORS preflight cache in seconds.
    pub cors_max_age_secs: u64,

    /// Whether `POST /reseta` is mounted.
    pub reset_enabled: bool,

    /// Per-request timeout.
    pub request_timeout: Duration,

    pub environment: Environment,

    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_host: "127.0.0.1".to_string(),
            port: 5000,
            cors_origins: Vec::new(), // Empty = allow all
            cors_max_age_secs: 86400, // 24 hours
            reset_enabled: true,
            request_timeout: Duration::from_secs(30),
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `ESCOLA_API_BIND`: Interface to bind (default: 127.0.0.1)
    /// - `PORT` or `ESCOLA_API_PORT`: Listen port (default: 5000)
    /// - `ESCOLA_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    /// - `ESCOLA_CORS_MAX_AGE_SECS`: Preflight cache duration (default: 86400)
    /// - `ESCOLA_RESET_ENABLED`: "true" or "false" (default: true)
    /// - `ESCOLA_REQUEST_TIMEOUT_SECS`: Per-request timeout (default: 30)
    /// - `ESCOLA_ENVIRONMENT`: "development" or "production" (default: development)
    /// - `ESCOLA_LOG_FORMAT`: "pretty" or "json" (default: pretty)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_host = lookup("ESCOLA_API_BIND").unwrap_or(defaults.bind_host);

        let port = match lookup("PORT").or_else(|| lookup("ESCOLA_API_PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let cors_origins = lookup("ESCOLA_CORS_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let cors_max_age_secs = lookup("ESCOLA_CORS_MAX_AGE_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.cors_max_age_secs);

        let reset_enabled = match lookup("ESCOLA_RESET_ENABLED") {
            Some(raw) => parse_flag("ESCOLA_RESET_ENABLED", raw)?,
            None => defaults.reset_enabled,
        };

        let request_timeout = lookup("ESCOLA_REQUEST_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        let environment = lookup("ESCOLA_ENVIRONMENT")
            .map(|s| Environment::parse(&s))
            .unwrap_or_default();

        let log_format = match lookup("ESCOLA_LOG_FORMAT").map(|s| s.to_lowercase()) {
            Some(format) if format == "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            bind_host,
            port,
            cors_origins,
            cors_max_age_secs,
            reset_enabled,
            request_timeout,
            environment,
            log_format,
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.bind_host, self.port);
        addr.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBindAddress {
                reason: e.to_string(),
                addr,
            })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Validate API configuration for production use.
    pub fn validate_for_production(&self) -> Result<(), ConfigError> {
        if self.cors_origins.is_empty() {
            return Err(ConfigError::Production(
                "CORS origins not configured. Set ESCOLA_CORS_ORIGINS.".to_string(),
            ));
        }
        if self.reset_enabled {
            return Err(ConfigError::Production(
                "Reset endpoint must be disabled. Set ESCOLA_RESET_ENABLED=false.".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_flag(key: &str, raw: String) -> Result<bool, ConfigError> {
    raw.trim()
        .to_lowercase()
        .parse::<bool>()
        .map_err(|_| ConfigError::InvalidFlag {
            key: key.to_string(),
            value: raw,
        })
}

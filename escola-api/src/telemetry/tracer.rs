//! Tracing subscriber initialization.
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and either a
//! JSON or a human-readable formatter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{ApiConfig, Environment, LogFormat};
use crate::error::{ApiError, ApiResult};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "escola_api=debug,escola_storage=debug,tower_http=info,info";

/// Telemetry configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (production, development)
    pub environment: Environment,
    /// Log line format
    pub log_format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "escola-api".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
        }
    }
}

impl From<&ApiConfig> for TelemetryConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            environment: config.environment,
            log_format: config.log_format,
            ..Default::default()
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once at startup, before any events are emitted. A second call fails
/// because the global subscriber is already set.
pub fn init_tracing(config: &TelemetryConfig) -> ApiResult<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };
    result.map_err(|e| ApiError::internal_error(format!("Failed to init subscriber: {}", e)))?;

    tracing::info!(
        service_name = %config.service_name,
        service_version = %config.service_version,
        environment = ?config.environment,
        "Telemetry initialized"
    );

    Ok(())
}

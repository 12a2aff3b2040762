//! ESCOLA API Server Entry Point
//!
//! Loads configuration, installs logging, and serves the Axum router over a
//! fresh in-memory store until Ctrl-C.

use escola_api::telemetry::{init_tracing, TelemetryConfig};
use escola_api::{create_api_router, ApiConfig, ApiError, ApiResult};
use escola_storage::RecordService;

#[tokio::main]
async fn main() -> ApiResult<()> {
    let api_config = ApiConfig::from_env()?;
    init_tracing(&TelemetryConfig::from(&api_config))?;

    let records = RecordService::in_memory();
    let app = create_api_router(records, &api_config)?;

    let addr = api_config.bind_addr()?;
    tracing::info!(%addr, reset_enabled = api_config.reset_enabled, "Starting ESCOLA API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

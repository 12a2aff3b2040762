//! ESCOLA API - REST Layer
//!
//! Axum adapter over the ESCOLA record service. Translates HTTP requests on
//! `/professores`, `/turmas` and `/reseta` into `RecordService` calls and maps
//! the typed outcomes back to status codes and JSON bodies.

pub mod config;
pub mod error;
pub mod extractors;
pub mod macros;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod types;

// Re-export commonly used types
pub use config::{ApiConfig, ConfigError, Environment, LogFormat};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use extractors::{PathId, PathIdError};
pub use openapi::ApiDoc;
pub use routes::create_api_router;
pub use state::AppState;
pub use types::MessageResponse;

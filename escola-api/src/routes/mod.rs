//! REST API Routes Module
//!
//! Route handlers organized by resource:
//! - `/professores` teacher CRUD
//! - `/turmas` class CRUD
//! - `/reseta` Reset Control (optional)
//! - `/health/*` probes
//! - `/openapi.json` and, with the `swagger-ui` feature, `/swagger-ui`

pub mod class;
pub mod health;
pub mod reset;
pub mod teacher;

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn,
    Router,
};
use escola_storage::RecordService;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;

use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::openapi::ApiDoc;
use crate::state::AppState;
use crate::telemetry::observability_middleware;

// Re-export route creation functions for convenience
pub use class::create_router as class_router;
pub use health::create_router as health_router;
pub use reset::create_router as reset_router;
pub use teacher::create_router as teacher_router;

// ============================================================================
// OPENAPI ENDPOINTS
// ============================================================================

/// Handler for /openapi.json endpoint.
#[cfg(not(feature = "swagger-ui"))]
async fn openapi_json() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

// ============================================================================
// CORS LAYER
// ============================================================================

/// Build the CORS layer from ApiConfig.
///
/// In development mode (empty origins), allows all origins.
/// Otherwise only the configured origins are allowed.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    if config.cors_origins.is_empty() {
        tracing::info!("CORS: Development mode - allowing all origins");
        cors.allow_origin(Any)
    } else {
        tracing::info!(
            "CORS: Restricted mode - allowing origins: {:?}",
            config.cors_origins
        );
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

// ============================================================================
// ROUTER
// ============================================================================

/// Create the complete API router.
///
/// In production, the configuration is validated first and an unsafe
/// combination (open CORS, reset route mounted) is rejected.
///
/// # Middleware Order (outer to inner)
/// 1. CORS - handles preflight requests
/// 2. Observability - request span and completion log
/// 3. Timeout - 408 once `request_timeout` elapses
pub fn create_api_router(records: RecordService, config: &ApiConfig) -> ApiResult<Router> {
    if config.is_production() {
        config.validate_for_production()?;
    }

    let state = AppState::new(records, config.clone());

    let mut router = Router::new()
        .nest("/professores", teacher::create_router())
        .nest("/turmas", class::create_router())
        .nest("/health", health::create_router());

    if config.reset_enabled {
        router = router.nest("/reseta", reset::create_router());
    } else {
        tracing::info!("Reset endpoint disabled");
    }

    let router: Router = router.with_state(state);

    // Swagger UI serves /openapi.json itself.
    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa_swagger_ui::SwaggerUi;
        router.merge(SwaggerUi::new("/swagger-ui").url("/openapi.json", ApiDoc::openapi()))
    };
    #[cfg(not(feature = "swagger-ui"))]
    let router = router.route("/openapi.json", axum::routing::get(openapi_json));

    Ok(router.layer(
        ServiceBuilder::new()
            .layer(build_cors_layer(config))
            .layer(from_fn(observability_middleware))
            .layer(TimeoutLayer::new(config.request_timeout)),
    ))
}

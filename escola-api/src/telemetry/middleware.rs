//! Axum Middleware for HTTP Request Tracing
//!
//! Wraps every request in an `http_request` span and logs its completion
//! with status and latency.

use axum::{extract::Request, middleware::Next, response::Response};
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Instant;
use tracing::{info_span, Instrument};

static ID_SEGMENT: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"/\d+(/|$)").ok());

/// Normalize path for spans (replace numeric IDs with placeholders).
///
/// Keeps the route field low-cardinality.
pub fn normalize_path(path: &str) -> String {
    match ID_SEGMENT.as_ref() {
        // Segments share their slashes, so run twice for adjacent ids.
        Some(pattern) => {
            let once = pattern.replace_all(path, "/{id}$1");
            pattern.replace_all(&once, "/{id}$1").into_owned()
        }
        None => path.to_string(),
    }
}

/// Observability middleware for Axum.
pub async fn observability_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let normalized_path = normalize_path(&path);

    let span = info_span!(
        "http_request",
        http.method = %method,
        http.target = %path,
        http.route = %normalized_path,
        otel.kind = "server",
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Request failed"
        );
    } else {
        tracing::info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Request completed"
        );
    }

    response
}

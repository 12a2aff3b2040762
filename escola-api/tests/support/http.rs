//! Shared HTTP helpers for escola-api integration tests.
//!
//! Requests go through `tower::ServiceExt::oneshot` against a freshly built
//! router, so no socket is ever bound.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use escola_api::{create_api_router, ApiConfig};
use escola_storage::RecordService;
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Router plus the record service behind it.
pub struct TestApp {
    pub router: Router,
    pub records: RecordService,
}

impl TestApp {
    pub fn new() -> TestResult<Self> {
        Self::with_config(&ApiConfig::default())
    }

    pub fn with_config(config: &ApiConfig) -> TestResult<Self> {
        let records = RecordService::in_memory();
        let router = create_api_router(records.clone(), config)?;
        Ok(Self { router, records })
    }

    /// Send a request with an optional JSON body and decode the reply.
    ///
    /// Empty bodies decode to `Value::Null`; non-JSON bodies become
    /// `Value::String`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> TestResult<(StatusCode, Value)> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        Ok((status, value))
    }

    pub async fn get(&self, uri: &str) -> TestResult<(StatusCode, Value)> {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post<T: Serialize>(&self, uri: &str, body: &T) -> TestResult<(StatusCode, Value)> {
        self.send(Method::POST, uri, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn put<T: Serialize>(&self, uri: &str, body: &T) -> TestResult<(StatusCode, Value)> {
        self.send(Method::PUT, uri, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn delete(&self, uri: &str) -> TestResult<(StatusCode, Value)> {
        self.send(Method::DELETE, uri, None).await
    }

    /// POST a create payload and return the id the store assigned.
    pub async fn create(&self, uri: &str, body: &Value) -> TestResult<u64> {
        let (status, created) = self.post(uri, body).await?;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", created);
        created["id"]
            .as_u64()
            .ok_or_else(|| format!("no numeric id in {}", created).into())
    }
}

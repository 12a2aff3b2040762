//! Shared application state for Axum routers.

use std::time::Instant;

use escola_storage::RecordService;

use crate::config::ApiConfig;

/// Application-wide state shared across all routes.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Record service over the process-wide in-memory store.
    pub records: RecordService,
    pub config: ApiConfig,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(records: RecordService, config: ApiConfig) -> Self {
        Self {
            records,
            config,
            start_time: Instant::now(),
        }
    }
}

crate::impl_from_ref!(RecordService, records);
crate::impl_from_ref!(ApiConfig, config);
crate::impl_from_ref!(Instant, start_time);

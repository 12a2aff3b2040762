//! Reset Control endpoint.
//!
//! `POST /reseta` empties both stores and rewinds both id allocators. Client
//! suites call it before each scenario. Mounted only when
//! `ApiConfig::reset_enabled` is set.

use axum::{extract::State, routing::post, Json, Router};
use escola_storage::RecordService;

use crate::{
    state::AppState,
    types::{MessageResponse, STORE_RESET},
};

/// POST /reseta - Clear every record
#[utoipa::path(
    post,
    path = "/reseta",
    tag = "Reset",
    responses(
        (status = 200, description = "Store reset", body = MessageResponse),
    ),
)]
pub async fn reset(State(records): State<RecordService>) -> Json<MessageResponse> {
    records.reset();
    Json(MessageResponse::new(STORE_RESET))
}

pub fn create_router() -> Router<AppState> {
    Router::new().route("/", post(reset))
}

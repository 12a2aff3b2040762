//! Class REST API Routes
//!
//! Axum handlers for `/turmas`. Students are only written at creation;
//! `PUT /turmas/{id}` replaces description, teacher and active flag.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use escola_core::{Class, ClassDraft, ClassId, ClassPatch};
use escola_storage::RecordService;

use crate::{
    error::{ApiError, ApiResult},
    extractors::PathId,
    state::AppState,
    types::{MessageResponse, CLASS_DELETED, CLASS_UPDATED},
};

/// POST /turmas - Create a new class
#[utoipa::path(
    post,
    path = "/turmas",
    tag = "Turmas",
    request_body = ClassDraft,
    responses(
        (status = 201, description = "Class created successfully", body = Class),
        (status = 400, description = "Missing or invalid field", body = ApiError),
    ),
)]
pub async fn create_class(
    State(records): State<RecordService>,
    Json(draft): Json<ClassDraft>,
) -> ApiResult<impl IntoResponse> {
    let class = records.create_class(draft)?;
    Ok((StatusCode::CREATED, Json(class)))
}

/// GET /turmas - List all classes
#[utoipa::path(
    get,
    path = "/turmas",
    tag = "Turmas",
    responses(
        (status = 200, description = "All classes in creation order", body = [Class]),
    ),
)]
pub async fn list_classes(State(records): State<RecordService>) -> ApiResult<Json<Vec<Class>>> {
    Ok(Json(records.list_classes()?))
}

/// GET /turmas/{id} - Get class by ID, students included
#[utoipa::path(
    get,
    path = "/turmas/{id}",
    tag = "Turmas",
    params(
        ("id" = u64, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Class details", body = Class),
        (status = 400, description = "Malformed ID", body = ApiError),
        (status = 404, description = "Class not found", body = ApiError),
    ),
)]
pub async fn get_class(
    State(records): State<RecordService>,
    PathId(id): PathId<ClassId>,
) -> ApiResult<Json<Class>> {
    Ok(Json(records.get_class(id)?))
}

/// PUT /turmas/{id} - Update class
#[utoipa::path(
    put,
    path = "/turmas/{id}",
    tag = "Turmas",
    params(
        ("id" = u64, Path, description = "Class ID")
    ),
    request_body = ClassPatch,
    responses(
        (status = 200, description = "Class updated successfully", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Class not found", body = ApiError),
    ),
)]
pub async fn update_class(
    State(records): State<RecordService>,
    PathId(id): PathId<ClassId>,
    Json(patch): Json<ClassPatch>,
) -> ApiResult<Json<MessageResponse>> {
    records.update_class(id, patch)?;
    Ok(Json(MessageResponse::new(CLASS_UPDATED)))
}

/// DELETE /turmas/{id} - Delete class and its students
#[utoipa::path(
    delete,
    path = "/turmas/{id}",
    tag = "Turmas",
    params(
        ("id" = u64, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Class deleted successfully", body = MessageResponse),
        (status = 404, description = "Class not found", body = ApiError),
    ),
)]
pub async fn delete_class(
    State(records): State<RecordService>,
    PathId(id): PathId<ClassId>,
) -> ApiResult<Json<MessageResponse>> {
    records.delete_class(id)?;
    Ok(Json(MessageResponse::new(CLASS_DELETED)))
}

/// Create the class router, mounted at `/turmas`.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_classes).post(create_class))
        .route(
            "/:id",
            get(get_class).put(update_class).delete(delete_class),
        )
}

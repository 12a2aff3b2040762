//! Teacher REST API Routes
//!
//! Axum handlers for `/professores`. Updates use `POST` on the item path,
//! which existing clients depend on.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use escola_core::{Teacher, TeacherDraft, TeacherId, TeacherPatch};
use escola_storage::RecordService;

use crate::{
    error::{ApiError, ApiResult},
    extractors::PathId,
    state::AppState,
    types::{MessageResponse, TEACHER_DELETED, TEACHER_UPDATED},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /professores - Create a new teacher
#[utoipa::path(
    post,
    path = "/professores",
    tag = "Professores",
    request_body = TeacherDraft,
    responses(
        (status = 201, description = "Teacher created successfully", body = Teacher),
        (status = 400, description = "Missing or invalid field", body = ApiError),
    ),
)]
pub async fn create_teacher(
    State(records): State<RecordService>,
    Json(draft): Json<TeacherDraft>,
) -> ApiResult<impl IntoResponse> {
    let teacher = records.create_teacher(draft)?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

/// GET /professores - List all teachers
#[utoipa::path(
    get,
    path = "/professores",
    tag = "Professores",
    responses(
        (status = 200, description = "All teachers in creation order", body = [Teacher]),
    ),
)]
pub async fn list_teachers(State(records): State<RecordService>) -> ApiResult<Json<Vec<Teacher>>> {
    Ok(Json(records.list_teachers()?))
}

/// GET /professores/{id} - Get teacher by ID
#[utoipa::path(
    get,
    path = "/professores/{id}",
    tag = "Professores",
    params(
        ("id" = u64, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher details", body = Teacher),
        (status = 400, description = "Malformed ID", body = ApiError),
        (status = 404, description = "Teacher not found", body = ApiError),
    ),
)]
pub async fn get_teacher(
    State(records): State<RecordService>,
    PathId(id): PathId<TeacherId>,
) -> ApiResult<Json<Teacher>> {
    Ok(Json(records.get_teacher(id)?))
}

/// POST /professores/{id} - Update teacher
#[utoipa::path(
    post,
    path = "/professores/{id}",
    tag = "Professores",
    params(
        ("id" = u64, Path, description = "Teacher ID")
    ),
    request_body = TeacherPatch,
    responses(
        (status = 200, description = "Teacher updated successfully", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Teacher not found", body = ApiError),
    ),
)]
pub async fn update_teacher(
    State(records): State<RecordService>,
    PathId(id): PathId<TeacherId>,
    Json(patch): Json<TeacherPatch>,
) -> ApiResult<Json<MessageResponse>> {
    records.update_teacher(id, patch)?;
    Ok(Json(MessageResponse::new(TEACHER_UPDATED)))
}

/// DELETE /professores/{id} - Delete teacher
#[utoipa::path(
    delete,
    path = "/professores/{id}",
    tag = "Professores",
    params(
        ("id" = u64, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher deleted successfully", body = MessageResponse),
        (status = 404, description = "Teacher not found", body = ApiError),
    ),
)]
pub async fn delete_teacher(
    State(records): State<RecordService>,
    PathId(id): PathId<TeacherId>,
) -> ApiResult<Json<MessageResponse>> {
    records.delete_teacher(id)?;
    Ok(Json(MessageResponse::new(TEACHER_DELETED)))
}

// ============================================================================
// ROUTER
// ============================================================================

/// Create the teacher router, mounted at `/professores`.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teachers).post(create_teacher))
        .route(
            "/:id",
            get(get_teacher).post(update_teacher).delete(delete_teacher),
        )
}

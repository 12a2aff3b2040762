//! Custom path extractor for type-safe entity IDs.
//!
//! Provides `PathId<T>` extractor that works with EntityIdType newtypes
//! and reports malformed ids as a structured 400 response.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use escola_core::EntityIdType;

use crate::error::ApiError;

/// Extractor for type-safe entity IDs from path parameters.
///
/// # Example
///
/// ```rust,ignore
/// use escola_core::TeacherId;
///
/// async fn get_teacher(
///     State(records): State<RecordService>,
///     PathId(teacher_id): PathId<TeacherId>,
/// ) -> ApiResult<impl IntoResponse> {
///     Ok(Json(records.get_teacher(teacher_id)?))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathId<T: EntityIdType>(pub T);

/// Error returned when PathId extraction fails.
#[derive(Debug)]
pub struct PathIdError {
    pub entity_name: &'static str,
    pub path_param: String,
    pub message: String,
}

impl std::fmt::Display for PathIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid {} ID '{}': {}",
            self.entity_name, self.path_param, self.message
        )
    }
}

impl std::error::Error for PathIdError {}

impl IntoResponse for PathIdError {
    fn into_response(self) -> Response {
        ApiError::invalid_format("id", "a non-negative integer")
            .with_details(serde_json::json!({
                "entity_type": self.entity_name,
                "path_param": self.path_param,
                "reason": self.message,
            }))
            .into_response()
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for PathId<T>
where
    S: Send + Sync,
    T: EntityIdType,
{
    type Rejection = PathIdError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<u64> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| PathIdError {
                entity_name: T::ENTITY_NAME,
                path_param: parts.uri.path().to_string(),
                message: e.body_text(),
            })?;

        Ok(PathId(T::new(raw)))
    }
}

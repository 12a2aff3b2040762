//! OpenAPI Specification for ESCOLA API
//!
//! Generated by utoipa from the route annotations and schema derives.

use utoipa::OpenApi;

use crate::error::{ApiError, ErrorCode};
use crate::routes::health::{HealthDetails, HealthResponse, HealthStatus, StoreHealth};
use crate::routes::{class, health, reset, teacher};
use crate::types::MessageResponse;

use escola_core::{
    Class, ClassDraft, ClassPatch, EntityType, Student, StudentDraft, Teacher, TeacherDraft,
    TeacherPatch,
};

/// OpenAPI document for ESCOLA API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ESCOLA API",
        version = "0.1.0",
        description = "In-memory record service for teachers (professores) and classes (turmas)",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local Development")
    ),
    tags(
        (name = "Professores", description = "Teacher records"),
        (name = "Turmas", description = "Class records with embedded students"),
        (name = "Reset", description = "Test isolation: clear every record"),
        (name = "Health", description = "Liveness and readiness probes")
    ),
    paths(
        // === Teacher Routes ===
        teacher::create_teacher,
        teacher::list_teachers,
        teacher::get_teacher,
        teacher::update_teacher,
        teacher::delete_teacher,

        // === Class Routes ===
        class::create_class,
        class::list_classes,
        class::get_class,
        class::update_class,
        class::delete_class,

        // === Maintenance ===
        reset::reset,
        health::ping,
        health::liveness,
        health::readiness,
    ),
    components(
        schemas(
            // === Records ===
            Teacher, Class, Student, EntityType,

            // === Request Types ===
            TeacherDraft, TeacherPatch, ClassDraft, ClassPatch, StudentDraft,

            // === Response Types ===
            MessageResponse, HealthResponse, HealthStatus, HealthDetails, StoreHealth,

            // === Error Types ===
            ApiError, ErrorCode,
        )
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate OpenAPI spec as JSON string.
    pub fn to_json() -> Result<String, serde_json::Error> {
        let openapi = Self::openapi();
        serde_json::to_string_pretty(&openapi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_generation() {
        let openapi = ApiDoc::openapi();
        assert_eq!(openapi.info.title, "ESCOLA API");
        assert_eq!(openapi.info.version, "0.1.0");
    }

    #[test]
    fn test_openapi_paths_exist() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        assert!(paths.contains_key("/professores"));
        assert!(paths.contains_key("/professores/{id}"));
        assert!(paths.contains_key("/turmas"));
        assert!(paths.contains_key("/turmas/{id}"));
        assert!(paths.contains_key("/reseta"));
        assert!(paths.contains_key("/health/ready"));
    }

    #[test]
    fn test_update_verbs_are_asymmetric() -> Result<(), String> {
        let openapi = ApiDoc::openapi();
        let teacher_item = openapi
            .paths
            .paths
            .get("/professores/{id}")
            .ok_or("teacher item path missing")?;
        let class_item = openapi
            .paths
            .paths
            .get("/turmas/{id}")
            .ok_or("class item path missing")?;

        assert!(teacher_item.post.is_some());
        assert!(teacher_item.put.is_none());
        assert!(class_item.put.is_some());
        assert!(class_item.post.is_none());
        Ok(())
    }

    #[test]
    fn test_openapi_json_serialization() -> Result<(), String> {
        let json = ApiDoc::to_json().map_err(|e| format!("Failed to serialize OpenAPI: {}", e))?;
        serde_json::from_str::<serde_json::Value>(&json)
            .map_err(|e| format!("Generated JSON invalid: {}", e))?;
        assert!(json.contains("ESCOLA API"));
        assert!(json.contains("professor_id"));
        Ok(())
    }
}

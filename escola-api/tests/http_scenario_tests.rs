//! End-to-end HTTP scenarios for the ESCOLA API.
//!
//! These replay the client acceptance suite: every test starts from an
//! empty store, exactly as the client does by calling `POST /reseta` first.

use axum::http::StatusCode;
use escola_api::{ApiConfig, MessageResponse};
use escola_test_utils::fixtures;
use escola_test_utils::{EntityIdType, TeacherId};
use serde_json::{json, Value};

#[path = "support/http.rs"]
mod test_http_support;
use test_http_support::{TestApp, TestResult};

fn dr_joao() -> Value {
    json!(fixtures::dr_joao_teacher())
}

fn prof_joao() -> Value {
    json!(fixtures::prof_joao_teacher())
}

// ============================================================================
// PROFESSORES
// ============================================================================

#[tokio::test]
async fn test_create_teacher_returns_201_with_id() -> TestResult {
    let app = TestApp::new()?;
    let (status, body) = app.post("/professores", &dr_joao()).await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["nome"], "Dr. João");
    assert_eq!(body["observacoes"], "Especialista em álgebra");
    Ok(())
}

#[tokio::test]
async fn test_list_teachers_in_creation_order() -> TestResult {
    let app = TestApp::new()?;
    let (status, body) = app.get("/professores").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    app.create("/professores", &dr_joao()).await?;
    app.create(
        "/professores",
        &json!({"nome": "Dr. Marcos", "idade": 40, "materia": "Fisica", "observacoes": "professor senior"}),
    )
    .await?;

    let (status, body) = app.get("/professores").await?;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .ok_or("list is not an array")?
        .iter()
        .filter_map(|t| t["nome"].as_str())
        .collect();
    assert_eq!(names, vec!["Dr. João", "Dr. Marcos"]);
    Ok(())
}

#[tokio::test]
async fn test_get_teacher_by_id_returns_all_fields() -> TestResult {
    let app = TestApp::new()?;
    let id = app.create("/professores", &dr_joao()).await?;

    let (status, body) = app.get(&format!("/professores/{}", id)).await?;
    assert_eq!(status, StatusCode::OK);

    let mut expected = dr_joao();
    expected["id"] = json!(id);
    assert_eq!(body, expected);
    Ok(())
}

#[tokio::test]
async fn test_teacher_without_notes_gets_empty_string() -> TestResult {
    let app = TestApp::new()?;
    let (status, body) = app
        .post(
            "/professores",
            &json!({"nome": "Ana", "idade": 35, "materia": "História"}),
        )
        .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["observacoes"], "");
    Ok(())
}

#[tokio::test]
async fn test_update_teacher_via_post() -> TestResult {
    let app = TestApp::new()?;
    let id = app.create("/professores", &prof_joao()).await?;

    let (status, body) = app
        .post(&format!("/professores/{}", id), &fixtures::updated_teacher_patch())
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"mensagem": "Professor atualizado com sucesso!"}));

    let (_, fetched) = app.get(&format!("/professores/{}", id)).await?;
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["nome"], "Prof. João Atualizado");
    assert_eq!(fetched["idade"], 41);
    assert_eq!(fetched["materia"], "Física");
    assert_eq!(fetched["observacoes"], "Professor com novas observações");
    Ok(())
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored() -> TestResult {
    let app = TestApp::new()?;
    app.create("/professores", &dr_joao()).await?;

    let mut body = prof_joao();
    body["id"] = json!(1);
    let (status, created) = app.post("/professores", &body).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 2);

    let (_, first) = app.get("/professores/1").await?;
    assert_eq!(first["nome"], "Dr. João");
    Ok(())
}

#[tokio::test]
async fn test_partial_teacher_update_keeps_other_fields() -> TestResult {
    let app = TestApp::new()?;
    let id = app.create("/professores", &prof_joao()).await?;

    let (status, _) = app
        .post(&format!("/professores/{}", id), &json!({"idade": 45}))
        .await?;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = app.get(&format!("/professores/{}", id)).await?;
    assert_eq!(fetched["idade"], 45);
    assert_eq!(fetched["nome"], "Prof. João");
    Ok(())
}

#[tokio::test]
async fn test_empty_teacher_update_is_rejected() -> TestResult {
    let app = TestApp::new()?;
    let id = app.create("/professores", &prof_joao()).await?;

    let (status, body) = app.post(&format!("/professores/{}", id), &json!({})).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    Ok(())
}

#[tokio::test]
async fn test_delete_teacher() -> TestResult {
    let app = TestApp::new()?;
    let id = app
        .create(
            "/professores",
            &json!({"nome": "Dr. José", "idade": 40, "materia": "Matemática", "observacoes": "Professor de álgebra"}),
        )
        .await?;

    let (status, body) = app.delete(&format!("/professores/{}", id)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"mensagem": "Professor removido com sucesso!"}));

    let (status, body) = app.get(&format!("/professores/{}", id)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "TEACHER_NOT_FOUND");

    let (status, _) = app.delete(&format!("/professores/{}", id)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_unknown_teacher_is_404_on_every_verb() -> TestResult {
    let app = TestApp::new()?;

    let (status, _) = app.get("/professores/99").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.post("/professores/99", &prof_joao()).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete("/professores/99").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_missing_teacher_field_is_400_and_named() -> TestResult {
    let app = TestApp::new()?;
    let (status, body) = app
        .post("/professores", &json!({"nome": "Sem Idade", "materia": "Artes"}))
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_FIELD");
    assert_eq!(body["details"]["field"], "idade");

    // The rejected create must not consume an id.
    let id = app.create("/professores", &dr_joao()).await?;
    assert_eq!(id, 1);
    Ok(())
}

#[tokio::test]
async fn test_malformed_id_is_400() -> TestResult {
    let app = TestApp::new()?;

    let (status, body) = app.get("/professores/abc").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FORMAT");
    assert_eq!(body["details"]["entity_type"], "Teacher");

    let (status, _) = app.delete("/turmas/-1").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_wrongly_typed_body_is_client_error() -> TestResult {
    let app = TestApp::new()?;
    let (status, _) = app
        .post(
            "/professores",
            &json!({"nome": "Dr. João", "idade": "quarenta", "materia": "Matemática"}),
        )
        .await?;

    assert!(status.is_client_error(), "got {}", status);
    Ok(())
}

// ============================================================================
// TURMAS
// ============================================================================

#[tokio::test]
async fn test_create_class_with_students_in_order() -> TestResult {
    let app = TestApp::new()?;
    let (status, body) = app
        .post(
            "/turmas",
            &fixtures::class_9_ano_with_students(TeacherId::new(1)),
        )
        .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(
        body["alunos"],
        json!([{"nome": "João"}, {"nome": "Maria"}, {"nome": "Ana"}])
    );
    Ok(())
}

#[tokio::test]
async fn test_class_without_students_has_empty_list() -> TestResult {
    let app = TestApp::new()?;
    let teacher_id = app.create("/professores", &prof_joao()).await?;

    let draft = json!(fixtures::class_without_students(TeacherId::new(teacher_id)));
    let id = app.create("/turmas", &draft).await?;

    let (status, body) = app.get(&format!("/turmas/{}", id)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["descricao"], "1° Ano");
    assert_eq!(body["professor_id"], teacher_id);
    assert_eq!(body["ativo"], true);
    assert_eq!(body["alunos"], json!([]));
    Ok(())
}

#[tokio::test]
async fn test_class_may_reference_missing_teacher() -> TestResult {
    let app = TestApp::new()?;
    let id = app
        .create(
            "/turmas",
            &json!({"descricao": "3° Ano", "professor_id": 2, "ativo": true}),
        )
        .await?;

    let (status, body) = app.get(&format!("/turmas/{}", id)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["professor_id"], 2);

    let (_, list) = app.get("/turmas").await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn test_missing_class_field_is_400() -> TestResult {
    let app = TestApp::new()?;
    let (status, body) = app
        .post("/turmas", &json!({"descricao": "8° Ano", "professor_id": 4}))
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "ativo");
    Ok(())
}

#[tokio::test]
async fn test_student_without_name_is_400() -> TestResult {
    let app = TestApp::new()?;
    let (status, body) = app
        .post(
            "/turmas",
            &json!({"descricao": "8° Ano", "professor_id": 4, "ativo": true, "alunos": [{"nome": "kaka"}, {}]}),
        )
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_FIELD");
    assert_eq!(body["details"]["field"], "alunos[1].nome");
    assert_eq!(app.records.statistics()?.class_count, 0);

    // Presence is the only requirement on a student name.
    let (status, created) = app
        .post(
            "/turmas",
            &json!({"descricao": "8° Ano", "professor_id": 4, "ativo": true, "alunos": [{"nome": ""}]}),
        )
        .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["alunos"], json!([{"nome": ""}]));
    Ok(())
}

#[tokio::test]
async fn test_update_class_via_put() -> TestResult {
    let app = TestApp::new()?;
    let teacher_id = app.create("/professores", &prof_joao()).await?;
    let id = app
        .create(
            "/turmas",
            &json!(fixtures::math_class(TeacherId::new(teacher_id))),
        )
        .await?;

    let (status, body) = app
        .put(
            &format!("/turmas/{}", id),
            &fixtures::physics_class_patch(TeacherId::new(teacher_id)),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"mensagem": "Turma atualizada com sucesso!"}));

    let (_, fetched) = app.get(&format!("/turmas/{}", id)).await?;
    assert_eq!(fetched["descricao"], "Turma de Física");
    assert_eq!(fetched["professor_id"], teacher_id);
    assert_eq!(fetched["ativo"], false);
    assert_eq!(fetched["alunos"], json!([{"nome": "Ana"}]));
    Ok(())
}

#[tokio::test]
async fn test_class_update_verb_is_put_only() -> TestResult {
    let app = TestApp::new()?;
    let id = app
        .create(
            "/turmas",
            &json!({"descricao": "7° Ano", "professor_id": 1, "ativo": true}),
        )
        .await?;

    let (status, _) = app
        .post(&format!("/turmas/{}", id), &json!({"ativo": false}))
        .await?;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = app
        .put("/professores/1", &json!({"idade": 50}))
        .await?;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    Ok(())
}

#[tokio::test]
async fn test_delete_class_keeps_teacher() -> TestResult {
    let app = TestApp::new()?;
    let teacher_id = app.create("/professores", &prof_joao()).await?;
    let id = app
        .create(
            "/turmas",
            &json!({"descricao": "8° Ano", "professor_id": teacher_id, "ativo": true, "alunos": [{"nome": "kaka"}, {"nome": "Ana"}, {"nome": "Bruna"}]}),
        )
        .await?;

    let (status, body) = app.delete(&format!("/turmas/{}", id)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"mensagem": "Turma removida com sucesso!"}));

    let (status, body) = app.get(&format!("/turmas/{}", id)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "CLASS_NOT_FOUND");

    let (status, _) = app.get(&format!("/professores/{}", teacher_id)).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn test_deleting_teacher_does_not_cascade() -> TestResult {
    let app = TestApp::new()?;
    let teacher_id = app.create("/professores", &prof_joao()).await?;
    let class_id = app
        .create(
            "/turmas",
            &json!({"descricao": "6° Ano", "professor_id": teacher_id, "ativo": true}),
        )
        .await?;

    app.delete(&format!("/professores/{}", teacher_id)).await?;

    let (status, body) = app.get(&format!("/turmas/{}", class_id)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["professor_id"], teacher_id);
    Ok(())
}

// ============================================================================
// RESET CONTROL
// ============================================================================

#[tokio::test]
async fn test_reset_clears_store_and_restarts_ids() -> TestResult {
    let app = TestApp::new()?;
    app.create("/professores", &dr_joao()).await?;
    app.create("/professores", &prof_joao()).await?;
    app.create(
        "/turmas",
        &json!({"descricao": "9° Ano", "professor_id": 1, "ativo": true}),
    )
    .await?;

    let (status, body) = app.send(axum::http::Method::POST, "/reseta", None).await?;
    assert_eq!(status, StatusCode::OK);
    let message: MessageResponse = serde_json::from_value(body)?;
    assert_eq!(message.mensagem, "Banco resetado com sucesso!");

    let (_, teachers) = app.get("/professores").await?;
    assert_eq!(teachers, json!([]));
    let (_, classes) = app.get("/turmas").await?;
    assert_eq!(classes, json!([]));

    assert_eq!(app.create("/professores", &dr_joao()).await?, 1);
    assert_eq!(
        app.create(
            "/turmas",
            &json!({"descricao": "1° Ano", "professor_id": 1, "ativo": true})
        )
        .await?,
        1
    );
    Ok(())
}

#[tokio::test]
async fn test_reset_is_idempotent() -> TestResult {
    let app = TestApp::new()?;
    app.create("/professores", &dr_joao()).await?;

    for _ in 0..2 {
        let (status, _) = app.send(axum::http::Method::POST, "/reseta", None).await?;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(app.records.statistics()?.teacher_count, 0);
    Ok(())
}

#[tokio::test]
async fn test_reset_route_absent_when_disabled() -> TestResult {
    let config = ApiConfig {
        reset_enabled: false,
        ..Default::default()
    };
    let app = TestApp::with_config(&config)?;
    app.create("/professores", &dr_joao()).await?;

    let (status, _) = app.send(axum::http::Method::POST, "/reseta", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.records.statistics()?.teacher_count, 1);
    Ok(())
}

// ============================================================================
// HEALTH AND DOCS
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() -> TestResult {
    let app = TestApp::new()?;

    let (status, body) = app.get("/health/ping").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("pong"));

    let (status, body) = app.get("/health/live").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    Ok(())
}

#[tokio::test]
async fn test_readiness_reports_record_counts() -> TestResult {
    let app = TestApp::new()?;
    app.create("/professores", &dr_joao()).await?;
    app.create(
        "/turmas",
        &json!({"descricao": "9° Ano", "professor_id": 1, "ativo": true, "alunos": [{"nome": "João"}, {"nome": "Maria"}]}),
    )
    .await?;

    let (status, body) = app.get("/health/ready").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["details"]["store"]["teachers"], 1);
    assert_eq!(body["details"]["store"]["classes"], 1);
    assert_eq!(body["details"]["store"]["students"], 2);
    Ok(())
}

#[tokio::test]
async fn test_openapi_document_is_served() -> TestResult {
    let app = TestApp::new()?;
    let (status, body) = app.get("/openapi.json").await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/professores/{id}"]["post"].is_object());
    assert!(body["paths"]["/turmas/{id}"]["put"].is_object());
    assert!(body["paths"]["/reseta"]["post"].is_object());
    Ok(())
}

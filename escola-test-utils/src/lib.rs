//! ESCOLA Test Utilities
//!
//! Centralized test infrastructure for the ESCOLA workspace:
//! - Proptest generators for drafts, patches and ids
//! - Test fixtures mirroring the records used by the client test suite
//! - Custom assertions for ESCOLA-specific validation

// Re-export the storage entry points tests reach for most
pub use escola_storage::{InMemoryStorage, RecordService, StorageStatistics};

// Re-export core types for convenience
pub use escola_core::{
    Class, ClassDraft, ClassPatch, EntityType, EscolaError, EscolaResult, StorageError, Student,
    StudentDraft, Teacher, TeacherDraft, TeacherPatch, ValidationError,
    // Strongly-typed entity IDs
    ClassId, EntityIdType, TeacherId,
};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for generating ESCOLA payloads.
    //!
    //! Every draft and patch produced here passes validation, so properties
    //! can assert on successful operations without filtering.

    use super::*;
    use proptest::prelude::*;

    // === Identity Generators ===

    /// Generate a TeacherId in the range a fresh store would hand out.
    pub fn arb_teacher_id() -> impl Strategy<Value = TeacherId> {
        (1u64..1000).prop_map(TeacherId::new)
    }

    // === Field Generators ===

    /// Non-blank display name, accents included.
    pub fn arb_name() -> impl Strategy<Value = String> {
        "[A-Za-zÀ-ú][A-Za-zÀ-ú .]{0,30}"
    }

    pub fn arb_age() -> impl Strategy<Value = i32> {
        18i32..90
    }

    pub fn arb_subject() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Matemática".to_string()),
            Just("Física".to_string()),
            Just("História".to_string()),
            Just("Português".to_string()),
            "[a-z]{3,12}",
        ]
    }

    pub fn arb_notes() -> impl Strategy<Value = String> {
        "[A-Za-z ]{0,40}"
    }

    // === Draft Generators ===

    /// Generate a valid TeacherDraft. `observacoes` is present about half the time.
    pub fn arb_teacher_draft() -> impl Strategy<Value = TeacherDraft> {
        (arb_name(), arb_age(), arb_subject(), prop::option::of(arb_notes())).prop_map(
            |(name, age, subject, notes)| TeacherDraft {
                name: Some(name),
                age: Some(age),
                subject: Some(subject),
                notes,
            },
        )
    }

    pub fn arb_student_draft() -> impl Strategy<Value = StudentDraft> {
        arb_name().prop_map(StudentDraft::new)
    }

    /// Generate a valid ClassDraft. `alunos` may be absent, empty or populated.
    pub fn arb_class_draft() -> impl Strategy<Value = ClassDraft> {
        (
            arb_name(),
            arb_teacher_id(),
            any::<bool>(),
            prop::option::of(prop::collection::vec(arb_student_draft(), 0..6)),
        )
            .prop_map(|(description, teacher_id, active, students)| ClassDraft {
                description: Some(description),
                teacher_id: Some(teacher_id),
                active: Some(active),
                students,
            })
    }

    // === Patch Generators ===

    /// Generate a non-empty TeacherPatch.
    pub fn arb_teacher_patch() -> impl Strategy<Value = TeacherPatch> {
        (
            prop::option::of(arb_name()),
            prop::option::of(arb_age()),
            prop::option::of(arb_subject()),
            prop::option::of(arb_notes()),
        )
            .prop_map(|(name, age, subject, notes)| TeacherPatch {
                name,
                age,
                subject,
                notes,
            })
            .prop_filter("patch must carry a field", |patch| !patch.is_empty())
    }

    /// Generate a non-empty ClassPatch.
    pub fn arb_class_patch() -> impl Strategy<Value = ClassPatch> {
        (
            prop::option::of(arb_name()),
            prop::option::of(arb_teacher_id()),
            prop::option::of(any::<bool>()),
        )
            .prop_map(|(description, teacher_id, active)| ClassPatch {
                description,
                teacher_id,
                active,
            })
            .prop_filter("patch must carry a field", |patch| !patch.is_empty())
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built records matching the client acceptance scenarios.

    use super::*;

    /// "Dr. João", 40, Matemática.
    pub fn dr_joao_teacher() -> TeacherDraft {
        TeacherDraft::new("Dr. João", 40, "Matemática", "Especialista em álgebra")
    }

    /// "Prof. João", 40, Matemática.
    pub fn prof_joao_teacher() -> TeacherDraft {
        TeacherDraft::new("Prof. João", 40, "Matemática", "Professor experiente")
    }

    /// Full replacement for a teacher created from either fixture above.
    pub fn updated_teacher_patch() -> TeacherPatch {
        TeacherPatch::from(TeacherDraft::new(
            "Prof. João Atualizado",
            41,
            "Física",
            "Professor com novas observações",
        ))
    }

    /// "9° Ano" with João, Maria and Ana enrolled.
    pub fn class_9_ano_with_students(teacher_id: TeacherId) -> ClassDraft {
        ClassDraft::new("9° Ano", teacher_id, true).with_students(["João", "Maria", "Ana"])
    }

    /// "1° Ano" with no `alunos` key at all.
    pub fn class_without_students(teacher_id: TeacherId) -> ClassDraft {
        ClassDraft::new("1° Ano", teacher_id, true)
    }

    /// "Turma de Matemática" with a single student.
    pub fn math_class(teacher_id: TeacherId) -> ClassDraft {
        ClassDraft::new("Turma de Matemática", teacher_id, true).with_students(["Ana"])
    }

    /// Full replacement for a class, students excluded.
    pub fn physics_class_patch(teacher_id: TeacherId) -> ClassPatch {
        ClassPatch {
            description: Some("Turma de Física".to_string()),
            teacher_id: Some(teacher_id),
            active: Some(false),
        }
    }

    /// Service holding one teacher and one class that references it.
    pub fn seeded_service() -> EscolaResult<(RecordService, Teacher, Class)> {
        let service = RecordService::in_memory();
        let teacher = service.create_teacher(dr_joao_teacher())?;
        let class = service.create_class(class_9_ano_with_students(teacher.id))?;
        Ok((service, teacher, class))
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Custom assertion functions for ESCOLA-specific validation.

    use super::*;

    /// Assert that an EscolaResult is Ok.
    #[track_caller]
    pub fn assert_ok<T: std::fmt::Debug>(result: &EscolaResult<T>) {
        assert!(result.is_ok(), "Expected Ok, got Err: {:?}", result);
    }

    /// Assert that an EscolaResult is a NotFound storage error.
    #[track_caller]
    pub fn assert_not_found<T: std::fmt::Debug>(result: &EscolaResult<T>, entity_type: EntityType) {
        match result {
            Err(EscolaError::Storage(StorageError::NotFound { entity_type: et, .. })) => {
                assert_eq!(*et, entity_type, "Wrong entity type in NotFound error");
            }
            other => panic!("Expected NotFound error for {:?}, got: {:?}", entity_type, other),
        }
    }

    /// Assert that an EscolaResult is a Validation error.
    #[track_caller]
    pub fn assert_validation_error<T: std::fmt::Debug>(result: &EscolaResult<T>) {
        match result {
            Err(EscolaError::Validation(_)) => {}
            other => panic!("Expected Validation error, got: {:?}", other),
        }
    }

    /// Assert that validation failed on a specific missing field.
    #[track_caller]
    pub fn assert_missing_field<T: std::fmt::Debug>(result: &EscolaResult<T>, field: &str) {
        match result {
            Err(EscolaError::Validation(ValidationError::RequiredFieldMissing { field: f })) => {
                assert_eq!(f, field, "Wrong field in RequiredFieldMissing error");
            }
            other => panic!("Expected missing field '{}', got: {:?}", field, other),
        }
    }

    /// Assert that a stored teacher carries exactly the draft's values.
    #[track_caller]
    pub fn assert_teacher_matches(teacher: &Teacher, draft: &TeacherDraft) {
        assert_eq!(Some(&teacher.name), draft.name.as_ref(), "nome differs");
        assert_eq!(Some(teacher.age), draft.age, "idade differs");
        assert_eq!(Some(&teacher.subject), draft.subject.as_ref(), "materia differs");
        assert_eq!(
            teacher.notes,
            draft.notes.clone().unwrap_or_default(),
            "observacoes differs"
        );
    }

    /// Assert that a stored class carries exactly the draft's values.
    #[track_caller]
    pub fn assert_class_matches(class: &Class, draft: &ClassDraft) {
        assert_eq!(Some(&class.description), draft.description.as_ref(), "descricao differs");
        assert_eq!(Some(class.teacher_id), draft.teacher_id, "professor_id differs");
        assert_eq!(Some(class.active), draft.active, "ativo differs");

        let expected: Vec<Option<&String>> = draft
            .students
            .iter()
            .flatten()
            .map(|s| s.name.as_ref())
            .collect();
        let actual: Vec<Option<&String>> = class.students.iter().map(|s| Some(&s.name)).collect();
        assert_eq!(actual, expected, "alunos differ");
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Record Service
//!
//! Facade over a [`StorageTrait`] implementation. Validates inbound drafts
//! and patches, turns absent records into typed not-found errors, and owns the
//! reset entry point. The HTTP adapter decides status codes; nothing here
//! knows about the wire beyond the field names it reports in errors.

use std::sync::Arc;

use escola_core::{
    Class, ClassDraft, ClassId, ClassPatch, DanglingReference, EntityType, EscolaResult,
    StorageError, Student, StudentDraft, Teacher, TeacherDraft, TeacherId, TeacherPatch,
    ValidationError,
};

use crate::{
    ClassUpdate, InMemoryStorage, NewClass, NewTeacher, StorageStatistics, StorageTrait,
    TeacherUpdate,
};

/// Create/list/get/update/delete for teachers and classes, plus reset.
#[derive(Clone)]
pub struct RecordService {
    storage: Arc<dyn StorageTrait>,
}

impl std::fmt::Debug for RecordService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordService").finish_non_exhaustive()
    }
}

impl RecordService {
    pub fn new(storage: Arc<dyn StorageTrait>) -> Self {
        Self { storage }
    }

    /// Service backed by a fresh, empty [`InMemoryStorage`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStorage::new()))
    }

    // ========================================================================
    // TEACHERS
    // ========================================================================

    pub fn create_teacher(&self, draft: TeacherDraft) -> EscolaResult<Teacher> {
        let new = validate_teacher_draft(draft)?;
        let teacher = self.storage.teacher_insert(new)?;
        tracing::info!(teacher_id = %teacher.id, "Teacher created");
        Ok(teacher)
    }

    pub fn list_teachers(&self) -> EscolaResult<Vec<Teacher>> {
        self.storage.teacher_list()
    }

    pub fn get_teacher(&self, id: TeacherId) -> EscolaResult<Teacher> {
        self.storage
            .teacher_get(id)?
            .ok_or_else(|| StorageError::teacher_not_found(id).into())
    }

    /// Replace the fields present in `patch`. The id never changes.
    pub fn update_teacher(&self, id: TeacherId, patch: TeacherPatch) -> EscolaResult<()> {
        let update = validate_teacher_patch(patch)?;
        self.storage.teacher_update(id, update)?;
        tracing::info!(teacher_id = %id, "Teacher updated");
        Ok(())
    }

    /// Remove a teacher. Classes that reference it keep the now-dangling id.
    pub fn delete_teacher(&self, id: TeacherId) -> EscolaResult<()> {
        self.storage.teacher_delete(id)?;
        tracing::info!(teacher_id = %id, "Teacher deleted");
        Ok(())
    }

    // ========================================================================
    // CLASSES
    // ========================================================================

    /// Create a class. The teacher reference is not enforced; a missing
    /// teacher is logged as a dangling reference and the class is kept.
    pub fn create_class(&self, draft: ClassDraft) -> EscolaResult<Class> {
        let new = validate_class_draft(draft)?;
        let class = self.storage.class_insert(new)?;

        // The class is already stored; the reference check only ever warns.
        match self.storage.teacher_get(class.teacher_id) {
            Ok(Some(_)) => {}
            Ok(None) => {
                let warning = DanglingReference {
                    class_id: class.id,
                    teacher_id: class.teacher_id,
                };
                tracing::warn!(class_id = %class.id, teacher_id = %class.teacher_id, "{}", warning);
            }
            Err(e) => {
                tracing::warn!(
                    class_id = %class.id,
                    teacher_id = %class.teacher_id,
                    error = %e,
                    "Teacher reference could not be checked"
                );
            }
        }

        tracing::info!(
            class_id = %class.id,
            students = class.students.len(),
            "Class created"
        );
        Ok(class)
    }

    pub fn list_classes(&self) -> EscolaResult<Vec<Class>> {
        self.storage.class_list()
    }

    pub fn get_class(&self, id: ClassId) -> EscolaResult<Class> {
        self.storage
            .class_get(id)?
            .ok_or_else(|| StorageError::class_not_found(id).into())
    }

    /// Replace description, teacher reference and active flag. Students stay.
    pub fn update_class(&self, id: ClassId, patch: ClassPatch) -> EscolaResult<()> {
        let update = validate_class_patch(patch)?;
        self.storage.class_update(id, update)?;
        tracing::info!(class_id = %id, "Class updated");
        Ok(())
    }

    /// Remove a class together with its students.
    pub fn delete_class(&self, id: ClassId) -> EscolaResult<()> {
        self.storage.class_delete(id)?;
        tracing::info!(class_id = %id, "Class deleted");
        Ok(())
    }

    // ========================================================================
    // MAINTENANCE
    // ========================================================================

    /// Clear both stores and rewind both allocators. Idempotent.
    pub fn reset(&self) {
        self.storage.reset();
        tracing::info!("Record store reset");
    }

    pub fn statistics(&self) -> EscolaResult<StorageStatistics> {
        self.storage.statistics()
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

fn require<T>(value: Option<T>, field: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::missing(field))
}

fn require_name(value: Option<String>, field: &str) -> Result<String, ValidationError> {
    let name = require(value, field)?;
    check_name(&name, field)?;
    Ok(name)
}

fn check_name(name: &str, field: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::invalid(field, "must not be empty"));
    }
    Ok(())
}

/// Check a teacher draft. Field names in errors are the wire names.
pub fn validate_teacher_draft(draft: TeacherDraft) -> Result<NewTeacher, ValidationError> {
    Ok(NewTeacher {
        name: require_name(draft.name, "nome")?,
        age: require(draft.age, "idade")?,
        subject: require(draft.subject, "materia")?,
        notes: draft.notes.unwrap_or_default(),
    })
}

pub fn validate_teacher_patch(patch: TeacherPatch) -> Result<TeacherUpdate, ValidationError> {
    if patch.is_empty() {
        return Err(ValidationError::EmptyUpdate {
            entity_type: EntityType::Teacher,
        });
    }
    if let Some(ref name) = patch.name {
        check_name(name, "nome")?;
    }
    Ok(TeacherUpdate {
        name: patch.name,
        age: patch.age,
        subject: patch.subject,
        notes: patch.notes,
    })
}

pub fn validate_class_draft(draft: ClassDraft) -> Result<NewClass, ValidationError> {
    let description = require(draft.description, "descricao")?;
    let teacher_id = require(draft.teacher_id, "professor_id")?;
    let active = require(draft.active, "ativo")?;
    let students = draft
        .students
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, student)| validate_student(student, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NewClass {
        description,
        teacher_id,
        active,
        students,
    })
}

fn validate_student(draft: StudentDraft, index: usize) -> Result<Student, ValidationError> {
    let field = format!("alunos[{}].nome", index);
    require(draft.name, &field).map(|name| Student { name })
}

pub fn validate_class_patch(patch: ClassPatch) -> Result<ClassUpdate, ValidationError> {
    if patch.is_empty() {
        return Err(ValidationError::EmptyUpdate {
            entity_type: EntityType::Class,
        });
    }
    Ok(ClassUpdate {
        description: patch.description,
        teacher_id: patch.teacher_id,
        active: patch.active,
    })
}

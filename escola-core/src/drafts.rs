//! Inbound payloads for creating and updating records.
//!
//! Every field is optional at the type level so that a missing field is
//! reported by the record service as a validation error, naming the field,
//! rather than as an opaque decode failure. Unknown fields (including a
//! client-supplied `id`) are ignored.

use crate::TeacherId;
use serde::{Deserialize, Serialize};

/// Request to create a new teacher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TeacherDraft {
    /// Teacher name (required, non-blank)
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Age (required)
    #[serde(rename = "idade", default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    /// Subject taught (required)
    #[serde(rename = "materia", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Free-form notes (optional, defaults to empty)
    #[serde(rename = "observacoes", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TeacherDraft {
    /// Draft with every field populated.
    pub fn new(
        name: impl Into<String>,
        age: i32,
        subject: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            age: Some(age),
            subject: Some(subject.into()),
            notes: Some(notes.into()),
        }
    }
}

/// Request to update an existing teacher. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TeacherPatch {
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "idade", default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(rename = "materia", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "observacoes", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TeacherPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.subject.is_none() && self.notes.is_none()
    }
}

impl From<TeacherDraft> for TeacherPatch {
    fn from(draft: TeacherDraft) -> Self {
        Self {
            name: draft.name,
            age: draft.age,
            subject: draft.subject,
            notes: draft.notes,
        }
    }
}

/// Student entry inside a class creation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StudentDraft {
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl StudentDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Request to create a new class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClassDraft {
    /// Class description (required)
    #[serde(rename = "descricao", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Referenced teacher (required, not checked for existence)
    #[serde(rename = "professor_id", default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<u64>))]
    pub teacher_id: Option<TeacherId>,
    /// Whether the class is active (required)
    #[serde(rename = "ativo", default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Students in enrollment order (optional, defaults to empty)
    #[serde(rename = "alunos", default, skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<StudentDraft>>,
}

impl ClassDraft {
    /// Draft with the required fields populated and no students.
    pub fn new(description: impl Into<String>, teacher_id: TeacherId, active: bool) -> Self {
        Self {
            description: Some(description.into()),
            teacher_id: Some(teacher_id),
            active: Some(active),
            students: None,
        }
    }

    pub fn with_students<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.students = Some(names.into_iter().map(StudentDraft::new).collect());
        self
    }
}

/// Request to update an existing class.
///
/// Students are deliberately absent: an `alunos` key in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClassPatch {
    #[serde(rename = "descricao", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "professor_id", default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<u64>))]
    pub teacher_id: Option<TeacherId>,
    #[serde(rename = "ativo", default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl ClassPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.teacher_id.is_none() && self.active.is_none()
    }
}

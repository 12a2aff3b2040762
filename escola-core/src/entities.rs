//! Core entity structures
//!
//! Field names on the wire are Portuguese (`nome`, `idade`, ...), matching the
//! client contract; the Rust side uses English names.

use crate::{ClassId, TeacherId};
use serde::{Deserialize, Serialize};

/// Teacher - top-level record representing an instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Teacher {
    #[cfg_attr(feature = "openapi", schema(value_type = u64))]
    pub id: TeacherId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "idade")]
    pub age: i32,
    #[serde(rename = "materia")]
    pub subject: String,
    #[serde(rename = "observacoes", default)]
    pub notes: String,
}

/// Class - a cohort referencing a Teacher and owning its Students.
///
/// `teacher_id` is a soft reference: it may point at a teacher that was
/// never created or has since been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Class {
    #[cfg_attr(feature = "openapi", schema(value_type = u64))]
    pub id: ClassId,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "professor_id")]
    #[cfg_attr(feature = "openapi", schema(value_type = u64))]
    pub teacher_id: TeacherId,
    #[serde(rename = "ativo")]
    pub active: bool,
    #[serde(rename = "alunos", default)]
    pub students: Vec<Student>,
}

/// Student - value object embedded in a Class, no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Student {
    #[serde(rename = "nome")]
    pub name: String,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

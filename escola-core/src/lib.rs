//! ESCOLA Core - Entity Types
//!
//! Pure data structures with no behavior. All other crates depend on this.
//! This crate contains ONLY data types and the error taxonomy - storage,
//! validation and transport live in the crates above it.

pub mod drafts;
pub mod entities;
pub mod enums;
pub mod error;
pub mod identity;

pub use drafts::{ClassDraft, ClassPatch, StudentDraft, TeacherDraft, TeacherPatch};
pub use entities::{Class, Student, Teacher};
pub use enums::EntityType;
pub use error::{DanglingReference, EscolaError, EscolaResult, StorageError, ValidationError};
pub use identity::{ClassId, EntityIdType, TeacherId};

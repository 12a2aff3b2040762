//! Error types for ESCOLA operations

use crate::{ClassId, EntityIdType, EntityType, TeacherId};
use thiserror::Error;

/// Storage layer errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Entity not found: {entity_type:?} with id {id}")]
    NotFound { entity_type: EntityType, id: u64 },

    #[error("Insert failed for {entity_type:?}: {reason}")]
    InsertFailed { entity_type: EntityType, reason: String },

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

impl StorageError {
    pub fn teacher_not_found(id: TeacherId) -> Self {
        StorageError::NotFound {
            entity_type: EntityType::Teacher,
            id: id.as_u64(),
        }
    }

    pub fn class_not_found(id: ClassId) -> Self {
        StorageError::NotFound {
            entity_type: EntityType::Class,
            id: id.as_u64(),
        }
    }
}

/// Validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Update for {entity_type:?} carries no fields")]
    EmptyUpdate { entity_type: EntityType },
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        ValidationError::RequiredFieldMissing {
            field: field.to_string(),
        }
    }

    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// A class was stored with a teacher reference that does not resolve.
///
/// Never returned as an error; the record service reports it through logging
/// and keeps the class.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Class {class_id} references missing teacher {teacher_id}")]
pub struct DanglingReference {
    pub class_id: ClassId,
    pub teacher_id: TeacherId,
}

/// Master error type for all ESCOLA errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EscolaError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl EscolaError {
    /// True when the error reports an absent record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EscolaError::Storage(StorageError::NotFound { .. }))
    }
}

/// Result type alias for ESCOLA operations.
pub type EscolaResult<T> = Result<T, EscolaError>;

// =============================================================================
// TESTS
// =============================================================================

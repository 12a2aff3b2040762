//! Enum types for ESCOLA entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity type discriminator for allocators and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum EntityType {
    Teacher,
    Class,
}

impl EntityType {
    /// All resource kinds, in allocator order.
    pub const ALL: [EntityType; 2] = [EntityType::Teacher, EntityType::Class];
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityType::Teacher => write!(f, "Teacher"),
            EntityType::Class => write!(f, "Class"),
        }
    }
}

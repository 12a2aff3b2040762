//! Identity types for ESCOLA entities
//!
//! Every record kind gets its own integer newtype so a class id can never be
//! handed to a teacher lookup. Ids are issued by the storage allocator and are
//! serialized as bare JSON integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Common behaviour of the strongly-typed record identifiers.
pub trait EntityIdType:
    Copy + Eq + Ord + std::hash::Hash + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static
{
    /// Human readable entity name used in error messages.
    const ENTITY_NAME: &'static str;

    /// Wrap a raw identifier.
    fn new(raw: u64) -> Self;

    /// Unwrap into the raw identifier.
    fn as_u64(&self) -> u64;
}

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident, $entity:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl EntityIdType for $name {
            const ENTITY_NAME: &'static str = $entity;

            fn new(raw: u64) -> Self {
                Self(raw)
            }

            fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>().map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

define_entity_id!(
    /// Identifier of a Teacher record.
    TeacherId,
    "Teacher"
);

define_entity_id!(
    /// Identifier of a Class record.
    ClassId,
    "Class"
);

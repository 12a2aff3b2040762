//! Keyed record tables backing the Teacher and Class stores.

use escola_core::{Class, ClassId, EntityIdType, EntityType, StorageError, Teacher, TeacherId};
use std::collections::BTreeMap;

/// A record that can live in a [`RecordTable`].
pub trait StoredRecord: Clone {
    type Id: EntityIdType;

    const ENTITY_TYPE: EntityType;

    fn id(&self) -> Self::Id;
}

impl StoredRecord for Teacher {
    type Id = TeacherId;

    const ENTITY_TYPE: EntityType = EntityType::Teacher;

    fn id(&self) -> TeacherId {
        self.id
    }
}

impl StoredRecord for Class {
    type Id = ClassId;

    const ENTITY_TYPE: EntityType = EntityType::Class;

    fn id(&self) -> ClassId {
        self.id
    }
}

/// Mapping from id to record.
///
/// Rows are keyed in a `BTreeMap`. Ids only grow between resets, so key order
/// is insertion order and listing needs no separate sequence column.
#[derive(Debug, Clone)]
pub struct RecordTable<R: StoredRecord> {
    rows: BTreeMap<R::Id, R>,
}

pub type TeacherStore = RecordTable<Teacher>;
pub type ClassStore = RecordTable<Class>;

impl<R: StoredRecord> RecordTable<R> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    fn not_found(id: R::Id) -> StorageError {
        StorageError::NotFound {
            entity_type: R::ENTITY_TYPE,
            id: id.as_u64(),
        }
    }

    /// Insert a record under its own id. The id must be fresh.
    pub fn insert(&mut self, record: R) -> Result<(), StorageError> {
        let id = record.id();
        if self.rows.contains_key(&id) {
            return Err(StorageError::InsertFailed {
                entity_type: R::ENTITY_TYPE,
                reason: format!("Duplicate id: {}", id),
            });
        }
        self.rows.insert(id, record);
        Ok(())
    }

    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.rows.get(&id)
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<R> {
        self.rows.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.rows.values()
    }

    /// Apply `apply` to the record in place.
    pub fn update<F>(&mut self, id: R::Id, apply: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut R),
    {
        let record = self.rows.get_mut(&id).ok_or_else(|| Self::not_found(id))?;
        apply(record);
        Ok(())
    }

    pub fn remove(&mut self, id: R::Id) -> Result<R, StorageError> {
        self.rows.remove(&id).ok_or_else(|| Self::not_found(id))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl<R: StoredRecord> Default for RecordTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassStore {
    /// Total number of embedded students across all classes.
    pub fn student_count(&self) -> usize {
        self.iter().map(|class| class.students.len()).sum()
    }
}

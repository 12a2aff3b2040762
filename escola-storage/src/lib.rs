//! ESCOLA Storage - Storage Trait, In-Memory Store and Record Service
//!
//! Defines the storage abstraction layer for ESCOLA records, the volatile
//! in-memory implementation used by the server, and the `RecordService`
//! facade that validates input and coordinates the two stores.

pub mod allocator;
pub mod memory;
pub mod service;
pub mod table;

pub use allocator::{Allocators, IdAllocator};
pub use memory::InMemoryStorage;
pub use service::RecordService;
pub use table::{ClassStore, RecordTable, StoredRecord, TeacherStore};

use escola_core::{Class, ClassId, EscolaResult, Student, Teacher, TeacherId};

// ============================================================================
// INSERT / UPDATE TYPES
// ============================================================================

/// Validated payload for a new teacher. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    pub name: String,
    pub age: i32,
    pub subject: String,
    pub notes: String,
}

impl NewTeacher {
    pub fn into_teacher(self, id: TeacherId) -> Teacher {
        Teacher {
            id,
            name: self.name,
            age: self.age,
            subject: self.subject,
            notes: self.notes,
        }
    }
}

/// Validated payload for a new class. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClass {
    pub description: String,
    pub teacher_id: TeacherId,
    pub active: bool,
    pub students: Vec<Student>,
}

impl NewClass {
    pub fn into_class(self, id: ClassId) -> Class {
        Class {
            id,
            description: self.description,
            teacher_id: self.teacher_id,
            active: self.active,
            students: self.students,
        }
    }
}

/// Update payload for teachers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub subject: Option<String>,
    pub notes: Option<String>,
}

impl TeacherUpdate {
    pub fn apply(self, teacher: &mut Teacher) {
        if let Some(name) = self.name {
            teacher.name = name;
        }
        if let Some(age) = self.age {
            teacher.age = age;
        }
        if let Some(subject) = self.subject {
            teacher.subject = subject;
        }
        if let Some(notes) = self.notes {
            teacher.notes = notes;
        }
    }
}

/// Update payload for classes. Students are never touched by an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassUpdate {
    pub description: Option<String>,
    pub teacher_id: Option<TeacherId>,
    pub active: Option<bool>,
}

impl ClassUpdate {
    pub fn apply(self, class: &mut Class) {
        if let Some(description) = self.description {
            class.description = description;
        }
        if let Some(teacher_id) = self.teacher_id {
            class.teacher_id = teacher_id;
        }
        if let Some(active) = self.active {
            class.active = active;
        }
    }
}

/// Point-in-time counters over the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorageStatistics {
    pub teacher_count: usize,
    pub class_count: usize,
    pub student_count: usize,
    pub next_teacher_id: u64,
    pub next_class_id: u64,
}

// ============================================================================
// STORAGE TRAIT
// ============================================================================

/// Storage trait for ESCOLA records.
///
/// Inserts take the unvalidated-id payload and return the stored record so
/// that allocation and insertion happen as one step inside the implementation.
pub trait StorageTrait: Send + Sync {
    // === Teacher Operations ===

    /// Allocate an id and insert a new teacher.
    fn teacher_insert(&self, t: NewTeacher) -> EscolaResult<Teacher>;

    /// Get a teacher by ID.
    fn teacher_get(&self, id: TeacherId) -> EscolaResult<Option<Teacher>>;

    /// List every teacher in insertion order.
    fn teacher_list(&self) -> EscolaResult<Vec<Teacher>>;

    /// Update a teacher in place.
    fn teacher_update(&self, id: TeacherId, update: TeacherUpdate) -> EscolaResult<()>;

    /// Remove a teacher. Classes referencing it are left as they are.
    fn teacher_delete(&self, id: TeacherId) -> EscolaResult<()>;

    // === Class Operations ===

    /// Allocate an id and insert a new class.
    fn class_insert(&self, c: NewClass) -> EscolaResult<Class>;

    /// Get a class by ID, students included.
    fn class_get(&self, id: ClassId) -> EscolaResult<Option<Class>>;

    /// List every class in insertion order.
    fn class_list(&self) -> EscolaResult<Vec<Class>>;

    /// Update a class in place.
    fn class_update(&self, id: ClassId, update: ClassUpdate) -> EscolaResult<()>;

    /// Remove a class together with its students.
    fn class_delete(&self, id: ClassId) -> EscolaResult<()>;

    // === Maintenance ===

    /// Drop every record and rewind both allocators. Never fails.
    fn reset(&self);

    /// Record counts and allocator positions.
    fn statistics(&self) -> EscolaResult<StorageStatistics>;
}

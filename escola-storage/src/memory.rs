//! Volatile in-memory storage.
//!
//! All state (both tables and both allocators) sits behind one `RwLock`.
//! Creates take the write lock once for allocate + insert; reads share the
//! read lock. Each `InMemoryStorage` is an independent context, so tests can
//! run side by side on their own instances.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use escola_core::{
    Class, ClassId, EntityIdType, EntityType, EscolaResult, StorageError, Teacher, TeacherId,
};

use crate::allocator::Allocators;
use crate::table::{ClassStore, TeacherStore};
use crate::{
    ClassUpdate, NewClass, NewTeacher, StorageStatistics, StorageTrait, TeacherUpdate,
};

#[derive(Debug, Default)]
struct StoreState {
    teachers: TeacherStore,
    classes: ClassStore,
    ids: Allocators,
}

/// In-memory store for teachers and classes.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    state: RwLock<StoreState>,
}

impl InMemoryStorage {
    /// Create an empty store with both allocators at their initial value.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, StorageError> {
        self.state.read().map_err(|_| StorageError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, StorageError> {
        self.state.write().map_err(|_| StorageError::LockPoisoned)
    }
}

impl StorageTrait for InMemoryStorage {
    // === Teacher Operations ===

    fn teacher_insert(&self, t: NewTeacher) -> EscolaResult<Teacher> {
        let mut state = self.write()?;
        let id = TeacherId::new(state.ids.next(EntityType::Teacher));
        let teacher = t.into_teacher(id);
        state.teachers.insert(teacher.clone())?;
        Ok(teacher)
    }

    fn teacher_get(&self, id: TeacherId) -> EscolaResult<Option<Teacher>> {
        let state = self.read()?;
        Ok(state.teachers.get(id).cloned())
    }

    fn teacher_list(&self) -> EscolaResult<Vec<Teacher>> {
        let state = self.read()?;
        Ok(state.teachers.list())
    }

    fn teacher_update(&self, id: TeacherId, update: TeacherUpdate) -> EscolaResult<()> {
        let mut state = self.write()?;
        state.teachers.update(id, |teacher| update.apply(teacher))?;
        Ok(())
    }

    fn teacher_delete(&self, id: TeacherId) -> EscolaResult<()> {
        let mut state = self.write()?;
        state.teachers.remove(id)?;
        Ok(())
    }

    // === Class Operations ===

    fn class_insert(&self, c: NewClass) -> EscolaResult<Class> {
        let mut state = self.write()?;
        let id = ClassId::new(state.ids.next(EntityType::Class));
        let class = c.into_class(id);
        state.classes.insert(class.clone())?;
        Ok(class)
    }

    fn class_get(&self, id: ClassId) -> EscolaResult<Option<Class>> {
        let state = self.read()?;
        Ok(state.classes.get(id).cloned())
    }

    fn class_list(&self) -> EscolaResult<Vec<Class>> {
        let state = self.read()?;
        Ok(state.classes.list())
    }

    fn class_update(&self, id: ClassId, update: ClassUpdate) -> EscolaResult<()> {
        let mut state = self.write()?;
        state.classes.update(id, |class| update.apply(class))?;
        Ok(())
    }

    fn class_delete(&self, id: ClassId) -> EscolaResult<()> {
        let mut state = self.write()?;
        state.classes.remove(id)?;
        Ok(())
    }

    // === Maintenance ===

    fn reset(&self) {
        // Reset never fails, even on a poisoned lock.
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = StoreState::default();
        drop(state);
        self.state.clear_poison();
    }

    fn statistics(&self) -> EscolaResult<StorageStatistics> {
        let state = self.read()?;
        Ok(StorageStatistics {
            teacher_count: state.teachers.len(),
            class_count: state.classes.len(),
            student_count: state.classes.student_count(),
            next_teacher_id: state.ids.get(EntityType::Teacher).peek(),
            next_class_id: state.ids.get(EntityType::Class).peek(),
        })
    }
}

//! Identity allocation
//!
//! Each resource kind has its own counter starting at 1. Ids are handed out
//! strictly increasing and are never reissued until the allocator is reset.
//! The allocators hold no lock of their own; `InMemoryStorage` only touches
//! them while holding its write lock, which is what keeps two concurrent
//! creates from observing the same value.

use escola_core::{EntityIdType, EntityType};

/// Monotonic counter for a single resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// First id issued after construction or reset.
    pub const INITIAL: u64 = 1;

    pub fn new() -> Self {
        Self {
            next: Self::INITIAL,
        }
    }

    /// Issue the next id.
    pub fn next_raw(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Issue the next id as a typed identifier.
    pub fn next_id<I: EntityIdType>(&mut self) -> I {
        I::new(self.next_raw())
    }

    /// The id the next call to `next_raw` will return.
    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn reset(&mut self) {
        self.next = Self::INITIAL;
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// One allocator per resource kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocators {
    teachers: IdAllocator,
    classes: IdAllocator,
}

impl Allocators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: EntityType) -> &IdAllocator {
        match kind {
            EntityType::Teacher => &self.teachers,
            EntityType::Class => &self.classes,
        }
    }

    pub fn get_mut(&mut self, kind: EntityType) -> &mut IdAllocator {
        match kind {
            EntityType::Teacher => &mut self.teachers,
            EntityType::Class => &mut self.classes,
        }
    }

    /// Issue the next id for `kind`.
    pub fn next(&mut self, kind: EntityType) -> u64 {
        self.get_mut(kind).next_raw()
    }

    /// Return the allocator for `kind` to its initial state.
    pub fn reset(&mut self, kind: EntityType) {
        self.get_mut(kind).reset();
    }

    pub fn reset_all(&mut self) {
        for kind in EntityType::ALL {
            self.reset(kind);
        }
    }
}

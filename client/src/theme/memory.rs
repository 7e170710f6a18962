//! In-memory preference store and display marker for tests.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};

use super::controller::{DisplayMarker, PreferenceStore};

/// Preference store backed by a plain cell. The `read_only` variant drops
/// writes the way a browser with storage disabled would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing preference value.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_owned())),
            read_only: false,
        }
    }

    /// Store that answers reads but silently drops writes.
    pub fn read_only() -> Self {
        Self {
            value: RefCell::new(None),
            read_only: true,
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn set(&self, value: &str) {
        if self.read_only {
            return;
        }
        *self.value.borrow_mut() = Some(value.to_owned());
    }
}

/// Display marker tracked as a boolean flag.
#[derive(Debug, Default)]
pub struct MemoryMarker {
    present: Cell<bool>,
}

impl MemoryMarker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the marker into a known state, bypassing the controller.
    pub fn set_present(&self, present: bool) {
        self.present.set(present);
    }
}

impl DisplayMarker for MemoryMarker {
    fn add(&self) {
        self.present.set(true);
    }

    fn remove(&self) {
        self.present.set(false);
    }

    fn has(&self) -> bool {
        self.present.get()
    }
}

//! Persistent preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser this is `localStorage` (see `browser::LocalStorageStore`).
//! The store is schema-less: values are plain strings and nothing expires.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Durable string key-value storage surviving page reloads.
pub trait PreferenceStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

/// In-memory store for native hosts and tests. Counts writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one entry. Seeding does not count as a write.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Drop `key`, as a user clearing site data would.
    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self.writes.set(self.writes.get() + 1);
    }
}

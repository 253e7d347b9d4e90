//! Key-value storage abstraction behind the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build backs this with `window.localStorage`; tests and the SSR
//! host use [`MemoryStorage`]. Values are plain strings, mirroring the
//! browser API.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;

/// String key-value store with browser `localStorage` semantics.
pub trait KeyValueStore {
    /// Read `key`, returning `Ok(None)` when it is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Process-local store used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing entries, e.g. to simulate a previous visit.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: Mutex::new(map) }
    }

    /// Copy of every stored entry. Returns an empty map if the lock is poisoned.
    #[must_use]
    pub fn entries(&self) -> BTreeMap<String, String> {
        self.entries.lock().map(|m| m.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().is_ok_and(|m| m.contains_key(key))
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;

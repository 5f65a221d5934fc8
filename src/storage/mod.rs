//! Key-value persistence seam.
//!
//! Repositories store every entity as a JSON document under a namespaced
//! key. The core is agnostic to where those documents live: an in-memory
//! map, the browser-local store a terminal falls back to, or a remote
//! document backend implementing the same trait.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::core::{AppError, Result};

/// Abstraction over the backing document store.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Writes `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: String) -> Result<()>;
    /// Removes the value stored under `key`. Removing an absent key is not
    /// an error.
    fn remove(&self, key: &str) -> Result<()>;
    /// Lists every key starting with `prefix`, sorted for deterministic
    /// iteration.
    fn keys(&self, prefix: &str) -> Result<Vec<String>>;
}

/// In-memory store used by tests and as the local-storage analog.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::storage("store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::storage("store lock poisoned"))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::storage("store lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self, prefix: &str) -> Result<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::storage("store lock poisoned"))?;
        let mut keys: Vec<String> = entries
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }
}

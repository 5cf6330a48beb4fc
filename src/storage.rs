//! Key-value string storage behind the search history.
//!
//! `BrowserStorage` wraps the origin's `localStorage`; `MemoryStore` backs
//! tests and is the session fallback when `localStorage` is unavailable
//! (private browsing modes, disabled storage).

use crate::error::StorageError;
use std::collections::HashMap;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// `window.localStorage`.
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self, StorageError> {
        let inner = gloo_utils::window()
            .local_storage()?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.get_item(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(self.inner.set_item(key, value)?)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Ok(self.inner.remove_item(key)?)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.items.insert(key.to_string(), value.to_string());
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

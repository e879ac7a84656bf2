//! String-keyed durable storage with automatic serialization.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// A synchronous string-keyed slot store, shaped like `window.localStorage`.
pub trait Storage {
    /// Read a slot. Absent slots are `Ok(None)`.
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Write a slot.
    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Delete a slot. Deleting an absent slot is not an error.
    fn remove_item(&self, key: &str) -> Result<(), CacheError>;
}

impl<S: Storage + ?Sized> Storage for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), CacheError> {
        (**self).remove_item(key)
    }
}

/// In-memory storage for native hosts and tests.
///
/// Clones share the same slots, so a clone handed to a second store behaves
/// like the same browser profile after a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<BTreeMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, like a full quota.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Raw slot contents.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// All slot names.
    pub fn keys(&self) -> Vec<String> {
        self.slots.borrow().keys().cloned().collect()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        if self.fail_writes.get() {
            return Err(CacheError::StoreError(format!("quota exceeded writing {key}")));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), CacheError> {
        if self.fail_writes.get() {
            return Err(CacheError::StoreError(format!("quota exceeded removing {key}")));
        }
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    store: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Open the window's `localStorage`.
    pub fn open() -> Result<Self, CacheError> {
        let window =
            web_sys::window().ok_or_else(|| CacheError::OpenError("no window".to_string()))?;
        let store = window
            .local_storage()
            .map_err(|e| CacheError::OpenError(format!("{e:?}")))?
            .ok_or_else(|| CacheError::OpenError("localStorage disabled".to_string()))?;
        Ok(Self { store })
    }
}

#[cfg(target_arch = "wasm32")]
impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.store
            .get_item(key)
            .map_err(|e| CacheError::StoreError(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.store
            .set_item(key, value)
            .map_err(|e| CacheError::StoreError(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), CacheError> {
        self.store
            .remove_item(key)
            .map_err(|e| CacheError::StoreError(format!("{e:?}")))
    }
}

/// Namespaced, typed view over a [`Storage`].
///
/// Structured values are stored as JSON; plain strings are stored verbatim.
pub struct Cache<S> {
    storage: S,
    prefix: String,
}

impl<S: Storage> Cache<S> {
    /// Wrap `storage`, namespacing every key under `prefix`.
    pub fn new(storage: S, prefix: impl Into<String>) -> Self {
        Self {
            storage,
            prefix: prefix.into(),
        }
    }

    /// Full slot name for `name`.
    pub fn key(&self, name: &str) -> String {
        crate::cache_key!(self.prefix, name)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Get a JSON value.
    ///
    /// Returns `None` if the slot doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, CacheError> {
        match self.storage.get_item(&self.key(name))? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Set a JSON value.
    pub fn set<T: Serialize>(&self, name: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.storage.set_item(&self.key(name), &raw)
    }

    /// Get a plain string slot.
    pub fn get_str(&self, name: &str) -> Result<Option<String>, CacheError> {
        self.storage.get_item(&self.key(name))
    }

    /// Set a plain string slot.
    pub fn set_str(&self, name: &str, value: &str) -> Result<(), CacheError> {
        self.storage.set_item(&self.key(name), value)
    }

    /// Delete a slot.
    pub fn delete(&self, name: &str) -> Result<(), CacheError> {
        self.storage.remove_item(&self.key(name))
    }

    /// Check if a slot exists.
    pub fn exists(&self, name: &str) -> Result<bool, CacheError> {
        Ok(self.storage.get_item(&self.key(name))?.is_some())
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Helper to build cache keys with namespacing.
///
/// # Example
///
/// ```
/// let key = storefront_cache::cache_key!("storefront", "cart");
/// assert_eq!(key, "storefront:cart");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix.to_string());
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

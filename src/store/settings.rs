//! Settings-backed key-value store adapter.
//!
//! [`Settings`] stands in for a platform preference store: an in-process
//! table of string entries, constructed explicitly and shared by handle
//! rather than through process-wide state. [`SettingsStore`] adapts it to
//! the [`KeyValueStore`] capability using a JSON codec.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::keyval::{KeyValueStore, StoreKey};

/// Errors surfaced by the strict adapter paths.
///
/// The [`KeyValueStore`] contract swallows these into soft misses; they
/// are observable only through [`SettingsStore::try_read`] and
/// [`SettingsStore::try_write`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("no value stored under key '{0}'")]
    Missing(&'static str),
}

/// An in-process string key-value table, the platform settings mechanism
/// stand-in. Interior mutability keeps the read/write/erase surface on
/// shared references; the model is single-threaded throughout.
#[derive(Debug, Default)]
pub struct Settings {
    entries: RefCell<HashMap<String, String>>,
}

impl Settings {
    /// Creates an empty settings table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw payload stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Stores a raw payload under `key`, replacing any previous one.
    pub fn set(&self, key: &str, value: String) {
        self.entries.borrow_mut().insert(key.to_string(), value);
    }

    /// Removes the payload under `key`, if present.
    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    /// Returns true if a payload is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

/// [`KeyValueStore`] adapter over a [`Settings`] handle with a JSON
/// codec. Cheap to clone; clones share the same underlying table.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    settings: Rc<Settings>,
}

impl SettingsStore {
    /// Creates an adapter over the given settings handle.
    pub fn new(settings: Rc<Settings>) -> Self {
        SettingsStore { settings }
    }

    /// Returns the underlying settings handle.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Strict read: distinguishes an absent key from a payload that does
    /// not decode as `T`.
    pub fn try_read<T: DeserializeOwned>(&self, key: StoreKey) -> Result<T, StoreError> {
        let raw = self
            .settings
            .get(key.as_str())
            .ok_or(StoreError::Missing(key.as_str()))?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Strict write: reports an encoding failure and leaves the key's
    /// previous payload untouched.
    pub fn try_write<T: Serialize>(&self, key: StoreKey, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.settings.set(key.as_str(), raw);
        Ok(())
    }
}

impl KeyValueStore for SettingsStore {
    fn read<T: DeserializeOwned>(&self, key: StoreKey) -> Option<T> {
        self.try_read(key).ok()
    }

    fn write<T: Serialize>(&self, key: StoreKey, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.settings.set(key.as_str(), raw),
            // A failed encode still clobbers the previous payload.
            Err(_) => self.settings.remove(key.as_str()),
        }
    }

    fn erase(&self, key: StoreKey) {
        self.settings.remove(key.as_str());
    }
}

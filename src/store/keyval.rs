//! The key-value persistence capability.
//!
//! Decouples "something that serializes named records" from "how and
//! where the bytes are stored". Consumers depend on [`KeyValueStore`]
//! only; concrete adapters live elsewhere.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Well-known keys in the persistence key space.
///
/// New named records are added as variants; the capability trait stays
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    CurrentGame,
}

impl StoreKey {
    /// Returns the raw key string used by the underlying store.
    pub const fn as_str(self) -> &'static str {
        match self {
            StoreKey::CurrentGame => "game",
        }
    }
}

/// Read, write, and erase codable values by key.
///
/// All operations are synchronous single calls with no transactional
/// composition; any real asynchrony belongs inside a concrete adapter.
pub trait KeyValueStore {
    /// Reads and decodes the value stored under `key`.
    ///
    /// Returns `None` when the key was never written, and also when a
    /// stored payload does not decode as `T` (soft miss): callers cannot
    /// distinguish "never written" from "written but corrupt".
    fn read<T: DeserializeOwned>(&self, key: StoreKey) -> Option<T>;

    /// Encodes `value` and stores it under `key`.
    ///
    /// If encoding fails, the key's previously stored payload is still
    /// clobbered; a subsequent `read` reports absence.
    fn write<T: Serialize>(&self, key: StoreKey, value: &T);

    /// Removes any value stored under `key`. Erasing an absent key is a
    /// no-op, not an error.
    fn erase(&self, key: StoreKey);
}

//! Keyed persistence layer.
//!
//! Contains the key-value capability trait, the settings-backed concrete
//! adapter, and the save/load consumer for the current-game record.

pub mod game;
pub mod keyval;
pub mod settings;

pub use game::{Game, PersistenceStore, Player};
pub use keyval::{KeyValueStore, StoreKey};
pub use settings::{Settings, SettingsStore, StoreError};

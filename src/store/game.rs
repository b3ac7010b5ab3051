//! The current-game record and its save/load consumer.
//!
//! `Game` encodes as an ordered sequence of player records, so a decoded
//! game preserves player order exactly. [`PersistenceStore`] depends only
//! on the [`KeyValueStore`] capability, never on a concrete adapter type.

use serde::{Deserialize, Serialize};

use super::keyval::{KeyValueStore, StoreKey};

/// A player in the current game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name. Non-empty expected, not enforced.
    pub name: String,
    pub level: i32,
    pub points: i32,
    /// Optional free-text description, omitted from the payload when
    /// absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Player {
    /// Creates a player with no description.
    pub fn new(name: impl Into<String>, level: i32, points: i32) -> Self {
        Player {
            name: name.into(),
            level,
            points,
            description: None,
        }
    }

    /// Attaches a free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The whole-record game snapshot: an ordered list of players.
///
/// There is no update-in-place; a game is persisted and replaced as a
/// unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub players: Vec<Player>,
}

impl Game {
    /// Creates a game with the given players.
    pub fn new(players: Vec<Player>) -> Self {
        Game { players }
    }
}

/// Save/load wrapper for the current-game record.
///
/// Generic over the capability only: the concrete adapter is chosen at
/// construction and never named here.
#[derive(Debug, Clone)]
pub struct PersistenceStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PersistenceStore<S> {
    /// Creates a wrapper over the injected store capability.
    pub fn new(store: S) -> Self {
        PersistenceStore { store }
    }

    /// Persists `game` as the current-game record, replacing any
    /// previous one.
    pub fn save(&self, game: &Game) {
        self.store.write(StoreKey::CurrentGame, game);
    }

    /// Reads back the current-game record. Absent or undecodable data
    /// yields `None`.
    pub fn current_game(&self) -> Option<Game> {
        self.store.read(StoreKey::CurrentGame)
    }

    /// Erases the current-game record, if any.
    pub fn clear(&self) {
        self.store.erase(StoreKey::CurrentGame);
    }
}

//! Integration tests for the keyed persistence store.
//!
//! Exercises the capability trait through the settings-backed adapter
//! and the current-game consumer. The record encodes as an ordered array
//! of player entries, so round-trips are sequence-equal, not merely
//! set-equal.

use std::rc::Rc;

use sovereign::store::{
    Game, KeyValueStore, PersistenceStore, Player, Settings, SettingsStore, StoreKey,
};

fn smart_kid() -> Player {
    Player::new("Smart Kid", 100, 99).with_description("Smarted boy in the class")
}

#[test]
fn single_player_game_roundtrips_sequence_equal() {
    let vault = PersistenceStore::new(SettingsStore::default());
    let game = Game::new(vec![smart_kid()]);
    vault.save(&game);

    let loaded = vault.current_game().expect("record was just saved");
    assert_eq!(loaded, game);
    assert_eq!(loaded.players[0].name, "Smart Kid");
    assert_eq!(loaded.players[0].level, 100);
    assert_eq!(loaded.players[0].points, 99);
    assert_eq!(
        loaded.players[0].description.as_deref(),
        Some("Smarted boy in the class")
    );
}

#[test]
fn roundtrip_preserves_order_for_empty_one_and_many() {
    for n in [0usize, 1, 23] {
        let players: Vec<Player> = (0..n)
            .map(|i| Player::new(format!("player-{}", i), i as i32, (i * 10) as i32))
            .collect();
        let game = Game::new(players);

        let vault = PersistenceStore::new(SettingsStore::default());
        vault.save(&game);
        assert_eq!(vault.current_game(), Some(game), "n = {}", n);
    }
}

#[test]
fn never_written_key_reads_empty_and_erase_is_harmless() {
    let store = SettingsStore::default();
    assert!(store.read::<Game>(StoreKey::CurrentGame).is_none());

    store.erase(StoreKey::CurrentGame);
    assert!(store.read::<Game>(StoreKey::CurrentGame).is_none());
}

#[test]
fn corrupt_payload_reads_as_absent() {
    let settings = Rc::new(Settings::new());
    settings.set(StoreKey::CurrentGame.as_str(), "{\"players\": 12}".to_string());

    let vault = PersistenceStore::new(SettingsStore::new(settings));
    assert_eq!(vault.current_game(), None);
}

#[test]
fn consumer_accepts_any_capability_implementation() {
    use serde::de::DeserializeOwned;
    use serde::Serialize;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// A second adapter, to show the consumer depends on the trait
    /// alone.
    #[derive(Default)]
    struct MapStore {
        entries: RefCell<HashMap<&'static str, String>>,
    }

    impl KeyValueStore for MapStore {
        fn read<T: DeserializeOwned>(&self, key: StoreKey) -> Option<T> {
            let raw = self.entries.borrow().get(key.as_str()).cloned()?;
            serde_json::from_str(&raw).ok()
        }

        fn write<T: Serialize>(&self, key: StoreKey, value: &T) {
            match serde_json::to_string(value) {
                Ok(raw) => {
                    self.entries.borrow_mut().insert(key.as_str(), raw);
                }
                Err(_) => {
                    self.entries.borrow_mut().remove(key.as_str());
                }
            }
        }

        fn erase(&self, key: StoreKey) {
            self.entries.borrow_mut().remove(key.as_str());
        }
    }

    let vault = PersistenceStore::new(MapStore::default());
    let game = Game::new(vec![smart_kid()]);
    vault.save(&game);
    assert_eq!(vault.current_game(), Some(game));
    vault.clear();
    assert_eq!(vault.current_game(), None);
}

#[test]
fn saved_record_lands_under_the_well_known_key() {
    let settings = Rc::new(Settings::new());
    let vault = PersistenceStore::new(SettingsStore::new(Rc::clone(&settings)));

    vault.save(&Game::default());
    assert!(settings.contains(StoreKey::CurrentGame.as_str()));
    assert_eq!(settings.len(), 1);

    vault.clear();
    assert!(settings.is_empty());
}

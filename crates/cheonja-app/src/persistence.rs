//! Saving settings and best times through eframe's storage.
//!
//! Best times live in a [`MemoryStore`] while the app runs. On start the
//! lists for every selectable board are copied in; on save every entry is
//! written back.

use cheonja_game::{KeyValueStore, MemoryStore, best_times_key};
use cheonja_generator::{BoardConfig, Difficulty};
use eframe::Storage;

use crate::state::{AppState, Settings};

const SETTINGS_KEY: &str = "cheonja.settings";

/// [`KeyValueStore`] view of an eframe [`Storage`].
pub(crate) struct EframeStore<'a> {
    storage: &'a mut dyn Storage,
}

impl<'a> EframeStore<'a> {
    pub(crate) fn new(storage: &'a mut dyn Storage) -> Self {
        Self { storage }
    }
}

impl KeyValueStore for EframeStore<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_string(key)
    }

    fn set(&mut self, key: &str, value: String) {
        self.storage.set_string(key, value);
    }
}

fn selectable_boards() -> impl Iterator<Item = BoardConfig> {
    BoardConfig::BLOCK_COUNT_PRESETS
        .into_iter()
        .flat_map(|block_count| {
            Difficulty::ALL.into_iter().map(move |difficulty| {
                BoardConfig::default()
                    .with_block_count(block_count)
                    .with_difficulty(difficulty)
            })
        })
}

pub(crate) fn load_settings(storage: &dyn Storage) -> Settings {
    let Some(text) = storage.get_string(SETTINGS_KEY) else {
        return Settings::default();
    };
    serde_json::from_str(&text).unwrap_or_else(|e| {
        log::warn!("ignoring unreadable settings: {e}");
        Settings::default()
    })
}

pub(crate) fn load_best_times(storage: &dyn Storage) -> MemoryStore {
    let mut store = MemoryStore::new();
    for config in selectable_boards() {
        let key = best_times_key(&config);
        if let Some(value) = storage.get_string(&key) {
            store.set(&key, value);
        }
    }
    store
}

pub(crate) fn save_state(storage: &mut dyn Storage, app_state: &AppState) {
    let mut store = EframeStore::new(storage);
    match serde_json::to_string(&app_state.settings) {
        Ok(text) => store.set(SETTINGS_KEY, text),
        Err(e) => log::warn!("failed to serialize settings: {e}"),
    }
    for (key, value) in app_state.game.best_time_store().store().entries() {
        store.set(key, value.to_owned());
    }
}

//! Key-value persistence for best times.

use std::collections::BTreeMap;

use cheonja_generator::BoardConfig;

use crate::{BestTimes, best_times_key};

/// A string key-value store.
///
/// The app adapts its platform storage to this trait; tests use
/// [`MemoryStore`].
pub trait KeyValueStore {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);
}

impl<S> KeyValueStore for &mut S
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        (**self).set(key, value);
    }
}

/// An in-memory [`KeyValueStore`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all stored entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }
}

/// Reads and updates best-time lists in a [`KeyValueStore`].
#[derive(Debug, Default, Clone)]
pub struct BestTimeStore<S> {
    store: S,
}

impl<S> BestTimeStore<S>
where
    S: KeyValueStore,
{
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the underlying store mutably.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Unwraps the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Loads the best times for `config`.
    ///
    /// A missing or unreadable value yields an empty list.
    pub fn load(&self, config: &BoardConfig) -> BestTimes {
        let key = best_times_key(config);
        let Some(text) = self.store.get(&key) else {
            return BestTimes::new();
        };
        BestTimes::parse(&text).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable best times under {key}: {e}");
            BestTimes::new()
        })
    }

    /// Records a completion time for `config` and persists the list.
    ///
    /// Returns the 0-based rank if the time made the list.
    pub fn record(&mut self, config: &BoardConfig, elapsed_secs: u32) -> Option<usize> {
        let mut times = self.load(config);
        let rank = times.record(elapsed_secs)?;
        match times.to_text() {
            Ok(text) => self.store.set(&best_times_key(config), text),
            Err(e) => log::warn!("failed to serialize best times: {e}"),
        }
        Some(rank)
    }
}

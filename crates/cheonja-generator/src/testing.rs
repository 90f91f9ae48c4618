//! Test utilities for board generation.
//!
//! [`ScriptedRandom`] replays a fixed list of draws, which makes every random
//! decision of the generator observable in tests. [`pool_with_ids`] builds a
//! pool of placeholder records.
//!
//! # Example
//!
//! ```
//! use cheonja_generator::{
//!     RandomSource as _,
//!     testing::{ScriptedRandom, pool_with_ids},
//! };
//!
//! let mut random = ScriptedRandom::new([0.0, 0.5]);
//! assert_eq!(random.index_below(4), 0);
//! assert_eq!(random.index_below(4), 2);
//! assert_eq!(random.draws(), 2);
//!
//! let pool = pool_with_ids(1..=20);
//! assert_eq!(pool.blocks().len(), 2);
//! ```

use cheonja_core::{CharId, CharacterPool, CharacterRecord};

use crate::RandomSource;

/// A [`RandomSource`] that cycles through a fixed list of draws.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedRandom {
    /// Creates a source replaying `values` in order, restarting at the end.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty or contains a value outside `[0, 1)`.
    #[track_caller]
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values = values.into_iter().collect::<Vec<_>>();
        assert!(!values.is_empty(), "at least one draw is required");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "draws must lie in [0, 1)"
        );
        Self { values, next: 0 }
    }

    /// Number of draws taken so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// Builds a pool of placeholder records with the given identifiers.
///
/// # Panics
///
/// Panics if an identifier is `0` or repeated.
#[track_caller]
pub fn pool_with_ids(ids: impl IntoIterator<Item = u32>) -> CharacterPool {
    let records = ids
        .into_iter()
        .map(|id| {
            let id = CharId::new(id).unwrap();
            CharacterRecord::new(id, format!("字{id}"), format!("자{id}"), "글자")
        })
        .collect();
    CharacterPool::new(records).unwrap()
}

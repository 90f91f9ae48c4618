//! Fastest completion times per board configuration.

use cheonja_generator::BoardConfig;
use serde::{Deserialize, Serialize};

/// Number of times kept per configuration.
pub const MAX_BEST_TIMES: usize = 5;

/// Returns the store key holding the best times for `config`.
///
/// Boards with the same block count and difficulty share a list; whether the
/// blocks were sequential does not matter.
///
/// ```
/// use cheonja_game::best_times_key;
/// use cheonja_generator::{BoardConfig, Difficulty};
///
/// let config = BoardConfig::default()
///     .with_block_count(3)
///     .with_difficulty(Difficulty::Hard);
/// assert_eq!(best_times_key(&config), "cheonja.best_times.b3.d3");
/// ```
#[must_use]
pub fn best_times_key(config: &BoardConfig) -> String {
    format!(
        "cheonja.best_times.b{}.d{}",
        config.block_count(),
        config.difficulty().level()
    )
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Stored {
    List(Vec<u32>),
    Single(u32),
}

/// An ascending list of at most [`MAX_BEST_TIMES`] elapsed times in seconds.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BestTimes {
    secs: Vec<u32>,
}

impl BestTimes {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a stored value.
    ///
    /// Accepts a JSON array of seconds, or a bare integer holding a single
    /// best time. The result is sorted and truncated to [`MAX_BEST_TIMES`].
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is neither form.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let mut secs = match serde_json::from_str(text)? {
            Stored::List(secs) => secs,
            Stored::Single(secs) => vec![secs],
        };
        secs.sort_unstable();
        secs.truncate(MAX_BEST_TIMES);
        Ok(Self { secs })
    }

    /// Serializes the list for storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_text(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Returns the times, fastest first.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.secs
    }

    /// Returns the fastest time, if any.
    #[must_use]
    pub fn best(&self) -> Option<u32> {
        self.secs.first().copied()
    }

    /// Returns `true` if no time has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secs.is_empty()
    }

    /// Inserts `secs`, returning its 0-based rank if it made the list.
    ///
    /// A time equal to an existing entry ranks after it.
    pub fn record(&mut self, secs: u32) -> Option<usize> {
        let rank = self.secs.partition_point(|&s| s <= secs);
        if rank >= MAX_BEST_TIMES {
            return None;
        }
        self.secs.insert(rank, secs);
        self.secs.truncate(MAX_BEST_TIMES);
        Some(rank)
    }
}

#[cfg(test)]
mod tests {
    use cheonja_generator::Difficulty;

    use super::*;

    #[test]
    fn test_key_ignores_sequential_flag() {
        let config = BoardConfig::default().with_difficulty(Difficulty::Medium);
        assert_eq!(best_times_key(&config), "cheonja.best_times.b5.d2");
        assert_eq!(
            best_times_key(&config.with_sequential_blocks(false)),
            best_times_key(&config)
        );
    }

    #[test]
    fn test_record_keeps_ascending_top_five() {
        let mut times = BestTimes::new();
        assert_eq!(times.record(90), Some(0));
        assert_eq!(times.record(60), Some(0));
        assert_eq!(times.record(120), Some(2));
        assert_eq!(times.record(60), Some(1));
        assert_eq!(times.record(200), Some(4));
        assert_eq!(times.as_slice(), &[60, 60, 90, 120, 200]);

        assert_eq!(times.record(300), None);
        assert_eq!(times.record(10), Some(0));
        assert_eq!(times.as_slice(), &[10, 60, 60, 90, 120]);
        assert_eq!(times.best(), Some(10));
    }

    #[test]
    fn test_parse_list_and_single() {
        let list = BestTimes::parse("[30, 10, 20]").unwrap();
        assert_eq!(list.as_slice(), &[10, 20, 30]);

        let single = BestTimes::parse("42").unwrap();
        assert_eq!(single.as_slice(), &[42]);

        let long = BestTimes::parse("[7, 6, 5, 4, 3, 2, 1]").unwrap();
        assert_eq!(long.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(BestTimes::parse("fast").is_err());
        assert!(BestTimes::parse("[-1]").is_err());
        assert!(BestTimes::parse("{\"a\": 1}").is_err());
    }

    #[test]
    fn test_text_round_trip() {
        let mut times = BestTimes::new();
        times.record(75);
        times.record(64);
        let text = times.to_text().unwrap();
        assert_eq!(text, "[64,75]");
        assert_eq!(BestTimes::parse(&text).unwrap(), times);
    }
}

use std::{fmt, num::NonZeroUsize};

use cheonja_core::BLOCK_LEN;

/// How many tiles start in their correct position.
///
/// | level | group size | kept correct |
/// |---|---|---|
/// | [`Easy`](Difficulty::Easy) | 2 | `tiles / 2` |
/// | [`Medium`](Difficulty::Medium) | 4 | `tiles / 4` |
/// | [`Hard`](Difficulty::Hard) | whole board | 0 |
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::IsVariant,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Difficulty {
    /// One kept tile per pair.
    #[default]
    Easy,
    /// One kept tile per group of four.
    Medium,
    /// No kept tiles.
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the numeric level (1, 2 or 3).
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Returns the difficulty for a numeric level.
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }

    /// Size of the groups that each keep one correct tile, or `None` when the
    /// whole board is scrambled.
    #[must_use]
    pub const fn kept_group_size(self) -> Option<usize> {
        match self {
            Self::Easy => Some(2),
            Self::Medium => Some(4),
            Self::Hard => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.level())
    }
}

/// Configuration of one memory-game board.
///
/// The block count always lies in `1..=`[`BoardConfig::MAX_BLOCK_COUNT`].
/// Builders clamp out-of-range counts; deserialization rejects them.
///
/// # Examples
///
/// ```
/// use cheonja_generator::{BoardConfig, Difficulty};
///
/// let config = BoardConfig::default();
/// assert_eq!(config.block_count(), 5);
/// assert_eq!(config.tile_count(), 40);
///
/// let config = config.with_block_count(2).with_difficulty(Difficulty::Hard);
/// assert_eq!(config.tile_count(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    block_count: NonZeroUsize,
    sequential_blocks: bool,
    difficulty: Difficulty,
}

/// Unchecked form of [`BoardConfig`] as it appears in stored data.
#[derive(serde::Deserialize)]
struct RawBoardConfig {
    block_count: usize,
    sequential_blocks: bool,
    difficulty: Difficulty,
}

/// A stored block count outside `1..=`[`BoardConfig::MAX_BLOCK_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("block count {block_count} is not in 1..={}", BoardConfig::MAX_BLOCK_COUNT)]
pub struct BlockCountError {
    /// The rejected block count.
    pub block_count: usize,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = BlockCountError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        let RawBoardConfig {
            block_count,
            sequential_blocks,
            difficulty,
        } = raw;
        let block_count = NonZeroUsize::new(block_count)
            .filter(|count| count.get() <= Self::MAX_BLOCK_COUNT)
            .ok_or(BlockCountError { block_count })?;
        Ok(Self {
            block_count,
            sequential_blocks,
            difficulty,
        })
    }
}

impl BoardConfig {
    /// Block counts offered as presets.
    pub const BLOCK_COUNT_PRESETS: [usize; 6] = [2, 3, 4, 5, 8, 10];

    /// Largest block count: every block of the 1,000-character classic.
    pub const MAX_BLOCK_COUNT: usize = 1000 / BLOCK_LEN;

    /// Creates a configuration, clamping `block_count` into range.
    #[must_use]
    pub fn new(block_count: usize, sequential_blocks: bool, difficulty: Difficulty) -> Self {
        Self {
            block_count: clamp_block_count(block_count),
            sequential_blocks,
            difficulty,
        }
    }

    /// Number of 8-character blocks on the board.
    #[must_use]
    pub const fn block_count(&self) -> usize {
        self.block_count.get()
    }

    /// Number of tiles on the board (`block_count * 8`).
    #[must_use]
    pub const fn tile_count(&self) -> usize {
        self.block_count.get() * BLOCK_LEN
    }

    /// Whether the selected blocks form one contiguous run.
    #[must_use]
    pub const fn sequential_blocks(&self) -> bool {
        self.sequential_blocks
    }

    /// The scrambling difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns a copy with a different block count, clamped into
    /// `1..=`[`Self::MAX_BLOCK_COUNT`].
    #[must_use]
    pub fn with_block_count(mut self, block_count: usize) -> Self {
        self.block_count = clamp_block_count(block_count);
        self
    }

    /// Returns a copy with a different block selection mode.
    #[must_use]
    pub fn with_sequential_blocks(mut self, sequential_blocks: bool) -> Self {
        self.sequential_blocks = sequential_blocks;
        self
    }

    /// Returns a copy with a different difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

fn clamp_block_count(block_count: usize) -> NonZeroUsize {
    NonZeroUsize::new(block_count.min(BoardConfig::MAX_BLOCK_COUNT)).unwrap_or(NonZeroUsize::MIN)
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(5, true, Difficulty::Easy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_levels() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_level(difficulty.level()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_level(0), None);
        assert_eq!(Difficulty::from_level(4), None);
        assert!(Difficulty::Hard.kept_group_size().is_none());
    }

    #[test]
    fn test_with_block_count_never_zero() {
        let config = BoardConfig::default().with_block_count(0);
        assert_eq!(config.block_count(), 1);
        assert_eq!(config.tile_count(), 8);
    }

    #[test]
    fn test_block_count_is_clamped_to_the_classic() {
        let config = BoardConfig::default().with_block_count(usize::MAX / 4);
        assert_eq!(config.block_count(), BoardConfig::MAX_BLOCK_COUNT);
        assert_eq!(config.tile_count(), 1000);
        assert_eq!(
            BoardConfig::new(usize::MAX, false, Difficulty::Hard).tile_count(),
            1000
        );
    }

    #[test]
    fn test_deserialize_round_trip() {
        let config = BoardConfig::new(8, false, Difficulty::Medium);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<BoardConfig>(&json).unwrap(), config);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_block_count() {
        for block_count in [0_u64, 126, 2_305_843_009_213_693_952] {
            let json = format!(
                r#"{{"block_count": {block_count}, "sequential_blocks": true, "difficulty": "Easy"}}"#
            );
            let err = serde_json::from_str::<BoardConfig>(&json).unwrap_err();
            assert!(err.to_string().contains("block count"), "{err}");
        }
        let json = r#"{"block_count": 125, "sequential_blocks": true, "difficulty": "Hard"}"#;
        let config = serde_json::from_str::<BoardConfig>(json).unwrap();
        assert_eq!(config.tile_count(), 1000);
    }

    #[test]
    fn test_default_matches_forty_tile_board() {
        let config = BoardConfig::default();
        assert_eq!(config.tile_count(), 40);
        assert!(config.sequential_blocks());
        assert!(config.difficulty().is_easy());
    }
}

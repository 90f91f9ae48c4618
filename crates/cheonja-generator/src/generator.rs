use cheonja_core::{CharacterPool, CharacterRecord};

use crate::{
    BoardConfig, BoardSeed, GenerateError, RandomSource, SeededRandom, scramble, select,
};

/// A solved arrangement and the scrambled arrangement it starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    /// The solved arrangement: selected blocks in ascending order.
    pub target: Vec<CharacterRecord>,
    /// The starting arrangement: a permutation of `target`.
    pub initial: Vec<CharacterRecord>,
    /// Positions whose tile was deliberately left in place.
    pub kept: Vec<usize>,
}

impl GameBoard {
    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.target.len()
    }

    /// Number of positions where `initial` already matches `target`.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.initial
            .iter()
            .zip(&self.target)
            .filter(|(tile, target)| tile.id == target.id)
            .count()
    }
}

/// A board produced by [`BoardGenerator`], with the inputs that reproduce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The generated board.
    pub board: GameBoard,
    /// The configuration it was generated for.
    pub config: BoardConfig,
    /// The seed that reproduces it from the same pool.
    pub seed: BoardSeed,
}

/// Generates memory-game boards from a character pool.
///
/// Generation is all-or-nothing: either both arrangements are produced or an
/// error is returned.
///
/// # Example
///
/// ```
/// use cheonja_generator::{BoardConfig, BoardGenerator, Difficulty, testing::pool_with_ids};
///
/// let pool = pool_with_ids(1..=16);
/// let config = BoardConfig::default().with_block_count(2);
/// let generated = BoardGenerator::new(&pool).generate(&config).unwrap();
///
/// assert_eq!(generated.board.tile_count(), 16);
/// assert_eq!(generated.board.correct_count(), 8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardGenerator<'a> {
    pool: &'a CharacterPool,
}

impl<'a> BoardGenerator<'a> {
    /// Creates a generator drawing from `pool`.
    #[must_use]
    pub fn new(pool: &'a CharacterPool) -> Self {
        Self { pool }
    }

    /// Generates a board from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`BoardGenerator::generate_with_random`].
    pub fn generate(&self, config: &BoardConfig) -> Result<GeneratedBoard, GenerateError> {
        self.generate_with_seed(config, BoardSeed::random())
    }

    /// Generates the board determined by `seed`.
    ///
    /// # Errors
    ///
    /// See [`BoardGenerator::generate_with_random`].
    pub fn generate_with_seed(
        &self,
        config: &BoardConfig,
        seed: BoardSeed,
    ) -> Result<GeneratedBoard, GenerateError> {
        let mut random = SeededRandom::new(seed);
        let board = self.generate_with_random(config, &mut random)?;
        Ok(GeneratedBoard {
            board,
            config: *config,
            seed,
        })
    }

    /// Generates a board using draws from `random`.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::InsufficientPool`] if the pool has fewer records than tiles.
    /// - [`GenerateError::InsufficientGroups`] if the pool has too few complete blocks.
    /// - [`GenerateError::DerangementUnsatisfiable`] if the board cannot be scrambled.
    pub fn generate_with_random<R>(
        &self,
        config: &BoardConfig,
        random: &mut R,
    ) -> Result<GameBoard, GenerateError>
    where
        R: RandomSource + ?Sized,
    {
        let blocks = select::select_blocks(
            self.pool,
            config.block_count(),
            config.sequential_blocks(),
            random,
        )?;
        let target = select::target_board(&blocks);
        let scramble::Scrambled {
            board: initial,
            kept,
        } = scramble::scramble(&target, config.difficulty(), random)?;

        log::debug!(
            "generated {} tiles at {} with {} kept in place",
            target.len(),
            config.difficulty(),
            kept.len(),
        );

        Ok(GameBoard {
            target,
            initial,
            kept,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::{Difficulty, testing::pool_with_ids};

    fn ids(records: &[CharacterRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id.get()).collect()
    }

    fn sorted_ids(records: &[CharacterRecord]) -> Vec<u32> {
        let mut ids = ids(records);
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_forty_records_five_blocks_hard() {
        let pool = pool_with_ids(1..=40);
        let config = BoardConfig::default()
            .with_block_count(5)
            .with_sequential_blocks(true)
            .with_difficulty(Difficulty::Hard);
        let generated = BoardGenerator::new(&pool).generate(&config).unwrap();
        let board = &generated.board;

        assert_eq!(ids(&board.target), (1..=40).collect::<Vec<_>>());
        assert_eq!(board.correct_count(), 0);
        assert_eq!(sorted_ids(&board.initial), ids(&board.target));
    }

    #[test]
    fn test_sixteen_records_two_blocks_easy() {
        let pool = pool_with_ids(1..=16);
        let config = BoardConfig::default()
            .with_block_count(2)
            .with_difficulty(Difficulty::Easy);
        let generated = BoardGenerator::new(&pool).generate(&config).unwrap();
        let board = &generated.board;

        assert_eq!(board.correct_count(), 8);
        for pair in 0..8 {
            let correct_in_pair = (pair * 2..pair * 2 + 2)
                .filter(|&i| board.initial[i].id == board.target[i].id)
                .count();
            assert_eq!(correct_in_pair, 1, "pair {pair}");
        }
    }

    #[test]
    fn test_undersized_pool_fails() {
        let pool = pool_with_ids(1..=30);
        let config = BoardConfig::default();
        assert_eq!(
            BoardGenerator::new(&pool).generate(&config),
            Err(GenerateError::InsufficientPool {
                required: 40,
                available: 30
            })
        );
    }

    #[test]
    fn test_same_seed_same_board() {
        let pool = pool_with_ids(1..=200);
        let generator = BoardGenerator::new(&pool);
        let config = BoardConfig::default()
            .with_sequential_blocks(false)
            .with_difficulty(Difficulty::Medium);
        let seed = BoardSeed::from_phrase("재현");
        let a = generator.generate_with_seed(&config, seed).unwrap();
        let b = generator.generate_with_seed(&config, seed).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, seed);
        assert_eq!(a.config, config);
    }

    fn config_strategy() -> impl Strategy<Value = BoardConfig> {
        (
            prop::sample::select(BoardConfig::BLOCK_COUNT_PRESETS.to_vec()),
            any::<bool>(),
            prop::sample::select(Difficulty::ALL.to_vec()),
        )
            .prop_map(|(block_count, sequential, difficulty)| {
                BoardConfig::default()
                    .with_block_count(block_count)
                    .with_sequential_blocks(sequential)
                    .with_difficulty(difficulty)
            })
    }

    proptest! {
        #[test]
        fn test_prop_board_invariants(
            config in config_strategy(),
            seed_bytes in any::<[u8; 32]>(),
            missing in prop::collection::hash_set(1u32..=160, 0..8),
        ) {
            let pool = pool_with_ids((1..=160).filter(|id| !missing.contains(id)));
            let seed = BoardSeed::from_bytes(seed_bytes);
            let result = BoardGenerator::new(&pool).generate_with_seed(&config, seed);

            let valid_blocks = pool.blocks().len();
            if pool.len() < config.tile_count() {
                prop_assert!(matches!(result, Err(GenerateError::InsufficientPool { .. })), "expected InsufficientPool, got {:?}", result);
                return Ok(());
            }
            if valid_blocks < config.block_count() {
                prop_assert!(matches!(result, Err(GenerateError::InsufficientGroups { .. })), "expected InsufficientGroups, got {:?}", result);
                return Ok(());
            }
            let board = result.unwrap().board;

            // target: whole valid blocks, ascending
            prop_assert_eq!(board.target.len(), config.tile_count());
            for chunk in board.target.chunks(8) {
                let index = chunk[0].id.block_index();
                prop_assert!(index.is_valid_block(chunk));
            }
            let target_ids = ids(&board.target);
            prop_assert!(target_ids.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(target_ids.iter().collect::<HashSet<_>>().len(), target_ids.len());

            // initial: permutation of target
            prop_assert_eq!(sorted_ids(&board.initial), target_ids);

            // exact kept-correct count
            let expected = match config.difficulty() {
                Difficulty::Easy => config.tile_count() / 2,
                Difficulty::Medium => config.tile_count() / 4,
                Difficulty::Hard => 0,
            };
            prop_assert_eq!(board.correct_count(), expected);
            prop_assert_eq!(board.kept.len(), expected);
            for &i in &board.kept {
                prop_assert_eq!(board.initial[i].id, board.target[i].id);
            }
        }
    }
}

//! Memory-game board generation.
//!
//! Boards are built in two steps:
//!
//! 1. **Block selection** ([`select`]) - choose whole 8-character blocks from
//!    the pool, either as one contiguous run or scattered, and concatenate
//!    them in ascending order into the *target* (solved) board.
//! 2. **Scrambling** ([`scramble`]) - derive the *initial* board from the
//!    target. Depending on [`Difficulty`], one tile per group of 2 or 4 stays
//!    in place and the remaining tiles are deranged among themselves, or the
//!    whole board is deranged.
//!
//! Every random decision goes through a [`RandomSource`], so a
//! [`BoardSeed`] reproduces a board and tests can script the draws.
//!
//! # Examples
//!
//! ```
//! use cheonja_generator::{BoardConfig, BoardGenerator, Difficulty, testing::pool_with_ids};
//!
//! let pool = pool_with_ids(1..=80);
//! let config = BoardConfig::default()
//!     .with_sequential_blocks(false)
//!     .with_difficulty(Difficulty::Medium);
//!
//! let generated = BoardGenerator::new(&pool).generate(&config).unwrap();
//! assert_eq!(generated.board.tile_count(), 40);
//! assert_eq!(generated.board.correct_count(), 10);
//! ```

mod config;
pub mod derange;
mod error;
mod generator;
pub mod random;
pub mod scramble;
mod seed;
pub mod select;
pub mod testing;

pub use self::{
    config::{BlockCountError, BoardConfig, Difficulty},
    error::GenerateError,
    generator::{BoardGenerator, GameBoard, GeneratedBoard},
    random::{RandomSource, SeededRandom},
    seed::{BoardSeed, SeedParseError},
};

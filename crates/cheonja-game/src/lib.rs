//! Game logic for Thousand Character Classic study.
//!
//! - [`TileGame`] is the tile-swapping memory game on a generated board.
//! - [`GameSession`] drives games through [`GameAction`]s and records best
//!   times in a [`KeyValueStore`].
//! - [`QuizSession`] asks for the reading of each character.
//!
//! # Examples
//!
//! ```
//! use cheonja_game::{GameAction, GameEvent, GameSession, MemoryStore};
//! use cheonja_generator::{BoardConfig, testing::pool_with_ids};
//!
//! let mut session = GameSession::new(pool_with_ids(1..=40), MemoryStore::new());
//! session.dispatch(GameAction::Start(BoardConfig::default())).unwrap();
//!
//! let event = session.dispatch(GameAction::SelectTile(0)).unwrap();
//! assert_eq!(event, GameEvent::TileArmed(0));
//! ```

mod best_times;
mod elapsed;
mod error;
mod quiz;
mod session;
mod store;
mod tile_game;

pub use self::{
    best_times::{BestTimes, MAX_BEST_TIMES, best_times_key},
    elapsed::format_elapsed,
    error::{GameError, QuizError, SessionError},
    quiz::{OPTION_COUNT, QUIZ_LENGTH, Question, QuizOption, QuizSession},
    session::{GameAction, GameEvent, GameSession},
    store::{BestTimeStore, KeyValueStore, MemoryStore},
    tile_game::{GameState, SelectOutcome, SwapResult, TileGame},
};

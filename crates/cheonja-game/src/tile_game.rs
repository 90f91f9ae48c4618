use cheonja_core::CharacterRecord;
use cheonja_generator::{BoardConfig, GameBoard};

use crate::GameError;

/// Lifecycle of a [`TileGame`].
///
/// `Running` and `Paused` alternate through [`TileGame::pause_resume`]; a win
/// or [`TileGame::stop`] ends in `Stopped`, which is final for that game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    /// No game in progress.
    Stopped,
    /// Tiles can be selected and the timer advances.
    Running,
    /// Tiles are locked and the timer is held.
    Paused,
}

/// Result of a completed swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapResult {
    /// The tile selected first.
    pub first: usize,
    /// The tile selected second.
    pub second: usize,
    /// Correctly placed tiles before the swap.
    pub correct_before: usize,
    /// Correctly placed tiles after the swap.
    pub correct_after: usize,
    /// Whether the swap completed the board.
    pub solved: bool,
}

impl SwapResult {
    /// Change in correctly placed tiles; always within `-2..=2`.
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub fn delta(&self) -> isize {
        self.correct_after as isize - self.correct_before as isize
    }
}

/// Outcome of [`TileGame::select_tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectOutcome {
    /// The tile was armed as the first of a pair.
    Armed(usize),
    /// The armed tile was selected again and is no longer armed.
    Disarmed(usize),
    /// The tile completed a pair and the two tiles were swapped.
    Swapped(SwapResult),
}

/// A tile-matching game session.
///
/// The player restores the target arrangement by swapping pairs of tiles.
/// The live board is re-scored after every swap; the game is won when every
/// tile matches the target.
///
/// # Example
///
/// ```
/// use cheonja_game::{GameState, SelectOutcome, TileGame};
/// use cheonja_generator::{BoardConfig, BoardGenerator, testing::pool_with_ids};
///
/// let pool = pool_with_ids(1..=16);
/// let config = BoardConfig::default().with_block_count(2);
/// let generated = BoardGenerator::new(&pool).generate(&config).unwrap();
/// let mut game = TileGame::new(generated.board, config);
///
/// assert_eq!(game.state(), GameState::Running);
/// assert_eq!(game.correct_count(), 8);
///
/// assert_eq!(game.select_tile(0), Ok(SelectOutcome::Armed(0)));
/// assert!(game.select_tile(1).unwrap().is_swapped());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGame {
    config: BoardConfig,
    target: Vec<CharacterRecord>,
    board: Vec<CharacterRecord>,
    state: GameState,
    selected: Option<usize>,
    elapsed_secs: u32,
    correct_count: usize,
}

impl TileGame {
    /// Starts a game on a freshly generated board.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(board: GameBoard, config: BoardConfig) -> Self {
        let GameBoard {
            target,
            initial,
            kept: _,
        } = board;
        let mut game = Self {
            config,
            target,
            board: initial,
            state: GameState::Running,
            selected: None,
            elapsed_secs: 0,
            correct_count: 0,
        };
        game.correct_count = game.count_correct();
        game
    }

    /// Returns the configuration this game was generated for.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the live board.
    #[must_use]
    pub fn tiles(&self) -> &[CharacterRecord] {
        &self.board
    }

    /// Returns the solved arrangement.
    #[must_use]
    pub fn target(&self) -> &[CharacterRecord] {
        &self.target
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.board.len()
    }

    /// Returns the armed tile, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Seconds spent in the running state.
    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// Number of tiles currently in their target position.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// Returns `true` if the tile at `index` is in its target position.
    #[must_use]
    pub fn is_correct_at(&self, index: usize) -> bool {
        match (self.board.get(index), self.target.get(index)) {
            (Some(tile), Some(target)) => tile.id == target.id,
            _ => false,
        }
    }

    /// Returns `true` if every tile is in its target position.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.correct_count == self.tile_count()
    }

    fn count_correct(&self) -> usize {
        (0..self.board.len())
            .filter(|&i| self.is_correct_at(i))
            .count()
    }

    /// Selects a tile.
    ///
    /// The first selection arms the tile. The second selection swaps the armed
    /// tile with this one, clears the selection, and re-scores the board.
    /// Selecting the armed tile again disarms it without touching the board.
    /// Completing the board stops the game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotRunning`] unless the game is running, and
    /// [`GameError::IndexOutOfRange`] for an index outside the board.
    pub fn select_tile(&mut self, index: usize) -> Result<SelectOutcome, GameError> {
        if !self.state.is_running() {
            return Err(GameError::NotRunning);
        }
        if index >= self.tile_count() {
            return Err(GameError::IndexOutOfRange {
                index,
                len: self.tile_count(),
            });
        }

        let Some(first) = self.selected.take() else {
            self.selected = Some(index);
            return Ok(SelectOutcome::Armed(index));
        };
        if first == index {
            return Ok(SelectOutcome::Disarmed(index));
        }

        let correct_before = self.correct_count;
        self.board.swap(first, index);
        self.correct_count = self.count_correct();
        let solved = self.is_solved();
        if solved {
            self.state = GameState::Stopped;
            log::info!(
                "board of {} tiles solved in {} s",
                self.tile_count(),
                self.elapsed_secs
            );
        }

        Ok(SelectOutcome::Swapped(SwapResult {
            first,
            second: index,
            correct_before,
            correct_after: self.correct_count,
            solved,
        }))
    }

    /// Toggles between running and paused, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotRunning`] if the game is stopped.
    pub fn pause_resume(&mut self) -> Result<GameState, GameError> {
        self.state = match self.state {
            GameState::Running => GameState::Paused,
            GameState::Paused => GameState::Running,
            GameState::Stopped => return Err(GameError::NotRunning),
        };
        Ok(self.state)
    }

    /// Advances the timer by one second while running.
    ///
    /// Returns `true` if the timer advanced.
    pub fn tick(&mut self) -> bool {
        if self.state.is_running() {
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
            true
        } else {
            false
        }
    }

    /// Ends the game without a win.
    pub fn stop(&mut self) {
        self.state = GameState::Stopped;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use cheonja_generator::{
        BoardGenerator, BoardSeed, Difficulty, SeededRandom, testing::pool_with_ids,
    };
    use proptest::prelude::*;

    use super::*;

    fn new_game(difficulty: Difficulty, phrase: &str) -> TileGame {
        let pool = pool_with_ids(1..=40);
        let config = BoardConfig::default().with_difficulty(difficulty);
        let mut random = SeededRandom::new(BoardSeed::from_phrase(phrase));
        let board = BoardGenerator::new(&pool)
            .generate_with_random(&config, &mut random)
            .unwrap();
        TileGame::new(board, config)
    }

    /// Swaps tiles until the board is solved, returning the last outcome.
    fn solve(game: &mut TileGame) -> SwapResult {
        let mut last = None;
        for i in 0..game.tile_count() {
            if game.is_correct_at(i) {
                continue;
            }
            let wanted = game.target()[i].id;
            let j = (i + 1..game.tile_count())
                .find(|&j| game.tiles()[j].id == wanted)
                .unwrap();
            game.select_tile(i).unwrap();
            match game.select_tile(j).unwrap() {
                SelectOutcome::Swapped(result) => last = Some(result),
                SelectOutcome::Armed(_) | SelectOutcome::Disarmed(_) => panic!("second selection must swap"),
            }
        }
        last.unwrap()
    }

    #[test]
    fn test_new_game_scores_initial_board() {
        let game = new_game(Difficulty::Medium, "medium");
        assert_eq!(game.state(), GameState::Running);
        assert_eq!(game.correct_count(), 10);
        assert_eq!(game.selected(), None);
        assert_eq!(game.elapsed_secs(), 0);
    }

    #[test]
    fn test_select_arms_then_swaps() {
        let mut game = new_game(Difficulty::Hard, "swap");
        let before = game.tiles().to_vec();

        assert_eq!(game.select_tile(3), Ok(SelectOutcome::Armed(3)));
        assert_eq!(game.selected(), Some(3));

        let outcome = game.select_tile(7).unwrap();
        let SelectOutcome::Swapped(result) = outcome else {
            panic!("expected a swap");
        };
        assert_eq!((result.first, result.second), (3, 7));
        assert_eq!(game.selected(), None);
        assert_eq!(game.tiles()[3], before[7]);
        assert_eq!(game.tiles()[7], before[3]);
    }

    #[test]
    fn test_selecting_armed_tile_disarms() {
        let mut game = new_game(Difficulty::Easy, "disarm");
        let before = game.tiles().to_vec();
        let correct = game.correct_count();
        game.select_tile(5).unwrap();
        assert_eq!(game.select_tile(5), Ok(SelectOutcome::Disarmed(5)));
        assert_eq!(game.tiles(), before.as_slice());
        assert_eq!(game.correct_count(), correct);
        assert_eq!(game.selected(), None);

        assert_eq!(game.select_tile(5), Ok(SelectOutcome::Armed(5)));
    }

    #[test]
    fn test_index_out_of_range() {
        let mut game = new_game(Difficulty::Easy, "range");
        assert_eq!(
            game.select_tile(40),
            Err(GameError::IndexOutOfRange { index: 40, len: 40 })
        );
    }

    #[test]
    fn test_pause_blocks_selection_and_timer() {
        let mut game = new_game(Difficulty::Easy, "pause");
        assert!(game.tick());
        assert_eq!(game.pause_resume(), Ok(GameState::Paused));
        assert!(!game.tick());
        assert_eq!(game.select_tile(0), Err(GameError::NotRunning));
        assert_eq!(game.elapsed_secs(), 1);

        assert_eq!(game.pause_resume(), Ok(GameState::Running));
        assert!(game.tick());
        assert_eq!(game.elapsed_secs(), 2);
    }

    #[test]
    fn test_solving_stops_the_game() {
        let mut game = new_game(Difficulty::Hard, "solve");
        game.tick();
        game.tick();
        let last = solve(&mut game);
        assert!(last.solved);
        assert!(game.is_solved());
        assert_eq!(game.correct_count(), 40);
        assert_eq!(game.state(), GameState::Stopped);
        assert!(!game.tick());
        assert_eq!(game.elapsed_secs(), 2);
        assert_eq!(game.pause_resume(), Err(GameError::NotRunning));
        assert_eq!(game.select_tile(0), Err(GameError::NotRunning));
    }

    #[test]
    fn test_stop() {
        let mut game = new_game(Difficulty::Easy, "stop");
        game.select_tile(1).unwrap();
        game.stop();
        assert!(game.state().is_stopped());
        assert_eq!(game.selected(), None);
    }

    proptest! {
        #[test]
        fn test_prop_swap_changes_score_by_at_most_two(
            phrase in "[a-z]{1,8}",
            swaps in prop::collection::vec((0usize..40, 0usize..40), 1..30),
        ) {
            let mut game = new_game(Difficulty::Easy, &phrase);
            for (a, b) in swaps {
                if !game.state().is_running() {
                    break;
                }
                game.select_tile(a).unwrap();
                let result = match game.select_tile(b).unwrap() {
                    SelectOutcome::Swapped(result) => result,
                    SelectOutcome::Disarmed(index) if a == b && index == b => continue,
                    outcome => {
                        return Err(TestCaseError::fail(format!("unexpected {outcome:?}")));
                    }
                };
                prop_assert!((-2..=2).contains(&result.delta()));
                let recount = (0..game.tile_count()).filter(|&i| game.is_correct_at(i)).count();
                prop_assert_eq!(recount, game.correct_count());
            }
        }
    }
}

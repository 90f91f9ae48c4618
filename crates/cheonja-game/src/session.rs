use cheonja_core::CharacterPool;
use cheonja_generator::{BoardConfig, BoardGenerator, RandomSource, SeededRandom};

use crate::{
    BestTimeStore, BestTimes, GameState, KeyValueStore, SelectOutcome, SessionError, SwapResult,
    TileGame,
};

/// Player input to a [`GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Generates a board for the configuration and starts a new game,
    /// replacing any current game.
    Start(BoardConfig),
    /// Pauses or resumes the current game.
    PauseResume,
    /// Selects a tile on the current game's board.
    SelectTile(usize),
    /// Advances the game timer by one second.
    Tick,
    /// Stops and discards the current game.
    Exit,
}

/// What a dispatched [`GameAction`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameEvent {
    /// A new game started.
    Started {
        /// Tiles on the new board.
        tile_count: usize,
        /// Tiles already in place.
        correct_count: usize,
    },
    /// The game was paused or resumed.
    StateChanged(GameState),
    /// A tile was armed for swapping.
    TileArmed(usize),
    /// The armed tile was selected again and disarmed.
    TileDisarmed(usize),
    /// Two tiles were swapped without completing the board.
    TilesSwapped(SwapResult),
    /// The last swap completed the board.
    Won {
        /// The winning swap.
        swap: SwapResult,
        /// Completion time.
        elapsed_secs: u32,
        /// Position in the best-time list, if the time made it.
        rank: Option<usize>,
    },
    /// The timer advanced.
    Ticked(u32),
    /// The action had nothing to act on.
    Idle,
    /// The game was discarded.
    Exited,
}

/// Drives tile games over a character pool.
///
/// The session owns the pool, the randomness used for new boards, the
/// current [`TileGame`] and the best-time store. Every change goes through
/// [`GameSession::dispatch`].
///
/// # Example
///
/// ```
/// use cheonja_game::{GameAction, GameEvent, GameSession, MemoryStore};
/// use cheonja_generator::{BoardConfig, testing::pool_with_ids};
///
/// let mut session = GameSession::new(pool_with_ids(1..=40), MemoryStore::new());
/// let event = session
///     .dispatch(GameAction::Start(BoardConfig::default()))
///     .unwrap();
/// assert_eq!(
///     event,
///     GameEvent::Started { tile_count: 40, correct_count: 20 }
/// );
/// assert_eq!(session.dispatch(GameAction::Tick).unwrap(), GameEvent::Ticked(1));
/// ```
#[derive(Debug)]
pub struct GameSession<S, R = SeededRandom> {
    pool: CharacterPool,
    config: BoardConfig,
    game: Option<TileGame>,
    random: R,
    best_times: BestTimeStore<S>,
}

impl<S> GameSession<S>
where
    S: KeyValueStore,
{
    /// Creates a session drawing boards from fresh entropy.
    pub fn new(pool: CharacterPool, store: S) -> Self {
        Self::with_random(pool, store, SeededRandom::from_entropy())
    }
}

impl<S, R> GameSession<S, R>
where
    S: KeyValueStore,
    R: RandomSource,
{
    /// Creates a session drawing boards from `random`.
    pub fn with_random(pool: CharacterPool, store: S, random: R) -> Self {
        Self {
            pool,
            config: BoardConfig::default(),
            game: None,
            random,
            best_times: BestTimeStore::new(store),
        }
    }

    /// Returns the character pool.
    pub fn pool(&self) -> &CharacterPool {
        &self.pool
    }

    /// Switches to a different character pool, discarding the current game.
    pub fn replace_pool(&mut self, pool: CharacterPool) {
        self.pool = pool;
        self.game = None;
    }

    /// Returns the configuration of the last started game.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the current game, if any.
    pub fn game(&self) -> Option<&TileGame> {
        self.game.as_ref()
    }

    /// Returns the best times for `config`.
    pub fn best_times(&self, config: &BoardConfig) -> BestTimes {
        self.best_times.load(config)
    }

    /// Returns the best-time store.
    pub fn best_time_store(&self) -> &BestTimeStore<S> {
        &self.best_times
    }

    /// Returns the best-time store mutably.
    pub fn best_time_store_mut(&mut self) -> &mut BestTimeStore<S> {
        &mut self.best_times
    }

    /// Applies `action`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Generate`] if a new board cannot be generated; the
    ///   current game is kept.
    /// - [`SessionError::Game`] if the current game rejects the action.
    /// - [`SessionError::NoActiveGame`] for game actions before any start.
    pub fn dispatch(&mut self, action: GameAction) -> Result<GameEvent, SessionError> {
        match action {
            GameAction::Start(config) => self.start(config),
            GameAction::PauseResume => {
                let state = self.game_mut()?.pause_resume()?;
                Ok(GameEvent::StateChanged(state))
            }
            GameAction::SelectTile(index) => self.select_tile(index),
            GameAction::Tick => {
                let event = match self.game.as_mut() {
                    Some(game) if game.state().is_running() => {
                        game.tick();
                        GameEvent::Ticked(game.elapsed_secs())
                    }
                    _ => GameEvent::Idle,
                };
                Ok(event)
            }
            GameAction::Exit => {
                if let Some(mut game) = self.game.take() {
                    game.stop();
                    log::debug!("discarded game after {} s", game.elapsed_secs());
                }
                Ok(GameEvent::Exited)
            }
        }
    }

    fn game_mut(&mut self) -> Result<&mut TileGame, SessionError> {
        self.game.as_mut().ok_or(SessionError::NoActiveGame)
    }

    fn start(&mut self, config: BoardConfig) -> Result<GameEvent, SessionError> {
        let board = BoardGenerator::new(&self.pool).generate_with_random(&config, &mut self.random)?;
        let game = TileGame::new(board, config);
        let event = GameEvent::Started {
            tile_count: game.tile_count(),
            correct_count: game.correct_count(),
        };
        log::info!(
            "started {} game with {} tiles",
            config.difficulty(),
            game.tile_count()
        );
        self.config = config;
        self.game = Some(game);
        Ok(event)
    }

    fn select_tile(&mut self, index: usize) -> Result<GameEvent, SessionError> {
        let game = self.game_mut()?;
        let swap = match game.select_tile(index)? {
            SelectOutcome::Armed(index) => return Ok(GameEvent::TileArmed(index)),
            SelectOutcome::Disarmed(index) => return Ok(GameEvent::TileDisarmed(index)),
            SelectOutcome::Swapped(swap) if !swap.solved => {
                return Ok(GameEvent::TilesSwapped(swap));
            }
            SelectOutcome::Swapped(swap) => swap,
        };
        let elapsed_secs = game.elapsed_secs();
        let config = *game.config();
        let rank = self.best_times.record(&config, elapsed_secs);
        Ok(GameEvent::Won {
            swap,
            elapsed_secs,
            rank,
        })
    }
}

use cheonja_core::{CharacterPool, IdRange};
use cheonja_game::{GameSession, MemoryStore, QuizSession, TileGame};

use crate::state::Settings;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum Screen {
    #[default]
    RangeInput,
    Quiz,
    Viewer,
    Game,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct RangeInput {
    pub(crate) start: String,
    pub(crate) end: String,
}

impl RangeInput {
    pub(crate) fn from_range(range: IdRange) -> Self {
        Self {
            start: range.start().to_string(),
            end: range.end().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WinSummary {
    pub(crate) elapsed_secs: u32,
    pub(crate) rank: Option<usize>,
}

// AppState holds everything the screens render. Settings and best times are persisted.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) dataset: CharacterPool,
    pub(crate) screen: Screen,
    pub(crate) range_input: RangeInput,
    pub(crate) range: Option<IdRange>,
    pub(crate) quiz: Option<QuizSession>,
    pub(crate) game: GameSession<MemoryStore>,
    pub(crate) settings: Settings,
    pub(crate) win: Option<WinSummary>,
    pub(crate) message: Option<String>,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(dataset: CharacterPool, settings: Settings, best_times: MemoryStore) -> Self {
        Self {
            game: GameSession::new(CharacterPool::default(), best_times),
            dataset,
            screen: Screen::default(),
            range_input: RangeInput::default(),
            range: None,
            quiz: None,
            settings,
            win: None,
            message: None,
            dirty: false,
        }
    }

    /// Records of the dataset inside the chosen range.
    #[must_use]
    pub(crate) fn selected(&self) -> CharacterPool {
        self.range
            .map(|range| self.dataset.select(range))
            .unwrap_or_default()
    }

    #[must_use]
    pub(crate) fn tile_game(&self) -> Option<&TileGame> {
        self.game.game()
    }

    #[must_use]
    pub(crate) fn is_game_running(&self) -> bool {
        self.screen.is_game() && self.tile_game().is_some_and(|game| game.state().is_running())
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

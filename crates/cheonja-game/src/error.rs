use cheonja_generator::GenerateError;

/// Errors returned by [`TileGame`](crate::TileGame) operations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum GameError {
    /// The operation needs a running game.
    #[display("the game is not running")]
    NotRunning,
    /// The tile index is outside the board.
    #[display("tile {index} is outside the board of {len} tiles")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Tiles on the board.
        len: usize,
    },
}

/// Errors returned by [`GameSession::dispatch`](crate::GameSession::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// A new board could not be generated; the previous game is untouched.
    #[display("cannot start a game: {_0}")]
    Generate(#[from] GenerateError),
    /// The live game rejected the action.
    #[display("{_0}")]
    Game(#[from] GameError),
    /// The action needs a game but none has been started.
    #[display("no game has been started")]
    NoActiveGame,
}

/// Errors returned by [`QuizSession`](crate::QuizSession) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum QuizError {
    /// There is no question to answer (the quiz is over).
    #[display("there is no current question")]
    NoQuestion,
    /// The current question has already been answered.
    #[display("the question has already been answered")]
    AlreadyAnswered,
    /// The option index is outside the option list.
    #[display("option {index} is outside the {len} options")]
    OptionOutOfRange {
        /// Requested option.
        index: usize,
        /// Options offered.
        len: usize,
    },
}

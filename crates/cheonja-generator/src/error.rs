/// Errors that can occur while generating a board.
///
/// None of these are recovered automatically: the player has to pick fewer
/// blocks, a lower difficulty, or a wider character range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum GenerateError {
    /// The pool holds fewer records than the board has tiles.
    #[display("not enough characters: {required} required, {available} available")]
    InsufficientPool {
        /// Tiles on the requested board.
        required: usize,
        /// Records in the pool.
        available: usize,
    },
    /// The pool holds fewer complete blocks than requested.
    #[display("not enough complete 8-character blocks: {required} required, {available} available")]
    InsufficientGroups {
        /// Requested block count.
        required: usize,
        /// Valid blocks in the pool.
        available: usize,
    },
    /// The tiles to scramble cannot all be moved off their positions.
    #[display("cannot move all {len} scrambled tiles off their positions")]
    DerangementUnsatisfiable {
        /// Number of tiles that had to be deranged.
        len: usize,
    },
}

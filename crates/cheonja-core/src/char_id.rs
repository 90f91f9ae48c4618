//! 1-based character identifiers.

use std::{fmt, num::NonZeroU32};

use crate::block::{BLOCK_LEN, BlockIndex};

/// Identifier of a character in the dataset.
///
/// Identifiers are 1-based and dense in the reference dataset (`1..=1000`).
/// The value `0` is not a valid identifier.
///
/// # Examples
///
/// ```
/// use cheonja_core::CharId;
///
/// let id = CharId::new(10).unwrap();
/// assert_eq!(id.block_index().index(), 1);
/// assert_eq!(id.slot(), 1);
/// assert!(CharId::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CharId(NonZeroU32);

impl CharId {
    /// Creates an identifier, returning `None` for `0`.
    #[must_use]
    pub const fn new(id: u32) -> Option<Self> {
        match NonZeroU32::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the index of the block this identifier belongs to.
    #[must_use]
    pub const fn block_index(self) -> BlockIndex {
        BlockIndex::new((self.get() - 1) / BLOCK_LEN as u32)
    }

    /// Returns the position of this identifier inside its block (`0..8`).
    #[must_use]
    pub const fn slot(self) -> usize {
        ((self.get() - 1) % BLOCK_LEN as u32) as usize
    }

    /// Returns `true` if this identifier starts a block.
    #[must_use]
    pub const fn is_block_aligned(self) -> bool {
        self.slot() == 0
    }
}

impl fmt::Display for CharId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error returned when converting `0` into a [`CharId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("character id must be at least 1")]
pub struct ZeroIdError;

impl TryFrom<u32> for CharId {
    type Error = ZeroIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ZeroIdError)
    }
}

impl From<CharId> for u32 {
    fn from(id: CharId) -> Self {
        id.get()
    }
}

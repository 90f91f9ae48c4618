//! Blocks of 8 consecutive characters.
//!
//! A block is the atomic unit of selection for game boards. Block `k` holds
//! the identifiers `8k+1 ..= 8k+8`. A block taken from a pool is *valid* only
//! if all 8 members are present, so partial blocks at the edges of a selected
//! range never reach the board.

use std::fmt;

use crate::{CharId, CharacterRecord};

/// Number of characters in a block.
pub const BLOCK_LEN: usize = 8;

/// Zero-based index of a block (`id 1..=8` is block 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockIndex(u32);

impl BlockIndex {
    /// Creates a block index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Returns the first identifier belonging to this block.
    #[must_use]
    pub fn first_id(self) -> CharId {
        let first = self.0 * BLOCK_LEN as u32 + 1;
        CharId::new(first).unwrap_or_else(|| unreachable!("block ids start at 1"))
    }

    /// Returns `true` if `records` forms this block exactly: 8 records with
    /// contiguous identifiers starting at [`BlockIndex::first_id`].
    #[must_use]
    pub fn is_valid_block(self, records: &[CharacterRecord]) -> bool {
        records.len() == BLOCK_LEN
            && records
                .iter()
                .zip(self.first_id().get()..)
                .all(|(record, expected)| record.id.get() == expected)
    }
}

impl fmt::Display for BlockIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A valid block borrowed from a [`CharacterPool`](crate::CharacterPool).
///
/// The records are always in ascending identifier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    index: BlockIndex,
    records: &'a [CharacterRecord],
}

impl<'a> Block<'a> {
    /// Wraps `records` as block `index` if they satisfy the block-validity rule.
    #[must_use]
    pub fn new(index: BlockIndex, records: &'a [CharacterRecord]) -> Option<Self> {
        index
            .is_valid_block(records)
            .then_some(Self { index, records })
    }

    /// Returns the block index.
    #[must_use]
    pub fn index(&self) -> BlockIndex {
        self.index
    }

    /// Returns the 8 records of the block.
    #[must_use]
    pub fn records(&self) -> &'a [CharacterRecord] {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(ids: impl IntoIterator<Item = u32>) -> Vec<CharacterRecord> {
        ids.into_iter()
            .map(|id| CharacterRecord::new(CharId::new(id).unwrap(), "字", "자", "글자"))
            .collect()
    }

    #[test]
    fn test_first_id() {
        assert_eq!(BlockIndex::new(0).first_id().get(), 1);
        assert_eq!(BlockIndex::new(3).first_id().get(), 25);
    }

    #[test]
    fn test_valid_block() {
        let block = records(9..=16);
        assert!(BlockIndex::new(1).is_valid_block(&block));
        assert!(Block::new(BlockIndex::new(1), &block).is_some());
    }

    #[test]
    fn test_misaligned_block_is_invalid() {
        let block = records(2..=9);
        assert!(!BlockIndex::new(0).is_valid_block(&block));
        assert!(!BlockIndex::new(1).is_valid_block(&block));
    }

    #[test]
    fn test_incomplete_block_is_invalid() {
        let short = records(1..=7);
        assert!(!BlockIndex::new(0).is_valid_block(&short));

        let gap = records([1, 2, 3, 4, 5, 6, 7, 9]);
        assert!(!BlockIndex::new(0).is_valid_block(&gap));
    }
}

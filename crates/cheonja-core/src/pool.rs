//! Ordered collections of character records.

use std::collections::HashSet;

use crate::{Block, CharId, CharacterRecord, IdRange};

/// An ordered, read-only pool of character records.
///
/// Records are kept in ascending identifier order and identifiers are unique.
/// The pool does not require identifiers to be dense; gaps simply make the
/// surrounding blocks invalid for board generation.
///
/// # Examples
///
/// ```
/// use cheonja_core::{CharId, CharacterPool, CharacterRecord};
///
/// let records = (1..=20)
///     .map(|id| CharacterRecord::new(CharId::new(id).unwrap(), "字", "자", "글자"))
///     .collect();
/// let pool = CharacterPool::new(records).unwrap();
///
/// // ids 17..=20 form an incomplete block and are not offered
/// assert_eq!(pool.blocks().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterPool {
    records: Vec<CharacterRecord>,
}

/// Errors that can occur while loading a dataset into a [`CharacterPool`].
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DatasetError {
    /// The dataset is not a JSON array of records.
    #[display("malformed dataset: {_0}")]
    Json(#[from] serde_json::Error),
    /// The same identifier occurs more than once.
    #[display("duplicate character id {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: CharId,
    },
}

impl CharacterPool {
    /// Creates a pool, sorting the records by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DuplicateId`] if two records share an identifier.
    pub fn new(mut records: Vec<CharacterRecord>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(DatasetError::DuplicateId { id: record.id });
            }
        }
        records.sort_by_key(|record| record.id);
        Ok(Self { records })
    }

    /// Parses a JSON array of `{ id, character, sound, meaning }` objects.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Json`] for malformed input (including id `0`)
    /// and [`DatasetError::DuplicateId`] for repeated identifiers.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<CharacterRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Returns all records in ascending identifier order.
    #[must_use]
    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    /// Number of records in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the pool holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by identifier.
    #[must_use]
    pub fn get(&self, id: CharId) -> Option<&CharacterRecord> {
        self.records
            .binary_search_by_key(&id, |record| record.id)
            .ok()
            .map(|i| &self.records[i])
    }

    /// Returns the range between the smallest and largest identifier.
    #[must_use]
    pub fn id_span(&self) -> Option<IdRange> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        IdRange::new(first.id.get(), last.id.get()).ok()
    }

    /// Returns a new pool holding the records whose identifiers lie in `range`.
    #[must_use]
    pub fn select(&self, range: IdRange) -> Self {
        let records = self
            .records
            .iter()
            .filter(|record| range.contains(record.id.get()))
            .cloned()
            .collect();
        Self { records }
    }

    /// Partitions the pool into valid blocks, in ascending block order.
    ///
    /// Blocks with missing members are skipped.
    #[must_use]
    pub fn blocks(&self) -> Vec<Block<'_>> {
        self.records
            .chunk_by(|a, b| a.id.block_index() == b.id.block_index())
            .filter_map(|chunk| Block::new(chunk[0].id.block_index(), chunk))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32) -> CharacterRecord {
        CharacterRecord::new(CharId::new(id).unwrap(), "字", "자", "글자")
    }

    fn pool(ids: impl IntoIterator<Item = u32>) -> CharacterPool {
        CharacterPool::new(ids.into_iter().map(record).collect()).unwrap()
    }

    #[test]
    fn test_new_sorts_records() {
        let pool = pool([3, 1, 2]);
        let ids: Vec<_> = pool.records().iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let result = CharacterPool::new(vec![record(1), record(2), record(1)]);
        assert!(matches!(result, Err(DatasetError::DuplicateId { id }) if id.get() == 1));
    }

    #[test]
    fn test_from_json_str() {
        let pool = CharacterPool::from_json_str(
            r#"[
                {"id": 2, "character": "地", "sound": "지", "meaning": "따"},
                {"id": 1, "character": "天", "sound": "천", "meaning": "하늘"}
            ]"#,
        )
        .unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(CharId::new(1).unwrap()).unwrap().glyph, "天");
        assert!(pool.get(CharId::new(3).unwrap()).is_none());
        assert!(matches!(
            CharacterPool::from_json_str("{}"),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn test_select_and_span() {
        let pool = pool(1..=40);
        let selected = pool.select(IdRange::new(5, 12).unwrap());
        assert_eq!(selected.len(), 8);
        assert_eq!(selected.id_span(), Some(IdRange::new(5, 12).unwrap()));
        assert_eq!(CharacterPool::default().id_span(), None);
    }

    #[test]
    fn test_blocks_skip_partial_and_misaligned() {
        // 5..=12 covers half of block 0 and half of block 1: no valid block
        assert!(pool(5..=12).blocks().is_empty());

        // 1..=24 minus 10: blocks 0 and 2 remain
        let ids = (1..=24).filter(|&id| id != 10);
        let pool = pool(ids);
        let blocks = pool.blocks();
        let indices: Vec<_> = blocks.iter().map(|b| b.index().index()).collect();
        assert_eq!(indices, vec![0, 2]);
        assert!(blocks.iter().all(|b| b.records().len() == 8));
    }

    proptest::proptest! {
        #[test]
        fn test_prop_blocks_are_valid_and_ascending(
            ids in proptest::collection::btree_set(1u32..=200, 0..200)
        ) {
            let pool = pool(ids.iter().copied());
            let blocks = pool.blocks();
            for block in &blocks {
                proptest::prop_assert!(block.index().is_valid_block(block.records()));
                for id in block.records().iter().map(|r| r.id.get()) {
                    proptest::prop_assert!(ids.contains(&id));
                }
            }
            for pair in blocks.windows(2) {
                proptest::prop_assert!(pair[0].index() < pair[1].index());
            }
        }
    }

    #[test]
    fn test_blocks_full_dataset() {
        let pool = pool(1..=1000);
        let blocks = pool.blocks();
        assert_eq!(blocks.len(), 125);
        assert_eq!(blocks[124].records()[7].id.get(), 1000);
    }
}

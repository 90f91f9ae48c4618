//! Block-by-block layout for the read-only viewer.

use crate::{BLOCK_LEN, BlockIndex, CharacterRecord};

/// One row of the viewer: the members of a block placed at their slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerRow<'a> {
    /// The block shown in this row.
    pub block: BlockIndex,
    /// Records by slot (`(id - 1) % 8`); `None` where the record is not loaded.
    pub slots: [Option<&'a CharacterRecord>; BLOCK_LEN],
}

/// Groups `records` into viewer rows in ascending block order.
///
/// Records outside the loaded range leave empty slots, so a range starting in
/// the middle of a block still lines up with the block grid.
#[must_use]
pub fn viewer_rows(records: &[CharacterRecord]) -> Vec<ViewerRow<'_>> {
    let mut sorted: Vec<&CharacterRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.id);

    let mut rows: Vec<ViewerRow<'_>> = vec![];
    for record in sorted {
        let block = record.id.block_index();
        if rows.last().is_none_or(|row| row.block != block) {
            rows.push(ViewerRow {
                block,
                slots: [None; BLOCK_LEN],
            });
        }
        if let Some(row) = rows.last_mut() {
            row.slots[record.id.slot()] = Some(record);
        }
    }
    rows
}

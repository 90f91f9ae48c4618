//! Difficulty-scoped scrambling of the target board.

use std::ops::Range;

use cheonja_core::CharacterRecord;

use crate::{Difficulty, GenerateError, RandomSource, derange};

/// A scrambled board together with the positions left in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scrambled {
    /// The starting arrangement.
    pub board: Vec<CharacterRecord>,
    /// Positions (ascending) whose tile was deliberately kept correct.
    pub kept: Vec<usize>,
}

/// Splits `0..len` into consecutive groups of `group_size`.
///
/// A trailing group of a single position is folded into the group before
/// it, since a lone position would have nothing to trade places with.
#[must_use]
pub fn kept_groups(len: usize, group_size: usize) -> Vec<Range<usize>> {
    assert!(group_size > 0, "group size must be positive");
    let mut groups = (0..len)
        .step_by(group_size)
        .map(|start| start..usize::min(start + group_size, len))
        .collect::<Vec<_>>();
    if groups.len() >= 2
        && groups.last().is_some_and(|g| g.len() == 1)
        && let Some(last) = groups.pop()
        && let Some(prev) = groups.last_mut()
    {
        prev.end = last.end;
    }
    groups
}

/// Builds the starting arrangement for `target` at `difficulty`.
///
/// Easy and medium keep one uniformly chosen tile per group of 2 or 4 in
/// place and derange the rest among themselves; hard deranges the whole
/// board. The number of correctly placed tiles in the result equals
/// `kept.len()` exactly.
///
/// # Errors
///
/// Returns [`GenerateError::DerangementUnsatisfiable`] if the tiles to move
/// cannot all leave their positions (a single tile to move, for instance).
pub fn scramble<R>(
    target: &[CharacterRecord],
    difficulty: Difficulty,
    random: &mut R,
) -> Result<Scrambled, GenerateError>
where
    R: RandomSource + ?Sized,
{
    let mut board = target.to_vec();

    let Some(group_size) = difficulty.kept_group_size() else {
        derange::derange_by_key(&mut board, |record| record.id, random)?;
        return Ok(Scrambled {
            board,
            kept: vec![],
        });
    };

    let kept = kept_groups(target.len(), group_size)
        .into_iter()
        .map(|group| group.start + random.index_below(group.len()))
        .collect::<Vec<_>>();

    let moved = (0..target.len())
        .filter(|i| kept.binary_search(i).is_err())
        .collect::<Vec<_>>();
    let mut tiles = moved
        .iter()
        .map(|&i| target[i].clone())
        .collect::<Vec<_>>();
    derange::derange_by_key(&mut tiles, |record| record.id, random)?;
    for (&i, tile) in moved.iter().zip(tiles) {
        board[i] = tile;
    }

    Ok(Scrambled { board, kept })
}

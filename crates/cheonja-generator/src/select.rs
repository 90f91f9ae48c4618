//! Block selection and target-board construction.

use cheonja_core::{BLOCK_LEN, Block, CharacterPool, CharacterRecord};

use crate::{GenerateError, RandomSource};

/// Chooses `block_count` valid blocks from `pool`.
///
/// With `sequential` set, a uniformly chosen contiguous run of blocks is
/// returned. Otherwise blocks are drawn without replacement (each draw uniform
/// over the remaining blocks) and returned in ascending block order.
///
/// # Errors
///
/// Returns [`GenerateError::InsufficientPool`] if the pool holds fewer than
/// `block_count * 8` records (or that product overflows), and [`GenerateError::InsufficientGroups`] if it
/// holds fewer than `block_count` valid blocks.
pub fn select_blocks<'p, R>(
    pool: &'p CharacterPool,
    block_count: usize,
    sequential: bool,
    random: &mut R,
) -> Result<Vec<Block<'p>>, GenerateError>
where
    R: RandomSource + ?Sized,
{
    let Some(required) = block_count.checked_mul(BLOCK_LEN) else {
        return Err(GenerateError::InsufficientPool {
            required: usize::MAX,
            available: pool.len(),
        });
    };
    if pool.len() < required {
        return Err(GenerateError::InsufficientPool {
            required,
            available: pool.len(),
        });
    }

    let groups = pool.blocks();
    if groups.len() < block_count {
        return Err(GenerateError::InsufficientGroups {
            required: block_count,
            available: groups.len(),
        });
    }

    let indices = if sequential {
        let start = random.index_below(groups.len() - block_count + 1);
        (start..start + block_count).collect::<Vec<_>>()
    } else {
        let mut remaining = (0..groups.len()).collect::<Vec<_>>();
        let mut chosen = Vec::with_capacity(block_count);
        for _ in 0..block_count {
            let i = random.index_below(remaining.len());
            chosen.push(remaining.remove(i));
        }
        chosen.sort_unstable();
        chosen
    };

    log::debug!(
        "selected blocks {:?} of {} (sequential: {sequential})",
        indices
            .iter()
            .map(|&i| groups[i].index().index())
            .collect::<Vec<_>>(),
        groups.len(),
    );

    Ok(indices.into_iter().map(|i| groups[i]).collect())
}

/// Concatenates the records of `blocks` into the solved board.
#[must_use]
pub fn target_board(blocks: &[Block<'_>]) -> Vec<CharacterRecord> {
    blocks
        .iter()
        .flat_map(|block| block.records().iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ScriptedRandom, pool_with_ids};

    fn block_indices(blocks: &[Block<'_>]) -> Vec<u32> {
        blocks.iter().map(|b| b.index().index()).collect()
    }

    #[test]
    fn test_insufficient_pool() {
        let pool = pool_with_ids(1..=39);
        let mut random = ScriptedRandom::new([0.0]);
        assert_eq!(
            select_blocks(&pool, 5, true, &mut random),
            Err(GenerateError::InsufficientPool {
                required: 40,
                available: 39
            })
        );
    }

    #[test]
    fn test_overflowing_block_count_is_insufficient_pool() {
        let pool = pool_with_ids(1..=40);
        let mut random = ScriptedRandom::new([0.0]);
        assert_eq!(
            select_blocks(&pool, usize::MAX / 4 + 1, true, &mut random),
            Err(GenerateError::InsufficientPool {
                required: usize::MAX,
                available: 40
            })
        );
    }

    #[test]
    fn test_insufficient_groups() {
        // 48 records, but 5..=52 only completes blocks 1..=5
        let pool = pool_with_ids(5..=52);
        let mut random = ScriptedRandom::new([0.0]);
        assert_eq!(
            select_blocks(&pool, 6, true, &mut random),
            Err(GenerateError::InsufficientGroups {
                required: 6,
                available: 5
            })
        );
    }

    #[test]
    fn test_sequential_picks_contiguous_run() {
        let pool = pool_with_ids(1..=80);
        // 10 blocks, 6 possible starts; 0.5 * 6 = 3
        let mut random = ScriptedRandom::new([0.5]);
        let blocks = select_blocks(&pool, 5, true, &mut random).unwrap();
        assert_eq!(block_indices(&blocks), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_sequential_with_exact_group_count() {
        let pool = pool_with_ids(1..=40);
        let mut random = ScriptedRandom::new([0.99]);
        let blocks = select_blocks(&pool, 5, true, &mut random).unwrap();
        assert_eq!(block_indices(&blocks), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_scattered_draws_without_replacement_and_sorts() {
        let pool = pool_with_ids(1..=80);
        // remaining 10 -> 0.95 picks 9; remaining 9 -> 0.0 picks 0;
        // remaining 8 ([1..=8]) -> 0.5 picks 5
        let mut random = ScriptedRandom::new([0.95, 0.0, 0.5]);
        let blocks = select_blocks(&pool, 3, false, &mut random).unwrap();
        assert_eq!(block_indices(&blocks), vec![0, 5, 9]);
    }

    #[test]
    fn test_target_board_concatenates_blocks() {
        let pool = pool_with_ids(1..=80);
        let mut random = ScriptedRandom::new([0.95, 0.0]);
        let blocks = select_blocks(&pool, 2, false, &mut random).unwrap();
        let target = target_board(&blocks);
        let ids: Vec<_> = target.iter().map(|r| r.id.get()).collect();
        let expected: Vec<_> = (1..=8).chain(73..=80).collect();
        assert_eq!(ids, expected);
    }
}

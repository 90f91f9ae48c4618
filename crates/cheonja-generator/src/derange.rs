//! Fixed-point-free shuffling.

use crate::{GenerateError, RandomSource, random::shuffle};

/// Upper bound on shuffle attempts in [`derange_by_key`].
///
/// A uniform shuffle of `n >= 2` elements is a derangement with probability
/// at least 1/3, so reaching this bound means the input has no derangement
/// (for instance, every element carries the same key).
pub const MAX_DERANGEMENT_ATTEMPTS: usize = 1_000;

/// Shuffles `items` so that no element keeps the key that was at its position.
///
/// Each attempt is a full Fisher-Yates shuffle followed by a fixed-point scan;
/// any fixed point rejects the attempt. The accepted permutation is uniform
/// over all derangements. Empty input is left as is.
///
/// Returns the number of attempts used.
///
/// # Errors
///
/// Returns [`GenerateError::DerangementUnsatisfiable`] for a single element
/// or when [`MAX_DERANGEMENT_ATTEMPTS`] is exhausted. The order of `items` is
/// unspecified after an error.
pub fn derange_by_key<T, K, F, R>(
    items: &mut [T],
    key: F,
    random: &mut R,
) -> Result<usize, GenerateError>
where
    K: PartialEq,
    F: Fn(&T) -> K,
    R: RandomSource + ?Sized,
{
    let len = items.len();
    match len {
        0 => return Ok(0),
        1 => return Err(GenerateError::DerangementUnsatisfiable { len }),
        _ => {}
    }

    let original = items.iter().map(&key).collect::<Vec<_>>();
    for attempt in 1..=MAX_DERANGEMENT_ATTEMPTS {
        shuffle(items, random);
        let has_fixed_point = items
            .iter()
            .zip(&original)
            .any(|(item, original)| key(item) == *original);
        if !has_fixed_point {
            log::debug!("deranged {len} tiles after {attempt} attempt(s)");
            return Ok(attempt);
        }
    }

    log::warn!("gave up deranging {len} tiles after {MAX_DERANGEMENT_ATTEMPTS} attempts");
    Err(GenerateError::DerangementUnsatisfiable { len })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSeed, SeededRandom, testing::ScriptedRandom};

    #[test]
    fn test_empty_is_trivially_deranged() {
        let mut random = ScriptedRandom::new([0.0]);
        let mut items: [u32; 0] = [];
        assert_eq!(derange_by_key(&mut items, |&x| x, &mut random), Ok(0));
    }

    #[test]
    fn test_single_element_is_unsatisfiable() {
        let mut random = ScriptedRandom::new([0.0]);
        let mut items = [7];
        assert_eq!(
            derange_by_key(&mut items, |&x| x, &mut random),
            Err(GenerateError::DerangementUnsatisfiable { len: 1 })
        );
    }

    #[test]
    fn test_identical_keys_exhaust_attempts() {
        let mut random = SeededRandom::new(BoardSeed::from_phrase("same"));
        let mut items = [1, 1, 1];
        assert_eq!(
            derange_by_key(&mut items, |&x| x, &mut random),
            Err(GenerateError::DerangementUnsatisfiable { len: 3 })
        );
    }

    #[test]
    fn test_rejects_attempts_with_fixed_points() {
        // first shuffle of [a, b]: j = 1 keeps the order (rejected),
        // second shuffle: j = 0 swaps (accepted)
        let mut random = ScriptedRandom::new([0.9, 0.1]);
        let mut items = ['a', 'b'];
        assert_eq!(derange_by_key(&mut items, |&x| x, &mut random), Ok(2));
        assert_eq!(items, ['b', 'a']);
    }

    #[test]
    fn test_no_fixed_points_for_various_lengths() {
        let mut random = SeededRandom::new(BoardSeed::from_phrase("derange"));
        for len in 2..=60 {
            let mut items: Vec<usize> = (0..len).collect();
            derange_by_key(&mut items, |&x| x, &mut random).unwrap();
            assert!(items.iter().enumerate().all(|(i, &x)| i != x));
            let mut sorted = items.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..len).collect::<Vec<_>>());
        }
    }
}

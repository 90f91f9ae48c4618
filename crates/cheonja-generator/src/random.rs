//! Injectable randomness.
//!
//! Generation never reaches for an ambient RNG: every random decision goes
//! through a [`RandomSource`], so tests can script the exact draws and a
//! [`BoardSeed`] reproduces a board.

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::BoardSeed;

/// A source of uniform random floats in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns a uniform index in `0..len`.
    ///
    /// Computed as `floor(next_f64() * len)`, clamped to `len - 1`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn index_below(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick an index from an empty range");
        let value = (self.next_f64() * len as f64).floor() as usize;
        value.min(len - 1)
    }
}

impl<R> RandomSource for &mut R
where
    R: RandomSource + ?Sized,
{
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R> RandomSource for Box<R>
where
    R: RandomSource + ?Sized,
{
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// A reproducible [`RandomSource`] backed by PCG-64.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: Pcg64,
}

impl SeededRandom {
    /// Creates a source whose draws are fully determined by `seed`.
    #[must_use]
    pub fn new(seed: BoardSeed) -> Self {
        Self {
            rng: Pcg64::from_seed(seed.into_bytes()),
        }
    }

    /// Creates a source from a fresh random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(BoardSeed::random())
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Shuffles `items` in place with the Fisher-Yates algorithm.
///
/// Walks from the last element down, swapping each with a uniformly chosen
/// element at or before it.
pub fn shuffle<T, R>(items: &mut [T], random: &mut R)
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = random.index_below(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRandom;

    #[test]
    fn test_index_below_maps_floats_to_indices() {
        let mut random = ScriptedRandom::new([0.0, 0.249, 0.25, 0.999_999]);
        assert_eq!(random.index_below(4), 0);
        assert_eq!(random.index_below(4), 0);
        assert_eq!(random.index_below(4), 1);
        assert_eq!(random.index_below(4), 3);
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn test_index_below_rejects_zero() {
        let mut random = ScriptedRandom::new([0.5]);
        let _ = random.index_below(0);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let seed = BoardSeed::from_phrase("천지현황");
        let mut a = SeededRandom::new(seed);
        let mut b = SeededRandom::new(seed);
        for _ in 0..32 {
            let value = a.next_f64();
            assert!((0.0..1.0).contains(&value));
            assert!((value - b.next_f64()).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut random = SeededRandom::new(BoardSeed::from_phrase("shuffle"));
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut random);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_with_scripted_draws() {
        // i = 2 picks j = 0, i = 1 picks j = 1
        let mut random = ScriptedRandom::new([0.0, 0.9]);
        let mut items = ['a', 'b', 'c'];
        shuffle(&mut items, &mut random);
        assert_eq!(items, ['c', 'b', 'a']);
    }
}

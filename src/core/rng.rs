//! Deterministic random number generation for dealing rounds.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deal
//! - **Replayable**: The seed is always recorded, even for entropy-seeded RNGs
//! - **Uniform**: Shuffles are Fisher-Yates, draws are without replacement
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used by the deck builder and the autoplay bot.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    ///
    /// The chosen seed is still recorded, so a surprising deal can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place with a uniform permutation.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Draw `amount` distinct indices from `0..length` without replacement.
    ///
    /// Panics if `amount > length`; callers check capacity first.
    pub fn sample_distinct(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, length, amount).into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

        rng.shuffle(&mut data);

        data.sort();
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_sample_distinct() {
        let mut rng = GameRng::new(7);
        let mut drawn = rng.sample_distinct(898, 12);
        assert_eq!(drawn.len(), 12);
        assert!(drawn.iter().all(|&i| i < 898));

        drawn.sort_unstable();
        drawn.dedup();
        assert_eq!(drawn.len(), 12);
    }

    #[test]
    fn test_sample_whole_space() {
        let mut rng = GameRng::new(7);
        let mut drawn = rng.sample_distinct(5, 5);
        drawn.sort_unstable();
        assert_eq!(drawn, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let mut rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let drawn: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();
        let replayed: Vec<_> = (0..10).map(|_| replay.gen_range_usize(0..1000)).collect();
        assert_eq!(drawn, replayed);
    }
}

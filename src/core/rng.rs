//! Deterministic random number generation for dealing decks.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deal
//! - **Replayable**: the seed is kept, so a logged seed reproduces a deal
//! - **Explicit shuffle**: Fisher-Yates with a documented swap order, so a
//!   seed maps to the same deck regardless of `rand`'s internal shuffle
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used by the engine to shuffle decks.
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

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is kept so the deal can be reproduced from logs.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a uniformly distributed index in `0..upper`.
    ///
    /// `upper` must be non-zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    /// Shuffle a slice in place.
    ///
    /// For `i` from `len` down to 1, swaps the element at `i - 1` with a
    /// uniformly chosen element in `0..i`.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..=slice.len()).rev() {
            let j = self.gen_index(i);
            slice.swap(i - 1, j);
        }
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
            assert_eq!(rng1.gen_index(1000), rng2.gen_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_index_in_bounds() {
        let mut rng = GameRng::new(9);
        for upper in 1..50 {
            assert!(rng.gen_index(upper) < upper);
        }
        assert_eq!(rng.gen_index(1), 0);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_ne!(data, original);
        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = GameRng::new(1);

        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![5];
        rng.shuffle(&mut single);
        assert_eq!(single, vec![5]);
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let mut rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());

        let seq: Vec<_> = (0..10).map(|_| rng.gen_index(1000)).collect();
        let replayed: Vec<_> = (0..10).map(|_| replay.gen_index(1000)).collect();
        assert_eq!(seq, replayed);
    }
}

//! Deterministic random number generation for shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical shuffle sequence,
//!   which makes deals replayable in tests.
//! - **Seed recovery**: The seed used for a game is queryable, so a host
//!   can offer a "replay this deal" affordance.
//!
//! When no explicit seed is given, one is taken from the high-resolution
//! clock at reset time.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Deterministic RNG for deck shuffling.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
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

    /// Create a new RNG seeded from the high-resolution clock.
    #[must_use]
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the sequence from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.inner = ChaCha8Rng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

/// Nanosecond clock reading folded into a u64 seed.
#[must_use]
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED_CA4D)
}

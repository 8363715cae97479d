//! Random source injected into obstacle spawning
//!
//! The spawner only needs uniform integers in inclusive ranges. Keeping that
//! behind a trait lets tests script exact rolls while the game uses a seeded PCG.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform integer source
pub trait RandomSource {
    /// Uniform integer in `[lo, hi]`. Returns `lo` when `hi < lo`.
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32;
}

/// Default random source: PCG32 seeded once at construction
#[derive(Debug, Clone)]
pub struct PcgSource {
    seed: u64,
    rng: Pcg32,
}

impl PcgSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the thread-local entropy source
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewind to the start of the seeded sequence
    pub fn reseed(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }
}

impl RandomSource for PcgSource {
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }
}

//! Seeded pseudo-random sources shared by the cave and forest generators.
//!
//! Generators are generic over [`RandomSource`]; [`ChaChaSource`] is the
//! pinned default so identical seeds produce identical maps on every platform.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// Capability set the generators draw from.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_double(&mut self) -> f64;

    /// Uniform value in `[0, bound)`. Returns 0 when `bound` is 0.
    fn next_int(&mut self, bound: u32) -> u32;

    /// Restarts the stream as if freshly constructed from `seed`.
    fn reseed(&mut self, seed: u64);
}

const DOUBLE_UNIT: f64 = 1.0 / (1_u64 << 53) as f64;

/// ChaCha8 stream seeded through `seed_from_u64`.
#[derive(Clone, Debug)]
pub struct ChaChaSource {
    rng: ChaCha8Rng,
}

impl ChaChaSource {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl RandomSource for ChaChaSource {
    fn next_double(&mut self) -> f64 {
        (self.rng.next_u64() >> 11) as f64 * DOUBLE_UNIT
    }

    fn next_int(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        // Multiply-shift with rejection of the biased low band.
        let mut wide = u64::from(self.rng.next_u32()) * u64::from(bound);
        let mut low = wide as u32;
        if low < bound {
            let threshold = bound.wrapping_neg() % bound;
            while low < threshold {
                wide = u64::from(self.rng.next_u32()) * u64::from(bound);
                low = wide as u32;
            }
        }
        (wide >> 32) as u32
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }
}

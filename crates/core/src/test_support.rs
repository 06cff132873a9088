//! Scripted random source for tests that need to steer a generator.

use crate::rng::RandomSource;

/// Replays `doubles` cyclically; `next_int` scales the same script into range.
pub(crate) struct ScriptedSource {
    doubles: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub(crate) fn new(doubles: Vec<f64>) -> Self {
        assert!(!doubles.is_empty(), "script needs at least one value");
        Self { doubles, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_double(&mut self) -> f64 {
        let value = self.doubles[self.cursor % self.doubles.len()];
        self.cursor += 1;
        value
    }

    fn next_int(&mut self, bound: u32) -> u32 {
        let scaled = (self.next_double() * f64::from(bound)) as u32;
        scaled.min(bound.saturating_sub(1))
    }

    fn reseed(&mut self, _seed: u64) {
        self.cursor = 0;
    }
}

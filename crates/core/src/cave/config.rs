//! Cave configuration, presets and the single-use builder.

use serde::{Deserialize, Serialize};

use crate::error::{GenError, check_dimensions, check_probability};
use crate::rng::{ChaChaSource, RandomSource};

use super::generator::CaveGenerator;

pub const DEFAULT_CAVE_SEED: u64 = 7;
pub const DEFAULT_FILL_PROBABILITY: f64 = 0.4;
pub(crate) const MIN_CAVE_SIDE: usize = 3;

/// One batch of automaton steps: `rounds` passes of `step(min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CavePhase {
    pub min: i32,
    pub max: i32,
    pub rounds: u32,
}

impl CavePhase {
    pub const fn new(min: i32, max: i32, rounds: u32) -> Self {
        Self { min, max, rounds }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub phases: Vec<CavePhase>,
    /// Chance that an interior cell starts FILLED.
    pub fill_probability: f64,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            seed: DEFAULT_CAVE_SEED,
            phases: Vec::new(),
            fill_probability: DEFAULT_FILL_PROBABILITY,
        }
    }
}

impl CaveConfig {
    /// 60x40 cave: four rounds of the 5/2 rule then five rounds of plain 4-5.
    pub fn classic(seed: u64) -> Self {
        Self {
            width: 60,
            height: 40,
            seed,
            phases: vec![CavePhase::new(5, 2, 4), CavePhase::new(5, -1, 5)],
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GenError> {
        check_dimensions(self.width, self.height, MIN_CAVE_SIDE)?;
        check_probability("fill_probability", self.fill_probability)
    }
}

/// Fluent construction of a [`CaveGenerator`]. `build` consumes the builder.
#[derive(Clone, Debug, Default)]
pub struct CaveBuilder {
    width: Option<usize>,
    height: Option<usize>,
    config: CaveConfig,
}

impl CaveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: CaveConfig) -> Self {
        Self { width: Some(config.width), height: Some(config.height), config }
    }

    pub fn with_size(self, width: usize, height: usize) -> Self {
        self.with_width(width).with_height(height)
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_fill_probability(mut self, fill_probability: f64) -> Self {
        self.config.fill_probability = fill_probability;
        self
    }

    pub fn add_phase(mut self, min: i32, max: i32, rounds: u32) -> Self {
        self.config.phases.push(CavePhase::new(min, max, rounds));
        self
    }

    /// Validated configuration without constructing a generator.
    pub fn into_config(self) -> Result<CaveConfig, GenError> {
        let (Some(width), Some(height)) = (self.width, self.height) else {
            return Err(GenError::MissingDimensions);
        };
        let config = CaveConfig { width, height, ..self.config };
        config.validate()?;
        Ok(config)
    }

    pub fn build(self) -> Result<CaveGenerator, GenError> {
        let config = self.into_config()?;
        let rng = ChaChaSource::new(config.seed);
        Ok(CaveGenerator::with_source(config, rng))
    }

    /// Like [`build`](Self::build) but draws from a caller-supplied source.
    pub fn build_with<R: RandomSource>(self, rng: R) -> Result<CaveGenerator<R>, GenError> {
        Ok(CaveGenerator::with_source(self.into_config()?, rng))
    }
}

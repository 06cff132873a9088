//! Forest configuration, presets and the single-use builder.

use serde::{Deserialize, Serialize};

use crate::error::{GenError, check_dimensions, check_probability};
use crate::rng::{ChaChaSource, RandomSource};

use super::generator::ForestGenerator;

pub const DEFAULT_FOREST_SEED: u64 = 7;
pub const DEFAULT_INITIAL_TREES: u32 = 10;
pub const DEFAULT_SEED_RADIUS: u32 = 5;
pub const DEFAULT_SEED_DECAY: f64 = 0.2;
pub const DEFAULT_SEED_STRENGTH: f64 = 0.05;
pub const DEFAULT_DESIRED_COVERAGE: f64 = 0.25;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub initial_trees: u32,
    pub seed_radius: u32,
    /// Fraction of seed strength lost per step.
    pub seed_decay: f64,
    /// Strength a tree adds to each cell of its seeding disc per step.
    pub seed_strength: f64,
    pub desired_coverage: f64,
    /// Optional bound on growth steps; `None` grows until coverage is met.
    pub max_steps: Option<u32>,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            seed: DEFAULT_FOREST_SEED,
            initial_trees: DEFAULT_INITIAL_TREES,
            seed_radius: DEFAULT_SEED_RADIUS,
            seed_decay: DEFAULT_SEED_DECAY,
            seed_strength: DEFAULT_SEED_STRENGTH,
            desired_coverage: DEFAULT_DESIRED_COVERAGE,
            max_steps: None,
        }
    }
}

impl ForestConfig {
    /// 240x160 woodland: twenty initial trees, wide slow-decaying seed discs.
    pub fn woodland(seed: u64) -> Self {
        Self {
            width: 240,
            height: 160,
            seed,
            initial_trees: 20,
            seed_radius: 7,
            seed_decay: 0.1,
            seed_strength: 0.05,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GenError> {
        check_dimensions(self.width, self.height, 1)?;
        check_probability("seed_decay", self.seed_decay)?;
        check_probability("seed_strength", self.seed_strength)?;
        check_probability("desired_coverage", self.desired_coverage)
    }
}

/// Fluent construction of a [`ForestGenerator`]. `build` consumes the builder.
#[derive(Clone, Debug, Default)]
pub struct ForestBuilder {
    width: Option<usize>,
    height: Option<usize>,
    config: ForestConfig,
}

impl ForestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ForestConfig) -> Self {
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

    pub fn with_initial_trees(mut self, initial_trees: u32) -> Self {
        self.config.initial_trees = initial_trees;
        self
    }

    pub fn with_seed_params(mut self, radius: u32, decay: f64, strength: f64) -> Self {
        self.config.seed_radius = radius;
        self.config.seed_decay = decay;
        self.config.seed_strength = strength;
        self
    }

    pub fn with_desired_coverage(mut self, desired_coverage: f64) -> Self {
        self.config.desired_coverage = desired_coverage;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.config.max_steps = Some(max_steps);
        self
    }

    pub fn into_config(self) -> Result<ForestConfig, GenError> {
        let (Some(width), Some(height)) = (self.width, self.height) else {
            return Err(GenError::MissingDimensions);
        };
        let config = ForestConfig { width, height, ..self.config };
        config.validate()?;
        Ok(config)
    }

    pub fn build(self) -> Result<ForestGenerator, GenError> {
        let config = self.into_config()?;
        let rng = ChaChaSource::new(config.seed);
        Ok(ForestGenerator::with_source(config, rng))
    }

    pub fn build_with<R: RandomSource>(self, rng: R) -> Result<ForestGenerator<R>, GenError> {
        Ok(ForestGenerator::with_source(self.into_config()?, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_in_defaults() {
        let config = ForestBuilder::new().with_size(30, 20).into_config().expect("valid config");
        assert_eq!(config.seed, DEFAULT_FOREST_SEED);
        assert_eq!(config.initial_trees, 10);
        assert_eq!(config.seed_radius, 5);
        assert_eq!(config.seed_decay, 0.2);
        assert_eq!(config.seed_strength, 0.05);
        assert_eq!(config.desired_coverage, 0.25);
        assert_eq!(config.max_steps, None);
    }

    #[test]
    fn builder_rejects_zero_sized_forest() {
        let err = ForestBuilder::new().with_size(0, 5).build().expect_err("zero width");
        assert!(matches!(err, GenError::InvalidDimensions { min: 1, .. }));
        let err = ForestBuilder::new().with_height(5).build().expect_err("width missing");
        assert_eq!(err, GenError::MissingDimensions);
    }

    #[test]
    fn builder_rejects_out_of_range_reals() {
        let err = ForestBuilder::new()
            .with_size(10, 10)
            .with_seed_params(3, 1.5, 0.05)
            .build()
            .expect_err("decay above one");
        assert!(matches!(err, GenError::ProbabilityOutOfRange { name: "seed_decay", .. }));

        let err = ForestBuilder::new()
            .with_size(10, 10)
            .with_desired_coverage(-0.1)
            .build()
            .expect_err("negative coverage");
        assert!(matches!(err, GenError::ProbabilityOutOfRange { name: "desired_coverage", .. }));
    }

    #[test]
    fn woodland_preset_matches_builder() {
        let built = ForestBuilder::new()
            .with_size(240, 160)
            .with_random_seed(3)
            .with_initial_trees(20)
            .with_seed_params(7, 0.1, 0.05)
            .into_config()
            .expect("valid config");
        assert_eq!(ForestConfig::woodland(3), built);
    }
}

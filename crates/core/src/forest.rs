//! Seed-and-sprout forest growth.
//!
//! Trees stamp a small footprint, scatter seed strength over a disc around
//! themselves, and seeded cells sprout into new trees with probability equal
//! to their accumulated strength. Growth stops once the target coverage is
//! reached.

mod config;
mod generator;
mod seeds;
mod spans;

pub use config::{
    DEFAULT_DESIRED_COVERAGE, DEFAULT_FOREST_SEED, DEFAULT_INITIAL_TREES, DEFAULT_SEED_DECAY,
    DEFAULT_SEED_RADIUS, DEFAULT_SEED_STRENGTH, ForestBuilder, ForestConfig,
};
pub use generator::{ForestGenerator, GrowthReport, GrowthStop};
pub use seeds::SeedField;
pub use spans::{Span, find_range};

pub mod cave;
pub mod error;
pub mod forest;
pub mod lattice;
pub mod mapgen;
pub mod model;
pub mod render;
pub mod rng;
pub mod types;

#[cfg(test)]
mod test_support;

pub use cave::{CaveBuilder, CaveConfig, CaveGenerator, CavePhase, StitchReport};
pub use error::GenError;
pub use forest::{ForestBuilder, ForestConfig, ForestGenerator, GrowthReport, GrowthStop};
pub use lattice::{CaveMap, ForestMap, Grid, Line, Room};
pub use mapgen::{generate_cave, generate_forest, generate_level};
pub use model::{GeneratedCave, GeneratedForest, GeneratedLevel};
pub use rng::{ChaChaSource, RandomSource};
pub use types::*;

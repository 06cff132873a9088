//! Cellular-automaton cave generation with best-effort room stitching.

mod config;
mod generator;
mod stitch;

pub use config::{CaveBuilder, CaveConfig, CavePhase, DEFAULT_CAVE_SEED, DEFAULT_FILL_PROBABILITY};
pub use generator::CaveGenerator;
pub use stitch::StitchReport;

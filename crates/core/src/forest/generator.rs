//! Forest growth loop: decay, sprout, dedup, emit.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::lattice::ForestMap;
use crate::render::render_forest;
use crate::rng::{ChaChaSource, RandomSource};
use crate::types::{ForestCell, Point};

use super::config::{ForestBuilder, ForestConfig};
use super::seeds::SeedField;
use super::spans::{Span, find_range};

/// Why [`ForestGenerator::generate`] stopped growing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthStop {
    CoverageReached,
    /// The configured `max_steps` ran out first.
    StepCap,
    /// No seeds remain, so no further growth is possible.
    Stalled,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrowthReport {
    pub steps: u32,
    pub coverage: f64,
    pub stop: GrowthStop,
}

#[derive(Debug)]
pub struct ForestGenerator<R = ChaChaSource> {
    config: ForestConfig,
    rng: R,
    forest: ForestMap,
    trees: Vec<Point>,
    seeds: SeedField,
}

impl ForestGenerator {
    pub fn builder() -> ForestBuilder {
        ForestBuilder::new()
    }
}

impl<R: RandomSource> ForestGenerator<R> {
    /// `config` is assumed validated; construct through [`ForestBuilder`].
    pub(crate) fn with_source(config: ForestConfig, rng: R) -> Self {
        let forest = ForestMap::filled(config.width, config.height, ForestCell::Empty);
        Self { config, rng, forest, trees: Vec::new(), seeds: SeedField::new() }
    }

    pub fn config(&self) -> &ForestConfig {
        &self.config
    }

    pub fn forest(&self) -> &ForestMap {
        &self.forest
    }

    pub fn into_forest(self) -> ForestMap {
        self.forest
    }

    /// Tree centres in planting order.
    pub fn trees(&self) -> &[Point] {
        &self.trees
    }

    pub fn seeds(&self) -> &SeedField {
        &self.seeds
    }

    /// Seed used by the next [`initialize`](Self::initialize).
    pub fn set_seed(&mut self, seed: u64) {
        self.config.seed = seed;
    }

    /// Fraction of cells in FOREST state.
    pub fn coverage(&self) -> f64 {
        let total = self.forest.width() * self.forest.height();
        self.forest.count(ForestCell::Forest) as f64 / total as f64
    }

    /// Reseeds, clears the grid, trees and seeds, then plants the initial
    /// trees at uniformly sampled EMPTY cells.
    pub fn initialize(&mut self) {
        self.rng.reseed(self.config.seed);
        self.forest.fill(ForestCell::Empty);
        self.trees.clear();
        self.seeds.clear();

        let width = self.config.width as u32;
        let height = self.config.height as u32;
        for planted in 0..self.config.initial_trees {
            if self.forest.count(ForestCell::Empty) == 0 {
                warn!(
                    planted,
                    requested = self.config.initial_trees,
                    "no empty cells left for initial trees"
                );
                break;
            }
            loop {
                let x = self.rng.next_int(width) as i32;
                let y = self.rng.next_int(height) as i32;
                if self.forest.at(Point::new(x, y)) == Some(ForestCell::Empty) {
                    self.add_tree(x, y);
                    break;
                }
            }
        }
        debug!(seed = self.config.seed, trees = self.trees.len(), "forest initialized");
    }

    /// Records a tree at `(x, y)` and stamps its footprint: a plus of arm
    /// length two plus the four diagonal neighbours. Cells off the grid are
    /// skipped.
    pub fn add_tree(&mut self, x: i32, y: i32) {
        self.trees.push(Point::new(x, y));
        for offset in -2..=2 {
            self.forest.set_at(Point::new(x + offset, y), ForestCell::Forest);
            self.forest.set_at(Point::new(x, y + offset), ForestCell::Forest);
        }
        for (dx, dy) in [(-1, -1), (1, -1), (-1, 1), (1, 1)] {
            self.forest.set_at(Point::new(x + dx, y + dy), ForestCell::Forest);
        }
    }

    /// Row spans of the seeding disc of `radius` around `(x, y)`.
    pub fn find_range(&self, x: i32, y: i32, radius: u32) -> Vec<Span> {
        find_range(self.config.width, self.config.height, x, y, radius)
    }

    /// One growth round. Decay, sprouting, dedup and emission run in that
    /// order, each visiting seeds row-major and trees in planting order.
    pub fn step(&mut self) {
        self.seeds.scale(1.0 - self.config.seed_decay);

        let candidates: Vec<(Point, f64)> = self.seeds.iter().collect();
        for (pos, strength) in candidates {
            if self.rng.next_double() < strength {
                self.add_tree(pos.x, pos.y);
            }
        }

        for &tree in &self.trees {
            self.seeds.remove(tree);
        }

        let (width, height) = (self.config.width, self.config.height);
        for &tree in &self.trees {
            for span in find_range(width, height, tree.x, tree.y, self.config.seed_radius) {
                for pos in span.points() {
                    if self.forest.at(pos) == Some(ForestCell::Forest) {
                        continue;
                    }
                    self.forest.set_at(pos, ForestCell::Seeded);
                    self.seeds.add(pos, self.config.seed_strength);
                }
            }
        }
    }

    /// Turns every SEEDED cell back into EMPTY.
    pub fn remove_seeds(&mut self) {
        self.forest.replace_all(ForestCell::Seeded, ForestCell::Empty);
    }

    /// Initialize, grow until the desired coverage (or a stop condition),
    /// then clear seeds.
    pub fn generate(&mut self) -> GrowthReport {
        self.initialize();

        let mut steps = 0_u32;
        let mut coverage = self.coverage();
        let stop = loop {
            if coverage >= self.config.desired_coverage {
                break GrowthStop::CoverageReached;
            }
            if let Some(cap) = self.config.max_steps
                && steps >= cap
            {
                warn!(steps, coverage, target = self.config.desired_coverage, "forest growth capped");
                break GrowthStop::StepCap;
            }
            self.step();
            steps += 1;
            coverage = self.coverage();
            // Sprouting tests strengths after the next decay.
            let sprout_chance = self.seeds.max_strength() * (1.0 - self.config.seed_decay);
            if sprout_chance <= 0.0 && coverage < self.config.desired_coverage {
                warn!(
                    steps,
                    coverage,
                    seeds = self.seeds.len(),
                    "forest growth stalled, no seed can sprout"
                );
                break GrowthStop::Stalled;
            }
        };

        self.remove_seeds();
        self.seeds.clear();
        info!(seed = self.config.seed, steps, coverage, trees = self.trees.len(), "forest generated");
        GrowthReport { steps, coverage, stop }
    }
}

impl<R> fmt::Display for ForestGenerator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_forest(&self.forest))
    }
}

//! Double-buffered cellular automaton over a bordered boolean lattice.

use std::fmt;
use std::mem;

use tracing::{debug, info};

use crate::lattice::{CaveMap, Room, connected_components, neighbor_count_1, neighbor_count_2};
use crate::render::render_cave;
use crate::rng::{ChaChaSource, RandomSource};
use crate::types::{EMPTY, FILLED};

use super::config::{CaveBuilder, CaveConfig, CavePhase};
use super::stitch::{StitchReport, fix_room};

#[derive(Debug)]
pub struct CaveGenerator<R = ChaChaSource> {
    config: CaveConfig,
    rng: R,
    map: CaveMap,
    back: CaveMap,
}

impl CaveGenerator {
    pub fn builder() -> CaveBuilder {
        CaveBuilder::new()
    }
}

impl<R: RandomSource> CaveGenerator<R> {
    /// `config` is assumed validated; construct through [`CaveBuilder`].
    pub(crate) fn with_source(config: CaveConfig, rng: R) -> Self {
        let map = CaveMap::filled(config.width, config.height, FILLED);
        let back = map.clone();
        Self { config, rng, map, back }
    }

    pub fn config(&self) -> &CaveConfig {
        &self.config
    }

    pub fn map(&self) -> &CaveMap {
        &self.map
    }

    pub fn into_map(self) -> CaveMap {
        self.map
    }

    pub fn phases(&self) -> &[CavePhase] {
        &self.config.phases
    }

    pub fn get_phase(&self, index: usize) -> Option<CavePhase> {
        self.config.phases.get(index).copied()
    }

    /// Seed used by the next [`initialize`](Self::initialize).
    pub fn set_seed(&mut self, seed: u64) {
        self.config.seed = seed;
    }

    /// Reseeds and refills both buffers. The outer ring is always FILLED;
    /// interior cells are FILLED with the configured probability.
    pub fn initialize(&mut self) {
        self.rng.reseed(self.config.seed);
        let (width, height) = (self.config.width, self.config.height);
        self.map = CaveMap::filled(width, height, FILLED);
        self.back = CaveMap::filled(width, height, FILLED);

        for y in 1..height - 1 {
            for x in 1..width - 1 {
                let filled = self.rng.next_double() < self.config.fill_probability;
                self.map.set(y, x, filled);
            }
        }
        debug!(seed = self.config.seed, width, height, "cave initialized");
    }

    /// One automaton pass over the interior: a cell becomes FILLED when its
    /// 3x3 count reaches `min_count` or its two-step count is at most
    /// `max_count`, EMPTY otherwise.
    pub fn step(&mut self, min_count: i32, max_count: i32) {
        let (width, height) = (self.config.width, self.config.height);
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                let near = i64::from(neighbor_count_1(&self.map, y, x));
                let wide = i64::from(neighbor_count_2(&self.map, y, x));
                let filled = near >= i64::from(min_count) || wide <= i64::from(max_count);
                self.back.set(y, x, filled);
            }
        }
        mem::swap(&mut self.map, &mut self.back);
    }

    /// Runs every configured phase in order.
    pub fn iterate(&mut self) {
        for index in 0..self.config.phases.len() {
            let phase = self.config.phases[index];
            for _ in 0..phase.rounds {
                self.step(phase.min, phase.max);
            }
            debug!(
                phase = index,
                min = phase.min,
                max = phase.max,
                rounds = phase.rounds,
                "cave phase complete"
            );
        }
    }

    /// EMPTY rooms of the current map, largest first. Equal sizes keep
    /// discovery order.
    pub fn rooms(&self) -> Vec<Room> {
        let mut rooms = connected_components(&self.map, EMPTY);
        rooms.sort_by(|left, right| right.len().cmp(&left.len()));
        rooms
    }

    /// Tunnels from `room` toward the map centre until another open cell is
    /// reached. Returns whether a connection was made.
    pub fn fix_room(&mut self, room: &Room) -> bool {
        fix_room(&mut self.map, &mut self.rng, room)
    }

    /// Initialize, run the phases, then stitch every room into the largest.
    pub fn generate(&mut self) -> StitchReport {
        self.initialize();
        self.iterate();

        let rooms = self.rooms();
        let mut report = StitchReport { rooms: rooms.len(), ..StitchReport::default() };
        for room in rooms.iter().skip(1) {
            if self.fix_room(room) {
                report.stitched += 1;
            } else {
                report.failed += 1;
            }
        }
        info!(
            seed = self.config.seed,
            rooms = report.rooms,
            stitched = report.stitched,
            failed = report.failed,
            "cave generated"
        );
        report
    }
}

impl<R> fmt::Display for CaveGenerator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_cave(&self.map))
    }
}

//! Finished generation results, their canonical encoding and fingerprint.

use std::fmt;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::cave::StitchReport;
use crate::forest::GrowthReport;
use crate::lattice::{CaveMap, ForestMap};
use crate::render::{render_cave, render_forest};
use crate::types::Point;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedCave {
    pub seed: u64,
    pub map: CaveMap,
    /// EMPTY room sizes after stitching, largest first.
    pub room_sizes: Vec<usize>,
    pub contour: Vec<Point>,
    pub stitch: StitchReport,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedForest {
    pub seed: u64,
    pub map: ForestMap,
    pub trees: Vec<Point>,
    pub growth: GrowthReport,
}

/// A cave and a forest grown from the same seed, meant to be overlaid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedLevel {
    pub seed: u64,
    pub cave: GeneratedCave,
    pub forest: GeneratedForest,
}

impl GeneratedCave {
    pub fn width(&self) -> usize {
        self.map.width()
    }

    pub fn height(&self) -> usize {
        self.map.height()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        push_dims(&mut bytes, self.map.width(), self.map.height());
        bytes.extend(self.map.cells().iter().map(|&cell| u8::from(cell)));

        bytes.extend((self.room_sizes.len() as u32).to_le_bytes());
        for &size in &self.room_sizes {
            bytes.extend((size as u32).to_le_bytes());
        }
        push_points(&mut bytes, &self.contour);

        bytes.extend((self.stitch.rooms as u32).to_le_bytes());
        bytes.extend((self.stitch.stitched as u32).to_le_bytes());
        bytes.extend((self.stitch.failed as u32).to_le_bytes());
        bytes
    }

    pub fn snapshot_hash(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

impl GeneratedForest {
    pub fn width(&self) -> usize {
        self.map.width()
    }

    pub fn height(&self) -> usize {
        self.map.height()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        push_dims(&mut bytes, self.map.width(), self.map.height());
        bytes.extend(self.map.cells().iter().map(|cell| cell.as_byte()));
        push_points(&mut bytes, &self.trees);
        bytes.extend(self.growth.steps.to_le_bytes());
        bytes
    }

    pub fn snapshot_hash(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

impl GeneratedLevel {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = self.cave.canonical_bytes();
        bytes.extend(self.forest.canonical_bytes());
        bytes
    }

    pub fn snapshot_hash(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

impl fmt::Display for GeneratedCave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_cave(&self.map))
    }
}

impl fmt::Display for GeneratedForest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_forest(&self.map))
    }
}

fn push_dims(bytes: &mut Vec<u8>, width: usize, height: usize) {
    bytes.extend((width as u32).to_le_bytes());
    bytes.extend((height as u32).to_le_bytes());
}

fn push_points(bytes: &mut Vec<u8>, points: &[Point]) {
    bytes.extend((points.len() as u32).to_le_bytes());
    for point in points {
        bytes.extend(point.y.to_le_bytes());
        bytes.extend(point.x.to_le_bytes());
    }
}

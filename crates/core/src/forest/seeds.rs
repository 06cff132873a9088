//! Seed strengths for cells currently being cultivated.

use std::collections::BTreeMap;

use crate::types::Point;

/// Cell to seed-strength mapping, iterated in row-major order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeedField {
    strengths: BTreeMap<Point, f64>,
}

impl SeedField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.strengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
    }

    pub fn get(&self, pos: Point) -> Option<f64> {
        self.strengths.get(&pos).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        self.strengths.iter().map(|(&pos, &strength)| (pos, strength))
    }

    /// Adds `amount` to the strength at `pos`, starting from zero.
    pub fn add(&mut self, pos: Point, amount: f64) {
        *self.strengths.entry(pos).or_insert(0.0) += amount;
    }

    pub fn remove(&mut self, pos: Point) -> Option<f64> {
        self.strengths.remove(&pos)
    }

    /// Multiplies every strength by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for strength in self.strengths.values_mut() {
            *strength *= factor;
        }
    }

    /// Largest strength in the field, 0 when empty.
    pub fn max_strength(&self) -> f64 {
        self.strengths.values().copied().fold(0.0, f64::max)
    }

    pub fn clear(&mut self) {
        self.strengths.clear();
    }
}

//! Disc-to-row-span decomposition used for seed emission.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Horizontal run of cells from `start` to `end` inclusive on one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Point,
    pub end: Point,
}

impl Span {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { start: Point::new(x1, y1), end: Point::new(x2, y2) }
    }

    pub fn row(&self) -> i32 {
        self.start.y
    }

    pub fn columns(&self) -> RangeInclusive<i32> {
        self.start.x..=self.end.x
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let row = self.row();
        self.columns().map(move |x| Point::new(x, row))
    }
}

/// Rows covering the disc of `radius` around `(x, y)`, clamped to a
/// `width` x `height` grid.
///
/// The centre row comes first, then for each distance `i` the row above and
/// the row below. A centre outside the grid yields no spans.
pub fn find_range(width: usize, height: usize, x: i32, y: i32, radius: u32) -> Vec<Span> {
    let center = Point::new(x, y);
    if !center.valid(0, width as i32, 0, height as i32) {
        return Vec::new();
    }

    // Beyond width + height every row is already full width.
    let radius = i64::from(radius).min((width + height) as i64);
    let max_x = width as i64 - 1;
    let clamp = |half_width: i64| {
        let left = (i64::from(x) - half_width).max(0) as i32;
        let right = (i64::from(x) + half_width).min(max_x) as i32;
        (left, right)
    };

    let mut spans = Vec::with_capacity(2 * radius as usize + 1);
    let (left, right) = clamp(radius);
    spans.push(Span::new(left, y, right, y));
    for i in 1..=radius {
        let half_width = (radius * radius - i * i).isqrt();
        let (left, right) = clamp(half_width);
        let up = i64::from(y) - i;
        let down = i64::from(y) + i;
        if up >= 0 {
            spans.push(Span::new(left, up as i32, right, up as i32));
        }
        if down < height as i64 {
            spans.push(Span::new(left, down as i32, right, down as i32));
        }
    }
    spans
}

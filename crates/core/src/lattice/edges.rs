//! Converts contour cells into wall edge segments.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{EMPTY, Point};

use super::contour::get_contour;
use super::grid::CaveMap;

/// Segment between two lattice corners. Cell `(x, y)` spans corners
/// `(x, y)` to `(x + 1, y + 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    fn direction(self) -> Point {
        (self.end - self.start).abs()
    }
}

/// One unit edge for every side of a contour cell that faces an in-bounds
/// EMPTY cell, emitted top, right, bottom, left.
pub fn edge_lines(points: &[Point], map: &CaveMap) -> Vec<Line> {
    let faces_empty = |pos: Point| map.at(pos) == Some(EMPTY);
    let mut edges = Vec::new();
    for &pos in points {
        let top_left = pos;
        let top_right = pos.translate(1, 0);
        let bottom_right = pos.translate(1, 1);
        let bottom_left = pos.translate(0, 1);

        if faces_empty(pos.translate(0, -1)) {
            edges.push(Line::new(top_left, top_right));
        }
        if faces_empty(pos.translate(1, 0)) {
            edges.push(Line::new(top_right, bottom_right));
        }
        if faces_empty(pos.translate(0, 1)) {
            edges.push(Line::new(bottom_left, bottom_right));
        }
        if faces_empty(pos.translate(-1, 0)) {
            edges.push(Line::new(top_left, bottom_left));
        }
    }
    edges
}

/// Collinear unit edges joined through shared corners.
struct Run {
    connectors: HashSet<Point>,
    direction: Point,
    min: Point,
    max: Point,
}

impl Run {
    fn new(line: Line) -> Self {
        let mut run = Self {
            connectors: HashSet::new(),
            direction: line.direction(),
            min: line.start,
            max: line.start,
        };
        run.add(line);
        run
    }

    fn accepts(&self, line: Line) -> bool {
        (self.connectors.contains(&line.start) || self.connectors.contains(&line.end))
            && line.direction() == self.direction
    }

    fn add(&mut self, line: Line) {
        for corner in [line.start, line.end] {
            self.connectors.insert(corner);
            self.min = Point::new(self.min.x.min(corner.x), self.min.y.min(corner.y));
            self.max = Point::new(self.max.x.max(corner.x), self.max.y.max(corner.y));
        }
    }
}

/// Wall outline of `map` as maximal straight segments.
///
/// Each edge joins the first run that shares a corner with it and runs in the
/// same direction; otherwise it starts a new run.
pub fn contour_lines(map: &CaveMap) -> Vec<Line> {
    let contour = get_contour(map);
    let mut runs: Vec<Run> = Vec::new();
    for edge in edge_lines(&contour, map) {
        match runs.iter_mut().find(|run| run.accepts(edge)) {
            Some(run) => run.add(edge),
            None => runs.push(Run::new(edge)),
        }
    }
    runs.into_iter().map(|run| Line::new(run.min, run.max)).collect()
}

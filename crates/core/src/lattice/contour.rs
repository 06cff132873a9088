//! Moore-neighbourhood boundary tracing for FILLED regions.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::GenError;
use crate::types::{EMPTY, FILLED, Point};

use super::components::connected_components;
use super::grid::CaveMap;
use super::neighbors::is_border_point;
use super::{MOORE_HOOD, moore_index};

/// A boundary cell plus the EMPTY cell visited just before entering it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoorePixel {
    pub point: Point,
    pub backtrack: Point,
}

/// First in-bounds EMPTY cell of the Moore ring around `pos`, scanning from
/// the north-west corner clockwise.
pub fn find_empty_neighbor(map: &CaveMap, pos: Point) -> Option<Point> {
    MOORE_HOOD.iter().map(|&offset| pos + offset).find(|&cell| map.at(cell) == Some(EMPTY))
}

/// Next FILLED cell clockwise around `current`, starting just after `backtrack`.
///
/// `Ok(None)` means `current` has no FILLED Moore neighbour. Fails with
/// [`GenError::InvalidMap`] when `current` is off the map or `backtrack` is
/// not one of its Moore neighbours.
pub fn next_clockwise_pixel(
    map: &CaveMap,
    current: Point,
    backtrack: Point,
) -> Result<Option<MoorePixel>, GenError> {
    if !map.in_bounds(current) {
        return Err(GenError::invalid_map(format!(
            "trace point ({}, {}) is outside {}x{}",
            current.x,
            current.y,
            map.width(),
            map.height()
        )));
    }
    let delta = backtrack - current;
    if moore_index(delta.x, delta.y).is_none() {
        return Err(GenError::invalid_map(format!(
            "backtrack ({}, {}) is not a Moore neighbour of ({}, {})",
            backtrack.x, backtrack.y, current.x, current.y
        )));
    }
    Ok(clockwise_step(map, current, backtrack))
}

fn clockwise_step(map: &CaveMap, current: Point, backtrack: Point) -> Option<MoorePixel> {
    let delta = (backtrack - current).wrap();
    let start = moore_index(delta.x, delta.y)?;

    let mut last_visited = backtrack;
    for step in 1..MOORE_HOOD.len() {
        let candidate = current + MOORE_HOOD[(start + step) % MOORE_HOOD.len()];
        match map.at(candidate) {
            None => continue,
            Some(FILLED) => return Some(MoorePixel { point: candidate, backtrack: last_visited }),
            Some(_) => last_visited = candidate,
        }
    }
    None
}

/// Traces the boundary loop that starts at `start`.
///
/// `start` must be FILLED and sit on its region's border. The walk ends when
/// it re-enters `start`, runs out of FILLED neighbours, or repeats a
/// `(point, backtrack)` state.
pub fn trace_contour(map: &CaveMap, start: Point) -> Result<Vec<Point>, GenError> {
    if map.at(start) != Some(FILLED) {
        return Err(GenError::invalid_map(format!(
            "contour start ({}, {}) is not a FILLED cell",
            start.x, start.y
        )));
    }

    let mut boundary = vec![start];
    let Some(backtrack) = find_empty_neighbor(map, start) else {
        return Ok(boundary);
    };

    let mut seen = HashSet::new();
    let mut pixel = clockwise_step(map, start, backtrack);
    while let Some(current) = pixel {
        if current.point == start || !seen.insert(current) {
            break;
        }
        boundary.push(current.point);
        pixel = clockwise_step(map, current.point, current.backtrack);
    }
    Ok(boundary)
}

/// Outer boundary of every FILLED component, concatenated in component order.
///
/// Each trace starts at the component's first row-major border cell. A
/// component without any border cell contributes nothing.
pub fn get_contour(map: &CaveMap) -> Vec<Point> {
    let rooms = connected_components(map, FILLED);
    debug!(components = rooms.len(), "tracing filled components");

    let mut contour = Vec::new();
    for room in &rooms {
        let start = room
            .iter()
            .filter(|cell| is_border_point(map, cell.y as usize, cell.x as usize, FILLED))
            .min();
        let Some(start) = start else {
            debug!(cells = room.len(), "filled component has no border cell");
            continue;
        };
        match trace_contour(map, start) {
            Ok(boundary) => contour.extend(boundary),
            Err(error) => warn!(%error, "skipping component contour"),
        }
    }
    contour
}

//! Neighbour counting and the border-point predicate.

use crate::types::{FILLED, Point};

use super::VON_NEUMANN_HOOD;
use super::grid::{CaveMap, Grid};

/// FILLED cells in the 3x3 block centred on `(y, x)`, centre included.
/// Cells outside the grid are not counted.
pub fn neighbor_count_1(map: &CaveMap, y: usize, x: usize) -> u32 {
    count_filled(map, y, x, 1, |_, _| true)
}

/// FILLED cells in the 5x5 block centred on `(y, x)` minus its four corners.
pub fn neighbor_count_2(map: &CaveMap, y: usize, x: usize) -> u32 {
    count_filled(map, y, x, 2, |dy, dx| !(dy.abs() == 2 && dx.abs() == 2))
}

fn count_filled(
    map: &CaveMap,
    y: usize,
    x: usize,
    radius: i32,
    include: impl Fn(i32, i32) -> bool,
) -> u32 {
    let center = Point::new(x as i32, y as i32);
    let mut count = 0;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if !include(dy, dx) {
                continue;
            }
            if map.at(center.translate(dx, dy)) == Some(FILLED) {
                count += 1;
            }
        }
    }
    count
}

/// True when an in-bounds cardinal neighbour of `(y, x)` differs from `kind`.
/// The centre cell itself is not inspected.
pub fn is_border_point<T: Copy + PartialEq>(map: &Grid<T>, y: usize, x: usize, kind: T) -> bool {
    let center = Point::new(x as i32, y as i32);
    VON_NEUMANN_HOOD
        .iter()
        .filter_map(|&offset| map.at(center + offset))
        .any(|neighbor| neighbor != kind)
}

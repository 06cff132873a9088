//! Plain-text renderings of cave and forest lattices, one line per row.

use crate::lattice::{CaveMap, ForestMap, Room};
use crate::types::{FILLED, ForestCell, Point};

pub const WALL_GLYPH: char = '#';
pub const FLOOR_GLYPH: char = '.';
pub const FOREST_GLYPH: char = '+';
pub const SEEDED_GLYPH: char = '.';
pub const CLEARING_GLYPH: char = '_';

pub fn cave_glyph(cell: bool) -> char {
    if cell == FILLED { WALL_GLYPH } else { FLOOR_GLYPH }
}

pub fn forest_glyph(cell: ForestCell) -> char {
    match cell {
        ForestCell::Forest => FOREST_GLYPH,
        ForestCell::Seeded => SEEDED_GLYPH,
        ForestCell::Empty => CLEARING_GLYPH,
    }
}

pub fn render_cave(map: &CaveMap) -> String {
    render_rows(map.rows(), |&cell| cave_glyph(cell))
}

pub fn render_forest(map: &ForestMap) -> String {
    render_rows(map.rows(), |&cell| forest_glyph(cell))
}

/// Cave rendering with each listed room's cells replaced by its index
/// modulo ten, so the largest rooms read `0`, `1`, ...
pub fn render_rooms(map: &CaveMap, rooms: &[Room]) -> String {
    let mut out = String::with_capacity((map.width() + 1) * map.height());
    for (y, row) in map.rows().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            let pos = Point::new(x as i32, y as i32);
            let glyph = rooms
                .iter()
                .position(|room| room.contains(pos))
                .and_then(|index| char::from_digit((index % 10) as u32, 10))
                .unwrap_or_else(|| cave_glyph(cell));
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

fn render_rows<'a, T: 'a>(
    rows: impl Iterator<Item = &'a [T]>,
    glyph: impl Fn(&T) -> char,
) -> String {
    let mut out = String::new();
    for row in rows {
        out.extend(row.iter().map(&glyph));
        out.push('\n');
    }
    out
}

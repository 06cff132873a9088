//! Row-major rectangular buffers addressed as `[y][x]`.

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::types::{ForestCell, Point};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Boolean cave lattice: [`FILLED`](crate::FILLED) walls, [`EMPTY`](crate::EMPTY) floor.
pub type CaveMap = Grid<bool>;
pub type ForestMap = Grid<ForestCell>;

impl<T: Copy + PartialEq> Grid<T> {
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self { width, height, cells: vec![value; width * height] }
    }

    /// Builds a grid from nested rows, rejecting empty or ragged input.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, GenError> {
        let Some(first) = rows.first() else {
            return Err(GenError::invalid_map("no rows"));
        };
        let width = first.as_ref().len();
        if width == 0 {
            return Err(GenError::invalid_map("rows have no columns"));
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GenError::invalid_map(format!(
                    "row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { width, height: rows.len(), cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Point) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Panics when `(y, x)` is outside the grid, like slice indexing.
    pub fn get(&self, y: usize, x: usize) -> T {
        self.cells[self.index(y, x)]
    }

    pub fn at(&self, pos: Point) -> Option<T> {
        self.in_bounds(pos).then(|| self.cells[(pos.y as usize) * self.width + (pos.x as usize)])
    }

    pub fn set(&mut self, y: usize, x: usize, value: T) {
        let index = self.index(y, x);
        self.cells[index] = value;
    }

    /// Writes `value` at `pos` when it is in bounds; out-of-bounds writes are dropped.
    pub fn set_at(&mut self, pos: Point, value: T) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        self.cells[(pos.y as usize) * self.width + (pos.x as usize)] = value;
        true
    }

    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    pub fn count(&self, value: T) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Every coordinate in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point::new(x as i32, y as i32)))
    }

    pub fn replace_all(&mut self, from: T, to: T) {
        for cell in self.cells.iter_mut().filter(|cell| **cell == from) {
            *cell = to;
        }
    }

    fn index(&self, y: usize, x: usize) -> usize {
        assert!(x < self.width && y < self.height, "({y}, {x}) outside {}x{}", self.width, self.height);
        y * self.width + x
    }

    pub fn is_edge(&self, y: usize, x: usize) -> bool {
        y == 0 || x == 0 || y + 1 == self.height || x + 1 == self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![vec![true, false], vec![true]];
        let err = CaveMap::from_rows(&rows).expect_err("ragged rows must be rejected");
        assert!(matches!(err, GenError::InvalidMap { .. }));
        let empty: Vec<Vec<bool>> = Vec::new();
        assert!(CaveMap::from_rows(&empty).is_err());
    }

    #[test]
    fn addressing_is_y_then_x() {
        let grid = CaveMap::from_rows(&[[true, false, false], [false, false, true]])
            .expect("rectangular rows");
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.get(0, 0));
        assert!(grid.get(1, 2));
        assert_eq!(grid.at(Point::new(2, 1)), Some(true));
        assert_eq!(grid.at(Point::new(3, 1)), None);
        assert_eq!(grid.at(Point::new(-1, 0)), None);
    }

    #[test]
    fn points_walk_row_major() {
        let grid = Grid::filled(2, 2, 0_u8);
        let points: Vec<Point> = grid.points().collect();
        assert_eq!(
            points,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn replace_all_only_touches_matching_cells() {
        let mut grid = ForestMap::filled(3, 1, ForestCell::Seeded);
        grid.set(0, 1, ForestCell::Forest);
        grid.replace_all(ForestCell::Seeded, ForestCell::Empty);
        assert_eq!(grid.cells(), &[ForestCell::Empty, ForestCell::Forest, ForestCell::Empty]);
        assert!(!grid.set_at(Point::new(5, 0), ForestCell::Forest));
    }
}

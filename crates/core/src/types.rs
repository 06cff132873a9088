use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Cave wall state. Counting helpers rely on walls being the `true` value.
pub const FILLED: bool = true;
/// Cave floor state.
pub const EMPTY: bool = false;

/// Integer lattice coordinate.
///
/// Fields are declared `y` first so the derived ordering is row-major, which
/// the generators use wherever a deterministic iteration order is required.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Point {
    pub y: i32,
    pub x: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }

    pub const fn abs(self) -> Self {
        Self { y: self.y.abs(), x: self.x.abs() }
    }

    /// Clamps each component into `{-1, 0, 1}`, turning an arbitrary delta
    /// into one of the Moore ring offsets (or the origin).
    pub const fn wrap(self) -> Self {
        Self { y: self.y.signum(), x: self.x.signum() }
    }

    /// `minx <= x < maxx && miny <= y < maxy`.
    pub const fn valid(self, min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> bool {
        self.x >= min_x && self.x < max_x && self.y >= min_y && self.y < max_y
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point { y: self.y + rhs.y, x: self.x + rhs.x }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point { y: self.y - rhs.y, x: self.x - rhs.x }
    }
}

/// Forest lattice states. The discriminants are the serialized byte values.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum ForestCell {
    #[default]
    Empty = 0,
    Forest = 1,
    Seeded = 2,
}

impl ForestCell {
    pub const fn as_byte(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_clamps_both_directions() {
        assert_eq!(Point::new(5, -7).wrap(), Point::new(1, -1));
        assert_eq!(Point::new(-2, 2).wrap(), Point::new(-1, 1));
        assert_eq!(Point::new(0, -3).wrap(), Point::new(0, -1));
        assert_eq!(Point::new(1, 0).wrap(), Point::new(1, 0));
    }

    #[test]
    fn derived_order_is_row_major() {
        let mut points = vec![Point::new(3, 1), Point::new(0, 2), Point::new(1, 1)];
        points.sort();
        assert_eq!(points, vec![Point::new(1, 1), Point::new(3, 1), Point::new(0, 2)]);
    }

    #[test]
    fn valid_uses_half_open_bounds() {
        let point = Point::new(4, 0);
        assert!(point.valid(0, 5, 0, 1));
        assert!(!point.valid(0, 4, 0, 1));
        assert!(!Point::new(-1, 0).valid(0, 5, 0, 5));
    }

    #[test]
    fn arithmetic_is_component_wise() {
        let a = Point::new(2, -3);
        let b = Point::new(-1, 4);
        assert_eq!(a + b, Point::new(1, 1));
        assert_eq!(a - b, Point::new(3, -7));
        assert_eq!((a - b).abs(), Point::new(3, 7));
        assert_eq!(a.translate(1, 1), Point::new(3, -2));
    }

    #[test]
    fn forest_cell_bytes_match_encoding() {
        assert_eq!(ForestCell::Empty.as_byte(), 0);
        assert_eq!(ForestCell::Forest.as_byte(), 1);
        assert_eq!(ForestCell::Seeded.as_byte(), 2);
    }
}

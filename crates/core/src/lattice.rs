//! Lattice utilities shared by the generators: neighbourhood tables, neighbour
//! counts, connected components and Moore contour tracing.

mod components;
mod contour;
mod edges;
mod grid;
mod neighbors;

use crate::types::Point;

pub use components::{Room, connected_components};
pub use contour::{
    MoorePixel, find_empty_neighbor, get_contour, next_clockwise_pixel, trace_contour,
};
pub use edges::{Line, contour_lines, edge_lines};
pub use grid::{CaveMap, ForestMap, Grid};
pub use neighbors::{is_border_point, neighbor_count_1, neighbor_count_2};

/// Moore ring, clockwise from north-west.
pub const MOORE_HOOD: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
    Point::new(0, 1),
    Point::new(-1, 1),
    Point::new(-1, 0),
];

/// Cardinal neighbours in flood-fill order.
pub const VON_NEUMANN_HOOD: [Point; 4] =
    [Point::new(0, -1), Point::new(-1, 0), Point::new(1, 0), Point::new(0, 1)];

/// Index of `(dx, dy)` in [`MOORE_HOOD`], or `None` for the origin or any
/// offset outside the ring.
pub const fn moore_index(dx: i32, dy: i32) -> Option<usize> {
    match (dx, dy) {
        (-1, -1) => Some(0),
        (0, -1) => Some(1),
        (1, -1) => Some(2),
        (1, 0) => Some(3),
        (1, 1) => Some(4),
        (0, 1) => Some(5),
        (-1, 1) => Some(6),
        (-1, 0) => Some(7),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moore_index_inverts_the_ring() {
        for (index, offset) in MOORE_HOOD.iter().enumerate() {
            assert_eq!(moore_index(offset.x, offset.y), Some(index));
        }
        assert_eq!(moore_index(0, 0), None);
        assert_eq!(moore_index(2, 0), None);
    }

    #[test]
    fn von_neumann_offsets_are_cardinal() {
        for offset in VON_NEUMANN_HOOD {
            assert_eq!(offset.x.abs() + offset.y.abs(), 1);
        }
    }
}

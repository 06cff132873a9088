//! Breadth-first connected-component labelling over 4-neighbour adjacency.

use std::collections::{HashSet, VecDeque};

use crate::types::Point;

use super::VON_NEUMANN_HOOD;
use super::grid::Grid;

/// A maximal 4-connected set of same-state cells.
///
/// Cells are kept in discovery order, so iterating a room is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Room {
    cells: Vec<Point>,
    members: HashSet<Point>,
}

impl Room {
    fn push(&mut self, pos: Point) {
        if self.members.insert(pos) {
            self.cells.push(pos);
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Point) -> bool {
        self.members.contains(&pos)
    }

    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// First discovered cell, which is also the row-major minimum.
    pub fn first(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().copied()
    }
}

/// Rooms of `kind` cells.
///
/// Seeds are discovered in row-major order and each fill uses a FIFO
/// frontier fed in [`VON_NEUMANN_HOOD`] order, which fixes the order of both
/// the returned rooms and the cells inside each room.
pub fn connected_components<T: Copy + PartialEq>(map: &Grid<T>, kind: T) -> Vec<Room> {
    let width = map.width();
    let mut visited = vec![false; width * map.height()];
    let mut rooms = Vec::new();
    let mut frontier = VecDeque::new();

    for seed in map.points() {
        let seed_index = (seed.y as usize) * width + (seed.x as usize);
        if visited[seed_index] || map.at(seed) != Some(kind) {
            continue;
        }
        visited[seed_index] = true;
        frontier.push_back(seed);

        let mut room = Room::default();
        while let Some(current) = frontier.pop_front() {
            room.push(current);
            for offset in VON_NEUMANN_HOOD {
                let neighbor = current + offset;
                if map.at(neighbor) != Some(kind) {
                    continue;
                }
                let neighbor_index = (neighbor.y as usize) * width + (neighbor.x as usize);
                if !visited[neighbor_index] {
                    visited[neighbor_index] = true;
                    frontier.push_back(neighbor);
                }
            }
        }
        rooms.push(room);
    }

    rooms
}

//! Empirical room stitching: tunnel from a stray room toward the map centre.
//!
//! This is best-effort. A walk can leave the interior before it meets another
//! open cell, in which case the room stays disconnected.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::lattice::{CaveMap, Room};
use crate::rng::RandomSource;
use crate::types::{EMPTY, FILLED, Point};

/// Outcome of stitching the rooms of one generated cave.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StitchReport {
    /// EMPTY rooms found after the automaton ran.
    pub rooms: usize,
    pub stitched: usize,
    pub failed: usize,
}

pub(super) fn fix_room<R: RandomSource>(map: &mut CaveMap, rng: &mut R, room: &Room) -> bool {
    let Some(start) = room.first() else {
        return false;
    };
    let width = map.width() as i32;
    let height = map.height() as i32;
    let toward_center = Point::new((width / 2 - start.x).signum(), (height / 2 - start.y).signum());
    if toward_center == Point::default() {
        warn!(x = start.x, y = start.y, "room starts on the map centre, cannot tunnel");
        return false;
    }

    let mut pos = start;
    let mut carved = 0_usize;
    loop {
        pos = step_toward(rng, pos, toward_center);
        let inside = pos.x >= 1 && pos.x <= width - 2 && pos.y >= 1 && pos.y <= height - 2;
        if !inside {
            warn!(
                start_x = start.x,
                start_y = start.y,
                last_x = pos.x,
                last_y = pos.y,
                "reached the map edge before finding an open cell"
            );
            return false;
        }

        let cell = map.get(pos.y as usize, pos.x as usize);
        if cell == EMPTY && !room.contains(pos) {
            debug!(start_x = start.x, start_y = start.y, carved, "room stitched");
            return true;
        }
        if cell == FILLED {
            map.set(pos.y as usize, pos.x as usize, EMPTY);
            carved += 1;
        }
    }
}

/// Coin flip between the x and y components of `direction`, repeated until
/// the position actually changes.
fn step_toward<R: RandomSource>(rng: &mut R, pos: Point, direction: Point) -> Point {
    loop {
        let next = if rng.next_double() < 0.5 {
            pos.translate(direction.x, 0)
        } else {
            pos.translate(0, direction.y)
        };
        if next != pos {
            return next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::connected_components;
    use crate::test_support::ScriptedSource;

    fn solid_with_holes(width: usize, height: usize, holes: &[Point]) -> CaveMap {
        let mut map = CaveMap::filled(width, height, FILLED);
        for &hole in holes {
            map.set_at(hole, EMPTY);
        }
        map
    }

    fn room_at(map: &CaveMap, pos: Point) -> Room {
        connected_components(map, EMPTY)
            .into_iter()
            .find(|room| room.contains(pos))
            .expect("a room covers the position")
    }

    #[test]
    fn alternating_walk_reaches_the_centre_room() {
        let mut map = solid_with_holes(7, 7, &[Point::new(1, 1), Point::new(3, 3)]);
        let room = room_at(&map, Point::new(1, 1));
        let mut rng = ScriptedSource::new(vec![0.0, 0.9]);

        assert!(fix_room(&mut map, &mut rng, &room));
        for carved in [Point::new(2, 1), Point::new(2, 2), Point::new(3, 2)] {
            assert_eq!(map.at(carved), Some(EMPTY), "{carved:?} should be carved");
        }
        assert_eq!(connected_components(&map, EMPTY).len(), 1);
    }

    #[test]
    fn walk_retries_flips_that_do_not_move() {
        let mut map = solid_with_holes(7, 7, &[Point::new(1, 3), Point::new(3, 3)]);
        let room = room_at(&map, Point::new(1, 3));
        let mut rng = ScriptedSource::new(vec![0.9, 0.1]);

        assert!(fix_room(&mut map, &mut rng, &room));
        assert_eq!(map.at(Point::new(2, 3)), Some(EMPTY));
        assert_eq!(map.count(EMPTY), 3);
    }

    #[test]
    fn walk_that_leaves_the_interior_fails_and_keeps_carving() {
        let mut map = solid_with_holes(5, 5, &[Point::new(1, 1)]);
        let room = room_at(&map, Point::new(1, 1));
        let mut rng = ScriptedSource::new(vec![0.0]);

        assert!(!fix_room(&mut map, &mut rng, &room));
        assert_eq!(map.at(Point::new(2, 1)), Some(EMPTY));
        assert_eq!(map.at(Point::new(3, 1)), Some(EMPTY));
        assert_eq!(map.at(Point::new(4, 1)), Some(FILLED), "the border is never carved");
    }

    #[test]
    fn room_on_the_centre_is_left_alone() {
        let mut map = solid_with_holes(5, 5, &[Point::new(2, 2)]);
        let room = room_at(&map, Point::new(2, 2));
        let mut rng = ScriptedSource::new(vec![0.0]);
        assert!(!fix_room(&mut map, &mut rng, &room));
        assert_eq!(map.count(EMPTY), 1);
    }

    #[test]
    fn walking_through_its_own_room_does_not_count() {
        let mut map =
            solid_with_holes(7, 7, &[Point::new(1, 1), Point::new(2, 1), Point::new(4, 1)]);
        let room = room_at(&map, Point::new(1, 1));
        let mut rng = ScriptedSource::new(vec![0.0]);

        assert!(fix_room(&mut map, &mut rng, &room));
        assert_eq!(map.at(Point::new(3, 1)), Some(EMPTY));
        assert_eq!(connected_components(&map, EMPTY).len(), 1);
    }
}

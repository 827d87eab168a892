//! Movement rules, split into the three steps the turn handler composes:
//! propose a cell, validate it against the floor, then work out whether a
//! stairs command changes the floor index.

use bracket_geometry::prelude::Point;

use crate::{command::Command, data::LAST_FLOOR, map::Map};

pub trait Walkable {
    fn is_walkable(&self, point: Point) -> bool;
}

impl Walkable for Map {
    fn is_walkable(&self, point: Point) -> bool {
        Map::is_walkable(self, point)
    }
}

pub fn candidate_position(from: Point, command: Command) -> Point {
    let (dx, dy) = command.delta();
    Point::new(from.x + dx, from.y + dy)
}

/// Returns `candidate` when it is in bounds and walkable, otherwise `from`.
pub fn validate_position<W: Walkable + ?Sized>(map: &W, from: Point, candidate: Point) -> Point {
    if map.is_walkable(candidate) {
        candidate
    } else {
        from
    }
}

/// Target floor for a stairs command, or `None` when the floor stays put.
///
/// Only fires while the player stands exactly on the stairs; the result is
/// clamped to `[0, LAST_FLOOR]`.
pub fn detect_floor_transition(
    command: Command,
    player: Point,
    stairs: Point,
    floor: usize,
) -> Option<usize> {
    let delta = command.floor_delta();
    if delta == 0 || player != stairs {
        return None;
    }
    let next = (floor as i32 + delta).clamp(0, LAST_FLOOR as i32) as usize;
    (next != floor).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{HEIGHT, MAP_SIZE, WIDTH};

    fn open_floor() -> Map {
        Map::load(&"0".repeat(MAP_SIZE))
    }

    #[test]
    fn candidate_follows_command_delta() {
        let from = Point::new(10, 10);
        assert_eq!(candidate_position(from, Command::Up), Point::new(10, 9));
        assert_eq!(candidate_position(from, Command::Down), Point::new(10, 11));
        assert_eq!(candidate_position(from, Command::Left), Point::new(9, 10));
        assert_eq!(candidate_position(from, Command::Right), Point::new(11, 10));
        assert_eq!(candidate_position(from, Command::Descend), from);
        assert_eq!(candidate_position(from, Command::Wait), from);
    }

    #[test]
    fn validation_rejects_out_of_bounds() {
        let map = open_floor();
        let corner = Point::new(0, 0);
        assert_eq!(validate_position(&map, corner, Point::new(-1, 0)), corner);
        assert_eq!(validate_position(&map, corner, Point::new(0, -1)), corner);
        let far = Point::new(WIDTH - 1, HEIGHT - 1);
        assert_eq!(validate_position(&map, far, Point::new(WIDTH, HEIGHT - 1)), far);
        assert_eq!(validate_position(&map, far, Point::new(WIDTH - 1, HEIGHT)), far);
    }

    #[test]
    fn validation_rejects_rock() {
        let map = Map::blank();
        let from = Point::new(5, 5);
        assert_eq!(validate_position(&map, from, Point::new(6, 5)), from);
        let open = open_floor();
        assert_eq!(validate_position(&open, from, Point::new(6, 5)), Point::new(6, 5));
    }

    #[test]
    fn stairs_only_work_when_standing_on_them() {
        let stairs = Point::new(3, 3);
        assert_eq!(detect_floor_transition(Command::Descend, stairs, stairs, 2), Some(3));
        assert_eq!(detect_floor_transition(Command::Ascend, stairs, stairs, 2), Some(1));
        assert_eq!(
            detect_floor_transition(Command::Descend, Point::new(3, 4), stairs, 2),
            None
        );
        assert_eq!(detect_floor_transition(Command::Right, stairs, stairs, 2), None);
    }

    #[test]
    fn floor_index_is_clamped() {
        let stairs = Point::new(3, 3);
        assert_eq!(detect_floor_transition(Command::Ascend, stairs, stairs, 0), None);
        assert_eq!(
            detect_floor_transition(Command::Descend, stairs, stairs, LAST_FLOOR),
            None
        );
    }
}

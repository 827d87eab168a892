use bracket_geometry::prelude::Point;

use crate::map::{Map, WIDTH, in_bounds};

use super::movement::Walkable;

/// Walkability snapshot of the active floor, handed to the systems each turn.
#[derive(Clone)]
pub struct MovementContext {
    walkable: Vec<bool>,
}

impl MovementContext {
    pub fn from_map(map: &Map) -> Self {
        let walkable = map
            .cells()
            .iter()
            .map(|cell| cell.is_walkable())
            .collect::<Vec<bool>>();

        Self { walkable }
    }
}

impl Walkable for MovementContext {
    fn is_walkable(&self, point: Point) -> bool {
        if !in_bounds(point) {
            return false;
        }
        let idx = (point.y * WIDTH + point.x) as usize;
        self.walkable.get(idx).copied().unwrap_or(false)
    }
}

#[derive(Default)]
pub struct CombatLog {
    pub entries: Vec<String>,
}

impl CombatLog {
    pub fn push<S: Into<String>>(&mut self, entry: S) {
        self.entries.push(entry.into());
    }
}

mod floors;
pub mod monsters;

use bracket_geometry::prelude::Point;

use self::floors::FLOOR_TABLES;

pub const FLOORS: usize = 8;
pub const LAST_FLOOR: usize = FLOORS - 1;
pub const AMULET_FLOOR: usize = LAST_FLOOR / 2;

/// Static spawn data for one floor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloorSpawn {
    pub template: &'static str,
    pub entry: Point,
    pub stairs: Point,
    pub amulet: Option<Point>,
    pub enemies: Vec<Point>,
}

/// Per-floor spawn table, seeded once from literal data and read-only after.
#[derive(Clone, Debug)]
pub struct FloorRegistry {
    floors: Vec<FloorSpawn>,
}

impl Default for FloorRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FloorRegistry {
    pub fn builtin() -> Self {
        let floors = FLOOR_TABLES
            .iter()
            .map(|table| FloorSpawn {
                template: table.template,
                entry: to_point(table.entry),
                stairs: to_point(table.stairs),
                amulet: table.amulet.map(to_point),
                enemies: table.enemies.iter().copied().map(to_point).collect(),
            })
            .collect();
        Self { floors }
    }

    /// Spawn set for `floor`. Callers clamp the index to `[0, FLOORS)` first.
    pub fn load(&self, floor: usize) -> &FloorSpawn {
        &self.floors[floor]
    }

    pub fn amulet_floor(&self) -> Option<usize> {
        self.floors.iter().position(|spawn| spawn.amulet.is_some())
    }
}

fn to_point((x, y): (i32, i32)) -> Point {
    Point::new(x, y)
}

/// 1-indexed depth shown to the player: climbs toward the amulet floor, then
/// counts back down to 1 on the last floor.
pub fn display_floor(floor: usize) -> usize {
    if floor <= AMULET_FLOOR {
        floor + 1
    } else {
        FLOORS.saturating_sub(floor).max(1)
    }
}

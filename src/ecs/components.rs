use bracket_geometry::prelude::Point;
use specs::prelude::{Component, NullStorage, VecStorage};

use crate::command::Command;

/// Current cell plus the cell occupied before the last move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub point: Point,
    pub previous: Point,
}

impl Position {
    pub fn at(point: Point) -> Self {
        Self {
            point,
            previous: point,
        }
    }
}

impl Component for Position {
    type Storage = VecStorage<Self>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatStats {
    pub max_hp: i32,
    pub hp: i32,
    pub attack: i32,
}

impl CombatStats {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

impl Component for CombatStats {
    type Storage = VecStorage<Self>;
}

/// Level bookkeeping shown on the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progression {
    pub level: i32,
    pub xp: i32,
    pub next_level_xp: i32,
}

impl Component for Progression {
    type Storage = VecStorage<Self>;
}

#[derive(Clone, Debug)]
pub struct IntentStep {
    pub command: Command,
}

impl Component for IntentStep {
    type Storage = VecStorage<Self>;
}

#[derive(Default)]
pub struct PlayerTag;

impl Component for PlayerTag {
    type Storage = NullStorage<Self>;
}

#[derive(Clone, Debug)]
pub struct Monster {
    pub name: String,
    pub xp_reward: i32,
}

impl Component for Monster {
    type Storage = VecStorage<Self>;
}

/// Fixed marker on the floor (stairs, amulet). Never moves once placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StillEntity {
    pub point: Point,
}

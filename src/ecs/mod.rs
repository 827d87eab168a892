pub mod components;
pub mod movement;
pub mod resources;
pub mod systems;

use bracket_geometry::prelude::Point;
use specs::prelude::{
    Builder, Dispatcher, DispatcherBuilder, Entity, Join, World as SpecsWorld, WorldExt,
};

use crate::{command::Command, config::PlayerConfig, data::monsters::MonsterTemplate, map::Map};

use self::{
    components::{CombatStats, IntentStep, Monster, PlayerTag, Position, Progression},
    resources::{CombatLog, MovementContext},
    systems::MovementSystem,
};

pub const PLAYER_CHAR: char = 'P';
const LEVEL_UP_MAX_HP: i32 = 2;

pub struct EcsWorld {
    specs_world: SpecsWorld,
    dispatcher: Dispatcher<'static, 'static>,
    player: Entity,
    pub turn: u64,
}

/// Result of one exchange of blows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrikeReport {
    pub opponent_hp: i32,
    pub opponent_attack: i32,
    pub opponent_name: String,
}

impl EcsWorld {
    pub fn new(stats: &PlayerConfig) -> Self {
        let mut specs_world = SpecsWorld::new();
        Self::register_components(&mut specs_world);
        specs_world.insert(CombatLog::default());
        specs_world.insert(MovementContext::from_map(&Map::blank()));
        let player = Self::spawn_player(&mut specs_world, stats);
        let dispatcher = DispatcherBuilder::new()
            .with(MovementSystem, "movement", &[])
            .build();

        Self {
            specs_world,
            dispatcher,
            player,
            turn: 0,
        }
    }

    fn register_components(world: &mut SpecsWorld) {
        world.register::<Position>();
        world.register::<IntentStep>();
        world.register::<PlayerTag>();
        world.register::<Monster>();
        world.register::<CombatStats>();
        world.register::<Progression>();
    }

    fn spawn_player(world: &mut SpecsWorld, stats: &PlayerConfig) -> Entity {
        world
            .create_entity()
            .with(Position::at(Point::new(0, 0)))
            .with(Self::player_stats_from(stats))
            .with(Self::player_progression_from(stats))
            .with(PlayerTag)
            .build()
    }

    fn player_stats_from(stats: &PlayerConfig) -> CombatStats {
        CombatStats {
            max_hp: stats.hp,
            hp: stats.hp,
            attack: stats.attack,
        }
    }

    fn player_progression_from(stats: &PlayerConfig) -> Progression {
        Progression {
            level: stats.level,
            xp: stats.xp,
            next_level_xp: stats.next_level_xp,
        }
    }

    /// Restores the player's starting stats without recreating the entity.
    pub fn reset_player(&mut self, stats: &PlayerConfig) {
        let mut combat = self.specs_world.write_component::<CombatStats>();
        if let Some(player_stats) = combat.get_mut(self.player) {
            *player_stats = Self::player_stats_from(stats);
        }
        let mut progression = self.specs_world.write_component::<Progression>();
        if let Some(player_progress) = progression.get_mut(self.player) {
            *player_progress = Self::player_progression_from(stats);
        }
    }

    /// Runs the movement system for one turn against `map`.
    pub fn advance(&mut self, map: &Map) {
        self.specs_world.insert(MovementContext::from_map(map));
        self.dispatcher.dispatch(&self.specs_world);
        self.specs_world.maintain();
        self.turn = self.turn.wrapping_add(1);
    }

    pub fn queue_player_command(&mut self, command: Command) {
        let mut intents = self.specs_world.write_component::<IntentStep>();
        let _ = intents.insert(self.player, IntentStep { command });
    }

    pub fn player_entity(&self) -> Entity {
        self.player
    }

    pub fn player_position(&self) -> Position {
        let storage = self.specs_world.read_component::<Position>();
        storage
            .get(self.player)
            .cloned()
            .unwrap_or_else(|| Position::at(Point::new(0, 0)))
    }

    pub fn player_point(&self) -> Point {
        self.player_position().point
    }

    pub fn place_player(&mut self, point: Point) {
        let mut positions = self.specs_world.write_component::<Position>();
        if let Some(pos) = positions.get_mut(self.player) {
            *pos = Position::at(point);
        }
    }

    /// Rolls the player back to the cell held before the last move.
    pub fn retreat_player(&mut self) {
        let mut positions = self.specs_world.write_component::<Position>();
        if let Some(pos) = positions.get_mut(self.player) {
            let from = pos.point;
            pos.point = pos.previous;
            pos.previous = from;
        }
    }

    pub fn player_stats(&self) -> Option<CombatStats> {
        let stats = self.specs_world.read_component::<CombatStats>();
        stats.get(self.player).cloned()
    }

    pub fn player_progression(&self) -> Option<Progression> {
        let progression = self.specs_world.read_component::<Progression>();
        progression.get(self.player).cloned()
    }

    pub fn is_player_alive(&self) -> bool {
        self.player_stats().is_some_and(|stats| stats.is_alive())
    }

    pub fn spawn_monster(&mut self, template: &MonsterTemplate, point: Point) -> Entity {
        self.specs_world
            .create_entity()
            .with(Position::at(point))
            .with(Monster {
                name: template.name.to_string(),
                xp_reward: template.xp_reward,
            })
            .with(CombatStats {
                max_hp: template.hp,
                hp: template.hp,
                attack: template.attack,
            })
            .build()
    }

    /// Deletes every monster; the next floor repopulates from scratch.
    pub fn clear_monsters(&mut self) {
        let doomed: Vec<Entity> = {
            let entities = self.specs_world.entities();
            let monsters = self.specs_world.read_component::<Monster>();
            (&entities, &monsters)
                .join()
                .map(|(entity, _)| entity)
                .collect()
        };
        for entity in doomed {
            let _ = self.specs_world.delete_entity(entity);
        }
        self.specs_world.maintain();
    }

    pub fn monster_at(&self, point: Point) -> Option<Entity> {
        let entities = self.specs_world.entities();
        let positions = self.specs_world.read_component::<Position>();
        let monsters = self.specs_world.read_component::<Monster>();
        (&entities, &positions, &monsters)
            .join()
            .find(|(_, pos, _)| pos.point == point)
            .map(|(entity, _, _)| entity)
    }

    pub fn monster_points(&self) -> Vec<Point> {
        let positions = self.specs_world.read_component::<Position>();
        let monsters = self.specs_world.read_component::<Monster>();
        (&positions, &monsters)
            .join()
            .map(|(pos, _)| pos.point)
            .collect()
    }

    pub fn monster_stats(&self, monster: Entity) -> Option<CombatStats> {
        let stats = self.specs_world.read_component::<CombatStats>();
        stats.get(monster).cloned()
    }

    pub fn is_monster(&self, entity: Entity) -> bool {
        self.specs_world.is_alive(entity)
            && self.specs_world.read_component::<Monster>().contains(entity)
    }

    /// Player hits `opponent` for their attack value.
    pub fn player_strike(&mut self, opponent: Entity) -> Option<StrikeReport> {
        let mut stats = self.specs_world.write_component::<CombatStats>();
        let monsters = self.specs_world.read_component::<Monster>();
        let attack = stats.get(self.player)?.attack;
        let target = stats.get_mut(opponent)?;
        target.hp -= attack;
        let name = monsters
            .get(opponent)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| "foe".to_string());

        let report = StrikeReport {
            opponent_hp: target.hp,
            opponent_attack: target.attack,
            opponent_name: name,
        };
        self.specs_world
            .write_resource::<CombatLog>()
            .push(format!("You strike the {} for {attack}.", report.opponent_name));
        Some(report)
    }

    /// Applies `damage` to the player and returns the remaining hp.
    pub fn hurt_player(&mut self, damage: i32, source: &str) -> i32 {
        let hp = {
            let mut stats = self.specs_world.write_component::<CombatStats>();
            match stats.get_mut(self.player) {
                Some(player_stats) => {
                    player_stats.hp -= damage;
                    player_stats.hp
                }
                None => 0,
            }
        };
        self.specs_world
            .write_resource::<CombatLog>()
            .push(format!("The {source} hits you for {damage}."));
        hp
    }

    /// Removes a defeated monster and credits its xp. Returns true on level up.
    pub fn slay_monster(&mut self, monster: Entity) -> bool {
        let reward = {
            let monsters = self.specs_world.read_component::<Monster>();
            monsters.get(monster).map(|m| (m.name.clone(), m.xp_reward))
        };
        let _ = self.specs_world.delete_entity(monster);
        self.specs_world.maintain();

        let Some((name, xp)) = reward else {
            return false;
        };
        self.specs_world
            .write_resource::<CombatLog>()
            .push(format!("The {name} falls."));
        self.grant_xp(xp)
    }

    fn grant_xp(&mut self, xp: i32) -> bool {
        let mut progression = self.specs_world.write_component::<Progression>();
        let mut stats = self.specs_world.write_component::<CombatStats>();
        let Some(progress) = progression.get_mut(self.player) else {
            return false;
        };
        progress.xp = progress.xp.saturating_add(xp);
        let mut leveled = false;
        while progress.next_level_xp > 0 && progress.xp >= progress.next_level_xp {
            progress.level = progress.level.saturating_add(1);
            if let Some(player_stats) = stats.get_mut(self.player) {
                player_stats.max_hp = player_stats.max_hp.saturating_add(LEVEL_UP_MAX_HP);
            }
            leveled = true;
            // Past i32 range the next threshold is unreachable; levelling stops.
            match progress.next_level_xp.checked_mul(2) {
                Some(next) => progress.next_level_xp = next,
                None => {
                    progress.next_level_xp = i32::MAX;
                    break;
                }
            }
        }
        leveled
    }

    pub fn drain_combat_log(&mut self) -> Vec<String> {
        let mut log = self.specs_world.write_resource::<CombatLog>();
        std::mem::take(&mut log.entries)
    }
}

//! Game-flow state machine.
//!
//! A [`Session`] owns every piece of mutable game state. Each [`FlowState`]
//! maps to one transition function that reads the session, applies at most
//! one command, and names the next state. Only `OnFloor` consumes input.

mod transitions;

use bracket_geometry::prelude::Point;
use log::{debug, trace};
use specs::prelude::Entity;

use crate::{
    command::Command,
    config::Config,
    data::{FloorRegistry, display_floor, monsters::MonsterTemplate},
    ecs::{
        EcsWorld,
        components::{Position, StillEntity},
    },
    map::Map,
};

pub const FIND_AMULET_MESSAGE: &str = "Find the amulet!";
pub const HAVE_AMULET_MESSAGE: &str = "You have the amulet!";
pub const WIN_MESSAGE: &str = "You have got the amulet! - GAME OVER";
pub const LOSE_MESSAGE: &str = "You died! - GAME OVER";
pub const QUIT_MESSAGE: &str = "You quit.";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FlowState {
    Start,
    NewFloor,
    OnFloor,
    Battle,
    Win,
    Lose,
    End,
}

impl FlowState {
    pub fn needs_input(self) -> bool {
        self == FlowState::OnFloor
    }

    pub fn is_terminal(self) -> bool {
        self == FlowState::End
    }
}

type Transition = fn(&mut Session, Option<Command>) -> FlowState;

fn transition_for(state: FlowState) -> Transition {
    match state {
        FlowState::Start => transitions::start,
        FlowState::NewFloor => transitions::new_floor,
        FlowState::OnFloor => transitions::on_floor,
        FlowState::Battle => transitions::battle,
        FlowState::Win => transitions::win,
        FlowState::Lose => transitions::lose,
        FlowState::End => transitions::end,
    }
}

pub struct Session {
    config: Config,
    registry: FloorRegistry,
    monster: MonsterTemplate,
    map: Map,
    ecs: EcsWorld,
    floor: usize,
    previous_floor: usize,
    has_amulet: bool,
    stairs: StillEntity,
    amulet: Option<StillEntity>,
    opponent: Option<Entity>,
    top_status: String,
    bottom_status: String,
    messages: Vec<String>,
    full_redraw: bool,
    state: FlowState,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let ecs = EcsWorld::new(&config.player);
        let monster = MonsterTemplate::warden(&config.enemy);
        Self {
            config,
            registry: FloorRegistry::builtin(),
            monster,
            map: Map::blank(),
            ecs,
            floor: 0,
            previous_floor: 0,
            has_amulet: false,
            stairs: StillEntity {
                point: Point::new(0, 0),
            },
            amulet: None,
            opponent: None,
            top_status: String::new(),
            bottom_status: String::new(),
            messages: Vec::new(),
            full_redraw: true,
            state: FlowState::Start,
        }
    }

    /// Runs the current state's transition once. `input` is ignored by every
    /// state except `OnFloor`, which stays put when given nothing.
    pub fn tick(&mut self, input: Option<Command>) -> FlowState {
        trace!("tick in {:?} with {:?}", self.state, input);
        let from = self.state;
        let next = transition_for(from)(self, input);
        if next != from {
            debug!("{from:?} -> {next:?}");
        }
        self.state = next;
        next
    }

    /// Ticks through states that need no input.
    pub fn advance_until_input(&mut self) -> FlowState {
        while !self.state.needs_input() && !self.state.is_terminal() {
            self.tick(None);
        }
        self.state
    }

    /// Plays one player turn and everything it sets in motion.
    pub fn play(&mut self, command: Command) -> FlowState {
        if self.advance_until_input().needs_input() {
            self.tick(Some(command));
        }
        self.advance_until_input()
    }

    /// Feeds commands until they run out or the game ends.
    pub fn run_commands<I: IntoIterator<Item = Command>>(&mut self, commands: I) -> FlowState {
        self.advance_until_input();
        for command in commands {
            if self.state.is_terminal() {
                break;
            }
            self.play(command);
        }
        self.state
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn ecs(&self) -> &EcsWorld {
        &self.ecs
    }

    pub fn floor(&self) -> usize {
        self.floor
    }

    pub fn previous_floor(&self) -> usize {
        self.previous_floor
    }

    pub fn has_amulet(&self) -> bool {
        self.has_amulet
    }

    pub fn stairs(&self) -> StillEntity {
        self.stairs
    }

    pub fn amulet(&self) -> Option<StillEntity> {
        self.amulet
    }

    pub fn opponent(&self) -> Option<Entity> {
        self.opponent
    }

    pub fn player_position(&self) -> Position {
        self.ecs.player_position()
    }

    pub fn top_status(&self) -> &str {
        &self.top_status
    }

    pub fn bottom_status(&self) -> &str {
        &self.bottom_status
    }

    /// Returns and clears the pending full-redraw request.
    pub fn take_full_redraw(&mut self) -> bool {
        std::mem::take(&mut self.full_redraw)
    }

    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    fn refresh_status(&mut self) {
        let stats = self.ecs.player_stats();
        let progress = self.ecs.player_progression();
        let (hp, max_hp, attack) = stats
            .map(|s| (s.hp, s.max_hp, s.attack))
            .unwrap_or_default();
        let (level, xp, next) = progress
            .map(|p| (p.level, p.xp, p.next_level_xp))
            .unwrap_or_default();
        self.top_status = format!(
            "Floor {}  HP {hp}/{max_hp}  Atk {attack}  Lvl {level}  XP {xp}/{next}",
            display_floor(self.floor)
        );
        if !self.state_is_final() {
            self.bottom_status = if self.has_amulet {
                HAVE_AMULET_MESSAGE.to_string()
            } else {
                FIND_AMULET_MESSAGE.to_string()
            };
        }
    }

    fn state_is_final(&self) -> bool {
        matches!(
            self.state,
            FlowState::Win | FlowState::Lose | FlowState::End
        )
    }
}

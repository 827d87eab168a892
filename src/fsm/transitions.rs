use log::{debug, info};

use crate::{
    command::Command,
    data::{FLOORS, LAST_FLOOR},
    ecs::{components::StillEntity, movement::detect_floor_transition},
    map::Map,
};

use super::{FlowState, LOSE_MESSAGE, QUIT_MESSAGE, Session, WIN_MESSAGE};

pub(super) fn start(session: &mut Session, _: Option<Command>) -> FlowState {
    session.ecs.reset_player(&session.config.player);
    session.floor = 0;
    session.previous_floor = 0;
    session.has_amulet = false;
    session.opponent = None;
    info!("descent begins with {FLOORS} floors");
    FlowState::NewFloor
}

pub(super) fn new_floor(session: &mut Session, _: Option<Command>) -> FlowState {
    let floor = session.floor.min(LAST_FLOOR);
    session.floor = floor;
    let spawn = session.registry.load(floor).clone();

    session.map = Map::load(spawn.template);
    session.ecs.place_player(spawn.entry);
    session.ecs.clear_monsters();
    for point in &spawn.enemies {
        session.ecs.spawn_monster(&session.monster, *point);
    }
    session.stairs = StillEntity {
        point: spawn.stairs,
    };
    session.amulet = if session.has_amulet {
        None
    } else {
        spawn.amulet.map(|point| StillEntity { point })
    };
    session.opponent = None;
    session.full_redraw = true;
    session.refresh_status();
    info!(
        "entered floor {floor} from floor {} with {} enemies",
        session.previous_floor,
        spawn.enemies.len()
    );

    if floor == LAST_FLOOR && session.has_amulet {
        FlowState::Win
    } else {
        FlowState::OnFloor
    }
}

pub(super) fn on_floor(session: &mut Session, input: Option<Command>) -> FlowState {
    let Some(command) = input else {
        return FlowState::OnFloor;
    };
    if command == Command::Quit {
        session.bottom_status = QUIT_MESSAGE.to_string();
        info!("player quit on floor {}", session.floor);
        return FlowState::End;
    }

    session.ecs.queue_player_command(command);
    session.ecs.advance(&session.map);
    let player = session.ecs.player_point();

    if let Some(enemy) = session.ecs.monster_at(player) {
        debug!("collided with enemy at {},{}", player.x, player.y);
        session.opponent = Some(enemy);
        return FlowState::Battle;
    }

    if let Some(next) =
        detect_floor_transition(command, player, session.stairs.point, session.floor)
    {
        session.previous_floor = session.floor;
        session.floor = next;
        return FlowState::NewFloor;
    }

    if session.amulet.is_some_and(|amulet| amulet.point == player) {
        session.has_amulet = true;
        session.amulet = None;
        info!("picked up the amulet on floor {}", session.floor);
    }
    session.refresh_status();
    FlowState::OnFloor
}

pub(super) fn battle(session: &mut Session, _: Option<Command>) -> FlowState {
    let Some(opponent) = session.opponent.take() else {
        return FlowState::OnFloor;
    };
    let Some(report) = session.ecs.player_strike(opponent) else {
        return FlowState::OnFloor;
    };

    if report.opponent_hp > 0 {
        let hp = session
            .ecs
            .hurt_player(report.opponent_attack, &report.opponent_name);
        session.ecs.retreat_player();
        info!(
            "{} survives with {} hp; player down to {hp}",
            report.opponent_name, report.opponent_hp
        );
    } else {
        let leveled = session.ecs.slay_monster(opponent);
        info!("{} slain", report.opponent_name);
        session.messages.extend(session.ecs.drain_combat_log());
        if leveled {
            session.messages.push("You feel stronger.".to_string());
        }
    }
    session.messages.extend(session.ecs.drain_combat_log());
    session.refresh_status();

    if session.ecs.is_player_alive() {
        FlowState::OnFloor
    } else {
        FlowState::Lose
    }
}

pub(super) fn win(session: &mut Session, _: Option<Command>) -> FlowState {
    session.bottom_status = WIN_MESSAGE.to_string();
    info!("{WIN_MESSAGE}");
    FlowState::End
}

pub(super) fn lose(session: &mut Session, _: Option<Command>) -> FlowState {
    session.bottom_status = LOSE_MESSAGE.to_string();
    info!("{LOSE_MESSAGE} (floor {})", session.floor);
    FlowState::End
}

pub(super) fn end(_: &mut Session, _: Option<Command>) -> FlowState {
    FlowState::End
}

use amulet_descent::{
    Command, Config, FlowState, Session,
    data::{AMULET_FLOOR, LAST_FLOOR},
    fsm::{HAVE_AMULET_MESSAGE, LOSE_MESSAGE, WIN_MESSAGE},
    render::Frame,
    scripted_input::ScriptedInput,
};
use bracket_geometry::prelude::Point;

const WALKTHROUGH: &str = include_str!("../demos/walkthrough.txt");
const LAST_STAND: &str = include_str!("../demos/last_stand.txt");
const NO_AMULET: &str = include_str!("../demos/no_amulet.txt");
// Player hp 10 against a Warden hitting for 1: the tenth bump is fatal.
const LAST_STAND_SWINGS: usize = 10;

fn new_session() -> Session {
    let mut session = Session::new(Config::default());
    session.advance_until_input();
    session
}

#[test]
fn scripted_walkthrough_wins() {
    let mut session = new_session();
    let script = ScriptedInput::from_script(WALKTHROUGH);
    assert_eq!(session.run_commands(script), FlowState::End);
    assert!(session.has_amulet());
    assert_eq!(session.floor(), LAST_FLOOR);
    assert_eq!(session.bottom_status(), WIN_MESSAGE);
    assert!(session.ecs().is_player_alive());
}

#[test]
fn amulet_flips_on_the_pickup_turn() {
    let mut session = new_session();
    let commands: Vec<Command> = ScriptedInput::from_script(WALKTHROUGH).collect();
    let mut picked_up_at = None;
    for (turn, command) in commands.iter().enumerate() {
        let had_amulet = session.has_amulet();
        session.play(*command);
        if session.has_amulet() && !had_amulet {
            picked_up_at = Some(turn);
            assert_eq!(session.floor(), AMULET_FLOOR);
            assert_eq!(session.player_position().point, Point::new(72, 16));
            assert_eq!(session.bottom_status(), HAVE_AMULET_MESSAGE);
        }
        if had_amulet {
            assert!(session.has_amulet(), "amulet lost on turn {turn}");
        }
    }
    assert!(picked_up_at.is_some());
}

#[test]
fn reaching_the_bottom_without_the_amulet_keeps_playing() {
    let mut session = new_session();
    let script = ScriptedInput::from_script(NO_AMULET);
    assert_eq!(session.run_commands(script), FlowState::OnFloor);
    assert_eq!(session.floor(), LAST_FLOOR);
    assert!(!session.has_amulet());
    assert_ne!(session.bottom_status(), WIN_MESSAGE);
}

#[test]
fn last_stand_script_dies() {
    let mut session = new_session();
    let script = ScriptedInput::from_script(LAST_STAND);
    assert_eq!(session.run_commands(script), FlowState::End);
    assert_eq!(session.bottom_status(), LOSE_MESSAGE);
    assert!(!session.ecs().is_player_alive());
    assert_eq!(session.floor(), 0);
}

#[test]
fn bump_into_enemy_starts_battle() {
    let mut session = new_session();
    let commands: Vec<Command> = ScriptedInput::from_script(LAST_STAND).collect();
    let (last, approach) = commands[..commands.len() - (LAST_STAND_SWINGS - 1)]
        .split_last()
        .expect("approach path");
    session.run_commands(approach.iter().copied());
    assert_eq!(session.player_position().point, Point::new(39, 9));

    assert_eq!(session.tick(Some(*last)), FlowState::Battle);
    assert_eq!(session.tick(None), FlowState::OnFloor);
    assert_eq!(session.player_position().point, Point::new(39, 9));
    let frame = Frame::capture(&mut session);
    assert!(frame.messages.iter().any(|m| m.contains("Warden")));
}

#[test]
fn wall_bump_from_the_entry_point() {
    let mut session = new_session();
    assert_eq!(session.player_position().point, Point::new(5, 5));
    assert_eq!(session.play(Command::Up), FlowState::OnFloor);
    assert_eq!(session.player_position().point, Point::new(5, 5));
}

use amulet_descent::{
    Command, Config, FlowState, Session,
    data::LAST_FLOOR,
    ecs::movement::{candidate_position, detect_floor_transition, validate_position},
    map::Map,
};
use bracket_geometry::prelude::Point;
use proptest::prelude::*;

fn any_command() -> impl Strategy<Value = Command> {
    prop::sample::select(vec![
        Command::Up,
        Command::Down,
        Command::Left,
        Command::Right,
        Command::Descend,
        Command::Ascend,
        Command::Wait,
    ])
}

fn started() -> Session {
    let mut session = Session::new(Config::default());
    session.advance_until_input();
    session
}

proptest! {
    #[test]
    fn player_always_stands_on_walkable_ground(commands in prop::collection::vec(any_command(), 0..300)) {
        let mut session = started();
        for command in commands {
            let state = session.play(command);
            if state == FlowState::End {
                break;
            }
            let point = session.player_position().point;
            prop_assert!(session.map().is_walkable(point), "stood on rock at {:?}", point);
            prop_assert!(session.floor() <= LAST_FLOOR);
        }
    }

    #[test]
    fn amulet_is_never_lost(commands in prop::collection::vec(any_command(), 0..300)) {
        let mut session = started();
        let mut had = false;
        for command in commands {
            session.play(command);
            if had {
                prop_assert!(session.has_amulet());
            }
            had = session.has_amulet();
        }
    }

    #[test]
    fn invalid_moves_are_idempotent(x in -2i32..82, y in -2i32..26, command in any_command()) {
        let map = Map::load(amulet_descent::data::FloorRegistry::builtin().load(0).template);
        let from = Point::new(x, y);
        let candidate = candidate_position(from, command);
        let once = validate_position(&map, from, candidate);
        if once == from {
            let twice = validate_position(&map, once, candidate_position(once, command));
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn floor_transitions_stay_in_range(floor in 0usize..=LAST_FLOOR, command in any_command()) {
        let stairs = Point::new(10, 10);
        if let Some(next) = detect_floor_transition(command, stairs, stairs, floor) {
            prop_assert!(next <= LAST_FLOOR);
            prop_assert_eq!((next as i32 - floor as i32).abs(), 1);
        }
    }
}

use bracket_geometry::prelude::Point;

use crate::{
    data::monsters::ENEMY_CHAR,
    ecs::PLAYER_CHAR,
    fsm::Session,
    map::{CORRIDOR_CHAR, CellClass, NOT_WALKABLE_CHAR, in_bounds},
};

pub const FLOOR_CHAR: char = '.';
pub const STAIRS_CHAR: char = '%';
pub const AMULET_CHAR: char = '*';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Terrain(CellClass),
    Stairs,
    Amulet,
    /// `alerted` is set when the enemy shares the player's room.
    Enemy { alerted: bool },
    Player,
}

impl Glyph {
    pub fn symbol(self) -> char {
        match self {
            Glyph::Terrain(CellClass::NotWalkable) => NOT_WALKABLE_CHAR,
            Glyph::Terrain(CellClass::Corridor) => CORRIDOR_CHAR,
            Glyph::Terrain(CellClass::Room(_)) => FLOOR_CHAR,
            Glyph::Stairs => STAIRS_CHAR,
            Glyph::Amulet => AMULET_CHAR,
            Glyph::Enemy { .. } => ENEMY_CHAR,
            Glyph::Player => PLAYER_CHAR,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DirtyCell {
    pub point: Point,
    pub glyph: Glyph,
}

/// Read-only snapshot handed to a renderer after a tick.
///
/// `cells` is ordered so painting front to back leaves the correct glyph on
/// every cell: the vacated player cell first, then fixed markers, enemies,
/// and the player last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub full_redraw: bool,
    pub cells: Vec<DirtyCell>,
    pub top_status: String,
    pub bottom_status: String,
    pub messages: Vec<String>,
}

impl Frame {
    pub fn capture(session: &mut Session) -> Self {
        let full_redraw = session.take_full_redraw();
        let messages = session.drain_messages();
        let session = &*session;
        let player = session.player_position();
        let mut cells = Vec::new();

        if in_bounds(player.previous) {
            cells.push(DirtyCell {
                point: player.previous,
                glyph: base_glyph(session, player.previous),
            });
        }
        cells.push(DirtyCell {
            point: session.stairs().point,
            glyph: Glyph::Stairs,
        });
        if let Some(amulet) = session.amulet() {
            cells.push(DirtyCell {
                point: amulet.point,
                glyph: Glyph::Amulet,
            });
        }
        for point in session.ecs().monster_points() {
            cells.push(DirtyCell {
                point,
                glyph: Glyph::Enemy {
                    alerted: session.map().same_room(point, player.point),
                },
            });
        }
        cells.push(DirtyCell {
            point: player.point,
            glyph: Glyph::Player,
        });

        Self {
            full_redraw,
            cells,
            top_status: session.top_status().to_string(),
            bottom_status: session.bottom_status().to_string(),
            messages,
        }
    }

    pub fn glyph_at(&self, point: Point) -> Option<Glyph> {
        self.cells
            .iter()
            .rev()
            .find(|cell| cell.point == point)
            .map(|cell| cell.glyph)
    }
}

/// What a cell shows with no live entity on it.
pub fn base_glyph(session: &Session, point: Point) -> Glyph {
    if session.stairs().point == point {
        Glyph::Stairs
    } else if session.amulet().is_some_and(|amulet| amulet.point == point) {
        Glyph::Amulet
    } else {
        Glyph::Terrain(session.map().class_at(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{command::Command, config::Config, fsm::FlowState};

    fn started() -> Session {
        let mut session = Session::new(Config::default());
        assert_eq!(session.advance_until_input(), FlowState::OnFloor);
        session
    }

    #[test]
    fn first_frame_requests_full_redraw_once() {
        let mut session = started();
        let frame = Frame::capture(&mut session);
        assert!(frame.full_redraw);
        assert!(!Frame::capture(&mut session).full_redraw);
        assert_eq!(frame.glyph_at(Point::new(5, 5)), Some(Glyph::Player));
        assert_eq!(frame.glyph_at(Point::new(70, 18)), Some(Glyph::Stairs));
        assert_eq!(frame.bottom_status, "Find the amulet!");
        assert!(frame.top_status.starts_with("Floor 1"));
    }

    #[test]
    fn move_marks_old_and_new_cells() {
        let mut session = started();
        let _ = Frame::capture(&mut session);
        session.play(Command::Right);
        let frame = Frame::capture(&mut session);
        assert!(!frame.full_redraw);
        assert_eq!(frame.cells.first().map(|c| c.point), Some(Point::new(5, 5)));
        assert_eq!(
            frame.glyph_at(Point::new(5, 5)),
            Some(Glyph::Terrain(CellClass::Room(0)))
        );
        assert_eq!(frame.glyph_at(Point::new(6, 5)), Some(Glyph::Player));
        assert_eq!(Glyph::Terrain(CellClass::Room(0)).symbol(), '.');
    }

    #[test]
    fn enemies_outside_the_room_are_not_alerted() {
        let mut session = started();
        let frame = Frame::capture(&mut session);
        assert_eq!(
            frame.glyph_at(Point::new(40, 9)),
            Some(Glyph::Enemy { alerted: false })
        );
    }

    #[test]
    fn symbols_match_the_display_alphabet() {
        assert_eq!(Glyph::Terrain(CellClass::NotWalkable).symbol(), '-');
        assert_eq!(Glyph::Terrain(CellClass::Corridor).symbol(), '/');
        assert_eq!(Glyph::Stairs.symbol(), '%');
        assert_eq!(Glyph::Amulet.symbol(), '*');
        assert_eq!(Glyph::Enemy { alerted: true }.symbol(), 'x');
        assert_eq!(Glyph::Player.symbol(), 'P');
    }
}

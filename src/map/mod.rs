use bracket_geometry::prelude::Point;

pub const WIDTH: i32 = 80;
pub const HEIGHT: i32 = 24;
pub const MAP_SIZE: usize = (WIDTH * HEIGHT) as usize;

pub const NOT_WALKABLE_CHAR: char = '-';
pub const CORRIDOR_CHAR: char = '/';
pub const ROOM_CHAR: char = '0';

/// Walkability class of a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellClass {
    #[default]
    NotWalkable,
    Corridor,
    /// Room cell; the id is the template digit.
    Room(u8),
}

impl CellClass {
    /// Template character lookup. Anything outside the known symbols is solid rock.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            NOT_WALKABLE_CHAR => CellClass::NotWalkable,
            CORRIDOR_CHAR => CellClass::Corridor,
            c if c.is_ascii_digit() => CellClass::Room(c as u8 - ROOM_CHAR as u8),
            _ => CellClass::NotWalkable,
        }
    }

    pub fn is_walkable(self) -> bool {
        self != CellClass::NotWalkable
    }

    pub fn room_id(self) -> Option<u8> {
        match self {
            CellClass::Room(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    cells: Vec<CellClass>,
}

impl Default for Map {
    fn default() -> Self {
        Self::blank()
    }
}

impl Map {
    /// A fully populated map with nothing walkable.
    pub fn blank() -> Self {
        Self {
            cells: vec![CellClass::NotWalkable; MAP_SIZE],
        }
    }

    /// Classifies a compiled-in floor template.
    ///
    /// Panics if the template is not exactly `WIDTH * HEIGHT` characters; the
    /// templates ship with the binary, so a bad one is an authoring defect.
    pub fn load(template: &str) -> Self {
        let cells: Vec<CellClass> = template.chars().map(CellClass::from_symbol).collect();
        assert_eq!(
            cells.len(),
            MAP_SIZE,
            "floor template must hold exactly {WIDTH}x{HEIGHT} cells"
        );
        Self { cells }
    }

    fn idx(point: Point) -> Option<usize> {
        if in_bounds(point) {
            Some((point.y * WIDTH + point.x) as usize)
        } else {
            None
        }
    }

    /// Class of an in-bounds cell. Out-of-bounds points read as `NotWalkable`.
    pub fn class_at(&self, point: Point) -> CellClass {
        Self::idx(point)
            .map(|idx| self.cells[idx])
            .unwrap_or(CellClass::NotWalkable)
    }

    pub fn is_walkable(&self, point: Point) -> bool {
        self.class_at(point).is_walkable()
    }

    pub fn same_room(&self, a: Point, b: Point) -> bool {
        match (self.class_at(a).room_id(), self.class_at(b).room_id()) {
            (Some(first), Some(second)) => first == second,
            _ => false,
        }
    }

    pub fn cells(&self) -> &[CellClass] {
        &self.cells
    }
}

/// Half-open bounds check against `[0, WIDTH) x [0, HEIGHT)`.
pub fn in_bounds(point: Point) -> bool {
    point.x >= 0 && point.x < WIDTH && point.y >= 0 && point.y < HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walkable_count(map: &Map) -> usize {
        map.cells().iter().filter(|cell| cell.is_walkable()).count()
    }

    fn template_with(row: usize, line: &str) -> String {
        let mut rows = vec!["-".repeat(WIDTH as usize); HEIGHT as usize];
        rows[row] = format!("{line:-<80}");
        rows.concat()
    }

    #[test]
    fn classifies_template_symbols() {
        assert_eq!(CellClass::from_symbol('-'), CellClass::NotWalkable);
        assert_eq!(CellClass::from_symbol('/'), CellClass::Corridor);
        assert_eq!(CellClass::from_symbol('0'), CellClass::Room(0));
        assert_eq!(CellClass::from_symbol('7'), CellClass::Room(7));
        assert_eq!(CellClass::from_symbol('?'), CellClass::NotWalkable);
        assert!(!CellClass::NotWalkable.is_walkable());
        assert!(CellClass::Corridor.is_walkable());
        assert!(CellClass::Room(3).is_walkable());
    }

    #[test]
    fn load_indexes_row_major() {
        let map = Map::load(&template_with(2, "---00/11"));
        assert_eq!(map.class_at(Point::new(3, 2)), CellClass::Room(0));
        assert_eq!(map.class_at(Point::new(5, 2)), CellClass::Corridor);
        assert_eq!(map.class_at(Point::new(6, 2)), CellClass::Room(1));
        assert_eq!(map.class_at(Point::new(3, 3)), CellClass::NotWalkable);
        assert_eq!(walkable_count(&map), 5);
    }

    #[test]
    fn out_of_bounds_is_never_walkable() {
        let map = Map::load(&"0".repeat(MAP_SIZE));
        assert!(map.is_walkable(Point::new(0, 0)));
        assert!(map.is_walkable(Point::new(WIDTH - 1, HEIGHT - 1)));
        assert!(!map.is_walkable(Point::new(-1, 0)));
        assert!(!map.is_walkable(Point::new(WIDTH, 0)));
        assert!(!map.is_walkable(Point::new(0, HEIGHT)));
    }

    #[test]
    fn same_room_requires_matching_room_ids() {
        let map = Map::load(&template_with(0, "00/11"));
        assert!(map.same_room(Point::new(0, 0), Point::new(1, 0)));
        assert!(!map.same_room(Point::new(1, 0), Point::new(3, 0)));
        assert!(!map.same_room(Point::new(2, 0), Point::new(2, 0)));
        assert!(!map.same_room(Point::new(0, 0), Point::new(0, 1)));
    }

    #[test]
    #[should_panic(expected = "floor template")]
    fn short_template_is_rejected() {
        let _ = Map::load("----");
    }

    #[test]
    fn blank_map_is_fully_populated() {
        let map = Map::blank();
        assert_eq!(map.cells().len(), MAP_SIZE);
        assert_eq!(walkable_count(&map), 0);
    }
}

/// One player turn's worth of input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Descend,
    Ascend,
    Quit,
    /// Unrecognised input: a move attempt that goes nowhere.
    Wait,
}

impl Command {
    /// Case-sensitive mapping of the input alphabet.
    pub fn from_char(c: char) -> Self {
        match c {
            'w' => Command::Up,
            'a' => Command::Left,
            's' => Command::Down,
            'd' => Command::Right,
            'v' => Command::Descend,
            'c' => Command::Ascend,
            'q' => Command::Quit,
            _ => Command::Wait,
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Command::Up => (0, -1),
            Command::Down => (0, 1),
            Command::Left => (-1, 0),
            Command::Right => (1, 0),
            _ => (0, 0),
        }
    }

    /// Floor-index change requested by a stairs command.
    pub fn floor_delta(self) -> i32 {
        match self {
            Command::Descend => 1,
            Command::Ascend => -1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_case_sensitive() {
        assert_eq!(Command::from_char('w'), Command::Up);
        assert_eq!(Command::from_char('W'), Command::Wait);
        assert_eq!(Command::from_char('v'), Command::Descend);
        assert_eq!(Command::from_char('c'), Command::Ascend);
        assert_eq!(Command::from_char('q'), Command::Quit);
        assert_eq!(Command::from_char('X'), Command::Wait);
    }

    #[test]
    fn stairs_commands_do_not_move() {
        assert_eq!(Command::Descend.delta(), (0, 0));
        assert_eq!(Command::Ascend.delta(), (0, 0));
        assert_eq!(Command::Descend.floor_delta(), 1);
        assert_eq!(Command::Ascend.floor_delta(), -1);
        assert_eq!(Command::Left.floor_delta(), 0);
    }
}

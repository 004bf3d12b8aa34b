//! Cell states of a maze grid
//!
//! A cell moves `Open -> Visited` and may later become `DeadEnd`. The search
//! never writes `Wall` and never turns a marked cell back into `Open`.

/// State of a single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Traversable and not yet explored
    #[default]
    Open,
    /// Never traversable
    Wall,
    /// Explored and part of the current path
    Visited,
    /// Explored and proven not to lead to the target
    DeadEnd,
}

impl Cell {
    /// Numeric code used by the classic exercise (0 open, 1 wall, 2 visited, 3 dead end)
    pub const fn code(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Wall => 1,
            Self::Visited => 2,
            Self::DeadEnd => 3,
        }
    }

    /// Inverse of [`Cell::code`]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Open),
            1 => Some(Self::Wall),
            2 => Some(Self::Visited),
            3 => Some(Self::DeadEnd),
            _ => None,
        }
    }

    /// Single-character symbol for compact rendering
    pub const fn symbol(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
            Self::Visited => '*',
            Self::DeadEnd => 'x',
        }
    }

    /// Parse either a digit code or a symbol
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' | '.' => Some(Self::Open),
            '1' | '#' => Some(Self::Wall),
            '2' | '*' => Some(Self::Visited),
            '3' | 'x' => Some(Self::DeadEnd),
            _ => None,
        }
    }

    /// Whether the search may step into this cell
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether the search has touched this cell
    pub const fn is_explored(self) -> bool {
        matches!(self, Self::Visited | Self::DeadEnd)
    }
}

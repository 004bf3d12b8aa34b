//! Movement directions and the order in which the solver tries them

use std::fmt;
use std::str::FromStr;

use crate::io::error::{ClassicsError, invalid_parameter};
use crate::maze::Position;

/// One of the four axis-aligned moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Row - 1
    Up,
    /// Row + 1
    Down,
    /// Column - 1
    Left,
    /// Column + 1
    Right,
}

impl Direction {
    /// All directions in declaration order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Neighbouring position, or `None` when the move leaves the index space
    pub const fn step(self, position: Position) -> Option<Position> {
        let [row, col] = position;
        match self {
            Self::Up => match row.checked_sub(1) {
                Some(r) => Some([r, col]),
                None => None,
            },
            Self::Down => match row.checked_add(1) {
                Some(r) => Some([r, col]),
                None => None,
            },
            Self::Left => match col.checked_sub(1) {
                Some(c) => Some([row, c]),
                None => None,
            },
            Self::Right => match col.checked_add(1) {
                Some(c) => Some([row, c]),
                None => None,
            },
        }
    }

    /// Lowercase name as accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ClassicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Self::Up),
            "down" | "d" => Ok(Self::Down),
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            _ => Err(invalid_parameter(
                "direction",
                &s,
                &"expected one of up, down, left, right",
            )),
        }
    }
}

/// A permutation of the four directions
///
/// The solver tries neighbours in exactly this order and keeps the first one
/// that leads to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionOrder([Direction; 4]);

impl DirectionOrder {
    /// Down, right, up, left
    pub const DOWN_RIGHT_UP_LEFT: Self = Self([
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
    ]);

    /// Up, right, down, left
    pub const UP_RIGHT_DOWN_LEFT: Self = Self([
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ]);

    /// Build an order, rejecting anything that is not a permutation
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any direction appears more than once
    pub fn new(order: [Direction; 4]) -> crate::Result<Self> {
        for (i, direction) in order.iter().enumerate() {
            if order.iter().skip(i + 1).any(|other| other == direction) {
                return Err(invalid_parameter(
                    "direction_order",
                    &Self(order),
                    &format!("'{direction}' appears more than once"),
                ));
            }
        }
        Ok(Self(order))
    }

    /// Directions in trial order
    pub const fn directions(&self) -> &[Direction; 4] {
        &self.0
    }
}

impl Default for DirectionOrder {
    fn default() -> Self {
        Self::DOWN_RIGHT_UP_LEFT
    }
}

impl fmt::Display for DirectionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a},{b},{c},{d}")
    }
}

impl FromStr for DirectionOrder {
    type Err = ClassicsError;

    /// Accepts `down,right,up,left` or the compact `DRUL`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: Vec<Direction> = if s.contains(',') {
            s.split(',').map(str::parse).collect::<Result<_, _>>()?
        } else {
            s.trim()
                .chars()
                .map(|c| c.to_string().parse())
                .collect::<Result<_, _>>()?
        };

        let order: [Direction; 4] = parsed.try_into().map_err(|rest: Vec<Direction>| {
            invalid_parameter(
                "direction_order",
                &s,
                &format!("expected 4 directions, got {}", rest.len()),
            )
        })?;

        Self::new(order)
    }
}

use std::fmt;
use std::str::FromStr;

use crate::error::DirectionParseError;

/// Canonical movement directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit movement vector `(dx, dy)`; y grows downwards.
    #[must_use]
    pub fn unit_vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Lower-case symbolic name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
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
    type Err = DirectionParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(DirectionParseError(other.to_owned())),
        }
    }
}

/// Returns whether turning from `current` to `next` is legal.
///
/// Only an exact reversal (vectors summing to zero) is rejected; keeping the
/// same heading or turning perpendicular is always allowed.
#[must_use]
pub fn can_turn(current: Direction, next: Direction) -> bool {
    let (cx, cy) = current.unit_vector();
    let (nx, ny) = next.unit_vector();
    !(cx + nx == 0 && cy + ny == 0)
}

/// Same as [`can_turn`] for a raw direction name. Unknown names are never legal.
#[must_use]
pub fn can_turn_named(current: Direction, next: &str) -> bool {
    next.parse::<Direction>()
        .is_ok_and(|direction| can_turn(current, direction))
}

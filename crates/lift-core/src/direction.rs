//! Travel direction, hall-button direction and door state.
//!
//! `Direction` is a pure tagged enum.  The only place it is turned into a
//! number is [`Direction::step`], the explicit floor-delta table used when an
//! elevator moves.

use std::fmt;
use std::str::FromStr;

use crate::LiftError;

// ── Direction ─────────────────────────────────────────────────────────────────

/// The direction an elevator is travelling in, or is commanded to travel in.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    /// Floor delta for one tick of movement in this direction.
    #[inline]
    pub fn step(self) -> i32 {
        match self {
            Direction::Up   => 1,
            Direction::Down => -1,
            Direction::Idle => 0,
        }
    }

    /// The reverse travel direction.  `Idle` has no reverse.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
        }
    }

    #[inline]
    pub fn is_idle(self) -> bool {
        matches!(self, Direction::Idle)
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
            Direction::Idle => "idle",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── HallDirection ─────────────────────────────────────────────────────────────

/// Which of the two hall buttons on a landing was pressed.
///
/// `Up` sorts before `Down` so hall calls order as `(floor, Up) < (floor, Down)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HallDirection {
    Up,
    Down,
}

impl HallDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            HallDirection::Up   => "up",
            HallDirection::Down => "down",
        }
    }
}

impl From<HallDirection> for Direction {
    #[inline]
    fn from(d: HallDirection) -> Direction {
        match d {
            HallDirection::Up   => Direction::Up,
            HallDirection::Down => Direction::Down,
        }
    }
}

impl PartialEq<Direction> for HallDirection {
    #[inline]
    fn eq(&self, other: &Direction) -> bool {
        Direction::from(*self) == *other
    }
}

impl FromStr for HallDirection {
    type Err = LiftError;

    /// Accepts `up`/`u` and `down`/`d`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u"   => Ok(HallDirection::Up),
            "down" | "d" => Ok(HallDirection::Down),
            other => Err(LiftError::Parse(format!(
                "invalid hall direction {other:?}: expected \"up\" or \"down\""
            ))),
        }
    }
}

impl fmt::Display for HallDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DoorState ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorState {
    #[default]
    Closed,
    Open,
}

impl DoorState {
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, DoorState::Open)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DoorState::Closed => "closed",
            DoorState::Open   => "open",
        }
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

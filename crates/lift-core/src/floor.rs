//! Floors and the served floor range.

use std::fmt;

use crate::{Direction, LiftError, LiftResult, MAX_FLOOR, MIN_FLOOR};

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A building floor number.
///
/// Signed so that buildings with basements (`min_floor < 0`) need no special
/// casing.  A `Floor` on its own is unbounded; [`FloorRange`] decides which
/// floors a particular building actually serves.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Floor(pub i32);

impl Floor {
    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The floor one step away in `direction` (`Idle` returns `self`).
    ///
    /// Does not check bounds; callers gate this on [`FloorRange`].
    #[inline]
    pub fn step(self, direction: Direction) -> Floor {
        Floor(self.0 + direction.step())
    }

    /// `true` if `self` lies strictly beyond `from` when travelling in
    /// `direction`.  Always `false` for `Idle`.
    #[inline]
    pub fn is_ahead_of(self, from: Floor, direction: Direction) -> bool {
        match direction {
            Direction::Up   => self > from,
            Direction::Down => self < from,
            Direction::Idle => false,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Floor {
    #[inline]
    fn from(n: i32) -> Floor {
        Floor(n)
    }
}

// ── FloorRange ────────────────────────────────────────────────────────────────

/// Inclusive `[min, max]` range of floors an elevator bank serves.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorRange {
    pub min: Floor,
    pub max: Floor,
}

impl FloorRange {
    /// Build a range, rejecting `min > max`.
    pub fn new(min: Floor, max: Floor) -> LiftResult<Self> {
        if min > max {
            return Err(LiftError::Config(format!(
                "floor range is empty: min {min} > max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.min <= floor && floor <= self.max
    }

    /// Return `floor` unchanged if it is served, else `FloorOutOfRange`.
    pub fn check(&self, floor: Floor) -> LiftResult<Floor> {
        if self.contains(floor) {
            Ok(floor)
        } else {
            Err(LiftError::FloorOutOfRange { floor, min: self.min, max: self.max })
        }
    }

    /// Number of served floors.
    #[inline]
    pub fn len(&self) -> u32 {
        self.min.distance(self.max) + 1
    }

    /// Never true for a range built through [`FloorRange::new`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for FloorRange {
    /// Floors 1 through 20.
    fn default() -> Self {
        Self { min: Floor(MIN_FLOOR), max: Floor(MAX_FLOOR) }
    }
}

impl fmt::Display for FloorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

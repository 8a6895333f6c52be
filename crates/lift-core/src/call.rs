//! Hall calls: the (floor, direction) pairs posted by landing buttons.

use std::fmt;

use crate::{Floor, HallDirection};

/// A pressed hall button.
///
/// Field order matters: the derived `Ord` sorts by floor, then direction, which
/// is the processing order the call assigner relies on for determinism.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HallCall {
    pub floor:     Floor,
    pub direction: HallDirection,
}

impl HallCall {
    #[inline]
    pub fn new(floor: impl Into<Floor>, direction: HallDirection) -> Self {
        Self { floor: floor.into(), direction }
    }

    /// Up button pressed at `floor`.
    #[inline]
    pub fn up(floor: impl Into<Floor>) -> Self {
        Self::new(floor, HallDirection::Up)
    }

    /// Down button pressed at `floor`.
    #[inline]
    pub fn down(floor: impl Into<Floor>) -> Self {
        Self::new(floor, HallDirection::Down)
    }
}

impl fmt::Display for HallCall {
    /// Compact landing notation: `5U`, `11D`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.direction {
            HallDirection::Up   => 'U',
            HallDirection::Down => 'D',
        };
        write!(f, "{}{}", self.floor, arrow)
    }
}

//! Strongly typed elevator identifier.
//!
//! Elevators are numbered densely from zero in the order they were built, so
//! the inner integer doubles as the index into every per-elevator `Vec`
//! (elevator list, assignment table, tick report).  Prefer `.index()` over
//! `id.0 as usize` for clarity.

use std::fmt;

/// Index of an elevator in the simulation's elevator bank.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ElevatorId(pub u32);

impl ElevatorId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl From<ElevatorId> for usize {
    #[inline(always)]
    fn from(id: ElevatorId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for ElevatorId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<ElevatorId, Self::Error> {
        u32::try_from(n).map(ElevatorId)
    }
}

//! Immutable point-in-time view of one elevator.

use std::collections::BTreeSet;

use crate::{Direction, DoorState, ElevatorId, Floor};

/// What the dispatcher is allowed to know about an elevator.
///
/// A snapshot owns a copy of the cab-target set, so planners can hold it for
/// the whole decision phase while the live elevator is later mutated by its
/// tick.  Nothing in the simulator mutates a snapshot after it is taken.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorSnapshot {
    pub id:          ElevatorId,
    pub floor:       Floor,
    pub direction:   Direction,
    pub door:        DoorState,
    /// Floors requested from inside the cab, ascending.
    pub cab_targets: BTreeSet<Floor>,
}

impl ElevatorSnapshot {
    /// A stationary, door-closed elevator with no cab targets.
    pub fn idle_at(id: ElevatorId, floor: Floor) -> Self {
        Self {
            id,
            floor,
            direction:   Direction::Idle,
            door:        DoorState::Closed,
            cab_targets: BTreeSet::new(),
        }
    }

    /// Builder-style override of the travel direction.
    pub fn moving(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Builder-style addition of cab targets.
    pub fn with_cab_targets<I>(mut self, floors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Floor>,
    {
        self.cab_targets.extend(floors.into_iter().map(Into::into));
        self
    }
}

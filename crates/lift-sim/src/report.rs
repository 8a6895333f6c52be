//! Per-tick results handed to display layers and observers.

use lift_core::{Direction, ElevatorSnapshot, Floor, HallCall, Tick};

/// What happened to one elevator during one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElevatorTickReport {
    /// Floor the car was on when the tick started.
    pub from_floor:          Floor,
    /// State after the tick.
    pub snapshot:            ElevatorSnapshot,
    /// Direction the planner commanded this tick.
    pub commanded:           Direction,
    /// Hall calls this car was responsible for when the tick was planned.
    pub assigned:            Vec<HallCall>,
    /// Hall calls cleared at this car's floor.
    pub serviced_hall_calls: Vec<HallCall>,
    /// Cab target cleared at this car's floor.
    pub serviced_cab_floor:  Option<Floor>,
}

impl ElevatorTickReport {
    /// `true` if the car changed floor this tick.
    #[inline]
    pub fn moved(&self) -> bool {
        self.from_floor != self.snapshot.floor
    }

    /// `true` if the car stopped and opened its door this tick.
    #[inline]
    pub fn arrived(&self) -> bool {
        self.serviced_cab_floor.is_some() || !self.serviced_hall_calls.is_empty()
    }
}

/// Result of one full assign → plan → move cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// The tick that was executed.
    pub tick:          Tick,
    /// One entry per elevator, ascending by id.
    pub elevators:     Vec<ElevatorTickReport>,
    /// Hall calls still pending after the tick.
    pub pending_after: usize,
}

impl TickReport {
    /// Every hall call serviced this tick, in elevator order.
    pub fn serviced_hall_calls(&self) -> impl Iterator<Item = HallCall> + '_ {
        self.elevators
            .iter()
            .flat_map(|e| e.serviced_hall_calls.iter().copied())
    }

    /// Number of cab targets cleared this tick.
    pub fn serviced_cab_requests(&self) -> usize {
        self.elevators
            .iter()
            .filter(|e| e.serviced_cab_floor.is_some())
            .count()
    }
}

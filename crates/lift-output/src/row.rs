//! Plain data row types written by output backends.

use lift_core::{Direction, DoorState, ElevatorSnapshot, Floor, Tick};
use lift_sim::TickReport;

/// One elevator's observable state at a given tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSnapshotRow {
    pub elevator_id: u32,
    pub tick:        u64,
    pub floor:       i32,
    pub direction:   Direction,
    pub door:        DoorState,
    /// Lit cab buttons, ascending.
    pub cab_targets: Vec<Floor>,
}

impl ElevatorSnapshotRow {
    pub fn from_snapshot(tick: Tick, snapshot: &ElevatorSnapshot) -> Self {
        Self {
            elevator_id: snapshot.id.0,
            tick:        tick.0,
            floor:       snapshot.floor.0,
            direction:   snapshot.direction,
            door:        snapshot.door,
            cab_targets: snapshot.cab_targets.iter().copied().collect(),
        }
    }

    /// Cab targets joined with `;`, e.g. `"6;10"`.  Empty when none are lit.
    pub fn cab_targets_field(&self) -> String {
        self.cab_targets
            .iter()
            .map(Floor::to_string)
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:                  u64,
    pub pending_calls:         u64,
    pub serviced_hall_calls:   u64,
    pub serviced_cab_requests: u64,
    pub moving_elevators:      u64,
}

impl From<&TickReport> for TickSummaryRow {
    fn from(report: &TickReport) -> Self {
        Self {
            tick:                  report.tick.0,
            pending_calls:         report.pending_after as u64,
            serviced_hall_calls:   report.serviced_hall_calls().count() as u64,
            serviced_cab_requests: report.serviced_cab_requests() as u64,
            moving_elevators:      report.elevators.iter().filter(|e| e.moved()).count() as u64,
        }
    }
}

//! The `DirectionPlanner` trait and the LOOK policy.

use std::collections::BTreeSet;

use lift_core::{Direction, ElevatorSnapshot, Floor, HallCall};

/// Decides an elevator's next commanded direction.
///
/// Implementations see only an immutable snapshot and the calls assigned to
/// that elevator this cycle.  The driver may call `next_direction` for many
/// elevators in parallel (the `parallel` feature of lift-sim), so planners must
/// be `Send + Sync` and keep no per-elevator state of their own.
pub trait DirectionPlanner: Send + Sync + 'static {
    fn next_direction(
        &self,
        snapshot: &ElevatorSnapshot,
        assigned: &BTreeSet<HallCall>,
    ) -> Direction;
}

/// LOOK/SCAN policy: keep going while there is demand ahead, reverse directly
/// when there is only demand behind, idle when there is none.
///
/// An idle elevator heads for the nearest target; on equal distance the lower
/// floor wins.
#[derive(Copy, Clone, Debug, Default)]
pub struct LookPlanner;

impl DirectionPlanner for LookPlanner {
    fn next_direction(
        &self,
        snapshot: &ElevatorSnapshot,
        assigned: &BTreeSet<HallCall>,
    ) -> Direction {
        let targets = target_floors(snapshot, assigned);
        if targets.is_empty() {
            return Direction::Idle;
        }

        let here = snapshot.floor;
        match snapshot.direction {
            Direction::Idle => {
                let nearest = targets
                    .iter()
                    .copied()
                    .min_by_key(|floor| floor.distance(here))
                    .unwrap_or(here);
                if nearest < here { Direction::Down } else { Direction::Up }
            }
            heading => {
                let demand_in = |d: Direction| targets.iter().any(|f| f.is_ahead_of(here, d));
                if demand_in(heading) {
                    heading
                } else if demand_in(heading.opposite()) {
                    heading.opposite()
                } else {
                    Direction::Idle
                }
            }
        }
    }
}

/// Every floor the elevator owes a stop: assigned hall calls and cab targets.
fn target_floors(snapshot: &ElevatorSnapshot, assigned: &BTreeSet<HallCall>) -> BTreeSet<Floor> {
    assigned
        .iter()
        .map(|call| call.floor)
        .chain(snapshot.cab_targets.iter().copied())
        .collect()
}

//! Effort metric: how costly it is for one elevator to answer one hall call.
//!
//! | Situation                                         | Effort                                  |
//! |---------------------------------------------------|-----------------------------------------|
//! | At the call's floor, travelling the call's way    | `0`                                     |
//! | Travelling towards the call's floor               | `|floor − call|`                        |
//! | Idle                                              | `|floor − call| + 1` (startup latency)  |
//! | Anything else (moving away, or passing opposite)  | `|floor − far| + |call − far| + 1`      |
//!
//! where `far` is the elevator's [`furthest_target`] in its travel direction:
//! it has to finish the current sweep, turn around and come back.

use std::collections::BTreeSet;

use lift_core::{Direction, ElevatorSnapshot, Floor, HallCall};

use crate::AssignmentTable;

/// Extreme pending floor ahead of the elevator in its travel direction.
///
/// Considers the assigned hall calls that lie strictly ahead and every cab
/// target; the highest wins when travelling `Up`, the lowest when `Down`.
/// Returns the current floor when nothing lies ahead.
///
/// # Panics
///
/// Panics if the snapshot is `Idle`.  An idle elevator has no sweep to finish,
/// so reaching this with one means the effort estimator and the elevator state
/// disagree.
pub fn furthest_target(snapshot: &ElevatorSnapshot, assigned: &BTreeSet<HallCall>) -> Floor {
    let here = snapshot.floor;
    let direction = snapshot.direction;

    let candidates = assigned
        .iter()
        .map(|call| call.floor)
        .filter(|floor| floor.is_ahead_of(here, direction))
        .chain(snapshot.cab_targets.iter().copied());

    match direction {
        Direction::Up   => candidates.fold(here, Ord::max),
        Direction::Down => candidates.fold(here, Ord::min),
        Direction::Idle => panic!(
            "furthest_target requested for idle elevator {} at floor {here}",
            snapshot.id
        ),
    }
}

/// Cost for the elevator in `snapshot` to service `call`, given the calls it
/// has provisionally been assigned so far.
pub fn effort(snapshot: &ElevatorSnapshot, call: HallCall, assigned: &BTreeSet<HallCall>) -> u32 {
    let here = snapshot.floor;
    let there = call.floor;

    match snapshot.direction {
        d if here == there && call.direction == d => 0,
        Direction::Up if here < there   => here.distance(there),
        Direction::Down if here > there => here.distance(there),
        Direction::Idle => here.distance(there) + 1,
        _ => {
            let far = furthest_target(snapshot, assigned);
            here.distance(far) + there.distance(far) + 1
        }
    }
}

/// Index of the elevator that should take `call` against the partially built
/// `table`.
///
/// Lowest effort wins; equal effort prefers the elevator with fewer assigned
/// calls; a remaining tie goes to the lowest index.  Returns `None` only when
/// `snapshots` is empty.
pub fn best_elevator(
    snapshots: &[ElevatorSnapshot],
    call:      HallCall,
    table:     &AssignmentTable,
) -> Option<usize> {
    snapshots
        .iter()
        .enumerate()
        .map(|(i, snapshot)| (effort(snapshot, call, table.calls_for(i)), table.load(i), i))
        .min()
        .map(|(_, _, i)| i)
}

//! Greedy hall-call assignment with bounded rebalancing.
//!
//! # Algorithm
//!
//! ```text
//! for call in pending (ascending floor, then Up before Down):
//!   best = best_elevator(call, table)
//!   if table[best] is empty or depth == max_depth:
//!       table[best] += call
//!   else:
//!       evicted     = take(table[best]);  table[best] = {call}
//!       for prior in evicted (ascending):
//!           if best_elevator(prior, table) == best: table[best] += prior
//!           else:                                   displaced += prior
//!       process displaced at depth + 1
//! ```
//!
//! The "process displaced" step runs to completion before the outer loop
//! moves on, so the worklist is a stack of frames rather than a flat queue.
//! The depth ceiling stops two calls that keep preferring each other's
//! elevator from oscillating forever; the result is a stable (or forcibly
//! terminated) partition, not a global optimum.

use std::collections::VecDeque;

use lift_core::{ElevatorSnapshot, HallCall, MAX_REBALANCE_DEPTH};

use crate::{AssignmentTable, best_elevator};

/// One pending batch of calls and the rebalancing depth it runs at.
struct Frame {
    calls: VecDeque<HallCall>,
    depth: u32,
}

/// Partitions pending hall calls across elevators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallAssigner {
    max_depth: u32,
}

impl Default for CallAssigner {
    fn default() -> Self {
        Self::new(MAX_REBALANCE_DEPTH)
    }
}

impl CallAssigner {
    pub fn new(max_depth: u32) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Build a fresh table for `pending` against `snapshots`.
    pub fn assign<I>(&self, snapshots: &[ElevatorSnapshot], pending: I) -> AssignmentTable
    where
        I: IntoIterator<Item = HallCall>,
    {
        let mut table = AssignmentTable::new(snapshots.len());
        self.assign_into(snapshots, pending, &mut table);
        table
    }

    /// Extend `table` with `pending`.
    ///
    /// Calls are processed in ascending order regardless of the order the
    /// iterator yields them.  Calls already held by some elevator in `table`
    /// are left where they are.
    pub fn assign_into<I>(
        &self,
        snapshots: &[ElevatorSnapshot],
        pending:   I,
        table:     &mut AssignmentTable,
    ) where
        I: IntoIterator<Item = HallCall>,
    {
        let mut initial: Vec<HallCall> = pending
            .into_iter()
            .filter(|call| table.owner_of(call).is_none())
            .collect();
        initial.sort_unstable();
        initial.dedup();

        let mut stack = vec![Frame { calls: initial.into(), depth: 0 }];

        while let Some(frame) = stack.last_mut() {
            let Some(call) = frame.calls.pop_front() else {
                stack.pop();
                continue;
            };
            let depth = frame.depth;

            let Some(best) = best_elevator(snapshots, call, table) else {
                return;
            };

            if table.load(best) == 0 || depth >= self.max_depth {
                table.insert(best, call);
                continue;
            }

            // `best` already holds calls: give it the new one, then see which of
            // its previous calls it still wins.
            let evicted = table.evict(best);
            table.insert(best, call);

            let mut displaced = VecDeque::new();
            for prior in evicted {
                if best_elevator(snapshots, prior, table) == Some(best) {
                    table.insert(best, prior);
                } else {
                    displaced.push_back(prior);
                }
            }

            if !displaced.is_empty() {
                log::trace!(
                    "call {call} displaced {} call(s) from elevator {best} at depth {depth}",
                    displaced.len()
                );
                stack.push(Frame { calls: displaced, depth: depth + 1 });
            }
        }
    }
}

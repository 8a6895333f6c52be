//! The per-cycle assignment table.

use std::collections::BTreeSet;

use lift_core::HallCall;

static NO_CALLS: BTreeSet<HallCall> = BTreeSet::new();

/// Elevator index → hall calls that elevator handles this cycle.
///
/// Ephemeral: rebuilt from scratch every decision cycle and never persisted.
/// The pending-call registry stays the source of truth for which calls exist;
/// the table only answers who handles each one right now.  Sets are ordered so
/// iteration is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssignmentTable {
    per_elevator: Vec<BTreeSet<HallCall>>,
}

impl AssignmentTable {
    /// An empty table with one slot per elevator.
    pub fn new(elevator_count: usize) -> Self {
        Self { per_elevator: vec![BTreeSet::new(); elevator_count] }
    }

    /// Number of elevator slots.
    pub fn elevator_count(&self) -> usize {
        self.per_elevator.len()
    }

    /// Calls assigned to `index`.  Unknown indices have no calls.
    pub fn calls_for(&self, index: usize) -> &BTreeSet<HallCall> {
        self.per_elevator.get(index).unwrap_or(&NO_CALLS)
    }

    /// Number of calls assigned to `index`, the load-balancing tie-breaker.
    #[inline]
    pub fn load(&self, index: usize) -> usize {
        self.calls_for(index).len()
    }

    /// Assign `call` to `index`, growing the table if needed.
    ///
    /// Returns `false` if `index` already held the call.
    pub fn insert(&mut self, index: usize, call: HallCall) -> bool {
        if index >= self.per_elevator.len() {
            self.per_elevator.resize_with(index + 1, BTreeSet::new);
        }
        self.per_elevator[index].insert(call)
    }

    /// Remove and return every call assigned to `index`.
    pub fn evict(&mut self, index: usize) -> BTreeSet<HallCall> {
        self.per_elevator
            .get_mut(index)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    /// The elevator currently holding `call`, if any.
    pub fn owner_of(&self, call: &HallCall) -> Option<usize> {
        self.per_elevator.iter().position(|calls| calls.contains(call))
    }

    /// Total calls across all elevators.
    pub fn total_calls(&self) -> usize {
        self.per_elevator.iter().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.per_elevator.iter().all(BTreeSet::is_empty)
    }

    /// `(index, calls)` for every slot, ascending by index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeSet<HallCall>)> {
        self.per_elevator.iter().enumerate()
    }
}

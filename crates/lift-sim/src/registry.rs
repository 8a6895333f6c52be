//! The pending hall-call registry.

use std::collections::BTreeSet;

use lift_core::{Floor, HallCall};

/// Every hall call that has been posted and not yet serviced.
///
/// There is exactly one registry per simulation, owned by [`Sim`][crate::Sim]
/// and lent (`&mut`) to each elevator's tick in turn.  A `(floor, direction)`
/// pair is stored at most once; posting it again is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HallCallRegistry {
    calls: BTreeSet<HallCall>,
}

impl HallCallRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a button press.  Returns `false` if the call was already pending.
    pub fn insert(&mut self, call: HallCall) -> bool {
        self.calls.insert(call)
    }

    /// Clear a serviced call.  Returns `false` if it was not pending.
    pub fn remove(&mut self, call: &HallCall) -> bool {
        self.calls.remove(call)
    }

    pub fn contains(&self, call: &HallCall) -> bool {
        self.calls.contains(call)
    }

    /// Pending calls on `floor`, at most two, `Up` first.
    pub fn at_floor(&self, floor: Floor) -> impl Iterator<Item = HallCall> + '_ {
        self.calls
            .range(HallCall::up(floor)..=HallCall::down(floor))
            .copied()
    }

    /// All pending calls, ascending by floor then direction.
    pub fn iter(&self) -> impl Iterator<Item = HallCall> + '_ {
        self.calls.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

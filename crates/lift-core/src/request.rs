//! Operator requests fed into the simulation between ticks.

use std::fmt;

use crate::{ElevatorId, Floor, HallCall};

/// A button press arriving from outside the core.
///
/// Requests are produced by a scenario file, a random traffic generator or an
/// interactive front end, and posted to the simulation before a tick runs.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Request {
    /// A landing button.
    Hall(HallCall),
    /// A button inside `elevator`'s cab.
    Cab { elevator: ElevatorId, floor: Floor },
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Hall(call)               => write!(f, "hall {call}"),
            Request::Cab { elevator, floor }  => write!(f, "cab {elevator}:{floor}"),
        }
    }
}

//! Sources of button presses for [`Sim::run`][crate::Sim::run].

use lift_core::{Request, Tick};

/// Supplies the requests to post before each tick.
///
/// Implemented by scripted scenarios and random traffic generators
/// (lift-scenario); an interactive front end can implement it over its own
/// input queue.
pub trait RequestFeed {
    /// Requests to post at the start of `tick`, in posting order.
    fn requests_at(&mut self, tick: Tick) -> Vec<Request>;
}

/// A feed that never produces anything.
pub struct NoRequests;

impl RequestFeed for NoRequests {
    fn requests_at(&mut self, _tick: Tick) -> Vec<Request> {
        vec![]
    }
}

//! `ScenarioQueue` — timed requests waiting to be posted.
//!
//! Most ticks of a scripted run carry no presses at all, so the queue is keyed
//! by tick and each tick is drained exactly once: O(log T) per tick where T is
//! the number of distinct ticks still queued.

use std::collections::BTreeMap;

use lift_core::{Request, Tick};
use lift_sim::RequestFeed;

/// A priority queue mapping simulation ticks → requests to post at that tick.
#[derive(Clone, Debug, Default)]
pub struct ScenarioQueue {
    inner: BTreeMap<Tick, Vec<Request>>,
    /// Cached total request count for O(1) `len()`.
    total: usize,
}

impl ScenarioQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from `(tick, request)` pairs.  Requests sharing a tick
    /// keep their relative order.
    pub fn from_requests<I>(requests: I) -> Self
    where
        I: IntoIterator<Item = (Tick, Request)>,
    {
        let mut queue = Self::new();
        for (tick, request) in requests {
            queue.push(tick, request);
        }
        queue
    }

    /// Schedule `request` to be posted at the start of `tick`.
    pub fn push(&mut self, tick: Tick, request: Request) {
        self.inner.entry(tick).or_default().push(request);
        self.total += 1;
    }

    /// Remove and return all requests scheduled for exactly `tick`.
    ///
    /// Returns `None` if nothing is queued for that tick.
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<Request>> {
        let requests = self.inner.remove(&tick)?;
        self.total -= requests.len();
        Some(requests)
    }

    /// The earliest tick with at least one queued request.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// The latest tick with at least one queued request.
    pub fn last_tick(&self) -> Option<Tick> {
        self.inner.keys().next_back().copied()
    }

    /// Total number of queued requests across all ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct ticks that have at least one queued request.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}

impl RequestFeed for ScenarioQueue {
    fn requests_at(&mut self, tick: Tick) -> Vec<Request> {
        // Requests scheduled for a tick that already passed are posted late
        // rather than dropped.
        let stale: Vec<Tick> = self.inner.range(..tick).map(|(t, _)| *t).collect();
        let mut out = Vec::new();
        for t in stale {
            if let Some(mut late) = self.drain_tick(t) {
                log::debug!("posting {} requests scheduled for {t} late at {tick}", late.len());
                out.append(&mut late);
            }
        }
        if let Some(mut due) = self.drain_tick(tick) {
            out.append(&mut due);
        }
        out
    }
}

//! Feed combinators.
//!
//! A run often mixes a scripted scenario with background traffic.  Combine
//! feeds with `scripted.merge(traffic)`: both are asked for every tick and
//! their requests are posted first-feed-first.

use lift_core::{Request, Tick};
use lift_sim::RequestFeed;

/// Posts everything `first` yields for a tick, then everything `second` does.
pub struct MergedFeed<A: RequestFeed, B: RequestFeed> {
    first:  A,
    second: B,
}

impl<A: RequestFeed, B: RequestFeed> RequestFeed for MergedFeed<A, B> {
    fn requests_at(&mut self, tick: Tick) -> Vec<Request> {
        let mut out = self.first.requests_at(tick);
        out.extend(self.second.requests_at(tick));
        out
    }
}

/// Extension trait that adds `.merge(other)` to any `RequestFeed`.
pub trait RequestFeedExt: RequestFeed + Sized {
    fn merge<B: RequestFeed>(self, other: B) -> MergedFeed<Self, B> {
        MergedFeed { first: self, second: other }
    }
}

impl<F: RequestFeed + Sized> RequestFeedExt for F {}

//! `lift-scenario` — where button presses come from.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`queue`]   | `ScenarioQueue` (`BTreeMap<Tick, Vec<Request>>`)          |
//! | [`loader`]  | `load_scenario_csv`, `load_scenario_reader`               |
//! | [`traffic`] | `TrafficGenerator`, `TrafficRates`: seeded random presses |
//! | [`combine`] | `MergedFeed`, `RequestFeedExt::merge`                     |
//! | [`error`]   | `ScenarioError`, `ScenarioResult<T>`                      |
//!
//! Every source implements [`lift_sim::RequestFeed`], so any of them (or a
//! merge of several) can drive `Sim::run`.

pub mod combine;
pub mod error;
pub mod loader;
pub mod queue;
pub mod traffic;

#[cfg(test)]
mod tests;

pub use combine::{MergedFeed, RequestFeedExt};
pub use error::{ScenarioError, ScenarioResult};
pub use loader::{load_scenario_csv, load_scenario_reader};
pub use queue::ScenarioQueue;
pub use traffic::{TrafficGenerator, TrafficRates};

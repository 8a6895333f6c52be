//! Simulation observer trait for progress reporting and data collection.

use lift_core::{ElevatorSnapshot, Request, Tick};

use crate::{HallCallRegistry, SimError, TickReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: arrival printer
///
/// ```rust,ignore
/// struct ArrivalPrinter;
///
/// impl SimObserver for ArrivalPrinter {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         for call in report.serviced_hall_calls() {
///             println!("{}: served {call}", report.tick);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before requests are posted.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when a request from the feed was refused.  The simulation state
    /// is unchanged and the run continues.
    fn on_request_rejected(&mut self, _tick: Tick, _request: &Request, _error: &SimError) {}

    /// Called after every elevator has moved.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with the post-tick state of every car and the pending calls.
    fn on_snapshot(
        &mut self,
        _tick:      Tick,
        _elevators: &[ElevatorSnapshot],
        _pending:   &HallCallRegistry,
    ) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

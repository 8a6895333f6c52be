//! Simulation configuration and the default building constants.

use crate::{Floor, FloorRange, LiftError, LiftResult};

/// Lowest floor of the default building.
pub const MIN_FLOOR: i32 = 1;

/// Highest floor of the default building.
pub const MAX_FLOOR: i32 = 20;

/// Number of cars in the default elevator bank.
pub const DEFAULT_ELEVATOR_COUNT: usize = 3;

/// Rebalancing rounds the call assigner may run before it stops evicting.
pub const MAX_REBALANCE_DEPTH: u32 = 5;

/// Top-level simulation configuration.
///
/// Typically built in code or loaded from a JSON file by the application
/// crate (with the `serde` feature) and passed to `SimBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Floors served by every elevator.
    pub floors: FloorRange,

    /// Number of elevators in the bank.  Must be at least 1.
    pub elevator_count: usize,

    /// Ticks simulated by `Sim::run`.
    pub total_ticks: u64,

    /// Depth ceiling for the call assigner's eviction/rebalance rounds.
    pub max_rebalance_depth: u32,

    /// Seed for random traffic generation.  The same seed always produces
    /// identical runs.
    pub seed: u64,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// Reject configurations the simulator cannot run.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floors.is_empty() {
            return Err(LiftError::Config(format!(
                "floor range {} serves no floors",
                self.floors
            )));
        }
        if self.elevator_count == 0 {
            return Err(LiftError::Config("elevator_count must be at least 1".into()));
        }
        if u32::try_from(self.elevator_count).is_err() {
            return Err(LiftError::Config(format!(
                "elevator_count {} exceeds the id space",
                self.elevator_count
            )));
        }
        Ok(())
    }

    /// The floor every elevator starts on unless placed elsewhere.
    #[inline]
    pub fn home_floor(&self) -> Floor {
        self.floors.min
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            floors:                FloorRange::default(),
            elevator_count:        DEFAULT_ELEVATOR_COUNT,
            total_ticks:           100,
            max_rebalance_depth:   MAX_REBALANCE_DEPTH,
            seed:                  42,
            output_interval_ticks: 1,
        }
    }
}

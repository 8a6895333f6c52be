//! Fluent builder for constructing a [`Sim`].

use lift_core::{ElevatorId, Floor, HallCall, SimConfig};
use lift_dispatch::{CallAssigner, DirectionPlanner, LookPlanner};

use crate::{Elevator, HallCallRegistry, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: floors, elevator count, total ticks
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                              |
/// |--------------------------|--------------------------------------|
/// | `.planner(p)`            | [`LookPlanner`]                      |
/// | `.initial_floors(v)`     | Every car at `config.home_floor()`   |
/// | `.cab_request(id, f)`    | No cab targets                       |
/// | `.hall_call(c)`          | No pending hall calls                |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .initial_floors(vec![Floor(1), Floor(1), Floor(1)])
///     .cab_request(ElevatorId(1), Floor(6))
///     .hall_call(HallCall::up(3))
///     .build()?;
/// ```
pub struct SimBuilder<P: DirectionPlanner = LookPlanner> {
    config:       SimConfig,
    planner:      P,
    floors:       Option<Vec<Floor>>,
    cab_requests: Vec<(ElevatorId, Floor)>,
    hall_calls:   Vec<HallCall>,
}

impl SimBuilder<LookPlanner> {
    /// Create a builder using the LOOK planner.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            planner:      LookPlanner,
            floors:       None,
            cab_requests: Vec::new(),
            hall_calls:   Vec::new(),
        }
    }
}

impl<P: DirectionPlanner> SimBuilder<P> {
    /// Swap in a different direction planner.
    pub fn planner<Q: DirectionPlanner>(self, planner: Q) -> SimBuilder<Q> {
        SimBuilder {
            config:       self.config,
            planner,
            floors:       self.floors,
            cab_requests: self.cab_requests,
            hall_calls:   self.hall_calls,
        }
    }

    /// Supply the starting floor of each car (must be length `elevator_count`).
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.floors = Some(floors);
        self
    }

    /// Light a cab button before the first tick.
    pub fn cab_request(mut self, elevator: ElevatorId, floor: Floor) -> Self {
        self.cab_requests.push((elevator, floor));
        self
    }

    /// Post a hall call before the first tick.
    pub fn hall_call(mut self, call: HallCall) -> Self {
        self.hall_calls.push(call);
        self
    }

    /// Validate inputs, place the cars, post the initial requests and return
    /// a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;
        let count = self.config.elevator_count;

        let floors = match self.floors {
            Some(f) => {
                if f.len() != count {
                    return Err(SimError::CountMismatch {
                        expected: count,
                        got:      f.len(),
                        what:     "initial floors",
                    });
                }
                f
            }
            None => vec![self.config.home_floor(); count],
        };

        let elevators = floors
            .into_iter()
            .enumerate()
            .map(|(i, floor)| {
                let id = ElevatorId::try_from(i)
                    .map_err(|e| SimError::Config(format!("elevator index {i}: {e}")))?;
                Ok(Elevator::new(id, self.config.floors, floor)?)
            })
            .collect::<SimResult<Vec<_>>>()?;

        let mut sim = Sim::from_parts(
            self.config.clone(),
            elevators,
            HallCallRegistry::new(),
            CallAssigner::new(self.config.max_rebalance_depth),
            self.planner,
        );

        for (elevator, floor) in self.cab_requests {
            sim.post_internal_request(elevator, floor)?;
        }
        for call in self.hall_calls {
            sim.post_hall_call(call.floor, call.direction)?;
        }

        Ok(sim)
    }
}

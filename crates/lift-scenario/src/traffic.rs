//! Seeded random button presses.
//!
//! Each tick the generator flips one weighted coin for a hall press and one
//! for a cab press.  Hall presses pick a uniform floor and a direction that
//! exists there (the bottom landing only has `Up`, the top only `Down`); cab
//! presses pick a uniform elevator and floor.  Hall and cab presses draw from
//! separate child streams, so changing one rate does not reshuffle the other.

use lift_core::{
    ElevatorId, FloorRange, HallCall, HallDirection, Request, SimConfig, SimRng, Tick,
};
use lift_sim::RequestFeed;

/// Per-tick press probabilities.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrafficRates {
    /// Probability of one hall press per tick.
    pub hall: f64,
    /// Probability of one cab press per tick.
    pub cab:  f64,
}

impl Default for TrafficRates {
    fn default() -> Self {
        Self { hall: 0.2, cab: 0.1 }
    }
}

/// A [`RequestFeed`] producing random presses from a fixed seed.
pub struct TrafficGenerator {
    floors:         FloorRange,
    elevator_count: u32,
    rates:          TrafficRates,
    hall_rng:       SimRng,
    cab_rng:        SimRng,
}

impl TrafficGenerator {
    pub fn new(floors: FloorRange, elevator_count: u32, rates: TrafficRates, seed: u64) -> Self {
        let mut root = SimRng::new(seed);
        Self {
            floors,
            elevator_count,
            rates,
            hall_rng: root.child(0),
            cab_rng:  root.child(1),
        }
    }

    /// Generator over the building and bank described by `config`, seeded
    /// from `config.seed`.
    pub fn from_config(config: &SimConfig, rates: TrafficRates) -> Self {
        let count = u32::try_from(config.elevator_count).unwrap_or(u32::MAX);
        Self::new(config.floors, count, rates, config.seed)
    }

    fn hall_press(&mut self) -> HallCall {
        let floors = self.floors;
        let floor = self.hall_rng.gen_range(floors.min.0..=floors.max.0);
        let direction = if floor == floors.min.0 {
            HallDirection::Up
        } else if floor == floors.max.0 {
            HallDirection::Down
        } else if self.hall_rng.gen_bool(0.5) {
            HallDirection::Up
        } else {
            HallDirection::Down
        };
        HallCall::new(floor, direction)
    }

    fn cab_press(&mut self) -> Option<Request> {
        if self.elevator_count == 0 {
            return None;
        }
        let floors = self.floors;
        let elevator = ElevatorId(self.cab_rng.gen_range(0..self.elevator_count));
        let floor = self.cab_rng.gen_range(floors.min.0..=floors.max.0);
        Some(Request::Cab { elevator, floor: floor.into() })
    }
}

impl RequestFeed for TrafficGenerator {
    fn requests_at(&mut self, _tick: Tick) -> Vec<Request> {
        let mut out = Vec::new();
        if self.hall_rng.gen_bool(self.rates.hall) {
            out.push(Request::Hall(self.hall_press()));
        }
        if self.cab_rng.gen_bool(self.rates.cab) {
            out.extend(self.cab_press());
        }
        out
    }
}

//! `lift-core` — foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ElevatorId`                                          |
//! | [`floor`]       | `Floor`, `FloorRange`                                 |
//! | [`direction`]   | `Direction`, `HallDirection`, `DoorState`             |
//! | [`call`]        | `HallCall`                                            |
//! | [`snapshot`]    | `ElevatorSnapshot`                                    |
//! | [`request`]     | `Request` (hall press or cab press)                   |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `SimConfig` and the default building constants        |
//! | [`rng`]         | `SimRng` (seeded, for traffic generation)             |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod call;
pub mod config;
pub mod direction;
pub mod error;
pub mod floor;
pub mod ids;
pub mod request;
pub mod rng;
pub mod snapshot;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use call::HallCall;
pub use config::{
    DEFAULT_ELEVATOR_COUNT, MAX_FLOOR, MAX_REBALANCE_DEPTH, MIN_FLOOR, SimConfig,
};
pub use direction::{Direction, DoorState, HallDirection};
pub use error::{LiftError, LiftResult};
pub use floor::{Floor, FloorRange};
pub use ids::ElevatorId;
pub use request::Request;
pub use rng::SimRng;
pub use snapshot::ElevatorSnapshot;
pub use time::Tick;

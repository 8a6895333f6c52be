//! `lift-sim` — elevator state machine and tick loop driver.
//!
//! # One tick
//!
//! ```text
//! advance_tick():
//!   ① Snapshot: copy every elevator's observable state.
//!   ② Assign:   CallAssigner partitions the pending hall calls.
//!   ③ Plan:     DirectionPlanner commands a direction per elevator
//!                (parallel with the `parallel` feature).
//!   ④ Move:     every elevator ticks in ascending ElevatorId order,
//!                servicing its floor and removing serviced calls from the
//!                shared HallCallRegistry.
//! ```
//!
//! Step ④ is always sequential: a hall call serviced by elevator A is simply
//! gone by the time elevator B ticks, so every call has exactly one servicer.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the planning phase on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{HallDirection, SimConfig, Floor};
//! use lift_sim::{NoRequests, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.post_hall_call(Floor(5), HallDirection::Up)?;
//! let report = sim.advance_tick();
//! sim.run(&mut NoRequests, &mut NoopObserver);
//! ```

pub mod builder;
pub mod elevator;
pub mod error;
pub mod feed;
pub mod observer;
pub mod registry;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use elevator::{Elevator, ServiceOutcome};
pub use error::{SimError, SimResult};
pub use feed::{NoRequests, RequestFeed};
pub use observer::{NoopObserver, SimObserver};
pub use registry::HallCallRegistry;
pub use report::{ElevatorTickReport, TickReport};
pub use sim::Sim;

//! `lift-dispatch` — who answers which hall call, and which way each car goes.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`table`]     | `AssignmentTable`: per-elevator sets of hall calls for a cycle |
//! | [`effort`]    | `effort`, `furthest_target`, `best_elevator`                    |
//! | [`assigner`]  | `CallAssigner`: greedy assignment with bounded rebalancing     |
//! | [`planner`]   | `DirectionPlanner` trait, `LookPlanner`                         |
//!
//! # Decision phase
//!
//! Everything here is a pure function of immutable
//! [`ElevatorSnapshot`][lift_core::ElevatorSnapshot]s and the pending-call
//! set.  Nothing in this crate touches live elevator state:
//!
//! 1. `CallAssigner::assign` partitions the pending hall calls into an
//!    `AssignmentTable` by minimal effort.
//! 2. `DirectionPlanner::next_direction` turns each elevator's snapshot and
//!    its slice of the table into a commanded `Direction`.
//!
//! The simulation driver (lift-sim) then applies the commands sequentially.

pub mod assigner;
pub mod effort;
pub mod planner;
pub mod table;


pub use assigner::CallAssigner;
pub use effort::{best_elevator, effort, furthest_target};
pub use planner::{DirectionPlanner, LookPlanner};
pub use table::AssignmentTable;

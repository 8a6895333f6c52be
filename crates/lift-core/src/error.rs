//! Simulator-wide error type.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant via `#[from]`, so validation failures raised here flow through
//! `?` unchanged.

use thiserror::Error;

use crate::{ElevatorId, Floor};

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiftError {
    #[error("floor {floor} is outside the served range {min}..={max}")]
    FloorOutOfRange { floor: Floor, min: Floor, max: Floor },

    #[error("elevator {0} not found")]
    UnknownElevator(ElevatorId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;

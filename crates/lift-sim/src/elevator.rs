//! One elevator car and its door/floor state machine.
//!
//! # Tick rules
//!
//! Given the direction commanded by the planner:
//!
//! 1. **Service**: a cab target at the current floor is cleared.  Each
//!    pending hall call on this floor is cleared if the car is idle, or the
//!    call points the way the car is travelling, or the car has been told to
//!    stop here (`commanded == Idle`, which picks up *every* call on the floor).
//! 2. Anything serviced → door opens, direction becomes `Idle`, no movement.
//! 3. Door already open → door closes, commanded direction adopted, no
//!    movement.  This is the mandatory close-before-move tick.
//! 4. Otherwise → adopt the commanded direction and move one floor if the
//!    floor range allows it.
//!
//! A stop therefore costs at least two ticks (open, close) before the car's
//! floor can change again.

use std::collections::BTreeSet;

use lift_core::{
    Direction, DoorState, ElevatorId, ElevatorSnapshot, Floor, FloorRange, HallCall, LiftResult,
};

use crate::HallCallRegistry;

/// What one tick serviced at the car's floor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceOutcome {
    /// Hall calls cleared from the registry, ascending.
    pub hall_calls: Vec<HallCall>,
    /// The cab target cleared, if the car stopped at one.
    pub cab_floor:  Option<Floor>,
}

impl ServiceOutcome {
    /// `true` if the door opens this tick.
    #[inline]
    pub fn opened_door(&self) -> bool {
        self.cab_floor.is_some() || !self.hall_calls.is_empty()
    }
}

/// A live elevator.
///
/// Holds only per-car state.  The shared hall-call registry is passed in to
/// [`tick`][Self::tick] so it has a single owner.
#[derive(Clone, Debug)]
pub struct Elevator {
    id:          ElevatorId,
    floors:      FloorRange,
    floor:       Floor,
    direction:   Direction,
    door:        DoorState,
    cab_targets: BTreeSet<Floor>,
}

impl Elevator {
    /// An idle, door-closed car parked at `floor`.
    pub fn new(id: ElevatorId, floors: FloorRange, floor: Floor) -> LiftResult<Self> {
        Ok(Self {
            id,
            floors,
            floor: floors.check(floor)?,
            direction: Direction::Idle,
            door: DoorState::Closed,
            cab_targets: BTreeSet::new(),
        })
    }

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn floors(&self) -> FloorRange {
        self.floors
    }

    pub fn floor(&self) -> Floor {
        self.floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn door(&self) -> DoorState {
        self.door
    }

    pub fn cab_targets(&self) -> &BTreeSet<Floor> {
        &self.cab_targets
    }

    /// Press a cab button.
    ///
    /// Returns `false` and changes nothing if `floor` is outside the served
    /// range.  Pressing an already lit button succeeds without effect.
    pub fn add_internal_request(&mut self, floor: Floor) -> bool {
        if !self.floors.contains(floor) {
            return false;
        }
        self.cab_targets.insert(floor);
        true
    }

    /// Owned copy of the car's observable state.
    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            id:          self.id,
            floor:       self.floor,
            direction:   self.direction,
            door:        self.door,
            cab_targets: self.cab_targets.clone(),
        }
    }

    /// Advance this car by one tick under `commanded`.
    pub fn tick(&mut self, commanded: Direction, registry: &mut HallCallRegistry) -> ServiceOutcome {
        let outcome = self.service(commanded, registry);

        if outcome.opened_door() {
            self.door = DoorState::Open;
            self.direction = Direction::Idle;
            return outcome;
        }

        if self.door.is_open() {
            self.door = DoorState::Closed;
            self.direction = commanded;
            return outcome;
        }

        self.direction = commanded;
        let next = self.floor.step(commanded);
        if self.floors.contains(next) {
            self.floor = next;
        }
        outcome
    }

    /// Clear whatever this floor owes the car.  Serviced hall calls leave the
    /// registry immediately.
    fn service(&mut self, commanded: Direction, registry: &mut HallCallRegistry) -> ServiceOutcome {
        let floor = self.floor;

        let cab_floor = self.cab_targets.remove(&floor).then_some(floor);
        if cab_floor.is_some() {
            log::debug!("elevator {} reached target floor {floor} | request: cab", self.id);
        }

        let travelling = self.direction;
        let hall_calls: Vec<HallCall> = registry
            .at_floor(floor)
            .filter(|call| {
                travelling.is_idle() || call.direction == travelling || commanded.is_idle()
            })
            .collect();
        for call in &hall_calls {
            registry.remove(call);
            log::debug!("elevator {} reached target floor {floor} | request: hall {call}", self.id);
        }

        ServiceOutcome { hall_calls, cab_floor }
    }
}

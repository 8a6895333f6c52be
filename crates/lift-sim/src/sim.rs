//! The `Sim` struct and its tick loop.

use lift_core::{
    Direction, ElevatorId, ElevatorSnapshot, Floor, HallCall, HallDirection, LiftError, Request,
    SimConfig, Tick,
};
use lift_dispatch::{AssignmentTable, CallAssigner, DirectionPlanner, LookPlanner};

use crate::{
    Elevator, ElevatorTickReport, HallCallRegistry, RequestFeed, SimObserver, SimResult,
    TickReport,
};

/// The main simulation runner.
///
/// `Sim<P>` holds the elevator bank, the pending hall calls and the tick
/// counter, and drives the assign → plan → move cycle described in the crate
/// docs.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: DirectionPlanner = LookPlanner> {
    /// Global configuration (floor range, elevator count, total ticks, …).
    pub config: SimConfig,

    tick:      Tick,
    elevators: Vec<Elevator>,
    pending:   HallCallRegistry,
    assigner:  CallAssigner,
    planner:   P,
}

impl<P: DirectionPlanner> Sim<P> {
    pub(crate) fn from_parts(
        config:    SimConfig,
        elevators: Vec<Elevator>,
        pending:   HallCallRegistry,
        assigner:  CallAssigner,
        planner:   P,
    ) -> Self {
        Self { config, tick: Tick::ZERO, elevators, pending, assigner, planner }
    }

    // ── Read-only views ───────────────────────────────────────────────────

    /// The tick the next call to [`advance_tick`][Self::advance_tick] executes.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn elevator_count(&self) -> usize {
        self.elevators.len()
    }

    /// Every elevator, ascending by id.
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    /// Observable state of one elevator.
    pub fn snapshot(&self, id: ElevatorId) -> SimResult<ElevatorSnapshot> {
        Ok(self.elevator(id)?.snapshot())
    }

    /// Observable state of every elevator, ascending by id.
    pub fn snapshot_all(&self) -> Vec<ElevatorSnapshot> {
        self.elevators.iter().map(Elevator::snapshot).collect()
    }

    /// Hall calls posted and not yet serviced.
    pub fn pending_calls(&self) -> &HallCallRegistry {
        &self.pending
    }

    /// The partition the next [`advance_tick`][Self::advance_tick] would plan
    /// with.
    pub fn assignments(&self) -> AssignmentTable {
        self.assigner.assign(&self.snapshot_all(), self.pending.iter())
    }

    // ── Button presses ────────────────────────────────────────────────────

    /// Press a hall button.
    ///
    /// Returns `Ok(false)` if the same call is already pending.  A floor
    /// outside the building is rejected and nothing changes.
    pub fn post_hall_call(&mut self, floor: Floor, direction: HallDirection) -> SimResult<bool> {
        let floor = self.config.floors.check(floor)?;
        Ok(self.pending.insert(HallCall::new(floor, direction)))
    }

    /// Press a cab button inside elevator `id`.
    ///
    /// Unknown elevators and out-of-range floors are rejected and nothing
    /// changes.
    pub fn post_internal_request(&mut self, id: ElevatorId, floor: Floor) -> SimResult<()> {
        let elevator = self
            .elevators
            .get_mut(id.index())
            .ok_or(LiftError::UnknownElevator(id))?;
        let floor = elevator.floors().check(floor)?;
        elevator.add_internal_request(floor);
        Ok(())
    }

    /// Post any [`Request`].  `Ok(false)` only for a duplicate hall call.
    pub fn post(&mut self, request: Request) -> SimResult<bool> {
        match request {
            Request::Hall(call) => self.post_hall_call(call.floor, call.direction),
            Request::Cab { elevator, floor } => {
                self.post_internal_request(elevator, floor)?;
                Ok(true)
            }
        }
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Execute exactly one assign → plan → move cycle.
    pub fn advance_tick(&mut self) -> TickReport {
        let now = self.tick;

        let snapshots = self.snapshot_all();
        let table = self.assigner.assign(&snapshots, self.pending.iter());
        let commands = self.plan(&snapshots, &table);

        // Sequential in id order: a call serviced here is gone for later cars.
        let pending = &mut self.pending;
        let elevators: Vec<ElevatorTickReport> = self
            .elevators
            .iter_mut()
            .zip(commands)
            .enumerate()
            .map(|(i, (elevator, commanded))| {
                let from_floor = elevator.floor();
                let outcome = elevator.tick(commanded, pending);
                ElevatorTickReport {
                    from_floor,
                    snapshot: elevator.snapshot(),
                    commanded,
                    assigned: table.calls_for(i).iter().copied().collect(),
                    serviced_hall_calls: outcome.hall_calls,
                    serviced_cab_floor: outcome.cab_floor,
                }
            })
            .collect();

        self.tick = now.next();
        TickReport { tick: now, elevators, pending_after: self.pending.len() }
    }

    /// Run from the current tick until `config.total_ticks` have elapsed.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] and
    /// [`NoRequests`][crate::NoRequests] if you need neither.
    pub fn run<F: RequestFeed, O: SimObserver>(&mut self, feed: &mut F, observer: &mut O) {
        log::info!(
            "running {} elevators over floors {} for {} ticks",
            self.elevators.len(),
            self.config.floors,
            self.config.total_ticks,
        );
        while self.tick.0 < self.config.total_ticks {
            self.step(feed, observer);
        }
        observer.on_sim_end(self.tick);
        log::info!("simulation finished at {}, {} calls pending", self.tick, self.pending.len());
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<F: RequestFeed, O: SimObserver>(
        &mut self,
        n:        u64,
        feed:     &mut F,
        observer: &mut O,
    ) {
        for _ in 0..n {
            self.step(feed, observer);
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn elevator(&self, id: ElevatorId) -> SimResult<&Elevator> {
        Ok(self
            .elevators
            .get(id.index())
            .ok_or(LiftError::UnknownElevator(id))?)
    }

    fn step<F: RequestFeed, O: SimObserver>(&mut self, feed: &mut F, observer: &mut O) {
        let now = self.tick;
        observer.on_tick_start(now);

        for request in feed.requests_at(now) {
            if let Err(e) = self.post(request) {
                log::warn!("{now}: rejected {request}: {e}");
                observer.on_request_rejected(now, &request, &e);
            }
        }

        let report = self.advance_tick();
        observer.on_tick_end(&report);

        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.snapshot_all(), &self.pending);
        }
    }

    /// Commanded direction per elevator, ascending by id.
    ///
    /// With the `parallel` Cargo feature the planner runs on Rayon's thread
    /// pool; results are collected in input order either way.
    fn plan(&self, snapshots: &[ElevatorSnapshot], table: &AssignmentTable) -> Vec<Direction> {
        let planner = &self.planner;

        #[cfg(not(feature = "parallel"))]
        {
            snapshots
                .iter()
                .enumerate()
                .map(|(i, snapshot)| planner.next_direction(snapshot, table.calls_for(i)))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            snapshots
                .par_iter()
                .enumerate()
                .map(|(i, snapshot)| planner.next_direction(snapshot, table.calls_for(i)))
                .collect()
        }
    }
}

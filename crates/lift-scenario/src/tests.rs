//! Unit tests for lift-scenario.

use std::io::Cursor;

use lift_core::{ElevatorId, Floor, FloorRange, HallCall, Request, SimConfig, Tick};
use lift_sim::{NoRequests, NoopObserver, RequestFeed, SimBuilder};

use crate::{
    load_scenario_reader, RequestFeedExt, ScenarioError, ScenarioQueue, TrafficGenerator,
    TrafficRates,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn hall(tick: u64, call: HallCall) -> (Tick, Request) {
    (Tick(tick), Request::Hall(call))
}

fn cab(tick: u64, elevator: u32, floor: i32) -> (Tick, Request) {
    (Tick(tick), Request::Cab { elevator: ElevatorId(elevator), floor: Floor(floor) })
}

// ── ScenarioQueue ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue_tests {
    use super::*;

    #[test]
    fn drain_returns_only_that_tick() {
        let mut q = ScenarioQueue::from_requests([
            hall(3, HallCall::up(2)),
            hall(1, HallCall::down(9)),
            cab(3, 0, 7),
        ]);
        assert_eq!(q.len(), 3);
        assert_eq!(q.tick_count(), 2);
        assert_eq!(q.next_tick(), Some(Tick(1)));
        assert_eq!(q.last_tick(), Some(Tick(3)));

        assert!(q.drain_tick(Tick(2)).is_none());
        let at3 = q.drain_tick(Tick(3)).unwrap();
        assert_eq!(at3, vec![hall(3, HallCall::up(2)).1, cab(3, 0, 7).1]);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn feed_drains_in_tick_order() {
        let mut q = ScenarioQueue::from_requests([hall(0, HallCall::up(4)), hall(2, HallCall::down(6))]);
        assert_eq!(q.requests_at(Tick(0)), vec![Request::Hall(HallCall::up(4))]);
        assert!(q.requests_at(Tick(1)).is_empty());
        assert_eq!(q.requests_at(Tick(2)), vec![Request::Hall(HallCall::down(6))]);
        assert!(q.is_empty());
    }

    #[test]
    fn feed_posts_overdue_requests_late() {
        let mut q = ScenarioQueue::from_requests([hall(1, HallCall::up(4)), hall(5, HallCall::down(6))]);
        assert_eq!(
            q.requests_at(Tick(5)),
            vec![Request::Hall(HallCall::up(4)), Request::Hall(HallCall::down(6))]
        );
        assert!(q.is_empty());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use super::*;

    #[test]
    fn loads_hall_and_cab_rows() {
        let csv = "tick,kind,floor,direction,elevator\n\
                   0,hall,3,up,\n\
                   0,cab,6,,1\n\
                   4,hall,11,Down,\n";
        let mut q = load_scenario_reader(Cursor::new(csv)).unwrap();
        assert_eq!(q.len(), 3);
        assert_eq!(
            q.drain_tick(Tick(0)).unwrap(),
            vec![
                Request::Hall(HallCall::up(3)),
                Request::Cab { elevator: ElevatorId(1), floor: Floor(6) },
            ]
        );
        assert_eq!(q.drain_tick(Tick(4)).unwrap(), vec![Request::Hall(HallCall::down(11))]);
    }

    #[test]
    fn hall_row_without_direction_is_a_parse_error() {
        let csv = "tick,kind,floor,direction,elevator\n0,hall,3,,\n";
        let err = load_scenario_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(msg) if msg.contains("row 2")));
    }

    #[test]
    fn cab_row_without_elevator_is_a_parse_error() {
        let csv = "tick,kind,floor,direction,elevator\n0,cab,3,,\n";
        assert!(matches!(
            load_scenario_reader(Cursor::new(csv)),
            Err(ScenarioError::Parse(_))
        ));
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let csv = "tick,kind,floor,direction,elevator\n0,stairs,3,up,\n";
        assert!(matches!(
            load_scenario_reader(Cursor::new(csv)),
            Err(ScenarioError::Parse(_))
        ));
    }

    #[test]
    fn non_numeric_floor_is_a_parse_error() {
        let csv = "tick,kind,floor,direction,elevator\n0,hall,roof,up,\n";
        assert!(matches!(
            load_scenario_reader(Cursor::new(csv)),
            Err(ScenarioError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::path::Path::new("/definitely/not/here/scenario.csv");
        assert!(matches!(crate::load_scenario_csv(path), Err(ScenarioError::Io(_))));
    }
}

// ── TrafficGenerator ──────────────────────────────────────────────────────────

#[cfg(test)]
mod traffic_tests {
    use super::*;

    fn collect(generator: &mut TrafficGenerator, ticks: u64) -> Vec<Request> {
        (0..ticks).flat_map(|t| generator.requests_at(Tick(t))).collect()
    }

    #[test]
    fn same_seed_same_traffic() {
        let rates = TrafficRates { hall: 0.5, cab: 0.5 };
        let mut a = TrafficGenerator::new(FloorRange::default(), 3, rates, 7);
        let mut b = TrafficGenerator::new(FloorRange::default(), 3, rates, 7);
        assert_eq!(collect(&mut a, 200), collect(&mut b, 200));
    }

    #[test]
    fn presses_stay_inside_the_building() {
        let floors = FloorRange::new(Floor(1), Floor(6)).unwrap();
        let mut g = TrafficGenerator::new(floors, 2, TrafficRates { hall: 1.0, cab: 1.0 }, 3);
        let requests = collect(&mut g, 500);
        assert_eq!(requests.len(), 1000);
        for request in requests {
            match request {
                Request::Hall(call) => {
                    assert!(floors.contains(call.floor));
                    assert_ne!(call, HallCall::down(1));
                    assert_ne!(call, HallCall::up(6));
                }
                Request::Cab { elevator, floor } => {
                    assert!(elevator.0 < 2);
                    assert!(floors.contains(floor));
                }
            }
        }
    }

    #[test]
    fn zero_rates_are_silent() {
        let mut g = TrafficGenerator::new(
            FloorRange::default(),
            3,
            TrafficRates { hall: 0.0, cab: 0.0 },
            1,
        );
        assert!(collect(&mut g, 100).is_empty());
    }

    #[test]
    fn generated_traffic_is_always_accepted() {
        let config = SimConfig { total_ticks: 300, ..SimConfig::default() };
        let mut sim = SimBuilder::new(config.clone()).build().unwrap();
        let mut feed = TrafficGenerator::from_config(&config, TrafficRates::default());

        #[derive(Default)]
        struct Rejections(usize);
        impl lift_sim::SimObserver for Rejections {
            fn on_request_rejected(
                &mut self,
                _tick: Tick,
                _request: &Request,
                _error: &lift_sim::SimError,
            ) {
                self.0 += 1;
            }
        }

        let mut obs = Rejections::default();
        sim.run(&mut feed, &mut obs);
        assert_eq!(obs.0, 0);
        assert_eq!(sim.current_tick(), Tick(300));
    }
}

// ── Combinators ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod combine_tests {
    use super::*;

    #[test]
    fn merged_feed_posts_first_then_second() {
        let a = ScenarioQueue::from_requests([hall(0, HallCall::up(2))]);
        let b = ScenarioQueue::from_requests([hall(0, HallCall::down(8)), hall(1, HallCall::up(5))]);
        let mut merged = a.merge(b);
        assert_eq!(
            merged.requests_at(Tick(0)),
            vec![Request::Hall(HallCall::up(2)), Request::Hall(HallCall::down(8))]
        );
        assert_eq!(merged.requests_at(Tick(1)), vec![Request::Hall(HallCall::up(5))]);
    }

    #[test]
    fn merge_with_nothing_is_identity() {
        let q = ScenarioQueue::from_requests([cab(2, 1, 9)]);
        let mut merged = q.merge(NoRequests);
        assert!(merged.requests_at(Tick(0)).is_empty());
        assert_eq!(merged.requests_at(Tick(2)).len(), 1);
    }

    #[test]
    fn scripted_scenario_drives_the_sim() {
        let mut sim = SimBuilder::new(SimConfig { elevator_count: 1, ..SimConfig::default() })
            .build()
            .unwrap();
        let mut feed = ScenarioQueue::from_requests([hall(0, HallCall::up(3)), cab(0, 0, 4)]);
        sim.run_ticks(12, &mut feed, &mut NoopObserver);
        assert!(sim.pending_calls().is_empty());
        assert!(sim.snapshot(ElevatorId(0)).unwrap().cab_targets.is_empty());
        assert!(feed.is_empty());
    }
}

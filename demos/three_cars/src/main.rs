//! three_cars — the classic three-car demo for the rust_lift simulator.
//!
//! Seeds a 20-floor building with seven hall calls and two cab presses in car
//! 2, adds a few scripted presses and light random traffic, and runs the bank
//! until the configured tick count.  Traces go to `output/three_cars/`.
//!
//! ```text
//! three_cars [CONFIG.json] [SCENARIO.csv]
//! ```
//!
//! `CONFIG.json` is a serialized `SimConfig` (missing fields take their
//! defaults); `SCENARIO.csv` replaces the built-in scripted presses.  Set
//! `RUST_LOG=debug` to see every stop.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use lift_core::{ElevatorId, Floor, HallCall, HallDirection, SimConfig, Tick};
use lift_output::{CsvWriter, OutputWriter, SimOutputObserver};
use lift_scenario::{
    RequestFeedExt, ScenarioQueue, TrafficGenerator, TrafficRates, load_scenario_csv,
    load_scenario_reader,
};
use lift_sim::{SimBuilder, SimObserver, TickReport};

// ── Constants ─────────────────────────────────────────────────────────────────

const TOTAL_TICKS:           u64 = 120;
const OUTPUT_INTERVAL_TICKS: u64 = 1;
const OUTPUT_DIR:            &str = "output/three_cars";

/// Hall calls waiting when the building opens.
const INITIAL_HALL_CALLS: [(i32, HallDirection); 7] = [
    (3,  HallDirection::Up),
    (6,  HallDirection::Down),
    (4,  HallDirection::Down),
    (5,  HallDirection::Down),
    (9,  HallDirection::Down),
    (9,  HallDirection::Up),
    (11, HallDirection::Down),
];

/// Cab buttons already lit in car 2.
const INITIAL_CAB_FLOORS: [i32; 2] = [6, 10];

// ── Scenario CSV ──────────────────────────────────────────────────────────────

// Later arrivals on top of the opening rush.
const SCENARIO_CSV: &str = "\
tick,kind,floor,direction,elevator\n\
20,hall,1,up,\n\
20,hall,15,down,\n\
24,cab,18,,0\n\
30,hall,7,up,\n\
45,hall,20,down,\n\
45,cab,2,,2\n\
";

// ── Observer wrapper to count rows and stops ─────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    summary_rows:  usize,
    snapshot_rows: usize,
    hall_served:   usize,
    cab_served:    usize,
    rejected:      usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self {
            inner,
            summary_rows:  0,
            snapshot_rows: 0,
            hall_served:   0,
            cab_served:    0,
            rejected:      0,
        }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_request_rejected(
        &mut self,
        tick:    Tick,
        request: &lift_core::Request,
        error:   &lift_sim::SimError,
    ) {
        self.rejected += 1;
        self.inner.on_request_rejected(tick, request, error);
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        self.summary_rows += 1;
        self.hall_served += report.serviced_hall_calls().count();
        self.cab_served += report.serviced_cab_requests();
        self.inner.on_tick_end(report);
    }

    fn on_snapshot(
        &mut self,
        tick:      Tick,
        elevators: &[lift_core::ElevatorSnapshot],
        pending:   &lift_sim::HallCallRegistry,
    ) {
        self.snapshot_rows += elevators.len();
        self.inner.on_snapshot(tick, elevators, pending);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next();
    let scenario_path = args.next();

    // 1. Config: JSON file if given, else the built-in building.
    let config = match &config_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str::<SimConfig>(&text)
                .with_context(|| format!("parsing config {path}"))?
        }
        None => SimConfig {
            total_ticks:           TOTAL_TICKS,
            output_interval_ticks: OUTPUT_INTERVAL_TICKS,
            ..SimConfig::default()
        },
    };

    println!("=== three_cars — rust_lift elevator simulator ===");
    println!(
        "Elevators: {}  |  Floors: {}  |  Ticks: {}  |  Seed: {}",
        config.elevator_count, config.floors, config.total_ticks, config.seed
    );
    println!();

    // 2. Scripted presses.
    let scripted: ScenarioQueue = match &scenario_path {
        Some(path) => load_scenario_csv(Path::new(path))?,
        None => load_scenario_reader(Cursor::new(SCENARIO_CSV))?,
    };
    println!(
        "Scenario: {} scripted presses over {} ticks",
        scripted.len(),
        scripted.tick_count()
    );

    // 3. Build sim with the opening rush.
    let mut builder = SimBuilder::new(config.clone());
    for (floor, direction) in INITIAL_HALL_CALLS {
        builder = builder.hall_call(HallCall::new(floor, direction));
    }
    if config.elevator_count > 1 {
        for floor in INITIAL_CAB_FLOORS {
            builder = builder.cab_request(ElevatorId(1), Floor(floor));
        }
    }
    let mut sim = builder.build()?;

    print_bank(&sim);

    // 4. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    log::info!("writing traces to {OUTPUT_DIR}");
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 5. Run.
    let traffic = TrafficGenerator::from_config(&config, TrafficRates { hall: 0.05, cab: 0.02 });
    let mut feed = scripted.merge(traffic);

    let t0 = Instant::now();
    sim.run(&mut feed, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  hall calls served     : {}", obs.hall_served);
    println!("  cab requests served   : {}", obs.cab_served);
    println!("  requests rejected     : {}", obs.rejected);
    println!("  elevator_snapshots.csv: {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv    : {} rows", obs.summary_rows);
    println!();

    print_bank(&sim);
    Ok(())
}

/// Per-car table: position, heading, door, lit cab buttons and the hall calls
/// the assigner would give it next.
fn print_bank<P: lift_dispatch::DirectionPlanner>(sim: &lift_sim::Sim<P>) {
    let table = sim.assignments();
    println!("{} — {} hall calls pending", sim.current_tick(), sim.pending_calls().len());
    println!(
        "{:<6} {:<6} {:<6} {:<7} {:<14} {:<20}",
        "Car", "Floor", "Dir", "Door", "Cab", "Assigned"
    );
    println!("{}", "-".repeat(62));
    for snap in sim.snapshot_all() {
        let cab = snap
            .cab_targets
            .iter()
            .map(Floor::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let assigned = table
            .calls_for(snap.id.index())
            .iter()
            .map(HallCall::to_string)
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "{:<6} {:<6} {:<6} {:<7} {:<14} {:<20}",
            snap.id.to_string(),
            snap.floor.to_string(),
            snap.direction.as_str(),
            snap.door.as_str(),
            cab,
            assigned,
        );
    }
    println!();
}

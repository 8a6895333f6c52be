//! CSV scenario loader.
//!
//! # CSV format
//!
//! One row per button press.  `direction` is required for hall presses and
//! ignored for cab presses; `elevator` is the reverse.
//!
//! ```csv
//! tick,kind,floor,direction,elevator
//! 0,hall,3,up,
//! 0,cab,6,,1
//! 4,hall,11,down,
//! ```
//!
//! **`kind`** field:
//!
//! | Value  | Meaning                                            |
//! |--------|----------------------------------------------------|
//! | `hall` | `Request::Hall` at `floor` going `direction`       |
//! | `cab`  | `Request::Cab` for `ElevatorId(elevator)` to `floor` |
//!
//! Floors and elevator ids are not range-checked here: the simulation rejects
//! bad presses when they are posted and reports them to the observer.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{ElevatorId, Floor, HallCall, HallDirection, Request, Tick};

use crate::{ScenarioError, ScenarioQueue, ScenarioResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RequestRecord {
    tick:      u64,
    kind:      String,
    floor:     i32,
    direction: Option<String>,
    elevator:  Option<u32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`ScenarioQueue`] from a CSV file.
pub fn load_scenario_csv(path: &Path) -> ScenarioResult<ScenarioQueue> {
    let file = std::fs::File::open(path)?;
    let queue = load_scenario_reader(file)?;
    log::info!(
        "loaded {} requests over {} ticks from {}",
        queue.len(),
        queue.tick_count(),
        path.display()
    );
    Ok(queue)
}

/// Like [`load_scenario_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from a pipe.
pub fn load_scenario_reader<R: Read>(reader: R) -> ScenarioResult<ScenarioQueue> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut queue = ScenarioQueue::new();

    for (line, result) in csv_reader.deserialize::<RequestRecord>().enumerate() {
        let row = result.map_err(|e| ScenarioError::Parse(e.to_string()))?;
        // +2: one for the header, one for 1-based numbering.
        let request = parse_request(&row).map_err(|msg| {
            ScenarioError::Parse(format!("row {}: {msg}", line + 2))
        })?;
        queue.push(Tick(row.tick), request);
    }

    Ok(queue)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_request(row: &RequestRecord) -> Result<Request, String> {
    let floor = Floor(row.floor);
    match row.kind.trim().to_ascii_lowercase().as_str() {
        "hall" => {
            let raw = row
                .direction
                .as_deref()
                .ok_or_else(|| "hall request without a direction".to_string())?;
            let direction: HallDirection = raw.parse().map_err(|e| format!("{e}"))?;
            Ok(Request::Hall(HallCall::new(floor, direction)))
        }
        "cab" => {
            let elevator = row
                .elevator
                .ok_or_else(|| "cab request without an elevator".to_string())?;
            Ok(Request::Cab { elevator: ElevatorId(elevator), floor })
        }
        other => Err(format!(
            "invalid request kind {other:?}: expected \"hall\" or \"cab\""
        )),
    }
}

//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `elevator_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ElevatorSnapshotRow, OutputResult, TickSummaryRow};

/// Writes simulation traces to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("elevator_snapshots.csv"))?;
        snapshots.write_record(["elevator_id", "tick", "floor", "direction", "door", "cab_targets"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick",
            "pending_calls",
            "serviced_hall_calls",
            "serviced_cab_requests",
            "moving_elevators",
        ])?;

        log::debug!("writing CSV traces to {}", dir.display());
        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.elevator_id.to_string(),
                row.tick.to_string(),
                row.floor.to_string(),
                row.direction.as_str().to_string(),
                row.door.as_str().to_string(),
                row.cab_targets_field(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.pending_calls.to_string(),
            row.serviced_hall_calls.to_string(),
            row.serviced_cab_requests.to_string(),
            row.moving_elevators.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}

//! Integration tests for lift-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use lift_core::{Direction, DoorState, Floor};

    use crate::csv::CsvWriter;
    use crate::row::{ElevatorSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(elevator_id: u32, tick: u64) -> ElevatorSnapshotRow {
        ElevatorSnapshotRow {
            elevator_id,
            tick,
            floor:       elevator_id as i32 + 1,
            direction:   Direction::Up,
            door:        DoorState::Closed,
            cab_targets: vec![Floor(6), Floor(10)],
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            pending_calls:         4,
            serviced_hall_calls:   1,
            serviced_cab_requests: 0,
            moving_elevators:      2,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("elevator_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("elevator_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["elevator_id", "tick", "floor", "direction", "door", "cab_targets"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["tick", "pending_calls", "serviced_hall_calls", "serviced_cab_requests", "moving_elevators"]
        );
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("elevator_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][1], "5");
        assert_eq!(&rows[1][2], "2");     // floor
        assert_eq!(&rows[1][3], "up");
        assert_eq!(&rows[1][4], "closed");
        assert_eq!(&rows[1][5], "6;10");
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["3", "4", "1", "0", "2"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn empty_cab_targets_field() {
        let mut row = snap_row(0, 0);
        row.cab_targets.clear();
        assert_eq!(row.cab_targets_field(), "");
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use lift_core::{Floor, HallDirection, SimConfig};
    use lift_sim::{NoRequests, SimBuilder};

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{ElevatorSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    /// Fails every summary write with a distinct message.
    struct FailingWriter {
        calls: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(io::Error::other(format!("disk full #{}", self.calls))))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn keeps_only_the_first_error() {
        let config = SimConfig { total_ticks: 3, ..SimConfig::default() };
        let mut sim = SimBuilder::new(config).build().unwrap();
        let mut obs = SimOutputObserver::new(FailingWriter { calls: 0 });
        sim.run(&mut NoRequests, &mut obs);

        let err = obs.take_error().expect("write error stored");
        assert!(err.to_string().contains("disk full #1"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 3);
    }

    #[test]
    fn integration_csv() {
        let config = SimConfig {
            elevator_count:        2,
            total_ticks:           6,
            output_interval_ticks: 2,
            ..SimConfig::default()
        };
        let mut sim = SimBuilder::new(config).build().unwrap();
        sim.post_hall_call(Floor(5), HallDirection::Up).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut NoRequests, &mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → snapshots at ticks 0, 2, 4 (3 ticks × 2 elevators)
        let mut rdr = csv::Reader::from_path(dir.path().join("elevator_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        // Elevator 0 took the call and left floor 1 on the first tick.
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["0", "0", "2", "up", "closed", ""]);
        assert_eq!(rows[1].iter().collect::<Vec<_>>(), ["1", "0", "1", "idle", "closed", ""]);

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 6);
        assert_eq!(&summaries[0][4], "1"); // one car moving
        assert_eq!(&summaries[4][2], "1"); // 5U served on the fifth tick
        assert_eq!(&summaries[4][1], "0");
    }
}

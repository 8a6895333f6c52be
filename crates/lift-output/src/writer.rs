//! The `OutputWriter` trait implemented by backend writers.

use crate::{ElevatorSnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by trace writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of elevator snapshots.
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

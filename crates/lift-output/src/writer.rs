//! The `OutputWriter` trait implemented by backend writers.

use crate::{ElevatorSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for per-tick simulation rows.
///
/// Errors are returned to the caller; [`SnapshotObserver`][crate::SnapshotObserver]
/// stores the first one for later retrieval.
pub trait OutputWriter: Send + 'static {
    /// Write a batch of per-car rows.
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

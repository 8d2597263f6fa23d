//! `SnapshotObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use lift_sim::{Report, SimObserver, WorldSnapshot};

use crate::row::{ElevatorSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{write_report_json, OutputError, OutputResult};

/// Shared handle to the first write error of a [`SnapshotObserver`].
///
/// The engine owns its observer, so errors are read back through this
/// handle instead of from the observer itself.
#[derive(Clone, Default)]
pub struct ErrorSlot(Arc<Mutex<Option<OutputError>>>);

impl ErrorSlot {
    /// Take the stored error, if any.
    pub fn take(&self) -> Option<OutputError> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).take()
    }

    fn store(&self, err: OutputError) {
        let mut slot = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        // Keep only the first error.
        if slot.is_none() {
            tracing::warn!(error = %err, "output write failed");
            *slot = Some(err);
        }
    }
}

/// A [`SimObserver`] that writes per-car rows and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Tick summaries are written every tick; per-car rows every `every` ticks
/// (default 1).  On stop the writer is flushed and, if configured, the final
/// report is written as JSON.
pub struct SnapshotObserver<W: OutputWriter> {
    writer:      W,
    every:       u64,
    report_path: Option<PathBuf>,
    errors:      ErrorSlot,
}

impl<W: OutputWriter> SnapshotObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            every:       1,
            report_path: None,
            errors:      ErrorSlot::default(),
        }
    }

    /// Write per-car rows only on every `n`th tick.  `0` disables them.
    pub fn every(mut self, n: u64) -> Self {
        self.every = n;
        self
    }

    /// Also write the final report to `path` on stop.
    pub fn report_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = Some(path.into());
        self
    }

    pub fn error_slot(&self) -> ErrorSlot {
        self.errors.clone()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&self, result: OutputResult<()>) {
        if let Err(e) = result {
            self.errors.store(e);
        }
    }
}

impl<W: OutputWriter> SimObserver for SnapshotObserver<W> {
    fn on_tick(&mut self, snapshot: &WorldSnapshot) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(snapshot));
        self.store_err(result);

        if self.every > 0 && snapshot.tick.is_multiple_of(self.every) {
            let rows = ElevatorSnapshotRow::from_snapshot(snapshot);
            if !rows.is_empty() {
                let result = self.writer.write_snapshots(&rows);
                self.store_err(result);
            }
        }
    }

    fn on_stop(&mut self, report: &Report) {
        let result = self.writer.finish();
        self.store_err(result);
        if let Some(path) = &self.report_path {
            let result = write_report_json(path, report);
            self.store_err(result);
        }
    }
}

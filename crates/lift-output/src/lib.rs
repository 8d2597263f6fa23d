//! `lift-output` — simulation output writers.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`writer`]   | `OutputWriter` trait                                      |
//! | [`csv`]      | `CsvWriter` — `elevator_snapshots.csv`, `tick_summaries.csv` |
//! | [`observer`] | `SnapshotObserver` — engine observer feeding a writer     |
//! | [`report`]   | `write_report_json`, `write_report`                       |
//! | [`row`]      | `ElevatorSnapshotRow`, `TickSummaryRow`                   |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                          |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SnapshotObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let observer = SnapshotObserver::new(writer).every(10);
//! let errors = observer.error_slot();
//! let engine = SimBuilder::new().observer(observer).build()?;
//! // ... run, then stop ...
//! if let Some(e) = errors.take() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{ErrorSlot, SnapshotObserver};
pub use report::{write_report, write_report_json};
pub use row::{ElevatorSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;

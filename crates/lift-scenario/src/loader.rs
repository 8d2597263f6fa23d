//! Scenario loaders.
//!
//! # JSON format
//!
//! An array of records:
//!
//! ```json
//! [
//!   {"time": 0,  "action": "spawn", "floor": 5, "count": 3},
//!   {"time": 20, "action": "fire_start"},
//!   {"time": 45, "action": "fire_end"}
//! ]
//! ```
//!
//! # CSV format
//!
//! ```csv
//! time,action,floor,count,target
//! 0,spawn,5,3,
//! 12.5,spawn,1,2,8
//! 20,fire_start,,,
//! 45,fire_end,,,
//! ```
//!
//! Empty cells take the same defaults as missing JSON keys.  Both loaders
//! return a [`Timeline`], already sorted by time.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::{ScenarioError, ScenarioRecord, ScenarioResult, Timeline};

/// Load a scenario from a JSON file.
pub fn load_json(path: &Path) -> ScenarioResult<Timeline> {
    let file = File::open(path).map_err(ScenarioError::Io)?;
    load_json_reader(BufReader::new(file))
}

/// Like [`load_json`] but accepts any `Read` source.
pub fn load_json_reader<R: Read>(reader: R) -> ScenarioResult<Timeline> {
    let records: Vec<ScenarioRecord> = serde_json::from_reader(reader)?;
    build(records)
}

/// Load a scenario from a CSV file with a header row.
pub fn load_csv(path: &Path) -> ScenarioResult<Timeline> {
    let file = File::open(path).map_err(ScenarioError::Io)?;
    load_csv_reader(file)
}

/// Like [`load_csv`] but accepts any `Read` source.
pub fn load_csv_reader<R: Read>(reader: R) -> ScenarioResult<Timeline> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let records = csv_reader
        .deserialize::<ScenarioRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    build(records)
}

fn build(records: Vec<ScenarioRecord>) -> ScenarioResult<Timeline> {
    let events = records
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.into_event(i))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(events = events.len(), "scenario loaded");
    Ok(Timeline::new(events))
}

//! JSON export of the final [`Report`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use lift_sim::Report;

use crate::OutputResult;

/// Write `report` as pretty-printed JSON to `path`.
pub fn write_report_json(path: &Path, report: &Report) -> OutputResult<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_report(&mut out, report)?;
    out.flush()?;
    Ok(())
}

/// Like [`write_report_json`] but to any `Write` sink.
pub fn write_report<W: Write>(writer: W, report: &Report) -> OutputResult<()> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

//! Job orchestration: wire source → transform chain → sink.
//!
//! This is configuration, not logic: the stage order is fixed and there are
//! no retries here. Any fault not isolated by a filter stage (a malformed
//! row at the boundary, a malformed numeric at coercion, a sink failure)
//! terminates the run.

use crate::io::csv::read_csv_vec;
use crate::record::RawRecord;
use crate::runner::Runner;
use crate::table::ParquetSink;
use crate::transform;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Row counts reported by a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSummary {
    /// Data rows read from the source file.
    pub rows_read: usize,
    /// Rows surviving the transform chain and loaded into the destination.
    pub rows_loaded: usize,
}

/// Run the ETL job: read the source CSV, apply the four-stage transform
/// chain under `runner`, and load the result into `sink`.
pub fn run(src_path: &Path, sink: &ParquetSink, runner: &Runner) -> Result<JobSummary> {
    info!(src = %src_path.display(), table = %sink.table(), "starting load");

    let raw: Vec<RawRecord> = read_csv_vec(src_path)
        .with_context(|| format!("read film records from {}", src_path.display()))?;
    let rows_read = raw.len();
    info!(rows = rows_read, "read source records");

    let rows = runner
        .run(raw, transform::process)
        .context("transform film records")?;
    info!(rows = rows.len(), dropped = rows_read - rows.len(), "transform complete");

    let rows_loaded = sink
        .load(&rows)
        .with_context(|| format!("load table {}", sink.table()))?;
    info!(rows = rows_loaded, dest = %sink.destination().display(), "load complete");

    Ok(JobSummary {
        rows_read,
        rows_loaded,
    })
}

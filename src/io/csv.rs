//! Typed CSV source.
//!
//! The first row of the file is a header naming the raw columns; every data
//! row deserializes with Serde into the target record type. A row that does
//! not conform to the expected schema (missing column, unexpected shape)
//! fails the read with the row number attached, which is the fail-fast
//! boundary check for the whole pipeline.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;

/// Read a CSV file into a typed `Vec<T>`.
///
/// Errors are annotated with row numbers for easier debugging.
///
/// # Errors
/// Returns an error if the file cannot be opened or if any row fails to
/// deserialize into `T`.
pub fn read_csv_vec<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(f);
    let mut out = Vec::<T>::new();
    for (i, rec) in rdr.deserialize::<T>().enumerate() {
        let v = rec.with_context(|| format!("parse CSV record #{}", i + 1))?;
        out.push(v);
    }
    Ok(out)
}

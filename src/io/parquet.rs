//! Parquet writer/reader for the columnar destination.
//!
//! Writing takes an explicitly declared Arrow schema rather than inferring
//! one from the row type: the destination table's columns and nullability
//! are part of the job contract, not an artifact of serialization.

use anyhow::{Context, Result};
use arrow::datatypes::FieldRef;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::arrow_writer::ArrowWriter;
use parquet::file::properties::WriterProperties;
use serde::{Serialize, de::DeserializeOwned};
use serde_arrow::{from_record_batch, to_record_batch};
use std::fs::File;
use std::path::Path;

/// Write typed rows to a Parquet file with the given declared schema.
///
/// The file is created if missing and truncated if present. Writing an empty
/// slice produces a valid zero-row file carrying the declared schema.
///
/// # Returns
/// Number of rows written (`rows.len()`).
///
/// # Errors
/// Returns an error if a row does not match the declared schema, or on file
/// creation or write failure.
pub fn write_parquet_vec<T: Serialize>(
    path: impl AsRef<Path>,
    fields: &[FieldRef],
    rows: &[T],
) -> Result<usize> {
    let path = path.as_ref();

    let batch: RecordBatch =
        to_record_batch(fields, &rows).context("convert rows to RecordBatch")?;

    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let props = WriterProperties::builder().build();
    let mut writer =
        ArrowWriter::try_new(file, batch.schema(), Some(props)).context("create ArrowWriter")?;

    writer.write(&batch).context("write batch to parquet")?;
    writer.close().context("close ArrowWriter")?;

    Ok(rows.len())
}

/// Read a Parquet file into a typed `Vec<T>`.
///
/// # Errors
/// Returns an error if the file cannot be opened, the reader cannot be
/// built, batch iteration fails, or conversion to `T` fails.
pub fn read_parquet_vec<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;

    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("open ParquetRecordBatchReader")?;
    let mut reader = builder.build().context("build ParquetRecordBatchReader")?;

    let mut out: Vec<T> = Vec::new();
    while let Some(batch) = reader.next().transpose().context("read next batch")? {
        let mut rows: Vec<T> =
            from_record_batch(&batch).context("deserialize RecordBatch rows to T")?;
        out.append(&mut rows);
    }
    Ok(out)
}

//! # Filmflow
//!
//! A batch ETL job over the Bechdel-test film dataset: read a CSV of film
//! records, discard records with a dubious test outcome or missing domestic
//! gross, collapse the duplicated/versioned raw columns into a canonical
//! seven-column shape, coerce the numeric columns to integers, and load the
//! result into a Parquet table addressed BigQuery-style as
//! `project:dataset.table`.
//!
//! ## Pipeline shape
//!
//! Four ordered stages, each a pure function over a single record:
//!
//! 1. **Validity filter** — drop records rated `"dubious"`
//! 2. **Completeness filter** — drop records without domestic gross data
//! 3. **Field remapper** — canonicalize columns, sentinel `"#N/A"` → absent
//! 4. **Type coercion** — parse numeric columns, absent → explicit null
//!
//! There is no cross-record state, so the [`Runner`] may execute the chain
//! sequentially or over Rayon partitions with identical results.
//!
//! ## Quick start
//!
//! ```no_run
//! use filmflow::{Runner, ParquetSink, TableRef, job};
//! # use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let table: TableRef = "my-project:films.bechdel".parse()?;
//! let sink = ParquetSink::new("warehouse", table);
//! let summary = job::run(Path::new("movies.csv"), &sink, &Runner::default())?;
//! println!("loaded {} rows", summary.rows_loaded);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`record`] - Raw, remapped, and output record types
//! - [`transform`] - The four transform stages and the per-record chain
//! - [`runner`] - Sequential and Rayon-parallel execution
//! - [`io`] - Typed CSV source and Parquet reader/writer
//! - [`table`] - Destination addressing, declared schema, Parquet sink
//! - [`job`] - Orchestration and the run summary

pub mod io;
pub mod job;
pub mod record;
pub mod runner;
pub mod table;
pub mod testing;
pub mod transform;

pub use job::JobSummary;
pub use record::{FilmRow, RawRecord, RemappedRecord};
pub use runner::{ExecMode, Runner};
pub use table::{ParquetSink, TableRef, output_fields};

//! The four-stage record transform chain.
//!
//! Each stage is a pure function over a single record, so the runner may
//! invoke them concurrently on disjoint records in any order. The chain is
//! fixed: validity filter, completeness filter, field remapper, type
//! coercion. A record rejected by a filter never reaches later stages.

use crate::record::{FilmRow, RawRecord, RemappedRecord};
use anyhow::{Context, Result};

/// Validity filter: a record is kept iff its Bechdel outcome is conclusive.
///
/// Records rated `"dubious"` are excluded from the output entirely.
pub fn is_conclusive(record: &RawRecord) -> bool {
    record.clean_test != "dubious"
}

/// Completeness filter: a record is kept iff it carries domestic gross data.
///
/// The `"#N/A"` sentinel was already mapped to `None` at the read boundary.
pub fn has_domestic_gross(record: &RawRecord) -> bool {
    record.domgross.is_some()
}

/// Field remapper: collapse the raw columns into the canonical shape.
///
/// - `clean_test` becomes `test`.
/// - The three `_2013$` columns become `budget`/`domgross`/`intgross`;
///   a missing source value stays absent, never an empty placeholder.
/// - `year`, `imdb`, `title` pass through untouched.
/// - Everything else (`test`, `code`, `binary`, the nominal monetary
///   columns, the period/decade codes) is dropped by construction.
///
/// Never filters: one record in, one record out.
pub fn remap_columns(record: RawRecord) -> RemappedRecord {
    RemappedRecord {
        year: record.year,
        imdb: record.imdb,
        title: record.title,
        test: record.clean_test,
        budget: record.budget_2013,
        domgross: record.domgross_2013,
        intgross: record.intgross_2013,
    }
}

/// Type coercion: parse the numeric columns as base-10 signed integers.
///
/// Present values must parse; a malformed numeric string is a fatal parse
/// fault that aborts the run. Absent values become explicit nulls.
pub fn coerce_types(record: RemappedRecord) -> Result<FilmRow> {
    Ok(FilmRow {
        year: parse_int("year", Some(record.year))?,
        imdb: record.imdb,
        title: record.title,
        test: record.test,
        budget: parse_int("budget", record.budget)?,
        domgross: parse_int("domgross", record.domgross)?,
        intgross: parse_int("intgross", record.intgross)?,
    })
}

fn parse_int(field: &'static str, value: Option<String>) -> Result<Option<i64>> {
    match value {
        None => Ok(None),
        Some(s) => {
            let n = s
                .parse::<i64>()
                .with_context(|| format!("parse `{field}` value {s:?} as integer"))?;
            Ok(Some(n))
        }
    }
}

/// The full per-record chain, in stage order.
///
/// Returns `Ok(None)` for records rejected by a filter. This is the unit the
/// [`Runner`](crate::runner::Runner) fans out over partitions.
pub fn process(record: RawRecord) -> Result<Option<FilmRow>> {
    if !is_conclusive(&record) {
        return Ok(None);
    }
    if !has_domestic_gross(&record) {
        return Ok(None);
    }
    let row = coerce_types(remap_columns(record))?;
    Ok(Some(row))
}

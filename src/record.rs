//! Record types for the film dataset.
//!
//! The source CSV carries fifteen raw columns, several of them duplicated or
//! versioned (`budget` vs `budget_2013$`), with the string `"#N/A"` standing
//! in for missing values. The types here make that schema explicit:
//!
//! - [`RawRecord`] is one CSV row. Columns that may carry the `"#N/A"`
//!   sentinel deserialize to `Option<String>`, so the sentinel is turned into
//!   absence exactly once, at the read boundary. A row missing an expected
//!   column fails deserialization with an error naming the column.
//! - [`RemappedRecord`] is the canonical seven-column shape after the field
//!   remapper. The dropped raw columns do not exist on this type.
//! - [`FilmRow`] is the sink row: numeric columns parsed to `i64`, absence
//!   represented as an explicit null.

use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel used by the source data to mean "value not available".
pub const NOT_AVAILABLE: &str = "#N/A";

fn na_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value == NOT_AVAILABLE {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

/// One row of the source CSV, exactly as read.
///
/// Field names mirror the CSV header; the `_2013$`-suffixed and spaced
/// columns are mapped via serde renames.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub year: String,
    pub imdb: String,
    pub title: String,
    /// Raw test outcome, superseded by `clean_test`.
    pub test: String,
    pub clean_test: String,
    pub binary: String,
    pub code: String,
    /// Nominal budget, superseded by `budget_2013$`.
    pub budget: String,
    /// Nominal domestic gross. `"#N/A"` reads as `None`.
    #[serde(deserialize_with = "na_as_none")]
    pub domgross: Option<String>,
    /// Nominal international gross, superseded by `intgross_2013$`.
    pub intgross: String,
    #[serde(rename = "budget_2013$", deserialize_with = "na_as_none")]
    pub budget_2013: Option<String>,
    #[serde(rename = "domgross_2013$", deserialize_with = "na_as_none")]
    pub domgross_2013: Option<String>,
    #[serde(rename = "intgross_2013$", deserialize_with = "na_as_none")]
    pub intgross_2013: Option<String>,
    #[serde(rename = "period code")]
    pub period_code: String,
    #[serde(rename = "decade code")]
    pub decade_code: String,
}

/// Canonical record shape after the field remapper, values still strings.
///
/// A monetary field is `Some` only if its `_2013$` source column held a real
/// value; `None` is the only representation of "no data".
#[derive(Debug, Clone, PartialEq)]
pub struct RemappedRecord {
    pub year: String,
    pub imdb: String,
    pub title: String,
    pub test: String,
    pub budget: Option<String>,
    pub domgross: Option<String>,
    pub intgross: Option<String>,
}

/// A fully typed output row, matching the declared sink schema.
///
/// All four numeric columns are always assigned: `None` is written as a null
/// cell, never an omitted one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmRow {
    pub year: Option<i64>,
    pub imdb: String,
    pub title: String,
    pub test: String,
    pub budget: Option<i64>,
    pub domgross: Option<i64>,
    pub intgross: Option<i64>,
}

//! Destination table addressing and the Parquet sink.
//!
//! Destinations are addressed BigQuery-style as `project:dataset.table` and
//! resolve to `<warehouse>/<project>/<dataset>/<table>.parquet` on disk. The
//! sink's write disposition is fixed: create the destination if absent,
//! truncate and fully overwrite if present.

use crate::io::parquet::write_parquet_vec;
use crate::record::FilmRow;
use anyhow::{Context, Result, bail};
use arrow::datatypes::{DataType, Field, FieldRef};
use regex::Regex;
use std::fmt;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

/// Project of word/`.`/`:`/`-` characters, then dataset and table of word
/// characters.
const TABLE_REF_PATTERN: &str = r"^([\w.:-]+):(\w+)\.(\w+)$";

/// A validated three-part destination table identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub project: String,
    pub dataset: String,
    pub table: String,
}

impl FromStr for TableRef {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let re = Regex::new(TABLE_REF_PATTERN).expect("valid table ref regex");
        let Some(caps) = re.captures(s) else {
            bail!("destination table must be of the form PROJECT:DATASET.TABLE, got {s:?}");
        };
        Ok(Self {
            project: caps[1].to_string(),
            dataset: caps[2].to_string(),
            table: caps[3].to_string(),
        })
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}.{}", self.project, self.dataset, self.table)
    }
}

impl TableRef {
    /// Resolve this identifier to a file path under `root`.
    pub fn path_under(&self, root: &Path) -> PathBuf {
        root.join(&self.project)
            .join(&self.dataset)
            .join(format!("{}.parquet", self.table))
    }
}

/// The declared destination schema, in declaration order:
/// `year:INTEGER, imdb:STRING, title:STRING, test:STRING, budget:INTEGER,
/// domgross:INTEGER, intgross:INTEGER`, with the numeric columns nullable.
pub fn output_fields() -> Vec<FieldRef> {
    vec![
        Arc::new(Field::new("year", DataType::Int64, true)),
        Arc::new(Field::new("imdb", DataType::Utf8, false)),
        Arc::new(Field::new("title", DataType::Utf8, false)),
        Arc::new(Field::new("test", DataType::Utf8, false)),
        Arc::new(Field::new("budget", DataType::Int64, true)),
        Arc::new(Field::new("domgross", DataType::Int64, true)),
        Arc::new(Field::new("intgross", DataType::Int64, true)),
    ]
}

/// Columnar sink writing [`FilmRow`]s to a table under a warehouse root.
pub struct ParquetSink {
    root: PathBuf,
    table: TableRef,
}

impl ParquetSink {
    pub fn new(root: impl Into<PathBuf>, table: TableRef) -> Self {
        Self {
            root: root.into(),
            table,
        }
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }

    /// The file this sink writes to.
    pub fn destination(&self) -> PathBuf {
        self.table.path_under(&self.root)
    }

    /// Load rows into the destination table.
    ///
    /// Create-if-absent, truncate-and-overwrite-if-present; no append.
    ///
    /// # Returns
    /// Number of rows loaded.
    pub fn load(&self, rows: &[FilmRow]) -> Result<usize> {
        let dest = self.destination();
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir_all(parent).with_context(|| format!("mkdir -p {}", parent.display()))?;
        }
        write_parquet_vec(&dest, &output_fields(), rows)
    }
}

//! Record sources: the rows a directory listing is built from.
//!
//! A [`RecordSource`] is a read-only table of rows with named columns. Rows
//! are addressed by position, so reading one never moves shared cursor
//! state. [`MemorySource`] is an in-memory implementation that can also be
//! loaded from a TOML fixture.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Well-known column names.
pub mod columns {
    /// The provider (authority) a row came from.
    pub const SOURCE_ID: &str = "source_id";
    pub const DOCUMENT_ID: &str = "document_id";
    pub const MIME_TYPE: &str = "mime_type";
    pub const DISPLAY_NAME: &str = "_display_name";
    pub const SIZE: &str = "_size";
    pub const LAST_MODIFIED: &str = "last_modified";
}

/// Mime type that marks a row as a directory.
pub const MIME_TYPE_DIR: &str = "vnd.android.document/directory";

/// Why a numeric cell could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CellError {
    #[error("cell is null")]
    Null,

    #[error("malformed number: {0:?}")]
    Malformed(String),

    #[error("row {0} out of range")]
    RowOutOfRange(usize),
}

/// Side-channel metadata a provider attaches to a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extras {
    /// Informational message to show above the listing.
    #[serde(default)]
    pub info: Option<String>,
    /// Error message the provider wants surfaced, while still returning rows.
    #[serde(default)]
    pub error: Option<String>,
    /// `true` while the provider is still fetching more rows.
    #[serde(default)]
    pub loading: Option<bool>,
}

/// A positionable table of directory-entry rows.
pub trait RecordSource {
    /// Number of rows in the snapshot.
    fn row_count(&self) -> usize;

    /// Index of the named column, or `None` if the source has no such column.
    fn column_index(&self, name: &str) -> Option<usize>;

    /// Reads a cell as text. `None` for a null cell or an out-of-range row.
    fn read_string(&self, row: usize, column: usize) -> Option<String>;

    /// Reads a cell as a 64-bit integer.
    fn read_i64(&self, row: usize, column: usize) -> Result<i64, CellError>;

    /// Provider metadata, if the source carries any.
    fn extras(&self) -> Option<&Extras> {
        None
    }
}

/// A single cell of a [`MemorySource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Text(String),
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// An in-memory [`RecordSource`].
///
/// Each row maps column names to cells; a column missing from a row reads
/// as null.
///
/// ```
/// use dirlist_core::source::{columns, Cell, MemorySource, RecordSource};
///
/// let source = MemorySource::new(&[columns::DISPLAY_NAME, columns::SIZE])
///     .with_row([(columns::DISPLAY_NAME, Cell::from("notes.txt")), (columns::SIZE, Cell::Int(12))]);
///
/// let size = source.column_index(columns::SIZE).unwrap();
/// assert_eq!(source.read_i64(0, size), Ok(12));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemorySource {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<BTreeMap<String, Cell>>,
    #[serde(default)]
    extras: Option<Extras>,
}

impl MemorySource {
    /// Creates an empty source with the given columns.
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            rows: Vec::new(),
            extras: None,
        }
    }

    /// Parses a source from a TOML document.
    ///
    /// ```toml
    /// columns = ["source_id", "document_id", "_display_name"]
    ///
    /// [[rows]]
    /// source_id = "local"
    /// document_id = "1"
    /// _display_name = "Photos"
    ///
    /// [extras]
    /// loading = true
    /// ```
    ///
    /// # Errors
    ///
    /// [`CoreError::ConfigParse`] if the document is malformed.
    pub fn from_toml(content: &str) -> CoreResult<Self> {
        toml::from_str(content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Returns the source with one more row appended.
    #[must_use]
    pub fn with_row<'a>(mut self, cells: impl IntoIterator<Item = (&'a str, Cell)>) -> Self {
        let row = cells
            .into_iter()
            .map(|(name, cell)| (name.to_string(), cell))
            .collect();
        self.rows.push(row);
        self
    }

    /// Returns the source with its extras bundle replaced.
    #[must_use]
    pub fn with_extras(mut self, extras: Extras) -> Self {
        self.extras = Some(extras);
        self
    }

    fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        let name = self.columns.get(column)?;
        self.rows.get(row)?.get(name)
    }
}

impl RecordSource for MemorySource {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    fn read_string(&self, row: usize, column: usize) -> Option<String> {
        match self.cell(row, column)? {
            Cell::Text(s) => Some(s.clone()),
            Cell::Int(n) => Some(n.to_string()),
        }
    }

    fn read_i64(&self, row: usize, column: usize) -> Result<i64, CellError> {
        if row >= self.rows.len() {
            return Err(CellError::RowOutOfRange(row));
        }
        match self.cell(row, column) {
            Some(Cell::Int(n)) => Ok(*n),
            Some(Cell::Text(s)) => s
                .trim()
                .parse()
                .map_err(|_| CellError::Malformed(s.clone())),
            None => Err(CellError::Null),
        }
    }

    fn extras(&self) -> Option<&Extras> {
        self.extras.as_ref()
    }
}

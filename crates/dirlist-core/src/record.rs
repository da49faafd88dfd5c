//! Directory-entry records and their identifiers.

use serde::{Deserialize, Serialize};

use crate::source::{columns, RecordSource, MIME_TYPE_DIR};

/// Builds the model id for a document: `source_id|doc_id`.
///
/// The same document keeps the same id across refreshes, which lets callers
/// diff listings by id.
///
/// ```
/// assert_eq!(dirlist_core::build_id("downloads", "42"), "downloads|42");
/// ```
pub fn build_id(source_id: &str, doc_id: &str) -> String {
    format!("{source_id}|{doc_id}")
}

/// Column positions resolved once per refresh.
///
/// Any column may be absent; readers then fall back to defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub source_id: Option<usize>,
    pub document_id: Option<usize>,
    pub mime_type: Option<usize>,
    pub display_name: Option<usize>,
    pub size: Option<usize>,
    pub last_modified: Option<usize>,
}

impl ColumnMap {
    pub fn resolve<S: RecordSource + ?Sized>(source: &S) -> Self {
        Self {
            source_id: source.column_index(columns::SOURCE_ID),
            document_id: source.column_index(columns::DOCUMENT_ID),
            mime_type: source.column_index(columns::MIME_TYPE),
            display_name: source.column_index(columns::DISPLAY_NAME),
            size: source.column_index(columns::SIZE),
            last_modified: source.column_index(columns::LAST_MODIFIED),
        }
    }
}

/// Reads a text cell, treating a missing column or null cell as `""`.
pub(crate) fn string_or_empty<S: RecordSource + ?Sized>(
    source: &S,
    row: usize,
    column: Option<usize>,
) -> String {
    column
        .and_then(|col| source.read_string(row, col))
        .unwrap_or_default()
}

/// A full directory entry, read back from the source at a known position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub source_id: String,
    pub document_id: String,
    pub mime_type: String,
    pub display_name: String,
    /// `None` when the size is unknown or unparseable.
    pub size: Option<i64>,
    /// `None` when the timestamp is unknown or unparseable.
    pub last_modified: Option<i64>,
}

impl DocumentRecord {
    /// Reads row `row` of `source` using pre-resolved columns.
    pub fn read<S: RecordSource + ?Sized>(source: &S, row: usize, columns: &ColumnMap) -> Self {
        let number = |column: Option<usize>| column.and_then(|col| source.read_i64(row, col).ok());
        Self {
            source_id: string_or_empty(source, row, columns.source_id),
            document_id: string_or_empty(source, row, columns.document_id),
            mime_type: string_or_empty(source, row, columns.mime_type),
            display_name: string_or_empty(source, row, columns.display_name),
            size: number(columns.size),
            last_modified: number(columns.last_modified),
        }
    }

    pub fn id(&self) -> String {
        build_id(&self.source_id, &self.document_id)
    }

    pub fn is_dir(&self) -> bool {
        is_dir_mime(&self.mime_type)
    }
}

/// Returns `true` if `mime_type` marks a directory.
pub fn is_dir_mime(mime_type: &str) -> bool {
    mime_type == MIME_TYPE_DIR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Cell, MemorySource};

    #[test]
    fn build_id_joins_with_pipe() {
        assert_eq!(build_id("local", "docs/a.txt"), "local|docs/a.txt");
        assert_eq!(build_id("", ""), "|");
    }

    #[test]
    fn build_id_is_stable() {
        assert_eq!(build_id("s", "1"), build_id("s", "1"));
        assert_ne!(build_id("s", "1"), build_id("s1", ""));
    }

    #[test]
    fn resolve_marks_missing_columns() {
        let source = MemorySource::new(&[columns::DOCUMENT_ID, columns::SIZE]);
        let map = ColumnMap::resolve(&source);
        assert_eq!(map.document_id, Some(0));
        assert_eq!(map.size, Some(1));
        assert_eq!(map.source_id, None);
        assert_eq!(map.last_modified, None);
    }

    #[test]
    fn read_fills_defaults() {
        let source = MemorySource::new(&[
            columns::SOURCE_ID,
            columns::DOCUMENT_ID,
            columns::MIME_TYPE,
            columns::SIZE,
        ])
        .with_row([
            (columns::SOURCE_ID, Cell::from("local")),
            (columns::DOCUMENT_ID, Cell::from("7")),
            (columns::MIME_TYPE, Cell::from(MIME_TYPE_DIR)),
            (columns::SIZE, Cell::from("n/a")),
        ]);
        let map = ColumnMap::resolve(&source);

        let record = DocumentRecord::read(&source, 0, &map);

        assert_eq!(record.id(), "local|7");
        assert!(record.is_dir());
        assert_eq!(record.display_name, "");
        assert_eq!(record.size, None);
        assert_eq!(record.last_modified, None);
    }

    #[test]
    fn is_dir_mime_is_exact() {
        assert!(is_dir_mime(MIME_TYPE_DIR));
        assert!(!is_dir_mime("text/plain"));
        assert!(!is_dir_mime(""));
    }
}

//! Sort-key extraction with defaulting for missing or malformed cells.

use unicode_normalization::UnicodeNormalization;

use crate::record::{string_or_empty, ColumnMap};
use crate::sort::order::SortOrder;
use crate::source::RecordSource;

/// The value a row is ordered by.
///
/// Text keys hold a case-folded name (see [`fold_case`]) and sort
/// ascending. Number keys sort descending, so the newest or largest entries
/// come first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    Text(String),
    Number(i64),
}

impl SortKey {
    /// A text key for `name`, folded once so comparisons are plain string
    /// comparisons.
    pub fn text(name: &str) -> Self {
        Self::Text(fold_case(name))
    }

    /// Reads the key for `row` according to `order`.
    pub fn extract<S: RecordSource + ?Sized>(
        source: &S,
        row: usize,
        columns: &ColumnMap,
        order: SortOrder,
    ) -> Self {
        match order {
            SortOrder::Name => Self::text(&string_or_empty(source, row, columns.display_name)),
            SortOrder::Modified => Self::Number(last_modified(source, row, columns.last_modified)),
            SortOrder::Size => Self::Number(size(source, row, columns.size)),
        }
    }
}

/// Timestamp for `row`, or `i64::MAX` when it is missing, unparseable, or
/// not positive.
///
/// Items still being written (active downloads, for instance) often lack a
/// timestamp; mapping them to the maximum keeps them at the top of a
/// newest-first listing.
pub fn last_modified<S: RecordSource + ?Sized>(
    source: &S,
    row: usize,
    column: Option<usize>,
) -> i64 {
    column
        .and_then(|col| source.read_i64(row, col).ok())
        .filter(|value| *value > 0)
        .unwrap_or(i64::MAX)
}

/// Size for `row`, or `0` when it is missing or unparseable.
pub fn size<S: RecordSource + ?Sized>(source: &S, row: usize, column: Option<usize>) -> i64 {
    column
        .and_then(|col| source.read_i64(row, col).ok())
        .unwrap_or(0)
}

/// Case-folds a display name for ordering.
///
/// The name is NFC-normalised first so composed and decomposed spellings of
/// the same name fold to the same key.
pub fn fold_case(name: &str) -> String {
    if name.is_ascii() {
        return name.to_ascii_lowercase();
    }
    name.nfc().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    use crate::source::{columns, Cell, MemorySource};

    fn compare_ignore_case(lhs: &str, rhs: &str) -> Ordering {
        fold_case(lhs).cmp(&fold_case(rhs))
    }

    fn numbers(cells: Vec<Option<Cell>>, column: &str) -> MemorySource {
        cells
            .into_iter()
            .fold(MemorySource::new(&[column]), |source, cell| match cell {
                Some(cell) => source.with_row([(column, cell)]),
                None => source.with_row([]),
            })
    }

    #[test]
    fn last_modified_defaults_to_max() {
        let source = numbers(
            vec![
                Some(Cell::Int(1_700_000_000)),
                Some(Cell::Int(0)),
                Some(Cell::Int(-5)),
                Some(Cell::from("garbage")),
                None,
            ],
            columns::LAST_MODIFIED,
        );
        let col = source.column_index(columns::LAST_MODIFIED);

        assert_eq!(last_modified(&source, 0, col), 1_700_000_000);
        assert_eq!(last_modified(&source, 1, col), i64::MAX);
        assert_eq!(last_modified(&source, 2, col), i64::MAX);
        assert_eq!(last_modified(&source, 3, col), i64::MAX);
        assert_eq!(last_modified(&source, 4, col), i64::MAX);
        assert_eq!(last_modified(&source, 0, None), i64::MAX);
    }

    #[test]
    fn size_defaults_to_zero() {
        let source = numbers(
            vec![Some(Cell::Int(100)), Some(Cell::from("garbage")), None, Some(Cell::Int(-1))],
            columns::SIZE,
        );
        let col = source.column_index(columns::SIZE);

        assert_eq!(size(&source, 0, col), 100);
        assert_eq!(size(&source, 1, col), 0);
        assert_eq!(size(&source, 2, col), 0);
        // Negative sizes are passed through; only unreadable cells default.
        assert_eq!(size(&source, 3, col), -1);
        assert_eq!(size(&source, 0, None), 0);
    }

    #[test]
    fn missing_size_and_missing_timestamp_default_asymmetrically() {
        let source = MemorySource::new(&[columns::DISPLAY_NAME]).with_row([]);
        let map = ColumnMap::resolve(&source);

        assert_eq!(
            SortKey::extract(&source, 0, &map, SortOrder::Size),
            SortKey::Number(0)
        );
        assert_eq!(
            SortKey::extract(&source, 0, &map, SortOrder::Modified),
            SortKey::Number(i64::MAX)
        );
        assert_eq!(
            SortKey::extract(&source, 0, &map, SortOrder::Name),
            SortKey::Text(String::new())
        );
    }

    #[test]
    fn extract_name_reads_display_name() {
        let source = MemorySource::new(&[columns::DISPLAY_NAME])
            .with_row([(columns::DISPLAY_NAME, Cell::from("Report.pdf"))]);
        let map = ColumnMap::resolve(&source);

        assert_eq!(
            SortKey::extract(&source, 0, &map, SortOrder::Name),
            SortKey::Text("report.pdf".to_string())
        );
    }

    #[test]
    fn compare_ignore_case_ascii() {
        assert_eq!(compare_ignore_case("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_ignore_case("REPORT", "report"), Ordering::Equal);
        assert_eq!(compare_ignore_case("b", "A"), Ordering::Greater);
        assert_eq!(compare_ignore_case("", "a"), Ordering::Less);
    }

    #[test]
    fn compare_ignore_case_unicode() {
        assert_eq!(compare_ignore_case("Ärger", "ärger"), Ordering::Equal);
        // "é" precomposed vs "e" + combining acute.
        assert_eq!(compare_ignore_case("caf\u{e9}", "CAFE\u{301}"), Ordering::Equal);
        assert_eq!(compare_ignore_case("한글", "한글파일"), Ordering::Less);
    }

    #[test]
    fn fold_case_matches_ascii_and_unicode_paths() {
        assert_eq!(fold_case("Report.PDF"), "report.pdf");
        assert_eq!(fold_case("CAFE\u{301}"), "caf\u{e9}");
        assert_eq!(SortKey::text("Ärger"), SortKey::Text("ärger".to_string()));
    }
}

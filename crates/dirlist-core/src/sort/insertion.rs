//! Stable ranked binary-insertion sort for directory rows.
//!
//! Rows are inserted one at a time into an already-sorted prefix. The
//! insertion point is found by binary search, placing a row after every
//! prefix element it does not rank strictly before, so rows that compare
//! equal keep their snapshot order.
//!
//! Ranking, in priority order:
//!
//! 1. Directories before everything else.
//! 2. [`SortKey::Text`]: ascending on the case-folded name.
//! 3. [`SortKey::Number`]: descending; equal numbers fall back to the entry
//!    id, ascending, so listings whose timestamps keep shifting do not
//!    jitter between refreshes.

use std::cmp::Ordering;

use crate::sort::key::SortKey;

/// One row of a listing being sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRow {
    /// Row position in the source snapshot.
    pub position: usize,
    pub id: String,
    pub is_dir: bool,
    pub key: SortKey,
}

/// Ranks `pivot` against `other`. `Less` means `pivot` belongs first.
pub fn rank(pivot: &SortRow, other: &SortRow) -> Ordering {
    // Directories always go in front.
    match (pivot.is_dir, other.is_dir) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    match (&pivot.key, &other.key) {
        (SortKey::Text(lhs), SortKey::Text(rhs)) => lhs.cmp(rhs),
        (SortKey::Number(lhs), SortKey::Number(rhs)) => {
            rhs.cmp(lhs).then_with(|| pivot.id.cmp(&other.id))
        }
        // A single refresh never mixes key kinds; keep the ordering total anyway.
        (SortKey::Text(_), SortKey::Number(_)) => Ordering::Less,
        (SortKey::Number(_), SortKey::Text(_)) => Ordering::Greater,
    }
}

/// Sorts `rows` in place by [`rank`].
pub fn sort_rows(rows: &mut [SortRow]) {
    for start in 1..rows.len() {
        let (prefix, rest) = rows.split_at(start);
        let pivot = &rest[0];
        let left = prefix.partition_point(|other| rank(pivot, other) != Ordering::Less);
        rows[left..=start].rotate_right(1);
    }
}

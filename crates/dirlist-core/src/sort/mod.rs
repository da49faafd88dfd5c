//! Ordering of directory listings.
//!
//! [`order::SortOrder`] picks the column, [`key`] extracts and defaults the
//! per-row value, and [`insertion::sort_rows`] ranks the rows.

pub mod insertion;
pub mod key;
pub mod order;

pub use insertion::{rank, sort_rows, SortRow};
pub use key::SortKey;
pub use order::SortOrder;

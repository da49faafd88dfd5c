//! dirlist core library: a sortable index over directory listings.
//!
//! A loader reads a directory into a [`RecordSource`] and hands it to a
//! [`DirectoryModel`] wrapped in a [`DirectoryResult`]. The model sorts the
//! rows (directories first, then by name, modification time or size) into a
//! list of stable model ids and keeps an id → row map for reading records
//! back.
//!
//! # Modules
//!
//! - [`model`] — [`DirectoryModel`], refresh results and update listeners.
//! - [`sort`] — [`SortOrder`], key extraction and the ranked insertion sort.
//! - [`source`] — the [`RecordSource`] trait and the in-memory [`MemorySource`].
//! - [`record`] — [`DocumentRecord`] and model-id construction ([`build_id`]).
//! - [`config`] — TOML-based defaults.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod model;
pub mod record;
pub mod sort;
pub mod source;

pub use config::settings::Config;
pub use error::{CoreError, CoreResult, LoadError};
pub use model::{DirectoryModel, DirectoryResult, ListenerId, Snapshot, UpdateListener};
pub use record::{build_id, DocumentRecord};
pub use sort::{SortKey, SortOrder};
pub use source::{Extras, MemorySource, RecordSource};

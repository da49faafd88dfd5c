//! Error types for `dirlist-core`.
//!
//! Fallible operations return [`CoreResult<T>`], an alias for
//! `Result<T, CoreError>`. Upstream load failures travel separately as
//! [`LoadError`] so that listeners can hold on to them.

use std::path::PathBuf;

/// Unified error type for core operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// A numeric or string sort-order code did not map to a known order.
    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),

    /// An entry id was looked up that is not part of the current snapshot.
    ///
    /// Callers must only pass ids obtained from
    /// [`DirectoryModel::model_ids`](crate::model::DirectoryModel::model_ids).
    #[error("unknown entry id: {0}")]
    UnknownEntry(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `dirlist-core`.
pub type CoreResult<T> = Result<T, CoreError>;

/// A directory load that failed upstream, before any rows were available.
///
/// Delivered verbatim to
/// [`UpdateListener::on_update_failed`](crate::model::UpdateListener::on_update_failed).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to load directory: {message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The upstream description of what went wrong.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_path() {
        let err = CoreError::NotFound(PathBuf::from("/missing/config.toml"));
        assert_eq!(err.to_string(), "path not found: /missing/config.toml");
    }

    #[test]
    fn config_parse_displays_message() {
        let err = CoreError::ConfigParse("unexpected token".to_string());
        assert_eq!(err.to_string(), "config parse error: unexpected token");
    }

    #[test]
    fn unknown_sort_order_displays_code() {
        let err = CoreError::UnknownSortOrder("7".to_string());
        assert_eq!(err.to_string(), "unknown sort order: 7");
    }

    #[test]
    fn unknown_entry_displays_id() {
        let err = CoreError::UnknownEntry("downloads|42".to_string());
        assert_eq!(err.to_string(), "unknown entry id: downloads|42");
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "gone");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
        assert!(core_err.to_string().contains("gone"));
    }

    #[test]
    fn load_error_keeps_message() {
        let err = LoadError::new("provider crashed");
        assert_eq!(err.message(), "provider crashed");
        assert_eq!(err.to_string(), "failed to load directory: provider crashed");
        assert_eq!(err.clone(), err);
    }
}

//! Sort order selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The column a directory listing is ordered by.
///
/// Directories always precede other entries whatever the order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Display name, case-insensitive, A–Z.
    #[default]
    Name,
    /// Last-modified time, newest first.
    #[serde(alias = "date")]
    Modified,
    /// Size in bytes, largest first.
    Size,
}

impl SortOrder {
    /// The numeric code used by loaders to request this order.
    pub fn code(self) -> i32 {
        match self {
            Self::Name => 1,
            Self::Modified => 2,
            Self::Size => 3,
        }
    }
}

impl TryFrom<i32> for SortOrder {
    type Error = CoreError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Name),
            2 => Ok(Self::Modified),
            3 => Ok(Self::Size),
            other => Err(CoreError::UnknownSortOrder(other.to_string())),
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "modified" | "date" => Ok(Self::Modified),
            "size" => Ok(Self::Size),
            _ => Err(CoreError::UnknownSortOrder(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Modified => "modified",
            Self::Size => "size",
        };
        f.write_str(name)
    }
}

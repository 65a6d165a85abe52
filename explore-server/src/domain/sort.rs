//! Result ordering modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown sort mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort mode: {0}")]
pub struct InvalidSortMode(String);

/// How enriched results are ordered for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Places with a phone first, mobile-like numbers before others,
    /// then by name.
    PhoneFirst,
    /// By name, case-insensitive.
    Alphabetical,
    /// Provider order.
    #[default]
    None,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PhoneFirst => "phone_first",
            Self::Alphabetical => "alphabetical",
            Self::None => "none",
        }
    }
}

impl FromStr for SortMode {
    type Err = InvalidSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phone_first" => Ok(Self::PhoneFirst),
            "alphabetical" => Ok(Self::Alphabetical),
            "none" | "" => Ok(Self::None),
            _ => Err(InvalidSortMode(s.to_string())),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

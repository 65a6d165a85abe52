//! Provider result pages and their status codes.

use std::fmt;

use serde::{Serialize, Serializer};

use super::PlaceSummary;

/// Number of results the provider returns per text-search page.
pub const PAGE_SIZE: usize = 20;

/// Status reported by the provider for a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    Ok,
    ZeroResults,
    /// Also returned for a page cursor that is not active yet.
    InvalidRequest,
    OverQueryLimit,
    RequestDenied,
    NotFound,
    UnknownError,
    /// Any status this client does not know about.
    Other(String),
}

impl SearchStatus {
    /// Parse a provider status string. Never fails: unknown values are
    /// kept as [`SearchStatus::Other`].
    pub fn parse(s: &str) -> Self {
        match s {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "NOT_FOUND" => Self::NotFound,
            "UNKNOWN_ERROR" => Self::UnknownError,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::NotFound => "NOT_FOUND",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Other(s) => s,
        }
    }

    /// `OK` or `ZERO_RESULTS`: the request was answered.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok | Self::ZeroResults)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SearchStatus {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

/// One page of text-search results.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderPage {
    pub status: SearchStatus,
    pub results: Vec<PlaceSummary>,
    /// Cursor for the following page, if there is one.
    pub next_cursor: Option<String>,
}

impl ProviderPage {
    /// A page with no results and no cursor.
    pub fn empty(status: SearchStatus) -> Self {
        Self {
            status,
            results: Vec::new(),
            next_cursor: None,
        }
    }
}

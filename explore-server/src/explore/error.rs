//! Explore engine error types.

use crate::domain::QueryError;
use crate::places::PlacesError;

/// Errors from the explore engine and session controller.
#[derive(Debug, thiserror::Error)]
pub enum ExploreError {
    /// The query could not be composed
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The provider could not be reached or answered garbage
    #[error("provider error: {0}")]
    Provider(#[from] PlacesError),

    /// A page fetch is already in flight for this session
    #[error("a search is already in progress")]
    SessionBusy,

    /// No search has been run in this session yet
    #[error("no search has been run")]
    NoSearch,

    /// The current page has no cursor for a following page
    #[error("no next page")]
    NoNextPage,

    /// Already on the first page
    #[error("no previous page")]
    NoPreviousPage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ExploreError::from(QueryError::EmptyKeyword).to_string(),
            "keyword must not be empty"
        );
        assert_eq!(
            ExploreError::SessionBusy.to_string(),
            "a search is already in progress"
        );
        assert_eq!(ExploreError::NoNextPage.to_string(), "no next page");
        assert_eq!(
            ExploreError::from(PlacesError::RateLimited).to_string(),
            "provider error: rate limited by places API"
        );
    }
}

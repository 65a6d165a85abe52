//! Places client error types.

/// Errors from a place provider.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}{}", .body.as_deref().map(|b| format!(" (body: {b})")).unwrap_or_default())]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The provider answered with a non-success status in the body
    #[error("provider status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        status: String,
        message: Option<String>,
    },

    /// Place not found (stale or invalid ID)
    #[error("place not found: {0}")]
    NotFound(String),

    /// Rate limited by the API
    #[error("rate limited by places API")]
    RateLimited,

    /// Invalid API key or unauthorized
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// Mock fixture data could not be loaded
    #[error("fixture error: {0}")]
    Fixture(String),
}

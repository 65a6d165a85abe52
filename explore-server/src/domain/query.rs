//! Search query composition.

use std::fmt;

/// Error returned when a query cannot be composed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The keyword was empty after trimming. An empty keyword means
    /// "do not search".
    #[error("keyword must not be empty")]
    EmptyKeyword,
}

/// A place search as entered by the user.
///
/// Construction trims every part and drops empty location parts, so a
/// `SearchQuery` always has a non-empty keyword.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    keyword: String,
    city: Option<String>,
    country: Option<String>,
}

impl SearchQuery {
    /// Create a query, rejecting an empty keyword.
    pub fn new(
        keyword: impl AsRef<str>,
        city: Option<&str>,
        country: Option<&str>,
    ) -> Result<Self, QueryError> {
        let keyword = keyword.as_ref().trim();
        if keyword.is_empty() {
            return Err(QueryError::EmptyKeyword);
        }

        Ok(Self {
            keyword: keyword.to_string(),
            city: non_empty(city),
            country: non_empty(country),
        })
    }

    /// The search keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The city, if one was given.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// The country, if one was given.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// The provider's free-text form, before URL encoding.
    ///
    /// `"shoes in Kathmandu, Nepal"`, or just `"shoes"` without a location.
    pub fn text(&self) -> String {
        let location: Vec<&str> = [self.city(), self.country()]
            .into_iter()
            .flatten()
            .collect();

        if location.is_empty() {
            self.keyword.clone()
        } else {
            format!("{} in {}", self.keyword, location.join(", "))
        }
    }

    /// The URL-encoded query string sent to the provider.
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.text()).into_owned()
    }
}

impl fmt::Debug for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SearchQuery({:?})", self.text())
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Compose an encoded provider query from raw user input.
///
/// # Examples
///
/// ```
/// use explore_server::domain::compose;
///
/// let q = compose("shoes", Some("Kathmandu"), Some("Nepal")).unwrap();
/// assert_eq!(q, "shoes%20in%20Kathmandu%2C%20Nepal");
///
/// assert!(compose("   ", Some("Kathmandu"), None).is_err());
/// ```
pub fn compose(
    keyword: &str,
    city: Option<&str>,
    country: Option<&str>,
) -> Result<String, QueryError> {
    SearchQuery::new(keyword, city, country).map(|q| q.encoded())
}

fn non_empty(part: Option<&str>) -> Option<String> {
    part.map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
}

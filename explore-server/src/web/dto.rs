//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{CountryPrediction, EnrichedResult, NOT_AVAILABLE, SortMode};
use crate::explore::{PageView, resolve_photo_url};
use crate::places::PlaceProvider;

/// Request to start a new search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Client-chosen session id
    pub session: String,

    /// Free-text keyword (required)
    pub keyword: String,

    pub city: Option<String>,

    pub country: Option<String>,

    /// Sort mode: `phone_first`, `alphabetical` or empty
    pub sort: Option<String>,
}

/// Request naming only a session (next/previous page).
#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub session: String,
}

/// Request to change the sort mode of the current page.
#[derive(Debug, Deserialize)]
pub struct SortRequest {
    pub session: String,
    pub mode: String,
}

/// Country autocomplete request.
#[derive(Debug, Deserialize)]
pub struct CountryRequest {
    /// Prefix typed so far
    pub q: String,
}

/// Photo URL request.
#[derive(Debug, Deserialize)]
pub struct PhotoRequest {
    /// Photo reference; a missing one resolves to no URL
    pub reference: Option<String>,
    pub max_width: Option<u32>,
}

/// One place as rendered for the UI.
#[derive(Debug, Serialize)]
pub struct PlaceResult {
    pub id: String,
    pub name: String,
    pub address: String,

    /// Phone number or `"N/A"`
    pub phone: String,

    pub types: Vec<String>,

    /// Rating or `"N/A"`
    pub rating: String,

    /// Latitude or `"N/A"`
    pub lat: String,

    /// Longitude or `"N/A"`
    pub lng: String,

    pub maps_url: Option<String>,

    pub photo_url: Option<String>,
}

impl PlaceResult {
    /// Render an enriched result, resolving its photo through `provider`.
    pub fn from_result<P: PlaceProvider>(
        result: &EnrichedResult,
        provider: &P,
        photo_max_width: u32,
    ) -> Self {
        Self {
            id: result.id.clone(),
            name: result.name.clone(),
            address: result.address.clone(),
            phone: result.phone_or_na().to_string(),
            types: result.types.clone(),
            rating: or_na(result.rating),
            lat: or_na(result.lat),
            lng: or_na(result.lng),
            maps_url: result.maps_url(),
            photo_url: resolve_photo_url(provider, result.photo_ref.as_deref(), photo_max_width),
        }
    }
}

fn or_na(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// A page of explore results.
#[derive(Debug, Serialize)]
pub struct PageResponse {
    /// Zero-based page number
    pub page: usize,

    pub has_next: bool,

    pub has_previous: bool,

    /// Provider status, absent if the provider could not be reached
    pub status: Option<String>,

    /// True when the page is not a clean `OK`/`ZERO_RESULTS` answer
    pub degraded: bool,

    pub sort: SortMode,

    /// Provider query text of the current search
    pub query: Option<String>,

    pub results: Vec<PlaceResult>,
}

impl PageResponse {
    pub fn from_view<P: PlaceProvider>(view: &PageView, provider: &P, photo_max_width: u32) -> Self {
        Self {
            page: view.page_index,
            has_next: view.has_next,
            has_previous: view.has_previous,
            status: view.status.as_ref().map(|s| s.as_str().to_string()),
            degraded: view.is_degraded(),
            sort: view.sort_mode,
            query: view.query.as_ref().map(|q| q.text()),
            results: view
                .results
                .iter()
                .map(|r| PlaceResult::from_result(r, provider, photo_max_width))
                .collect(),
        }
    }
}

/// Country autocomplete response.
#[derive(Debug, Serialize)]
pub struct CountryResponse {
    pub countries: Vec<CountryPrediction>,
}

/// Photo URL response.
#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    pub url: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

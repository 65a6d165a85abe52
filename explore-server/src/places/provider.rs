//! The place provider capability consumed by the explore engine.

use std::future::Future;

use crate::domain::{PlaceDetail, ProviderPage, RegionPrediction};

use super::error::PlacesError;

/// Fields requested from the details endpoint.
pub const DETAIL_FIELDS: &[&str] = &[
    "name",
    "formatted_address",
    "formatted_phone_number",
    "international_phone_number",
    "types",
    "photos",
    "rating",
];

/// Trait for an external place-search service.
///
/// This abstraction allows the explore engine to be tested with mock data.
pub trait PlaceProvider: Send + Sync {
    /// Run a text search. `query` is already URL-encoded.
    ///
    /// A page status such as `INVALID_REQUEST` is returned as a page, not an
    /// error; errors are reserved for transport and decoding failures.
    fn text_search(
        &self,
        query: &str,
        cursor: Option<&str>,
    ) -> impl Future<Output = Result<ProviderPage, PlacesError>> + Send;

    /// Look up details for one place.
    fn place_details(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> impl Future<Output = Result<PlaceDetail, PlacesError>> + Send;

    /// Autocomplete region names (countries, states, cities).
    fn region_autocomplete(
        &self,
        input: &str,
    ) -> impl Future<Output = Result<Vec<RegionPrediction>, PlacesError>> + Send;

    /// URL that serves the photo for `photo_reference`.
    fn photo_url(&self, photo_reference: &str, max_width: u32) -> String;
}

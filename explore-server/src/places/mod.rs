//! Place-search provider client.
//!
//! This module provides an HTTP client for the Google Places web service
//! and a fixture-backed mock, both behind the [`PlaceProvider`] trait.
//!
//! Key characteristics of the provider:
//! - Text search returns at most 20 results per page
//! - Page cursors (`next_page_token`) are **not usable immediately** after
//!   they are issued; early requests answer `INVALID_REQUEST`
//! - Phone numbers are only available from the per-place details endpoint

mod client;
mod convert;
mod error;
mod mock;
mod provider;
mod types;

pub use client::{PlacesClient, PlacesConfig};
pub use error::PlacesError;
pub use mock::MockPlacesClient;
pub use provider::{DETAIL_FIELDS, PlaceProvider};
pub use types::{
    AutocompleteResponse, DetailsResponse, PlaceDetailsResult, PlaceResult, Prediction,
    TextSearchResponse,
};

//! Mock places client for running without API access.
//!
//! Loads sample responses from JSON files and serves them as if they were
//! live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use crate::domain::{PlaceDetail, ProviderPage, RegionPrediction, SearchStatus};

use super::convert::{convert_details, convert_predictions, convert_text_search};
use super::error::PlacesError;
use super::provider::PlaceProvider;
use super::types::{AutocompleteResponse, PlaceDetailsResult, TextSearchResponse};

/// Mock places client that serves data from JSON files.
///
/// Expects a directory containing:
/// - `textsearch.json`: an array of text-search pages, chained by their
///   `next_page_token` values. Every query gets the same pages.
/// - `details.json` (optional): an object of place ID → details result.
/// - `autocomplete.json` (optional): one autocomplete response. Predictions
///   whose description starts with the input (case-insensitive) are served.
#[derive(Clone)]
pub struct MockPlacesClient {
    pages: Arc<Vec<TextSearchResponse>>,
    details: Arc<HashMap<String, PlaceDetailsResult>>,
    regions: Arc<Option<AutocompleteResponse>>,
    /// Requests a fresh cursor answers with `INVALID_REQUEST` before it
    /// becomes usable.
    cursor_warmup: u32,
    cursor_hits: Arc<Mutex<HashMap<String, u32>>>,
}

impl MockPlacesClient {
    /// Create a new mock client by loading JSON files from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, PlacesError> {
        let data_dir = data_dir.as_ref();

        let pages: Vec<TextSearchResponse> = load_json(&data_dir.join("textsearch.json"))?
            .ok_or_else(|| {
                PlacesError::Fixture(format!("no textsearch.json in {}", data_dir.display()))
            })?;

        if pages.is_empty() {
            return Err(PlacesError::Fixture(format!(
                "textsearch.json in {} has no pages",
                data_dir.display()
            )));
        }

        let details = load_json(&data_dir.join("details.json"))?.unwrap_or_default();
        let regions = load_json(&data_dir.join("autocomplete.json"))?;

        Ok(Self {
            pages: Arc::new(pages),
            details: Arc::new(details),
            regions: Arc::new(regions),
            cursor_warmup: 0,
            cursor_hits: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// Simulate cursors that are not active for the first `requests` uses.
    pub fn with_cursor_warmup(mut self, requests: u32) -> Self {
        self.cursor_warmup = requests;
        self
    }

    /// Number of pages in the fixture chain.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns true while `cursor` is still inside its warm-up window.
    fn cursor_warming(&self, cursor: &str) -> bool {
        if self.cursor_warmup == 0 {
            return false;
        }

        let mut hits = self
            .cursor_hits
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let seen = hits.entry(cursor.to_string()).or_insert(0);
        *seen += 1;
        *seen <= self.cursor_warmup
    }
}

impl PlaceProvider for MockPlacesClient {
    async fn text_search(
        &self,
        _query: &str,
        cursor: Option<&str>,
    ) -> Result<ProviderPage, PlacesError> {
        let index = match cursor {
            None => 0,
            Some(cursor) => {
                // The page after the one that issued this cursor.
                let issued_by = self
                    .pages
                    .iter()
                    .position(|p| p.next_page_token.as_deref() == Some(cursor));

                match issued_by {
                    Some(i) if i + 1 < self.pages.len() && !self.cursor_warming(cursor) => i + 1,
                    _ => return Ok(ProviderPage::empty(SearchStatus::InvalidRequest)),
                }
            }
        };

        Ok(convert_text_search(self.pages[index].clone()))
    }

    async fn place_details(
        &self,
        place_id: &str,
        _fields: &[&str],
    ) -> Result<PlaceDetail, PlacesError> {
        self.details
            .get(place_id)
            .cloned()
            .map(convert_details)
            .ok_or_else(|| PlacesError::NotFound(place_id.to_string()))
    }

    async fn region_autocomplete(&self, input: &str) -> Result<Vec<RegionPrediction>, PlacesError> {
        let Some(regions) = &*self.regions else {
            return Ok(Vec::new());
        };

        let input = input.trim().to_lowercase();
        let mut response = regions.clone();
        response
            .predictions
            .retain(|p| p.description.to_lowercase().starts_with(&input));

        Ok(convert_predictions(response))
    }

    fn photo_url(&self, photo_reference: &str, max_width: u32) -> String {
        format!(
            "mock://photo?maxwidth={}&photo_reference={}",
            max_width,
            urlencoding::encode(photo_reference)
        )
    }
}

/// Load and parse a JSON file, returning `None` if it does not exist.
fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, PlacesError> {
    if !path.exists() {
        return Ok(None);
    }

    let json = std::fs::read_to_string(path)
        .map_err(|e| PlacesError::Fixture(format!("failed to read {}: {}", path.display(), e)))?;

    serde_json::from_str(&json)
        .map(Some)
        .map_err(|e| PlacesError::Fixture(format!("failed to parse {}: {}", path.display(), e)))
}

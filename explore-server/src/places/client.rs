//! Places web service HTTP client.
//!
//! Provides async methods for the text search, place details and region
//! autocomplete endpoints, and builds photo URLs. Handles authentication,
//! concurrency limiting, and conversion to domain types.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::trace;

use crate::domain::{PlaceDetail, ProviderPage, RegionPrediction, SearchStatus};

use super::convert::{convert_details, convert_predictions, convert_text_search};
use super::error::PlacesError;
use super::provider::PlaceProvider;
use super::types::{AutocompleteResponse, DetailsResponse, TextSearchResponse};

/// Default base URL for the Places web service.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 10;

/// Configuration for the places client.
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PlacesConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Places API client.
///
/// Uses a semaphore to limit concurrent requests, which keeps a page's
/// detail fan-out from tripping the provider's rate limit.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl PlacesClient {
    /// Create a new places client with the given configuration.
    pub fn new(config: PlacesConfig) -> Result<Self, PlacesError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// GET `url` with the API key appended and decode the JSON body.
    ///
    /// `url` may already carry an encoded query string.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, PlacesError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| PlacesError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        trace!(url, "places request");

        let response = self
            .http
            .get(url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(PlacesError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PlacesError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlacesError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| PlacesError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl PlaceProvider for PlacesClient {
    async fn text_search(
        &self,
        query: &str,
        cursor: Option<&str>,
    ) -> Result<ProviderPage, PlacesError> {
        // The query is pre-encoded, so it goes into the URL verbatim.
        let url = format!("{}/textsearch/json?query={}", self.base_url, query);

        let params: Vec<(&str, &str)> = cursor.map(|c| ("pagetoken", c)).into_iter().collect();

        let response: TextSearchResponse = self.get_json(&url, &params).await?;
        Ok(convert_text_search(response))
    }

    async fn place_details(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> Result<PlaceDetail, PlacesError> {
        let url = format!("{}/details/json", self.base_url);
        let fields = fields.join(",");

        let response: DetailsResponse = self
            .get_json(&url, &[("place_id", place_id), ("fields", fields.as_str())])
            .await?;

        match SearchStatus::parse(&response.status) {
            SearchStatus::Ok => {}
            SearchStatus::NotFound | SearchStatus::InvalidRequest => {
                return Err(PlacesError::NotFound(place_id.to_string()));
            }
            other => {
                return Err(PlacesError::Status {
                    status: other.to_string(),
                    message: response.error_message,
                });
            }
        }

        response
            .result
            .map(convert_details)
            .ok_or_else(|| PlacesError::NotFound(place_id.to_string()))
    }

    async fn region_autocomplete(&self, input: &str) -> Result<Vec<RegionPrediction>, PlacesError> {
        let url = format!("{}/autocomplete/json", self.base_url);

        let response: AutocompleteResponse = self
            .get_json(&url, &[("input", input), ("types", "(regions)")])
            .await?;

        let status = SearchStatus::parse(&response.status);
        if !status.is_success() {
            return Err(PlacesError::Status {
                status: status.to_string(),
                message: response.error_message,
            });
        }

        Ok(convert_predictions(response))
    }

    fn photo_url(&self, photo_reference: &str, max_width: u32) -> String {
        format!(
            "{}/photo?maxwidth={}&photo_reference={}&key={}",
            self.base_url,
            max_width,
            urlencoding::encode(photo_reference),
            urlencoding::encode(&self.api_key),
        )
    }
}

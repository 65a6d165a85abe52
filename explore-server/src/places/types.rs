//! Places web service response DTOs.
//!
//! These types map directly to the JSON responses of the text search,
//! place details and autocomplete endpoints. Optional fields are common:
//! the service omits fields it has no data for.

use serde::{Deserialize, Serialize};

/// Response from `textsearch/json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextSearchResponse {
    /// `OK`, `ZERO_RESULTS`, `INVALID_REQUEST`, ...
    pub status: String,

    #[serde(default)]
    pub results: Vec<PlaceResult>,

    /// Cursor for the next page. Not usable for a short while after issue.
    pub next_page_token: Option<String>,

    pub error_message: Option<String>,
}

/// A place in a text-search response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaceResult {
    pub place_id: String,
    pub name: String,
    pub formatted_address: Option<String>,
    pub geometry: Option<Geometry>,
    pub rating: Option<f64>,
    pub photos: Option<Vec<Photo>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Photo metadata. Only the reference is needed to build a photo URL.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Photo {
    pub photo_reference: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// Response from `details/json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetailsResponse {
    pub status: String,
    pub result: Option<PlaceDetailsResult>,
    pub error_message: Option<String>,
}

/// The `result` object of a details response, limited to requested fields.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlaceDetailsResult {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub international_phone_number: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    pub rating: Option<f64>,
    pub photos: Option<Vec<Photo>>,
}

/// Response from `autocomplete/json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AutocompleteResponse {
    pub status: String,

    #[serde(default)]
    pub predictions: Vec<Prediction>,

    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Prediction {
    pub description: String,
    pub place_id: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_search_parses_minimal_page() {
        let json = r#"{
            "status": "OK",
            "results": [
                {
                    "place_id": "ChIJ1",
                    "name": "Shoe Palace",
                    "formatted_address": "New Road, Kathmandu",
                    "geometry": { "location": { "lat": 27.70, "lng": 85.31 } },
                    "photos": [{ "photo_reference": "ref-1", "height": 400, "width": 600 }]
                },
                { "place_id": "ChIJ2", "name": "Bare Result" }
            ],
            "next_page_token": "token-2"
        }"#;

        let page: TextSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.status, "OK");
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.next_page_token.as_deref(), Some("token-2"));
        assert!(page.results[1].geometry.is_none());
    }

    #[test]
    fn missing_results_default_to_empty() {
        let page: TextSearchResponse =
            serde_json::from_str(r#"{ "status": "INVALID_REQUEST" }"#).unwrap();
        assert!(page.results.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn details_parses_phone_fields() {
        let json = r#"{
            "status": "OK",
            "result": {
                "name": "Shoe Palace",
                "formatted_phone_number": "01-4412345",
                "international_phone_number": "+977 1-4412345",
                "types": ["shoe_store", "store"]
            }
        }"#;

        let details: DetailsResponse = serde_json::from_str(json).unwrap();
        let result = details.result.unwrap();
        assert_eq!(result.formatted_phone_number.as_deref(), Some("01-4412345"));
        assert_eq!(result.types.len(), 2);
        assert!(result.photos.is_none());
    }
}

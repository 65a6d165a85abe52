//! Conversion from places DTOs to domain types.

use crate::domain::{
    PAGE_SIZE, PlaceDetail, PlaceSummary, ProviderPage, RegionPrediction, SearchStatus,
};

use super::types::{
    AutocompleteResponse, Photo, PlaceDetailsResult, PlaceResult, TextSearchResponse,
};

/// Convert a text-search response into a page, keeping at most
/// [`PAGE_SIZE`] results.
pub fn convert_text_search(response: TextSearchResponse) -> ProviderPage {
    let results = response
        .results
        .into_iter()
        .take(PAGE_SIZE)
        .map(convert_place)
        .collect();

    ProviderPage {
        status: SearchStatus::parse(&response.status),
        results,
        next_cursor: response.next_page_token.filter(|t| !t.is_empty()),
    }
}

fn convert_place(place: PlaceResult) -> PlaceSummary {
    let location = place.geometry.map(|g| g.location);

    PlaceSummary {
        id: place.place_id,
        name: place.name,
        address: place.formatted_address.unwrap_or_default(),
        lat: location.map(|l| l.lat),
        lng: location.map(|l| l.lng),
        rating: place.rating,
        raw_photo_ref: first_photo(place.photos),
    }
}

/// Convert the `result` object of a details response.
pub fn convert_details(result: PlaceDetailsResult) -> PlaceDetail {
    PlaceDetail {
        name: result.name,
        address: result.formatted_address,
        phone: result.formatted_phone_number,
        international_phone: result.international_phone_number,
        types: result.types,
        rating: result.rating,
        photo_ref: first_photo(result.photos),
    }
}

/// Convert autocomplete predictions.
pub fn convert_predictions(response: AutocompleteResponse) -> Vec<RegionPrediction> {
    response
        .predictions
        .into_iter()
        .map(|p| RegionPrediction {
            place_id: p.place_id,
            description: p.description,
            types: p.types,
        })
        .collect()
}

fn first_photo(photos: Option<Vec<Photo>>) -> Option<String> {
    photos?
        .into_iter()
        .map(|p| p.photo_reference)
        .find(|r| !r.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::places::types::{Geometry, LatLng};

    fn place(id: &str) -> PlaceResult {
        PlaceResult {
            place_id: id.to_string(),
            name: format!("Place {id}"),
            formatted_address: None,
            geometry: None,
            rating: None,
            photos: None,
        }
    }

    #[test]
    fn page_truncated_to_page_size() {
        let response = TextSearchResponse {
            status: "OK".into(),
            results: (0..25).map(|i| place(&i.to_string())).collect(),
            next_page_token: Some("next".into()),
            error_message: None,
        };

        let page = convert_text_search(response);
        assert_eq!(page.results.len(), PAGE_SIZE);
        assert_eq!(page.status, SearchStatus::Ok);
        assert_eq!(page.next_cursor.as_deref(), Some("next"));
    }

    #[test]
    fn empty_token_is_no_cursor() {
        let response = TextSearchResponse {
            status: "ZERO_RESULTS".into(),
            results: vec![],
            next_page_token: Some(String::new()),
            error_message: None,
        };

        let page = convert_text_search(response);
        assert_eq!(page.status, SearchStatus::ZeroResults);
        assert_eq!(page.next_cursor, None);
    }

    #[test]
    fn summary_takes_geometry_and_first_photo() {
        let mut p = place("a");
        p.geometry = Some(Geometry {
            location: LatLng {
                lat: 27.7,
                lng: 85.3,
            },
        });
        p.photos = Some(vec![
            Photo {
                photo_reference: "first".into(),
                height: None,
                width: None,
            },
            Photo {
                photo_reference: "second".into(),
                height: None,
                width: None,
            },
        ]);

        let summary = convert_place(p);
        assert_eq!(summary.lat, Some(27.7));
        assert_eq!(summary.lng, Some(85.3));
        assert_eq!(summary.raw_photo_ref.as_deref(), Some("first"));
        assert_eq!(summary.address, "");
    }

    #[test]
    fn details_map_phone_fields() {
        let detail = convert_details(PlaceDetailsResult {
            formatted_phone_number: Some("01-4412345".into()),
            international_phone_number: Some("+977 1-4412345".into()),
            ..PlaceDetailsResult::default()
        });

        assert_eq!(detail.phone.as_deref(), Some("01-4412345"));
        assert_eq!(detail.international_phone.as_deref(), Some("+977 1-4412345"));
        assert_eq!(detail.photo_ref, None);
    }
}

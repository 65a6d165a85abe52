//! Place records: search summaries, detail lookups, and their merge.

use serde::{Serialize, Serializer};

/// Shown in place of a phone number (or rating) the provider did not supply.
pub const NOT_AVAILABLE: &str = "N/A";

/// A place as listed in a text-search result page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceSummary {
    /// Provider place ID, used for the detail lookup.
    pub id: String,
    pub name: String,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub rating: Option<f64>,
    /// Photo reference from the list response, if any.
    pub raw_photo_ref: Option<String>,
}

impl PlaceSummary {
    /// Create a summary with no coordinates, rating or photo.
    pub fn new(id: impl Into<String>, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            lat: None,
            lng: None,
            rating: None,
            raw_photo_ref: None,
        }
    }
}

/// The result of a per-place detail lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceDetail {
    pub name: Option<String>,
    pub address: Option<String>,
    /// Local-format phone number.
    pub phone: Option<String>,
    pub international_phone: Option<String>,
    pub types: Vec<String>,
    pub rating: Option<f64>,
    pub photo_ref: Option<String>,
}

/// A summary merged with its detail lookup (or its fallback).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedResult {
    pub id: String,
    pub name: String,
    pub address: String,
    /// `None` renders as `"N/A"`.
    #[serde(serialize_with = "or_not_available")]
    pub phone: Option<String>,
    pub types: Vec<String>,
    pub rating: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub photo_ref: Option<String>,
    /// Whether the detail lookup succeeded.
    pub detailed: bool,
}

impl EnrichedResult {
    /// Merge a summary with its detail.
    ///
    /// Phone prefers the local format, then the international one; only a
    /// missing or empty number falls through. Photo
    /// prefers the detail reference, then the list reference. Name and
    /// address come from the detail unless it left them blank.
    pub fn merge(summary: &PlaceSummary, detail: PlaceDetail) -> Self {
        let phone = non_empty(detail.phone).or_else(|| non_empty(detail.international_phone));

        Self {
            id: summary.id.clone(),
            name: non_blank(detail.name).unwrap_or_else(|| summary.name.clone()),
            address: non_blank(detail.address).unwrap_or_else(|| summary.address.clone()),
            phone,
            types: detail.types,
            rating: detail.rating.or(summary.rating),
            lat: summary.lat,
            lng: summary.lng,
            photo_ref: detail.photo_ref.or_else(|| summary.raw_photo_ref.clone()),
            detailed: true,
        }
    }

    /// Build a result from the summary alone, used when the detail lookup
    /// failed.
    pub fn fallback(summary: &PlaceSummary) -> Self {
        Self {
            id: summary.id.clone(),
            name: summary.name.clone(),
            address: summary.address.clone(),
            phone: None,
            types: Vec::new(),
            rating: summary.rating,
            lat: summary.lat,
            lng: summary.lng,
            photo_ref: summary.raw_photo_ref.clone(),
            detailed: false,
        }
    }

    /// The phone number, or `"N/A"`.
    pub fn phone_or_na(&self) -> &str {
        self.phone.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn has_phone(&self) -> bool {
        self.phone.is_some()
    }

    /// A Google Maps link for the place's coordinates, when known.
    pub fn maps_url(&self) -> Option<String> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(format!("https://www.google.com/maps?q={lat},{lng}")),
            _ => None,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn or_not_available<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(value.as_deref().unwrap_or(NOT_AVAILABLE))
}

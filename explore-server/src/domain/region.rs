//! Region autocomplete predictions.

use serde::Serialize;

/// Provider type tag for country-level regions.
pub const COUNTRY_TYPE: &str = "country";

/// A raw region prediction from the autocomplete capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPrediction {
    pub place_id: String,
    pub description: String,
    pub types: Vec<String>,
}

impl RegionPrediction {
    pub fn is_country(&self) -> bool {
        self.types.iter().any(|t| t == COUNTRY_TYPE)
    }
}

/// A country candidate offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryPrediction {
    pub id: String,
    pub description: String,
}

impl From<RegionPrediction> for CountryPrediction {
    fn from(p: RegionPrediction) -> Self {
        Self {
            id: p.place_id,
            description: p.description,
        }
    }
}

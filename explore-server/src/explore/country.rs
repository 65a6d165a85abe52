//! Country name resolution for the location inputs.

use tracing::{debug, warn};

use crate::domain::CountryPrediction;
use crate::places::PlaceProvider;

/// Resolve a partial country name to country-level candidates.
///
/// Prefixes shorter than `min_chars` resolve to nothing without a request.
/// Provider failures also resolve to nothing: country suggestions must
/// never block a search.
pub async fn resolve_countries<P: PlaceProvider>(
    provider: &P,
    prefix: &str,
    min_chars: usize,
) -> Vec<CountryPrediction> {
    let prefix = prefix.trim();
    if prefix.chars().count() < min_chars {
        return Vec::new();
    }

    match provider.region_autocomplete(prefix).await {
        Ok(predictions) => {
            let countries: Vec<CountryPrediction> = predictions
                .into_iter()
                .filter(|p| p.is_country())
                .map(CountryPrediction::from)
                .collect();
            debug!(prefix, countries = countries.len(), "countries resolved");
            countries
        }
        Err(e) => {
            warn!(prefix, error = %e, "region autocomplete failed");
            Vec::new()
        }
    }
}

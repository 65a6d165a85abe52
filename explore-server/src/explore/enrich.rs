//! Concurrent per-place detail lookups.
//!
//! Every summary on a page gets its own detail lookup. The lookups run
//! concurrently and each one is isolated: a failed lookup falls back to the
//! summary instead of failing the page.

use futures::future::join_all;
use tracing::debug;

use crate::domain::{EnrichedResult, PlaceDetail, PlaceSummary};
use crate::places::{DETAIL_FIELDS, PlaceProvider};

/// Outcome of one detail lookup. Lookups never fail; they fall back.
#[derive(Debug, Clone)]
pub enum DetailOutcome<'a> {
    Found {
        summary: &'a PlaceSummary,
        detail: PlaceDetail,
    },
    Fallback(&'a PlaceSummary),
}

impl DetailOutcome<'_> {
    pub fn into_result(self) -> EnrichedResult {
        match self {
            DetailOutcome::Found { summary, detail } => EnrichedResult::merge(summary, detail),
            DetailOutcome::Fallback(summary) => EnrichedResult::fallback(summary),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DetailOutcome::Fallback(_))
    }
}

/// Fans out detail lookups for a page of summaries.
pub struct DetailEnricher<'a, P: PlaceProvider> {
    provider: &'a P,
    fields: &'a [&'a str],
}

impl<'a, P: PlaceProvider> DetailEnricher<'a, P> {
    /// Create an enricher requesting [`DETAIL_FIELDS`].
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            fields: DETAIL_FIELDS,
        }
    }

    /// Request a different field set.
    pub fn with_fields(mut self, fields: &'a [&'a str]) -> Self {
        self.fields = fields;
        self
    }

    /// Look up one summary's detail, falling back on any error.
    async fn lookup<'s>(&self, summary: &'s PlaceSummary) -> DetailOutcome<'s> {
        match self.provider.place_details(&summary.id, self.fields).await {
            Ok(detail) => DetailOutcome::Found { summary, detail },
            Err(e) => {
                debug!(
                    place_id = %summary.id,
                    error = %e,
                    "detail lookup failed, using summary"
                );
                DetailOutcome::Fallback(summary)
            }
        }
    }

    /// Enrich every summary.
    ///
    /// Resolves once all lookups have finished. The output has one entry per
    /// summary, in input order, whatever order the lookups complete in.
    pub async fn enrich(&self, summaries: &[PlaceSummary]) -> Vec<EnrichedResult> {
        let outcomes = join_all(summaries.iter().map(|s| self.lookup(s))).await;

        let fallbacks = outcomes.iter().filter(|o| o.is_fallback()).count();
        if fallbacks > 0 {
            debug!(
                total = outcomes.len(),
                fallbacks, "page enriched with fallbacks"
            );
        }

        outcomes
            .into_iter()
            .map(DetailOutcome::into_result)
            .collect()
    }
}

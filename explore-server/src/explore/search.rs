//! Single-page text search with cursor activation retry.

use tracing::debug;

use crate::domain::{ProviderPage, SearchQuery};
use crate::places::PlaceProvider;

use super::error::ExploreError;
use super::retry::RetryPolicy;

/// Executes one page of the provider's text search.
pub struct SearchOrchestrator<'a, P: PlaceProvider> {
    provider: &'a P,
    retry: &'a RetryPolicy,
}

impl<'a, P: PlaceProvider> SearchOrchestrator<'a, P> {
    /// Create a new orchestrator.
    pub fn new(provider: &'a P, retry: &'a RetryPolicy) -> Self {
        Self { provider, retry }
    }

    /// Fetch one page.
    ///
    /// Without a cursor (or with the empty sentinel) this is a single call
    /// whose page is returned verbatim, whatever its status. With a cursor
    /// the identical request is retried under the [`RetryPolicy`], and the
    /// last page is returned if the cursor never becomes ready.
    pub async fn fetch_page(
        &self,
        query: &SearchQuery,
        cursor: Option<&str>,
    ) -> Result<ProviderPage, ExploreError> {
        let encoded = query.encoded();

        let page = match cursor.filter(|c| !c.is_empty()) {
            None => {
                debug!(query = %query, "text search");
                self.provider.text_search(&encoded, None).await?
            }
            Some(cursor) => {
                debug!(query = %query, "text search with cursor");
                self.retry
                    .run(|_| self.provider.text_search(&encoded, Some(cursor)))
                    .await?
            }
        };

        debug!(
            status = %page.status,
            results = page.results.len(),
            has_next = page.next_cursor.is_some(),
            "page fetched"
        );

        Ok(page)
    }
}

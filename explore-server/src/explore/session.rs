//! Explore session controller.
//!
//! Owns everything one user's explore view needs between requests: the
//! session state, the cursor history, the last query, the sort mode and the
//! current page of results. Every transition goes through this type.
//!
//! Overlapping searches are resolved last-request-wins: each fetch cycle is
//! tagged with a generation number and only applied if no newer cycle has
//! started by the time it completes. Pagination is serialized instead: it
//! is rejected while a cycle is in flight. A cycle whose future is dropped
//! part way through leaves the session as it was before the cycle began.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::domain::{EnrichedResult, SearchQuery, SearchStatus, SortMode};
use crate::places::PlaceProvider;

use super::config::ExploreConfig;
use super::enrich::DetailEnricher;
use super::error::ExploreError;
use super::pagination::PageTokenStack;
use super::rank::rank_results;
use super::search::SearchOrchestrator;

/// Whether a fetch cycle is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Searching,
}

/// Snapshot of the session's current page.
#[derive(Debug, Clone)]
pub struct PageView {
    /// Generation of the cycle that produced this page.
    pub generation: u64,
    pub query: Option<SearchQuery>,
    /// Zero-based page number.
    pub page_index: usize,
    pub has_next: bool,
    pub has_previous: bool,
    /// Provider status of the page; `None` if the provider could not be
    /// reached.
    pub status: Option<SearchStatus>,
    pub sort_mode: SortMode,
    /// Results ranked by `sort_mode`.
    pub results: Vec<EnrichedResult>,
}

impl PageView {
    /// True when the page did not come back `OK`/`ZERO_RESULTS`.
    pub fn is_degraded(&self) -> bool {
        !self.status.as_ref().is_some_and(SearchStatus::is_success)
    }
}

/// Result of a fetch cycle.
#[derive(Debug, Clone)]
pub enum PageOutcome {
    /// The cycle's page is now the session's current page.
    Applied(PageView),
    /// A newer cycle started before this one completed; its page was
    /// discarded.
    Superseded { generation: u64 },
}

impl PageOutcome {
    pub fn applied(self) -> Option<PageView> {
        match self {
            PageOutcome::Applied(view) => Some(view),
            PageOutcome::Superseded { .. } => None,
        }
    }
}

/// What one fetch-enrich cycle produced, before ranking.
struct Cycle {
    status: SearchStatus,
    next_cursor: Option<String>,
    results: Vec<EnrichedResult>,
}

#[derive(Debug, Default)]
struct Inner {
    searching: bool,
    generation: u64,
    tokens: PageTokenStack,
    /// Cursor returned by the last applied page; consumed by `next_page`.
    next_cursor: Option<String>,
    last_query: Option<SearchQuery>,
    sort_mode: SortMode,
    status: Option<SearchStatus>,
    /// Results in provider order.
    results: Vec<EnrichedResult>,
}

impl Inner {
    /// Enter `Searching` under a fresh generation.
    fn begin(&mut self) -> u64 {
        self.searching = true;
        self.generation += 1;
        self.generation
    }

    fn ensure_idle(&self) -> Result<(), ExploreError> {
        if self.searching {
            Err(ExploreError::SessionBusy)
        } else {
            Ok(())
        }
    }

    fn query(&self) -> Result<SearchQuery, ExploreError> {
        self.last_query.clone().ok_or(ExploreError::NoSearch)
    }

    fn view(&self) -> PageView {
        PageView {
            generation: self.generation,
            query: self.last_query.clone(),
            page_index: self.tokens.current_index(),
            has_next: self.next_cursor.is_some(),
            has_previous: self.tokens.can_go_back(),
            status: self.status.clone(),
            sort_mode: self.sort_mode,
            results: rank_results(self.results.clone(), self.sort_mode),
        }
    }
}

/// Pagination state a cancelled cycle restores.
#[derive(Debug)]
struct Rollback {
    tokens: PageTokenStack,
    next_cursor: Option<String>,
    last_query: Option<SearchQuery>,
    sort_mode: SortMode,
}

impl Rollback {
    fn capture(inner: &Inner) -> Self {
        Self {
            tokens: inner.tokens.clone(),
            next_cursor: inner.next_cursor.clone(),
            last_query: inner.last_query.clone(),
            sort_mode: inner.sort_mode,
        }
    }

    fn restore(self, inner: &mut Inner) {
        inner.tokens = self.tokens;
        inner.next_cursor = self.next_cursor;
        inner.last_query = self.last_query;
        inner.sort_mode = self.sort_mode;
    }
}

/// Held for the duration of a fetch cycle.
///
/// If the cycle's future is dropped before `finish` (for example when the
/// client disconnects), the session returns to `Idle` with the pagination
/// state it had before the cycle started. A newer cycle is left alone.
struct CycleGuard<'a> {
    inner: &'a Mutex<Inner>,
    generation: u64,
    rollback: Option<Rollback>,
}

impl CycleGuard<'_> {
    /// The cycle reached `finish`; nothing to undo.
    fn disarm(mut self) -> u64 {
        self.rollback = None;
        self.generation
    }
}

impl Drop for CycleGuard<'_> {
    fn drop(&mut self) {
        let Some(rollback) = self.rollback.take() else {
            return;
        };

        let mut inner = lock(self.inner);
        if inner.generation != self.generation {
            return;
        }

        debug!(generation = self.generation, "fetch cycle cancelled");
        inner.searching = false;
        rollback.restore(&mut inner);
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// One user's explore session.
pub struct ExploreSession<P: PlaceProvider> {
    provider: Arc<P>,
    config: Arc<ExploreConfig>,
    inner: Mutex<Inner>,
}

impl<P: PlaceProvider> ExploreSession<P> {
    /// Create an idle session with no search.
    pub fn new(provider: Arc<P>, config: Arc<ExploreConfig>) -> Self {
        Self {
            provider,
            config,
            inner: Mutex::new(Inner::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        lock(&self.inner)
    }

    /// Enter `Searching` under a fresh generation, remembering what to
    /// restore if the cycle is cancelled.
    fn begin(&self, inner: &mut Inner, rollback: Rollback) -> CycleGuard<'_> {
        CycleGuard {
            inner: &self.inner,
            generation: inner.begin(),
            rollback: Some(rollback),
        }
    }

    /// Start a new search, resetting pagination to the first page.
    ///
    /// Allowed while another cycle is in flight; the newest search wins.
    pub async fn search(&self, query: SearchQuery, mode: SortMode) -> PageOutcome {
        let guard = {
            let mut inner = self.lock();
            let rollback = Rollback::capture(&inner);
            inner.tokens.reset();
            inner.next_cursor = None;
            inner.last_query = Some(query.clone());
            inner.sort_mode = mode;
            self.begin(&mut inner, rollback)
        };

        info!(query = %query, generation = guard.generation, sort = %mode, "explore search");

        let fetched = self.run_cycle(&query, None).await;
        self.finish(guard, fetched)
    }

    /// Fetch the page after the current one.
    pub async fn next_page(&self) -> Result<PageOutcome, ExploreError> {
        let (guard, query, cursor) = {
            let mut inner = self.lock();
            inner.ensure_idle()?;
            let query = inner.query()?;
            let rollback = Rollback::capture(&inner);
            let cursor = inner.next_cursor.take().ok_or(ExploreError::NoNextPage)?;
            inner.tokens.record_forward(cursor.clone());
            (self.begin(&mut inner, rollback), query, cursor)
        };

        debug!(generation = guard.generation, "explore next page");

        let fetched = self.run_cycle(&query, Some(&cursor)).await;
        Ok(self.finish(guard, fetched))
    }

    /// Re-fetch the page before the current one with its original cursor.
    pub async fn previous_page(&self) -> Result<PageOutcome, ExploreError> {
        let (guard, query, cursor) = {
            let mut inner = self.lock();
            inner.ensure_idle()?;
            let query = inner.query()?;
            let rollback = Rollback::capture(&inner);
            let cursor = inner
                .tokens
                .step_back()
                .ok_or(ExploreError::NoPreviousPage)?
                .to_string();
            inner.next_cursor = None;
            (self.begin(&mut inner, rollback), query, cursor)
        };

        debug!(generation = guard.generation, "explore previous page");

        let fetched = self.run_cycle(&query, Some(&cursor)).await;
        Ok(self.finish(guard, fetched))
    }

    /// Change the sort mode and re-rank the current page. No request is
    /// made.
    pub fn set_sort_mode(&self, mode: SortMode) -> PageView {
        let mut inner = self.lock();
        inner.sort_mode = mode;
        inner.view()
    }

    /// The current page.
    pub fn view(&self) -> PageView {
        self.lock().view()
    }

    pub fn state(&self) -> SessionState {
        if self.lock().searching {
            SessionState::Searching
        } else {
            SessionState::Idle
        }
    }

    /// Generation of the most recently started cycle.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Fetch, truncate and enrich one page.
    async fn run_cycle(
        &self,
        query: &SearchQuery,
        cursor: Option<&str>,
    ) -> Result<Cycle, ExploreError> {
        let provider = self.provider.as_ref();

        let mut page = SearchOrchestrator::new(provider, &self.config.retry)
            .fetch_page(query, cursor)
            .await?;
        page.results.truncate(self.config.page_size);

        let results = DetailEnricher::new(provider).enrich(&page.results).await;

        Ok(Cycle {
            status: page.status,
            next_cursor: page.next_cursor,
            results,
        })
    }

    /// Apply a finished cycle if it is still the newest one.
    fn finish(&self, guard: CycleGuard<'_>, fetched: Result<Cycle, ExploreError>) -> PageOutcome {
        let generation = guard.disarm();
        let mut inner = self.lock();

        if inner.generation != generation {
            debug!(
                generation,
                current = inner.generation,
                "discarding superseded page"
            );
            return PageOutcome::Superseded { generation };
        }

        inner.searching = false;

        match fetched {
            Ok(cycle) => {
                if !cycle.status.is_success() {
                    warn!(status = %cycle.status, "degraded page");
                }
                inner.status = Some(cycle.status);
                inner.next_cursor = cycle.next_cursor;
                inner.results = cycle.results;
            }
            Err(e) => {
                warn!(error = %e, "search failed, showing no results");
                inner.status = None;
                inner.next_cursor = None;
                inner.results.clear();
            }
        }

        PageOutcome::Applied(inner.view())
    }
}

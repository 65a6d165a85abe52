//! Bounded retry around cursor-based page fetches.
//!
//! A page cursor is causally dependent on the previous page having
//! completed on the provider's side, so for a short window after issue the
//! provider answers `INVALID_REQUEST`. The policy re-issues the identical
//! request at a fixed interval until the status is terminal or the attempt
//! budget runs out. The budget is the latency ceiling the UI tolerates.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{ProviderPage, SearchStatus};

/// Default number of attempts for a cursor fetch.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;

/// Default delay between attempts.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Retry policy for cursor fetches.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero is treated as one.
    pub max_attempts: u32,

    /// Fixed delay between consecutive attempts.
    pub interval: Duration,

    /// Whether a status ends the retry loop.
    pub is_terminal: fn(&SearchStatus) -> bool,
}

impl RetryPolicy {
    /// Create a policy that retries only while the cursor answers
    /// `INVALID_REQUEST`.
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
            is_terminal: cursor_settled,
        }
    }

    /// Set the terminal-status predicate.
    pub fn with_terminal(mut self, is_terminal: fn(&SearchStatus) -> bool) -> Self {
        self.is_terminal = is_terminal;
        self
    }

    /// Run `fetch` until it yields a terminal status or attempts run out.
    ///
    /// `fetch` receives the 1-based attempt number. An `Err` ends the loop
    /// immediately. When attempts run out the last page is returned
    /// unchanged; callers treat it as a degraded page.
    pub async fn run<E, F, Fut>(&self, mut fetch: F) -> Result<ProviderPage, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<ProviderPage, E>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            let page = fetch(attempt).await?;

            if (self.is_terminal)(&page.status) {
                return Ok(page);
            }

            if attempt >= max_attempts {
                warn!(
                    attempts = attempt,
                    status = %page.status,
                    "cursor never became ready, returning last page"
                );
                return Ok(page);
            }

            debug!(
                attempt,
                status = %page.status,
                delay_ms = self.interval.as_millis() as u64,
                "cursor not ready, retrying"
            );
            tokio::time::sleep(self.interval).await;
            attempt += 1;
        }
    }
}

/// Default terminal predicate. `INVALID_REQUEST` is what a cursor answers
/// before it becomes usable; every other status is final.
pub fn cursor_settled(status: &SearchStatus) -> bool {
    *status != SearchStatus::InvalidRequest
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    fn page(status: SearchStatus) -> ProviderPage {
        ProviderPage::empty(status)
    }

    #[tokio::test(start_paused = true)]
    async fn stops_on_first_success() {
        let calls = AtomicU32::new(0);
        let start = Instant::now();

        let result: Result<_, ()> = RetryPolicy::default()
            .run(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(page(SearchStatus::Ok)) }
            })
            .await;

        assert_eq!(result.unwrap().status, SearchStatus::Ok);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn retries_until_ready() {
        let calls = AtomicU32::new(0);
        let start = Instant::now();

        let result: Result<_, ()> = RetryPolicy::default()
            .run(|attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 4 {
                        Ok(page(SearchStatus::InvalidRequest))
                    } else {
                        Ok(page(SearchStatus::ZeroResults))
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap().status, SearchStatus::ZeroResults);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(3) && elapsed < Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_returns_last_page() {
        let calls = AtomicU32::new(0);
        let start = Instant::now();

        let result: Result<_, ()> = RetryPolicy::default()
            .run(|attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    Ok(ProviderPage {
                        status: SearchStatus::InvalidRequest,
                        results: Vec::new(),
                        next_cursor: Some(format!("attempt-{attempt}")),
                    })
                }
            })
            .await;

        let page = result.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), DEFAULT_MAX_ATTEMPTS);
        assert_eq!(page.next_cursor.as_deref(), Some("attempt-6"));
        // No sleep after the final attempt.
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(5) && elapsed < Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn error_ends_loop() {
        let calls = AtomicU32::new(0);

        let result = RetryPolicy::default()
            .run(|attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt == 2 {
                        Err("transport down")
                    } else {
                        Ok(page(SearchStatus::InvalidRequest))
                    }
                }
            })
            .await;

        assert_eq!(result, Err("transport down"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn other_failures_are_final() {
        for status in [
            SearchStatus::RequestDenied,
            SearchStatus::OverQueryLimit,
            SearchStatus::UnknownError,
            SearchStatus::Other("ODD".into()),
        ] {
            let calls = AtomicU32::new(0);
            let start = Instant::now();

            let result: Result<_, ()> = RetryPolicy::default()
                .run(|_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    let status = status.clone();
                    async move { Ok(page(status)) }
                })
                .await;

            assert_eq!(result.unwrap().status, status);
            assert_eq!(calls.load(Ordering::SeqCst), 1);
            assert_eq!(start.elapsed(), Duration::ZERO);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn custom_terminal_predicate() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(3, Duration::from_millis(10))
            .with_terminal(SearchStatus::is_success);

        let result: Result<_, ()> = policy
            .run(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(page(SearchStatus::RequestDenied)) }
            })
            .await;

        assert_eq!(result.unwrap().status, SearchStatus::RequestDenied);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_attempts_still_fetches_once() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(0, Duration::from_secs(1));

        let _: Result<_, ()> = policy
            .run(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(page(SearchStatus::InvalidRequest)) }
            })
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

//! Configuration for the explore engine.

use std::time::Duration;

use crate::domain::PAGE_SIZE;

use super::retry::RetryPolicy;

/// Default photo width in pixels.
pub const DEFAULT_PHOTO_MAX_WIDTH: u32 = 400;

/// Configuration parameters for place exploration.
#[derive(Debug, Clone)]
pub struct ExploreConfig {
    /// Retry policy for cursor-based page fetches.
    pub retry: RetryPolicy,

    /// Maximum number of results used from one page.
    pub page_size: usize,

    /// Photo width requested when building photo URLs.
    pub photo_max_width: u32,

    /// Shortest country prefix that is sent to the provider.
    /// Shorter prefixes resolve to nothing without a request.
    pub country_min_chars: usize,
}

impl ExploreConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        retry: RetryPolicy,
        page_size: usize,
        photo_max_width: u32,
        country_min_chars: usize,
    ) -> Self {
        Self {
            retry,
            page_size,
            photo_max_width,
            country_min_chars,
        }
    }

    /// Replace the retry policy's attempt budget and interval.
    pub fn with_retry(mut self, max_attempts: u32, interval: Duration) -> Self {
        self.retry.max_attempts = max_attempts;
        self.retry.interval = interval;
        self
    }

    /// Worst-case time spent waiting between cursor attempts.
    pub fn max_retry_wait(&self) -> Duration {
        self.retry.interval * self.retry.max_attempts.saturating_sub(1)
    }
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            page_size: PAGE_SIZE,
            photo_max_width: DEFAULT_PHOTO_MAX_WIDTH,
            country_min_chars: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ExploreConfig::default();

        assert_eq!(config.retry.max_attempts, 6);
        assert_eq!(config.retry.interval, Duration::from_secs(1));
        assert_eq!(config.page_size, 20);
        assert_eq!(config.photo_max_width, 400);
        assert_eq!(config.country_min_chars, 2);
    }

    #[test]
    fn retry_ceiling() {
        let config = ExploreConfig::default();
        assert_eq!(config.max_retry_wait(), Duration::from_secs(5));

        let config = config.with_retry(3, Duration::from_millis(250));
        assert_eq!(config.max_retry_wait(), Duration::from_millis(500));
    }

    #[test]
    fn custom_config() {
        let config = ExploreConfig::new(RetryPolicy::default(), 10, 800, 3);

        assert_eq!(config.page_size, 10);
        assert_eq!(config.photo_max_width, 800);
        assert_eq!(config.country_min_chars, 3);
    }
}

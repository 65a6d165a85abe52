//! Per-user explore sessions.
//!
//! Each client identifies its explore view with an opaque session id. The
//! session (query, cursor history, current page) lives here between
//! requests and expires after a period of inactivity.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::explore::{ExploreConfig, ExploreSession};
use crate::places::PlaceProvider;

/// Configuration for the session store.
#[derive(Debug, Clone)]
pub struct SessionStoreConfig {
    /// Sessions untouched for this long are dropped.
    pub idle_ttl: Duration,

    /// Maximum number of live sessions.
    pub max_capacity: u64,
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(30 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Explore sessions keyed by session id.
pub struct SessionStore<P: PlaceProvider + 'static> {
    sessions: MokaCache<String, Arc<ExploreSession<P>>>,
    provider: Arc<P>,
    config: Arc<ExploreConfig>,
}

impl<P: PlaceProvider + 'static> SessionStore<P> {
    pub fn new(provider: Arc<P>, config: Arc<ExploreConfig>, store: &SessionStoreConfig) -> Self {
        let sessions = MokaCache::builder()
            .time_to_idle(store.idle_ttl)
            .max_capacity(store.max_capacity)
            .build();

        Self {
            sessions,
            provider,
            config,
        }
    }

    /// The session for `id`, creating an idle one if there is none.
    pub async fn get_or_create(&self, id: &str) -> Arc<ExploreSession<P>> {
        self.sessions
            .get_with(id.to_string(), async {
                Arc::new(ExploreSession::new(
                    self.provider.clone(),
                    self.config.clone(),
                ))
            })
            .await
    }

    /// The session for `id`, if it exists.
    pub async fn get(&self, id: &str) -> Option<Arc<ExploreSession<P>>> {
        self.sessions.get(id).await
    }

    /// Drop the session for `id`.
    pub async fn remove(&self, id: &str) {
        self.sessions.invalidate(id).await;
    }

    pub fn session_count(&self) -> u64 {
        self.sessions.entry_count()
    }
}

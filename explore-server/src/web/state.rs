//! Application state for the web layer.

use std::sync::Arc;

use crate::explore::ExploreConfig;
use crate::places::PlaceProvider;
use crate::sessions::{SessionStore, SessionStoreConfig};

/// Shared application state.
pub struct AppState<P: PlaceProvider + 'static> {
    /// Place provider, shared with every session
    pub provider: Arc<P>,

    /// Explore engine configuration
    pub config: Arc<ExploreConfig>,

    /// Live explore sessions
    pub sessions: Arc<SessionStore<P>>,
}

impl<P: PlaceProvider + 'static> AppState<P> {
    /// Create a new app state.
    pub fn new(provider: P, config: ExploreConfig, store: &SessionStoreConfig) -> Self {
        let provider = Arc::new(provider);
        let config = Arc::new(config);
        let sessions = SessionStore::new(provider.clone(), config.clone(), store);

        Self {
            provider,
            config,
            sessions: Arc::new(sessions),
        }
    }
}

// Derived `Clone` would require `P: Clone`.
impl<P: PlaceProvider + 'static> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            config: self.config.clone(),
            sessions: self.sessions.clone(),
        }
    }
}

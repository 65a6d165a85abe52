//! Place-search aggregation and pagination engine.
//!
//! This module implements the merchant "Explore" search: it queries the
//! place provider one page at a time, follows provider-issued cursors
//! (retrying while a fresh cursor is not yet usable), enriches every result
//! with a concurrent detail lookup, and ranks the page deterministically.
//!
//! [`ExploreSession`] ties the pieces together and owns the per-user state.

mod config;
mod country;
mod enrich;
mod error;
mod pagination;
mod photo;
mod rank;
mod retry;
mod search;
mod session;


pub use config::{DEFAULT_PHOTO_MAX_WIDTH, ExploreConfig};
pub use country::resolve_countries;
pub use enrich::{DetailEnricher, DetailOutcome};
pub use error::ExploreError;
pub use pagination::{PageTokenStack, SENTINEL_CURSOR};
pub use photo::resolve_photo_url;
pub use rank::{is_mobile_like, rank_results};
pub use retry::{DEFAULT_INTERVAL, DEFAULT_MAX_ATTEMPTS, RetryPolicy, cursor_settled};
pub use search::SearchOrchestrator;
pub use session::{ExploreSession, PageOutcome, PageView, SessionState};

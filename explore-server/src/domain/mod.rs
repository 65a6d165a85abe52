//! Domain types for place exploration.
//!
//! Queries, provider pages, place records and ordering modes. Types that
//! carry an invariant (such as a non-empty keyword) enforce it at
//! construction time.

mod page;
mod place;
mod query;
mod region;
mod sort;

pub use page::{PAGE_SIZE, ProviderPage, SearchStatus};
pub use place::{EnrichedResult, NOT_AVAILABLE, PlaceDetail, PlaceSummary};
pub use query::{QueryError, SearchQuery, compose};
pub use region::{COUNTRY_TYPE, CountryPrediction, RegionPrediction};
pub use sort::{InvalidSortMode, SortMode};

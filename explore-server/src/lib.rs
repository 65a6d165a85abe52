//! Place-search aggregation server.
//!
//! Backs the merchant "Explore" view: search places by keyword and
//! location, page through the results, enrich each place with its details
//! and rank the page.

pub mod domain;
pub mod explore;
pub mod places;
pub mod sessions;
pub mod web;

//! Web layer for the explore engine.
//!
//! A thin JSON surface over explore sessions, country autocomplete and
//! photo URLs.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

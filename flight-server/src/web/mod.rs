//! Web layer for the flight route planner.
//!
//! Thin JSON API over the core: airport search, route planning with
//! per-leg estimates, free-text query resolution, and travel advice.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;

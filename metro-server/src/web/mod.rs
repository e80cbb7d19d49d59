//! Web layer for the metro route planner.
//!
//! Thin plumbing around the core: it hands (origin, destination, options)
//! triples to the planner and maps the planner's typed failures onto HTTP
//! statuses.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

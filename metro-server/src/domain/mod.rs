//! Domain types for the metro network.
//!
//! Identifier newtypes, the station record, and the core error taxonomy.

mod error;
mod station;

pub use error::RouteError;
pub use station::{LineId, Station, StationId};

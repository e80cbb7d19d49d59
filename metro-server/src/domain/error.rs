//! Core error types.
//!
//! These are the only failures the route computation itself can raise.
//! The web layer maps them to HTTP statuses; the core never retries them
//! (the computation is deterministic, retrying changes nothing).

use super::StationId;

/// Errors raised by route computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// An endpoint id is not in the station catalog.
    /// Detected before the search begins.
    #[error("station not found: {0}")]
    StationNotFound(StationId),

    /// The search frontier emptied without reaching the destination.
    /// Only possible when the graph is disconnected between the endpoints.
    #[error("no route found from {origin} to {destination}")]
    NoRouteFound {
        origin: StationId,
        destination: StationId,
    },
}

//! Route planner: cost model, A* search, and itinerary assembly.
//!
//! The planner answers: "what is the best route between these two
//! stations, given this rider's preferences?" The network is consulted
//! read-only; all scratch state lives inside the call, so any number of
//! plans may run concurrently.

mod cost;
mod itinerary;
mod search;


pub use cost::{Mobility, RouteOptions, TimeOfDay, edge_cost, is_congested};
pub use itinerary::{RouteResult, RouteSegment};

use crate::domain::{RouteError, StationId};
use crate::network::TransitNetwork;

/// Plan a route from `origin` to `destination` under the given options.
///
/// Both endpoints are validated against the catalog before any search
/// runs; an unknown id fails immediately with
/// [`RouteError::StationNotFound`]. An origin equal to the destination
/// short-circuits to the zero-length reflexive result.
pub fn plan_route(
    network: &TransitNetwork,
    origin_id: &str,
    destination_id: &str,
    options: &RouteOptions,
) -> Result<RouteResult, RouteError> {
    let origin = network
        .station(origin_id)
        .ok_or_else(|| RouteError::StationNotFound(StationId::new(origin_id)))?;
    let destination = network
        .station(destination_id)
        .ok_or_else(|| RouteError::StationNotFound(StationId::new(destination_id)))?;

    if origin.id == destination.id {
        return Ok(RouteResult::reflexive(origin));
    }

    let came_from = search::find_path(network, origin, destination, options)?;
    Ok(itinerary::assemble(network, origin, destination, &came_from, options))
}

//! Itinerary assembly from a search result.
//!
//! Walks the predecessor chain back from the destination, then annotates
//! each traversed edge with its kind, distance, and cost. Costs here are
//! recomputed with the plain cost model — the search's fewer-transfers
//! surcharge is deliberately not part of the reported numbers.

use std::collections::HashMap;

use crate::domain::{LineId, Station, StationId};
use crate::network::{EdgeKind, TransitNetwork};

use super::cost::{self, RouteOptions};

/// One traversed edge of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    /// Originating station.
    pub from: StationId,

    /// Target station.
    pub to: StationId,

    /// Line or transfer; line segments carry the line id.
    pub kind: EdgeKind,

    /// Euclidean length of the segment.
    pub distance: f64,

    /// Traversal cost under the request's options.
    pub cost: f64,
}

/// A complete route between two stations.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Visited stations, origin first, destination last.
    pub path: Vec<StationId>,

    /// One segment per traversed edge.
    pub segments: Vec<RouteSegment>,

    /// Sum of segment distances.
    pub total_distance: f64,

    /// Sum of segment costs.
    pub total_cost: f64,

    /// Number of transfer segments.
    pub transfers: u32,

    /// Distinct lines ridden, in first-use order.
    pub lines_used: Vec<LineId>,
}

impl RouteResult {
    /// The zero-length route for origin == destination: one station, no
    /// segments, zero totals, the station's own line as the only line used.
    pub fn reflexive(station: &Station) -> Self {
        Self {
            path: vec![station.id.clone()],
            segments: Vec::new(),
            total_distance: 0.0,
            total_cost: 0.0,
            transfers: 0,
            lines_used: vec![station.line.clone()],
        }
    }
}

/// Assemble the rider-facing result from a predecessor chain.
///
/// The edge kind of each step is re-derived by a membership test against
/// the network's edge set rather than carried out of the search; a step
/// with no matching edge is treated as a line segment on the origin
/// station's line.
pub fn assemble(
    network: &TransitNetwork,
    origin: &Station,
    destination: &Station,
    came_from: &HashMap<StationId, StationId>,
    options: &RouteOptions,
) -> RouteResult {
    // Walk backward from the destination, then reverse.
    let mut path = vec![destination.id.clone()];
    while path[path.len() - 1] != origin.id {
        match came_from.get(&path[path.len() - 1]) {
            Some(prev) => path.push(prev.clone()),
            None => break,
        }
    }
    path.reverse();

    let mut segments = Vec::with_capacity(path.len().saturating_sub(1));
    let mut total_distance = 0.0;
    let mut total_cost = 0.0;
    let mut transfers = 0u32;
    let mut lines_used: Vec<LineId> = Vec::new();

    for pair in path.windows(2) {
        let (Some(from), Some(to)) = (
            network.station(pair[0].as_str()),
            network.station(pair[1].as_str()),
        ) else {
            continue;
        };

        let kind = match network.edge_between(from.id.as_str(), to.id.as_str()) {
            Some(edge) => edge.kind.clone(),
            None => EdgeKind::Line(from.line.clone()),
        };

        let distance = from.distance_to(to);
        let cost = cost::edge_cost(from, to, &kind, options);

        match &kind {
            EdgeKind::Transfer => transfers += 1,
            EdgeKind::Line(line) => {
                if !lines_used.contains(line) {
                    lines_used.push(line.clone());
                }
            }
        }

        total_distance += distance;
        total_cost += cost;
        segments.push(RouteSegment {
            from: from.id.clone(),
            to: to.id.clone(),
            kind,
            distance,
            cost,
        });
    }

    RouteResult {
        path,
        segments,
        total_distance,
        total_cost,
        transfers,
        lines_used,
    }
}

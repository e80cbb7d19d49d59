//! A* shortest-path search over the transit network.
//!
//! Edge weights come from the cost model; the heuristic is the Euclidean
//! distance to the goal, which the cost model keeps admissible. The search
//! produces a predecessor chain that the itinerary assembler walks into a
//! rider-facing result.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::domain::{RouteError, Station, StationId};
use crate::network::TransitNetwork;

use super::cost::{self, RouteOptions};

/// A frontier entry, ordered by (f-score, transfers so far, station id).
///
/// The station id is the final tie-break so frontier selection is fully
/// deterministic: identical input always yields the identical path.
#[derive(Debug, Clone)]
struct FrontierEntry {
    f_score: f64,
    transfers: u32,
    station: StationId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_score
            .total_cmp(&other.f_score)
            .then_with(|| self.transfers.cmp(&other.transfers))
            .then_with(|| self.station.cmp(&other.station))
    }
}

/// Run A* from `origin` to `goal`, returning the predecessor chain.
///
/// The caller has already validated both endpoints against the catalog and
/// handled the origin == goal case. Scratch state (scores, frontier,
/// predecessors) is local to the call, so concurrent searches over the
/// shared network need no synchronization.
///
/// Fails with [`RouteError::NoRouteFound`] when the frontier empties
/// without reaching the goal.
pub fn find_path(
    network: &TransitNetwork,
    origin: &Station,
    goal: &Station,
    options: &RouteOptions,
) -> Result<HashMap<StationId, StationId>, RouteError> {
    debug!(origin = %origin.id, goal = %goal.id, "starting route search");

    // Absent g/f entries mean +infinity.
    let mut came_from: HashMap<StationId, StationId> = HashMap::new();
    let mut g_score: HashMap<StationId, f64> = HashMap::new();
    let mut f_score: HashMap<StationId, f64> = HashMap::new();
    let mut transfers: HashMap<StationId, u32> = HashMap::new();

    let h_origin = origin.distance_to(goal);
    g_score.insert(origin.id.clone(), 0.0);
    f_score.insert(origin.id.clone(), h_origin);
    transfers.insert(origin.id.clone(), 0);

    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    frontier.push(Reverse(FrontierEntry {
        f_score: h_origin,
        transfers: 0,
        station: origin.id.clone(),
    }));

    let mut expanded = 0usize;

    while let Some(Reverse(entry)) = frontier.pop() {
        // Skip entries superseded by a later relaxation of the same station.
        let superseded = f_score
            .get(&entry.station)
            .is_some_and(|best| entry.f_score > *best);
        if superseded {
            continue;
        }

        if entry.station == goal.id {
            debug!(expanded, "goal reached");
            return Ok(came_from);
        }

        let Some(current) = network.station(entry.station.as_str()) else {
            continue;
        };
        let g_current = g_score.get(&entry.station).copied().unwrap_or(f64::INFINITY);
        let transfers_current = transfers.get(&entry.station).copied().unwrap_or(0);
        expanded += 1;

        for edge in network.neighbors(entry.station.as_str()) {
            let Some(neighbor) = network.station(edge.to.as_str()) else {
                continue;
            };

            // The tie-break term steers selection toward fewer transfers;
            // the itinerary recomputes reported costs without it.
            let step = cost::edge_cost(current, neighbor, &edge.kind, options)
                + cost::search_tie_break(&edge.kind, options);
            let tentative = g_current + step;

            let known = g_score.get(&edge.to).copied().unwrap_or(f64::INFINITY);
            if tentative < known {
                let f = tentative + neighbor.distance_to(goal);
                let t = transfers_current + u32::from(edge.kind.is_transfer());
                trace!(station = %edge.to, g = tentative, f, "relaxed");

                came_from.insert(edge.to.clone(), entry.station.clone());
                g_score.insert(edge.to.clone(), tentative);
                f_score.insert(edge.to.clone(), f);
                transfers.insert(edge.to.clone(), t);
                frontier.push(Reverse(FrontierEntry {
                    f_score: f,
                    transfers: t,
                    station: edge.to.clone(),
                }));
            }
        }
    }

    debug!(expanded, "frontier exhausted without reaching goal");
    Err(RouteError::NoRouteFound {
        origin: origin.id.clone(),
        destination: goal.id.clone(),
    })
}

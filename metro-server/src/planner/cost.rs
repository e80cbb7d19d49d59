//! Edge cost model.
//!
//! A pure function from (edge, rider options) to a non-negative traversal
//! cost. The base cost is always the Euclidean distance between the two
//! endpoints; every adjustment is either a multiplier ≥ 1 or an additive
//! term ≥ 0, so an edge's cost never drops below the straight-line
//! distance. That keeps the search's Euclidean heuristic admissible.

use serde::Deserialize;

use crate::domain::{LineId, Station};
use crate::network::EdgeKind;

/// Lines penalized during peak hours.
const CONGESTED_LINES: [&str; 2] = ["3", "9"];

/// Multiplier applied to transfer edges for riders with reduced mobility.
pub const REDUCED_MOBILITY_FACTOR: f64 = 1.5;

/// Multiplier applied to line edges on congested lines at peak time.
pub const PEAK_CONGESTION_FACTOR: f64 = 1.15;

/// Search-only surcharge on transfer edges when the rider prefers fewer
/// transfers. Biases frontier selection; never reported in segment costs.
pub const TRANSFER_TIE_BREAK: f64 = 0.5;

/// Rider mobility constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mobility {
    #[default]
    Normal,
    Reduced,
}

/// Time of day for congestion modeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Offpeak,
    Peak,
}

/// Rider preferences affecting edge costs.
///
/// Every field is independently defaultable, so a request may supply any
/// subset. Unrecognized mobility or time-of-day strings fail
/// deserialization and are rejected before the search runs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    /// Additional cost added to every transfer edge.
    pub transfer_penalty: f64,

    /// Rider mobility constraint.
    pub mobility: Mobility,

    /// Time of day.
    pub time_of_day: TimeOfDay,

    /// Bias the search toward routes with fewer transfers.
    pub prefer_fewer_transfers: bool,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            transfer_penalty: 5.0,
            mobility: Mobility::Normal,
            time_of_day: TimeOfDay::Offpeak,
            prefer_fewer_transfers: false,
        }
    }
}

/// Whether a line is in the peak-hours congested set.
pub fn is_congested(line: &LineId) -> bool {
    CONGESTED_LINES.contains(&line.as_str())
}

/// Traversal cost of the edge `from → to` under the given options.
///
/// - Transfer: distance + penalty, ×1.5 for reduced mobility.
/// - Line: distance, ×1.15 on congested lines at peak.
pub fn edge_cost(from: &Station, to: &Station, kind: &EdgeKind, options: &RouteOptions) -> f64 {
    let base = from.distance_to(to);
    match kind {
        EdgeKind::Transfer => {
            let mut cost = base + options.transfer_penalty;
            if options.mobility == Mobility::Reduced {
                cost *= REDUCED_MOBILITY_FACTOR;
            }
            cost
        }
        EdgeKind::Line(line) => {
            let mut cost = base;
            if options.time_of_day == TimeOfDay::Peak && is_congested(line) {
                cost *= PEAK_CONGESTION_FACTOR;
            }
            cost
        }
    }
}

/// Extra amount added to the tentative cumulative cost during the search.
///
/// Nonzero only for transfer edges when `prefer_fewer_transfers` is set.
/// This participates in frontier selection but is excluded when the
/// itinerary recomputes reported costs.
pub fn search_tie_break(kind: &EdgeKind, options: &RouteOptions) -> f64 {
    if options.prefer_fewer_transfers && kind.is_transfer() {
        TRANSFER_TIE_BREAK
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn station(id: &str, line: &str, x: f64, y: f64) -> Station {
        Station {
            id: StationId::new(id),
            name: id.to_string(),
            line: LineId::new(line),
            color: "#000000".to_string(),
            x,
            y,
            order: 1,
            accessible: true,
        }
    }

    #[test]
    fn line_edge_base_is_distance() {
        let a = station("a", "1", 0.0, 0.0);
        let b = station("b", "1", 3.0, 4.0);
        let kind = EdgeKind::Line(LineId::new("1"));
        assert_eq!(edge_cost(&a, &b, &kind, &RouteOptions::default()), 5.0);
    }

    #[test]
    fn transfer_adds_penalty() {
        let a = station("a", "1", 0.0, 0.0);
        let b = station("b", "2", 0.0, 0.0);
        let cost = edge_cost(&a, &b, &EdgeKind::Transfer, &RouteOptions::default());
        assert_eq!(cost, 5.0); // zero distance + default penalty

        let options = RouteOptions {
            transfer_penalty: 2.5,
            ..RouteOptions::default()
        };
        assert_eq!(edge_cost(&a, &b, &EdgeKind::Transfer, &options), 2.5);
    }

    #[test]
    fn reduced_mobility_scales_transfers_only() {
        let a = station("a", "1", 0.0, 0.0);
        let b = station("b", "2", 3.0, 4.0);
        let options = RouteOptions {
            mobility: Mobility::Reduced,
            ..RouteOptions::default()
        };

        // (5.0 distance + 5.0 penalty) × 1.5
        assert_eq!(edge_cost(&a, &b, &EdgeKind::Transfer, &options), 15.0);

        // Line edges are unaffected
        let kind = EdgeKind::Line(LineId::new("1"));
        assert_eq!(edge_cost(&a, &b, &kind, &options), 5.0);
    }

    #[test]
    fn peak_scales_congested_lines_only() {
        let a = station("a", "3", 0.0, 0.0);
        let b = station("b", "3", 3.0, 4.0);
        let peak = RouteOptions {
            time_of_day: TimeOfDay::Peak,
            ..RouteOptions::default()
        };

        let congested = EdgeKind::Line(LineId::new("3"));
        assert!((edge_cost(&a, &b, &congested, &peak) - 5.75).abs() < 1e-12);

        let quiet = EdgeKind::Line(LineId::new("1"));
        assert_eq!(edge_cost(&a, &b, &quiet, &peak), 5.0);

        // Transfers are never congestion-scaled
        assert_eq!(edge_cost(&a, &b, &EdgeKind::Transfer, &peak), 10.0);
    }

    #[test]
    fn congested_set() {
        assert!(is_congested(&LineId::new("3")));
        assert!(is_congested(&LineId::new("9")));
        assert!(!is_congested(&LineId::new("1")));
        assert!(!is_congested(&LineId::new("12")));
    }

    #[test]
    fn tie_break_only_for_preferred_transfers() {
        let transfer = EdgeKind::Transfer;
        let line = EdgeKind::Line(LineId::new("1"));

        let default = RouteOptions::default();
        assert_eq!(search_tie_break(&transfer, &default), 0.0);

        let prefer = RouteOptions {
            prefer_fewer_transfers: true,
            ..RouteOptions::default()
        };
        assert_eq!(search_tie_break(&transfer, &prefer), TRANSFER_TIE_BREAK);
        assert_eq!(search_tie_break(&line, &prefer), 0.0);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: RouteOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, RouteOptions::default());

        let options: RouteOptions =
            serde_json::from_str(r#"{"mobility": "reduced", "transfer_penalty": 2.0}"#).unwrap();
        assert_eq!(options.mobility, Mobility::Reduced);
        assert_eq!(options.transfer_penalty, 2.0);
        assert_eq!(options.time_of_day, TimeOfDay::Offpeak);
        assert!(!options.prefer_fewer_transfers);
    }

    #[test]
    fn unknown_enum_values_are_rejected() {
        assert!(serde_json::from_str::<RouteOptions>(r#"{"mobility": "wheelchair"}"#).is_err());
        assert!(serde_json::from_str::<RouteOptions>(r#"{"time_of_day": "midnight"}"#).is_err());
    }
}

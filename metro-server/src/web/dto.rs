//! Data transfer objects for web requests and responses.
//!
//! Reported distances and costs are rounded to 3 decimal places here;
//! the core computes exact values.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::network::EdgeKind;
use crate::planner::{RouteOptions, RouteResult, RouteSegment};

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station id.
    pub origin_id: String,

    /// Destination station id.
    pub destination_id: String,

    /// Rider preferences; every field defaults independently.
    #[serde(default)]
    pub options: RouteOptions,
}

/// A station in the catalog listing.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Owning line id.
    pub line: String,

    /// Line display color (hex).
    pub color: String,

    /// Schematic x coordinate.
    pub x: f64,

    /// Schematic y coordinate.
    pub y: f64,

    /// 1-based position along the line.
    pub order: u32,

    /// Step-free access.
    pub accessible: bool,
}

impl StationResult {
    /// Build from a catalog station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.as_str().to_string(),
            name: station.name.clone(),
            line: station.line.as_str().to_string(),
            color: station.color.clone(),
            x: station.x,
            y: station.y,
            order: station.order,
            accessible: station.accessible,
        }
    }
}

/// One traversed edge in a route response.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// Originating station id.
    pub from_id: String,

    /// Target station id.
    pub to_id: String,

    /// "line" or "transfer".
    #[serde(rename = "type")]
    pub kind: &'static str,

    /// Line id for line segments, null for transfers.
    pub line: Option<String>,

    /// Segment length, rounded to 3 decimals.
    pub distance: f64,

    /// Segment cost, rounded to 3 decimals.
    pub cost: f64,
}

impl SegmentResult {
    /// Build from a core route segment.
    pub fn from_segment(segment: &RouteSegment) -> Self {
        let (kind, line) = match &segment.kind {
            EdgeKind::Line(line) => ("line", Some(line.as_str().to_string())),
            EdgeKind::Transfer => ("transfer", None),
        };
        Self {
            from_id: segment.from.as_str().to_string(),
            to_id: segment.to.as_str().to_string(),
            kind,
            line,
            distance: round3(segment.distance),
            cost: round3(segment.cost),
        }
    }
}

/// Response for a planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Visited station ids, origin first.
    pub path: Vec<String>,

    /// One entry per traversed edge.
    pub segments: Vec<SegmentResult>,

    /// Sum of segment distances, rounded to 3 decimals.
    pub total_distance: f64,

    /// Sum of segment costs, rounded to 3 decimals.
    pub total_cost: f64,

    /// Number of transfer segments.
    pub transfers: u32,

    /// Distinct lines ridden, in first-use order.
    pub lines_used: Vec<String>,
}

impl RouteResponse {
    /// Build from a core route result.
    pub fn from_result(result: &RouteResult) -> Self {
        Self {
            path: result.path.iter().map(|id| id.as_str().to_string()).collect(),
            segments: result.segments.iter().map(SegmentResult::from_segment).collect(),
            total_distance: round3(result.total_distance),
            total_cost: round3(result.total_cost),
            transfers: result.transfers,
            lines_used: result
                .lines_used
                .iter()
                .map(|line| line.as_str().to_string())
                .collect(),
        }
    }
}

/// Error body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::catalog::cdmx_network;
    use crate::planner::plan_route;

    #[test]
    fn round3_behaviour() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(1.2344), 1.234);
        assert_eq!(round3(0.0), 0.0);
        assert_eq!(round3(10.0), 10.0);
    }

    #[test]
    fn route_request_options_default() {
        let req: RouteRequest = serde_json::from_str(
            r#"{"origin_id": "observatorio", "destination_id": "juarez"}"#,
        )
        .unwrap();
        assert_eq!(req.origin_id, "observatorio");
        assert_eq!(req.options, RouteOptions::default());
    }

    #[test]
    fn route_request_rejects_bad_enum() {
        let result = serde_json::from_str::<RouteRequest>(
            r#"{"origin_id": "a", "destination_id": "b",
                "options": {"time_of_day": "rush_hour"}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn station_result_fields() {
        let net = cdmx_network();
        let result = StationResult::from_station(net.station("tacubaya_l9").unwrap());

        assert_eq!(result.id, "tacubaya_l9");
        assert_eq!(result.name, "Tacubaya");
        assert_eq!(result.line, "9");
        assert_eq!(result.color, "#8B5E3C");
        assert_eq!(result.order, 1);
        assert!(result.accessible);
    }

    #[test]
    fn response_json_shape() {
        let net = cdmx_network();
        let result = plan_route(&net, "observatorio", "juanacatlan", &RouteOptions::default())
            .unwrap();
        let response = RouteResponse::from_result(&result);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["path"][0], "observatorio");
        assert_eq!(json["path"][2], "juanacatlan");
        assert_eq!(json["segments"][0]["type"], "line");
        assert_eq!(json["segments"][0]["line"], "1");
        assert_eq!(json["segments"][0]["from_id"], "observatorio");
        assert_eq!(json["total_distance"], 20.0);
        assert_eq!(json["transfers"], 0);
        assert_eq!(json["lines_used"][0], "1");
    }

    #[test]
    fn transfer_segment_serializes_null_line() {
        let net = cdmx_network();
        let result = plan_route(&net, "balderas_l1", "balderas_l3", &RouteOptions::default())
            .unwrap();
        let response = RouteResponse::from_result(&result);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["segments"][0]["type"], "transfer");
        assert!(json["segments"][0]["line"].is_null());
        assert_eq!(json["transfers"], 1);
    }

    #[test]
    fn reported_values_are_rounded() {
        let net = cdmx_network();
        let result = plan_route(&net, "universidad", "polanco", &RouteOptions::default()).unwrap();
        let response = RouteResponse::from_result(&result);

        for segment in &response.segments {
            assert_eq!(segment.distance, round3(segment.distance));
            assert_eq!(segment.cost, round3(segment.cost));
        }
        assert_eq!(response.total_distance, round3(response.total_distance));
        assert_eq!(response.total_cost, round3(response.total_cost));
    }
}

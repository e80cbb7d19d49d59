//! The static transit network: station catalog and edge set.
//!
//! The network is assembled once at startup from compiled-in line and
//! transfer data, then shared read-only for the lifetime of the process.
//! Every connection is symmetric: whenever u→v is declared, v→u is
//! inserted too, so no edge ever exists in only one direction.

pub mod catalog;

use std::collections::HashMap;

use crate::domain::{LineId, Station, StationId};

/// What kind of connection an edge represents.
///
/// `Line` edges join consecutive stations on the same line and carry that
/// line's id. `Transfer` edges join two entries for the same physical
/// location on different lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeKind {
    /// Riding along a line.
    Line(LineId),
    /// Changing lines at the same physical location.
    Transfer,
}

impl EdgeKind {
    /// `true` for transfer edges.
    pub fn is_transfer(&self) -> bool {
        matches!(self, EdgeKind::Transfer)
    }

    /// The line id for line edges, `None` for transfers.
    pub fn line(&self) -> Option<&LineId> {
        match self {
            EdgeKind::Line(line) => Some(line),
            EdgeKind::Transfer => None,
        }
    }
}

/// A directed edge between two stations.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Originating station.
    pub from: StationId,

    /// Target station.
    pub to: StationId,

    /// Connection kind; line edges carry the originating station's line.
    pub kind: EdgeKind,
}

/// The immutable transit network.
///
/// Built once by [`NetworkBuilder`] and never mutated afterwards, so it can
/// be shared across concurrent requests without locking. Adjacency lists
/// preserve insertion order, which keeps neighbor iteration deterministic.
#[derive(Debug, Clone, Default)]
pub struct TransitNetwork {
    stations: HashMap<StationId, Station>,
    station_order: Vec<StationId>,
    adjacency: HashMap<StationId, Vec<Edge>>,
    edge_count: usize,
}

impl TransitNetwork {
    /// Look up a station by id.
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Whether a station id is in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.stations.contains_key(id)
    }

    /// All stations in catalog order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.station_order.iter().filter_map(|id| self.stations.get(id))
    }

    /// Number of stations in the catalog.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Outgoing edges from a station, in insertion order.
    ///
    /// Returns an empty slice for unknown ids.
    pub fn neighbors(&self, id: &str) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The directed edge from `from` to `to`, if one exists.
    ///
    /// This is the membership test the itinerary assembler uses to
    /// re-derive a traversed edge's kind.
    pub fn edge_between(&self, from: &str, to: &str) -> Option<&Edge> {
        self.neighbors(from).iter().find(|e| e.to.as_str() == to)
    }

    /// Total number of directed edges (a symmetric pair counts as two).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

/// Builder for [`TransitNetwork`].
///
/// Lines are declared as ordered station sequences; transfers as station-id
/// pairs. The builder is the only place the network is ever mutated.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: TransitNetwork,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a line: its id, display color, and ordered stations as
    /// `(id, name, x, y)` records.
    ///
    /// Each station is appended to the catalog with a 1-based ordinal along
    /// the line, and consecutive stations are connected by a symmetric pair
    /// of line edges.
    pub fn line(mut self, line: &str, color: &str, stops: &[(&str, &str, f64, f64)]) -> Self {
        let line_id = LineId::new(line);

        for (i, (id, name, x, y)) in stops.iter().enumerate() {
            let station = Station {
                id: StationId::new(*id),
                name: (*name).to_string(),
                line: line_id.clone(),
                color: color.to_string(),
                x: *x,
                y: *y,
                order: (i + 1) as u32,
                accessible: true,
            };
            self.inner.station_order.push(station.id.clone());
            self.inner.stations.insert(station.id.clone(), station);
        }

        for pair in stops.windows(2) {
            let u = StationId::new(pair[0].0);
            let v = StationId::new(pair[1].0);
            self.insert_symmetric(u, v, EdgeKind::Line(line_id.clone()));
        }

        self
    }

    /// Declare a transfer between two stations.
    ///
    /// Inserted as a symmetric pair of transfer edges. Pairs where either
    /// endpoint is not (yet) in the catalog are silently skipped, so the
    /// static data may contain placeholders for unbuilt stations.
    pub fn transfer(mut self, a: &str, b: &str) -> Self {
        if !self.inner.contains(a) || !self.inner.contains(b) {
            return self;
        }
        self.insert_symmetric(StationId::new(a), StationId::new(b), EdgeKind::Transfer);
        self
    }

    /// Finish building; the returned network is immutable.
    pub fn build(self) -> TransitNetwork {
        self.inner
    }

    fn insert_symmetric(&mut self, u: StationId, v: StationId, kind: EdgeKind) {
        self.inner.adjacency.entry(u.clone()).or_default().push(Edge {
            from: u.clone(),
            to: v.clone(),
            kind: kind.clone(),
        });
        self.inner.adjacency.entry(v.clone()).or_default().push(Edge {
            from: v,
            to: u,
            kind,
        });
        self.inner.edge_count += 2;
    }
}

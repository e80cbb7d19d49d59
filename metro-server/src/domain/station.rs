//! Station and line identifier types.

use std::borrow::Borrow;
use std::fmt;

/// Identifier of a station in the network.
///
/// Station ids are lowercase snake-case strings from the static catalog
/// (e.g. `"tacubaya_l1"`). The same physical station appears once per line
/// it serves, with a distinct id per line.
///
/// `Ord` is derived so ids can serve as the final, deterministic tie-break
/// in frontier ordering.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Create a station id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StationId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identifier of a metro line (e.g. `"1"`, `"12"`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(String);

impl LineId {
    /// Create a line id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A station in the metro network.
///
/// Coordinates are schematic plane positions in a normalized 0..100 space,
/// not geographic — they exist to support the spatial search heuristic and
/// map rendering. Stations are immutable once the network is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Unique station id.
    pub id: StationId,

    /// Display name (e.g. "Tacubaya").
    pub name: String,

    /// The line this station entry belongs to.
    pub line: LineId,

    /// Display color of the owning line, as a hex string.
    pub color: String,

    /// Schematic x coordinate.
    pub x: f64,

    /// Schematic y coordinate.
    pub y: f64,

    /// 1-based position along the owning line.
    pub order: u32,

    /// Whether the station has step-free access.
    pub accessible: bool,
}

impl Station {
    /// Euclidean distance to another station in the schematic plane.
    pub fn distance_to(&self, other: &Station) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// Scale applied to coordinate-space distance to approximate metres.
const HEURISTIC_SCALE: f64 = 1000.0;

/// Handle to a location inside a [`Graph`](crate::graph::Graph).
///
/// Handles are assigned in insertion order, so the index doubles as the
/// deterministic iteration order used during precomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LocationId(pub u32);

impl LocationId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Named point on campus with descriptive tags.
///
/// Equality and hashing consider `(name, lat, lon)` only; tags are
/// descriptive and do not contribute to identity.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    name: String,
    lat: f64,
    lon: f64,
    tags: Vec<String>,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64, tags: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            tags,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Straight-line distance in coordinate space, scaled to rough metres.
    ///
    /// Not a lower bound on graph distance; the all-pairs planner ignores it.
    pub fn heuristic_to(&self, other: &Location) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        (dlat * dlat + dlon * dlon).sqrt() * HEURISTIC_SCALE
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.lat.to_bits() == other.lat.to_bits()
            && self.lon.to_bits() == other.lon.to_bits()
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.lat.to_bits().hash(state);
        self.lon.to_bits().hash(state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::location::{Location, LocationId};

/// Congestion factor applied to freshly built segments and to any
/// non-positive update.
pub const DEFAULT_CONGESTION: f64 = 1.0;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.75;

/// Directed walkway between two locations.
///
/// Distance and base time are fixed at construction; only the congestion
/// factor can change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSegment {
    start: LocationId,
    end: LocationId,
    distance: f64,
    base_time: f64,
    congestion: f64,
}

impl PathSegment {
    pub fn new(start: LocationId, end: LocationId, distance: f64, base_time: f64) -> Self {
        Self {
            start,
            end,
            distance,
            base_time,
            congestion: DEFAULT_CONGESTION,
        }
    }

    pub fn start(&self) -> LocationId {
        self.start
    }

    pub fn end(&self) -> LocationId {
        self.end
    }

    /// Length in metres.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Uncongested walking time in minutes.
    pub fn base_time(&self) -> f64 {
        self.base_time
    }

    pub fn congestion_factor(&self) -> f64 {
        self.congestion
    }

    /// Base time scaled by the current congestion factor.
    pub fn effective_time(&self) -> f64 {
        self.base_time * self.congestion
    }

    /// Replace the congestion factor. Non-positive (or NaN) factors reset it
    /// to [`DEFAULT_CONGESTION`].
    pub fn set_congestion(&mut self, factor: f64) {
        self.congestion = if factor > 0.0 {
            factor
        } else {
            DEFAULT_CONGESTION
        };
    }
}

/// Undirected walkway description, resolved by location name when the graph
/// is built.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub time: f64,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64, time: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
            time,
        }
    }
}

/// Campus graph: every location with its outgoing segments.
///
/// Each undirected input edge is stored as two opposing segments with the
/// same distance and base time. Topology is fixed once built.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    locations: Vec<Location>,
    name_to_id: HashMap<String, LocationId>,
    adjacency: Vec<Vec<PathSegment>>,
}

impl Graph {
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of directed segments (twice the number of accepted edges).
    pub fn segment_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    /// Lookup a location name by identifier.
    pub fn name(&self, id: LocationId) -> Option<&str> {
        self.location(id).map(Location::name)
    }

    /// Lookup a location identifier by its case-sensitive name.
    pub fn location_id(&self, name: &str) -> Option<LocationId> {
        self.name_to_id.get(name).copied()
    }

    /// Like [`location_id`](Self::location_id) but reports unknown names with
    /// fuzzy suggestions.
    pub fn resolve_location(&self, name: &str) -> Result<LocationId> {
        self.location_id(name)
            .ok_or_else(|| Error::UnknownLocation {
                name: name.to_string(),
                suggestions: self.fuzzy_location_matches(name, 3),
            })
    }

    /// All locations in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> + '_ {
        self.locations
            .iter()
            .enumerate()
            .map(|(index, location)| (LocationId(index as u32), location))
    }

    /// Locations ordered by name, for selection lists.
    pub fn locations_by_name(&self) -> Vec<(LocationId, &Location)> {
        let mut sorted: Vec<_> = self.locations().collect();
        sorted.sort_by(|(_, a), (_, b)| a.name().cmp(b.name()));
        sorted
    }

    /// Outgoing segments of `id`; empty for unknown handles.
    pub fn neighbours(&self, id: LocationId) -> &[PathSegment] {
        self.adjacency
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The segment running from `from` to `to`, if any.
    pub fn segment(&self, from: LocationId, to: LocationId) -> Option<&PathSegment> {
        self.neighbours(from).iter().find(|segment| segment.end == to)
    }

    pub fn segment_mut(&mut self, from: LocationId, to: LocationId) -> Option<&mut PathSegment> {
        self.adjacency
            .get_mut(from.index())?
            .iter_mut()
            .find(|segment| segment.end == to)
    }

    /// Update the congestion factor of the `from -> to` segment only.
    ///
    /// Returns `false` when no such segment exists.
    pub fn set_congestion(&mut self, from: LocationId, to: LocationId, factor: f64) -> bool {
        match self.segment_mut(from, to) {
            Some(segment) => {
                segment.set_congestion(factor);
                true
            }
            None => false,
        }
    }

    /// Sorted, case-folded union of every location's tags.
    pub fn all_landmarks(&self) -> Vec<String> {
        let mut landmarks: Vec<String> = self
            .locations
            .iter()
            .flat_map(|location| location.tags())
            .map(|tag| tag.to_lowercase())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        landmarks.sort();
        landmarks
    }

    /// Names similar to `name`, best match first.
    pub fn fuzzy_location_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .locations
            .iter()
            .map(|location| {
                let score = strsim::jaro_winkler(&needle, &location.name().to_lowercase());
                (score, location.name())
            })
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| compare_score(b.0, a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    fn insert_location(&mut self, location: Location) {
        if let Some(&existing) = self.name_to_id.get(location.name()) {
            warn!(
                name = location.name(),
                "duplicate location name; later record replaces the earlier one"
            );
            self.locations[existing.index()] = location;
            return;
        }

        let id = LocationId(self.locations.len() as u32);
        self.name_to_id.insert(location.name().to_string(), id);
        self.locations.push(location);
        self.adjacency.push(Vec::new());
    }

    fn insert_edge(&mut self, edge: &EdgeSpec) -> bool {
        let (Some(from), Some(to)) = (self.location_id(&edge.from), self.location_id(&edge.to))
        else {
            warn!(from = %edge.from, to = %edge.to, "skipping path with unknown endpoint");
            return false;
        };

        if from == to {
            warn!(location = %edge.from, "skipping self-loop path");
            return false;
        }

        if !is_valid_weight(edge.distance) || !is_valid_weight(edge.time) {
            warn!(
                from = %edge.from,
                to = %edge.to,
                distance = edge.distance,
                time = edge.time,
                "skipping path with negative or non-finite weight"
            );
            return false;
        }

        self.adjacency[from.index()].push(PathSegment::new(from, to, edge.distance, edge.time));
        self.adjacency[to.index()].push(PathSegment::new(to, from, edge.distance, edge.time));
        true
    }
}

/// Build the bidirectional campus graph.
///
/// Edges whose endpoints do not resolve against the location names are
/// skipped, as are self-loops and negative or non-finite weights. A repeated
/// location name replaces the earlier location in place.
pub fn build_graph<L, E>(locations: L, edges: E) -> Graph
where
    L: IntoIterator<Item = Location>,
    E: IntoIterator<Item = EdgeSpec>,
{
    let mut graph = Graph::default();
    for location in locations {
        graph.insert_location(location);
    }

    let mut skipped = 0usize;
    for edge in edges {
        if !graph.insert_edge(&edge) {
            skipped += 1;
        }
    }

    debug!(
        locations = graph.location_count(),
        segments = graph.segment_count(),
        skipped,
        "built campus graph"
    );
    graph
}

fn is_valid_weight(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn compare_score(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Greater)
}

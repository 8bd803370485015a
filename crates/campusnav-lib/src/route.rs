use std::collections::HashSet;

use serde::Serialize;

use crate::graph::Graph;
use crate::location::LocationId;

/// A walk through the campus graph with its aggregate cost.
///
/// Routes are immutable once built. The landmark list is derived at
/// construction from the tags of every location on the path: case-folded,
/// deduplicated, in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    path: Vec<LocationId>,
    total_distance: f64,
    total_time: f64,
    landmarks: Vec<String>,
}

impl Route {
    /// Build a route over `path`, resolving tags through `graph`.
    ///
    /// Callers supply a non-empty path whose consecutive pairs are joined by
    /// segments; handles unknown to `graph` contribute no landmarks.
    pub fn new(graph: &Graph, path: Vec<LocationId>, distance: f64, time: f64) -> Self {
        let landmarks = collect_landmarks(
            path.iter()
                .filter_map(|id| graph.location(*id))
                .flat_map(|location| location.tags()),
        );
        Self {
            path,
            total_distance: distance,
            total_time: time,
            landmarks,
        }
    }

    /// Zero-cost route that stays at `location`.
    pub fn trivial(graph: &Graph, location: LocationId) -> Self {
        Self::new(graph, vec![location], 0.0, 0.0)
    }

    pub fn path(&self) -> &[LocationId] {
        &self.path
    }

    pub fn start(&self) -> Option<LocationId> {
        self.path.first().copied()
    }

    pub fn goal(&self) -> Option<LocationId> {
        self.path.last().copied()
    }

    /// Number of segments walked.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Total distance in metres.
    pub fn distance(&self) -> f64 {
        self.total_distance
    }

    /// Total time in minutes, as recorded when the route was built.
    pub fn time(&self) -> f64 {
        self.total_time
    }

    pub fn landmarks(&self) -> &[String] {
        &self.landmarks
    }

    /// `true` when the case-folded `landmark` is one of this route's landmarks.
    pub fn passes_landmark(&self, landmark: &str) -> bool {
        let folded = landmark.to_lowercase();
        self.landmarks.iter().any(|candidate| *candidate == folded)
    }
}

fn collect_landmarks<'a, I>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut seen = HashSet::new();
    tags.into_iter()
        .map(|tag| tag.to_lowercase())
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, EdgeSpec};
    use crate::location::Location;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn tagged_graph() -> Graph {
        build_graph(
            [
                Location::new("North", 0.0, 0.0, tags(&["Library", "Cafe"])),
                Location::new("Middle", 0.0, 1.0, tags(&["cafe", "Quiet"])),
                Location::new("South", 0.0, 2.0, tags(&["LIBRARY", "gate"])),
            ],
            [
                EdgeSpec::new("North", "Middle", 10.0, 1.0),
                EdgeSpec::new("Middle", "South", 10.0, 1.0),
            ],
        )
    }

    #[test]
    fn landmarks_are_folded_and_deduplicated_in_order() {
        let graph = tagged_graph();
        let route = Route::new(
            &graph,
            vec![LocationId(0), LocationId(1), LocationId(2)],
            20.0,
            2.0,
        );
        assert_eq!(route.landmarks(), ["library", "cafe", "quiet", "gate"]);
    }

    #[test]
    fn passes_landmark_ignores_case() {
        let graph = tagged_graph();
        let route = Route::new(&graph, vec![LocationId(0), LocationId(1)], 10.0, 1.0);
        assert!(route.passes_landmark("QUIET"));
        assert!(route.passes_landmark("library"));
        assert!(!route.passes_landmark("gate"));
    }

    #[test]
    fn trivial_route_has_single_stop() {
        let graph = tagged_graph();
        let route = Route::trivial(&graph, LocationId(2));
        assert_eq!(route.path(), [LocationId(2)]);
        assert_eq!(route.hop_count(), 0);
        assert_eq!(route.distance(), 0.0);
        assert_eq!(route.time(), 0.0);
        assert_eq!(route.start(), route.goal());
        assert_eq!(route.landmarks(), ["library", "gate"]);
    }
}

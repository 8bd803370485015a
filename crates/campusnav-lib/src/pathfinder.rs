//! All-pairs route planning over the campus graph.
//!
//! [`PathFinder`] runs Floyd–Warshall once at construction and then answers
//! point-to-point queries by table lookup. Distance is the only optimisation
//! target; the time stored with each route is the sum along the chosen
//! minimum-distance path, using the congestion factors in effect when the
//! table was built.
//!
//! The free functions [`sort_routes`] and [`filter_by_landmark`] post-process
//! candidate route lists for front ends.

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{Graph, PathSegment};
use crate::location::LocationId;
use crate::route::Route;

/// Precomputed routing engine.
#[derive(Debug, Clone)]
pub struct PathFinder {
    graph: Graph,
    table: Vec<Vec<Option<Route>>>,
}

impl PathFinder {
    /// Take ownership of `graph` and precompute every pairwise route.
    ///
    /// Runs in `O(V³)` time; intended for campus-sized graphs.
    pub fn new(graph: Graph) -> Self {
        let started = Instant::now();
        let table = precompute_all_pairs(&graph);
        let finder = Self { graph, table };

        info!(
            locations = finder.graph.location_count(),
            segments = finder.graph.segment_count(),
            reachable_pairs = finder.reachable_pairs(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "precomputed all-pairs routes"
        );
        finder
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Mutable graph access for congestion updates.
    ///
    /// Stored routes are not recomputed; use [`live_time`](Self::live_time)
    /// to observe the effect of new factors.
    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    /// Stored route from `start` to `end`.
    ///
    /// `None` when either handle is unknown or `end` is unreachable.
    pub fn get_precomputed_path(&self, start: LocationId, end: LocationId) -> Option<&Route> {
        self.table.get(start.index())?.get(end.index())?.as_ref()
    }

    /// Name-resolving variant of [`get_precomputed_path`](Self::get_precomputed_path).
    ///
    /// Unknown names are errors with suggestions; an unreachable pair is
    /// still `Ok(None)`.
    pub fn route_between(&self, from: &str, to: &str) -> Result<Option<&Route>> {
        let start = self.graph.resolve_location(from)?;
        let goal = self.graph.resolve_location(to)?;
        Ok(self.get_precomputed_path(start, goal))
    }

    /// Every reachable destination from `start`, excluding the trivial route,
    /// in location order.
    pub fn routes_from(&self, start: LocationId) -> Vec<&Route> {
        let Some(row) = self.table.get(start.index()) else {
            return Vec::new();
        };
        row.iter()
            .enumerate()
            .filter(|(index, _)| *index != start.index())
            .filter_map(|(_, entry)| entry.as_ref())
            .collect()
    }

    /// Walking time along `route` under the graph's current congestion.
    ///
    /// `None` when a consecutive pair of the path has no segment.
    pub fn live_time(&self, route: &Route) -> Option<f64> {
        route
            .path()
            .windows(2)
            .map(|pair| {
                self.graph
                    .segment(pair[0], pair[1])
                    .map(PathSegment::effective_time)
            })
            .sum()
    }

    /// Number of ordered pairs with a stored route, trivial ones included.
    pub fn reachable_pairs(&self) -> usize {
        self.table.iter().flatten().filter(|entry| entry.is_some()).count()
    }
}

#[derive(Debug, Clone)]
struct Candidate {
    path: Vec<LocationId>,
    distance: f64,
    time: f64,
}

fn precompute_all_pairs(graph: &Graph) -> Vec<Vec<Option<Route>>> {
    let n = graph.location_count();

    let mut best: Vec<Vec<Option<Candidate>>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    (i == j).then(|| Candidate {
                        path: vec![LocationId(i as u32)],
                        distance: 0.0,
                        time: 0.0,
                    })
                })
                .collect()
        })
        .collect();

    // Parallel segments are outside the graph contract; the last one wins.
    for (id, _) in graph.locations() {
        for segment in graph.neighbours(id) {
            best[id.index()][segment.end().index()] = Some(Candidate {
                path: vec![id, segment.end()],
                distance: segment.distance(),
                time: segment.effective_time(),
            });
        }
    }

    for k in 0..n {
        for i in 0..n {
            if best[i][k].is_none() {
                continue;
            }
            for j in 0..n {
                let (Some(ik), Some(kj)) = (&best[i][k], &best[k][j]) else {
                    continue;
                };

                let distance = ik.distance + kj.distance;
                // Ties keep the existing entry.
                if best[i][j]
                    .as_ref()
                    .is_some_and(|ij| distance >= ij.distance)
                {
                    continue;
                }

                let mut path = Vec::with_capacity(ik.path.len() + kj.path.len() - 1);
                path.extend_from_slice(&ik.path);
                path.extend_from_slice(&kj.path[1..]);
                let time = ik.time + kj.time;

                best[i][j] = Some(Candidate {
                    path,
                    distance,
                    time,
                });
            }
        }
    }

    best.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|entry| {
                    entry.map(|candidate| {
                        Route::new(graph, candidate.path, candidate.distance, candidate.time)
                    })
                })
                .collect()
        })
        .collect()
}

/// Ordering applied by [`sort_routes_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCriterion {
    /// Shortest total distance first.
    Distance,
    /// Shortest total time first.
    Time,
    /// Most landmarks first.
    Landmarks,
}

impl FromStr for SortCriterion {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "distance" => Ok(SortCriterion::Distance),
            "time" => Ok(SortCriterion::Time),
            "landmarks" => Ok(SortCriterion::Landmarks),
            _ => Err(Error::UnknownSortCriterion {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SortCriterion::Distance => "distance",
            SortCriterion::Time => "time",
            SortCriterion::Landmarks => "landmarks",
        };
        f.write_str(value)
    }
}

/// Stable in-place sort by a criterion name matched case-insensitively.
///
/// Unrecognised criteria leave `routes` untouched.
pub fn sort_routes<R: Borrow<Route>>(routes: &mut [R], criteria: &str) {
    match criteria.parse::<SortCriterion>() {
        Ok(criterion) => sort_routes_by(routes, criterion),
        Err(_) => debug!(criteria, "ignoring unrecognised sort criterion"),
    }
}

/// Stable in-place sort by `criterion`.
pub fn sort_routes_by<R: Borrow<Route>>(routes: &mut [R], criterion: SortCriterion) {
    match criterion {
        SortCriterion::Distance => {
            routes.sort_by(|a, b| route_of(a).distance().total_cmp(&route_of(b).distance()))
        }
        SortCriterion::Time => {
            routes.sort_by(|a, b| route_of(a).time().total_cmp(&route_of(b).time()))
        }
        SortCriterion::Landmarks => routes.sort_by(|a, b| {
            route_of(b)
                .landmarks()
                .len()
                .cmp(&route_of(a).landmarks().len())
        }),
    }
}

/// Prefer routes passing `landmark`.
///
/// Returns the matching subset, or the original slice unchanged when no
/// route matches.
pub fn filter_by_landmark<'a, R>(routes: &'a [R], landmark: &str) -> Cow<'a, [R]>
where
    R: Borrow<Route> + Clone,
{
    let matching = filter_by_landmark_strict(routes, landmark);
    if matching.is_empty() {
        Cow::Borrowed(routes)
    } else {
        Cow::Owned(matching)
    }
}

/// Only the routes passing `landmark`; may be empty.
pub fn filter_by_landmark_strict<R>(routes: &[R], landmark: &str) -> Vec<R>
where
    R: Borrow<Route> + Clone,
{
    routes
        .iter()
        .filter(|route| route_of(*route).passes_landmark(landmark))
        .cloned()
        .collect()
}

fn route_of<R: Borrow<Route>>(route: &R) -> &Route {
    <R as Borrow<Route>>::borrow(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_criterion_parses_case_insensitively() {
        assert_eq!(
            "Distance".parse::<SortCriterion>().unwrap(),
            SortCriterion::Distance
        );
        assert_eq!("TIME".parse::<SortCriterion>().unwrap(), SortCriterion::Time);
        assert_eq!(
            "landmarks".parse::<SortCriterion>().unwrap(),
            SortCriterion::Landmarks
        );
        assert!(matches!(
            "scenic".parse::<SortCriterion>(),
            Err(Error::UnknownSortCriterion { .. })
        ));
    }

    #[test]
    fn empty_graph_has_no_routes() {
        let finder = PathFinder::new(Graph::default());
        assert_eq!(finder.reachable_pairs(), 0);
        assert!(finder
            .get_precomputed_path(LocationId(0), LocationId(0))
            .is_none());
        assert!(finder.routes_from(LocationId(0)).is_empty());
    }
}

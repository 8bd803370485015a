//! Shared fixtures for the campusnav-lib integration tests.

use std::path::PathBuf;

use campusnav_lib::{build_graph, EdgeSpec, Graph, Location, LocationId};

/// Path to the fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the checked-in campus dataset.
#[allow(dead_code)]
pub fn fixture_dataset_path() -> PathBuf {
    fixtures_dir().join("campus_data.json")
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// The reference campus:
///
/// ```text
/// A(library) --100/2-- B(cafe) --150/3-- C --200/4-- D(gate)      E (isolated)
///      \_________________400/8_________/
/// ```
#[allow(dead_code)]
pub fn scenario_graph() -> Graph {
    build_graph(
        [
            Location::new("A", 0.0, 0.0, tags(&["library"])),
            Location::new("B", 0.0, 1.0, tags(&["cafe"])),
            Location::new("C", 1.0, 1.0, Vec::new()),
            Location::new("D", 2.0, 2.0, tags(&["gate"])),
            Location::new("E", 5.0, 5.0, Vec::new()),
        ],
        [
            EdgeSpec::new("A", "B", 100.0, 2.0),
            EdgeSpec::new("B", "C", 150.0, 3.0),
            EdgeSpec::new("A", "C", 400.0, 8.0),
            EdgeSpec::new("C", "D", 200.0, 4.0),
        ],
    )
}

/// Square grid of `side * side` locations named `r{row}c{col}` with
/// unit-spaced coordinates. Horizontal walkways cost `10 + col`, vertical
/// ones `7 + row`, so shortest paths are not all ties.
#[allow(dead_code)]
pub fn grid_graph(side: usize) -> Graph {
    let name = |row: usize, col: usize| format!("r{row}c{col}");
    let mut locations = Vec::new();
    let mut edges = Vec::new();
    for row in 0..side {
        for col in 0..side {
            locations.push(Location::new(
                name(row, col),
                row as f64,
                col as f64,
                if (row + col) % 3 == 0 {
                    vec![format!("zone{}", row % 2)]
                } else {
                    Vec::new()
                },
            ));
            if col + 1 < side {
                let weight = 10.0 + col as f64;
                edges.push(EdgeSpec::new(name(row, col), name(row, col + 1), weight, weight / 10.0));
            }
            if row + 1 < side {
                let weight = 7.0 + row as f64;
                edges.push(EdgeSpec::new(name(row, col), name(row + 1, col), weight, weight / 10.0));
            }
        }
    }
    build_graph(locations, edges)
}

/// Handle for `name`, panicking when absent.
#[allow(dead_code)]
pub fn id(graph: &Graph, name: &str) -> LocationId {
    graph
        .location_id(name)
        .unwrap_or_else(|| panic!("location {name} present in fixture"))
}

/// Location names along `path`.
#[allow(dead_code)]
pub fn names(graph: &Graph, path: &[LocationId]) -> Vec<String> {
    path.iter()
        .map(|id| graph.name(*id).expect("known handle").to_string())
        .collect()
}

/// Shortest simple-path distance by exhaustive search. Only for tiny graphs.
#[allow(dead_code)]
pub fn brute_force_distance(graph: &Graph, start: LocationId, goal: LocationId) -> Option<f64> {
    fn walk(
        graph: &Graph,
        current: LocationId,
        goal: LocationId,
        visited: &mut Vec<bool>,
        so_far: f64,
        best: &mut Option<f64>,
    ) {
        if current == goal {
            if best.map_or(true, |b| so_far < b) {
                *best = Some(so_far);
            }
            return;
        }
        for segment in graph.neighbours(current) {
            let next = segment.end();
            if visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            walk(graph, next, goal, visited, so_far + segment.distance(), best);
            visited[next.index()] = false;
        }
    }

    let mut visited = vec![false; graph.location_count()];
    visited[start.index()] = true;
    let mut best = None;
    walk(graph, start, goal, &mut visited, 0.0, &mut best);
    best
}

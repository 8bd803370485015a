//! Campus navigation library entry points.
//!
//! This crate loads a campus dataset into an undirected weighted graph,
//! precomputes optimal walking routes between every pair of locations, and
//! offers helpers to sort and filter candidate routes. Front ends (the CLI)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.

pub mod dataset;
pub mod error;
pub mod graph;
pub mod location;
pub mod output;
pub mod pathfinder;
pub mod route;

pub use dataset::{
    default_dataset_path, load_campus, load_campus_reader, parse_campus_reader, parse_campus_str,
    resolve_dataset_path, CampusData, LocationRecord, PathRecord, DATASET_ENV_VAR,
    DATASET_FILENAME,
};
pub use error::{Error, Result};
pub use graph::{build_graph, EdgeSpec, Graph, PathSegment, DEFAULT_CONGESTION};
pub use location::{Location, LocationId};
pub use output::{RouteStep, RouteSummary};
pub use pathfinder::{
    filter_by_landmark, filter_by_landmark_strict, sort_routes, sort_routes_by, PathFinder,
    SortCriterion,
};
pub use route::Route;

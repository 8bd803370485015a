//! Campus dataset loading and location resolution.
//!
//! # Document format
//!
//! ```json
//! {
//!   "locations": [
//!     { "name": "Library", "lat": 0.0, "lon": 0.0, "tags": ["library"] }
//!   ],
//!   "paths": [
//!     { "from": "Library", "to": "Cafe", "distance": 100, "time": 2 }
//!   ]
//! }
//! ```
//!
//! Both top-level keys are required (`edges` is accepted as an alias for
//! `paths`). Unknown fields are ignored, locations without a name are
//! skipped, and paths that reference unknown locations are skipped.

use std::env;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Deserializer};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::graph::{build_graph, EdgeSpec, Graph};
use crate::location::Location;

/// Default filename for the campus dataset.
pub const DATASET_FILENAME: &str = "campus_data.json";

/// Environment variable that overrides the dataset location.
pub const DATASET_ENV_VAR: &str = "CAMPUSNAV_DATA";

/// Directory the dataset historically shipped in, relative to the working
/// directory.
const LEGACY_DATA_DIR: &str = "lib";

/// A location record as it appears in the dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub lat: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub lon: f64,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl LocationRecord {
    fn into_location(self) -> Option<Location> {
        match self.name {
            Some(name) if !name.is_empty() => Some(Location::new(
                name,
                self.lat,
                self.lon,
                self.tags.unwrap_or_default(),
            )),
            _ => {
                warn!(lat = self.lat, lon = self.lon, "skipping location without a name");
                None
            }
        }
    }
}

/// An undirected path record as it appears in the dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathRecord {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub distance: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub time: f64,
}

impl PathRecord {
    fn into_edge(self) -> Option<EdgeSpec> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some(EdgeSpec::new(from, to, self.distance, self.time)),
            (from, to) => {
                warn!(?from, ?to, "skipping path with a missing endpoint");
                None
            }
        }
    }
}

/// Numeric fields that are `null` read as zero, the same as missing ones.
fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parsed campus document.
#[derive(Debug, Clone, Default)]
pub struct CampusData {
    pub locations: Vec<LocationRecord>,
    pub paths: Vec<PathRecord>,
}

#[derive(Deserialize)]
struct RawCampusData {
    #[serde(default)]
    locations: Option<Vec<LocationRecord>>,
    #[serde(default, alias = "edges")]
    paths: Option<Vec<PathRecord>>,
}

impl CampusData {
    /// Build the bidirectional graph from the parsed records.
    pub fn into_graph(self) -> Graph {
        let locations = self
            .locations
            .into_iter()
            .filter_map(LocationRecord::into_location);
        let edges = self.paths.into_iter().filter_map(PathRecord::into_edge);
        build_graph(locations, edges)
    }
}

/// Parse a campus document from a string.
pub fn parse_campus_str(document: &str) -> Result<CampusData> {
    let raw: RawCampusData = serde_json::from_str(document)?;
    validate(raw)
}

/// Parse a campus document from any reader.
pub fn parse_campus_reader<R: Read>(reader: R) -> Result<CampusData> {
    let raw: RawCampusData = serde_json::from_reader(reader)?;
    validate(raw)
}

fn validate(raw: RawCampusData) -> Result<CampusData> {
    let Some(locations) = raw.locations else {
        return Err(Error::InvalidDataset {
            reason: "missing `locations` array".to_string(),
        });
    };
    let Some(paths) = raw.paths else {
        return Err(Error::InvalidDataset {
            reason: "missing `paths` array".to_string(),
        });
    };
    Ok(CampusData { locations, paths })
}

/// Load and build the campus graph from a reader.
pub fn load_campus_reader<R: Read>(reader: R) -> Result<Graph> {
    Ok(parse_campus_reader(reader)?.into_graph())
}

/// Load and build the campus graph from a JSON file.
pub fn load_campus(path: &Path) -> Result<Graph> {
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::DatasetNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    })?;

    let graph = load_campus_reader(BufReader::new(file))?;
    info!(
        path = %path.display(),
        locations = graph.location_count(),
        segments = graph.segment_count(),
        "loaded campus dataset"
    );
    Ok(graph)
}

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("org", "campusnav", "campusnav").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Locate the campus dataset.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `CAMPUSNAV_DATA` environment variable.
/// 3. `campus_data.json` in the working directory, then `lib/campus_data.json`.
/// 4. The platform data directory.
///
/// Directories in 1 and 2 are joined with [`DATASET_FILENAME`]. An explicit or
/// environment path must exist; it is never silently replaced by a fallback.
pub fn resolve_dataset_path(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return require_existing(canonical_dataset_path(explicit));
    }

    if let Some(env_path) = env::var_os(DATASET_ENV_VAR) {
        debug!(variable = DATASET_ENV_VAR, "using dataset path from environment");
        return require_existing(canonical_dataset_path(Path::new(&env_path)));
    }

    let local_candidates = [
        PathBuf::from(DATASET_FILENAME),
        Path::new(LEGACY_DATA_DIR).join(DATASET_FILENAME),
    ];
    if let Some(found) = local_candidates.into_iter().find(|path| path.is_file()) {
        debug!(path = %found.display(), "using dataset from working directory");
        return Ok(found);
    }

    require_existing(default_dataset_path()?)
}

fn canonical_dataset_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DATASET_FILENAME)
    } else {
        path.to_path_buf()
    }
}

fn require_existing(path: PathBuf) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(Error::DatasetNotFound { path })
    }
}

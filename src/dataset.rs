//! The static cafe dataset.
//!
//! Loaded wholesale at startup and immutable afterwards. Entries are not
//! validated beyond what deserialization requires; a questionable coordinate
//! is a data-quality problem, not a load error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::Coordinate;

/// Dataset bundled into the binary, used when no `--dataset` path is given.
const DEFAULT_DATASET: &str = include_str!("../data/cafes.json");

/// A single point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cafe {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl Cafe {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// Errors that can occur when loading the cafe dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads cafes from a JSON file, preserving file order.
pub fn load_from_path(path: &Path) -> Result<Vec<Cafe>, DatasetError> {
    let content = fs::read_to_string(path).map_err(|e| DatasetError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| DatasetError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Returns the bundled dataset.
///
/// The bundled JSON is checked by tests, so a parse failure here would mean
/// a corrupted build rather than bad user input.
pub fn load_default() -> Result<Vec<Cafe>, DatasetError> {
    serde_json::from_str(DEFAULT_DATASET).map_err(|e| DatasetError::ParseError {
        path: PathBuf::from("<bundled>"),
        source: e,
    })
}

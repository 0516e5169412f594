use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    /// Optional fixed location used when no CLI override is given.
    #[serde(default)]
    pub location: Option<LocationConfig>,
    #[serde(default)]
    pub dataset: DatasetConfig,
}

/// Initial map framing before a user location resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,
    /// Tile-style zoom level; each step halves the visible span.
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

/// Distance filter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Initial radius in kilometers. Must be within 1..=50.
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
}

/// A fixed location source for the one-shot lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    pub lat: f64,
    pub lng: f64,
}

/// Where the cafe dataset comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to a JSON dataset file. The bundled dataset is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_center_lat() -> f64 {
    18.5204
}

fn default_center_lng() -> f64 {
    73.8567
}

fn default_zoom() -> u8 {
    12
}

fn default_radius_km() -> f64 {
    5.0
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            zoom: default_zoom(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            radius_km: default_radius_km(),
        }
    }
}

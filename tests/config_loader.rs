use std::io::Write;

use cafescout::config::{Config, ConfigError};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn default_config_matches_the_original_framing() {
    let config = Config::default();
    assert_eq!(config.map.center_lat, 18.5204);
    assert_eq!(config.map.center_lng, 73.8567);
    assert_eq!(config.map.zoom, 12);
    assert_eq!(config.filter.radius_km, 5.0);
    assert!(config.location.is_none());
    assert!(config.dataset.path.is_none());
}

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("cafescout/config.toml"));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config.filter.radius_km, 5.0);
}

#[test]
fn full_config_round_trips() {
    let file = write_config(
        r#"
[map]
center_lat = 51.5074
center_lng = -0.1278
zoom = 13

[filter]
radius_km = 10.0

[location]
lat = 51.5
lng = -0.12

[dataset]
path = "/tmp/cafes.json"
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.map.center_lat, 51.5074);
    assert_eq!(config.map.zoom, 13);
    assert_eq!(config.filter.radius_km, 10.0);
    let loc = config.location.unwrap();
    assert_eq!(loc.lat, 51.5);
    assert_eq!(
        config.dataset.path.unwrap().to_str().unwrap(),
        "/tmp/cafes.json"
    );
}

#[test]
fn partial_config_keeps_defaults_for_the_rest() {
    let file = write_config("[filter]\nradius_km = 25.0\n");
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.filter.radius_km, 25.0);
    assert_eq!(config.map.zoom, 12);
}

#[test]
fn radius_outside_control_bounds_fails_validation() {
    let file = write_config("[filter]\nradius_km = 75.0\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("[map\nzoom = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

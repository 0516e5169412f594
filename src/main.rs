use anyhow::Context;
use clap::Parser;
use tracing::info;

use cafescout::cli::Cli;
use cafescout::config::Config;
use cafescout::dataset;
use cafescout::geo::Coordinate;
use cafescout::location::{EnvLocation, FixedLocation, LocationProvider};
use cafescout::logging::init_tracing;
use cafescout::ui::map::MapState;
use cafescout::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let dataset_path = cli.dataset.as_ref().or(config.dataset.path.as_ref());
    let cafes = match dataset_path {
        Some(path) => dataset::load_from_path(path)
            .with_context(|| format!("failed to load dataset from '{}'", path.display()))?,
        None => dataset::load_default().context("bundled dataset is corrupt")?,
    };
    info!(count = cafes.len(), "dataset loaded");

    let center = Coordinate::new(config.map.center_lat, config.map.center_lng);
    let radius_km = cli.radius.unwrap_or(config.filter.radius_km);
    let state = MapState::new(cafes, center, config.map.zoom, radius_km);

    let provider: Box<dyn LocationProvider> = match cli.location() {
        Some(coordinate) => Box::new(FixedLocation(coordinate)),
        None => match &config.location {
            Some(loc) => Box::new(FixedLocation(Coordinate::new(loc.lat, loc.lng))),
            None => Box::new(EnvLocation),
        },
    };

    runtime::run(state, provider).context("terminal UI failed")?;
    Ok(())
}

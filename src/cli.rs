use std::path::PathBuf;

use clap::Parser;

use crate::geo::Coordinate;

/// Browse nearby cafes on a terminal map.
#[derive(Debug, Parser)]
#[command(name = "cafescout", version, about)]
pub struct Cli {
    /// Path to a JSON cafe dataset (defaults to the bundled one).
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Alternate config file path.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Your latitude, as a location override. Requires --lng.
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Your longitude, as a location override. Requires --lat.
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Initial filter radius in kilometers.
    #[arg(long, value_parser = parse_radius)]
    pub radius: Option<f64>,
}

impl Cli {
    /// Location override, when both halves are present.
    pub fn location(&self) -> Option<Coordinate> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
            _ => None,
        }
    }
}

fn parse_radius(raw: &str) -> Result<f64, String> {
    let km: f64 = raw.parse().map_err(|_| format!("invalid radius '{raw}'"))?;
    if !(crate::ui::map::MIN_RADIUS_KM..=crate::ui::map::MAX_RADIUS_KM).contains(&km) {
        return Err(format!(
            "radius must be between {} and {}",
            crate::ui::map::MIN_RADIUS_KM,
            crate::ui::map::MAX_RADIUS_KM
        ));
    }
    Ok(km)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_location_override() {
        let cli = Cli::parse_from(["cafescout", "--lat", "18.52", "--lng", "73.85"]);
        let loc = cli.location().unwrap();
        assert_eq!(loc.lat, 18.52);
        assert_eq!(loc.lng, 73.85);
    }

    #[test]
    fn lat_without_lng_is_rejected() {
        assert!(Cli::try_parse_from(["cafescout", "--lat", "18.52"]).is_err());
    }

    #[test]
    fn radius_out_of_bounds_is_rejected() {
        assert!(Cli::try_parse_from(["cafescout", "--radius", "51"]).is_err());
        assert!(Cli::try_parse_from(["cafescout", "--radius", "0"]).is_err());
    }

    #[test]
    fn no_args_means_no_overrides() {
        let cli = Cli::parse_from(["cafescout"]);
        assert!(cli.location().is_none());
        assert!(cli.dataset.is_none());
        assert!(cli.radius.is_none());
    }
}

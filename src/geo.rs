//! Coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A position in decimal degrees. Values are taken as-is; callers are
/// responsible for supplying coordinates in valid ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Great-circle distance between two coordinates in kilometers, using the
/// haversine formula. Total over all numeric inputs; degenerate coordinates
/// produce a numeric result rather than an error.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let p = Coordinate::new(18.5204, 73.8567);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(18.5204, 73.8567);
        let b = Coordinate::new(19.0760, 72.8777);
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn out_of_range_input_still_yields_a_number() {
        let d = haversine_km(Coordinate::new(512.0, -1000.0), Coordinate::new(0.0, 0.0));
        assert!(d.is_finite());
    }
}

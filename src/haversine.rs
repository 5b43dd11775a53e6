use serde::{Deserialize, Serialize};

use crate::point::Planar;

/// Mean earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lon: f64,
}

impl GeoCoordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoCoordinate { lat, lon }
    }
}

/// `(lat, lon)` order.
impl From<(f64, f64)> for GeoCoordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        GeoCoordinate { lat, lon }
    }
}

// Planar view is (lon, lat), matching GeoJSON position order.
impl Planar for GeoCoordinate {
    fn x(&self) -> f64 { self.lon }
    fn y(&self) -> f64 { self.lat }
}

/// Great-circle distance in meters between two coordinates on a sphere of
/// radius [`EARTH_RADIUS_M`].
pub fn haversine(coord1: GeoCoordinate, coord2: GeoCoordinate) -> f64 {
    let dlat = (coord2.lat - coord1.lat).to_radians();
    let dlon = (coord2.lon - coord1.lon).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + coord1.lat.to_radians().cos() * coord2.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_degree_longitude_at_equator() {
        let d = haversine((0.0, 0.0).into(), (0.0, 1.0).into());
        assert!((d - 111_195.0).abs() < 50.0, "{}", d);
    }

    #[test]
    fn test_identical_points() {
        let p = GeoCoordinate::new(47.3769, 8.5417);
        assert_eq!(haversine(p, p), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let zurich = GeoCoordinate::new(47.3769, 8.5417);
        let berlin = GeoCoordinate::new(52.5200, 13.4050);
        assert_relative_eq!(haversine(zurich, berlin), haversine(berlin, zurich), epsilon = 1e-6);
    }

    #[test]
    fn test_known_city_distance() {
        // Zurich to Berlin is roughly 670 km on the sphere
        let zurich = GeoCoordinate::new(47.3769, 8.5417);
        let berlin = GeoCoordinate::new(52.5200, 13.4050);
        let d = haversine(zurich, berlin);
        assert!(d > 660_000.0 && d < 680_000.0, "{}", d);
    }

    #[test]
    fn test_antipodal_points() {
        let d = haversine((0.0, 0.0).into(), (0.0, 180.0).into());
        assert_relative_eq!(d, std::f64::consts::PI * EARTH_RADIUS_M, max_relative = 1e-12);
    }

    #[test]
    fn test_planar_view_is_lon_lat() {
        let p = GeoCoordinate::new(10.0, 20.0);
        assert_eq!((p.x(), p.y()), (20.0, 10.0));
    }
}

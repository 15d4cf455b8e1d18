//! Great-circle distance on a spherical Earth.

use crate::models::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometres.
///
/// Inputs are not range checked. Non-finite inputs yield NaN.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let phi_a = a.lat.to_radians();
    let phi_b = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lon - a.lon).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_a.cos() * phi_b.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let helsinki = Coordinate::new(24.93545, 60.16952);
        assert_eq!(distance_km(helsinki, helsinki), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let a = Coordinate::new(24.93545, 60.16952);
        let b = Coordinate::new(24.9414, 60.1718);
        assert_eq!(distance_km(a, b), distance_km(b, a));
    }

    #[test]
    fn test_helsinki_tallinn() {
        let helsinki = Coordinate::new(24.9384, 60.1699);
        let tallinn = Coordinate::new(24.7536, 59.4370);

        // ~82 km across the gulf
        let distance = distance_km(helsinki, tallinn);
        assert!((distance - 82.0).abs() < 2.0, "got {distance}");
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        assert!((distance_km(a, b) - 111.195).abs() < 0.01);
    }

    #[test]
    fn test_nan_propagates() {
        let a = Coordinate::new(f64::NAN, 0.0);
        let b = Coordinate::new(0.0, 0.0);
        assert!(distance_km(a, b).is_nan());
    }
}

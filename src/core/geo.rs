use crate::domain::model::Location;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers (haversine).
pub fn haversine_km(from: Location, to: Location) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();
    let a = ((d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Whole-degree distance between two latitudes, each truncated toward zero.
pub fn truncated_latitude_gap(a: f64, b: f64) -> u64 {
    // `as` saturates and maps NaN to 0, so odd input never panics
    (a as i64).abs_diff(b as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_distance_to_self_is_zero() {
        let syd = Location::new(-33.8688, 151.2093);
        assert!(haversine_km(syd, syd).abs() < EPS);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let syd = Location::new(-33.8688, 151.2093);
        let lon = Location::new(51.5074, -0.1278);
        assert!((haversine_km(syd, lon) - haversine_km(lon, syd)).abs() < EPS);
    }

    #[test]
    fn test_known_distances() {
        // a quarter of the equator
        let d = haversine_km(Location::new(0.0, 0.0), Location::new(0.0, 90.0));
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2).abs() < 1e-6);

        // pole to pole
        let d = haversine_km(Location::new(90.0, 0.0), Location::new(-90.0, 0.0));
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);

        let paris = Location::new(48.8566, 2.3522);
        let london = Location::new(51.5074, -0.1278);
        let d = haversine_km(paris, london);
        assert!((d - 343.5).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_out_of_range_input_does_not_panic() {
        let d = haversine_km(Location::new(400.0, -999.0), Location::new(-95.0, 720.0));
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }

    #[test]
    fn test_truncated_latitude_gap() {
        assert_eq!(truncated_latitude_gap(20.9, 20.1), 0);
        // truncation, not floor: -0.5 and 0.5 both become 0
        assert_eq!(truncated_latitude_gap(-0.5, 0.5), 0);
        assert_eq!(truncated_latitude_gap(-10.7, 5.2), 15);
        assert_eq!(truncated_latitude_gap(f64::NAN, 3.0), 3);
    }
}

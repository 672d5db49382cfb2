//! Geographic primitives and great-circle distance.

use haversine::{Location, Units};

/// A point on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two points in kilometres.
///
/// Uses the haversine formula with an Earth radius of 6371 km. Total over
/// all real-valued inputs; identical points yield 0.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    haversine::distance(
        Location {
            latitude: a.latitude,
            longitude: a.longitude,
        },
        Location {
            latitude: b.latitude,
            longitude: b.longitude,
        },
        Units::Kilometers,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero() {
        let p = GeoPoint::new(51.47, -0.45);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn symmetric() {
        let london = GeoPoint::new(51.47, -0.45);
        let sydney = GeoPoint::new(-33.95, 151.18);
        let there = haversine_km(london, sydney);
        let back = haversine_km(sydney, london);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn london_to_new_york() {
        // Heathrow to JFK is roughly 5555 km along the great circle.
        let lhr = GeoPoint::new(51.47, -0.45);
        let jfk = GeoPoint::new(40.64, -73.78);
        let d = haversine_km(lhr, jfk);
        assert!((5540.0..=5600.0).contains(&d), "got {d} km");
    }

    #[test]
    fn short_hop_is_plausible() {
        // Heathrow to Paris CDG, roughly 350 km.
        let lhr = GeoPoint::new(51.47, -0.45);
        let cdg = GeoPoint::new(49.01, 2.55);
        let d = haversine_km(lhr, cdg);
        assert!((330.0..=370.0).contains(&d), "got {d} km");
    }
}

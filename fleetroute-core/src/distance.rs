//! Great-circle distance between stops.
//!
//! The engine treats the haversine distance as its road-distance proxy;
//! no road network is consulted.

use geo::Coord;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two WGS84 points, in kilometres.
///
/// Pure and symmetric; a point lies at distance zero from itself within
/// floating-point error. Coordinates are expected to be validated
/// upstream: NaN or infinite inputs propagate into the result.
///
/// # Examples
/// ```
/// use fleetroute_core::distance::haversine_km;
/// use geo::Coord;
///
/// let berlin = Coord { x: 13.4050, y: 52.5200 };
/// let munich = Coord { x: 11.5820, y: 48.1351 };
///
/// let km = haversine_km(berlin, munich);
/// assert!((km - 504.4).abs() < 0.1);
/// ```
#[must_use]
pub fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let d_lat = (b.y - a.y).to_radians();
    let d_lng = (b.x - a.x).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Coord { x: 0.0, y: 0.0 })]
    #[case(Coord { x: 13.4050, y: 52.5200 })]
    #[case(Coord { x: -0.1278, y: 51.5074 })]
    fn distance_to_self_is_zero(#[case] point: Coord<f64>) {
        assert!(haversine_km(point, point).abs() < 1e-9);
    }

    #[rstest]
    fn one_degree_of_latitude_spans_111_km() {
        let equator = Coord { x: 0.0, y: 0.0 };
        let north = Coord { x: 0.0, y: 1.0 };
        let km = haversine_km(equator, north);
        assert!((km - 111.195).abs() < 0.001, "got {km}");
    }

    #[rstest]
    fn london_to_paris_matches_reference() {
        let london = Coord { x: -0.1278, y: 51.5074 };
        let paris = Coord { x: 2.3522, y: 48.8566 };
        let km = haversine_km(london, paris);
        assert!((km - 343.556).abs() < 0.001, "got {km}");
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = Coord { x: 13.4050, y: 52.5200 };
        let b = Coord { x: 11.5820, y: 48.1351 };
        assert_eq!(haversine_km(a, b).to_bits(), haversine_km(b, a).to_bits());
    }

    #[rstest]
    fn non_finite_input_propagates() {
        let a = Coord { x: f64::NAN, y: 0.0 };
        let b = Coord { x: 0.0, y: 0.0 };
        assert!(haversine_km(a, b).is_nan());
    }
}

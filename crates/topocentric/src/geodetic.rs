//! Conversion between ECEF positions and geodetic coordinates.

use glam::DVec3;

use crate::ellipsoid::Ellipsoid;
use crate::error::{Error, Result};

/// Maximum number of fixed-point passes when solving for latitude.
pub const MAX_ITERATIONS: u32 = 5;

/// Latitude change (radians) below which the iteration is considered converged.
pub const LATITUDE_TOLERANCE: f64 = 1e-6;

const CONTEXT: &str = "geodetic conversion";

/// A geodetic position on an ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticCoordinate {
    /// Geodetic latitude in radians.
    pub lat: f64,
    /// Longitude in radians, in `(-π, π]`.
    pub lon: f64,
    /// Height above the ellipsoid in kilometers.
    pub hae: f64,
}

/// The outcome of an ECEF to geodetic conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticSolution {
    pub coordinate: GeodeticCoordinate,
    /// Number of fixed-point passes performed.
    pub iterations: u32,
    /// Whether the latitude settled within [`LATITUDE_TOLERANCE`] before
    /// hitting [`MAX_ITERATIONS`].
    pub converged: bool,
}

/// Convert an ECEF position (km) to geodetic latitude, longitude and height.
///
/// Longitude is exact. Latitude starts from the spherical guess
/// `asin(z / |v|)` and is refined by fixed-point iteration:
///
/// ```text
/// C   = R / sqrt(1 - e² sin²(lat))
/// lat = atan((z + C e² sin(lat)) / sqrt(x² + y²))
/// ```
///
/// Height uses the latitude and `C` from the final pass.
///
/// # Errors
///
/// Returns [`Error::Singularity`] for the zero vector or a position on the
/// polar axis, and [`Error::NonFiniteInput`] for NaN or infinite components.
pub fn ecef_to_llh(ellipsoid: &Ellipsoid, v: DVec3) -> Result<GeodeticSolution> {
    if !v.is_finite() {
        return Err(Error::NonFiniteInput { context: CONTEXT });
    }

    let magnitude = v.length();
    if magnitude == 0.0 {
        return Err(Error::Singularity {
            context: CONTEXT,
            detail: "position has zero magnitude",
        });
    }

    let r_xy = v.x.hypot(v.y);
    if r_xy == 0.0 {
        return Err(Error::Singularity {
            context: CONTEXT,
            detail: "position lies on the polar axis",
        });
    }

    let lon = v.y.atan2(v.x);
    let radius = ellipsoid.equatorial_radius_km();
    let e2 = ellipsoid.eccentricity_squared();

    let mut lat = (v.z / magnitude).asin();
    let mut c = radius;
    let mut iterations = 0;
    let mut converged = false;

    while iterations < MAX_ITERATIONS {
        let sin_lat = lat.sin();
        c = radius / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let next = ((v.z + c * e2 * sin_lat) / r_xy).atan();
        let delta = (next - lat).abs();
        lat = next;
        iterations += 1;

        tracing::trace!(iterations, lat, delta, "latitude pass");

        if delta <= LATITUDE_TOLERANCE {
            converged = true;
            break;
        }
    }

    if !converged {
        tracing::debug!(
            lat,
            iterations,
            "latitude did not converge within the iteration cap"
        );
    }

    let hae = r_xy / lat.cos() - c;

    Ok(GeodeticSolution {
        coordinate: GeodeticCoordinate { lat, lon, hae },
        iterations,
        converged,
    })
}

/// Convert a geodetic coordinate to an ECEF position (km).
pub fn llh_to_ecef(ellipsoid: &Ellipsoid, coordinate: GeodeticCoordinate) -> DVec3 {
    let GeodeticCoordinate { lat, lon, hae } = coordinate;
    let c = ellipsoid.prime_vertical_radius(lat);
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    DVec3::new(
        (c + hae) * cos_lat * cos_lon,
        (c + hae) * cos_lat * sin_lon,
        (c * (1.0 - ellipsoid.eccentricity_squared()) + hae) * sin_lat,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_equator_prime_meridian() {
        let solution = ecef_to_llh(&Ellipsoid::EARTH, DVec3::new(6378.1363, 0.0, 0.0)).unwrap();

        assert!(solution.converged);
        assert_eq!(solution.iterations, 1);
        assert!(solution.coordinate.lat.abs() < 1e-12);
        assert!(solution.coordinate.lon.abs() < 1e-12);
        assert!(solution.coordinate.hae.abs() < 1e-9);
    }

    #[test]
    fn test_longitude_quadrants() {
        let earth = Ellipsoid::EARTH;
        let west = ecef_to_llh(&earth, DVec3::new(0.0, -7000.0, 10.0)).unwrap();
        assert!((west.coordinate.lon + std::f64::consts::FRAC_PI_2).abs() < 1e-12);

        let antimeridian = ecef_to_llh(&earth, DVec3::new(-7000.0, 0.0, 10.0)).unwrap();
        assert!((antimeridian.coordinate.lon - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_known_mid_latitude_point() {
        let earth = Ellipsoid::EARTH;
        let coordinate = GeodeticCoordinate {
            lat: 40.0_f64.to_radians(),
            lon: (-75.0_f64).to_radians(),
            hae: 0.5,
        };
        let solution = ecef_to_llh(&earth, llh_to_ecef(&earth, coordinate)).unwrap();

        assert!(solution.converged);
        assert!(solution.iterations <= 3);
        assert!((solution.coordinate.lat - coordinate.lat).abs() < 1e-6);
        assert!((solution.coordinate.lon - coordinate.lon).abs() < 1e-12);
        assert!((solution.coordinate.hae - coordinate.hae).abs() < 1e-6);
    }

    #[test]
    fn test_spherical_limit() {
        let sphere = Ellipsoid::sphere(6378.1363).unwrap();

        for v in [
            DVec3::new(4000.0, 3000.0, 2000.0),
            DVec3::new(-1200.0, 500.0, -6100.0),
            DVec3::new(6000.0, -100.0, 6000.0),
        ] {
            let solution = ecef_to_llh(&sphere, v).unwrap();
            assert!(solution.converged);
            assert!(solution.iterations <= 2, "took {} passes", solution.iterations);

            let spherical = (v.z / v.length()).asin();
            assert!((solution.coordinate.lat - spherical).abs() < 1e-12);
            assert!((solution.coordinate.hae - (v.length() - 6378.1363)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_reports_non_convergence() {
        // A very flat ellipsoid makes the fixed point converge slowly.
        let flat = Ellipsoid::new(6378.1363, 0.999).unwrap();
        let solution = ecef_to_llh(&flat, DVec3::new(3000.0, 0.0, 3000.0)).unwrap();

        assert!(!solution.converged);
        assert_eq!(solution.iterations, MAX_ITERATIONS);
        assert!(solution.coordinate.lat.is_finite());
    }

    #[test]
    fn test_degenerate_inputs() {
        let earth = Ellipsoid::EARTH;

        assert!(matches!(
            ecef_to_llh(&earth, DVec3::ZERO),
            Err(Error::Singularity {
                detail: "position has zero magnitude",
                ..
            })
        ));
        assert!(matches!(
            ecef_to_llh(&earth, DVec3::new(0.0, 0.0, 6356.75)),
            Err(Error::Singularity {
                detail: "position lies on the polar axis",
                ..
            })
        ));
        assert!(matches!(
            ecef_to_llh(&earth, DVec3::new(f64::NAN, 0.0, 0.0)),
            Err(Error::NonFiniteInput { .. })
        ));
    }

    proptest! {
        #[test]
        fn round_trip_recovers_coordinate(
            lat_deg in -85.0f64..85.0,
            lon_deg in -179.9f64..179.9,
            hae in -1.0f64..1000.0,
        ) {
            let earth = Ellipsoid::EARTH;
            let coordinate = GeodeticCoordinate {
                lat: lat_deg.to_radians(),
                lon: lon_deg.to_radians(),
                hae,
            };

            let solution = ecef_to_llh(&earth, llh_to_ecef(&earth, coordinate)).unwrap();

            prop_assert!(solution.converged);
            prop_assert!((solution.coordinate.lat - coordinate.lat).abs() < 1e-6);
            prop_assert!((solution.coordinate.lon - coordinate.lon).abs() < 1e-6);
            prop_assert!((solution.coordinate.hae - coordinate.hae).abs() < 1e-6);
        }
    }
}

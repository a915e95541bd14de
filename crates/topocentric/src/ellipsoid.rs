//! Reference ellipsoid parameters.

use crate::error::{Error, Result};

/// Equatorial radius of the default Earth model in kilometers.
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.1363;

/// First eccentricity of the default Earth model.
pub const EARTH_ECCENTRICITY: f64 = 0.081_819_221_456;

/// An oblate ellipsoid defined by its equatorial radius and first eccentricity.
///
/// Values are validated on construction and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    equatorial_radius_km: f64,
    eccentricity: f64,
}

impl Ellipsoid {
    /// The default Earth model.
    pub const EARTH: Self = Self {
        equatorial_radius_km: EARTH_EQUATORIAL_RADIUS_KM,
        eccentricity: EARTH_ECCENTRICITY,
    };

    /// Create an ellipsoid from its equatorial radius (km) and eccentricity.
    ///
    /// # Errors
    ///
    /// Returns an error unless the radius is finite and positive and the
    /// eccentricity is finite and in `[0, 1)`.
    pub fn new(equatorial_radius_km: f64, eccentricity: f64) -> Result<Self> {
        if !equatorial_radius_km.is_finite() || equatorial_radius_km <= 0.0 {
            return Err(Error::InvalidEllipsoid {
                detail: format!("equatorial radius must be positive, got {equatorial_radius_km}"),
            });
        }
        if !eccentricity.is_finite() || !(0.0..1.0).contains(&eccentricity) {
            return Err(Error::InvalidEllipsoid {
                detail: format!("eccentricity must be in [0, 1), got {eccentricity}"),
            });
        }

        Ok(Self {
            equatorial_radius_km,
            eccentricity,
        })
    }

    /// A sphere of the given radius.
    pub fn sphere(radius_km: f64) -> Result<Self> {
        Self::new(radius_km, 0.0)
    }

    pub const fn equatorial_radius_km(&self) -> f64 {
        self.equatorial_radius_km
    }

    pub const fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity * self.eccentricity
    }

    /// Radius of curvature in the prime vertical at a geodetic latitude.
    pub fn prime_vertical_radius(&self, lat: f64) -> f64 {
        let sin_lat = lat.sin();
        let denom = (1.0 - self.eccentricity_squared() * sin_lat * sin_lat).sqrt();
        self.equatorial_radius_km / denom
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::EARTH
    }
}

//! ECEF to South-East-Zenith transformation and look angles.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::ellipsoid::Ellipsoid;
use crate::error::{Error, Result};
use crate::geodetic::{GeodeticSolution, ecef_to_llh};
use crate::matrix::Matrix;
use crate::rotation::SezRotation;

/// A vector in an observer's South-East-Zenith frame, in kilometers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SezVector {
    pub south: f64,
    pub east: f64,
    pub zenith: f64,
}

impl SezVector {
    pub fn new(south: f64, east: f64, zenith: f64) -> Self {
        Self {
            south,
            east,
            zenith,
        }
    }

    /// Distance from the observer in kilometers.
    pub fn range(&self) -> f64 {
        DVec3::from(*self).length()
    }

    /// Azimuth, elevation and range of this vector as seen by the observer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Singularity`] for the zero vector, which has no
    /// direction.
    pub fn look_angles(&self) -> Result<LookAngles> {
        let range = self.range();
        if !range.is_finite() {
            return Err(Error::NonFiniteInput {
                context: "look angles",
            });
        }
        if range == 0.0 {
            return Err(Error::Singularity {
                context: "look angles",
                detail: "target coincides with the observer",
            });
        }

        let elevation = (self.zenith / range).clamp(-1.0, 1.0).asin();
        // Measured clockwise from north, and north is -S.
        let azimuth = self.east.atan2(-self.south).rem_euclid(TAU);

        Ok(LookAngles {
            azimuth,
            elevation,
            range,
        })
    }
}

impl From<DVec3> for SezVector {
    /// Interpret `(x, y, z)` as `(south, east, zenith)`.
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<SezVector> for DVec3 {
    fn from(v: SezVector) -> Self {
        DVec3::new(v.south, v.east, v.zenith)
    }
}

/// Direction and distance to a target from an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAngles {
    /// Radians clockwise from north, in `[0, 2π)`.
    pub azimuth: f64,
    /// Radians above the local horizon.
    pub elevation: f64,
    /// Kilometers.
    pub range: f64,
}

/// The result of transforming a target into an observer's SEZ frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SezSolution {
    pub sez: SezVector,
    /// Geodetic solution for the observer origin.
    pub origin: GeodeticSolution,
}

impl SezSolution {
    /// Whether the origin's latitude iteration converged.
    pub fn converged(&self) -> bool {
        self.origin.converged
    }
}

/// Transforms ECEF target positions into the SEZ frame of an ECEF origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SezTransformer {
    ellipsoid: Ellipsoid,
}

impl SezTransformer {
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid }
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Express `target` relative to `origin` in the origin's SEZ frame.
    ///
    /// Both positions are ECEF, in kilometers. The displacement is rotated
    /// onto the origin's meridian and then tilted by its co-latitude.
    ///
    /// # Errors
    ///
    /// Propagates geodetic conversion failures for the origin and matrix
    /// multiplication failures unchanged.
    pub fn transform(&self, origin: DVec3, target: DVec3) -> Result<SezSolution> {
        let displacement = target - origin;
        if !displacement.is_finite() {
            return Err(Error::NonFiniteInput {
                context: "sez transform",
            });
        }

        let geodetic = ecef_to_llh(&self.ellipsoid, origin)?;
        let rotation = SezRotation::build(geodetic.coordinate.lat, geodetic.coordinate.lon);

        let intermediate = rotation.r1.multiply(&Matrix::column(displacement))?;
        let sez = rotation.r2.multiply(&intermediate)?;
        let sez = sez.to_dvec3().ok_or(Error::DimensionMismatch {
            left: (sez.rows(), sez.cols()),
            right: (3, 1),
        })?;

        tracing::debug!(
            lat = geodetic.coordinate.lat,
            lon = geodetic.coordinate.lon,
            south = sez.x,
            east = sez.y,
            zenith = sez.z,
            "transformed displacement into sez"
        );

        Ok(SezSolution {
            sez: sez.into(),
            origin: geodetic,
        })
    }
}

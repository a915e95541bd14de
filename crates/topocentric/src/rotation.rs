//! Rotations from the ECEF axes into an observer's SEZ axes.

use crate::error::Result;
use crate::matrix::Matrix;

/// The pair of rotations taking an ECEF-aligned vector into the SEZ frame of
/// an observer at a given geodetic latitude and longitude.
///
/// `r1` turns about the Z axis onto the observer's meridian and `r2` tilts
/// by the co-latitude. They must be applied in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct SezRotation {
    pub r1: Matrix,
    pub r2: Matrix,
}

impl SezRotation {
    /// Build both rotations for an observer at `lat`, `lon` (radians).
    pub fn build(lat: f64, lon: f64) -> Self {
        let (sin_lon, cos_lon) = lon.sin_cos();
        let (sin_lat, cos_lat) = lat.sin_cos();

        let r1 = Matrix::from([
            [cos_lon, sin_lon, 0.0],
            [-sin_lon, cos_lon, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        let r2 = Matrix::from([
            [sin_lat, 0.0, -cos_lat],
            [0.0, 1.0, 0.0],
            [cos_lat, 0.0, sin_lat],
        ]);

        Self { r1, r2 }
    }

    /// The single matrix `r2 · r1`.
    pub fn composite(&self) -> Result<Matrix> {
        self.r2.multiply(&self.r1)
    }

    /// Apply `r1` then `r2` to a 3×1 column.
    pub fn apply(&self, column: &Matrix) -> Result<Matrix> {
        let intermediate = self.r1.multiply(column)?;
        self.r2.multiply(&intermediate)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use glam::{DMat3, DVec3};

    use super::*;

    fn apply_to(rotation: &SezRotation, v: DVec3) -> DVec3 {
        rotation
            .apply(&Matrix::column(v))
            .unwrap()
            .to_dvec3()
            .unwrap()
    }

    #[test]
    fn test_equator_prime_meridian_axes() {
        let rotation = SezRotation::build(0.0, 0.0);

        // Local up is +X, east is +Y, north is +Z.
        assert!((apply_to(&rotation, DVec3::X) - DVec3::Z).length() < 1e-12);
        assert!((apply_to(&rotation, DVec3::Y) - DVec3::Y).length() < 1e-12);
        assert!((apply_to(&rotation, DVec3::Z) + DVec3::X).length() < 1e-12);
    }

    #[test]
    fn test_north_pole_limit() {
        // At the pole, moving away from the Z axis along +X is due south.
        let rotation = SezRotation::build(FRAC_PI_2, 0.0);
        assert!((apply_to(&rotation, DVec3::X) - DVec3::X).length() < 1e-12);
        assert!((apply_to(&rotation, DVec3::Z) - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_rotations_do_not_commute() {
        let rotation = SezRotation::build(0.6, 1.1);
        let forward = rotation.r2.multiply(&rotation.r1).unwrap();
        let reversed = rotation.r1.multiply(&rotation.r2).unwrap();
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_composite_matches_glam() {
        let (lat, lon) = (0.7, -1.3);
        let rotation = SezRotation::build(lat, lon);
        let composite = rotation.composite().unwrap();

        let (sin_lon, cos_lon) = f64::sin_cos(lon);
        let (sin_lat, cos_lat) = f64::sin_cos(lat);
        // Column-major construction of the same two matrices.
        let r1 = DMat3::from_cols(
            DVec3::new(cos_lon, -sin_lon, 0.0),
            DVec3::new(sin_lon, cos_lon, 0.0),
            DVec3::Z,
        );
        let r2 = DMat3::from_cols(
            DVec3::new(sin_lat, 0.0, cos_lat),
            DVec3::Y,
            DVec3::new(-cos_lat, 0.0, sin_lat),
        );

        assert_eq!(Matrix::from(r1), rotation.r1);
        let expected = Matrix::from(r2 * r1);
        for i in 0..3 {
            for j in 0..3 {
                let diff = composite.get(i, j).unwrap() - expected.get(i, j).unwrap();
                assert!(diff.abs() < 1e-12, "[{i}][{j}] differs by {diff}");
            }
        }
    }

    #[test]
    fn test_preserves_length() {
        let rotation = SezRotation::build(-0.4, 2.9);
        let v = DVec3::new(120.0, -35.0, 880.0);
        assert!((apply_to(&rotation, v).length() - v.length()).abs() < 1e-9);
    }
}

//! Convert ECEF positions into topocentric South-East-Zenith vectors.
//!
//! This crate provides pure synchronous conversions from Earth-Centered,
//! Earth-Fixed (ECEF) Cartesian positions to geodetic coordinates and to the
//! local SEZ frame of an observer. All distances are in kilometers and all
//! angles in radians.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives
//! - **Explicit model**: The ellipsoid is a value passed in, never a global
//! - **No silent truncation**: Non-convergence is reported alongside results
//!
//! # Example
//!
//! ```
//! use glam::DVec3;
//! use topocentric::SezTransformer;
//!
//! let transformer = SezTransformer::default();
//! let origin = DVec3::new(6378.1363, 0.0, 0.0);
//! let target = DVec3::new(6478.1363, 0.0, 0.0);
//!
//! let solution = transformer.transform(origin, target)?;
//! assert!((solution.sez.zenith - 100.0).abs() < 1e-9);
//! # Ok::<(), topocentric::Error>(())
//! ```

mod ellipsoid;
mod error;
pub mod geodetic;
pub mod matrix;
pub mod rotation;
mod sez;

pub use ellipsoid::Ellipsoid;
pub use error::{Error, Result};
pub use geodetic::{GeodeticCoordinate, GeodeticSolution, ecef_to_llh, llh_to_ecef};
pub use matrix::Matrix;
pub use rotation::SezRotation;
pub use sez::{LookAngles, SezSolution, SezTransformer, SezVector};

//! Command-line parameter parsing.

use std::ffi::OsString;

use clap::{CommandFactory, Parser, error::ErrorKind};
use glam::DVec3;
use topocentric::Ellipsoid;

/// Default equatorial radius in kilometers.
const DEFAULT_RADIUS_KM: f64 = Ellipsoid::EARTH.equatorial_radius_km();
/// Default first eccentricity.
const DEFAULT_ECCENTRICITY: f64 = Ellipsoid::EARTH.eccentricity();

/// Parameters for a single conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchParams {
    /// Observer position in ECEF kilometers.
    pub origin: DVec3,
    /// Target position in ECEF kilometers.
    pub target: DVec3,
    pub ellipsoid: Ellipsoid,
    /// Also print azimuth, elevation and range.
    pub look_angles: bool,
}

#[derive(Parser)]
#[command(
    about = "Convert an ECEF target position to SEZ coordinates relative to an ECEF origin",
    allow_negative_numbers = true
)]
struct CliArgs {
    /// Origin ECEF x-component in km.
    o_x_km: f64,
    /// Origin ECEF y-component in km.
    o_y_km: f64,
    /// Origin ECEF z-component in km.
    o_z_km: f64,
    /// Target ECEF x-component in km.
    x_km: f64,
    /// Target ECEF y-component in km.
    y_km: f64,
    /// Target ECEF z-component in km.
    z_km: f64,

    /// Ellipsoid equatorial radius in km.
    #[arg(long, default_value_t = DEFAULT_RADIUS_KM)]
    radius_km: f64,

    /// Ellipsoid first eccentricity.
    #[arg(long, default_value_t = DEFAULT_ECCENTRICITY)]
    eccentricity: f64,

    /// Also print azimuth (deg), elevation (deg) and range (km).
    #[arg(long)]
    look_angles: bool,
}

/// Parse parameters from an argument list, program name first.
pub fn parse_from<I, T>(args: I) -> Result<LaunchParams, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = CliArgs::try_parse_from(args)?;

    let ellipsoid = Ellipsoid::new(args.radius_km, args.eccentricity)
        .map_err(|e| CliArgs::command().error(ErrorKind::ValueValidation, e))?;

    Ok(LaunchParams {
        origin: DVec3::new(args.o_x_km, args.o_y_km, args.o_z_km),
        target: DVec3::new(args.x_km, args.y_km, args.z_km),
        ellipsoid,
        look_angles: args.look_angles,
    })
}

/// Parse parameters from the process arguments.
///
/// Prints usage and exits with status 2 when the arguments are malformed.
pub fn parse() -> LaunchParams {
    parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
}

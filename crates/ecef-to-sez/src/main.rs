//! Print the South-East-Zenith vector from an ECEF origin to an ECEF target.
//!
//! Usage: `ecef-to-sez o_x_km o_y_km o_z_km x_km y_km z_km`
//!
//! Writes the south, east and zenith components (km) to stdout, one per line.
//! Exits with 0 on success, 2 on malformed arguments and 1 when the
//! conversion itself fails.

mod launch_params;

use std::process::ExitCode;

use topocentric::{SezSolution, SezTransformer};

fn main() -> ExitCode {
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let params = launch_params::parse();
    tracing::debug!(?params, "parsed launch parameters");

    let transformer = SezTransformer::new(params.ellipsoid);
    let solution = match transformer.transform(params.origin, params.target) {
        Ok(solution) => solution,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if !solution.converged() {
        tracing::warn!(
            iterations = solution.origin.iterations,
            "origin latitude did not converge; result may be inaccurate"
        );
    }

    print_sez(&solution);

    if params.look_angles {
        match solution.sez.look_angles() {
            Ok(look) => {
                println!("{}", look.azimuth.to_degrees());
                println!("{}", look.elevation.to_degrees());
                println!("{}", look.range);
            }
            Err(e) => {
                tracing::error!("{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn print_sez(solution: &SezSolution) {
    println!("{}", solution.sez.south);
    println!("{}", solution.sez.east);
    println!("{}", solution.sez.zenith);
}

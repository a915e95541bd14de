//! Error types for topocentric conversions.

use std::fmt;

/// Result type for topocentric operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting positions.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Matrix operands have incompatible shapes.
    DimensionMismatch {
        /// Shape of the left operand as (rows, columns).
        left: (usize, usize),
        /// Shape of the right operand as (rows, columns).
        right: (usize, usize),
    },
    /// Matrix data does not fill the requested shape.
    InvalidMatrix { rows: usize, cols: usize, len: usize },
    /// The input position is degenerate for the requested conversion.
    Singularity {
        /// The step that failed.
        context: &'static str,
        /// Which degenerate condition was hit.
        detail: &'static str,
    },
    /// An input contained NaN or an infinity.
    NonFiniteInput { context: &'static str },
    /// Ellipsoid constants are out of range.
    InvalidEllipsoid { detail: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { left, right } => {
                write!(
                    f,
                    "matrix multiply: cannot multiply {}x{} by {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            Self::InvalidMatrix { rows, cols, len } => {
                write!(
                    f,
                    "matrix construction: {rows}x{cols} shape needs {} values, got {len}",
                    rows * cols
                )
            }
            Self::Singularity { context, detail } => write!(f, "{context}: {detail}"),
            Self::NonFiniteInput { context } => {
                write!(f, "{context}: input contains a non-finite component")
            }
            Self::InvalidEllipsoid { detail } => write!(f, "invalid ellipsoid: {detail}"),
        }
    }
}

impl std::error::Error for Error {}

//! Error types for validated coordinate construction.

use std::fmt;

/// Result type for validated coordinate construction.
pub type Result<T> = std::result::Result<T, CoordinateError>;

/// Errors returned by the checked constructors.
///
/// The transforms themselves never fail; only `try_new` style constructors
/// produce these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    /// Latitude outside [-90, 90] degrees.
    LatitudeOutOfRange {
        /// The rejected latitude in degrees.
        value: f64,
    },
    /// Longitude outside [-180, 180] degrees.
    LongitudeOutOfRange {
        /// The rejected longitude in degrees.
        value: f64,
    },
    /// A component was NaN or infinite.
    NonFinite {
        /// Which component was rejected.
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LatitudeOutOfRange { value } => {
                write!(f, "latitude {value} out of range [-90, 90]")
            }
            Self::LongitudeOutOfRange { value } => {
                write!(f, "longitude {value} out of range [-180, 180]")
            }
            Self::NonFinite { axis, value } => {
                write!(f, "{axis} must be finite, got {value}")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

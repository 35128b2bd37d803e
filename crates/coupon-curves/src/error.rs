//! Error types for curve operations.

use coupon_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Not enough data points for interpolation.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of valid points.
        got: usize,
    },

    /// The same tenor was quoted twice.
    #[error("Duplicate tenor {tenor:.4}")]
    DuplicateTenor {
        /// The repeated tenor in years.
        tenor: f64,
    },

    /// Tenor is negative or not a finite number.
    #[error("Invalid tenor {tenor}")]
    InvalidTenor {
        /// The offending tenor.
        tenor: f64,
    },

    /// Rate cannot be used for annual compounding.
    #[error("Invalid rate {rate} at tenor {tenor:.4}")]
    InvalidRate {
        /// Tenor the rate was quoted at.
        tenor: f64,
        /// The offending rate.
        rate: f64,
    },

    /// Requested tenor is outside the curve's valid range.
    #[error("Tenor {requested:.4} out of range [{min:.4}, {max:.4}]")]
    TenorOutOfRange {
        /// The requested tenor in years.
        requested: f64,
        /// Minimum valid tenor.
        min: f64,
        /// Maximum valid tenor.
        max: f64,
    },

    /// Interpolation failed.
    #[error("Interpolation error: {reason}")]
    InterpolationError {
        /// Description of the interpolation error.
        reason: String,
    },
}

impl CurveError {
    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, got: usize) -> Self {
        Self::InsufficientPoints { required, got }
    }

    /// Creates a tenor out of range error.
    #[must_use]
    pub fn tenor_out_of_range(requested: f64, min: f64, max: f64) -> Self {
        Self::TenorOutOfRange {
            requested,
            min,
            max,
        }
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ExtrapolationNotAllowed { x, min, max } => {
                Self::tenor_out_of_range(x, min, max)
            }
            MathError::InsufficientData { required, actual } => {
                Self::insufficient_points(required, actual)
            }
            MathError::InvalidInput { reason } => Self::InterpolationError { reason },
        }
    }
}

//! Error types for bond operations.

use coupon_config::ConfigError;
use coupon_core::{CoreError, Date};
use coupon_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug)]
pub enum BondError {
    /// Coupon frequency has no supported schedule.
    #[error("Unsupported frequency: {frequency} payments per year (supported: 2, 4)")]
    UnsupportedFrequency {
        /// The rejected payments per year.
        frequency: u32,
    },

    /// Rate curve has too few valid points to price against.
    #[error("Insufficient curve data: need at least {required} valid points, got {got}")]
    InsufficientCurveData {
        /// Minimum required points.
        required: usize,
        /// Valid points available.
        got: usize,
    },

    /// No cash flows remain after the settlement date.
    #[error("Bond has matured: no cash flows after settlement {settlement}")]
    MaturedBond {
        /// Settlement date.
        settlement: Date,
        /// Last scheduled payment, if the schedule had any.
        last_payment: Option<Date>,
    },

    /// Invalid bond terms.
    #[error("Invalid bond terms: {reason}")]
    InvalidTerms {
        /// Description of what's invalid.
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[source] CoreError),

    /// Curve error.
    #[error("Curve error: {0}")]
    Curve(#[source] CurveError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BondError {
    /// Creates an invalid terms error.
    #[must_use]
    pub fn invalid_terms(reason: impl Into<String>) -> Self {
        Self::InvalidTerms {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

impl From<CoreError> for BondError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnsupportedFrequency { frequency } => Self::UnsupportedFrequency { frequency },
            other => Self::Core(other),
        }
    }
}

impl From<CurveError> for BondError {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::InsufficientPoints { required, got } => {
                Self::InsufficientCurveData { required, got }
            }
            other => Self::Curve(other),
        }
    }
}

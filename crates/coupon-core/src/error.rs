//! Error types for the core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by core date and convention handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Coupon frequency has no supported schedule.
    #[error("Unsupported frequency: {frequency} payments per year (supported: 2, 4)")]
    UnsupportedFrequency {
        /// The requested number of payments per year.
        frequency: u32,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unsupported frequency error.
    #[must_use]
    pub fn unsupported_frequency(frequency: u32) -> Self {
        Self::UnsupportedFrequency { frequency }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_unsupported_frequency_display() {
        let err = CoreError::unsupported_frequency(12);
        assert!(err.to_string().contains("12 payments per year"));
    }
}

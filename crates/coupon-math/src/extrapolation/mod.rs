//! Extrapolation beyond the ends of a curve.
//!
//! - [`FlatExtrapolator`]: constant extension from the boundary knot
//!
//! An extrapolator is anchored at whichever boundary the query falls past:
//! the first knot for short tenors, the last knot for long ones.
//!
//! # Example
//!
//! ```rust
//! use coupon_math::extrapolation::{Extrapolator, FlatExtrapolator};
//!
//! // Last observed: 4% at 10 years
//! let rate_15y = FlatExtrapolator.extrapolate(15.0, 10.0, 0.04);
//! assert_eq!(rate_15y, 0.04);
//! ```

mod flat;

pub use flat::FlatExtrapolator;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for extrapolation methods.
pub trait Extrapolator: Send + Sync {
    /// Extrapolates to `t` given the boundary knot nearest to it.
    ///
    /// # Arguments
    ///
    /// * `t` - Target time for extrapolation
    /// * `boundary_t` - Time of the boundary knot
    /// * `boundary_value` - Value at the boundary knot
    fn extrapolate(&self, t: f64, boundary_t: f64, boundary_value: f64) -> f64;

    /// Returns the name of the extrapolation method.
    fn name(&self) -> &'static str;
}

/// Configuration for extrapolation beyond curve boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtrapolationMethod {
    /// No extrapolation - return error outside range
    None,
    /// Constant value from boundary
    #[default]
    Flat,
}

impl ExtrapolationMethod {
    /// Returns the extrapolator for this method, or `None` when extrapolation
    /// is forbidden.
    #[must_use]
    pub fn extrapolator(&self) -> Option<&'static dyn Extrapolator> {
        match self {
            ExtrapolationMethod::None => None,
            ExtrapolationMethod::Flat => Some(&FlatExtrapolator),
        }
    }
}

/// Which quoted rate stands in for tenors shorter than the first knot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortEndRate {
    /// The shortest quoted rate.
    #[default]
    Nearest,
    /// The longest quoted rate, the same one held past the long end.
    LongestRate,
}

impl fmt::Display for ShortEndRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShortEndRate::Nearest => "Nearest",
            ShortEndRate::LongestRate => "LongestRate",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for ExtrapolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExtrapolationMethod::None => "None",
            ExtrapolationMethod::Flat => "Flat",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_flat() {
        assert_eq!(ExtrapolationMethod::default(), ExtrapolationMethod::Flat);
    }

    #[test]
    fn test_extrapolator_lookup() {
        assert!(ExtrapolationMethod::None.extrapolator().is_none());

        let flat = ExtrapolationMethod::Flat.extrapolator().unwrap();
        assert_eq!(flat.name(), "Flat");
        assert_eq!(flat.extrapolate(0.1, 1.0, 0.02), 0.02);
    }

    #[test]
    fn test_short_end_rate() {
        assert_eq!(ShortEndRate::default(), ShortEndRate::Nearest);
        assert_eq!(
            serde_json::to_string(&ShortEndRate::LongestRate).unwrap(),
            "\"longest_rate\""
        );
        assert_eq!(ShortEndRate::LongestRate.to_string(), "LongestRate");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&ExtrapolationMethod::Flat).unwrap(),
            "\"flat\""
        );
        let parsed: ExtrapolationMethod = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, ExtrapolationMethod::None);
    }
}

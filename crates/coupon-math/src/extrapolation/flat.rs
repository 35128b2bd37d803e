//! Flat (constant) extrapolation.

use super::Extrapolator;

/// Flat extrapolation - constant value from the boundary knot.
///
/// Past the last tenor the longest quoted rate is held; before the first
/// tenor the shortest quoted rate is held.
///
/// # Example
///
/// ```rust
/// use coupon_math::extrapolation::{FlatExtrapolator, Extrapolator};
///
/// let extrap = FlatExtrapolator;
///
/// // Last observed: 5% at 10 years
/// let rate = extrap.extrapolate(15.0, 10.0, 0.05);
/// assert_eq!(rate, 0.05);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatExtrapolator;

impl FlatExtrapolator {
    /// Creates a new flat extrapolator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Extrapolator for FlatExtrapolator {
    fn extrapolate(&self, _t: f64, _boundary_t: f64, boundary_value: f64) -> f64 {
        boundary_value
    }

    fn name(&self) -> &'static str {
        "Flat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_returns_boundary_value() {
        let extrap = FlatExtrapolator::new();

        for t in [11.0, 15.0, 30.0, 100.0] {
            let value = extrap.extrapolate(t, 10.0, 0.045);
            assert_relative_eq!(value, 0.045, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_flat_short_end() {
        // Anchored at the first knot, queries before it get the shortest rate
        let value = FlatExtrapolator.extrapolate(0.1, 1.0, 0.015);
        assert_relative_eq!(value, 0.015, epsilon = 1e-15);
    }
}

//! Interpolation between curve knots.
//!
//! Only piecewise linear interpolation is provided; it is what discount-rate
//! curves quoted at a handful of tenors are priced with.

mod linear;

pub use linear::LinearInterpolator;

use crate::error::MathResult;

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_passes_through_knots() {
        let tenors = vec![0.5, 1.0, 2.0, 3.0, 5.0];
        let rates = vec![0.02, 0.025, 0.03, 0.035, 0.04];

        let linear = LinearInterpolator::new(tenors.clone(), rates.clone()).unwrap();
        for (t, r) in tenors.iter().zip(rates.iter()) {
            assert_relative_eq!(linear.interpolate(*t).unwrap(), *r, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_usable_as_trait_object() {
        let interp: &dyn Interpolator = &LinearInterpolator::new(
            vec![0.5, 1.0, 2.0, 3.0, 5.0],
            vec![0.02, 0.025, 0.03, 0.035, 0.04],
        )
        .unwrap();

        assert_relative_eq!(interp.interpolate(4.0).unwrap(), 0.0375, epsilon = 1e-12);
        assert!(interp.interpolate(5.5).is_err());
    }

    #[test]
    fn test_in_range() {
        let interp = LinearInterpolator::new(vec![1.0, 10.0], vec![0.01, 0.03]).unwrap();
        assert!(interp.in_range(1.0));
        assert!(interp.in_range(10.0));
        assert!(!interp.in_range(0.5));
        assert!(!interp.in_range(10.5));
    }
}

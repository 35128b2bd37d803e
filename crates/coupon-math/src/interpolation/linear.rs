//! Linear interpolation.

use std::cmp::Ordering;

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Linear interpolation between data points.
///
/// Consecutive knots are joined with straight lines. Queries outside the
/// knot range are rejected; extending a curve past its ends is left to an
/// [`Extrapolator`](crate::extrapolation::Extrapolator).
///
/// # Example
///
/// ```rust
/// use coupon_math::interpolation::{LinearInterpolator, Interpolator};
///
/// let tenors = vec![1.0, 2.0, 5.0, 10.0];
/// let rates = vec![0.01, 0.02, 0.025, 0.03];
///
/// let interp = LinearInterpolator::new(tenors, rates).unwrap();
/// let r = interp.interpolate(1.5).unwrap();
/// assert!((r - 0.015).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (finite, strictly increasing)
    /// * `ys` - Y coordinates (finite)
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if any coordinate is not finite.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input("coordinates must be finite"));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }

        Ok(Self { xs, ys })
    }

    /// Returns the first knot as `(x, y)`.
    pub fn first(&self) -> (f64, f64) {
        (self.xs[0], self.ys[0])
    }

    /// Returns the last knot as `(x, y)`.
    pub fn last(&self) -> (f64, f64) {
        let n = self.xs.len() - 1;
        (self.xs[n], self.ys[n])
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
    fn find_segment(&self, x: f64) -> usize {
        let last_segment = self.xs.len() - 2;
        match self
            .xs
            .binary_search_by(|knot| knot.partial_cmp(&x).unwrap_or(Ordering::Equal))
        {
            Ok(i) => i.min(last_segment),
            Err(i) => i.saturating_sub(1).min(last_segment),
        }
    }

    fn check_range(&self, x: f64) -> MathResult<()> {
        if !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }
        Ok(())
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        let i = self.find_segment(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        let w = (x - x0) / (x1 - x0);
        Ok(y0 + w * (y1 - y0))
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_linear_interpolation() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 4.0]).unwrap();

        assert_relative_eq!(interp.interpolate(0.0).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(2.0).unwrap(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(0.5).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let interp = LinearInterpolator::new(vec![1.0, 2.0], vec![0.01, 0.02]).unwrap();

        assert_eq!(
            interp.interpolate(2.5),
            Err(MathError::ExtrapolationNotAllowed {
                x: 2.5,
                min: 1.0,
                max: 2.0
            })
        );
        assert!(interp.interpolate(0.5).is_err());
        assert!(interp.interpolate(f64::NAN).is_err());
    }

    #[test]
    fn test_boundary_knots() {
        let interp =
            LinearInterpolator::new(vec![1.0, 5.0, 10.0], vec![0.01, 0.02, 0.03]).unwrap();
        assert_eq!(interp.first(), (1.0, 0.01));
        assert_eq!(interp.last(), (10.0, 0.03));
        assert_eq!(interp.min_x(), 1.0);
        assert_eq!(interp.max_x(), 10.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            LinearInterpolator::new(vec![0.0], vec![1.0]).unwrap_err(),
            MathError::insufficient_data(2, 1)
        );
        assert!(LinearInterpolator::new(vec![0.0, 1.0], vec![1.0]).is_err());
        assert!(LinearInterpolator::new(vec![1.0, 0.0, 2.0], vec![1.0, 0.0, 2.0]).is_err());
        assert!(LinearInterpolator::new(vec![1.0, 1.0], vec![1.0, 2.0]).is_err());
        assert!(LinearInterpolator::new(vec![0.0, f64::NAN], vec![1.0, 2.0]).is_err());
        assert!(LinearInterpolator::new(vec![0.0, 1.0], vec![1.0, f64::INFINITY]).is_err());
    }

    proptest! {
        #[test]
        fn prop_interpolated_value_stays_within_segment(
            y0 in -0.5f64..0.5,
            y1 in -0.5f64..0.5,
            y2 in -0.5f64..0.5,
            x in 1.0f64..10.0,
        ) {
            let interp =
                LinearInterpolator::new(vec![1.0, 4.0, 10.0], vec![y0, y1, y2]).unwrap();
            let value = interp.interpolate(x).unwrap();
            let (lo, hi) = if x <= 4.0 { (y0, y1) } else { (y1, y2) };
            prop_assert!(value >= lo.min(hi) - 1e-12);
            prop_assert!(value <= lo.max(hi) + 1e-12);
        }
    }
}

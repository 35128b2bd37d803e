//! Accrued interest.
//!
//! Accrual is measured backwards from the next payment: with `P` days in a
//! coupon period and `d` days from settlement to the next payment, the
//! seller has earned `coupon * (P - d) / P`.
//!
//! # Example
//!
//! ```rust
//! use coupon_bonds::cashflows::AccruedInterestCalculator;
//!
//! // One day before a 182-day period ends, 181 days of a 27.0 coupon have accrued
//! let accrued = AccruedInterestCalculator::standard(27.0, 182, 1);
//! assert!((accrued - 27.0 * 181.0 / 182.0).abs() < 1e-12);
//! ```

/// Calculator for accrued interest.
pub struct AccruedInterestCalculator;

impl AccruedInterestCalculator {
    /// Calculates accrued interest from the days left to the next payment.
    ///
    /// # Arguments
    ///
    /// * `coupon_amount` - Coupon paid at the end of the period
    /// * `period_days` - Length of the coupon period in days
    /// * `days_to_next` - Days from settlement to the next payment
    ///
    /// Returns zero for a non-positive period length. The result is negative
    /// when `days_to_next` exceeds `period_days`, i.e. when settlement falls
    /// before the period starts.
    #[must_use]
    pub fn standard(coupon_amount: f64, period_days: i64, days_to_next: i64) -> f64 {
        if period_days <= 0 {
            return 0.0;
        }

        let accrued_days = (period_days - days_to_next) as f64;
        coupon_amount * accrued_days / period_days as f64
    }

    /// Calculates accrued interest, reporting zero when settlement falls
    /// before the period starts.
    #[must_use]
    pub fn floored(coupon_amount: f64, period_days: i64, days_to_next: i64) -> f64 {
        Self::standard(coupon_amount, period_days, days_to_next).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_start_of_period_is_zero() {
        assert_relative_eq!(AccruedInterestCalculator::standard(27.0, 182, 182), 0.0);
    }

    #[test]
    fn test_on_payment_date_is_full_coupon() {
        assert_relative_eq!(AccruedInterestCalculator::standard(27.0, 182, 0), 27.0);
    }

    #[test]
    fn test_mid_period() {
        let accrued = AccruedInterestCalculator::standard(1.0, 90, 30);
        assert_relative_eq!(accrued, 60.0 / 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_before_period_start() {
        let raw = AccruedInterestCalculator::standard(27.0, 182, 200);
        assert!(raw < 0.0);
        assert_relative_eq!(raw, 27.0 * -18.0 / 182.0, epsilon = 1e-12);
        assert_eq!(AccruedInterestCalculator::floored(27.0, 182, 200), 0.0);
    }

    #[test]
    fn test_degenerate_period() {
        assert_eq!(AccruedInterestCalculator::standard(27.0, 0, 10), 0.0);
    }

    #[test]
    fn test_floor_keeps_positive_values() {
        assert_relative_eq!(
            AccruedInterestCalculator::floored(27.0, 182, 1),
            AccruedInterestCalculator::standard(27.0, 182, 1)
        );
    }
}

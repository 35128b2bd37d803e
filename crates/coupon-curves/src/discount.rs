//! Annual-compounding discount factors.
//!
//! Curve rates are annually compounded, so the present value of one unit
//! paid `t` years from settlement is
//!
//! $$DF(t) = \frac{1}{(1 + r)^t}$$
//!
//! # Example
//!
//! ```rust
//! use coupon_curves::discount_factor;
//!
//! let df = discount_factor(0.05, 2.0);
//! assert!((df - 1.0 / 1.1025).abs() < 1e-12);
//! ```

/// Returns the discount factor for an annually compounded `rate` over
/// `t` years.
///
/// `rate` must be greater than -1 for the result to be meaningful; curves
/// reject anything else on construction.
#[must_use]
pub fn discount_factor(rate: f64, t: f64) -> f64 {
    1.0 / (1.0 + rate).powf(t)
}

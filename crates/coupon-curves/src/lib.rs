//! # Coupon Curves
//!
//! Discount-rate term structures for the Coupon bond valuation library.
//!
//! A [`RateCurve`] maps maturity in years to an annually compounded rate. It
//! is held as a sorted array of `(years, rate)` knots:
//!
//! - missing quotes (`None` or `NaN`) are dropped on construction
//! - duplicate tenors are rejected
//! - lookups interpolate linearly between knots and extrapolate flat past
//!   either end, reporting where the rate came from
//!
//! ## Quick Start
//!
//! ```rust
//! use coupon_curves::prelude::*;
//!
//! let curve = RateCurve::from_points([(1.0, 0.010), (5.0, 0.020), (10.0, 0.025)]).unwrap();
//!
//! let inside = curve.rate(3.0).unwrap();
//! assert!((inside.rate - 0.015).abs() < 1e-12);
//! assert!(!inside.is_extrapolated());
//!
//! // Past the 10y knot the 10y rate is held
//! let beyond = curve.rate(15.0).unwrap();
//! assert_eq!(beyond.rate, 0.025);
//! assert!(beyond.is_extrapolated());
//!
//! let df = discount_factor(beyond.rate, 15.0);
//! assert!(df < 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod discount;
pub mod error;
pub mod rate_curve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::discount::discount_factor;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::rate_curve::{CurveEnd, CurvePoint, CurveRate, RateCurve, RateSource};
    pub use coupon_math::extrapolation::{ExtrapolationMethod, ShortEndRate};
}

pub use discount::discount_factor;
pub use error::{CurveError, CurveResult};
pub use rate_curve::{CurveEnd, CurvePoint, CurveRate, RateCurve, RateSource};

pub use coupon_math::extrapolation::{ExtrapolationMethod, ShortEndRate};

//! # Coupon Math
//!
//! Numerical building blocks for discount-rate curves:
//!
//! - **Interpolation**: piecewise linear interpolation over sorted knots
//! - **Extrapolation**: flat extension beyond the first or last knot
//!
//! Curves in `coupon-curves` combine the two: inside the knot range they
//! interpolate, outside it they ask an [`extrapolation::Extrapolator`] for a
//! value anchored at the nearest boundary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod extrapolation;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::extrapolation::{
        ExtrapolationMethod, Extrapolator, FlatExtrapolator, ShortEndRate,
    };
    pub use crate::interpolation::{Interpolator, LinearInterpolator};
}

pub use error::{MathError, MathResult};

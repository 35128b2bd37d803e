//! # Coupon Bonds
//!
//! Fixed coupon bond schedules and curve pricing for the Coupon valuation
//! library.
//!
//! This crate provides:
//!
//! - **Instruments**: Fixed coupon bond terms with validation
//! - **Cash Flows**: Evenly spaced payment schedules, accrued interest
//! - **Pricing**: ACT/365F discounting against a rate curve, fair (clean) price
//!
//! ## Example
//!
//! ```rust
//! use coupon_bonds::prelude::*;
//! use coupon_core::types::Date;
//! use coupon_curves::RateCurve;
//!
//! // 5.4% semi-annual bond, 1000 face
//! let terms = BondTermsBuilder::new()
//!     .coupon_rate(5.4)
//!     .face_value(1000.0)
//!     .issue_date(Date::from_ymd(2019, 1, 1).unwrap())
//!     .redemption_date(Date::from_ymd(2020, 12, 31).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let schedule = build_schedule(&terms).unwrap();
//! assert_eq!(schedule.amounts(), vec![27.0, 27.0, 27.0, 1027.0]);
//!
//! let curve = RateCurve::from_points([(1.0, 0.04), (2.0, 0.05), (3.0, 0.06), (4.0, 0.07)])
//!     .unwrap();
//! let settlement = Date::from_ymd(2020, 6, 30).unwrap();
//! let valuation = price(&schedule, &curve, settlement).unwrap();
//!
//! assert!(valuation.fair_price > 0.0);
//! assert!(valuation.fair_price < 1054.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod cashflows;
pub mod error;
pub mod instruments;
pub mod pricing;

/// Prelude module for convenient imports.
pub mod prelude {
    // Cash flows
    pub use crate::cashflows::{build_schedule, AccruedInterestCalculator, Schedule};

    // Errors
    pub use crate::error::{BondError, BondResult};

    // Instruments
    pub use crate::instruments::{BondTerms, BondTermsBuilder};

    // Pricing
    pub use crate::pricing::{
        price, DiscountEngine, DiscountedCashFlow, Valuation, ValuationContext,
    };
}

pub use cashflows::{build_schedule, Schedule};
pub use error::{BondError, BondResult};
pub use instruments::{BondTerms, BondTermsBuilder};
pub use pricing::{price, DiscountEngine, Valuation, ValuationContext};

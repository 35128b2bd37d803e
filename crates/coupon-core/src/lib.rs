//! # Coupon Core
//!
//! Core types and conventions for the Coupon bond valuation library.
//!
//! This crate provides the foundational building blocks used throughout Coupon:
//!
//! - **Types**: `Date`, `Frequency`, `CashFlow` and `CashFlowSchedule`
//! - **Day Count Conventions**: Year fraction calculation (ACT/365 Fixed)
//!
//! ## Example
//!
//! ```rust
//! use coupon_core::prelude::*;
//!
//! let settlement = Date::from_ymd(2020, 6, 30).unwrap();
//! let payment = Date::from_ymd(2020, 12, 31).unwrap();
//!
//! let t = Act365Fixed.year_fraction(settlement, payment);
//! assert!((t - 184.0 / 365.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, CashFlowSchedule, CashFlowType, Date, Frequency};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, Frequency};

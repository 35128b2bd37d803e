//! Bond pricing against a rate curve.
//!
//! This module provides:
//! - [`DiscountEngine`]: discounts remaining payments and nets off accrued interest
//! - [`Valuation`]: fair price with a per-payment breakdown
//! - [`ValuationContext`]: terms, curve and settlement priced together
//! - [`price`]: one-shot pricing with the default configuration

mod context;
mod engine;
mod valuation;

pub use context::ValuationContext;
pub use engine::DiscountEngine;
pub use valuation::{DiscountedCashFlow, Valuation};

use coupon_core::types::Date;
use coupon_curves::RateCurve;

use crate::cashflows::Schedule;
use crate::error::BondResult;

/// Prices a schedule at `settlement` with the default engine.
///
/// Payments beyond the curve are discounted at the nearest quoted rate.
pub fn price(schedule: &Schedule, curve: &RateCurve, settlement: Date) -> BondResult<Valuation> {
    DiscountEngine::default().price(schedule, curve, settlement)
}

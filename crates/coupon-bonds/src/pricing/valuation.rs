//! Pricing results.

use serde::{Deserialize, Serialize};

use coupon_core::types::Date;
use coupon_curves::RateSource;

use crate::cashflows::Schedule;

/// One remaining payment with its discounting inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountedCashFlow {
    /// Payment date.
    pub date: Date,
    /// Undiscounted amount.
    pub amount: f64,
    /// Days from settlement to payment.
    pub days: i64,
    /// ACT/365F year fraction from settlement to payment.
    pub year_fraction: f64,
    /// Curve rate used for this payment.
    pub rate: f64,
    /// Whether the rate was interpolated or extrapolated.
    pub rate_source: RateSource,
    /// `1 / (1 + rate)^year_fraction`.
    pub discount_factor: f64,
    /// `amount * discount_factor`.
    pub present_value: f64,
}

impl DiscountedCashFlow {
    /// Returns true if the rate came from outside the curve's range.
    #[must_use]
    pub fn is_extrapolated(&self) -> bool {
        matches!(self.rate_source, RateSource::Extrapolated { .. })
    }
}

/// Result of pricing a schedule against a rate curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    /// Settlement date priced at.
    pub settlement: Date,
    /// Clean price: present value less accrued interest.
    pub fair_price: f64,
    /// Sum of discounted remaining payments.
    pub gross_present_value: f64,
    /// Interest accrued to settlement.
    pub accrued_interest: f64,
    /// Days from settlement to the next payment.
    pub days_to_first_flow: i64,
    /// Per-payment breakdown in date order.
    pub flows: Vec<DiscountedCashFlow>,
    /// Payments remaining after settlement.
    pub remaining_schedule: Schedule,
}

impl Valuation {
    /// Returns the discount factor of each remaining payment.
    #[must_use]
    pub fn discount_factors(&self) -> Vec<f64> {
        self.flows.iter().map(|f| f.discount_factor).collect()
    }

    /// Returns the year fraction of each remaining payment.
    #[must_use]
    pub fn year_fractions(&self) -> Vec<f64> {
        self.flows.iter().map(|f| f.year_fraction).collect()
    }

    /// Returns the present value of each remaining payment.
    #[must_use]
    pub fn discounted_amounts(&self) -> Vec<f64> {
        self.flows.iter().map(|f| f.present_value).collect()
    }

    /// Returns true if any payment was discounted at an extrapolated rate.
    #[must_use]
    pub fn has_extrapolation(&self) -> bool {
        self.flows.iter().any(DiscountedCashFlow::is_extrapolated)
    }

    /// Returns the payments discounted at extrapolated rates.
    pub fn extrapolated_flows(&self) -> impl Iterator<Item = &DiscountedCashFlow> {
        self.flows.iter().filter(|f| f.is_extrapolated())
    }

    /// Returns the undiscounted sum of remaining payments.
    #[must_use]
    pub fn undiscounted_total(&self) -> f64 {
        self.flows.iter().map(|f| f.amount).sum()
    }
}

//! Coupon schedule construction.
//!
//! Payment dates are laid out by dividing the issue-to-redemption day range
//! into equal parts rather than stepping by calendar months:
//!
//! 1. Count whole calendar months between issue and redemption, ignoring
//!    the day of month.
//! 2. Divide by the months in one coupon period and round half to even,
//!    with a minimum of one period.
//! 3. Place `periods + 1` evenly spaced points from issue to redemption and
//!    drop the first (issue) point.
//!
//! # Example
//!
//! ```rust
//! use coupon_bonds::cashflows::build_schedule;
//! use coupon_bonds::instruments::BondTerms;
//! use coupon_core::types::Date;
//!
//! let terms = BondTerms::new(
//!     5.4,
//!     2,
//!     1000.0,
//!     Date::from_ymd(2019, 1, 1).unwrap(),
//!     Date::from_ymd(2020, 12, 31).unwrap(),
//! )
//! .unwrap();
//!
//! let schedule = build_schedule(&terms).unwrap();
//! assert_eq!(schedule.len(), 4);
//! assert_eq!(schedule.amounts(), vec![27.0, 27.0, 27.0, 1027.0]);
//! ```

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use coupon_core::types::{CashFlow, CashFlowSchedule, Date, Frequency};

use crate::error::{BondError, BondResult};
use crate::instruments::BondTerms;

/// A bond's cash-flow schedule with the metadata pricing needs.
///
/// Payment dates are strictly increasing. The final flow carries the face
/// value on top of the coupon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Dated payments in order.
    cash_flows: CashFlowSchedule,
    /// Coupon frequency the schedule was generated for.
    frequency: Frequency,
    /// Coupon paid each period.
    coupon_amount: f64,
    /// Length in days of the first generated period.
    nominal_period_days: i64,
}

impl Schedule {
    /// Returns the underlying cash flows.
    #[must_use]
    pub fn cash_flows(&self) -> &CashFlowSchedule {
        &self.cash_flows
    }

    /// Returns the coupon frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the coupon paid each period.
    #[must_use]
    pub fn coupon_amount(&self) -> f64 {
        self.coupon_amount
    }

    /// Returns the period length used for accrual, in days.
    #[must_use]
    pub fn nominal_period_days(&self) -> i64 {
        self.nominal_period_days
    }

    /// Returns the number of payments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cash_flows.len()
    }

    /// Returns true if no payments remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash_flows.is_empty()
    }

    /// Returns an iterator over the payments.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlow> {
        self.cash_flows.iter()
    }

    /// Returns the payment dates.
    #[must_use]
    pub fn dates(&self) -> Vec<Date> {
        self.iter().map(CashFlow::date).collect()
    }

    /// Returns the payment amounts.
    #[must_use]
    pub fn amounts(&self) -> Vec<f64> {
        self.iter().map(CashFlow::amount).collect()
    }

    /// Returns the undiscounted sum of all payments.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.cash_flows.total()
    }

    /// Returns the last payment date, if any.
    #[must_use]
    pub fn last_payment_date(&self) -> Option<Date> {
        self.cash_flows.last().map(CashFlow::date)
    }

    /// Returns a new schedule holding only payments strictly after `date`.
    ///
    /// `self` is left untouched, so the same schedule can be priced at any
    /// number of settlement dates.
    #[must_use]
    pub fn after(&self, date: Date) -> Self {
        Self {
            cash_flows: self.cash_flows.after(date),
            frequency: self.frequency,
            coupon_amount: self.coupon_amount,
            nominal_period_days: self.nominal_period_days,
        }
    }

    /// Drops every payment on or before `date`, in place.
    ///
    /// This narrowing is one-way. Once a payment is dropped it is gone, so
    /// pricing the narrowed schedule at an earlier settlement misses the
    /// coupons paid in between and gives a smaller value than a freshly
    /// built schedule would.
    pub fn retain_after(&mut self, date: Date) {
        self.cash_flows.retain_after(date);
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.as_slice().iter()
    }
}

/// Rounds `months / months_per_period` half to even, with a floor of one.
fn period_count(months: u32, months_per_period: u32) -> u32 {
    let quotient = months / months_per_period;
    let remainder = months % months_per_period;

    let rounded = match (2 * remainder).cmp(&months_per_period) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal if quotient % 2 == 0 => quotient,
        Ordering::Equal => quotient + 1,
    };

    rounded.max(1)
}

/// Builds the payment schedule for a bond.
///
/// # Errors
///
/// Returns `BondError::UnsupportedFrequency` if the bond's payments per
/// year has no schedule, or `BondError::InvalidTerms` if the date range is
/// too short to hold distinct payment dates.
pub fn build_schedule(terms: &BondTerms) -> BondResult<Schedule> {
    let frequency = terms.frequency()?;
    let issue = terms.issue_date();
    let redemption = terms.redemption_date();

    // Redemption is after issue, so the month count is never negative
    let months = u32::try_from(issue.months_between(&redemption).max(0)).unwrap_or(0);
    let periods = period_count(months, frequency.months_per_period());

    let points = Date::evenly_spaced(issue, redemption, periods)?;
    let nominal_period_days = points[0].days_between(&points[1]);

    debug!(
        "Schedule {} -> {}: {} months, {} {} periods, first period {} days (nominal {:.2})",
        issue,
        redemption,
        months,
        periods,
        frequency,
        nominal_period_days,
        frequency.nominal_period_days()
    );

    let coupon_amount = terms.coupon_per_period()?;
    let face_value = terms.face_value();
    let last = points.len() - 2;

    let cash_flows: CashFlowSchedule = points
        .windows(2)
        .enumerate()
        .map(|(i, w)| {
            let flow = if i == last {
                CashFlow::final_payment(w[1], coupon_amount, face_value)
            } else {
                CashFlow::coupon(w[1], coupon_amount)
            };
            flow.with_accrual(w[0], w[1])
        })
        .collect();

    if !cash_flows.is_strictly_increasing() {
        return Err(BondError::invalid_terms(format!(
            "{issue} to {redemption} is too short for {periods} distinct payment dates"
        )));
    }

    Ok(Schedule {
        cash_flows,
        frequency,
        coupon_amount,
        nominal_period_days,
    })
}

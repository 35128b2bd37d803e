//! Cash flow types for bond valuation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowType {
    /// Regular coupon payment
    Coupon,
    /// Combined coupon and principal (final payment)
    CouponAndPrincipal,
}

impl fmt::Display for CashFlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowType::Coupon => "Coupon",
            CashFlowType::CouponAndPrincipal => "Coupon+Principal",
        };
        write!(f, "{name}")
    }
}

/// A dated cash flow.
///
/// Coupon flows carry the accrual period they pay for when known.
///
/// # Example
///
/// ```rust
/// use coupon_core::types::{CashFlow, Date};
///
/// let cf = CashFlow::coupon(Date::from_ymd(2025, 6, 15).unwrap(), 27.0);
/// assert_eq!(cf.amount(), 27.0);
/// assert!(!cf.is_principal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    date: Date,
    /// Cash flow amount in currency units
    amount: f64,
    /// Type of cash flow
    cf_type: CashFlowType,
    /// Accrual period start date
    accrual_start: Option<Date>,
    /// Accrual period end date
    accrual_end: Option<Date>,
}

impl CashFlow {
    /// Creates a new cash flow with basic fields.
    #[must_use]
    pub fn new(date: Date, amount: f64, cf_type: CashFlowType) -> Self {
        Self {
            date,
            amount,
            cf_type,
            accrual_start: None,
            accrual_end: None,
        }
    }

    /// Creates a coupon cash flow without accrual period.
    #[must_use]
    pub fn coupon(date: Date, amount: f64) -> Self {
        Self::new(date, amount, CashFlowType::Coupon)
    }

    /// Creates a final cash flow (coupon + principal).
    #[must_use]
    pub fn final_payment(date: Date, coupon: f64, principal: f64) -> Self {
        Self::new(date, coupon + principal, CashFlowType::CouponAndPrincipal)
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the cash flow amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the cash flow type.
    #[must_use]
    pub fn cf_type(&self) -> CashFlowType {
        self.cf_type
    }

    /// Returns the accrual period start date, if any.
    #[must_use]
    pub fn accrual_start(&self) -> Option<Date> {
        self.accrual_start
    }

    /// Returns the accrual period end date, if any.
    #[must_use]
    pub fn accrual_end(&self) -> Option<Date> {
        self.accrual_end
    }

    /// Returns true if this includes principal repayment.
    #[must_use]
    pub fn is_principal(&self) -> bool {
        matches!(self.cf_type, CashFlowType::CouponAndPrincipal)
    }

    /// Sets the accrual period for this cash flow.
    #[must_use]
    pub fn with_accrual(mut self, start: Date, end: Date) -> Self {
        self.accrual_start = Some(start);
        self.accrual_end = Some(end);
        self
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.date, self.amount, self.cf_type)
    }
}

/// A schedule of cash flows, ordered by payment date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    /// Ordered list of cash flows
    cash_flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Returns the cash flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cash_flows.len()
    }

    /// Returns true if there are no cash flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash_flows.is_empty()
    }

    /// Returns an iterator over the cash flows.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlow> {
        self.cash_flows.iter()
    }

    /// Returns the first cash flow, if any.
    #[must_use]
    pub fn first(&self) -> Option<&CashFlow> {
        self.cash_flows.first()
    }

    /// Returns the last cash flow, if any.
    #[must_use]
    pub fn last(&self) -> Option<&CashFlow> {
        self.cash_flows.last()
    }

    /// Returns the undiscounted total of all cash flows.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.cash_flows.iter().map(|cf| cf.amount).sum()
    }

    /// Returns true if payment dates are strictly increasing.
    #[must_use]
    pub fn is_strictly_increasing(&self) -> bool {
        self.cash_flows.windows(2).all(|w| w[0].date < w[1].date)
    }

    /// Returns the cash flows paid strictly after `date`, in order.
    #[must_use]
    pub fn after(&self, date: Date) -> Self {
        Self {
            cash_flows: self
                .cash_flows
                .iter()
                .filter(|cf| cf.date > date)
                .copied()
                .collect(),
        }
    }

    /// Drops, in place, every cash flow paid on or before `date`.
    pub fn retain_after(&mut self, date: Date) {
        self.cash_flows.retain(|cf| cf.date > date);
    }
}

impl IntoIterator for CashFlowSchedule {
    type Item = CashFlow;
    type IntoIter = std::vec::IntoIter<CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.iter()
    }
}

impl FromIterator<CashFlow> for CashFlowSchedule {
    fn from_iter<I: IntoIterator<Item = CashFlow>>(iter: I) -> Self {
        Self {
            cash_flows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn sample_schedule() -> CashFlowSchedule {
        vec![
            CashFlow::coupon(date(2025, 6, 15), 2.5),
            CashFlow::coupon(date(2025, 12, 15), 2.5),
            CashFlow::final_payment(date(2026, 6, 15), 2.5, 100.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_final_payment() {
        let cf = CashFlow::final_payment(date(2030, 6, 15), 2.5, 100.0);

        assert_relative_eq!(cf.amount(), 102.5);
        assert_eq!(cf.cf_type(), CashFlowType::CouponAndPrincipal);
        assert!(cf.is_principal());
    }

    #[test]
    fn test_accrual_period() {
        let cf = CashFlow::coupon(date(2025, 6, 15), 2.5)
            .with_accrual(date(2024, 12, 15), date(2025, 6, 15));
        assert_eq!(cf.accrual_start(), Some(date(2024, 12, 15)));
        assert_eq!(cf.accrual_end(), Some(date(2025, 6, 15)));
    }

    #[test]
    fn test_schedule_totals() {
        let schedule = sample_schedule();
        assert_eq!(schedule.len(), 3);
        assert_relative_eq!(schedule.total(), 107.5);
        assert!(schedule.is_strictly_increasing());
    }

    #[test]
    fn test_after_is_strict_and_non_destructive() {
        let schedule = sample_schedule();

        let remaining = schedule.after(date(2025, 12, 15));
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining.first().unwrap().date(), date(2026, 6, 15));
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn test_retain_after_narrows_in_place() {
        let mut schedule = sample_schedule();
        schedule.retain_after(date(2025, 7, 1));
        assert_eq!(schedule.len(), 2);

        // Narrowing is one-way: an earlier date cannot bring flows back
        schedule.retain_after(date(2025, 1, 1));
        assert_eq!(schedule.len(), 2);
    }
}

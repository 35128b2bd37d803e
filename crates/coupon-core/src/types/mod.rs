//! Domain types for bond valuation.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`Frequency`]: Coupon payment frequency
//! - [`CashFlow`]: Dated cash flow amount
//! - [`CashFlowSchedule`]: Ordered sequence of cash flows

mod cashflow;
mod date;
mod frequency;

pub use cashflow::{CashFlow, CashFlowSchedule, CashFlowType};
pub use date::Date;
pub use frequency::Frequency;

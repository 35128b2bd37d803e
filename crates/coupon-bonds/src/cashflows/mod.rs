//! Cash flow generation for bonds.
//!
//! - [`build_schedule`]: turns [`BondTerms`](crate::instruments::BondTerms)
//!   into a dated payment [`Schedule`]
//! - [`AccruedInterestCalculator`]: interest earned since the last payment

mod accrued;
mod schedule;

pub use accrued::AccruedInterestCalculator;
pub use schedule::{build_schedule, Schedule};

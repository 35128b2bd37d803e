//! Bond instrument types.
//!
//! - [`BondTerms`]: contractual terms of a fixed coupon bond
//! - [`BondTermsBuilder`]: builder with named-field validation

mod terms;

pub use terms::{BondTerms, BondTermsBuilder};

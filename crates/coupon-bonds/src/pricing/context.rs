//! Bond, curve and settlement bundled for pricing.

use coupon_core::types::Date;
use coupon_curves::RateCurve;

use crate::cashflows::{build_schedule, Schedule};
use crate::error::BondResult;
use crate::instruments::BondTerms;
use crate::pricing::{DiscountEngine, Valuation};

/// Everything needed to value one bond.
///
/// The schedule is built once on construction and reused for every
/// subsequent pricing call.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationContext {
    terms: BondTerms,
    curve: RateCurve,
    settlement: Date,
    schedule: Schedule,
}

impl ValuationContext {
    /// Creates a context, building the bond's payment schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule cannot be built, e.g.
    /// `BondError::UnsupportedFrequency`.
    pub fn new(terms: BondTerms, curve: RateCurve, settlement: Date) -> BondResult<Self> {
        let schedule = build_schedule(&terms)?;
        Ok(Self {
            terms,
            curve,
            settlement,
            schedule,
        })
    }

    /// Returns the bond terms.
    #[must_use]
    pub fn terms(&self) -> &BondTerms {
        &self.terms
    }

    /// Returns the rate curve.
    #[must_use]
    pub fn curve(&self) -> &RateCurve {
        &self.curve
    }

    /// Returns the settlement date.
    #[must_use]
    pub fn settlement(&self) -> Date {
        self.settlement
    }

    /// Returns the full payment schedule.
    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Returns a copy of this context at another settlement date.
    #[must_use]
    pub fn with_settlement(&self, settlement: Date) -> Self {
        Self {
            settlement,
            ..self.clone()
        }
    }

    /// Prices this context with `engine`.
    pub fn price(&self, engine: &DiscountEngine) -> BondResult<Valuation> {
        engine.price_context(self)
    }
}

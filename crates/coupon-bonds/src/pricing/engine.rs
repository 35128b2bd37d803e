//! Curve discounting engine.

use log::{debug, warn};

use coupon_config::{PricingConfig, Validate};
use coupon_core::daycounts::{Act365Fixed, DayCount};
use coupon_core::types::Date;
use coupon_curves::{discount_factor, CurveRate, RateCurve};

use crate::cashflows::{AccruedInterestCalculator, Schedule};
use crate::error::{BondError, BondResult};
use crate::pricing::{DiscountedCashFlow, Valuation, ValuationContext};

/// Prices payment schedules against a rate curve.
///
/// Each remaining payment is discounted at the curve rate for its ACT/365F
/// year fraction, `DF = 1 / (1 + r)^t`. The fair price is the sum of
/// discounted payments less interest accrued to settlement.
///
/// Accrued interest is `coupon * (P - d) / P` for a period of `P` days with
/// `d` days left to the next payment. It goes negative when `d > P`, unless
/// [`PricingConfig::floor_accrued_at_zero`] is set.
///
/// # Example
///
/// ```rust
/// use coupon_bonds::cashflows::build_schedule;
/// use coupon_bonds::instruments::BondTerms;
/// use coupon_bonds::pricing::DiscountEngine;
/// use coupon_core::types::Date;
/// use coupon_curves::RateCurve;
///
/// let terms = BondTerms::new(
///     5.4,
///     2,
///     1000.0,
///     Date::from_ymd(2019, 1, 1).unwrap(),
///     Date::from_ymd(2020, 12, 31).unwrap(),
/// )
/// .unwrap();
/// let schedule = build_schedule(&terms).unwrap();
/// let curve = RateCurve::from_points([(1.0, 0.04), (2.0, 0.05)]).unwrap();
///
/// let engine = DiscountEngine::default();
/// let valuation = engine
///     .price(&schedule, &curve, Date::from_ymd(2020, 6, 30).unwrap())
///     .unwrap();
///
/// assert_eq!(valuation.flows.len(), 2);
/// assert!(valuation.fair_price < valuation.undiscounted_total());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiscountEngine {
    config: PricingConfig,
}

impl DiscountEngine {
    /// Creates an engine with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `BondError::Config` if the configuration is invalid.
    pub fn new(config: PricingConfig) -> BondResult<Self> {
        config.validate_or_error()?;
        Ok(Self { config })
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Prices the payments of `schedule` that fall strictly after
    /// `settlement`.
    ///
    /// The schedule is not modified; the remaining payments are returned in
    /// [`Valuation::remaining_schedule`].
    ///
    /// # Errors
    ///
    /// - `BondError::MaturedBond` if no payment falls after settlement
    /// - `BondError::InsufficientCurveData` if the curve has fewer than two
    ///   valid points
    /// - `BondError::Curve` if a rate lookup fails, e.g. a payment beyond the
    ///   curve when extrapolation is disabled
    pub fn price(
        &self,
        schedule: &Schedule,
        curve: &RateCurve,
        settlement: Date,
    ) -> BondResult<Valuation> {
        let remaining = schedule.after(settlement);
        if remaining.is_empty() {
            return Err(BondError::MaturedBond {
                settlement,
                last_payment: schedule.last_payment_date(),
            });
        }

        let day_count = Act365Fixed;
        let flows = remaining
            .iter()
            .map(|cf| {
                let days = day_count.day_count(settlement, cf.date());
                let t = day_count.year_fraction(settlement, cf.date());
                let rate = curve.rate_with_short_end(
                    t,
                    self.config.extrapolation,
                    self.config.short_end,
                )?;
                self.log_extrapolation(cf.date(), &rate);

                let df = discount_factor(rate.rate, t);
                Ok(DiscountedCashFlow {
                    date: cf.date(),
                    amount: cf.amount(),
                    days,
                    year_fraction: t,
                    rate: rate.rate,
                    rate_source: rate.source,
                    discount_factor: df,
                    present_value: cf.amount() * df,
                })
            })
            .collect::<BondResult<Vec<_>>>()?;

        let gross_present_value: f64 = flows.iter().map(|f| f.present_value).sum();
        let days_to_first_flow = flows.first().map_or(0, |f| f.days);

        let period_days = remaining.nominal_period_days();
        let accrued_interest = if self.config.floor_accrued_at_zero {
            AccruedInterestCalculator::floored(
                remaining.coupon_amount(),
                period_days,
                days_to_first_flow,
            )
        } else {
            AccruedInterestCalculator::standard(
                remaining.coupon_amount(),
                period_days,
                days_to_first_flow,
            )
        };

        let fair_price = gross_present_value - accrued_interest;

        debug!(
            "Priced {} flows at {}: PV {:.6}, accrued {:.6} ({} of {} days), fair {:.6}",
            flows.len(),
            settlement,
            gross_present_value,
            accrued_interest,
            days_to_first_flow,
            period_days,
            fair_price
        );

        Ok(Valuation {
            settlement,
            fair_price,
            gross_present_value,
            accrued_interest,
            days_to_first_flow,
            flows,
            remaining_schedule: remaining,
        })
    }

    /// Prices a prepared valuation context.
    pub fn price_context(&self, context: &ValuationContext) -> BondResult<Valuation> {
        self.price(context.schedule(), context.curve(), context.settlement())
    }

    /// Prices a batch of independent contexts.
    ///
    /// Results are returned in input order. One failure does not stop the
    /// rest of the batch. With the `parallel` feature, batches of more than
    /// one context are priced on the rayon thread pool.
    pub fn price_batch(&self, contexts: &[ValuationContext]) -> Vec<BondResult<Valuation>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            if contexts.len() > 1 {
                return contexts
                    .par_iter()
                    .map(|ctx| self.price_context(ctx))
                    .collect();
            }
        }

        contexts.iter().map(|ctx| self.price_context(ctx)).collect()
    }

    fn log_extrapolation(&self, date: Date, rate: &CurveRate) {
        if !rate.is_extrapolated() {
            return;
        }
        if self.config.warn_on_extrapolation {
            warn!(
                "Flow on {} at {:.4}y is outside the curve, using {:.6} ({:?})",
                date, rate.tenor, rate.rate, rate.source
            );
        } else {
            debug!(
                "Flow on {} at {:.4}y is outside the curve, using {:.6} ({:?})",
                date, rate.tenor, rate.rate, rate.source
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cashflows::build_schedule;
    use crate::instruments::BondTerms;
    use approx::assert_relative_eq;
    use coupon_config::ConfigError;
    use coupon_math::extrapolation::ExtrapolationMethod;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn reference_schedule() -> Schedule {
        let terms = BondTerms::new(5.4, 2, 1000.0, date(2019, 1, 1), date(2020, 12, 31)).unwrap();
        build_schedule(&terms).unwrap()
    }

    fn flat_curve(rate: f64) -> RateCurve {
        RateCurve::from_points([(1.0, rate), (10.0, rate)]).unwrap()
    }

    #[test]
    fn test_zero_rate_prices_at_par_of_flows() {
        let schedule = reference_schedule();
        let v = DiscountEngine::default()
            .price(&schedule, &flat_curve(0.0), date(2020, 6, 30))
            .unwrap();

        assert_relative_eq!(v.gross_present_value, 1054.0, epsilon = 1e-9);
        assert!(v.discount_factors().iter().all(|df| *df == 1.0));
    }

    #[test]
    fn test_flow_breakdown() {
        let schedule = reference_schedule();
        let settlement = date(2020, 6, 30);
        let v = DiscountEngine::default()
            .price(&schedule, &flat_curve(0.05), settlement)
            .unwrap();

        assert_eq!(v.flows.len(), 2);
        assert_eq!(v.days_to_first_flow, 1);
        assert_eq!(v.flows[1].days, 184);
        assert_relative_eq!(v.flows[1].year_fraction, 184.0 / 365.0);
        assert_relative_eq!(
            v.flows[1].discount_factor,
            1.0 / 1.05_f64.powf(184.0 / 365.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            v.gross_present_value,
            v.discounted_amounts().iter().sum::<f64>(),
            epsilon = 1e-12
        );
        assert_relative_eq!(v.accrued_interest, 27.0 * 181.0 / 182.0, epsilon = 1e-12);
        assert_relative_eq!(
            v.fair_price,
            v.gross_present_value - v.accrued_interest,
            epsilon = 1e-12
        );
        assert!(!v.has_extrapolation());
    }

    #[test]
    fn test_schedule_left_untouched() {
        let schedule = reference_schedule();
        let before = schedule.clone();
        let _ = DiscountEngine::default()
            .price(&schedule, &flat_curve(0.03), date(2020, 6, 30))
            .unwrap();
        assert_eq!(schedule, before);
    }

    #[test]
    fn test_matured() {
        let schedule = reference_schedule();
        let result = DiscountEngine::default().price(&schedule, &flat_curve(0.03), date(2020, 12, 31));
        assert!(matches!(
            result,
            Err(BondError::MaturedBond { last_payment: Some(d), .. }) if d == date(2020, 12, 31)
        ));
    }

    #[test]
    fn test_short_end_extrapolation() {
        let schedule = reference_schedule();
        let curve = RateCurve::from_points([(1.0, 0.02), (2.0, 0.03)]).unwrap();
        let settlement = date(2020, 6, 30);

        let quiet = PricingConfig::default().with_warn_on_extrapolation(false);
        let v = DiscountEngine::new(quiet).unwrap().price(&schedule, &curve, settlement).unwrap();
        assert!(v.has_extrapolation());
        assert!(v.flows.iter().all(|f| f.rate == 0.02));

        let refuse = PricingConfig::default().with_extrapolation(ExtrapolationMethod::None);
        let result = DiscountEngine::new(refuse).unwrap().price(&schedule, &curve, settlement);
        assert!(matches!(
            result,
            Err(BondError::Curve(coupon_curves::CurveError::TenorOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = DiscountEngine::new(PricingConfig::new(""));
        assert!(matches!(
            result,
            Err(BondError::Config(ConfigError::Validation { .. }))
        ));

        let engine = DiscountEngine::new(PricingConfig::strict()).unwrap();
        assert_eq!(engine.config().name, "STRICT");
    }
}

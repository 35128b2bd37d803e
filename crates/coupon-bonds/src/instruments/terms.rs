//! Fixed coupon bond terms.

use serde::{Deserialize, Serialize};

use coupon_core::types::{Date, Frequency};

use crate::error::{BondError, BondResult};

/// Default face value when none is given.
const DEFAULT_FACE_VALUE: f64 = 100.0;

/// Contractual terms of a fixed coupon bond.
///
/// Terms are immutable once built. The payments-per-year value is kept as
/// given; whether a schedule exists for it is decided when the schedule is
/// built.
///
/// # Example
///
/// ```rust
/// use coupon_bonds::instruments::BondTerms;
/// use coupon_core::types::Date;
///
/// let terms = BondTerms::new(
///     5.4,
///     2,
///     1000.0,
///     Date::from_ymd(2019, 1, 1).unwrap(),
///     Date::from_ymd(2020, 12, 31).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(terms.annual_coupon(), 54.0);
/// assert_eq!(terms.coupon_per_period().unwrap(), 27.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TermsRecord")]
pub struct BondTerms {
    /// Annual coupon as a percentage of face (5.4 = 5.4%).
    coupon_rate: f64,

    /// Coupon payments per year.
    payments_per_year: u32,

    /// Principal repaid at redemption.
    face_value: f64,

    /// Issue date.
    issue_date: Date,

    /// Redemption date.
    redemption_date: Date,
}

/// Unchecked form used for deserialization.
#[derive(Deserialize)]
struct TermsRecord {
    coupon_rate: f64,
    payments_per_year: u32,
    face_value: f64,
    issue_date: Date,
    redemption_date: Date,
}

impl TryFrom<TermsRecord> for BondTerms {
    type Error = BondError;

    fn try_from(record: TermsRecord) -> BondResult<Self> {
        Self::new(
            record.coupon_rate,
            record.payments_per_year,
            record.face_value,
            record.issue_date,
            record.redemption_date,
        )
    }
}

impl BondTerms {
    /// Creates validated bond terms.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidTerms` if redemption is not after issue,
    /// the coupon rate is negative or not finite, or the face value is not
    /// positive.
    pub fn new(
        coupon_rate: f64,
        payments_per_year: u32,
        face_value: f64,
        issue_date: Date,
        redemption_date: Date,
    ) -> BondResult<Self> {
        if redemption_date <= issue_date {
            return Err(BondError::invalid_terms(format!(
                "redemption date {redemption_date} must be after issue date {issue_date}"
            )));
        }
        if !coupon_rate.is_finite() || coupon_rate < 0.0 {
            return Err(BondError::invalid_terms(format!(
                "coupon rate {coupon_rate} must be a non-negative percentage"
            )));
        }
        if !face_value.is_finite() || face_value <= 0.0 {
            return Err(BondError::invalid_terms(format!(
                "face value {face_value} must be positive"
            )));
        }

        Ok(Self {
            coupon_rate,
            payments_per_year,
            face_value,
            issue_date,
            redemption_date,
        })
    }

    /// Returns the annual coupon rate in percent.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Returns the raw payments per year.
    #[must_use]
    pub fn payments_per_year(&self) -> u32 {
        self.payments_per_year
    }

    /// Returns the coupon frequency.
    ///
    /// # Errors
    ///
    /// Returns `BondError::UnsupportedFrequency` unless payments per year is
    /// 2 or 4.
    pub fn frequency(&self) -> BondResult<Frequency> {
        Ok(Frequency::try_from(self.payments_per_year)?)
    }

    /// Returns the face value.
    #[must_use]
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Returns the issue date.
    #[must_use]
    pub fn issue_date(&self) -> Date {
        self.issue_date
    }

    /// Returns the redemption date.
    #[must_use]
    pub fn redemption_date(&self) -> Date {
        self.redemption_date
    }

    /// Returns the annual coupon amount in currency units.
    #[must_use]
    pub fn annual_coupon(&self) -> f64 {
        self.coupon_rate * self.face_value / 100.0
    }

    /// Returns the coupon amount per period.
    pub fn coupon_per_period(&self) -> BondResult<f64> {
        let frequency = self.frequency()?;
        Ok(self.annual_coupon() / f64::from(frequency.periods_per_year()))
    }
}

/// Builder for bond terms.
#[derive(Debug, Clone)]
pub struct BondTermsBuilder {
    coupon_rate: Option<f64>,
    payments_per_year: u32,
    face_value: f64,
    issue_date: Option<Date>,
    redemption_date: Option<Date>,
}

impl Default for BondTermsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BondTermsBuilder {
    /// Creates a new builder with semi-annual payments and a face of 100.
    #[must_use]
    pub fn new() -> Self {
        Self {
            coupon_rate: None,
            payments_per_year: Frequency::default().periods_per_year(),
            face_value: DEFAULT_FACE_VALUE,
            issue_date: None,
            redemption_date: None,
        }
    }

    /// Sets the annual coupon rate in percent (5.4 = 5.4%).
    #[must_use]
    pub fn coupon_rate(mut self, rate: f64) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Sets the raw payments per year.
    #[must_use]
    pub fn payments_per_year(mut self, n: u32) -> Self {
        self.payments_per_year = n;
        self
    }

    /// Sets the payment frequency.
    #[must_use]
    pub fn frequency(mut self, freq: Frequency) -> Self {
        self.payments_per_year = freq.periods_per_year();
        self
    }

    /// Sets the face value.
    #[must_use]
    pub fn face_value(mut self, value: f64) -> Self {
        self.face_value = value;
        self
    }

    /// Sets the issue date.
    #[must_use]
    pub fn issue_date(mut self, date: Date) -> Self {
        self.issue_date = Some(date);
        self
    }

    /// Sets the redemption date.
    #[must_use]
    pub fn redemption_date(mut self, date: Date) -> Self {
        self.redemption_date = Some(date);
        self
    }

    /// Builds the bond terms.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the terms are
    /// invalid.
    pub fn build(self) -> BondResult<BondTerms> {
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| BondError::missing_field("coupon_rate"))?;
        let issue_date = self
            .issue_date
            .ok_or_else(|| BondError::missing_field("issue_date"))?;
        let redemption_date = self
            .redemption_date
            .ok_or_else(|| BondError::missing_field("redemption_date"))?;

        BondTerms::new(
            coupon_rate,
            self.payments_per_year,
            self.face_value,
            issue_date,
            redemption_date,
        )
    }
}

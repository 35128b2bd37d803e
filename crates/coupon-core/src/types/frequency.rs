//! Coupon frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Payment frequency for coupon bonds.
///
/// Only frequencies with a supported schedule are representable; raw
/// payments-per-year values are checked through [`Frequency::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Semi-annual payments (2 per year)
    #[default]
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// Nominal length of one coupon period in days, `365 / periods_per_year`.
    #[must_use]
    pub fn nominal_period_days(&self) -> f64 {
        365.0 / f64::from(self.periods_per_year())
    }
}

impl TryFrom<u32> for Frequency {
    type Error = CoreError;

    fn try_from(periods_per_year: u32) -> CoreResult<Self> {
        match periods_per_year {
            2 => Ok(Frequency::SemiAnnual),
            4 => Ok(Frequency::Quarterly),
            other => Err(CoreError::unsupported_frequency(other)),
        }
    }
}

impl From<Frequency> for u32 {
    fn from(frequency: Frequency) -> Self {
        frequency.periods_per_year()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frequency_periods() {
        assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert_eq!(Frequency::SemiAnnual.months_per_period(), 6);
        assert_eq!(Frequency::Quarterly.months_per_period(), 3);
    }

    #[test]
    fn test_nominal_period_days() {
        assert_relative_eq!(Frequency::SemiAnnual.nominal_period_days(), 182.5);
        assert_relative_eq!(Frequency::Quarterly.nominal_period_days(), 91.25);
    }

    #[test]
    fn test_try_from_supported() {
        assert_eq!(Frequency::try_from(2).unwrap(), Frequency::SemiAnnual);
        assert_eq!(Frequency::try_from(4).unwrap(), Frequency::Quarterly);
        assert_eq!(u32::from(Frequency::Quarterly), 4);
    }

    #[test]
    fn test_try_from_unsupported() {
        for n in [0, 1, 3, 12] {
            assert_eq!(
                Frequency::try_from(n),
                Err(CoreError::UnsupportedFrequency { frequency: n })
            );
        }
    }
}

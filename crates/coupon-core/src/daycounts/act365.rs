//! Actual/365 Fixed day count convention.

use super::DayCount;
use crate::types::Date;

/// Days in the fixed ACT/365 year.
const DAYS_PER_YEAR: f64 = 365.0;

/// Actual/365 Fixed day count convention.
///
/// The day count is the actual number of days between dates.
/// The year basis is always 365 days (ignoring leap years).
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / DAYS_PER_YEAR
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_act365f_full_year_non_leap() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 365);
        assert_relative_eq!(dc.year_fraction(start, end), 1.0);
    }

    #[test]
    fn test_act365f_full_year_leap() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        // Leap year has an extra day over the fixed basis
        assert_eq!(dc.day_count(start, end), 366);
        assert_relative_eq!(dc.year_fraction(start, end), 366.0 / 365.0);
    }

    #[test]
    fn test_act365f_same_day() {
        let dc = Act365Fixed;
        let date = Date::from_ymd(2025, 6, 15).unwrap();

        assert_eq!(dc.day_count(date, date), 0);
        assert_relative_eq!(dc.year_fraction(date, date), 0.0);
    }

    #[test]
    fn test_act365f_reversed_is_negative() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2020, 6, 30).unwrap();
        let end = Date::from_ymd(2020, 7, 1).unwrap();
        assert_relative_eq!(dc.year_fraction(end, start), -1.0 / 365.0);
    }

    #[test]
    fn test_name() {
        assert_eq!(Act365Fixed.name(), "ACT/365F");
    }

    proptest! {
        #[test]
        fn prop_year_fraction_is_additive(a in 0i64..5000, b in 0i64..5000) {
            let dc = Act365Fixed;
            let d0 = Date::from_ymd(2000, 1, 1).unwrap();
            let d1 = d0.add_days(a);
            let d2 = d1.add_days(b);
            let whole = dc.year_fraction(d0, d2);
            let parts = dc.year_fraction(d0, d1) + dc.year_fraction(d1, d2);
            prop_assert!((whole - parts).abs() < 1e-9);
        }
    }
}

//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{CoreError, CoreResult};

/// A calendar date for financial calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing
/// financial-specific operations and ensuring type safety.
///
/// # Example
///
/// ```rust
/// use coupon_core::types::Date;
///
/// let issue = Date::from_ymd(2019, 1, 1).unwrap();
/// let redemption = Date::from_ymd(2020, 12, 31).unwrap();
/// assert_eq!(issue.months_between(&redemption), 23);
/// assert_eq!(issue.days_between(&redemption), 730);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days between two dates.
    ///
    /// Positive when `other` is after `self`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Whole calendar months from `self` to `other`.
    ///
    /// Only the year and month fields take part; the day of month is ignored,
    /// so 2019-01-31 to 2019-02-01 counts as one month.
    #[must_use]
    pub fn months_between(&self, other: &Date) -> i32 {
        (other.year() - self.year()) * 12 + (other.month() as i32 - self.month() as i32)
    }

    /// Returns `periods + 1` dates evenly spaced over `[start, end]`.
    ///
    /// The day range is divided linearly rather than stepped by calendar
    /// months. Point `i` sits `floor(i * total_days / periods)` days after
    /// `start`, so the first point is `start` and the last is `end`.
    ///
    /// Any fractional day is dropped, so a point that would land at midday
    /// falls on the earlier calendar date. A settlement on that date then
    /// excludes the payment, where a sub-day timestamp would still keep it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if `periods` is zero or `end` is not
    /// after `start`.
    pub fn evenly_spaced(start: Date, end: Date, periods: u32) -> CoreResult<Vec<Date>> {
        if periods == 0 {
            return Err(CoreError::invalid_date(
                "evenly spaced dates need at least one period",
            ));
        }
        let total_days = start.days_between(&end);
        if total_days <= 0 {
            return Err(CoreError::invalid_date(format!(
                "range end {end} must be after start {start}"
            )));
        }

        let periods = i64::from(periods);
        Ok((0..=periods)
            .map(|i| start.add_days(i * total_days / periods))
            .collect())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(d1.days_between(&d2), 30);
        assert_eq!(d2.days_between(&d1), -30);
    }

    #[test]
    fn test_months_between_ignores_day() {
        let issue = Date::from_ymd(2019, 1, 1).unwrap();
        let redemption = Date::from_ymd(2020, 12, 31).unwrap();
        assert_eq!(issue.months_between(&redemption), 23);

        let a = Date::from_ymd(2019, 1, 31).unwrap();
        let b = Date::from_ymd(2019, 2, 1).unwrap();
        assert_eq!(a.months_between(&b), 1);
        assert_eq!(a.months_between(&a), 0);
    }

    #[test]
    fn test_evenly_spaced_half_day_steps_floor() {
        let start = Date::from_ymd(2019, 1, 1).unwrap();
        let end = Date::from_ymd(2020, 12, 31).unwrap();

        // 730 days over 4 periods: 182.5-day steps, floored
        let dates = Date::evenly_spaced(start, end, 4).unwrap();
        let expected = [
            Date::from_ymd(2019, 1, 1).unwrap(),
            Date::from_ymd(2019, 7, 2).unwrap(),
            Date::from_ymd(2020, 1, 1).unwrap(),
            Date::from_ymd(2020, 7, 1).unwrap(),
            Date::from_ymd(2020, 12, 31).unwrap(),
        ];
        assert_eq!(dates, expected);
    }

    #[test]
    fn test_evenly_spaced_rejects_bad_input() {
        let start = Date::from_ymd(2020, 1, 1).unwrap();
        let end = Date::from_ymd(2021, 1, 1).unwrap();
        assert!(Date::evenly_spaced(start, end, 0).is_err());
        assert!(Date::evenly_spaced(end, start, 2).is_err());
        assert!(Date::evenly_spaced(start, start, 2).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2025-06-15").unwrap();
        assert_eq!(date, Date::from_ymd(2025, 6, 15).unwrap());
        assert!(Date::parse("15/06/2025").is_err());
    }

    #[test]
    fn test_date_arithmetic_operators() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();

        let d2 = d1 + 10;
        assert_eq!(d2.day(), 11);

        let d3 = d2 - 5;
        assert_eq!(d3.day(), 6);

        assert_eq!(d2 - d1, 10);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2025, 6, 5).unwrap();
        assert_eq!(format!("{}", date), "2025-06-05");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    proptest! {
        #[test]
        fn prop_evenly_spaced_endpoints_and_order(
            offset in 0i64..20_000,
            span in 1i64..20_000,
            periods in 1u32..60,
        ) {
            let start = Date::from_ymd(1990, 1, 1).unwrap().add_days(offset);
            let end = start.add_days(span);
            let dates = Date::evenly_spaced(start, end, periods).unwrap();

            prop_assert_eq!(dates.len(), periods as usize + 1);
            prop_assert_eq!(dates[0], start);
            prop_assert_eq!(*dates.last().unwrap(), end);
            for pair in dates.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
        }
    }
}

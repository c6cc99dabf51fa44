//! Date type for coupon schedule calculations.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::NominalDate;
use crate::error::{CoreError, CoreResult};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// A real calendar day, backed by `chrono::NaiveDate`.
///
/// There is no way to hold 2025-02-30. Serializes as `"YYYY-MM-DD"`.
///
/// # Example
///
/// ```rust
/// use fixbond_core::types::Date;
///
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// let earlier = date.sub_months(6).unwrap();
/// assert_eq!(earlier.resolve().unwrap(), Date::from_ymd(2024, 12, 15).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Builds a date from its parts.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses `YYYY-MM-DD`, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` for any other shape or a day that
    /// does not exist.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)
            .map(Self)
            .map_err(|e| CoreError::invalid_date(format!("cannot parse {s:?}: {e}")))
    }

    /// Last calendar day of `month` in `year`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if `month` is not in 1..=12 or the
    /// year is out of range.
    pub fn last_day_of_month(year: i32, month: u32) -> CoreResult<Self> {
        let length = month_length(year, month)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}: no such month")))?;
        Self::from_ymd(year, month, length)
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, January is 1.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of the month, starting at 1.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Monday through Friday.
    #[must_use]
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Number of days in this date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        // A held date always has a valid year and month.
        month_length(self.year(), self.month()).unwrap_or(31)
    }

    /// True when the following day starts a new month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// The last day of this date's month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        self.add_days(i64::from(self.days_in_month() - self.day()))
    }

    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Steps back `months` calendar months, keeping the day of month.
    ///
    /// Year boundaries roll as expected. The day is not clamped, so
    /// 2027-03-30 minus one month is the nominal 2027-02-30; see
    /// [`NominalDate::resolve`] for the real day it stands for.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the target month is out of range.
    pub fn sub_months(&self, months: u32) -> CoreResult<NominalDate> {
        let out_of_range = || CoreError::invalid_date(format!("{self} minus {months} months"));

        let index = i64::from(self.year()) * 12 + i64::from(self.month() - 1) - i64::from(months);
        let year = i32::try_from(index.div_euclid(12)).map_err(|_| out_of_range())?;
        let month = u32::try_from(index.rem_euclid(12) + 1).map_err(|_| out_of_range())?;

        month_length(year, month).ok_or_else(out_of_range)?;
        Ok(NominalDate::new(year, month, self.day()))
    }

    /// Signed calendar days from `self` to `other`; positive when `other` is later.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Add<i64> for Date {
    type Output = Self;

    fn add(self, days: i64) -> Self {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    fn sub(self, days: i64) -> Self {
        self.add_days(-days)
    }
}

/// `later - earlier` is the exact number of days between them.
impl Sub for Date {
    type Output = i64;

    fn sub(self, earlier: Date) -> i64 {
        earlier.days_between(&self)
    }
}

/// Length of a month, or `None` for a month outside 1..=12 or a year chrono
/// cannot represent.
fn month_length(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 6, 15));

        for (y, m, d) in [(2025, 2, 30), (2025, 13, 1), (2025, 4, 31), (2025, 0, 1)] {
            assert!(Date::from_ymd(y, m, d).is_err(), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn test_days_in_month() {
        let lengths: Vec<u32> = (1..=12)
            .map(|m| Date::from_ymd(2024, m, 1).unwrap().days_in_month())
            .collect();
        assert_eq!(lengths, [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
        assert_eq!(Date::from_ymd(2100, 2, 1).unwrap().days_in_month(), 28);
        assert_eq!(Date::from_ymd(2000, 2, 1).unwrap().days_in_month(), 29);
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2025-06-15").unwrap();
        assert_eq!(date, Date::from_ymd(2025, 6, 15).unwrap());
        assert!(Date::parse("2025-02-29").is_err());
        assert!(Date::parse("15/06/2025").is_err());
        assert_eq!("2024-02-29".parse::<Date>().unwrap().day(), 29);
    }

    fn nominal(date: Date, months: u32) -> (i32, u32, u32) {
        let n = date.sub_months(months).unwrap();
        (n.year(), n.month(), n.day())
    }

    #[test]
    fn test_sub_months_plain() {
        let date = Date::from_ymd(2028, 11, 15).unwrap();
        assert_eq!(nominal(date, 12), (2027, 11, 15));
        assert_eq!(date.sub_months(0).unwrap().resolve().unwrap(), date);
    }

    #[test]
    fn test_sub_months_crosses_year() {
        let date = Date::from_ymd(2026, 2, 10).unwrap();
        assert_eq!(nominal(date, 3), (2025, 11, 10));
        assert_eq!(nominal(date, 26), (2023, 12, 10));
    }

    #[test]
    fn test_sub_months_keeps_day_past_short_month_end() {
        let date = Date::from_ymd(2027, 3, 30).unwrap();
        let february = date.sub_months(1).unwrap();
        assert_eq!((february.month(), february.day()), (2, 30));
        assert_eq!(february.resolve().unwrap(), Date::from_ymd(2027, 3, 2).unwrap());

        // Leap year
        let date = Date::from_ymd(2024, 3, 31).unwrap();
        assert_eq!(
            date.sub_months(1).unwrap().resolve().unwrap(),
            Date::from_ymd(2024, 3, 2).unwrap()
        );

        let date = Date::from_ymd(2025, 10, 31).unwrap();
        assert_eq!(
            date.sub_months(1).unwrap().resolve().unwrap(),
            Date::from_ymd(2025, 10, 1).unwrap()
        );
        assert_eq!(nominal(date, 2), (2025, 8, 31));
    }

    #[test]
    fn test_sub_months_keeps_target_month() {
        let date = Date::from_ymd(2025, 12, 31).unwrap();
        for months in 0..36 {
            let earlier = date.sub_months(months).unwrap();
            let expected_month = (12 - months % 12 - 1) % 12 + 1;
            assert_eq!(earlier.month(), expected_month);
            assert_eq!(earlier.day(), 31);
        }
    }

    #[test]
    fn test_sub_months_out_of_range() {
        let date = Date::from_ymd(2025, 1, 15).unwrap();
        assert!(date.sub_months(u32::MAX).is_err());
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(
            Date::last_day_of_month(2024, 2).unwrap(),
            Date::from_ymd(2024, 2, 29).unwrap()
        );
        assert_eq!(
            Date::last_day_of_month(2100, 2).unwrap(),
            Date::from_ymd(2100, 2, 28).unwrap()
        );
        assert_eq!(
            Date::last_day_of_month(2025, 9).unwrap(),
            Date::from_ymd(2025, 9, 30).unwrap()
        );
        assert!(Date::last_day_of_month(2025, 0).is_err());
        assert!(Date::last_day_of_month(2025, 13).is_err());
    }

    #[test]
    fn test_end_of_month() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.end_of_month(), Date::from_ymd(2025, 6, 30).unwrap());
        assert!(!date.is_end_of_month());
        assert!(date.end_of_month().is_end_of_month());
        assert!(Date::from_ymd(2024, 2, 29).unwrap().is_end_of_month());
        assert!(!Date::from_ymd(2024, 2, 28).unwrap().is_end_of_month());
        assert!(Date::from_ymd(2025, 12, 31).unwrap().is_end_of_month());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(d1.days_between(&d2), 30);
        assert_eq!(d2 - d1, 30);
        assert_eq!(d1 - d2, -30);

        // Across a leap day
        let d3 = Date::from_ymd(2024, 2, 28).unwrap();
        let d4 = Date::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(d4 - d3, 2);
    }

    #[test]
    fn test_weekday_detection() {
        let monday = Date::from_ymd(2025, 1, 6).unwrap();
        assert!(monday.is_weekday());
        assert_eq!(monday.weekday(), Weekday::Mon);

        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        assert!(saturday.is_weekend());
        assert_eq!(saturday.weekday(), Weekday::Sat);

        let sunday = Date::from_ymd(2025, 1, 5).unwrap();
        assert!(sunday.is_weekend());
        assert!(!sunday.is_weekday());
    }

    #[test]
    fn test_day_offsets_cross_year_end() {
        let new_year = Date::from_ymd(2025, 1, 1).unwrap();
        assert_eq!(new_year - 1, Date::from_ymd(2024, 12, 31).unwrap());
        assert_eq!((new_year + 45).to_string(), "2025-02-15");
    }

    #[test]
    fn test_json_form_is_iso_string() {
        let date = Date::from_ymd(2025, 6, 5).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-05\"");
        assert_eq!(serde_json::from_str::<Date>(&json).unwrap(), date);
        assert!(serde_json::from_str::<Date>("\"2025-06-31\"").is_err());
    }
}

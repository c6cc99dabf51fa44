//! Dates produced by stepping whole months.

use std::fmt;

use super::Date;
use crate::error::CoreResult;

/// A (year, month, day) whose day may run past the end of its month.
///
/// Stepping 2027-03-30 back one month gives the nominal date 2027-02-30.
/// The month keeps identifying which period the coupon belongs to, while
/// [`NominalDate::resolve`] carries the surplus days into the next month
/// (2027-03-02) to find the real day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NominalDate {
    year: i32,
    month: u32,
    day: u32,
}

impl NominalDate {
    /// `month` is in 1..=12 and `day` in 1..=31.
    pub(crate) fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// True when the day exists in the nominal month.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Date::from_ymd(self.year, self.month, self.day).is_ok()
    }

    /// The real day, counting `day - 1` days on from the first of the month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the month is out of range.
    pub fn resolve(&self) -> CoreResult<Date> {
        let first = Date::from_ymd(self.year, self.month, 1)?;
        Ok(first.add_days(i64::from(self.day) - 1))
    }

    /// Last day of the nominal month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the month is out of range.
    pub fn end_of_month(&self) -> CoreResult<Date> {
        Date::last_day_of_month(self.year, self.month)
    }
}

impl From<Date> for NominalDate {
    fn from(date: Date) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for NominalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

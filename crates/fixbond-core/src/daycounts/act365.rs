//! Actual/365 Fixed.

use super::DayCount;
use crate::types::Date;

/// Denominator of every year fraction, leap years included.
pub(crate) const DAYS_PER_YEAR: f64 = 365.0;

/// Actual days between the dates divided by 365.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        end - start
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / DAYS_PER_YEAR
    }
}

//! Modified preceding rolling.

use super::Calendar;
use crate::types::Date;

/// Walks from `date` one day at a time in `step` until `calendar` is open.
fn scan<C: Calendar + ?Sized>(date: Date, step: i64, calendar: &C) -> Date {
    let mut current = date;
    while !calendar.is_business_day(current) {
        current = current + step;
    }
    current
}

/// Moves a closed `date` back to the previous business day, or forward to
/// the next one when stepping back would leave `home_month`.
///
/// Business days are returned as they are. `home_month` is `date.month()`
/// except for a coupon date whose nominal day ran past its month end; that
/// date still belongs to the nominal month.
pub fn modified_preceding<C: Calendar + ?Sized>(
    date: Date,
    home_month: u32,
    calendar: &C,
) -> Date {
    if calendar.is_business_day(date) {
        return date;
    }
    let back = scan(date, -1, calendar);
    if back.month() == home_month {
        back
    } else {
        scan(date, 1, calendar)
    }
}

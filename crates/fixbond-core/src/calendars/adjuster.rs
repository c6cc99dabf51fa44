//! Coupon date adjustment.
//!
//! A theoretical coupon date is turned into the date the payment actually
//! happens in two steps, always in this order:
//!
//! 1. **Month-end snapping.** If the anchor (the maturity date) is the last
//!    day of its month, the bond is month-end dated and every coupon date
//!    moves to the last day of its own month.
//! 2. **Weekend rolling.** A Saturday or Sunday rolls back to the preceding
//!    Friday, unless that Friday is in the previous month, in which case it
//!    rolls forward to the following Monday.
//!
//! Snapping first matters: a snapped month end can itself be a weekend.
//!
//! Dates stepped back from maturity arrive as a [`NominalDate`] and go
//! through [`adjust_coupon_date`]. Snapping uses the nominal month. Without
//! a snap, a day past the end of a short month (2027-02-30) is carried into
//! the next month (2027-03-02) and the weekend rule runs on that real day,
//! while the nominal month stays the one it must not roll back out of.

use super::{modified_preceding, WeekendCalendar};
use crate::error::CoreResult;
use crate::types::{Date, NominalDate};

/// Returns true if the next day starts a new month.
#[must_use]
pub fn is_last_day_of_month(date: Date) -> bool {
    date.is_end_of_month()
}

/// Snaps `date` to the end of its month when `anchor` is a month end.
///
/// Otherwise `date` is returned unchanged.
#[must_use]
pub fn adjust_for_month_end(date: Date, anchor: Date) -> Date {
    if is_last_day_of_month(anchor) {
        date.end_of_month()
    } else {
        date
    }
}

/// Rolls a weekend date to a weekday without leaving the prior month.
///
/// Weekdays are returned unchanged.
#[must_use]
pub fn adjust_for_weekend(date: Date) -> Date {
    modified_preceding(date, date.month(), &WeekendCalendar)
}

/// Applies month-end snapping against `anchor`, then weekend rolling.
#[must_use]
pub fn adjust(date: Date, anchor: Date) -> Date {
    adjust_for_weekend(adjust_for_month_end(date, anchor))
}

/// Turns a date stepped back from `anchor` into its payment date.
///
/// For a real date this is the same as [`adjust`].
///
/// # Errors
///
/// Returns `CoreError::InvalidDate` if the nominal month is out of range.
pub fn adjust_coupon_date(raw: NominalDate, anchor: Date) -> CoreResult<Date> {
    if is_last_day_of_month(anchor) {
        return Ok(adjust_for_weekend(raw.end_of_month()?));
    }
    let real = raw.resolve()?;
    Ok(modified_preceding(real, raw.month(), &WeekendCalendar))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_is_last_day_of_month() {
        assert!(is_last_day_of_month(d(2025, 1, 31)));
        assert!(is_last_day_of_month(d(2025, 2, 28)));
        assert!(!is_last_day_of_month(d(2024, 2, 28)));
        assert!(is_last_day_of_month(d(2024, 2, 29)));
        assert!(!is_last_day_of_month(d(2025, 4, 15)));
    }

    #[test]
    fn test_month_end_snap_when_anchor_is_month_end() {
        let anchor = d(2025, 10, 31);
        assert_eq!(adjust_for_month_end(d(2025, 2, 28), anchor), d(2025, 2, 28));
        assert_eq!(adjust_for_month_end(d(2025, 4, 15), anchor), d(2025, 4, 30));
        assert_eq!(adjust_for_month_end(d(2024, 2, 1), anchor), d(2024, 2, 29));
    }

    #[test]
    fn test_month_end_snap_from_short_month_anchor() {
        // Maturity on Feb 28 makes every coupon a month end, including 31-day months.
        let anchor = d(2025, 2, 28);
        assert_eq!(adjust_for_month_end(d(2024, 8, 28), anchor), d(2024, 8, 31));
    }

    #[test]
    fn test_no_snap_when_anchor_is_mid_month() {
        let anchor = d(2025, 10, 30);
        assert_eq!(adjust_for_month_end(d(2025, 4, 30), anchor), d(2025, 4, 30));
        assert_eq!(adjust_for_month_end(d(2025, 3, 2), anchor), d(2025, 3, 2));
    }

    #[test]
    fn test_weekday_unchanged() {
        let wednesday = d(2025, 1, 15);
        assert_eq!(adjust_for_weekend(wednesday), wednesday);
    }

    #[test]
    fn test_saturday_rolls_back_within_month() {
        // Saturday 2025-05-31 -> Friday 2025-05-30
        assert_eq!(adjust_for_weekend(d(2025, 5, 31)), d(2025, 5, 30));
    }

    #[test]
    fn test_sunday_rolls_back_within_month() {
        // Sunday 2026-11-15 -> Friday 2026-11-13
        assert_eq!(adjust_for_weekend(d(2026, 11, 15)), d(2026, 11, 13));
    }

    #[test]
    fn test_sunday_rolls_forward_across_month_start() {
        // Sunday 2026-02-01: Friday 2026-01-30 is in January, so Monday 2026-02-02
        assert_eq!(adjust_for_weekend(d(2026, 2, 1)), d(2026, 2, 2));
    }

    #[test]
    fn test_saturday_first_rolls_forward() {
        // Saturday 2025-11-01 -> Monday 2025-11-03
        assert_eq!(adjust_for_weekend(d(2025, 11, 1)), d(2025, 11, 3));
    }

    #[test]
    fn test_snapped_month_end_on_weekend_rolls_back() {
        // Anchor is a month end; 2025-08-15 snaps to Sunday 2025-08-31 then rolls to Friday 29th.
        let anchor = d(2025, 10, 31);
        assert_eq!(adjust(d(2025, 8, 15), anchor), d(2025, 8, 29));
    }

    #[test]
    fn test_adjust_order_matters() {
        // Weekend first would keep the weekday 2025-08-29 and then snap it
        // to Sunday the 31st; month-end first lands on Friday.
        let anchor = d(2025, 10, 31);
        let raw = d(2025, 8, 29);
        let wrong_order = adjust_for_month_end(adjust_for_weekend(raw), anchor);
        assert_eq!(wrong_order, d(2025, 8, 31));
        assert_eq!(adjust(raw, anchor), d(2025, 8, 29));
    }

    #[test]
    fn test_coupon_date_carries_past_short_month() {
        let anchor = d(2027, 3, 30);
        let raw = anchor.sub_months(1).unwrap();
        // 2027-02-30 is Tuesday 2027-03-02
        assert_eq!(adjust_coupon_date(raw, anchor).unwrap(), d(2027, 3, 2));
    }

    #[test]
    fn test_carried_weekend_rolls_forward_when_friday_left_the_month() {
        // 2030-02-30 is Saturday 2030-03-02; Friday Mar 1 is not in February
        let anchor = d(2030, 5, 30);
        let raw = anchor.sub_months(3).unwrap();
        assert_eq!(adjust_coupon_date(raw, anchor).unwrap(), d(2030, 3, 4));
    }

    #[test]
    fn test_carried_weekend_rolls_back_into_nominal_month() {
        // 2025-02-30 is Sunday 2025-03-02; Friday Feb 28 is still February
        let anchor = d(2025, 5, 30);
        let raw = anchor.sub_months(3).unwrap();
        assert_eq!(adjust_coupon_date(raw, anchor).unwrap(), d(2025, 2, 28));
    }

    #[test]
    fn test_month_end_anchor_snaps_nominal_month() {
        let anchor = d(2025, 10, 31);
        let raw = anchor.sub_months(1).unwrap();
        assert_eq!(adjust_coupon_date(raw, anchor).unwrap(), d(2025, 9, 30));
        let raw = anchor.sub_months(2).unwrap();
        assert_eq!(adjust_coupon_date(raw, anchor).unwrap(), d(2025, 8, 29));
    }

    #[test]
    fn test_coupon_date_matches_adjust_for_real_dates() {
        let anchor = d(2026, 11, 16);
        for raw in [d(2026, 11, 15), d(2026, 2, 1), d(2025, 11, 1), d(2025, 8, 13)] {
            assert_eq!(adjust_coupon_date(raw.into(), anchor).unwrap(), adjust(raw, anchor));
        }
    }
}

//! Business day calendars and coupon date adjustment.
//!
//! Coupon dates are only ever checked against [`WeekendCalendar`]; the
//! [`Calendar`] trait keeps the rolling rule independent of that choice.

mod adjuster;
mod conventions;

pub use adjuster::{
    adjust, adjust_coupon_date, adjust_for_month_end, adjust_for_weekend, is_last_day_of_month,
};
pub use conventions::modified_preceding;

use crate::types::Date;

/// Decides which days a market settles payments on.
pub trait Calendar: Send + Sync {
    /// Returns true if payments can settle on `date`.
    fn is_business_day(&self, date: Date) -> bool;
}

/// Monday to Friday, no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

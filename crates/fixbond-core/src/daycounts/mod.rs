//! Day count conventions.
//!
//! Discounting uses Actual/365 Fixed throughout: exact calendar days over a
//! flat 365-day year.
//!
//! ```rust
//! use fixbond_core::daycounts::{Act365Fixed, DayCount};
//! use fixbond_core::types::Date;
//!
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! assert_eq!(Act365Fixed.day_count(start, end), 181);
//! ```

mod act365;

pub use act365::Act365Fixed;

use crate::types::Date;

/// Converts the gap between two dates into days and years.
pub trait DayCount: Send + Sync {
    /// Market abbreviation, e.g. `ACT/365F`.
    fn name(&self) -> &'static str;

    /// Days from `start` to `end`; negative when `end` comes first.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Years from `start` to `end` under this convention.
    fn year_fraction(&self, start: Date, end: Date) -> f64;
}

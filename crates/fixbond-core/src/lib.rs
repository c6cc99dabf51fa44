//! # Fixbond Core
//!
//! Core types and calendar rules for the Fixbond bond pricing library.
//!
//! Nothing here knows about bonds. [`Date`] wraps `chrono` with the month
//! arithmetic coupon schedules need, [`Frequency`] restricts payment counts
//! to divisors of twelve, [`calendars`] turns a theoretical coupon date into
//! a payable one, and [`daycounts`] measures time for discounting.
//!
//! ## Example
//!
//! ```rust
//! use fixbond_core::prelude::*;
//!
//! let maturity = Date::from_ymd(2025, 8, 31).unwrap();
//! let raw = Date::from_ymd(2025, 5, 31).unwrap();
//!
//! // 2025-05-31 is a Saturday: roll back to Friday the 30th.
//! let adjusted = calendars::adjust(raw, maturity);
//! assert_eq!(adjusted, Date::from_ymd(2025, 5, 30).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Dates, calendars and day counts in one import.
pub mod prelude {
    pub use crate::calendars::{self, Calendar, WeekendCalendar};
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, Frequency, NominalDate};
}

pub use error::{CoreError, CoreResult};
pub use types::{Date, Frequency};

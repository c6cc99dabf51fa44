//! Coupon payment schedules.
//!
//! Coupon dates are generated backward from maturity in whole coupon
//! periods, each adjusted by the `fixbond-core` calendar rules. Generation
//! can report each date to a [`ScheduleObserver`] as it is produced.

mod observer;
mod schedule;

pub use observer::{LogObserver, NoopObserver, ScheduleObserver};
pub use schedule::{PaymentSchedule, ScheduleGenerator};

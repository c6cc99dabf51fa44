//! Coupon date generation.
//!
//! The number of coupons is the number of whole coupon periods that fit in
//! the time to maturity measured on a flat 365-day year:
//!
//! ```text
//! count = floor(days_to_maturity / 365 * frequency)
//! ```
//!
//! The `i`-th coupon (counting from zero) keeps the maturity's day of month
//! and falls `i * 12 / frequency` months earlier. That nominal date is
//! turned into a payment date by
//! [`fixbond_core::calendars::adjust_coupon_date`] against the maturity date,
//! so 30 February becomes 2 March rather than 28 February.
//!
//! # Example
//!
//! ```rust
//! use fixbond_bonds::cashflows::ScheduleGenerator;
//! use fixbond_bonds::FixedCouponBond;
//! use fixbond_core::types::{Date, Frequency};
//!
//! let bond = FixedCouponBond::builder()
//!     .notional(100.0)
//!     .annual_coupon_rate(0.05)
//!     .frequency(Frequency::Annual)
//!     .discount_rate(0.03)
//!     .valuation_date(Date::from_ymd(2025, 11, 15).unwrap())
//!     .maturity_date(Date::from_ymd(2028, 11, 15).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let schedule = ScheduleGenerator::generate(&bond).unwrap();
//! assert_eq!(schedule.len(), 3);
//! // 2026-11-15 is a Sunday, paid on Friday the 13th.
//! assert_eq!(schedule.dates()[2], Date::from_ymd(2026, 11, 13).unwrap());
//! ```

use serde::Serialize;

use fixbond_core::calendars;
use fixbond_core::types::Date;

use super::observer::{NoopObserver, ScheduleObserver};
use crate::error::{BondError, BondResult};
use crate::instruments::FixedCouponBond;

/// Adjusted coupon payment dates, maturity first.
///
/// Dates are strictly decreasing. A schedule is rebuilt for every pricing
/// request and has no identity of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PaymentSchedule {
    dates: Vec<Date>,
}

impl PaymentSchedule {
    /// Returns the dates in generation order (maturity first).
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the number of coupon dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if no coupon falls within the horizon.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates the dates in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &Date> + '_ {
        self.dates.iter()
    }

    /// Returns the dates earliest first.
    #[must_use]
    pub fn chronological(&self) -> Vec<Date> {
        self.dates.iter().rev().copied().collect()
    }
}

impl IntoIterator for PaymentSchedule {
    type Item = Date;
    type IntoIter = std::vec::IntoIter<Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.into_iter()
    }
}

/// Generates coupon payment schedules for fixed coupon bonds.
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Returns how many coupons fit between valuation and maturity.
    #[must_use]
    pub fn payment_count(bond: &FixedCouponBond) -> usize {
        let periods = bond.years_to_maturity() * f64::from(bond.frequency().periods_per_year());
        periods.floor() as usize
    }

    /// Generates the adjusted schedule.
    pub fn generate(bond: &FixedCouponBond) -> BondResult<PaymentSchedule> {
        Self::generate_with_observer(bond, &mut NoopObserver)
    }

    /// Generates the adjusted schedule, reporting each date to `observer`.
    pub fn generate_with_observer<O>(
        bond: &FixedCouponBond,
        observer: &mut O,
    ) -> BondResult<PaymentSchedule>
    where
        O: ScheduleObserver + ?Sized,
    {
        let maturity = bond.maturity_date();
        let months_per_period = bond.frequency().months_per_period();
        let count = Self::payment_count(bond);

        let mut dates = Vec::with_capacity(count);
        for index in 0..count {
            let months = u32::try_from(index)
                .ok()
                .and_then(|i| i.checked_mul(months_per_period))
                .ok_or_else(|| {
                    BondError::cash_flow_failed(format!("coupon {index} is out of date range"))
                })?;
            let nominal = maturity.sub_months(months)?;
            let adjusted = calendars::adjust_coupon_date(nominal, maturity)?;
            log::trace!("Coupon {index}: {nominal} -> {adjusted}");

            observer.on_payment_date(index, adjusted);
            dates.push(adjusted);
        }

        log::debug!(
            "Generated {} coupon dates for bond maturing {}",
            dates.len(),
            maturity
        );

        Ok(PaymentSchedule { dates })
    }
}

//! Bond pricing calculations.
//!
//! This module provides:
//! - [`BondPricer`]: discounted cash flow pricing of a [`FixedCouponBond`]
//! - [`PriceResult`]: the price and its components
//! - [`price_bond`] and [`schedule`]: one-call entry points
//!
//! Every cash flow is discounted continuously on an Actual/365 Fixed basis:
//!
//! ```text
//! price = N * exp(-r * T) + sum_i (c * N / f) * exp(-r * t_i)
//! ```
//!
//! where `T` is the year fraction from valuation to maturity and `t_i` the
//! year fraction from valuation to the `i`-th adjusted coupon date.

use serde::Serialize;

use fixbond_core::daycounts::{Act365Fixed, DayCount};
use fixbond_core::types::Date;

use crate::cashflows::{NoopObserver, PaymentSchedule, ScheduleGenerator, ScheduleObserver};
use crate::error::BondResult;
use crate::instruments::FixedCouponBond;

/// Result of a bond pricing calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceResult {
    /// Present value of the notional repaid at maturity.
    pub face_value_pv: f64,
    /// Coupon paid each period.
    pub coupon_amount: f64,
    /// Present value of all coupons.
    pub coupon_pv: f64,
    /// Number of coupons discounted.
    pub payment_count: usize,
    /// Total present value.
    pub price: f64,
    /// Adjusted coupon dates, maturity first.
    pub schedule: PaymentSchedule,
}

/// Bond pricing engine.
pub struct BondPricer;

impl BondPricer {
    /// Prices a bond.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixbond_bonds::{BondPricer, FixedCouponBond};
    /// use fixbond_core::types::{Date, Frequency};
    ///
    /// let bond = FixedCouponBond::builder()
    ///     .notional(1000.0)
    ///     .annual_coupon_rate(0.05)
    ///     .frequency(Frequency::Monthly)
    ///     .discount_rate(0.03)
    ///     .valuation_date(Date::from_ymd(2025, 10, 3).unwrap())
    ///     .maturity_date(Date::from_ymd(2025, 11, 3).unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let result = BondPricer::price(&bond).unwrap();
    /// assert_eq!(result.payment_count, 1);
    /// assert!((result.price - 1001.611).abs() < 1e-3);
    /// ```
    pub fn price(bond: &FixedCouponBond) -> BondResult<PriceResult> {
        Self::price_with_observer(bond, &mut NoopObserver)
    }

    /// Prices a bond, reporting each generated coupon date to `observer`.
    pub fn price_with_observer<O>(
        bond: &FixedCouponBond,
        observer: &mut O,
    ) -> BondResult<PriceResult>
    where
        O: ScheduleObserver + ?Sized,
    {
        let valuation = bond.valuation_date();
        let rate = bond.discount_rate();

        let face_value_pv =
            bond.notional() * Self::discount_factor(rate, valuation, bond.maturity_date());

        let schedule = ScheduleGenerator::generate_with_observer(bond, observer)?;
        let coupon_amount = bond.coupon_per_period();
        let coupon_pv: f64 = schedule
            .iter()
            .map(|&date| coupon_amount * Self::discount_factor(rate, valuation, date))
            .sum();

        let price = face_value_pv + coupon_pv;

        log::debug!(
            "Priced bond: face_pv={:.6}, coupon_pv={:.6} over {} coupons, price={:.6}",
            face_value_pv,
            coupon_pv,
            schedule.len(),
            price
        );

        Ok(PriceResult {
            face_value_pv,
            coupon_amount,
            coupon_pv,
            payment_count: schedule.len(),
            price,
            schedule,
        })
    }

    /// Continuously compounded discount factor from `valuation` to `date`.
    #[must_use]
    pub fn discount_factor(rate: f64, valuation: Date, date: Date) -> f64 {
        (-rate * Act365Fixed.year_fraction(valuation, date)).exp()
    }
}

/// Prices a bond and returns only the total present value.
pub fn price_bond(bond: &FixedCouponBond) -> BondResult<f64> {
    BondPricer::price(bond).map(|result| result.price)
}

/// Returns the adjusted coupon schedule of a bond.
pub fn schedule(bond: &FixedCouponBond) -> BondResult<PaymentSchedule> {
    ScheduleGenerator::generate(bond)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fixbond_core::types::Frequency;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn annual_bond() -> FixedCouponBond {
        FixedCouponBond::builder()
            .notional(100.0)
            .annual_coupon_rate(0.05)
            .frequency(Frequency::Annual)
            .discount_rate(0.03)
            .valuation_date(d(2025, 11, 15))
            .maturity_date(d(2028, 11, 15))
            .build()
            .unwrap()
    }

    #[test]
    fn test_discount_factor() {
        let df = BondPricer::discount_factor(0.03, d(2025, 1, 1), d(2026, 1, 1));
        assert_relative_eq!(df, (-0.03_f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(
            BondPricer::discount_factor(0.03, d(2025, 1, 1), d(2025, 1, 1)),
            1.0
        );
    }

    #[test]
    fn test_components_add_up() {
        let result = BondPricer::price(&annual_bond()).unwrap();
        assert_eq!(result.payment_count, 3);
        assert_relative_eq!(result.coupon_amount, 5.0);
        assert_relative_eq!(
            result.price,
            result.face_value_pv + result.coupon_pv,
            epsilon = 1e-12
        );
        assert_relative_eq!(result.price, 105.51674, epsilon = 1e-3);
    }

    #[test]
    fn test_face_value_pv() {
        let result = BondPricer::price(&annual_bond()).unwrap();
        let expected = 100.0 * (-0.03 * 1096.0 / 365.0_f64).exp();
        assert_relative_eq!(result.face_value_pv, expected, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_coupon_prices_face_only() {
        let bond = FixedCouponBond::builder()
            .notional(100.0)
            .annual_coupon_rate(0.0)
            .frequency(Frequency::Annual)
            .discount_rate(0.03)
            .valuation_date(d(2025, 11, 15))
            .maturity_date(d(2028, 11, 15))
            .build()
            .unwrap();
        let result = BondPricer::price(&bond).unwrap();
        assert_eq!(result.coupon_pv, 0.0);
        assert_relative_eq!(result.price, result.face_value_pv);
    }

    #[test]
    fn test_price_bond_matches_pricer() {
        let bond = annual_bond();
        let full = BondPricer::price(&bond).unwrap();
        assert_eq!(price_bond(&bond).unwrap(), full.price);
        assert_eq!(schedule(&bond).unwrap(), full.schedule);
    }

    #[test]
    fn test_observer_receives_every_date() {
        let bond = annual_bond();
        let mut dates = Vec::new();
        let mut observer = |_: usize, date: Date| dates.push(date);
        let result = BondPricer::price_with_observer(&bond, &mut observer).unwrap();
        assert_eq!(dates, result.schedule.dates());
    }

    #[test]
    fn test_price_result_serializes() {
        let result = BondPricer::price(&annual_bond()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["payment_count"], 3);
        assert_eq!(json["schedule"][0], "2028-11-15");
    }
}

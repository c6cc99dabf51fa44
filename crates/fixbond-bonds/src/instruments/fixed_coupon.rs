//! Fixed coupon bond.

use serde::{Deserialize, Serialize};

use fixbond_core::daycounts::{Act365Fixed, DayCount};
use fixbond_core::types::{Date, Frequency};

use super::validation::{validate, BondTerms};
use crate::error::{BondError, BondResult};

/// A validated fixed coupon bond.
///
/// The only ways to obtain one are [`FixedCouponBond::new`], the builder,
/// or deserialization, and all of them run [`validate`] first. A value of
/// this type therefore always satisfies:
///
/// - `notional > 0`
/// - the maturity date is a weekday
/// - `maturity_date >= valuation_date`
/// - the frequency divides twelve (guaranteed by [`Frequency`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BondTerms", into = "BondTerms")]
pub struct FixedCouponBond {
    notional: f64,
    annual_coupon_rate: f64,
    frequency: Frequency,
    discount_rate: f64,
    valuation_date: Date,
    maturity_date: Date,
}

impl FixedCouponBond {
    /// Builds a bond from a complete set of terms.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidTerms` listing every violated rule.
    pub fn new(terms: BondTerms) -> BondResult<Self> {
        validate(&terms).into_result()?;

        let BondTerms {
            notional: Some(notional),
            annual_coupon_rate: Some(annual_coupon_rate),
            frequency: Some(frequency),
            discount_rate: Some(discount_rate),
            valuation_date: Some(valuation_date),
            maturity_date: Some(maturity_date),
        } = terms
        else {
            return Err(BondError::missing_field("bond terms"));
        };

        log::debug!(
            "Built {} bond: notional={}, coupon={}, maturity={}",
            frequency,
            notional,
            annual_coupon_rate,
            maturity_date
        );

        Ok(Self {
            notional,
            annual_coupon_rate,
            frequency,
            discount_rate,
            valuation_date,
            maturity_date,
        })
    }

    /// Creates a builder.
    #[must_use]
    pub fn builder() -> FixedCouponBondBuilder {
        FixedCouponBondBuilder::new()
    }

    /// Returns the notional.
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the annual coupon rate as a fraction.
    #[must_use]
    pub fn annual_coupon_rate(&self) -> f64 {
        self.annual_coupon_rate
    }

    /// Returns the payment frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the continuously compounded discount rate.
    #[must_use]
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Returns the valuation date.
    #[must_use]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Returns the coupon paid each period.
    #[must_use]
    pub fn coupon_per_period(&self) -> f64 {
        self.annual_coupon_rate * self.notional / f64::from(self.frequency.periods_per_year())
    }

    /// Returns the calendar days from valuation to maturity.
    #[must_use]
    pub fn days_to_maturity(&self) -> i64 {
        Act365Fixed.day_count(self.valuation_date, self.maturity_date)
    }

    /// Returns the Actual/365 year fraction from valuation to maturity.
    #[must_use]
    pub fn years_to_maturity(&self) -> f64 {
        Act365Fixed.year_fraction(self.valuation_date, self.maturity_date)
    }
}

impl TryFrom<BondTerms> for FixedCouponBond {
    type Error = BondError;

    fn try_from(terms: BondTerms) -> Result<Self, Self::Error> {
        Self::new(terms)
    }
}

impl From<FixedCouponBond> for BondTerms {
    fn from(bond: FixedCouponBond) -> Self {
        BondTerms {
            notional: Some(bond.notional),
            annual_coupon_rate: Some(bond.annual_coupon_rate),
            frequency: Some(bond.frequency),
            discount_rate: Some(bond.discount_rate),
            valuation_date: Some(bond.valuation_date),
            maturity_date: Some(bond.maturity_date),
        }
    }
}

/// Builder for fixed coupon bonds.
#[derive(Debug, Clone, Default)]
pub struct FixedCouponBondBuilder {
    terms: BondTerms,
}

impl FixedCouponBondBuilder {
    /// Creates a new builder with no terms set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the notional.
    #[must_use]
    pub fn notional(mut self, notional: f64) -> Self {
        self.terms.notional = Some(notional);
        self
    }

    /// Sets the annual coupon rate (as fraction, 0.05 = 5%).
    #[must_use]
    pub fn annual_coupon_rate(mut self, rate: f64) -> Self {
        self.terms.annual_coupon_rate = Some(rate);
        self
    }

    /// Sets the payment frequency.
    #[must_use]
    pub fn frequency(mut self, freq: Frequency) -> Self {
        self.terms.frequency = Some(freq);
        self
    }

    /// Sets the continuously compounded discount rate (as fraction).
    #[must_use]
    pub fn discount_rate(mut self, rate: f64) -> Self {
        self.terms.discount_rate = Some(rate);
        self
    }

    /// Sets the valuation date.
    #[must_use]
    pub fn valuation_date(mut self, date: Date) -> Self {
        self.terms.valuation_date = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity_date(mut self, date: Date) -> Self {
        self.terms.maturity_date = Some(date);
        self
    }

    /// Returns the terms collected so far.
    #[must_use]
    pub fn terms(&self) -> &BondTerms {
        &self.terms
    }

    /// Builds the bond.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidTerms` if any term is missing or invalid.
    pub fn build(self) -> BondResult<FixedCouponBond> {
        FixedCouponBond::new(self.terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn quarterly_bond() -> FixedCouponBond {
        FixedCouponBond::builder()
            .notional(100.0)
            .annual_coupon_rate(0.07)
            .frequency(Frequency::Quarterly)
            .discount_rate(0.045)
            .valuation_date(d(2023, 5, 1))
            .maturity_date(d(2026, 5, 1))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_sets_all_terms() {
        let bond = quarterly_bond();
        assert_eq!(bond.notional(), 100.0);
        assert_eq!(bond.annual_coupon_rate(), 0.07);
        assert_eq!(bond.frequency(), Frequency::Quarterly);
        assert_eq!(bond.discount_rate(), 0.045);
        assert_eq!(bond.valuation_date(), d(2023, 5, 1));
        assert_eq!(bond.maturity_date(), d(2026, 5, 1));
    }

    #[test]
    fn test_coupon_per_period() {
        assert_relative_eq!(quarterly_bond().coupon_per_period(), 1.75);
    }

    #[test]
    fn test_days_to_maturity() {
        let bond = quarterly_bond();
        assert_eq!(bond.days_to_maturity(), 1096);
        assert_relative_eq!(bond.years_to_maturity(), 1096.0 / 365.0);
    }

    #[test]
    fn test_builder_missing_terms() {
        let err = FixedCouponBond::builder()
            .notional(100.0)
            .build()
            .unwrap_err();
        assert_eq!(err.violations().len(), 5);
    }

    #[test]
    fn test_weekend_maturity_rejected() {
        // 2026-05-02 is a Saturday
        let result = FixedCouponBond::builder()
            .notional(100.0)
            .annual_coupon_rate(0.07)
            .frequency(Frequency::Quarterly)
            .discount_rate(0.045)
            .valuation_date(d(2023, 5, 1))
            .maturity_date(d(2026, 5, 2))
            .build();
        assert!(matches!(result, Err(BondError::InvalidTerms { .. })));
    }

    #[test]
    fn test_serde_roundtrip_revalidates() {
        let bond = quarterly_bond();
        let json = serde_json::to_string(&bond).unwrap();
        assert!(json.contains("\"frequency\":\"quarterly\""));
        let parsed: FixedCouponBond = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bond);

        let tampered = json.replace("\"notional\":100.0", "\"notional\":-1.0");
        assert!(serde_json::from_str::<FixedCouponBond>(&tampered).is_err());
    }
}

//! Validation of fixed coupon bond terms.
//!
//! All terms are collected first and then checked in one pass by
//! [`validate`]. Cross-field rules such as maturity-not-before-valuation
//! therefore never depend on the order in which fields were supplied.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fixbond_core::types::{Date, Frequency};

use crate::error::{BondError, BondResult};

/// Raw terms of a fixed coupon bond, possibly incomplete.
///
/// Each field is already parsed into its domain type; what remains to be
/// checked are the value ranges and the cross-field rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BondTerms {
    /// Face amount repaid at maturity.
    pub notional: Option<f64>,
    /// Annual coupon rate as a fraction (0.05 = 5%).
    pub annual_coupon_rate: Option<f64>,
    /// Coupon payments per year.
    pub frequency: Option<Frequency>,
    /// Continuously compounded annual discount rate as a fraction.
    pub discount_rate: Option<f64>,
    /// Date the bond is valued on.
    pub valuation_date: Option<Date>,
    /// Final redemption date.
    pub maturity_date: Option<Date>,
}

/// A single broken rule in a set of [`BondTerms`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    /// A required field was not supplied.
    #[error("{field} is required")]
    MissingField {
        /// Field name.
        field: &'static str,
    },

    /// Notional must be strictly positive.
    #[error("notional must be positive, got {value}")]
    NonPositiveNotional {
        /// Supplied notional.
        value: f64,
    },

    /// A rate was NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NonFiniteRate {
        /// Field name.
        field: &'static str,
        /// Supplied value.
        value: f64,
    },

    /// Maturity must fall on Monday to Friday.
    #[error("maturity date {maturity} must be a weekday")]
    MaturityOnWeekend {
        /// Supplied maturity.
        maturity: Date,
    },

    /// Maturity must not precede the valuation date.
    #[error("maturity date {maturity} is before valuation date {valuation}")]
    MaturityBeforeValuation {
        /// Supplied valuation date.
        valuation: Date,
        /// Supplied maturity.
        maturity: Date,
    },
}

/// Outcome of [`validate`]: empty when the terms are acceptable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    /// Returns true if no rule was broken.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the broken rules in field order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Converts into a `Result`, failing with every violation at once.
    pub fn into_result(self) -> BondResult<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(BondError::InvalidTerms {
                violations: self.violations,
            })
        }
    }
}

/// Checks a notional on its own.
#[must_use]
pub fn check_notional(notional: f64) -> Option<Violation> {
    if notional.is_nan() || notional <= 0.0 || notional.is_infinite() {
        Some(Violation::NonPositiveNotional { value: notional })
    } else {
        None
    }
}

/// Checks that a rate is a usable number.
#[must_use]
pub fn check_rate(field: &'static str, value: f64) -> Option<Violation> {
    if value.is_finite() {
        None
    } else {
        Some(Violation::NonFiniteRate { field, value })
    }
}

/// Checks a maturity date on its own.
#[must_use]
pub fn check_maturity(maturity: Date) -> Option<Violation> {
    if maturity.is_weekday() {
        None
    } else {
        Some(Violation::MaturityOnWeekend { maturity })
    }
}

/// Checks the ordering of valuation and maturity dates.
#[must_use]
pub fn check_date_order(valuation: Date, maturity: Date) -> Option<Violation> {
    if maturity < valuation {
        Some(Violation::MaturityBeforeValuation {
            valuation,
            maturity,
        })
    } else {
        None
    }
}

/// Validates a complete set of bond terms.
///
/// Every rule is evaluated, so the result lists all problems rather than
/// stopping at the first.
#[must_use]
pub fn validate(terms: &BondTerms) -> ValidationResult {
    let mut violations = Vec::new();
    let mut missing = |field: &'static str| violations.push(Violation::MissingField { field });

    if terms.notional.is_none() {
        missing("notional");
    }
    if terms.annual_coupon_rate.is_none() {
        missing("annual_coupon_rate");
    }
    if terms.frequency.is_none() {
        missing("frequency");
    }
    if terms.discount_rate.is_none() {
        missing("discount_rate");
    }
    if terms.valuation_date.is_none() {
        missing("valuation_date");
    }
    if terms.maturity_date.is_none() {
        missing("maturity_date");
    }

    violations.extend(terms.notional.and_then(check_notional));
    violations.extend(
        terms
            .annual_coupon_rate
            .and_then(|rate| check_rate("annual_coupon_rate", rate)),
    );
    violations.extend(
        terms
            .discount_rate
            .and_then(|rate| check_rate("discount_rate", rate)),
    );
    violations.extend(terms.maturity_date.and_then(check_maturity));
    if let (Some(valuation), Some(maturity)) = (terms.valuation_date, terms.maturity_date) {
        violations.extend(check_date_order(valuation, maturity));
    }

    ValidationResult { violations }
}

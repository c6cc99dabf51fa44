//! Bond instruments.
//!
//! - [`FixedCouponBond`]: a validated fixed coupon bond
//! - [`BondTerms`] and [`validate`]: the terms a bond is built from and the
//!   single pass that checks them

mod fixed_coupon;
mod validation;

pub use fixed_coupon::{FixedCouponBond, FixedCouponBondBuilder};
pub use validation::{
    check_date_order, check_maturity, check_notional, check_rate, validate, BondTerms,
    ValidationResult, Violation,
};

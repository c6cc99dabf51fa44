//! # Fixbond Bonds
//!
//! Fixed coupon bond pricing built on the `fixbond-core` calendar rules.
//!
//! Three layers, each usable on its own:
//!
//! - **Instruments**: [`FixedCouponBond`], constructed only through a single
//!   validation pass over all of its terms
//! - **Cash Flows**: coupon date generation backward from maturity with
//!   month-end and weekend adjustment, reported to an optional observer
//! - **Pricing**: continuously compounded Actual/365 present value
//!
//! ## Example
//!
//! ```rust
//! use fixbond_bonds::prelude::*;
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
//! let price = price_bond(&bond).unwrap();
//! assert!((price - 105.517).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod cashflows;
pub mod error;
pub mod instruments;
pub mod pricing;

/// Everything needed to build, schedule and price a bond.
pub mod prelude {
    pub use crate::cashflows::{
        LogObserver, NoopObserver, PaymentSchedule, ScheduleGenerator, ScheduleObserver,
    };
    pub use crate::error::{BondError, BondResult};
    pub use crate::instruments::{
        validate, BondTerms, FixedCouponBond, FixedCouponBondBuilder, ValidationResult,
        Violation,
    };
    pub use crate::pricing::{price_bond, schedule, BondPricer, PriceResult};
}

pub use error::{BondError, BondResult};
pub use instruments::{BondTerms, FixedCouponBond, FixedCouponBondBuilder};
pub use pricing::{price_bond, schedule, BondPricer, PriceResult};

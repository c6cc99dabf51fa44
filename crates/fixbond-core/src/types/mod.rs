//! Domain types for coupon schedule calculations.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`NominalDate`]: Result of month arithmetic, possibly past the month end
//! - [`Frequency`]: Coupon payment frequency

mod date;
mod frequency;
mod nominal;

pub use date::Date;
pub use frequency::{Frequency, FREQUENCY_TOKENS};
pub use nominal::NominalDate;

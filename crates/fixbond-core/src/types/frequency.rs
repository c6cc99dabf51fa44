//! Coupon payment frequency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Payment frequency for coupon bonds.
///
/// The discriminant is the number of payments per year; every variant
/// divides twelve, so a coupon period is always a whole number of months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Annual payments (1 per year)
    #[default]
    Annual = 1,
    /// Quarterly payments (4 per year)
    Quarterly = 4,
    /// Monthly payments (12 per year)
    Monthly = 12,
}

/// Textual tokens accepted for each frequency.
///
/// Only input parsing consults this table; pricing works on the enum.
pub const FREQUENCY_TOKENS: &[(&str, Frequency)] = &[
    ("annual", Frequency::Annual),
    ("quarterly", Frequency::Quarterly),
    ("monthly", Frequency::Monthly),
];

impl Frequency {
    /// Coupon payments per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        *self as u32
    }

    /// Whole months between consecutive coupons.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// Returns the lowercase token for this frequency.
    #[must_use]
    pub fn token(&self) -> &'static str {
        FREQUENCY_TOKENS
            .iter()
            .find(|(_, freq)| freq == self)
            .map_or("annual", |(token, _)| token)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Frequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        FREQUENCY_TOKENS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, freq)| *freq)
            .ok_or_else(|| CoreError::InvalidFrequency {
                token: s.to_string(),
                expected: FREQUENCY_TOKENS
                    .iter()
                    .map(|(name, _)| *name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

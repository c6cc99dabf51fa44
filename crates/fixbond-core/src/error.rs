//! Error types for the Fixbond core crate.
//!
//! Only input construction can fail here: once a [`crate::Date`] or
//! [`crate::Frequency`] exists, every calendar rule is total.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date construction or arithmetic.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Unknown payment frequency token.
    #[error("Invalid frequency: {token} (expected one of: {expected})")]
    InvalidFrequency {
        /// The token that failed to resolve.
        token: String,
        /// Comma separated list of accepted tokens.
        expected: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_frequency_error_lists_tokens() {
        let err = CoreError::InvalidFrequency {
            token: "weekly".to_string(),
            expected: "annual, quarterly, monthly".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("weekly"));
        assert!(msg.contains("quarterly"));
    }
}

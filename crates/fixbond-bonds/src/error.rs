//! Error types for bond operations.

use thiserror::Error;

use crate::instruments::Violation;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// The bond terms failed validation; no bond was built.
    #[error("Invalid bond terms: {}", join_violations(.violations))]
    InvalidTerms {
        /// Every violation found in the terms.
        violations: Vec<Violation>,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Cash flow generation failed.
    #[error("Cash flow generation failed: {reason}")]
    CashFlowFailed {
        /// Description of the failure.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    CoreError(#[from] fixbond_core::CoreError),
}

impl BondError {
    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates a cash flow generation error.
    #[must_use]
    pub fn cash_flow_failed(reason: impl Into<String>) -> Self {
        Self::CashFlowFailed {
            reason: reason.into(),
        }
    }

    /// Returns the validation violations, if this is a validation failure.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::InvalidTerms { violations } => violations,
            _ => &[],
        }
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

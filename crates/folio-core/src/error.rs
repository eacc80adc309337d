//! # Error Types
//!
//! Domain error types for folio-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  folio-core errors (this file)                                         │
//! │  ├── CoreError        - ledger outcomes callers may treat as errors    │
//! │  └── ValidationError  - rejected input (strict intake, money parsing)  │
//! │                                                                         │
//! │  folio-counter errors (app crate)                                      │
//! │  └── CliError         - I/O, config and menu input failures            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → message on the console │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing or sold-out item is a normal outcome of a sale, reported through
//! `SaleOutcome`. The `ItemNotFound` and `OutOfStock` variants exist for
//! callers that prefer to propagate those outcomes with `?`.

use thiserror::Error;

use crate::types::StockKind;

// =============================================================================
// Core Error
// =============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// No stock entry matches the requested title and year.
    #[error("{kind} '{title}' ({year}) is not in the inventory")]
    ItemNotFound {
        kind: StockKind,
        title: String,
        year: i32,
    },

    /// The matching entry exists but its stock gauge is zero.
    #[error("{kind} '{title}' ({year}) is out of stock")]
    OutOfStock {
        kind: StockKind,
        title: String,
        year: i32,
    },

    /// Intake rejected by the strict intake policy.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only produced when a caller opts into validation: money parsing, and
/// intake under `IntakePolicy::Strict`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. a price with three decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OutOfStock {
            kind: StockKind::Book,
            title: "Dune".to_string(),
            year: 1965,
        };
        assert_eq!(err.to_string(), "book 'Dune' (1965) is out of stock");

        let err = CoreError::ItemNotFound {
            kind: StockKind::Magazine,
            title: "Wired".to_string(),
            year: 2001,
        };
        assert_eq!(err.to_string(), "magazine 'Wired' (2001) is not in the inventory");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::MustBeNonNegative {
            field: "copies".to_string(),
        };
        assert_eq!(err.to_string(), "copies must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "title".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

//! # Validation Module
//!
//! Intake hardening rules.
//!
//! The ledger accepts any intake candidate by default. These checks run only
//! when the ledger is configured with `IntakePolicy::Strict`, and the app
//! uses the discount check while loading its configuration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Intake Validation                                  │
//! │                                                                         │
//! │  candidate ──► policy? ──► Permissive ──────────────► merge / append    │
//! │                   │                                                     │
//! │                   └──────► Strict ──► validate_* ──┬─► merge / append   │
//! │                                                    │                    │
//! │                                                    └─► Err, no change   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use folio_core::money::Money;
//! use folio_core::types::Book;
//! use folio_core::validation::validate_book;
//!
//! assert!(validate_book(&Book::new("Dune", "Herbert", 1965, 5, Money::from_cents(1000))).is_ok());
//! assert!(validate_book(&Book::new("", "Herbert", 1965, 5, Money::from_cents(1000))).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Book, Magazine, Publication};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound for a discount expressed in basis points (100%).
pub const MAX_DISCOUNT_BPS: u32 = 10_000;

// =============================================================================
// Field Validators
// =============================================================================

/// Rejects empty or whitespace-only titles.
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    Ok(())
}

/// Rejects negative counts (copies, issue numbers).
pub fn validate_count(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Rejects negative prices. Zero is allowed (free items).
pub fn validate_price(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// A discount must lie between 0% and 100%.
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_DISCOUNT_BPS {
        return Err(ValidationError::OutOfRange {
            field: "loyalty discount".to_string(),
            min: 0,
            max: MAX_DISCOUNT_BPS as i64,
        });
    }

    Ok(())
}

/// The error for a count or amount whose sum or product leaves the `i64` range.
///
/// Raised under every intake policy, since wrapping would corrupt the stock
/// gauges and the register balances.
pub fn out_of_range(field: &str) -> ValidationError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        min: i64::MIN,
        max: i64::MAX,
    }
}

// =============================================================================
// Candidate Validators
// =============================================================================

fn validate_publication(publication: &Publication) -> ValidationResult<()> {
    validate_title(&publication.title)
}

pub fn validate_book(book: &Book) -> ValidationResult<()> {
    validate_publication(&book.publication)?;
    validate_count("copies", book.copies)?;
    validate_price("price per copy", book.unit_price)
}

pub fn validate_magazine(magazine: &Magazine) -> ValidationResult<()> {
    validate_publication(&magazine.publication)?;
    validate_count("issue number", magazine.issue_number)?;
    validate_price("subscription cost", magazine.subscription_cost)
}

// =============================================================================
// Unit Tests
// =============================================================================

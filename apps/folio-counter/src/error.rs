//! # CLI Error Type
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in folio-counter                          │
//! │                                                                         │
//! │  menu choice ──► parse fields ──► ledger call ──► render                │
//! │                      │                 │             │                  │
//! │                InvalidInput        Core(..)      Io / Json              │
//! │                      │                 │             │                  │
//! │                      └──── printed, ───┘             └── session ends   │
//! │                           menu shown again                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use folio_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A typed field could not be parsed.
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input stream closed.
    #[error("input closed")]
    EndOfInput,
}

impl CliError {
    pub fn invalid_input(field: &str, reason: impl ToString) -> Self {
        CliError::InvalidInput {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Errors reported to the operator while the menu keeps running.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CliError::InvalidInput { .. } | CliError::Core(_))
    }
}

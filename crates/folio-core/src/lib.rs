//! # folio-core: Store Ledger Engine for Folio POS
//!
//! The inventory, sale and cash bookkeeping of a small shop selling books
//! and magazines. Everything here is in-memory and synchronous, with no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Folio POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                folio-counter (menu + console)                   │   │
//! │  │    read choice ──► parse fields ──► call ledger ──► render      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ owns StoreLedger + CashRegister        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ folio-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  ledger   │  │ register  │  │   │
//! │  │   │   Book    │  │   Money   │  │  intake   │  │   cash    │  │   │
//! │  │   │ Magazine  │  │           │  │   sale    │  │  journal  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • SINGLE THREAD • STATE LIVES FOR THE PROCESS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Publication, Book, Magazine, StockItem, Customer
//! - [`money`] - Money type with integer arithmetic
//! - [`register`] - Cash register and its movement journal
//! - [`customers`] - Customer registry
//! - [`ledger`] - Store ledger: intake, sale, reporting
//! - [`config`] - Ledger configuration
//! - [`error`] - Domain error types
//! - [`validation`] - Optional intake hardening
//!
//! ## Example Usage
//!
//! ```rust
//! use folio_core::{Book, LedgerConfig, Money, SaleOutcome, StoreLedger};
//!
//! let (mut ledger, mut register) = StoreLedger::open(&LedgerConfig::default());
//!
//! let dune = Book::new("Dune", "Herbert", 1965, 5, Money::from_cents(1000));
//! ledger.add_book(&mut register, dune).unwrap();
//!
//! // Loyalty customers pay 10% less.
//! let outcome = ledger.sell_book(&mut register, "Dune", 1965, true).unwrap();
//! assert!(matches!(outcome, SaleOutcome::Sold(ref r) if r.final_price.cents() == 900));
//!
//! let cash = register.snapshot();
//! assert_eq!(cash.store_cash.cents(), 100_000 - 5000);
//! assert_eq!(cash.customer_payments.cents(), 900);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod customers;
pub mod error;
pub mod ledger;
pub mod money;
pub mod register;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::{IntakePolicy, LedgerConfig};
pub use customers::CustomerRegistry;
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{IntakeCounts, IntakeOutcome, SaleOutcome, SaleReceipt, StoreLedger};
pub use money::Money;
pub use register::{CashMovement, CashRegister, CashSnapshot, MovementKind};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Cash in the register when the store opens ($1000.00).
pub const DEFAULT_OPENING_CASH: Money = Money::from_cents(100_000);

/// Loyalty discount in basis points (10%).
pub const DEFAULT_LOYALTY_DISCOUNT_BPS: u32 = 1000;

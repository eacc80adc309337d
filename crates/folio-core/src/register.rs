//! # Cash Register
//!
//! Tracks the store's own cash and the money received from customers.
//!
//! ## Money Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cash Register                                     │
//! │                                                                         │
//! │   book intake ──────┐                                                   │
//! │                     ├──► store_cash -= outlay                           │
//! │   magazine intake ──┘                                                   │
//! │                                                                         │
//! │   sale ─────────────────► customer_payments += final price              │
//! │                                                                         │
//! │   snapshot ─────────────► total = store_cash + customer_payments        │
//! │                                                                         │
//! │   Every call appends one CashMovement to the journal.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither balance is ever assigned directly after construction; they only
//! move by the amounts recorded in the journal. Amounts are not validated,
//! but a movement that would push either balance or their total outside the
//! `i64` cent range is refused and leaves the register unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::out_of_range;
use crate::DEFAULT_OPENING_CASH;

// =============================================================================
// Movements
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    /// Payment received from a customer for a sale.
    CustomerPayment,
    /// Store outlay for books taken into stock.
    BookIntake,
    /// Store outlay for magazines taken into stock.
    MagazineIntake,
}

impl MovementKind {
    /// Intake outlays reduce the store cash; payments do not.
    #[inline]
    pub const fn is_debit(&self) -> bool {
        matches!(self, MovementKind::BookIntake | MovementKind::MagazineIntake)
    }
}

/// One entry of the register journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashMovement {
    pub id: Uuid,
    pub kind: MovementKind,
    /// The amount exactly as passed to the register.
    pub amount: Money,
    pub at: DateTime<Utc>,
}

// =============================================================================
// Snapshot
// =============================================================================

/// Point-in-time view of the register balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashSnapshot {
    pub store_cash: Money,
    pub customer_payments: Money,
    pub total: Money,
}

// =============================================================================
// Cash Register
// =============================================================================

/// The single register of the store.
///
/// Owned by the process entry point and lent to the ledger for each
/// operation that moves money.
#[derive(Debug, Clone)]
pub struct CashRegister {
    store_cash: Money,
    customer_payments: Money,
    movements: Vec<CashMovement>,
}

impl CashRegister {
    /// Opens a register holding `opening_cash` and no customer payments.
    pub fn new(opening_cash: Money) -> Self {
        CashRegister {
            store_cash: opening_cash,
            customer_payments: Money::zero(),
            movements: Vec::new(),
        }
    }

    /// `customer_payments += amount`.
    pub fn receive_payment(&mut self, amount: Money) -> CoreResult<()> {
        let customer_payments = self
            .customer_payments
            .checked_add(amount)
            .ok_or_else(|| out_of_range("customer payments"))?;
        self.apply(self.store_cash, customer_payments, MovementKind::CustomerPayment, amount)
    }

    /// `store_cash -= amount` for a book intake.
    pub fn debit_for_book_intake(&mut self, amount: Money) -> CoreResult<()> {
        self.debit(MovementKind::BookIntake, amount)
    }

    /// `store_cash -= amount` for a magazine intake.
    pub fn debit_for_magazine_intake(&mut self, amount: Money) -> CoreResult<()> {
        self.debit(MovementKind::MagazineIntake, amount)
    }

    pub fn snapshot(&self) -> CashSnapshot {
        CashSnapshot {
            store_cash: self.store_cash,
            customer_payments: self.customer_payments,
            total: self.store_cash + self.customer_payments,
        }
    }

    #[inline]
    pub fn store_cash(&self) -> Money {
        self.store_cash
    }

    #[inline]
    pub fn customer_payments(&self) -> Money {
        self.customer_payments
    }

    /// The journal, oldest first.
    pub fn movements(&self) -> &[CashMovement] {
        &self.movements
    }

    fn debit(&mut self, kind: MovementKind, amount: Money) -> CoreResult<()> {
        let store_cash = self
            .store_cash
            .checked_sub(amount)
            .ok_or_else(|| out_of_range("store cash"))?;
        self.apply(store_cash, self.customer_payments, kind, amount)
    }

    /// Commits new balances, or leaves everything untouched when the total
    /// would not fit.
    fn apply(
        &mut self,
        store_cash: Money,
        customer_payments: Money,
        kind: MovementKind,
        amount: Money,
    ) -> CoreResult<()> {
        if store_cash.checked_add(customer_payments).is_none() {
            return Err(out_of_range("total money").into());
        }

        self.store_cash = store_cash;
        self.customer_payments = customer_payments;
        self.record(kind, amount);
        Ok(())
    }

    fn record(&mut self, kind: MovementKind, amount: Money) {
        let movement = CashMovement {
            id: Uuid::new_v4(),
            kind,
            amount,
            at: Utc::now(),
        };
        debug!(
            id = %movement.id,
            kind = ?kind,
            amount = %amount,
            store_cash = %self.store_cash,
            customer_payments = %self.customer_payments,
            "Cash movement recorded"
        );
        self.movements.push(movement);
    }
}

impl Default for CashRegister {
    fn default() -> Self {
        CashRegister::new(DEFAULT_OPENING_CASH)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Store Ledger
//!
//! The orchestrator: owns the book list, the magazine list and the customer
//! registry, and moves money through a borrowed [`CashRegister`].
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store Ledger                                    │
//! │                                                                         │
//! │  INTAKE  add_book / add_magazine                                        │
//! │  ├── scan for (title, author, year)                                     │
//! │  ├── found     → gauge += candidate gauge         → Merged              │
//! │  ├── not found → append candidate                 → Added               │
//! │  └── debit register (book: price × copies, magazine: flat cost)         │
//! │                                                                         │
//! │  SALE    sell_book / sell_magazine                                      │
//! │  ├── scan for (title, year), author ignored, first match wins           │
//! │  ├── not found        → NotFound                                        │
//! │  ├── gauge <= 0       → OutOfStock                                      │
//! │  └── gauge -= 1, price - loyalty discount → register payment → Sold     │
//! │                                                                         │
//! │  REPORT  books / magazines / inventory / list_customers / intake_counts │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stock Gauge Transitions
//! ```text
//!   gauge > 0 ──sale──► gauge - 1 ──...──► 0 ──sale──► OutOfStock (stays 0)
//! ```
//!
//! The register is passed into every operation that moves money; the ledger
//! never keeps hold of it. Lookups are linear scans, which is fine for a
//! counter-sized inventory.

use std::slice;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{IntakePolicy, LedgerConfig};
use crate::customers::CustomerRegistry;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::register::CashRegister;
use crate::types::{Book, Customer, Magazine, Publication, StockItem, StockItemRef, StockKind};
use crate::validation::{out_of_range, validate_book, validate_magazine};

// =============================================================================
// Outcomes
// =============================================================================

/// Result of a successful intake. `stock` is the entry's gauge afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum IntakeOutcome {
    /// No matching entry existed; the candidate was appended.
    Added { stock: i64 },
    /// The candidate's gauge was added to an existing entry.
    Merged { stock: i64 },
}

impl IntakeOutcome {
    pub fn stock(&self) -> i64 {
        match self {
            IntakeOutcome::Added { stock } | IntakeOutcome::Merged { stock } => *stock,
        }
    }
}

/// Details of a completed sale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleReceipt {
    pub receipt_id: Uuid,
    pub kind: StockKind,
    /// The entry that was sold, which may carry a different author than the
    /// buyer had in mind since sales match on title and year only.
    pub publication: Publication,
    pub list_price: Money,
    pub discount: Money,
    pub final_price: Money,
    pub loyalty: bool,
    pub remaining_stock: i64,
    pub sold_at: DateTime<Utc>,
}

/// What a sale attempt produced. Only `Sold` changes any state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SaleOutcome {
    Sold(SaleReceipt),
    OutOfStock {
        kind: StockKind,
        title: String,
        year: i32,
    },
    NotFound {
        kind: StockKind,
        title: String,
        year: i32,
    },
}

impl SaleOutcome {
    pub fn is_sold(&self) -> bool {
        matches!(self, SaleOutcome::Sold(_))
    }

    pub fn receipt(&self) -> Option<&SaleReceipt> {
        match self {
            SaleOutcome::Sold(receipt) => Some(receipt),
            _ => None,
        }
    }

    /// Turns the informational outcomes into errors for `?` propagation.
    pub fn into_result(self) -> CoreResult<SaleReceipt> {
        match self {
            SaleOutcome::Sold(receipt) => Ok(receipt),
            SaleOutcome::OutOfStock { kind, title, year } => {
                Err(CoreError::OutOfStock { kind, title, year })
            }
            SaleOutcome::NotFound { kind, title, year } => {
                Err(CoreError::ItemNotFound { kind, title, year })
            }
        }
    }
}

/// Number of intake events per kind, merged or appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IntakeCounts {
    pub books: u64,
    pub magazines: u64,
}

// =============================================================================
// Stocked entries
// =============================================================================

/// What intake and sale need from an inventory entry.
trait Stocked {
    const KIND: StockKind;

    /// Name of the stock gauge in error messages.
    const GAUGE_FIELD: &'static str;

    fn publication(&self) -> &Publication;

    fn gauge_mut(&mut self) -> &mut i64;

    fn sale_price(&self) -> Money;

    fn intake_cost(&self) -> CoreResult<Money>;

    fn debit_intake(register: &mut CashRegister, amount: Money) -> CoreResult<()>;
}

impl Stocked for Book {
    const KIND: StockKind = StockKind::Book;
    const GAUGE_FIELD: &'static str = "number of copies";

    fn publication(&self) -> &Publication {
        &self.publication
    }

    fn gauge_mut(&mut self) -> &mut i64 {
        &mut self.copies
    }

    fn sale_price(&self) -> Money {
        self.unit_price
    }

    fn intake_cost(&self) -> CoreResult<Money> {
        Book::intake_cost(self)
    }

    fn debit_intake(register: &mut CashRegister, amount: Money) -> CoreResult<()> {
        register.debit_for_book_intake(amount)
    }
}

impl Stocked for Magazine {
    const KIND: StockKind = StockKind::Magazine;
    const GAUGE_FIELD: &'static str = "issue number";

    fn publication(&self) -> &Publication {
        &self.publication
    }

    fn gauge_mut(&mut self) -> &mut i64 {
        &mut self.issue_number
    }

    fn sale_price(&self) -> Money {
        self.subscription_cost
    }

    fn intake_cost(&self) -> CoreResult<Money> {
        Ok(Magazine::intake_cost(self))
    }

    fn debit_intake(register: &mut CashRegister, amount: Money) -> CoreResult<()> {
        register.debit_for_magazine_intake(amount)
    }
}

/// Merges or appends `candidate`. Every overflow check runs before the
/// register or the inventory is touched.
fn take_in<T: Stocked>(
    items: &mut Vec<T>,
    register: &mut CashRegister,
    mut candidate: T,
) -> CoreResult<IntakeOutcome> {
    let cost = candidate.intake_cost()?;
    let incoming = *candidate.gauge_mut();

    match items
        .iter_mut()
        .find(|existing| existing.publication().same_edition(candidate.publication()))
    {
        Some(existing) => {
            let gauge = existing.gauge_mut();
            let stock = gauge
                .checked_add(incoming)
                .ok_or_else(|| out_of_range(T::GAUGE_FIELD))?;
            T::debit_intake(register, cost)?;
            *gauge = stock;
            Ok(IntakeOutcome::Merged { stock })
        }
        None => {
            T::debit_intake(register, cost)?;
            items.push(candidate);
            Ok(IntakeOutcome::Added { stock: incoming })
        }
    }
}

fn sell_first_match<T: Stocked>(
    items: &mut [T],
    register: &mut CashRegister,
    title: &str,
    year: i32,
    loyalty: bool,
    discount_bps: u32,
) -> CoreResult<SaleOutcome> {
    let Some(item) = items
        .iter_mut()
        .find(|item| item.publication().matches_sale(title, year))
    else {
        warn!(kind = %T::KIND, title, year, "Requested item is not in the inventory");
        return Ok(SaleOutcome::NotFound {
            kind: T::KIND,
            title: title.to_string(),
            year,
        });
    };

    if *item.gauge_mut() <= 0 {
        warn!(kind = %T::KIND, title, year, "Requested item is out of stock");
        return Ok(SaleOutcome::OutOfStock {
            kind: T::KIND,
            title: title.to_string(),
            year,
        });
    }

    let list_price = item.sale_price();
    let discount = if loyalty {
        list_price.percentage_of(discount_bps)
    } else {
        Money::zero()
    };
    let final_price = list_price
        .checked_sub(discount)
        .ok_or_else(|| out_of_range("sale price"))?;

    register.receive_payment(final_price)?;

    let gauge = item.gauge_mut();
    *gauge -= 1;
    let remaining_stock = *gauge;

    let receipt = SaleReceipt {
        receipt_id: Uuid::new_v4(),
        kind: T::KIND,
        publication: item.publication().clone(),
        list_price,
        discount,
        final_price,
        loyalty,
        remaining_stock,
        sold_at: Utc::now(),
    };
    info!(
        receipt_id = %receipt.receipt_id,
        kind = %T::KIND,
        title,
        year,
        author = %receipt.publication.author,
        final_price = %final_price,
        discount = %discount,
        remaining_stock,
        "Sold to customer"
    );

    Ok(SaleOutcome::Sold(receipt))
}

// =============================================================================
// Store Ledger
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct StoreLedger {
    books: Vec<Book>,
    magazines: Vec<Magazine>,
    customers: CustomerRegistry,
    loyalty_discount_bps: u32,
    intake_policy: IntakePolicy,
    intake_counts: IntakeCounts,
}

impl StoreLedger {
    /// An empty ledger using the discount and intake policy from `config`.
    pub fn new(config: &LedgerConfig) -> Self {
        StoreLedger {
            loyalty_discount_bps: config.loyalty_discount_bps,
            intake_policy: config.intake_policy,
            ..Default::default()
        }
    }

    /// Opens a fresh ledger together with its register.
    ///
    /// ```rust
    /// use folio_core::{Book, LedgerConfig, Money, StoreLedger};
    ///
    /// let (mut ledger, mut register) = StoreLedger::open(&LedgerConfig::default());
    /// ledger
    ///     .add_book(&mut register, Book::new("Dune", "Herbert", 1965, 5, Money::from_cents(1000)))
    ///     .unwrap();
    /// assert_eq!(register.store_cash().cents(), 100_000 - 5000);
    /// ```
    pub fn open(config: &LedgerConfig) -> (StoreLedger, CashRegister) {
        (StoreLedger::new(config), CashRegister::new(config.opening_cash))
    }

    // -------------------------------------------------------------------------
    // Intake
    // -------------------------------------------------------------------------

    /// Takes books into stock, merging with an identical (title, author, year).
    ///
    /// The register is debited `unit_price × copies` of the candidate on both
    /// paths. Under the strict policy an invalid candidate is rejected before
    /// anything changes. A cost or copy count that overflows is rejected the
    /// same way under either policy.
    pub fn add_book(
        &mut self,
        register: &mut CashRegister,
        book: Book,
    ) -> CoreResult<IntakeOutcome> {
        if self.intake_policy == IntakePolicy::Strict {
            if let Err(err) = validate_book(&book) {
                warn!(title = %book.publication.title, error = %err, "Book intake rejected");
                return Err(err.into());
            }
        }

        let title = book.publication.title.clone();
        let outcome = take_in(&mut self.books, register, book).map_err(|err| {
            warn!(title = %title, error = %err, "Book intake rejected");
            err
        })?;
        self.intake_counts.books += 1;

        match outcome {
            IntakeOutcome::Merged { stock } => info!(
                title = %title,
                copies = stock,
                "Number of copies updated for existing book"
            ),
            IntakeOutcome::Added { stock } => {
                info!(title = %title, copies = stock, "Book added to inventory")
            }
        }
        Ok(outcome)
    }

    /// Takes magazines into stock, merging with an identical (title, author, year).
    ///
    /// On merge the incoming issue number is added to the entry's issue
    /// number. The register is debited one subscription cost per call,
    /// regardless of the issue count.
    pub fn add_magazine(
        &mut self,
        register: &mut CashRegister,
        magazine: Magazine,
    ) -> CoreResult<IntakeOutcome> {
        if self.intake_policy == IntakePolicy::Strict {
            if let Err(err) = validate_magazine(&magazine) {
                warn!(
                    title = %magazine.publication.title,
                    error = %err,
                    "Magazine intake rejected"
                );
                return Err(err.into());
            }
        }

        let title = magazine.publication.title.clone();
        let outcome = take_in(&mut self.magazines, register, magazine).map_err(|err| {
            warn!(title = %title, error = %err, "Magazine intake rejected");
            err
        })?;
        self.intake_counts.magazines += 1;

        match outcome {
            IntakeOutcome::Merged { stock } => info!(
                title = %title,
                issue_number = stock,
                "Issue number updated for existing magazine"
            ),
            IntakeOutcome::Added { stock } => {
                info!(title = %title, issue_number = stock, "Magazine added to inventory")
            }
        }
        Ok(outcome)
    }

    /// Dispatches an intake candidate of either kind.
    pub fn receive(
        &mut self,
        register: &mut CashRegister,
        item: StockItem,
    ) -> CoreResult<IntakeOutcome> {
        match item {
            StockItem::Book(book) => self.add_book(register, book),
            StockItem::Magazine(magazine) => self.add_magazine(register, magazine),
        }
    }

    // -------------------------------------------------------------------------
    // Sale
    // -------------------------------------------------------------------------

    /// Sells one copy of the first book matching `title` and `year`.
    ///
    /// Not-found and out-of-stock come back as `Ok` outcomes. `Err` means the
    /// payment would overflow the register, and nothing was changed.
    pub fn sell_book(
        &mut self,
        register: &mut CashRegister,
        title: &str,
        year: i32,
        loyalty: bool,
    ) -> CoreResult<SaleOutcome> {
        sell_first_match(
            &mut self.books,
            register,
            title,
            year,
            loyalty,
            self.loyalty_discount_bps,
        )
    }

    /// Sells one issue of the first magazine matching `title` and `year`.
    pub fn sell_magazine(
        &mut self,
        register: &mut CashRegister,
        title: &str,
        year: i32,
        loyalty: bool,
    ) -> CoreResult<SaleOutcome> {
        sell_first_match(
            &mut self.magazines,
            register,
            title,
            year,
            loyalty,
            self.loyalty_discount_bps,
        )
    }

    pub fn sell(
        &mut self,
        register: &mut CashRegister,
        kind: StockKind,
        title: &str,
        year: i32,
        loyalty: bool,
    ) -> CoreResult<SaleOutcome> {
        match kind {
            StockKind::Book => self.sell_book(register, title, year, loyalty),
            StockKind::Magazine => self.sell_magazine(register, title, year, loyalty),
        }
    }

    // -------------------------------------------------------------------------
    // Customers
    // -------------------------------------------------------------------------

    pub fn register_customer(&mut self, customer: Customer) {
        self.customers.register(customer);
    }

    pub fn list_customers(&self) -> slice::Iter<'_, Customer> {
        self.customers.list_all()
    }

    // -------------------------------------------------------------------------
    // Reporting
    // -------------------------------------------------------------------------

    /// Books in insertion order.
    pub fn books(&self) -> slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Magazines in insertion order.
    pub fn magazines(&self) -> slice::Iter<'_, Magazine> {
        self.magazines.iter()
    }

    /// Books then magazines, each in insertion order.
    pub fn inventory(&self) -> impl Iterator<Item = StockItemRef<'_>> + Clone + '_ {
        self.books
            .iter()
            .map(StockItemRef::Book)
            .chain(self.magazines.iter().map(StockItemRef::Magazine))
    }

    pub fn intake_counts(&self) -> IntakeCounts {
        self.intake_counts
    }

    pub fn loyalty_discount_bps(&self) -> u32 {
        self.loyalty_discount_bps
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

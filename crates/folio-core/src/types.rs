//! # Domain Types
//!
//! Catalog and customer types held by the store ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │                    ┌─────────────────────┐                              │
//! │                    │    Publication      │                              │
//! │                    │  ─────────────────  │                              │
//! │                    │  title              │                              │
//! │                    │  author             │                              │
//! │                    │  year               │                              │
//! │                    └──────────┬──────────┘                              │
//! │                  carried by   │                                         │
//! │          ┌────────────────────┴───────────────────┐                     │
//! │  ┌───────▼─────────┐                      ┌───────▼─────────┐           │
//! │  │      Book       │                      │    Magazine     │           │
//! │  │  copies         │                      │  issue_number   │           │
//! │  │  unit_price     │                      │  genre          │           │
//! │  └─────────────────┘                      │  subscription   │           │
//! │                                           └─────────────────┘           │
//! │                                                                         │
//! │  StockItem = Book | Magazine   (matched on, never dispatched virtually) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Matching Keys
//! - Intake merges on `(title, author, year)`.
//! - Sales look up `(title, year)` only; the author is ignored.
//!
//! Both comparisons are exact: no trimming, no case folding.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::out_of_range;

// =============================================================================
// Stock Kind
// =============================================================================

/// Which inventory list an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockKind {
    Book,
    Magazine,
}

impl fmt::Display for StockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockKind::Book => f.write_str("book"),
            StockKind::Magazine => f.write_str("magazine"),
        }
    }
}

// =============================================================================
// Publication
// =============================================================================

/// Attributes shared by every catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl Publication {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Publication {
            title: title.into(),
            author: author.into(),
            year,
        }
    }

    /// Intake identity: title, author and year all equal.
    #[inline]
    pub fn same_edition(&self, other: &Publication) -> bool {
        self.title == other.title && self.author == other.author && self.year == other.year
    }

    /// Sale lookup: title and year equal, author not considered.
    #[inline]
    pub fn matches_sale(&self, title: &str, year: i32) -> bool {
        self.title == title && self.year == year
    }

    fn info(&self) -> Vec<InfoField> {
        vec![
            InfoField::new("Title", &self.title),
            InfoField::new("Author", &self.author),
            InfoField::new("Publication Year", self.year),
        ]
    }
}

// =============================================================================
// Info Projection
// =============================================================================

/// One labelled line of an item's read-only projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoField {
    pub label: &'static str,
    pub value: String,
}

impl InfoField {
    fn new(label: &'static str, value: impl ToString) -> Self {
        InfoField {
            label,
            value: value.to_string(),
        }
    }
}

// =============================================================================
// Book
// =============================================================================

/// A book title held in stock.
///
/// `copies` is the stock gauge: increased by repeat intake, decreased by one
/// per sale, never decreased below zero by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(flatten)]
    pub publication: Publication,
    pub copies: i64,
    pub unit_price: Money,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        copies: i64,
        unit_price: Money,
    ) -> Self {
        Book {
            publication: Publication::new(title, author, year),
            copies,
            unit_price,
        }
    }

    /// What the store pays to take this candidate into stock.
    ///
    /// Fails when `unit_price × copies` does not fit in the register.
    pub fn intake_cost(&self) -> CoreResult<Money> {
        self.unit_price
            .checked_multiply_quantity(self.copies)
            .ok_or_else(|| out_of_range("book intake cost").into())
    }

    pub fn info(&self) -> Vec<InfoField> {
        let mut fields = self.publication.info();
        fields.push(InfoField::new("Number of Copies", self.copies));
        fields.push(InfoField::new("Price per Copy", self.unit_price));
        fields
    }
}

// =============================================================================
// Magazine
// =============================================================================

/// A magazine title held in stock.
///
/// `issue_number` doubles as the stock gauge: repeat intake adds the incoming
/// issue number to it and every sale takes one off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    #[serde(flatten)]
    pub publication: Publication,
    pub issue_number: i64,
    pub genre: String,
    pub subscription_cost: Money,
}

impl Magazine {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        issue_number: i64,
        genre: impl Into<String>,
        subscription_cost: Money,
    ) -> Self {
        Magazine {
            publication: Publication::new(title, author, year),
            issue_number,
            genre: genre.into(),
            subscription_cost,
        }
    }

    /// Intake is a flat debit of one subscription cost, whatever the issue count.
    #[inline]
    pub fn intake_cost(&self) -> Money {
        self.subscription_cost
    }

    pub fn info(&self) -> Vec<InfoField> {
        let mut fields = self.publication.info();
        fields.push(InfoField::new("Issue Number", self.issue_number));
        fields.push(InfoField::new("Genre", &self.genre));
        fields.push(InfoField::new("Monthly Subscription Cost", self.subscription_cost));
        fields
    }
}

// =============================================================================
// Stock Item
// =============================================================================

/// An owned intake candidate of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StockItem {
    Book(Book),
    Magazine(Magazine),
}

impl StockItem {
    pub fn borrowed(&self) -> StockItemRef<'_> {
        match self {
            StockItem::Book(book) => StockItemRef::Book(book),
            StockItem::Magazine(magazine) => StockItemRef::Magazine(magazine),
        }
    }

    pub fn kind(&self) -> StockKind {
        self.borrowed().kind()
    }

    pub fn publication(&self) -> &Publication {
        match self {
            StockItem::Book(book) => &book.publication,
            StockItem::Magazine(magazine) => &magazine.publication,
        }
    }

    /// Copies for a book, issue number for a magazine.
    pub fn stock(&self) -> i64 {
        self.borrowed().stock()
    }

    pub fn price(&self) -> Money {
        self.borrowed().price()
    }

    pub fn info(&self) -> Vec<InfoField> {
        self.borrowed().info()
    }
}

impl From<Book> for StockItem {
    fn from(book: Book) -> Self {
        StockItem::Book(book)
    }
}

impl From<Magazine> for StockItem {
    fn from(magazine: Magazine) -> Self {
        StockItem::Magazine(magazine)
    }
}

/// A borrowed view of an inventory entry, as yielded by the ledger listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StockItemRef<'a> {
    Book(&'a Book),
    Magazine(&'a Magazine),
}

impl<'a> StockItemRef<'a> {
    pub fn kind(&self) -> StockKind {
        match self {
            StockItemRef::Book(_) => StockKind::Book,
            StockItemRef::Magazine(_) => StockKind::Magazine,
        }
    }

    pub fn publication(&self) -> &'a Publication {
        match self {
            StockItemRef::Book(book) => &book.publication,
            StockItemRef::Magazine(magazine) => &magazine.publication,
        }
    }

    /// The depletable count: copies for books, issue number for magazines.
    pub fn stock(&self) -> i64 {
        match self {
            StockItemRef::Book(book) => book.copies,
            StockItemRef::Magazine(magazine) => magazine.issue_number,
        }
    }

    /// The sale price before any discount.
    pub fn price(&self) -> Money {
        match self {
            StockItemRef::Book(book) => book.unit_price,
            StockItemRef::Magazine(magazine) => magazine.subscription_cost,
        }
    }

    pub fn info(&self) -> Vec<InfoField> {
        match self {
            StockItemRef::Book(book) => book.info(),
            StockItemRef::Magazine(magazine) => magazine.info(),
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer. Neither `id` nor `name` is required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
}

impl Customer {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Customer {
            id,
            name: name.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! Console output for the counter menu.
//!
//! Every report has a text form and a JSON form. Prompts and short notices
//! are always text.

use std::io::Write;

use serde::Serialize;
use serde_json::json;

use folio_core::{
    CashSnapshot, Customer, InfoField, IntakeCounts, IntakeOutcome, Money, SaleOutcome,
    StockItemRef, StockKind, StoreLedger,
};

use crate::config::OutputFormat;
use crate::error::CliError;

const SEPARATOR: &str = "----------------------";

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_fields<W: Write>(out: &mut W, fields: &[InfoField]) -> Result<(), CliError> {
    for field in fields {
        writeln!(out, "{}: {}", field.label, field.value)?;
    }
    Ok(())
}

/// Formats basis points as a percentage: `1000` → `10%`, `1250` → `12.5%`.
pub fn format_percentage(bps: u32) -> String {
    let whole = bps / 100;
    let frac = bps % 100;
    if frac == 0 {
        format!("{whole}%")
    } else if frac % 10 == 0 {
        format!("{whole}.{}%", frac / 10)
    } else {
        format!("{whole}.{frac:02}%")
    }
}

fn capitalized(kind: StockKind) -> &'static str {
    match kind {
        StockKind::Book => "Book",
        StockKind::Magazine => "Magazine",
    }
}

pub fn intake<W: Write>(
    out: &mut W,
    format: OutputFormat,
    kind: StockKind,
    outcome: IntakeOutcome,
    cost: Money,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        return write_json(out, &json!({ "kind": kind, "result": outcome, "cost": cost }));
    }

    let message = match (kind, outcome) {
        (StockKind::Book, IntakeOutcome::Added { .. }) => "Book added to inventory.",
        (StockKind::Book, IntakeOutcome::Merged { .. }) => {
            "Number of copies updated for existing book."
        }
        (StockKind::Magazine, IntakeOutcome::Added { .. }) => "Magazine added to inventory.",
        (StockKind::Magazine, IntakeOutcome::Merged { .. }) => {
            "Issue number updated for existing magazine."
        }
    };
    writeln!(out, "{message}")?;
    writeln!(out, "Money reduced for {kind} purchase: {cost}")?;
    Ok(())
}

pub fn sale<W: Write>(
    out: &mut W,
    format: OutputFormat,
    outcome: &SaleOutcome,
    discount_bps: u32,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        return write_json(out, outcome);
    }

    match outcome {
        SaleOutcome::Sold(receipt) => {
            writeln!(out, "{} sold to customer:", capitalized(receipt.kind))?;
            writeln!(out, "Title: {}", receipt.publication.title)?;
            writeln!(out, "Author: {}", receipt.publication.author)?;
            writeln!(out, "Publication Year: {}", receipt.publication.year)?;
            if receipt.loyalty {
                writeln!(
                    out,
                    "Customer Type: Old, {} discount",
                    format_percentage(discount_bps)
                )?;
                writeln!(out, "Discount Applied: {}", receipt.discount)?;
            } else {
                writeln!(out, "Customer Type: New")?;
            }
            writeln!(out, "Payment received: {}", receipt.final_price)?;
            writeln!(out, "Remaining stock: {}", receipt.remaining_stock)?;
        }
        SaleOutcome::OutOfStock { kind, .. } => {
            writeln!(out, "Sorry, the requested {kind} is out of stock.")?;
        }
        SaleOutcome::NotFound { kind, .. } => {
            writeln!(out, "Sorry, the requested {kind} is not in the inventory.")?;
        }
    }
    Ok(())
}

pub fn intake_counts<W: Write>(
    out: &mut W,
    format: OutputFormat,
    counts: IntakeCounts,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        return write_json(out, &counts);
    }
    writeln!(out, "Total Number of Books: {}", counts.books)?;
    writeln!(out, "Total Number of Magazines: {}", counts.magazines)?;
    Ok(())
}

pub fn inventory<W: Write>(
    out: &mut W,
    format: OutputFormat,
    ledger: &StoreLedger,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        let books: Vec<StockItemRef<'_>> = ledger.books().map(StockItemRef::Book).collect();
        let magazines: Vec<StockItemRef<'_>> =
            ledger.magazines().map(StockItemRef::Magazine).collect();
        return write_json(out, &json!({ "books": books, "magazines": magazines }));
    }

    writeln!(out, "Book Inventory:")?;
    for book in ledger.books() {
        write_fields(out, &book.info())?;
        writeln!(out, "{SEPARATOR}")?;
    }

    writeln!(out, "Magazine Inventory:")?;
    for magazine in ledger.magazines() {
        write_fields(out, &magazine.info())?;
        writeln!(out, "{SEPARATOR}")?;
    }
    Ok(())
}

pub fn cash<W: Write>(
    out: &mut W,
    format: OutputFormat,
    snapshot: CashSnapshot,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        return write_json(out, &snapshot);
    }
    writeln!(out, "Cashier Information:")?;
    writeln!(out, "Store Cash: {}", snapshot.store_cash)?;
    writeln!(out, "Money Paid by Customers: {}", snapshot.customer_payments)?;
    writeln!(out, "Total Money: {}", snapshot.total)?;
    Ok(())
}

pub fn customers<'a, W, I>(out: &mut W, format: OutputFormat, customers: I) -> Result<(), CliError>
where
    W: Write,
    I: Iterator<Item = &'a Customer>,
{
    if format == OutputFormat::Json {
        let all: Vec<&Customer> = customers.collect();
        return write_json(out, &all);
    }
    writeln!(out, "Registered Customers:")?;
    for customer in customers {
        writeln!(
            out,
            "Customer ID: {}, Customer Name: {}",
            customer.id, customer.name
        )?;
    }
    Ok(())
}

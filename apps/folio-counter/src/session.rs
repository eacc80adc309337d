//! # Counter Session
//!
//! The interactive menu loop. A session owns the ledger and the cash register
//! for the life of the process, reads one field per line from any `BufRead`
//! and writes prompts and reports to any `Write`.
//!
//! ```text
//! ┌──────────┐   choice   ┌──────────┐   fields   ┌────────────┐
//! │  input   │ ─────────► │ dispatch │ ─────────► │ StoreLedger│
//! └──────────┘            └────┬─────┘            └─────┬──────┘
//!                              │ outcome                │ &mut CashRegister
//!                              ▼                        ▼
//!                         ┌──────────┐           ┌────────────┐
//!                         │  render  │ ◄──────── │  snapshot  │
//!                         └──────────┘           └────────────┘
//! ```
//!
//! Bad input on any field is reported and the menu is shown again. The
//! session ends on choice 9, on end of input, or on an I/O failure.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info};

use folio_core::{
    Book, CashRegister, Customer, Magazine, Money, StockKind, StoreLedger,
};

use crate::config::AppConfig;
use crate::error::CliError;
use crate::render;

const MENU: &str = "\
Menu:
1. Enter details for a book
2. Enter details for a magazine
3. Show total number of books and magazines
4. Show inventory
5. Sell a book or magazine
6. Show cashier information
7. Register a customer
8. List registered customers
9. Exit";

/// What the loop does after handling a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    input: R,
    out: W,
    config: AppConfig,
    ledger: StoreLedger,
    register: CashRegister,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: AppConfig, input: R, out: W) -> Self {
        let (ledger, register) = StoreLedger::open(&config.ledger);
        Session {
            input,
            out,
            config,
            ledger,
            register,
        }
    }

    pub fn ledger(&self) -> &StoreLedger {
        &self.ledger
    }

    pub fn register(&self) -> &CashRegister {
        &self.register
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Runs the menu until the operator exits or input ends.
    pub fn run(&mut self) -> Result<(), CliError> {
        writeln!(self.out, "Welcome to {}", self.config.store_name)?;
        info!(store = %self.config.store_name, "Session started");

        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{MENU}")?;
            let choice = match self.prompt("Enter your choice: ") {
                Ok(choice) => choice,
                Err(CliError::EndOfInput) => break,
                Err(err) => return Err(err),
            };

            match self.dispatch(choice.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(CliError::EndOfInput) => break,
                Err(err) if err.is_recoverable() => {
                    debug!(error = %err, "Rejected input");
                    writeln!(self.out, "{err}")?;
                }
                Err(err) => return Err(err),
            }
        }

        writeln!(self.out, "Exiting the program. Goodbye!")?;
        self.out.flush()?;
        info!("Session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow, CliError> {
        debug!(choice, "Menu choice");
        match choice {
            "1" => self.book_intake()?,
            "2" => self.magazine_intake()?,
            "3" => render::intake_counts(
                &mut self.out,
                self.config.output,
                self.ledger.intake_counts(),
            )?,
            "4" => render::inventory(&mut self.out, self.config.output, &self.ledger)?,
            "5" => self.sell()?,
            "6" => render::cash(&mut self.out, self.config.output, self.register.snapshot())?,
            "7" => self.register_customer()?,
            "8" => render::customers(
                &mut self.out,
                self.config.output,
                self.ledger.list_customers(),
            )?,
            "9" => return Ok(Flow::Exit),
            _ => writeln!(self.out, "Invalid choice. Please enter a valid option.")?,
        }
        Ok(Flow::Continue)
    }

    // -------------------------------------------------------------------------
    // Menu actions
    // -------------------------------------------------------------------------

    fn book_intake(&mut self) -> Result<(), CliError> {
        let title = self.prompt("Enter book title: ")?;
        let author = self.prompt("Enter book author: ")?;
        let year: i32 = self.ask("Enter publication year: ", "publication year")?;
        let copies: i64 = self.ask("Enter number of copies: ", "number of copies")?;
        let price: Money = self.ask("Enter price per copy: ", "price per copy")?;

        let book = Book::new(title, author, year, copies, price);
        let cost = book.intake_cost()?;
        let outcome = self.ledger.add_book(&mut self.register, book)?;
        render::intake(&mut self.out, self.config.output, StockKind::Book, outcome, cost)
    }

    fn magazine_intake(&mut self) -> Result<(), CliError> {
        let title = self.prompt("Enter magazine title: ")?;
        let author = self.prompt("Enter magazine author: ")?;
        let year: i32 = self.ask("Enter publication year: ", "publication year")?;
        let issue: i64 = self.ask("Enter issue number: ", "issue number")?;
        let genre = self.prompt("Enter genre: ")?;
        let cost: Money = self.ask("Enter monthly subscription cost: ", "subscription cost")?;

        let magazine = Magazine::new(title, author, year, issue, genre, cost);
        let outcome = self.ledger.add_magazine(&mut self.register, magazine)?;
        render::intake(&mut self.out, self.config.output, StockKind::Magazine, outcome, cost)
    }

    fn sell(&mut self) -> Result<(), CliError> {
        let kind = self.prompt(
            "Is the customer buying a book or a magazine? (Enter 'b' for book, 'm' for magazine): ",
        )?;
        let kind = match kind.trim() {
            "b" | "B" => StockKind::Book,
            "m" | "M" => StockKind::Magazine,
            _ => {
                writeln!(self.out, "Invalid publication type.")?;
                return Ok(());
            }
        };

        let customer =
            self.prompt("Is the customer old or new? (Enter 'o' for old, 'n' for new): ")?;
        let loyalty = match customer.trim() {
            "o" | "O" => true,
            "n" | "N" => false,
            _ => {
                writeln!(self.out, "Invalid customer type. Assuming the customer is new.")?;
                false
            }
        };

        let title = self.prompt(&format!("Enter {kind} title: "))?;
        let year: i32 = self.ask("Enter publication year: ", "publication year")?;

        let outcome = self
            .ledger
            .sell(&mut self.register, kind, &title, year, loyalty)?;
        render::sale(
            &mut self.out,
            self.config.output,
            &outcome,
            self.ledger.loyalty_discount_bps(),
        )
    }

    fn register_customer(&mut self) -> Result<(), CliError> {
        let id: i64 = self.ask("Enter customer ID: ", "customer ID")?;
        let name = self.prompt("Enter customer name: ")?;
        self.ledger.register_customer(Customer::new(id, name));
        writeln!(self.out, "Customer registered successfully.")?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Writes `label` and reads one line without its line terminator.
    fn prompt(&mut self, label: &str) -> Result<String, CliError> {
        write!(self.out, "{label}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput);
        }
        let trimmed = line.trim_end_matches(|c| c == '\n' || c == '\r');
        Ok(trimmed.to_string())
    }

    fn ask<T>(&mut self, label: &str, field: &str) -> Result<T, CliError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.prompt(label)?;
        raw.trim()
            .parse::<T>()
            .map_err(|e| CliError::invalid_input(field, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(
            AppConfig::default(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    fn output(session: &Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.output().clone()).unwrap()
    }

    #[test]
    fn test_exit_choice_ends_session() {
        let mut s = session("9\n3\n");
        s.run().unwrap();
        let out = output(&s);
        assert!(out.starts_with("Welcome to Folio Books & Magazines"));
        assert!(out.ends_with("Exiting the program. Goodbye!\n"));
        assert!(!out.contains("Total Number of Books"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let mut s = session("3\n");
        s.run().unwrap();
        assert!(output(&s).contains("Total Number of Books: 0"));
    }

    #[test]
    fn test_end_of_input_mid_form_ends_session() {
        let mut s = session("1\nDune\nHerbert\n");
        s.run().unwrap();
        assert_eq!(s.ledger().books().count(), 0);
    }

    #[test]
    fn test_invalid_choice_keeps_running() {
        let mut s = session("42\n3\n9\n");
        s.run().unwrap();
        let out = output(&s);
        assert!(out.contains("Invalid choice. Please enter a valid option."));
        assert!(out.contains("Total Number of Books: 0"));
    }

    #[test]
    fn test_bad_number_is_reported_and_nothing_changes() {
        let mut s = session("1\nDune\nHerbert\nnineteen\n9\n");
        s.run().unwrap();
        assert!(output(&s).contains("Invalid publication year"));
        assert_eq!(s.ledger().books().count(), 0);
        assert_eq!(s.register().store_cash().cents(), 100_000);
    }

    #[test]
    fn test_windows_line_endings() {
        let mut s = session("7\r\n3\r\nAda\r\n9\r\n");
        s.run().unwrap();
        let customers: Vec<_> = s.ledger().list_customers().collect();
        assert_eq!(customers, vec![&Customer::new(3, "Ada")]);
    }
}

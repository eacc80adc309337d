use std::io::Cursor;

use folio_core::{IntakePolicy, Money};
use folio_counter::{AppConfig, OutputFormat, Session};

fn run_session(
    config: AppConfig,
    lines: &[&str],
) -> (Session<Cursor<Vec<u8>>, Vec<u8>>, String) {
    let mut input = lines.join("\n");
    input.push('\n');
    let mut session = Session::new(config, Cursor::new(input.into_bytes()), Vec::new());
    session.run().unwrap();
    let output = String::from_utf8(session.output().clone()).unwrap();
    (session, output)
}

#[test]
fn full_counter_session() {
    let (session, output) = run_session(
        AppConfig::default(),
        &[
            "1", "Dune", "Herbert", "1965", "5", "10.00",
            "2", "Wired", "Conde", "2001", "12", "Tech", "5.99",
            "1", "Dune", "Herbert", "1965", "2", "10",
            "7", "1", "Ada",
            "5", "b", "o", "Dune", "1965",
            "5", "m", "n", "Wired", "2001",
            "5", "b", "x", "Dune", "1965",
            "3", "4", "6", "8", "9",
        ],
    );

    assert!(output.contains("Book added to inventory."));
    assert!(output.contains("Magazine added to inventory."));
    assert!(output.contains("Number of copies updated for existing book."));
    assert!(output.contains("Money reduced for book purchase: $50.00"));
    assert!(output.contains("Money reduced for magazine purchase: $5.99"));
    assert!(output.contains("Customer registered successfully."));
    assert!(output.contains("Customer Type: Old, 10% discount"));
    assert!(output.contains("Discount Applied: $1.00"));
    assert!(output.contains("Payment received: $9.00"));
    assert!(output.contains("Invalid customer type. Assuming the customer is new."));
    assert!(output.contains("Total Number of Books: 2"));
    assert!(output.contains("Total Number of Magazines: 1"));
    assert!(output.contains("Number of Copies: 5"));
    assert!(output.contains("Issue Number: 11"));
    assert!(output.contains("Customer ID: 1, Customer Name: Ada"));

    // 1000 - 50 - 5.99 - 20 = 924.01 store cash, 9 + 5.99 + 10 paid in
    let cash = session.register().snapshot();
    assert_eq!(cash.store_cash, Money::from_cents(92_401));
    assert_eq!(cash.customer_payments, Money::from_cents(2_499));
    assert!(output.contains("Store Cash: $924.01"));
    assert!(output.contains("Money Paid by Customers: $24.99"));
    assert!(output.contains("Total Money: $949.00"));
}

#[test]
fn sale_of_missing_and_sold_out_items() {
    let (session, output) = run_session(
        AppConfig::default(),
        &[
            "1", "Emma", "Austen", "1815", "1", "8",
            "5", "b", "n", "Emma", "1815",
            "5", "b", "n", "Emma", "1815",
            "5", "m", "n", "Emma", "1815",
            "5", "q",
            "9",
        ],
    );

    assert!(output.contains("Sorry, the requested book is out of stock."));
    assert!(output.contains("Sorry, the requested magazine is not in the inventory."));
    assert!(output.contains("Invalid publication type."));
    assert_eq!(session.register().customer_payments(), Money::from_cents(800));
    assert_eq!(session.ledger().books().next().unwrap().copies, 0);
}

#[test]
fn strict_policy_rejects_bad_intake_and_keeps_running() {
    let mut config = AppConfig::default();
    config.ledger.intake_policy = IntakePolicy::Strict;

    let (session, output) = run_session(
        config,
        &[
            "1", "Dune", "Herbert", "1965", "5", "-10",
            "1", "Dune", "Herbert", "1965", "5", "10",
            "3",
            "9",
        ],
    );

    assert!(output.contains("Validation error"));
    assert!(output.contains("Total Number of Books: 1"));
    assert_eq!(session.register().store_cash(), Money::from_cents(95_000));
}

#[test]
fn overflowing_intake_is_reported_and_changes_nothing() {
    let (session, output) = run_session(
        AppConfig::default(),
        &[
            "1", "Dune", "Herbert", "1965", "100000000000000000", "1",
            "2", "Wired", "Conde", "2001", "9223372036854775807", "Tech", "5",
            "2", "Wired", "Conde", "2001", "1", "Tech", "5",
            "3",
            "9",
        ],
    );

    assert_eq!(output.matches("Validation error").count(), 2);
    assert!(output.contains("Total Number of Books: 0"));
    assert!(output.contains("Total Number of Magazines: 1"));
    assert_eq!(session.ledger().books().count(), 0);
    assert_eq!(session.ledger().magazines().next().unwrap().issue_number, i64::MAX);
    assert_eq!(session.register().store_cash(), Money::from_cents(99_500));
    assert_eq!(session.register().movements().len(), 1);
}

#[test]
fn permissive_policy_accepts_negative_price() {
    let (session, _) = run_session(
        AppConfig::default(),
        &["1", "Dune", "Herbert", "1965", "2", "-5", "9"],
    );
    // negative intake cost credits the store
    assert_eq!(session.register().store_cash(), Money::from_cents(101_000));
}

#[test]
fn json_output_for_reports() {
    let mut config = AppConfig::default();
    config.output = OutputFormat::Json;

    let (_, output) = run_session(config, &["6", "9"]);

    let start = output.find('{').unwrap();
    let end = output.find('}').unwrap();
    let value: serde_json::Value = serde_json::from_str(&output[start..=end]).unwrap();
    assert_eq!(value["store_cash"], 100_000);
    assert_eq!(value["customer_payments"], 0);
    assert_eq!(value["total"], 100_000);
}

#[test]
fn opening_cash_comes_from_config() {
    let mut config = AppConfig::default();
    config.ledger.opening_cash = Money::from_cents(5_000);
    config.store_name = "Corner Books".to_string();

    let (_, output) = run_session(config, &["6", "9"]);
    assert!(output.starts_with("Welcome to Corner Books"));
    assert!(output.contains("Store Cash: $50.00"));
}

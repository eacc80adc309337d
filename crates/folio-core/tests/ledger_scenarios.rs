use folio_core::{
    Book, CoreError, Customer, IntakeOutcome, LedgerConfig, Magazine, Money, SaleOutcome,
    StockItemRef, StockKind, StoreLedger,
};

fn dune(author: &str, copies: i64) -> Book {
    Book::new("Dune", author, 1965, copies, Money::from_cents(1000))
}

#[test]
fn intake_with_different_author_creates_separate_entry() {
    let (mut ledger, mut register) = StoreLedger::open(&LedgerConfig::default());

    let first = ledger.add_book(&mut register, dune("Herbert", 5)).unwrap();
    let second = ledger.add_book(&mut register, dune("Other", 3)).unwrap();

    assert_eq!(first, IntakeOutcome::Added { stock: 5 });
    assert_eq!(second, IntakeOutcome::Added { stock: 3 });

    let books: Vec<_> = ledger.books().collect();
    assert_eq!(books.len(), 2);
    assert_eq!(books.iter().map(|b| b.copies).sum::<i64>(), 8);
}

#[test]
fn sale_ignores_author_and_takes_first_inserted_match() {
    let (mut ledger, mut register) = StoreLedger::open(&LedgerConfig::default());
    ledger.add_book(&mut register, dune("Herbert", 5)).unwrap();
    ledger.add_book(&mut register, dune("Other", 3)).unwrap();

    let outcome = ledger.sell_book(&mut register, "Dune", 1965, false).unwrap();
    let receipt = outcome.into_result().unwrap();
    assert_eq!(receipt.publication.author, "Herbert");

    let copies: Vec<_> = ledger
        .books()
        .map(|b| (b.publication.author.as_str(), b.copies))
        .collect();
    assert_eq!(copies, vec![("Herbert", 4), ("Other", 3)]);
}

#[test]
fn magazine_intake_and_sale_follow_the_same_matching_rules() {
    let (mut ledger, mut register) = StoreLedger::open(&LedgerConfig::default());
    let wired = |author: &str, issues| {
        Magazine::new("Wired", author, 2001, issues, "Tech", Money::from_cents(500))
    };

    let first = ledger.add_magazine(&mut register, wired("Conde", 4)).unwrap();
    let second = ledger.add_magazine(&mut register, wired("Other", 7)).unwrap();
    assert_eq!(first, IntakeOutcome::Added { stock: 4 });
    assert_eq!(second, IntakeOutcome::Added { stock: 7 });
    assert_eq!(ledger.magazines().count(), 2);

    let outcome = ledger.sell_magazine(&mut register, "Wired", 2001, false).unwrap();
    let receipt = outcome.into_result().unwrap();
    assert_eq!(receipt.publication.author, "Conde");

    let issues: Vec<_> = ledger
        .magazines()
        .map(|m| (m.publication.author.as_str(), m.issue_number))
        .collect();
    assert_eq!(issues, vec![("Conde", 3), ("Other", 7)]);
}

#[test]
fn first_match_blocks_later_entries_when_sold_out() {
    let (mut ledger, mut register) = StoreLedger::open(&LedgerConfig::default());
    ledger.add_book(&mut register, dune("Herbert", 0)).unwrap();
    ledger.add_book(&mut register, dune("Other", 3)).unwrap();

    let outcome = ledger.sell_book(&mut register, "Dune", 1965, false).unwrap();
    assert!(matches!(outcome, SaleOutcome::OutOfStock { .. }));
    assert_eq!(ledger.books().nth(1).unwrap().copies, 3);
}

#[test]
fn unknown_title_is_not_found_and_changes_nothing() {
    let (mut ledger, mut register) = StoreLedger::open(&LedgerConfig::default());
    ledger.add_book(&mut register, dune("Herbert", 2)).unwrap();

    let books_before: Vec<Book> = ledger.books().cloned().collect();
    let cash_before = register.snapshot();
    let journal_before = register.movements().len();

    let outcome = ledger.sell_book(&mut register, "Unknown", 1900, false).unwrap();

    assert_eq!(
        outcome,
        SaleOutcome::NotFound {
            kind: StockKind::Book,
            title: "Unknown".to_string(),
            year: 1900,
        }
    );
    assert_eq!(ledger.books().cloned().collect::<Vec<_>>(), books_before);
    assert_eq!(register.snapshot(), cash_before);
    assert_eq!(register.movements().len(), journal_before);
}

#[test]
fn wrong_year_is_not_found() {
    let (mut ledger, mut register) = StoreLedger::open(&LedgerConfig::default());
    ledger.add_book(&mut register, dune("Herbert", 2)).unwrap();

    let outcome = ledger.sell_book(&mut register, "Dune", 1966, true).unwrap();
    let err = outcome.into_result().unwrap_err();
    assert!(matches!(err, CoreError::ItemNotFound { year: 1966, .. }));
}

#[test]
fn intake_sale_and_cash_report_session() {
    let (mut ledger, mut register) = StoreLedger::open(&LedgerConfig::default());

    ledger.add_book(&mut register, dune("Herbert", 5)).unwrap();
    ledger
        .add_magazine(
            &mut register,
            Magazine::new("Wired", "Conde", 2001, 12, "Tech", Money::from_cents(599)),
        )
        .unwrap();
    ledger.register_customer(Customer::new(1, "Ada"));

    ledger.sell_book(&mut register, "Dune", 1965, true).unwrap().into_result().unwrap();
    ledger.sell_magazine(&mut register, "Wired", 2001, false).unwrap().into_result().unwrap();

    let cash = register.snapshot();
    assert_eq!(cash.store_cash.cents(), 100_000 - 5000 - 599);
    assert_eq!(cash.customer_payments.cents(), 900 + 599);
    assert_eq!(cash.total.cents(), 100_000 - 5000 - 599 + 900 + 599);

    let listing: Vec<_> = ledger.inventory().collect();
    assert!(matches!(listing[0], StockItemRef::Book(b) if b.copies == 4));
    assert!(matches!(listing[1], StockItemRef::Magazine(m) if m.issue_number == 11));

    assert_eq!(ledger.list_customers().count(), 1);
    assert_eq!(ledger.intake_counts().books, 1);
    assert_eq!(ledger.intake_counts().magazines, 1);
}

#[test]
fn receipts_and_listings_serialize_to_json() {
    let (mut ledger, mut register) = StoreLedger::open(&LedgerConfig::default());
    ledger.add_book(&mut register, dune("Herbert", 1)).unwrap();

    let listing: Vec<_> = ledger.inventory().collect();
    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json[0]["kind"], "book");
    assert_eq!(json[0]["title"], "Dune");
    assert_eq!(json[0]["copies"], 1);
    assert_eq!(json[0]["unit_price"], 1000);

    let outcome = ledger.sell_book(&mut register, "Dune", 1965, true).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["outcome"], "sold");
    assert_eq!(json["final_price"], 900);
    assert_eq!(json["discount"], 100);

    let json = serde_json::to_value(register.snapshot()).unwrap();
    assert_eq!(json["total"], 100_000 - 1000 + 900);
}

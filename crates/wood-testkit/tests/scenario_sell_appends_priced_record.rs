//! Scenario: Sell Wood through the console
//!
//! # Invariants under test
//!
//! 1. Empty ledger -> sell 600 / 2 / 1.5 -> exactly one record, price 18000.
//! 2. A blank field reports the missing-field message, keeps the form open,
//!    and a corrected retry records exactly one sale.
//! 3. `:close` abandons the form without touching the ledger.

use wood_ledger::OrderRecord;
use wood_testkit::run_script;

#[test]
fn reference_sale_lands_in_the_ledger() {
    let t = run_script(&["sell", "600", "2", "1.5", "q"]).unwrap();

    assert_eq!(
        t.ledger.records(),
        &[OrderRecord {
            density: 600.0,
            length: 2.0,
            width: 1.5,
            price: 18_000.0,
        }]
    );
    assert_eq!(t.notices(), vec!["[Success] The price of wood is $18000.00."]);
}

#[test]
fn blank_then_corrected_records_once() {
    let t = run_script(&["sell", "600", "", "1.5", "600", "2", "1.5", "q"]).unwrap();

    assert_eq!(
        t.notices(),
        vec![
            "[Error] Please enter all dimensions and density.",
            "[Success] The price of wood is $18000.00.",
        ]
    );
    assert_eq!(t.ledger.len(), 1);
}

#[test]
fn non_numeric_is_reported_and_not_recorded() {
    let t = run_script(&["sell", "six hundred", "2", "1.5", ":close", "q"]).unwrap();

    assert_eq!(
        t.notices(),
        vec!["[Error] Invalid input. Please enter valid numbers."]
    );
    assert!(t.ledger.is_empty());
}

#[test]
fn each_sale_needs_a_new_form() {
    let t = run_script(&["sell", "500", "1", "1", "sell", "600", "2", "1.5", "q"]).unwrap();
    assert_eq!(t.ledger.len(), 2);
    assert_eq!(t.ledger.get(0).unwrap().price, 5_000.0);
    assert_eq!(t.ledger.get(1).unwrap().price, 18_000.0);
}

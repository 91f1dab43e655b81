//! Scenario: the shell lends one ledger to every dialog
//!
//! Sales made in one Sell Wood form are visible to the next viewer, and
//! viewer edits are visible to the shell afterwards.

use wood_config::AppConfig;
use wood_forms::ViewerState;
use wood_ledger::Field;
use wood_shell::AppShell;
use wood_testkit::{ledger_of, record};

#[test]
fn sell_then_view_then_edit() {
    let mut shell = AppShell::new(AppConfig::default());

    let receipt = shell.sell_wood().submit("600", "2", "1.5").unwrap();
    assert_eq!(receipt.record, record(600.0, 2.0, 1.5));

    {
        let mut viewer = shell.view_orders();
        assert_eq!(viewer.state(), ViewerState::NoSelection);
        assert_eq!(viewer.list().count(), 1);

        viewer.select(0).unwrap();
        viewer.begin_edit().unwrap();
        viewer.set_slot(Field::Width, "3");
        viewer.save_edit().unwrap();
    }

    let r = shell.ledger().get(0).unwrap();
    assert_eq!(r.width, 3.0);
    assert_eq!(r.price, 18_000.0);
}

#[test]
fn a_new_viewer_starts_without_selection() {
    let mut shell = AppShell::with_ledger(AppConfig::default(), ledger_of(&[(500.0, 1.0, 1.0)]));
    shell.view_orders().select(0).unwrap();
    assert_eq!(shell.view_orders().selection(), None);
}

#[test]
fn snapshot_reports_stored_prices() {
    let mut shell = AppShell::with_ledger(
        AppConfig::default(),
        ledger_of(&[(500.0, 1.0, 1.0), (600.0, 2.0, 1.5)]),
    );
    let snap = shell.ledger().snapshot();
    assert_eq!(snap.len(), 2);
    assert!((snap.total_price - 23_000.0).abs() < 1e-9);

    shell.view_orders().select(1).unwrap();
    let mut viewer = shell.view_orders();
    viewer.select(1).unwrap();
    viewer.delete().unwrap();
    drop(viewer);
    assert_eq!(shell.ledger().snapshot().len(), 1);
}

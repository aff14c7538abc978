use std::sync::Arc;

use crate::receipts::{Folio, ReceiptLedger, SaveOutcome};
use crate::store::{keys, InMemoryStore, KeyValueStore};

use super::common::{date, ledger, receipt, PARISH};

#[test]
fn new_folio_is_appended() {
    let ledger = ledger();

    let outcome = ledger.save(receipt("A-001", 500.0)).expect("save folio");

    assert_eq!(outcome, SaveOutcome::Created(Folio("A-001".to_string())));
    assert!(outcome.accepted());
    assert_eq!(outcome.message(), "Recibo guardado exitosamente.");

    let stored = ledger.list().expect("list folios");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].folio.0, "A-001");
}

#[test]
fn pending_folio_updates_in_place() {
    let ledger = ledger();
    ledger.save(receipt("A-001", 500.0)).expect("first folio");
    ledger.save(receipt("A-002", 200.0)).expect("second folio");

    let mut revised = receipt("A-001", 0.0);
    revised.amount_paid = 2000.0;
    let outcome = ledger.save(revised).expect("update folio");

    assert_eq!(outcome, SaveOutcome::Updated(Folio("A-001".to_string())));
    assert_eq!(outcome.message(), "Recibo A-001 actualizado.");

    let stored = ledger.list().expect("list folios");
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].folio.0, "A-001", "update keeps ledger position");
    assert_eq!(stored[0].amount_paid, 2000.0);
    assert_eq!(stored[1].folio.0, "A-002");
}

#[test]
fn update_reaches_storage() {
    let store = Arc::new(InMemoryStore::new());
    let ledger = ReceiptLedger::new(store.clone(), PARISH);
    ledger.save(receipt("A-001", 500.0)).expect("first save");

    let mut revised = receipt("A-001", 100.0);
    revised.person_name = "María López".to_string();
    ledger.save(revised).expect("update folio");

    let rereader = ReceiptLedger::new(store, PARISH);
    let stored = rereader
        .find(&Folio("A-001".to_string()))
        .expect("find folio")
        .expect("folio present");
    assert_eq!(stored.person_name, "María López");
    assert_eq!(stored.amount_remaining, 100.0);
}

#[test]
fn settled_folio_refuses_changes() {
    let ledger = ledger();
    ledger.save(receipt("A-001", 0.0)).expect("settled folio");

    let mut revised = receipt("A-001", 300.0);
    revised.person_name = "Otro Nombre".to_string();
    let outcome = ledger.save(revised).expect("attempted rewrite");

    assert_eq!(
        outcome,
        SaveOutcome::AlreadySettled(Folio("A-001".to_string()))
    );
    assert!(!outcome.accepted());
    assert_eq!(
        outcome.message(),
        "El folio A-001 ya existe y está liquidado."
    );

    let stored = ledger
        .find(&Folio("A-001".to_string()))
        .expect("find folio")
        .expect("folio present");
    assert_eq!(stored.person_name, "Juan Pérez", "original entry untouched");
}

#[test]
fn capture_order_is_preserved() {
    let ledger = ledger();
    for folio in ["C-003", "A-001", "B-002"] {
        ledger.save(receipt(folio, 100.0)).expect("save folio");
    }

    let stored = ledger.list().expect("list folios");
    let order: Vec<&str> = stored.iter().map(|r| r.folio.0.as_str()).collect();
    assert_eq!(order, ["C-003", "A-001", "B-002"]);
}

#[test]
fn unknown_folio_is_none() {
    let ledger = ledger();
    ledger.save(receipt("A-001", 0.0)).expect("save folio");

    let found = ledger
        .find(&Folio("Z-999".to_string()))
        .expect("find folio");
    assert!(found.is_none());
}

#[test]
fn parishes_keep_separate_ledgers() {
    let store = Arc::new(InMemoryStore::new());
    let first = ReceiptLedger::new(store.clone(), "Parroquia Norte");
    let second = ReceiptLedger::new(store, "Parroquia Sur");

    first.save(receipt("A-001", 0.0)).expect("save folio");

    assert_eq!(first.list().expect("first ledger").len(), 1);
    assert!(second.list().expect("second ledger").is_empty());
}

#[test]
fn stored_entries_keep_legacy_field_names() {
    let store = Arc::new(InMemoryStore::new());
    let ledger = ReceiptLedger::new(store.clone(), PARISH);
    let mut entry = receipt("A-001", 250.0);
    entry.date = date(2024, 5, 1);
    ledger.save(entry).expect("save folio");

    let raw = store
        .get(&keys::receipts_key(PARISH))
        .expect("read partition")
        .expect("partition present");
    assert!(raw.contains("\"id\":\"A-001\""));
    assert!(raw.contains("\"personName\":\"Juan Pérez\""));
    assert!(raw.contains("\"amountRemaining\":250.0"));
    assert!(raw.contains("\"date\":\"2024-05-01\""));
}

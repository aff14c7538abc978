use std::sync::Arc;

use chrono::NaiveDate;

use crate::receipts::{Folio, Receipt, ReceiptLedger};
use crate::store::InMemoryStore;

pub(super) const PARISH: &str = "Parroquia San Isidro Labrador";

pub(super) fn ledger() -> ReceiptLedger<InMemoryStore> {
    ReceiptLedger::new(Arc::new(InMemoryStore::new()), PARISH)
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn receipt(folio: &str, remaining: f64) -> Receipt {
    Receipt {
        folio: Folio(folio.to_string()),
        person_name: "Juan Pérez".to_string(),
        celebration: "Boda".to_string(),
        date: date(2024, 3, 14),
        time: "12:00 PM".to_string(),
        location: "Templo principal".to_string(),
        amount_paid: 1500.0,
        amount_remaining: remaining,
        parish: PARISH.to_string(),
    }
}

pub(super) fn named_receipt(folio: &str, person: &str, celebration: &str) -> Receipt {
    Receipt {
        person_name: person.to_string(),
        celebration: celebration.to_string(),
        ..receipt(folio, 0.0)
    }
}

//! Receipt ledger for celebration payments.
//!
//! Folios are issued per parish. A folio whose remaining balance reaches zero
//! is settled and the ledger refuses any further write under that folio.

mod domain;
mod service;

#[cfg(test)]
mod tests;

pub use domain::{Folio, Receipt, ReceiptField, SaveOutcome, SortDirection};
pub use service::ReceiptLedger;

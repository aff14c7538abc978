use std::sync::Arc;

use crate::store::{keys, read_collection, write_collection, KeyValueStore, StoreError};

use super::domain::{Folio, Receipt, ReceiptField, SaveOutcome, SortDirection};

/// Per-parish folio ledger over one storage partition.
pub struct ReceiptLedger<S> {
    store: Arc<S>,
    parish: String,
}

impl<S: KeyValueStore> ReceiptLedger<S> {
    pub fn new(store: Arc<S>, parish: impl Into<String>) -> Self {
        Self {
            store,
            parish: parish.into(),
        }
    }

    pub fn parish(&self) -> &str {
        &self.parish
    }

    fn partition(&self) -> String {
        keys::receipts_key(&self.parish)
    }

    /// Every folio in capture order.
    pub fn list(&self) -> Result<Vec<Receipt>, StoreError> {
        read_collection(self.store.as_ref(), &self.partition())
    }

    /// Look up a folio by its exact identifier.
    pub fn find(&self, folio: &Folio) -> Result<Option<Receipt>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|receipt| &receipt.folio == folio))
    }

    /// Write a folio. New folios append, pending folios update in place, and
    /// settled folios leave the partition untouched.
    pub fn save(&self, receipt: Receipt) -> Result<SaveOutcome, StoreError> {
        let mut receipts = self.list()?;

        let outcome = match receipts
            .iter()
            .position(|existing| existing.folio == receipt.folio)
        {
            Some(index) => {
                if receipts[index].is_settled() {
                    return Ok(SaveOutcome::AlreadySettled(receipt.folio));
                }
                let folio = receipt.folio.clone();
                receipts[index] = receipt;
                SaveOutcome::Updated(folio)
            }
            None => {
                let folio = receipt.folio.clone();
                receipts.push(receipt);
                SaveOutcome::Created(folio)
            }
        };

        write_collection(self.store.as_ref(), &self.partition(), &receipts)?;
        Ok(outcome)
    }

    /// Case-insensitive substring filter over one column. An empty term
    /// returns the whole ledger.
    pub fn search(&self, field: ReceiptField, term: &str) -> Result<Vec<Receipt>, StoreError> {
        let receipts = self.list()?;
        if term.is_empty() {
            return Ok(receipts);
        }
        let needle = term.to_lowercase();
        Ok(receipts
            .into_iter()
            .filter(|receipt| receipt.field_text(field).to_lowercase().contains(&needle))
            .collect())
    }

    /// Stable sort of the whole ledger by one column.
    pub fn sorted(
        &self,
        field: ReceiptField,
        direction: SortDirection,
    ) -> Result<Vec<Receipt>, StoreError> {
        let mut receipts = self.list()?;
        receipts.sort_by(|a, b| {
            let ordering = a.compare_by(b, field);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        Ok(receipts)
    }
}

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::store::{keys, read_collection, write_collection, KeyValueStore, StoreError};

use super::domain::{Intention, IntentionDraft, MassSlot, MassTime};

/// Per-parish append-only intention register.
pub struct IntentionRegister<S> {
    store: Arc<S>,
    parish: String,
}

impl<S: KeyValueStore> IntentionRegister<S> {
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
        keys::intentions_key(&self.parish)
    }

    /// Every intention in registration order.
    pub fn list(&self) -> Result<Vec<Intention>, StoreError> {
        read_collection(self.store.as_ref(), &self.partition())
    }

    /// Append one intention. Identifiers are time-ordered UUIDs, so two
    /// registrations in the same millisecond still get distinct ids.
    pub fn register(&self, draft: IntentionDraft) -> Result<Intention, StoreError> {
        let intention = Intention {
            id: Uuid::now_v7().to_string(),
            person_name: draft.person_name,
            kind: draft.kind,
            time: draft.time,
            amount_paid: draft.amount_paid,
            date: draft.date,
            parish: self.parish.clone(),
        };

        let mut intentions = self.list()?;
        intentions.push(intention.clone());
        write_collection(self.store.as_ref(), &self.partition(), &intentions)?;
        Ok(intention)
    }

    /// Intentions for one mass slot on one day.
    pub fn slot(&self, date: NaiveDate, time: MassTime) -> Result<MassSlot, StoreError> {
        let intentions = self
            .list()?
            .into_iter()
            .filter(|intention| intention.date == date && intention.time == time)
            .collect();
        Ok(MassSlot {
            date,
            time,
            intentions,
        })
    }

    /// Both mass slots for one day, morning first.
    pub fn day_schedule(&self, date: NaiveDate) -> Result<Vec<MassSlot>, StoreError> {
        let intentions = self.list()?;
        Ok(MassTime::ALL
            .into_iter()
            .map(|time| MassSlot {
                date,
                time,
                intentions: intentions
                    .iter()
                    .filter(|intention| intention.date == date && intention.time == time)
                    .cloned()
                    .collect(),
            })
            .collect())
    }
}

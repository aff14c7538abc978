//! Mass intention register.
//!
//! Intentions are append-only: entries are never edited or removed once
//! written. Each mass slot advertises room for twenty intentions, but the
//! ceiling is advisory and the register keeps accepting entries past it.

mod domain;
mod service;

pub use domain::{
    Intention, IntentionDraft, IntentionType, MassSlot, MassTime, SLOT_CAPACITY,
};
pub use service::IntentionRegister;

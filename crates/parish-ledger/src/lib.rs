//! Core services for parish administration.
//!
//! The crate is organized around a small key-value storage port ([`store`])
//! that every ledger shares: the user directory, the receipt ledger, and the
//! mass intention register each own one JSON partition per parish. Reporting
//! and export modules consume those records without touching storage
//! themselves, so they can run against any snapshot of the data.

pub mod config;
pub mod directory;
pub mod error;
pub mod export;
pub mod intentions;
pub mod receipts;
pub mod reports;
pub mod store;
pub mod telemetry;

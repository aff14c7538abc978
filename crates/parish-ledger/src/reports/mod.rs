//! Report aggregation over ledger records.
//!
//! Aggregators work on slices the caller already loaded, so reporting never
//! goes back to storage on its own.

mod dashboard;
mod range;
mod summary;

pub use dashboard::DashboardSummary;
pub use range::{ReportKind, ReportRange};
pub use summary::{CelebrationReport, CelebrationTotal};

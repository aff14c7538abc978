use crate::intentions::Intention;
use crate::receipts::Receipt;

/// Headline figures for the landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_paid: f64,
    pub total_remaining: f64,
    pub settled_receipts: usize,
    pub total_receipts: usize,
    pub total_intentions: usize,
    /// Last five folios captured, newest first.
    pub recent: Vec<Receipt>,
}

impl DashboardSummary {
    pub fn build(receipts: &[Receipt], intentions: &[Intention]) -> Self {
        Self {
            total_paid: receipts.iter().map(|r| r.amount_paid).sum(),
            total_remaining: receipts.iter().map(|r| r.amount_remaining).sum(),
            settled_receipts: receipts.iter().filter(|r| r.is_settled()).count(),
            total_receipts: receipts.len(),
            total_intentions: intentions.len(),
            recent: receipts.iter().rev().take(5).cloned().collect(),
        }
    }
}

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::receipts::Receipt;

use super::range::{ReportKind, ReportRange};

/// Collected totals for one celebration type.
#[derive(Debug, Clone, PartialEq)]
pub struct CelebrationTotal {
    pub celebration: String,
    pub count: usize,
    pub total_paid: f64,
}

/// Aggregated financial report over one period.
#[derive(Debug, Clone, PartialEq)]
pub struct CelebrationReport {
    pub kind: ReportKind,
    pub parish: String,
    pub range: ReportRange,
    pub totals: Vec<CelebrationTotal>,
    pub receipts: Vec<Receipt>,
    pub grand_total: f64,
}

impl CelebrationReport {
    /// Aggregate the folios that fall inside the period.
    ///
    /// Celebrations appear in the order they are first seen, which matches
    /// the ledger's capture order.
    pub fn build(kind: ReportKind, parish: &str, anchor: NaiveDate, receipts: &[Receipt]) -> Self {
        let range = ReportRange::for_kind(kind, anchor);
        let selected: Vec<Receipt> = receipts
            .iter()
            .filter(|receipt| range.contains(receipt.date))
            .cloned()
            .collect();

        let mut totals: Vec<CelebrationTotal> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut grand_total = 0.0;
        for receipt in &selected {
            let slot = *slots
                .entry(receipt.celebration.clone())
                .or_insert_with(|| {
                    totals.push(CelebrationTotal {
                        celebration: receipt.celebration.clone(),
                        count: 0,
                        total_paid: 0.0,
                    });
                    totals.len() - 1
                });
            totals[slot].count += 1;
            totals[slot].total_paid += receipt.amount_paid;
            grand_total += receipt.amount_paid;
        }

        Self {
            kind,
            parish: parish.to_string(),
            range,
            totals,
            receipts: selected,
            grand_total,
        }
    }

    /// No folios fell inside the period.
    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::receipts::{Folio, Receipt};

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn receipt(folio: &str, celebration: &str, day: NaiveDate, paid: f64) -> Receipt {
        Receipt {
            folio: Folio(folio.to_string()),
            person_name: "Juan Pérez".to_string(),
            celebration: celebration.to_string(),
            date: day,
            time: "12:00 PM".to_string(),
            location: "Templo principal".to_string(),
            amount_paid: paid,
            amount_remaining: 0.0,
            parish: "Parroquia San Isidro Labrador".to_string(),
        }
    }

    #[test]
    fn groups_by_celebration_in_first_seen_order() {
        let receipts = vec![
            receipt("A-001", "Boda", date(2024, 3, 11), 1500.0),
            receipt("A-002", "Bautizo", date(2024, 3, 12), 300.0),
            receipt("A-003", "Boda", date(2024, 3, 13), 500.0),
        ];

        let report = CelebrationReport::build(
            ReportKind::Weekly,
            "Parroquia San Isidro Labrador",
            date(2024, 3, 14),
            &receipts,
        );

        assert_eq!(report.totals.len(), 2);
        assert_eq!(report.totals[0].celebration, "Boda");
        assert_eq!(report.totals[0].count, 2);
        assert_eq!(report.totals[0].total_paid, 2000.0);
        assert_eq!(report.totals[1].celebration, "Bautizo");
        assert_eq!(report.totals[1].count, 1);
        assert_eq!(report.grand_total, 2300.0);
    }

    #[test]
    fn folios_outside_the_period_are_excluded() {
        let receipts = vec![
            receipt("A-001", "Boda", date(2024, 3, 11), 1500.0),
            receipt("A-002", "Boda", date(2024, 3, 20), 800.0),
        ];

        let report = CelebrationReport::build(
            ReportKind::Weekly,
            "Parroquia San Isidro Labrador",
            date(2024, 3, 14),
            &receipts,
        );

        assert_eq!(report.receipts.len(), 1);
        assert_eq!(report.receipts[0].folio.0, "A-001");
        assert_eq!(report.grand_total, 1500.0);
    }

    #[test]
    fn monthly_report_spans_the_whole_month() {
        let receipts = vec![
            receipt("A-001", "Boda", date(2024, 3, 1), 100.0),
            receipt("A-002", "Boda", date(2024, 3, 31), 200.0),
            receipt("A-003", "Boda", date(2024, 4, 1), 400.0),
        ];

        let report = CelebrationReport::build(
            ReportKind::Monthly,
            "Parroquia San Isidro Labrador",
            date(2024, 3, 14),
            &receipts,
        );

        assert_eq!(report.receipts.len(), 2);
        assert_eq!(report.grand_total, 300.0);
    }

    #[test]
    fn quiet_period_yields_an_empty_report() {
        let receipts = vec![receipt("A-001", "Boda", date(2024, 1, 2), 100.0)];

        let report = CelebrationReport::build(
            ReportKind::Weekly,
            "Parroquia San Isidro Labrador",
            date(2024, 3, 14),
            &receipts,
        );

        assert!(report.is_empty());
        assert!(report.totals.is_empty());
        assert_eq!(report.grand_total, 0.0);
    }
}

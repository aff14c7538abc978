use chrono::{Datelike, Duration, Months, NaiveDate};

/// Reporting periods offered by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Weekly,
    Monthly,
}

impl ReportKind {
    pub const fn label(self) -> &'static str {
        match self {
            ReportKind::Weekly => "Semanal",
            ReportKind::Monthly => "Mensual",
        }
    }

    /// Report title, `Reporte Semanal` or `Reporte Mensual`.
    pub fn title(self) -> String {
        format!("Reporte {}", self.label())
    }
}

/// Closed date range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportRange {
    /// Sunday through Saturday of the week containing `anchor`.
    pub fn weekly(anchor: NaiveDate) -> Self {
        let days_from_sunday = anchor.weekday().num_days_from_sunday();
        let start = anchor - Duration::days(i64::from(days_from_sunday));
        let end = start + Duration::days(6);
        Self { start, end }
    }

    /// First through last day of the month containing `anchor`.
    pub fn monthly(anchor: NaiveDate) -> Self {
        let start = anchor - Duration::days(i64::from(anchor.day0()));
        let end = match start.checked_add_months(Months::new(1)) {
            Some(next_month) => next_month - Duration::days(1),
            None => NaiveDate::MAX,
        };
        Self { start, end }
    }

    pub fn for_kind(kind: ReportKind, anchor: NaiveDate) -> Self {
        match kind {
            ReportKind::Weekly => Self::weekly(anchor),
            ReportKind::Monthly => Self::monthly(anchor),
        }
    }

    /// Both endpoints count as inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// `start - end` in ISO dates, as printed on report headers.
    pub fn label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn weekly_range_runs_sunday_through_saturday() {
        let range = ReportRange::weekly(date(2024, 3, 14));

        assert_eq!(range.start, date(2024, 3, 10));
        assert_eq!(range.end, date(2024, 3, 16));
    }

    #[test]
    fn sunday_anchor_starts_its_own_week() {
        let range = ReportRange::weekly(date(2024, 3, 10));

        assert_eq!(range.start, date(2024, 3, 10));
        assert_eq!(range.end, date(2024, 3, 16));
    }

    #[test]
    fn weekly_range_crosses_year_boundaries() {
        let range = ReportRange::weekly(date(2024, 12, 31));

        assert_eq!(range.start, date(2024, 12, 29));
        assert_eq!(range.end, date(2025, 1, 4));
    }

    #[test]
    fn monthly_range_covers_the_calendar_month() {
        let range = ReportRange::monthly(date(2024, 3, 14));

        assert_eq!(range.start, date(2024, 3, 1));
        assert_eq!(range.end, date(2024, 3, 31));
    }

    #[test]
    fn monthly_range_respects_leap_february() {
        let range = ReportRange::monthly(date(2024, 2, 10));

        assert_eq!(range.start, date(2024, 2, 1));
        assert_eq!(range.end, date(2024, 2, 29));
    }

    #[test]
    fn december_ends_on_the_thirty_first() {
        let range = ReportRange::monthly(date(2023, 12, 25));

        assert_eq!(range.start, date(2023, 12, 1));
        assert_eq!(range.end, date(2023, 12, 31));
    }

    #[test]
    fn contains_is_inclusive_at_both_ends() {
        let range = ReportRange::weekly(date(2024, 3, 14));

        assert!(range.contains(date(2024, 3, 10)));
        assert!(range.contains(date(2024, 3, 16)));
        assert!(!range.contains(date(2024, 3, 9)));
        assert!(!range.contains(date(2024, 3, 17)));
    }

    #[test]
    fn labels_follow_the_report_headers() {
        assert_eq!(ReportKind::Weekly.title(), "Reporte Semanal");
        assert_eq!(ReportKind::Monthly.title(), "Reporte Mensual");
        assert_eq!(
            ReportRange::weekly(date(2024, 3, 14)).label(),
            "2024-03-10 - 2024-03-16"
        );
    }
}

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for receipt folios.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Folio(pub String);

impl fmt::Display for Folio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One ledger entry for a celebration payment.
///
/// Stored field names match the partitions written by earlier deployments:
/// `folio` serializes as `id` and the rest keep their camelCase spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(rename = "id")]
    pub folio: Folio,
    #[serde(default)]
    pub person_name: String,
    #[serde(default)]
    pub celebration: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub amount_paid: f64,
    #[serde(default)]
    pub amount_remaining: f64,
    #[serde(default)]
    pub parish: String,
}

impl Receipt {
    /// A folio with an exact zero balance is settled and refuses further
    /// edits. Partial and negative balances both count as pending.
    pub fn is_settled(&self) -> bool {
        self.amount_remaining == 0.0
    }

    /// Status label shown on listings and exports.
    pub fn status_label(&self) -> &'static str {
        if self.is_settled() {
            "Liquidado"
        } else {
            "Pendiente"
        }
    }

    /// Text representation of one column, as used by the search filter.
    pub fn field_text(&self, field: ReceiptField) -> String {
        match field {
            ReceiptField::Folio => self.folio.0.clone(),
            ReceiptField::PersonName => self.person_name.clone(),
            ReceiptField::Celebration => self.celebration.clone(),
            ReceiptField::Date => self.date.to_string(),
            ReceiptField::Time => self.time.clone(),
            ReceiptField::Location => self.location.clone(),
            ReceiptField::AmountPaid => self.amount_paid.to_string(),
            ReceiptField::AmountRemaining => self.amount_remaining.to_string(),
        }
    }

    /// Column ordering used by the sorted listings.
    pub fn compare_by(&self, other: &Self, field: ReceiptField) -> Ordering {
        match field {
            ReceiptField::Folio => self.folio.0.cmp(&other.folio.0),
            ReceiptField::PersonName => self.person_name.cmp(&other.person_name),
            ReceiptField::Celebration => self.celebration.cmp(&other.celebration),
            ReceiptField::Date => self.date.cmp(&other.date),
            ReceiptField::Time => self.time.cmp(&other.time),
            ReceiptField::Location => self.location.cmp(&other.location),
            ReceiptField::AmountPaid => self.amount_paid.total_cmp(&other.amount_paid),
            ReceiptField::AmountRemaining => {
                self.amount_remaining.total_cmp(&other.amount_remaining)
            }
        }
    }
}

/// Searchable and sortable receipt columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptField {
    Folio,
    PersonName,
    Celebration,
    Date,
    Time,
    Location,
    AmountPaid,
    AmountRemaining,
}

/// Sort order for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Result of writing a folio into the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// New folio appended to the ledger.
    Created(Folio),
    /// Existing unsettled folio replaced in place.
    Updated(Folio),
    /// Folio exists with a zero balance, so the ledger refused the write.
    AlreadySettled(Folio),
}

impl SaveOutcome {
    /// Whether the write reached storage.
    pub const fn accepted(&self) -> bool {
        matches!(self, SaveOutcome::Created(_) | SaveOutcome::Updated(_))
    }

    /// Confirmation text in the wording the parish staff know.
    pub fn message(&self) -> String {
        match self {
            SaveOutcome::Created(_) => "Recibo guardado exitosamente.".to_string(),
            SaveOutcome::Updated(folio) => format!("Recibo {folio} actualizado."),
            SaveOutcome::AlreadySettled(folio) => {
                format!("El folio {folio} ya existe y está liquidado.")
            }
        }
    }
}

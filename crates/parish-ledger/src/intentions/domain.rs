use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Advisory ceiling per mass slot. The register never blocks a write, it
/// only reports slots that run over.
pub const SLOT_CAPACITY: usize = 20;

/// The two daily masses intentions can be read at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassTime {
    #[serde(rename = "8:00 AM")]
    Morning,
    #[serde(rename = "7:00 PM")]
    Evening,
}

impl MassTime {
    pub const ALL: [MassTime; 2] = [MassTime::Morning, MassTime::Evening];

    pub const fn label(self) -> &'static str {
        match self {
            MassTime::Morning => "8:00 AM",
            MassTime::Evening => "7:00 PM",
        }
    }
}

impl fmt::Display for MassTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Intention categories offered on the capture form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentionType {
    #[serde(rename = "Difuntos")]
    Difuntos,
    #[serde(rename = "Acción de Gracias")]
    AccionDeGracias,
    #[serde(rename = "Salud")]
    Salud,
}

impl IntentionType {
    pub const ALL: [IntentionType; 3] = [
        IntentionType::Difuntos,
        IntentionType::AccionDeGracias,
        IntentionType::Salud,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            IntentionType::Difuntos => "Difuntos",
            IntentionType::AccionDeGracias => "Acción de Gracias",
            IntentionType::Salud => "Salud",
        }
    }
}

impl fmt::Display for IntentionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One registered mass intention.
///
/// Stored names keep the camelCase spelling of earlier deployments, with the
/// category under its historical `type` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intention {
    pub id: String,
    #[serde(default)]
    pub person_name: String,
    #[serde(rename = "type")]
    pub kind: IntentionType,
    pub time: MassTime,
    #[serde(default)]
    pub amount_paid: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub parish: String,
}

/// Capture-form payload. The register assigns the identifier and parish.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentionDraft {
    pub person_name: String,
    pub kind: IntentionType,
    pub time: MassTime,
    pub amount_paid: f64,
    pub date: NaiveDate,
}

/// Intentions for one mass slot on one day, in registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct MassSlot {
    pub date: NaiveDate,
    pub time: MassTime,
    pub intentions: Vec<Intention>,
}

impl MassSlot {
    pub fn occupancy(&self) -> usize {
        self.intentions.len()
    }

    /// Whether the slot has run past the advisory ceiling.
    pub fn over_capacity(&self) -> bool {
        self.intentions.len() > SLOT_CAPACITY
    }

    /// Heading in the wording the schedule page uses.
    pub fn heading(&self) -> String {
        format!(
            "Intenciones - Misa de {} del {} ({}/{})",
            self.time,
            self.date,
            self.intentions.len(),
            SLOT_CAPACITY
        )
    }

    /// Advisory text for slots past the ceiling.
    pub fn capacity_warning(&self) -> Option<String> {
        self.over_capacity().then(|| {
            format!(
                "Advertencia: Hay {} intenciones para la misa de las {}, superando el límite de {}.",
                self.intentions.len(),
                self.time,
                SLOT_CAPACITY
            )
        })
    }
}

use std::sync::Arc;

use chrono::NaiveDate;
use parish_ledger::config::AppConfig;
use parish_ledger::directory::UserDirectory;
use parish_ledger::error::AppError;
use parish_ledger::intentions::{IntentionRegister, IntentionType, MassTime};
use parish_ledger::receipts::{ReceiptField, ReceiptLedger, SortDirection};
use parish_ledger::reports::ReportKind;
use parish_ledger::store::JsonFileStore;
use parish_ledger::telemetry;
use tracing::info;

/// Configuration plus the services every command works through.
pub(crate) struct AppContext {
    pub(crate) config: AppConfig,
    pub(crate) directory: UserDirectory<JsonFileStore>,
    pub(crate) receipts: ReceiptLedger<JsonFileStore>,
    pub(crate) intentions: IntentionRegister<JsonFileStore>,
}

impl AppContext {
    /// Load configuration, install telemetry, open the partition store and
    /// make sure the shared admin account exists.
    pub(crate) fn bootstrap() -> Result<Self, AppError> {
        let config = AppConfig::load()?;
        telemetry::init(&config.telemetry)?;

        let store = Arc::new(JsonFileStore::open(&config.storage.data_dir)?);
        let directory = UserDirectory::new(store.clone());
        directory.ensure_default_admin()?;
        let receipts = ReceiptLedger::new(store.clone(), config.parish.name.as_str());
        let intentions = IntentionRegister::new(store, config.parish.name.as_str());

        info!(
            parish = %config.parish.name,
            data_dir = %config.storage.data_dir.display(),
            "parish ledger ready"
        );

        Ok(Self {
            config,
            directory,
            receipts,
            intentions,
        })
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_amount(raw: &str) -> Result<f64, String> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as an amount ({err})"))?;
    if amount < 0.0 {
        return Err(format!("amount '{raw}' must not be negative"));
    }
    Ok(amount)
}

pub(crate) fn parse_report_kind(raw: &str) -> Result<ReportKind, String> {
    match raw.trim().to_lowercase().as_str() {
        "weekly" | "semanal" => Ok(ReportKind::Weekly),
        "monthly" | "mensual" => Ok(ReportKind::Monthly),
        _ => Err(format!("unknown report kind '{raw}', use weekly or monthly")),
    }
}

pub(crate) fn parse_field(raw: &str) -> Result<ReceiptField, String> {
    match raw.trim().to_lowercase().as_str() {
        "folio" => Ok(ReceiptField::Folio),
        "nombre" | "persona" => Ok(ReceiptField::PersonName),
        "celebracion" | "celebración" => Ok(ReceiptField::Celebration),
        "fecha" | "dia" | "día" => Ok(ReceiptField::Date),
        "hora" => Ok(ReceiptField::Time),
        "lugar" => Ok(ReceiptField::Location),
        "pagado" => Ok(ReceiptField::AmountPaid),
        "restante" => Ok(ReceiptField::AmountRemaining),
        _ => Err(format!(
            "unknown receipt field '{raw}', use folio, nombre, celebracion, fecha, hora, lugar, pagado or restante"
        )),
    }
}

pub(crate) fn parse_direction(raw: &str) -> Result<SortDirection, String> {
    match raw.trim().to_lowercase().as_str() {
        "asc" | "ascendente" => Ok(SortDirection::Ascending),
        "desc" | "descendente" => Ok(SortDirection::Descending),
        _ => Err(format!("unknown sort direction '{raw}', use asc or desc")),
    }
}

pub(crate) fn parse_mass_time(raw: &str) -> Result<MassTime, String> {
    match raw.trim().to_lowercase().as_str() {
        "8:00 am" | "8am" | "manana" | "mañana" => Ok(MassTime::Morning),
        "7:00 pm" | "7pm" | "tarde" | "noche" => Ok(MassTime::Evening),
        _ => Err(format!("unknown mass time '{raw}', use 8am or 7pm")),
    }
}

pub(crate) fn parse_intention_type(raw: &str) -> Result<IntentionType, String> {
    match raw.trim().to_lowercase().as_str() {
        "difuntos" => Ok(IntentionType::Difuntos),
        "accion-de-gracias" | "accion de gracias" | "acción de gracias" | "gracias" => {
            Ok(IntentionType::AccionDeGracias)
        }
        "salud" => Ok(IntentionType::Salud),
        _ => Err(format!(
            "unknown intention type '{raw}', use difuntos, accion-de-gracias or salud"
        )),
    }
}

//! CSV extracts for spreadsheet use.

use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::receipts::Receipt;
use crate::reports::CelebrationReport;

use super::ExportError;

/// Write the celebration summary, one row per celebration plus the grand
/// total.
pub fn write_summary_csv(report: &CelebrationReport, path: &Path) -> Result<(), ExportError> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["Celebración", "Cantidad", "Total Recaudado"])?;
    for total in &report.totals {
        writer.write_record([
            total.celebration.clone(),
            total.count.to_string(),
            format!("{:.2}", total.total_paid),
        ])?;
    }
    writer.write_record([
        "Total General".to_string(),
        String::new(),
        format!("{:.2}", report.grand_total),
    ])?;
    flush(writer, path)?;
    info!(path = %path.display(), "wrote summary CSV");
    Ok(())
}

/// Write a receipt listing with settlement status.
pub fn write_receipts_csv(receipts: &[Receipt], path: &Path) -> Result<(), ExportError> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record([
        "Folio",
        "Nombre",
        "Celebración",
        "Fecha",
        "Hora",
        "Lugar",
        "Pagado",
        "Restante",
        "Estado",
    ])?;
    for receipt in receipts {
        writer.write_record([
            receipt.folio.0.clone(),
            receipt.person_name.clone(),
            receipt.celebration.clone(),
            receipt.date.to_string(),
            receipt.time.clone(),
            receipt.location.clone(),
            format!("{:.2}", receipt.amount_paid),
            format!("{:.2}", receipt.amount_remaining),
            receipt.status_label().to_string(),
        ])?;
    }
    flush(writer, path)?;
    info!(path = %path.display(), "wrote receipts CSV");
    Ok(())
}

fn flush<W: std::io::Write>(mut writer: Writer<W>, path: &Path) -> Result<(), ExportError> {
    writer.flush().map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })
}

//! HTML fragments in the layout the parish office prints.
//!
//! Builders return the inner document body; the Word envelope is applied by
//! [`super::word::write_word_document`].

use chrono::NaiveDate;

use crate::intentions::MassSlot;
use crate::receipts::Receipt;
use crate::reports::CelebrationReport;

/// Escape text destined for element content.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Body of the weekly or monthly financial report.
pub fn report_fragment(report: &CelebrationReport) -> String {
    let mut html = String::new();
    html.push_str(&format!("<h1>{}</h1>", report.kind.title()));
    html.push_str(&format!("<h2>Parroquia: {}</h2>", escape(&report.parish)));
    html.push_str(&format!("<p>Periodo: {}</p>", report.range.label()));

    html.push_str("<h3>Resumen por Celebración</h3>");
    html.push_str(
        "<table><thead><tr><th>Celebración</th><th>Cantidad</th>\
         <th>Total Recaudado</th></tr></thead><tbody>",
    );
    for total in &report.totals {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>${:.2}</td></tr>",
            escape(&total.celebration),
            total.count,
            total.total_paid
        ));
    }
    html.push_str(&format!(
        "</tbody><tfoot><tr><td colspan=\"2\" style=\"text-align:right; font-weight:bold;\">\
         Total General</td><td style=\"font-weight:bold;\">${:.2}</td></tr></tfoot></table>",
        report.grand_total
    ));

    html.push_str("<h3>Detalle de Recibos</h3>");
    html.push_str(
        "<table><thead><tr><th>Folio</th><th>Nombre</th><th>Celebración</th>\
         <th>Fecha</th><th>Pagado</th><th>Restante</th></tr></thead><tbody>",
    );
    for receipt in &report.receipts {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>${:.2}</td><td>${:.2}</td></tr>",
            escape(&receipt.folio.0),
            escape(&receipt.person_name),
            escape(&receipt.celebration),
            receipt.date,
            receipt.amount_paid,
            receipt.amount_remaining
        ));
    }
    html.push_str("</tbody></table>");
    html
}

/// Body of the intentions day sheet, one section per mass slot.
pub fn intentions_fragment(parish: &str, date: NaiveDate, slots: &[MassSlot]) -> String {
    let mut html = String::new();
    html.push_str(&format!("<h1>Reporte de Intenciones para {date}</h1>"));
    html.push_str(&format!("<h2>Parroquia: {}</h2>", escape(parish)));

    for slot in slots {
        html.push_str(&format!("<h3>Misa de {}</h3>", slot.time));
        if slot.intentions.is_empty() {
            html.push_str("<p>No hay intenciones.</p>");
            continue;
        }
        html.push_str(
            "<table><thead><tr><th>Por quien piden</th><th>Tipo</th>\
             <th>Pago</th></tr></thead><tbody>",
        );
        for intention in &slot.intentions {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>${:.2}</td></tr>",
                escape(&intention.person_name),
                intention.kind,
                intention.amount_paid
            ));
        }
        html.push_str("</tbody></table>");
    }
    html
}

/// Body of the all-celebrations listing with settlement status.
pub fn all_celebrations_fragment(parish: &str, receipts: &[Receipt]) -> String {
    let mut html = String::new();
    html.push_str("<h1>Reporte de Todas las Celebraciones</h1>");
    html.push_str(&format!("<h2>Parroquia: {}</h2>", escape(parish)));
    html.push_str(
        "<table><thead><tr><th>Folio</th><th>Celebración</th><th>Solicitante</th>\
         <th>Fecha</th><th>Hora</th><th>Lugar</th><th>Estado</th></tr></thead><tbody>",
    );
    for receipt in receipts {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&receipt.folio.0),
            escape(&receipt.celebration),
            escape(&receipt.person_name),
            receipt.date,
            escape(&receipt.time),
            escape(&receipt.location),
            receipt.status_label()
        ));
    }
    html.push_str("</tbody></table>");
    html
}

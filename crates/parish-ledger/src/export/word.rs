//! MS-Word compatible document output.
//!
//! Word opens an HTML payload saved under a `.doc` extension as long as it
//! carries the office namespaces. The envelope matches the documents the
//! parish office already has on file, so new exports render like the old
//! ones.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use super::ExportError;

const WORD_HEADER: &str = r#"<html xmlns:o='urn:schemas-microsoft-com:office:office' xmlns:w='urn:schemas-microsoft-com:office:word' xmlns='http://www.w3.org/TR/REC-html40'><head><meta charset='utf-8'><title>Export HTML to Word Document</title>
  <style>
    body { font-family: 'Times New Roman', Times, serif; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #dddddd; text-align: left; padding: 8px; }
    th { background-color: #f2f2f2; }
    h1, h2, h3 { font-family: 'Arial', sans-serif; }
  </style>
  </head><body>"#;

const WORD_FOOTER: &str = "</body></html>";

/// Wrap a fragment in the Word envelope.
pub fn word_document(fragment: &str) -> String {
    format!("{WORD_HEADER}{fragment}{WORD_FOOTER}")
}

/// File stem with every whitespace character replaced by an underscore,
/// matching how the office's existing archives are named.
pub fn export_file_name(stem: &str) -> String {
    stem.chars()
        .map(|ch| if ch.is_whitespace() { '_' } else { ch })
        .collect()
}

/// Stem for the financial report document.
pub fn report_stem(parish: &str, anchor: NaiveDate) -> String {
    format!("Reporte_{parish}_{anchor}")
}

/// Stem for the intentions day sheet.
pub fn intentions_stem(parish: &str, date: NaiveDate) -> String {
    format!("Intenciones_{parish}_{date}")
}

/// Stem for the all-celebrations listing.
pub fn celebrations_stem(parish: &str) -> String {
    format!("Todas_Celebraciones_{parish}")
}

/// Write `<stem>.doc` under `dir`, returning the path written.
pub fn write_word_document(dir: &Path, stem: &str, fragment: &str) -> Result<PathBuf, ExportError> {
    let path = dir.join(format!("{}.doc", export_file_name(stem)));
    fs::write(&path, word_document(fragment)).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), "wrote Word document");
    Ok(path)
}

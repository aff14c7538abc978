//! Printable documents: MS-Word HTML exports and CSV extracts.

mod csv;
mod html;
mod word;

pub use self::csv::{write_receipts_csv, write_summary_csv};
pub use html::{all_celebrations_fragment, escape, intentions_fragment, report_fragment};
pub use word::{
    celebrations_stem, export_file_name, intentions_stem, report_stem, word_document,
    write_word_document,
};

/// Errors raised while writing export documents.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("io failure writing '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Csv(#[from] ::csv::Error),
}

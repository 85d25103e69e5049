//! Error types for figure export.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Unsupported file type '.{extension}' (use .png, .jpg, .jpeg or .pdf)")]
    UnsupportedFormat { extension: String },

    #[error("Failed to load the bundled font: {0}")]
    Font(String),

    #[error("Failed to draw figure: {0}")]
    Render(String),

    #[error("Failed to convert figure to PDF: {0}")]
    Pdf(String),

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type ExportResult<T> = Result<T, ExportError>;

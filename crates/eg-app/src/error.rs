//! Error types for the session layer.

use eg_export::ExportError;
use eg_figure::FigureError;

use crate::notice::NoticeLevel;

/// Every way a button action can fail. None of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidCurve(FigureError),

    #[error("Invalid BJT parameters. {0}")]
    InvalidBjt(FigureError),

    #[error("No curves to plot.")]
    NoCurves,

    #[error("Generate a graph first.")]
    NoFigure,

    #[error("Could not save graph: {0}")]
    Export(#[from] ExportError),
}

/// Result type for session operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Severity of the dialog this error is shown in.
    pub fn level(&self) -> NoticeLevel {
        match self {
            AppError::NoCurves | AppError::NoFigure => NoticeLevel::Warning,
            AppError::InvalidCurve(_) | AppError::InvalidBjt(_) | AppError::Export(_) => {
                NoticeLevel::Error
            }
        }
    }
}

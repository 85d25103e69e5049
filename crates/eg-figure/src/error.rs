use eg_core::CoreError;
use thiserror::Error;

pub type FigureResult<T> = Result<T, FigureError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FigureError {
    #[error("X and Y must have the same length (got {x_len} X values and {y_len} Y values).")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("No curves to plot.")]
    NoCurves,

    #[error("Invalid BJT parameter {what}: {reason}")]
    InvalidParameter {
        what: &'static str,
        reason: &'static str,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

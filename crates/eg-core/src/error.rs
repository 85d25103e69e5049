use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Could not parse {what}: '{input}' is not a number")]
    Parse { what: &'static str, input: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

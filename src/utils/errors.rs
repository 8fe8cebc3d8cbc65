use thiserror::Error;

/// Errors that can occur while reading or checking input numbers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Number cannot be empty")]
    EmptyNumber,
    #[error("Not a number: {0}")]
    InvalidNumber(String),
    #[error("Number must be finite: {0}")]
    NonFiniteNumber(String),
}

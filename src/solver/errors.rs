use thiserror::Error;

use crate::expression::Number;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("At least {required} numbers are needed, got {count}")]
    NotEnoughNumbers { required: usize, count: usize },
    #[error("Target must be finite, got {0}")]
    NonFiniteTarget(Number),
    #[error("Invalid input: {0}")]
    UtilsError(#[from] UtilsError),
}

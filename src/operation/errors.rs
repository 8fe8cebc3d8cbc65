use thiserror::Error;

use crate::expression::Number;
use crate::operation::Operation;

/// Recoverable failures of a single operation application.
///
/// Each of these only disqualifies the candidate being evaluated, never the search.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum OperationError {
    #[error("Operand {operand} of {operation} exceeds the limit of {limit}")]
    GuardViolation {
        operation: Operation,
        operand: Number,
        limit: u32,
    },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Operand {operand} is not valid for {operation}")]
    InvalidOperand {
        operation: Operation,
        operand: Number,
    },
    #[error("Result of {operation} does not fit the numeric representation")]
    Overflow { operation: Operation },
}

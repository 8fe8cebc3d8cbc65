//! Countdown solver - A library for building a target number from a multiset of numbers
//!
//! This library enumerates every arithmetic expression over ordered subsets of the
//! given numbers, evaluates them lazily with a per-search memo, and streams the exact
//! hits (or the closest miss) back to the caller.

pub mod expression;
pub mod iterator;
pub mod operation;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Evaluator, Expression, Number};
pub use operation::{Operation, OperationError};
pub use solver::{BestMatches, ExpressionSolver, SearchConfig, SearchError, SearchResult};
pub use utils::{UtilsError, parse_number};

use iterator::CandidateIterator;

/// Search every expression over `numbers` for `target`
///
/// This is a convenience function that creates a default solver. The returned stream
/// yields every exact hit in discovery order, or a single closest result if there is
/// none. It is lazy: dropping it after the first hit stops the search.
///
/// # Errors
///
/// This function will return an error if:
/// * Fewer than two numbers are given
/// * A number or the target is infinite or NaN
///
/// # Examples
///
/// ```
/// use countdown_solver::{Number, format, search};
///
/// let numbers = [1, 1].map(Number::from);
/// match search(&numbers, Number::from(0)) {
///     Ok(mut results) => {
///         if let Some(hit) = results.next() {
///             println!("{} = {}", format(&hit.expression, true), hit.value);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn search(
    numbers: &[Number],
    target: Number,
) -> Result<BestMatches<CandidateIterator>, SearchError> {
    ExpressionSolver::new().search(numbers, target)
}

/// Render an expression as infix text.
///
/// With `top_level` set the outermost operation is left unparenthesized; every nested
/// operation is always parenthesized.
pub fn format(expression: &Expression, top_level: bool) -> String {
    expression.to_infix(!top_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_convenience() {
        let numbers = [2, 3].map(Number::from);
        let results: Vec<_> = search(&numbers, Number::from(8))
            .map(|s| s.collect())
            .unwrap_or_default();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].expression.to_infix(false), "2 ^ 3");
    }

    #[test]
    fn test_format_top_level() {
        let expr = Expression::apply(
            Operation::Mul,
            Expression::apply(Operation::Add, Expression::number(1), Expression::number(2)),
            Expression::number(3),
        );
        assert_eq!(format(&expr, true), "(1 + 2) * 3");
        assert_eq!(format(&expr, false), "((1 + 2) * 3)");
    }

    #[test]
    fn test_search_rejects_single_number() {
        assert!(search(&[Number::from(4)], Number::from(4)).is_err());
    }
}

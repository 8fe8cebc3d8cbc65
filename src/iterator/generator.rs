use std::iter;
use std::sync::Arc;

use super::types::{BoxedIter, Grouping};
use crate::expression::Expression;
use crate::operation::Operation;

/// Attach operations to a grouping in every possible way.
///
/// For a pair, every candidate of the left side is combined with every candidate of the
/// right side under every operation, so a grouping with `k` internal nodes yields
/// `9^k` candidates. Operand order is fixed by the grouping. A lone leaf yields itself.
/// The right side is re-enumerated for each left candidate instead of being buffered.
pub fn candidates(grouping: &Grouping) -> BoxedIter<Arc<Expression>> {
    match grouping {
        Grouping::Leaf(n) => Box::new(iter::once(Expression::number(*n))),
        Grouping::Pair(left, right) => {
            let right = Arc::clone(right);
            Box::new(candidates(left).flat_map(move |lhs| {
                candidates(&right).flat_map(move |rhs| {
                    let lhs = Arc::clone(&lhs);
                    Operation::ALL
                        .into_iter()
                        .map(move |op| Expression::apply(op, Arc::clone(&lhs), Arc::clone(&rhs)))
                })
            }))
        }
    }
}

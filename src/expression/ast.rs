use std::sync::Arc;

use crate::expression::number::Number;
use crate::operation::Operation;

/// An immutable expression tree over input numbers.
///
/// Subtrees are shared between candidates, and equality and hashing are structural,
/// so identical subtrees compare equal wherever they occur.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Number(Number),
    Apply(Operation, Arc<Expression>, Arc<Expression>),
}

impl Expression {
    pub fn number(value: impl Into<Number>) -> Arc<Self> {
        Arc::new(Expression::Number(value.into()))
    }

    pub fn apply(operation: Operation, lhs: Arc<Expression>, rhs: Arc<Expression>) -> Arc<Self> {
        Arc::new(Expression::Apply(operation, lhs, rhs))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expression::Number(_))
    }

    /// Number of operations applied in this tree
    pub fn operation_count(&self) -> usize {
        match self {
            Expression::Number(_) => 0,
            Expression::Apply(_, lhs, rhs) => 1 + lhs.operation_count() + rhs.operation_count(),
        }
    }

    /// Leaf values from left to right
    pub fn leaves(&self) -> Vec<Number> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Expression::Number(n) => out.push(*n),
                Expression::Apply(_, lhs, rhs) => {
                    stack.push(rhs.as_ref());
                    stack.push(lhs.as_ref());
                }
            }
        }
        out
    }
}

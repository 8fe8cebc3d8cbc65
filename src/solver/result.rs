use std::fmt;
use std::sync::Arc;

use crate::expression::{Distance, Expression, Number};

/// A candidate together with the value it evaluated to
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub value: Number,
    pub expression: Arc<Expression>,
}

impl SearchResult {
    pub fn new(value: Number, expression: Arc<Expression>) -> Self {
        Self { value, expression }
    }

    pub fn distance(&self, target: Number) -> Distance {
        self.value.abs_diff(target)
    }

    pub fn is_exact(&self, target: Number) -> bool {
        self.value == target
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.value)
    }
}

use std::sync::Arc;

use crate::expression::Number;

/// A full binary tree over an ordered sequence, before operations are attached
#[derive(Debug, Clone, PartialEq)]
pub enum Grouping {
    Leaf(Number),
    Pair(Arc<Grouping>, Arc<Grouping>),
}

impl Grouping {
    pub fn leaf_count(&self) -> usize {
        match self {
            Grouping::Leaf(_) => 1,
            Grouping::Pair(left, right) => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Internal nodes, each of which will carry one operation
    pub fn internal_nodes(&self) -> usize {
        self.leaf_count() - 1
    }
}

/// Boxed lazy stream, the common currency between enumeration stages
pub type BoxedIter<T> = Box<dyn Iterator<Item = T> + Send>;

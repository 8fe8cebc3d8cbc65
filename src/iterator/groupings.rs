use std::iter;
use std::sync::Arc;

use super::types::{BoxedIter, Grouping};
use crate::expression::Number;

/// Every full binary tree over `sequence`, keeping its order.
///
/// Trees are produced lazily, split point by split point, so the count follows the
/// Catalan numbers without ever being materialized.
pub fn groupings(sequence: &[Number]) -> BoxedIter<Arc<Grouping>> {
    let len = sequence.len();
    groupings_in(Arc::from(sequence), 0, len)
}

fn groupings_in(sequence: Arc<[Number]>, start: usize, end: usize) -> BoxedIter<Arc<Grouping>> {
    if end <= start {
        return Box::new(iter::empty());
    }

    if end - start == 1 {
        let leaf = sequence
            .get(start)
            .map(|n| Arc::new(Grouping::Leaf(*n)));
        return Box::new(leaf.into_iter());
    }

    Box::new((start + 1..end).flat_map(move |split| {
        let suffix_source = Arc::clone(&sequence);
        groupings_in(Arc::clone(&sequence), start, split).flat_map(move |left| {
            groupings_in(Arc::clone(&suffix_source), split, end)
                .map(move |right| Arc::new(Grouping::Pair(Arc::clone(&left), right)))
        })
    }))
}

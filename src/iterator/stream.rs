use std::sync::Arc;

use log::info;

use super::generator::candidates;
use super::groupings::groupings;
use super::permutations::{distinct_sequences, sequences};
use super::types::BoxedIter;
use crate::expression::{Expression, Number};

/// Lazy stream of every candidate expression over a multiset of numbers.
///
/// Arrangements feed groupings, groupings feed candidates; nothing upstream is
/// produced before a consumer asks for the next candidate.
pub struct CandidateIterator {
    inner: BoxedIter<Arc<Expression>>,
    produced: u64,
}

impl CandidateIterator {
    pub fn new(numbers: &[Number]) -> Self {
        info!("Initialized candidate stream over {} numbers", numbers.len());
        Self::from_sequences(Box::new(sequences(numbers)))
    }

    /// A stream that visits each arrangement of values once, however often a value repeats
    pub fn distinct(numbers: &[Number]) -> Self {
        info!(
            "Initialized deduplicated candidate stream over {} numbers",
            numbers.len()
        );
        Self::from_sequences(Box::new(distinct_sequences(numbers)))
    }

    /// Candidates for a single fixed arrangement
    pub fn for_sequence(sequence: &[Number]) -> Self {
        Self::from_sequences(Box::new(std::iter::once(sequence.to_vec())))
    }

    fn from_sequences(sequences: BoxedIter<Vec<Number>>) -> Self {
        let inner = sequences
            .flat_map(|sequence| groupings(&sequence))
            .flat_map(|grouping| candidates(&grouping));
        Self {
            inner: Box::new(inner),
            produced: 0,
        }
    }

    /// Candidates handed out so far
    pub fn produced(&self) -> u64 {
        self.produced
    }
}

impl Iterator for CandidateIterator {
    type Item = Arc<Expression>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.next();
        if next.is_some() {
            self.produced += 1;
        }
        next
    }
}

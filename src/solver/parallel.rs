use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{Distance, Evaluator, Number};
use crate::iterator::{CandidateIterator, distinct_sequences, sequences};
use crate::solver::errors::SearchError;
use crate::solver::result::SearchResult;
use crate::solver::search::{ExpressionSolver, validate_input};

impl ExpressionSolver {
    /// Exhaustive search spread over the rayon pool, one arrangement per task.
    ///
    /// Each worker owns its evaluator, so memo entries are never shared between
    /// threads. Results are ranked by distance and then by arrangement index, which
    /// makes the answer identical to the sequential stream's: its first exact hit,
    /// or its fallback when no exact hit exists. Unlike [`ExpressionSolver::search`]
    /// this always scans every candidate.
    ///
    /// # Errors
    ///
    /// Same input validation as [`ExpressionSolver::search`].
    pub fn closest_parallel(
        &self,
        numbers: &[Number],
        target: Number,
    ) -> Result<Option<SearchResult>, SearchError> {
        validate_input(numbers, target)?;
        info!(
            "Starting parallel search over {} numbers for {}",
            numbers.len(),
            target
        );

        let capacity = self.config().cache_capacity;
        let arrangements: Box<dyn Iterator<Item = Vec<Number>> + Send> =
            if self.config().distinct_sequences {
                Box::new(distinct_sequences(numbers))
            } else {
                Box::new(sequences(numbers))
            };

        let best = arrangements
            .enumerate()
            .par_bridge()
            .map_init(
                || Evaluator::with_capacity(capacity),
                |evaluator, (index, sequence)| {
                    closest_in_sequence(evaluator, &sequence, target)
                        .map(|(distance, result)| (distance, index, result))
                },
            )
            .flatten()
            .min_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)))
            .map(|(_, _, result)| result);

        match &best {
            Some(result) => info!("Parallel search settled on {}", result),
            None => info!("Parallel search found no evaluable candidate"),
        }
        Ok(best)
    }
}

/// First candidate at the smallest distance for one fixed arrangement
fn closest_in_sequence(
    evaluator: &mut Evaluator,
    sequence: &[Number],
    target: Number,
) -> Option<(Distance, SearchResult)> {
    let mut best: Option<(Distance, SearchResult)> = None;
    for candidate in CandidateIterator::for_sequence(sequence) {
        let Ok(value) = evaluator.evaluate(&candidate) else {
            continue;
        };
        let distance = value.abs_diff(target);
        if best.as_ref().is_none_or(|(closest, _)| distance < *closest) {
            best = Some((distance, SearchResult::new(value, candidate)));
            if distance.is_zero() {
                debug!("Exact hit in arrangement {:?}", sequence);
                break;
            }
        }
    }
    best
}

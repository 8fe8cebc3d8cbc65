use std::sync::Arc;

use log::{debug, info, trace};

use crate::expression::{Evaluator, EvaluatorStats, Expression, Number};
use crate::iterator::CandidateIterator;
use crate::solver::config::SearchConfig;
use crate::solver::constants::MIN_NUMBERS;
use crate::solver::errors::SearchError;
use crate::solver::result::SearchResult;
use crate::utils::validate_numbers;

/// Counters for one best-match stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates that evaluated successfully
    pub evaluated: u64,
    /// Candidates dropped because evaluation failed
    pub skipped: u64,
    /// Exact hits yielded so far
    pub exact: u64,
}

/// Streams exact hits as they are discovered, or the closest miss once input runs out.
///
/// Every candidate that evaluates to the target is yielded in discovery order. If the
/// candidates are exhausted without a single exact hit, one final result is yielded:
/// the first candidate seen at the smallest distance from the target. Candidates whose
/// evaluation fails are skipped. Nothing is evaluated beyond what the consumer pulls.
pub struct BestMatches<I> {
    candidates: I,
    target: Number,
    evaluator: Evaluator,
    best: Option<SearchResult>,
    stats: SearchStats,
    finished: bool,
}

impl<I> BestMatches<I>
where
    I: Iterator<Item = Arc<Expression>>,
{
    pub fn new(candidates: I, target: Number, evaluator: Evaluator) -> Self {
        Self {
            candidates,
            target,
            evaluator,
            best: None,
            stats: SearchStats::default(),
            finished: false,
        }
    }

    pub fn target(&self) -> Number {
        self.target
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn evaluator_stats(&self) -> EvaluatorStats {
        self.evaluator.stats()
    }

    /// Closest candidate so far, exact or not
    pub fn best(&self) -> Option<&SearchResult> {
        self.best.as_ref()
    }

    fn consider(&mut self, value: Number, candidate: &Arc<Expression>) {
        let closer = match &self.best {
            None => true,
            Some(best) => value.abs_diff(self.target) < best.distance(self.target),
        };
        if closer {
            debug!(
                "New best: {} = {} (distance {})",
                candidate,
                value,
                value.abs_diff(self.target)
            );
            self.best = Some(SearchResult::new(value, Arc::clone(candidate)));
        }
    }
}

impl<I> Iterator for BestMatches<I>
where
    I: Iterator<Item = Arc<Expression>>,
{
    type Item = SearchResult;

    fn next(&mut self) -> Option<SearchResult> {
        if self.finished {
            return None;
        }

        while let Some(candidate) = self.candidates.next() {
            let value = match self.evaluator.evaluate(&candidate) {
                Ok(value) => value,
                Err(e) => {
                    trace!("Skipping {}: {}", candidate, e);
                    self.stats.skipped += 1;
                    continue;
                }
            };
            self.stats.evaluated += 1;
            self.consider(value, &candidate);

            if value == self.target {
                self.stats.exact += 1;
                debug!("Exact hit: {} = {}", candidate, value);
                return Some(SearchResult::new(value, candidate));
            }
        }

        self.finished = true;
        info!(
            "Search finished: {} evaluated, {} skipped, {} exact",
            self.stats.evaluated, self.stats.skipped, self.stats.exact
        );

        if self.stats.exact > 0 {
            None
        } else {
            self.best.clone()
        }
    }
}

/// Entry point for searching expressions that hit a target
pub struct ExpressionSolver {
    config: SearchConfig,
}

impl ExpressionSolver {
    /// Create a solver with the default configuration
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Lazily search every candidate over `numbers` for `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two numbers are given, or if any number or the
    /// target is not finite.
    pub fn search(
        &self,
        numbers: &[Number],
        target: Number,
    ) -> Result<BestMatches<CandidateIterator>, SearchError> {
        validate_input(numbers, target)?;

        info!(
            "Searching for expressions over {:?} that equal {}",
            numbers.iter().map(ToString::to_string).collect::<Vec<_>>(),
            target
        );

        let candidates = if self.config.distinct_sequences {
            CandidateIterator::distinct(numbers)
        } else {
            CandidateIterator::new(numbers)
        };
        Ok(self.search_candidates(candidates, target))
    }

    /// Run the best-match selection over any candidate stream, with a fresh memo
    pub fn search_candidates<I>(&self, candidates: I, target: Number) -> BestMatches<I>
    where
        I: Iterator<Item = Arc<Expression>>,
    {
        BestMatches::new(
            candidates,
            target,
            Evaluator::with_capacity(self.config.cache_capacity),
        )
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_input(numbers: &[Number], target: Number) -> Result<(), SearchError> {
    if numbers.len() < MIN_NUMBERS {
        debug!("Rejecting search over {} numbers", numbers.len());
        return Err(SearchError::NotEnoughNumbers {
            required: MIN_NUMBERS,
            count: numbers.len(),
        });
    }
    if !target.is_finite() {
        return Err(SearchError::NonFiniteTarget(target));
    }
    validate_numbers(numbers)?;
    Ok(())
}

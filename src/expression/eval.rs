use std::sync::Arc;

use cached::{Cached, SizedCache};
use log::trace;

use crate::expression::ast::Expression;
use crate::expression::number::Number;
use crate::operation::{Operation, OperationError};

/// Counters describing the work an [`Evaluator`] has done
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluatorStats {
    pub hits: u64,
    pub misses: u64,
    /// Operations actually applied, i.e. not answered from the memo
    pub applications: u64,
}

/// Evaluates expression trees, memoizing every internal node by its structure.
///
/// The memo is a bounded LRU owned by this evaluator, so one evaluator per search
/// keeps memory flat no matter how many candidates stream through it. Failures are
/// memoized too: a subtree that failed once fails the same way everywhere.
pub struct Evaluator {
    memo: SizedCache<Arc<Expression>, Result<Number, OperationError>>,
    applications: u64,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::with_capacity(crate::solver::constants::DEFAULT_CACHE_CAPACITY)
    }

    /// An evaluator remembering at most `capacity` subtrees (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            memo: SizedCache::with_size(capacity.max(1)),
            applications: 0,
        }
    }

    /// # Errors
    ///
    /// Returns the first [`OperationError`] raised while applying an operation anywhere
    /// in the tree.
    pub fn evaluate(&mut self, expr: &Arc<Expression>) -> Result<Number, OperationError> {
        match expr.as_ref() {
            Expression::Number(n) => Ok(*n),
            Expression::Apply(operation, lhs, rhs) => {
                if let Some(result) = self.memo.cache_get(expr) {
                    return *result;
                }
                let result = self.evaluate_node(*operation, lhs, rhs);
                if let Err(e) = &result {
                    trace!("Evaluation of {} failed: {}", expr, e);
                }
                self.memo.cache_set(Arc::clone(expr), result);
                result
            }
        }
    }

    fn evaluate_node(
        &mut self,
        operation: Operation,
        lhs: &Arc<Expression>,
        rhs: &Arc<Expression>,
    ) -> Result<Number, OperationError> {
        let left = self.evaluate(lhs)?;
        let right = self.evaluate(rhs)?;
        self.applications += 1;
        operation.apply(left, right)
    }

    pub fn stats(&self) -> EvaluatorStats {
        EvaluatorStats {
            hits: self.memo.cache_hits().unwrap_or(0),
            misses: self.memo.cache_misses().unwrap_or(0),
            applications: self.applications,
        }
    }

    pub fn cached_entries(&self) -> usize {
        self.memo.cache_size()
    }

    /// Forget every memoized subtree and reset the counters
    pub fn clear(&mut self) {
        self.memo.cache_clear();
        self.memo.cache_reset_metrics();
        self.applications = 0;
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

use crate::solver::constants::DEFAULT_CACHE_CAPACITY;

/// Tuning knobs for one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Subtrees the evaluator memoizes before evicting the least recently used
    pub cache_capacity: usize,
    /// Visit each arrangement of values once, instead of once per arrangement of positions
    pub distinct_sequences: bool,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            distinct_sequences: false,
        }
    }

    pub fn with_cache_capacity(mut self, cache_capacity: usize) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }

    pub fn with_distinct_sequences(mut self, distinct_sequences: bool) -> Self {
        self.distinct_sequences = distinct_sequences;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

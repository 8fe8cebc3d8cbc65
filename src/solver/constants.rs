// Subtrees remembered by one search's evaluator
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;
// Smallest arrangement that can carry an operation
pub const MIN_NUMBERS: usize = 2;

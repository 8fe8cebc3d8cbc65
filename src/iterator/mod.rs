//! Lazy enumeration of candidate expressions: arrangements, groupings, operations

pub mod generator;
pub mod groupings;
pub mod permutations;
pub mod stream;
pub mod types;

pub use generator::candidates;
pub use groupings::groupings;
pub use permutations::{distinct_sequences, sequences};
pub use stream::CandidateIterator;
pub use types::Grouping;

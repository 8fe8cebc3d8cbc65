pub mod constants;
mod config;
mod errors;
mod parallel;
mod result;
mod search;

pub use config::SearchConfig;
pub use errors::SearchError;
pub use result::SearchResult;
pub use search::{BestMatches, ExpressionSolver, SearchStats};

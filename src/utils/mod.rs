//! Input parsing and validation

mod errors;
mod parse;
mod validation;

pub use errors::UtilsError;
pub use parse::parse_number;
pub use validation::validate_numbers;

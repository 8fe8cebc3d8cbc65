//! The closed set of binary operations a candidate may use

pub mod constants;
mod errors;
mod registry;

pub use errors::OperationError;
pub use registry::Operation;

#[cfg(test)]
mod tests;

//! Expression trees, their values and their infix rendering

mod ast;
mod display;
mod eval;
mod number;

pub use ast::Expression;
pub use eval::{Evaluator, EvaluatorStats};
pub use number::{Distance, Number};

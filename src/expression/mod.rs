//! Expressions over the four numbers-round operators: the operator rules
//! shared with the solver, plus a reader and evaluator for renderings.

mod ast;
mod display;
mod errors;
mod eval;
mod parse;

pub use ast::{Expression, Operator, Value};
pub use errors::ExpressionError;

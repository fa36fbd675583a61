use thiserror::Error;

use crate::expression::ast::Value;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division is not exact: {dividend} is not a multiple of {divisor}")]
    InexactDivision { dividend: Value, divisor: Value },
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unbalanced parentheses at position {0}")]
    UnbalancedParens(usize),
    #[error("Trailing input at position {0}")]
    TrailingInput(usize),
    #[error("Number literal '{0}' is out of range")]
    NumberOutOfRange(String),
}

use std::fmt;

use crate::expression::ast::{Expression, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Composite nodes are always fully parenthesized so the output matches
        // the renderings the solver builds incrementally.
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Add(l, r) => write!(f, "({} {} {})", l, Operator::Add, r),
            Expression::Sub(l, r) => write!(f, "({} {} {})", l, Operator::Sub, r),
            Expression::Mul(l, r) => write!(f, "({} {} {})", l, Operator::Mul, r),
            Expression::Div(l, r) => write!(f, "({} {} {})", l, Operator::Div, r),
        }
    }
}

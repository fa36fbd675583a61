use log::debug;

use crate::expression::ast::{Expression, Operator, Value};
use crate::expression::errors::ExpressionError;

impl Operator {
    /// Applies the operator with the house rules of the numbers round.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - The divisor is zero
    /// - The dividend is not an exact multiple of the divisor
    /// - The result does not fit in a [`Value`]
    pub fn apply(self, a: Value, b: Value) -> Result<Value, ExpressionError> {
        match self {
            Operator::Add => a.checked_add(b).ok_or(ExpressionError::Overflow),
            Operator::Sub => a.checked_sub(b).ok_or(ExpressionError::Overflow),
            Operator::Mul => a.checked_mul(b).ok_or(ExpressionError::Overflow),
            Operator::Div => {
                if b == 0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                match a.checked_rem(b) {
                    Some(0) => a.checked_div(b).ok_or(ExpressionError::Overflow),
                    Some(_) => Err(ExpressionError::InexactDivision {
                        dividend: a,
                        divisor: b,
                    }),
                    None => Err(ExpressionError::Overflow),
                }
            }
        }
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns the first error hit while evaluating bottom-up: a zero
    /// divisor, an inexact division, or an overflowing intermediate value.
    pub fn evaluate(&self) -> Result<Value, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => Operator::Add.apply(l.evaluate()?, r.evaluate()?),
            Expression::Sub(l, r) => Operator::Sub.apply(l.evaluate()?, r.evaluate()?),
            Expression::Mul(l, r) => Operator::Mul.apply(l.evaluate()?, r.evaluate()?),
            Expression::Div(l, r) => Operator::Div.apply(l.evaluate()?, r.evaluate()?),
        };

        if let Err(e) = &result {
            debug!("Evaluation of {} failed: {}", self, e);
        }

        result
    }
}

#[cfg(test)]
mod tests_apply {
    use super::*;

    #[test]
    fn test_exact_division() {
        assert_eq!(Operator::Div.apply(10, 2), Ok(5));
        assert_eq!(Operator::Div.apply(-6, 3), Ok(-2));
        assert_eq!(Operator::Div.apply(0, 7), Ok(0));
    }

    #[test]
    fn test_inexact_division_rejected() {
        assert_eq!(
            Operator::Div.apply(7, 2),
            Err(ExpressionError::InexactDivision {
                dividend: 7,
                divisor: 2
            })
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Operator::Div.apply(5, 0),
            Err(ExpressionError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow_is_rejected() {
        assert_eq!(
            Operator::Mul.apply(Value::MAX, 2),
            Err(ExpressionError::Overflow)
        );
        assert_eq!(
            Operator::Sub.apply(Value::MIN, 1),
            Err(ExpressionError::Overflow)
        );
        assert_eq!(
            Operator::Div.apply(Value::MIN, -1),
            Err(ExpressionError::Overflow)
        );
    }

    #[test]
    fn test_negative_results_are_kept() {
        assert_eq!(Operator::Sub.apply(3, 10), Ok(-7));
    }
}

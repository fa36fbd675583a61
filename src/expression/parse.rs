use std::str::FromStr;

use crate::expression::ast::{Expression, Operator, Value};
use crate::expression::errors::ExpressionError;

/// Recursive-descent reader for fully parenthesized renderings such as
/// `((100 + 6) × 3)`. Positions in errors are character offsets.
struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.get(self.pos).is_some_and(|c| c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.chars.get(self.pos).copied()
    }

    fn expect(&mut self, wanted: char) -> Result<(), ExpressionError> {
        match self.peek() {
            Some(c) if c == wanted => {
                self.pos += 1;
                Ok(())
            }
            Some(found) => Err(ExpressionError::UnexpectedChar {
                found,
                position: self.pos,
            }),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }

    fn expression(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek() {
            Some('(') => {
                self.pos += 1;
                let left = self.expression()?;
                let op = self.operator()?;
                let right = self.expression()?;
                if self.peek().is_none() {
                    return Err(ExpressionError::UnbalancedParens(self.pos));
                }
                self.expect(')')?;
                Ok(Expression::binary(op, left, right))
            }
            Some(c) if c.is_ascii_digit() => self.number(),
            Some(found) => Err(ExpressionError::UnexpectedChar {
                found,
                position: self.pos,
            }),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }

    fn operator(&mut self) -> Result<Operator, ExpressionError> {
        let found = self.peek().ok_or(ExpressionError::UnexpectedEnd)?;
        let op = Operator::from_symbol(found).ok_or(ExpressionError::UnexpectedChar {
            found,
            position: self.pos,
        })?;
        self.pos += 1;
        Ok(op)
    }

    fn number(&mut self) -> Result<Expression, ExpressionError> {
        let start = self.pos;
        while self.chars.get(self.pos).is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        let literal: String = self.chars.get(start..self.pos).unwrap_or_default().iter().collect();
        literal
            .parse::<Value>()
            .map(Expression::Number)
            .map_err(|_| ExpressionError::NumberOutOfRange(literal))
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(s);
        let expr = parser.expression()?;
        match parser.peek() {
            None => {}
            Some(')') => return Err(ExpressionError::UnbalancedParens(parser.pos)),
            Some(_) => return Err(ExpressionError::TrailingInput(parser.pos)),
        }
        Ok(expr)
    }
}

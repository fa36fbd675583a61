/// Integer type used for every value produced while solving.
///
/// Pools hold non-negative `u64`s, so `i128` keeps every leaf representable
/// and leaves headroom for products before checked arithmetic rejects them.
pub type Value = i128;

/// One of the four arithmetic operators allowed in a numbers round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

/// A parsed numbers-round expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(Value),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Symbol shown to players
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '×',
            Operator::Div => '÷',
        }
    }

    /// Accepts the display symbols plus the ASCII spellings people type.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '×' | '*' | 'x' => Some(Operator::Mul),
            '÷' | '/' => Some(Operator::Div),
            _ => None,
        }
    }
}

impl Expression {
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        let (l, r) = (Box::new(left), Box::new(right));
        match op {
            Operator::Add => Expression::Add(l, r),
            Operator::Sub => Expression::Sub(l, r),
            Operator::Mul => Expression::Mul(l, r),
            Operator::Div => Expression::Div(l, r),
        }
    }

    /// Leaf numbers in left-to-right order
    pub fn leaves(&self) -> Vec<Value> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Expression::Number(n) => out.push(*n),
                Expression::Add(l, r)
                | Expression::Sub(l, r)
                | Expression::Mul(l, r)
                | Expression::Div(l, r) => {
                    stack.push(r);
                    stack.push(l);
                }
            }
        }
        out
    }
}

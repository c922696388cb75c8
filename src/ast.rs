//! Arithmetic syntax tree and the grammar producing it.

use crate::and::AndExt;
use crate::bind::BindExt;
use crate::default::DefaultExt;
use crate::expression::{PrecedenceLevel, expression};
use crate::lexer::Lexer;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::{BoxExt, BoxedParser};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            BinaryOp::Mul => left * right,
            BinaryOp::Div => left / right,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// Arithmetic expression tree; every node owns its children
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Operation {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn num(value: f64) -> Self {
        Expr::Num(value)
    }

    pub fn operation(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Operation {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Reduce the tree to a number. Division follows IEEE 754, so dividing
    /// by zero yields an infinity or NaN rather than an error.
    pub fn evaluate(&self) -> f64 {
        match self {
            Expr::Num(value) => *value,
            Expr::Operation { op, left, right } => op.apply(left.evaluate(), right.evaluate()),
        }
    }
}

/// Fully parenthesized rendering, e.g. `((3 - 2) - 1)`
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(value) => write!(f, "{}", value),
            Expr::Operation { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
        }
    }
}

/// Integer literal with an optional sign in front of it
///
/// The sign belongs to the literal rather than to the operator table, so
/// `1 - -2` is a subtraction of `-2`. Sign and digits are separate tokens.
pub fn signed_number<'code>(lexer: &Lexer) -> BoxedParser<'code, Expr> {
    let sign = lexer
        .token(lexer.literal('-'))
        .map(|_| -1.0)
        .or(lexer.token(lexer.literal('+')).map(|_| 1.0))
        .or_default_to(1.0);
    let integer = lexer.token(lexer.integer()).boxed();

    sign.bind(move |sign: f64| {
        integer
            .clone()
            .map(move |value| Expr::num(sign * value as f64))
    })
    .boxed()
}

fn binary(op: BinaryOp) -> impl Fn(Expr, Expr) -> Expr {
    move |left, right| Expr::operation(op, left, right)
}

/// `+ -` over `* /` over parenthesized expressions and signed integers
pub fn arithmetic<'code>(lexer: &Lexer) -> BoxedParser<'code, Expr> {
    expression(
        lexer,
        vec![
            PrecedenceLevel::new()
                .operator("+", binary(BinaryOp::Add))
                .operator("-", binary(BinaryOp::Sub)),
            PrecedenceLevel::new()
                .operator("*", binary(BinaryOp::Mul))
                .operator("/", binary(BinaryOp::Div)),
        ],
        vec![signed_number(lexer)],
    )
}

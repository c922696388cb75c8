use crate::and::AndExt;
use crate::ast::{Expr, arithmetic};
use crate::cursor::SourceCursor;
use crate::error::{FatalError, ReadablePosition};
use crate::lexer::Lexer;
use crate::maybe::Maybe;
use crate::parser::{BoxedParser, parse};
use crate::position::PositionExt;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("syntax error: no expression found")]
    Syntax,

    #[error("trailing input at {position}: {rest:?}")]
    TrailingInput {
        position: ReadablePosition,
        rest: String,
    },

    #[error(transparent)]
    Fatal(#[from] FatalError),
}

/// Reads one arithmetic expression, allowing surrounding whitespace and
/// comments, and evaluates it
pub struct Calculator {
    lexer: Lexer,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_lexer(Lexer::default())
    }

    /// Calculator reading its input with `lexer`. Later changes to the
    /// lexer's settings apply to this calculator as well.
    pub fn with_lexer(lexer: Lexer) -> Self {
        Calculator { lexer }
    }

    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    /// Parse `input` as a whole into a syntax tree
    pub fn parse<'code>(&self, input: &'code str) -> Result<Expr, CalcError> {
        let grammar: BoxedParser<'code, Expr> = arithmetic(&self.lexer);
        let parser = self.lexer.spaces().second(grammar.spanned());

        match parse(&parser, SourceCursor::new(input))? {
            Maybe::Absent => {
                tracing::debug!(input, "no expression found");
                Err(CalcError::Syntax)
            }
            Maybe::Present(((_, span), rest)) if !rest.is_at_end() => {
                let position = rest.location().readable_position();
                tracing::debug!(
                    parsed = span.as_str(),
                    %position,
                    rest = rest.rest(),
                    "trailing input"
                );
                Err(CalcError::TrailingInput {
                    position,
                    rest: rest.rest().to_string(),
                })
            }
            Maybe::Present(((expr, _), _)) => Ok(expr),
        }
    }

    pub fn evaluate(&self, input: &str) -> Result<f64, CalcError> {
        Ok(self.parse(input)?.evaluate())
    }
}

/// Evaluate `input` with default lexical settings
pub fn calculate(input: &str) -> Result<f64, CalcError> {
    Calculator::new().evaluate(input)
}

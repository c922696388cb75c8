use crate::cursor::SourceCursor;
use crate::maybe::Maybe;
use crate::parser::{ParseResult, Parser};

/// Parser that falls back to a value, without consuming input, when the inner
/// parser fails recoverably
pub struct DefaultParser<P, T> {
    parser: P,
    value: T,
}

impl<P, T> DefaultParser<P, T> {
    pub fn new(parser: P, value: T) -> Self {
        DefaultParser { parser, value }
    }
}

impl<'code, P, T> Parser<'code> for DefaultParser<P, T>
where
    P: Parser<'code, Output = T>,
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor)? {
            Maybe::Present(result) => Ok(Maybe::Present(result)),
            Maybe::Absent => Ok(Maybe::Present((self.value.clone(), cursor))),
        }
    }
}

/// Convenience function to create a default parser
pub fn default<'code, P, T>(parser: P, value: T) -> DefaultParser<P, T>
where
    P: Parser<'code, Output = T>,
    T: Clone,
{
    DefaultParser::new(parser, value)
}

/// Extension trait to add .or_default_to() method support for parsers
pub trait DefaultExt<'code>: Parser<'code> + Sized {
    fn or_default_to(self, value: Self::Output) -> DefaultParser<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        DefaultParser::new(self, value)
    }
}

impl<'code, P> DefaultExt<'code> for P where P: Parser<'code> {}

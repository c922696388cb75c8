use crate::cursor::SourceCursor;
use crate::maybe::Maybe;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser runs on the original cursor and only after a
/// recoverable failure of the first. A fatal error from the first parser is
/// propagated as is.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser1.parse(cursor)? {
            Maybe::Present(result) => Ok(Maybe::Present(result)),
            Maybe::Absent => self.parser2.parse(cursor),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

/// Ordered choice over a list of parsers; the first success wins
pub struct OrMany<P> {
    parsers: Vec<P>,
}

impl<P> OrMany<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        OrMany { parsers }
    }
}

impl<'code, P> Parser<'code> for OrMany<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        for parser in &self.parsers {
            if let Maybe::Present(result) = parser.parse(cursor)? {
                return Ok(Maybe::Present(result));
            }
        }
        Ok(Maybe::Absent)
    }
}

/// Convenience function to create an OrMany parser. An empty list never matches.
pub fn or_many<'code, P>(parsers: Vec<P>) -> OrMany<P>
where
    P: Parser<'code>,
{
    OrMany::new(parsers)
}

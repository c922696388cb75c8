use crate::cursor::SourceCursor;
use crate::maybe::Maybe;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Always succeeds. Stops at the first recoverable failure, after `limit`
/// matches, or when a match consumed no input (which would otherwise loop
/// forever). Fatal errors are propagated.
pub struct Repeat<P> {
    parser: P,
    limit: Option<usize>,
}

impl<P> Repeat<P> {
    pub fn new(parser: P, limit: Option<usize>) -> Self {
        Repeat { parser, limit }
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        while self.limit.is_none_or(|limit| results.len() < limit) {
            match self.parser.parse(cursor)? {
                Maybe::Present((value, next_cursor)) => {
                    let progressed = next_cursor.position() != cursor.position();
                    results.push(value);
                    cursor = next_cursor;
                    if !progressed {
                        break;
                    }
                }
                Maybe::Absent => break,
            }
        }

        Ok(Maybe::Present((results, cursor)))
    }
}

/// Convenience function to create an unbounded Repeat parser
pub fn many<'code, P>(parser: P) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, None)
}

/// Extension trait to add .repeat() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    /// As many matches as possible
    fn repeat(self) -> Repeat<Self> {
        Repeat::new(self, None)
    }

    /// At most `limit` matches
    fn repeat_at_most(self, limit: usize) -> Repeat<Self> {
        Repeat::new(self, Some(limit))
    }
}

impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}

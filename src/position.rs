use crate::cursor::SourceCursor;
use crate::error::{CodeLoc, ReadablePosition};
use crate::parser::{ParseResult, Parser};

/// Represents a span in the source code with start and end byte positions
/// and a reference to the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Reference to the source code
    pub source: &'code str,
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl<'code> Span<'code> {
    /// Create a new span
    pub fn new(source: &'code str, start: usize, end: usize) -> Self {
        Span { source, start, end }
    }

    /// Span from one cursor up to another over the same source
    pub fn between(from: SourceCursor<'code>, to: SourceCursor<'code>) -> Self {
        Span::new(from.source(), from.position(), to.position())
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The text this span covers
    pub fn as_str(&self) -> &'code str {
        &self.source[self.start..self.end]
    }

    pub fn start_position(&self) -> ReadablePosition {
        CodeLoc::new(self.source, self.start).readable_position()
    }
}

/// A parser combinator that captures the position span of a successful parse
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<'code, P> Parser<'code> for Position<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span<'code>);

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(self
            .parser
            .parse(cursor)?
            .map(|(output, next)| ((output, Span::between(cursor, next)), next)))
    }
}

/// Convenience function to create a Position parser
pub fn position<'code, P>(parser: P) -> Position<P>
where
    P: Parser<'code>,
{
    Position::new(parser)
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt<'code>: Parser<'code> + Sized {
    fn spanned(self) -> Position<Self> {
        Position::new(self)
    }
}

impl<'code, P> PositionExt<'code> for P where P: Parser<'code> {}

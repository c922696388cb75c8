use crate::cursor::SourceCursor;
use crate::many::Repeat;
use crate::maybe::Maybe;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches one or more occurrences of the given parser
pub struct AtLeastOne<P> {
    parser: P,
}

impl<P> AtLeastOne<P> {
    pub fn new(parser: P) -> Self {
        AtLeastOne { parser }
    }
}

impl<'code, P> Parser<'code> for AtLeastOne<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        let Maybe::Present((first_value, cursor)) = self.parser.parse(cursor)? else {
            return Ok(Maybe::Absent);
        };

        let rest = Repeat::new(&self.parser, None);
        Ok(rest.parse(cursor)?.map(|(mut values, cursor)| {
            values.insert(0, first_value);
            (values, cursor)
        }))
    }
}

/// Convenience function to create an AtLeastOne parser
pub fn some<'code, P>(parser: P) -> AtLeastOne<P>
where
    P: Parser<'code>,
{
    AtLeastOne::new(parser)
}

/// Extension trait to add .some() method support for parsers
pub trait SomeExt<'code>: Parser<'code> + Sized {
    fn some(self) -> AtLeastOne<Self> {
        AtLeastOne::new(self)
    }
}

impl<'code, P> SomeExt<'code> for P where P: Parser<'code> {}

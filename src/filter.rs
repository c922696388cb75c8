use crate::cursor::SourceCursor;
use crate::maybe::Maybe;
use crate::parser::{ParseResult, Parser};

/// Parser that keeps the output of another parser only if it satisfies a predicate
pub struct Matches<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> Matches<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<'code, P, F, T> Parser<'code> for Matches<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor)? {
            Maybe::Present((value, next)) if (self.predicate)(&value) => {
                Ok(Maybe::Present((value, next)))
            }
            _ => Ok(Maybe::Absent),
        }
    }
}

/// Extension trait to add .matches() method support for parsers
pub trait FilterExt<'code>: Parser<'code> {
    fn matches<F>(self, predicate: F) -> Matches<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        Matches::new(self, predicate)
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::raw::raw_character;
    use crate::primitive::error;

    #[test]
    fn test_matches_accepts() {
        let cursor = SourceCursor::new("hello");
        let parser = raw_character().matches(|c| *c == 'h');

        let (c, rest) = parser.parse(cursor).unwrap().unwrap();
        assert_eq!(c, 'h');
        assert!(rest.equals("ello"));
    }

    #[test]
    fn test_matches_rejects() {
        let parser = raw_character().matches(|c| *c == 'e');

        assert!(parser.parse(SourceCursor::new("hello")).unwrap().is_absent());
    }

    #[test]
    fn test_matches_at_end_of_input() {
        let parser = raw_character().matches(|_| true);

        assert!(parser.parse(SourceCursor::new("")).unwrap().is_absent());
    }

    #[test]
    fn test_matches_propagates_fatal() {
        let parser = error::<char>("stop").matches(|_| true);

        assert!(parser.parse(SourceCursor::new("x")).is_err());
    }
}

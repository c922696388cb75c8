use crate::cursor::SourceCursor;
use crate::maybe::Maybe;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.then()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. The nesting
/// is explicit about the parsing order.
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Then { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        let Maybe::Present((result1, cursor)) = self.parser1.parse(cursor)? else {
            return Ok(Maybe::Absent);
        };
        Ok(self
            .parser2
            .parse(cursor)?
            .map(|(result2, cursor)| ((result1, result2), cursor)))
    }
}

/// Runs both parsers, keeps the value of the first
pub struct First<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> First<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        First { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for First<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        let Maybe::Present((result1, cursor)) = self.parser1.parse(cursor)? else {
            return Ok(Maybe::Absent);
        };
        Ok(self.parser2.parse(cursor)?.map(|(_, cursor)| (result1, cursor)))
    }
}

/// Runs both parsers, keeps the value of the second
pub struct Second<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Second<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Second { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Second<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser1.parse(cursor)? {
            Maybe::Present((_, cursor)) => self.parser2.parse(cursor),
            Maybe::Absent => Ok(Maybe::Absent),
        }
    }
}

/// Extension trait to add .then(), .first() and .second() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        Then::new(self, other)
    }

    fn first<P>(self, other: P) -> First<Self, P>
    where
        P: Parser<'code>,
    {
        First::new(self, other)
    }

    fn second<P>(self, other: P) -> Second<Self, P>
    where
        P: Parser<'code>,
    {
        Second::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::BindExt;
    use crate::lexer::raw::{raw_character, raw_literal, raw_literal_sequence};
    use crate::map::MapExt;
    use crate::primitive::error;

    #[test]
    fn test_then_both_succeed() {
        let parser = raw_literal('A').then(raw_literal('5'));
        let ((a, five), rest) = parser.parse(SourceCursor::new("A5xyz")).unwrap().unwrap();

        assert_eq!(a, 'A');
        assert_eq!(five, '5');
        assert_eq!(rest.current(), Some('x'));
    }

    #[test]
    fn test_then_first_fails() {
        let parser = raw_literal('A').then(raw_literal('x'));

        assert!(parser.parse(SourceCursor::new("Bxyz")).unwrap().is_absent());
    }

    #[test]
    fn test_then_second_fails() {
        let parser = raw_literal('A').then(raw_literal('5'));

        assert!(parser.parse(SourceCursor::new("Axyz")).unwrap().is_absent());
    }

    #[test]
    fn test_then_chain() {
        let parser = raw_literal('A').then(raw_literal('5')).then(raw_literal('B'));
        let (((a, five), b), rest) = parser.parse(SourceCursor::new("A5B")).unwrap().unwrap();

        assert_eq!((a, five, b), ('A', '5', 'B'));
        assert!(rest.is_at_end());
    }

    #[test]
    fn test_first_discards_trailing() {
        let parser = raw_literal_sequence("let").first(raw_literal(' '));
        let (keyword, rest) = parser.parse(SourceCursor::new("let x")).unwrap().unwrap();

        assert_eq!(keyword, "let");
        assert!(rest.equals("x"));
    }

    #[test]
    fn test_second_discards_prefix() {
        let parser = raw_literal('(').second(raw_character());
        let (c, rest) = parser.parse(SourceCursor::new("(x)")).unwrap().unwrap();

        assert_eq!(c, 'x');
        assert!(rest.equals(")"));
    }

    #[test]
    fn test_second_skips_second_on_failure() {
        let parser = raw_literal('(').second(error::<char>("unreachable"));

        assert!(parser.parse(SourceCursor::new("x")).unwrap().is_absent());
    }

    #[test]
    fn test_then_first_second_agree() {
        let inputs = ["ab", "a", "b", "", "abc", "ba"];

        for input in inputs {
            let cursor = SourceCursor::new(input);
            let p = || raw_literal('a');
            let q = || raw_character();

            let pair = p().then(q()).parse(cursor).unwrap();
            let left = p().first(q()).parse(cursor).unwrap();
            let right = p().second(q()).parse(cursor).unwrap();

            match pair {
                Maybe::Present(((v, w), rest)) => {
                    let (left, left_rest) = left.unwrap();
                    let (right, right_rest) = right.unwrap();
                    assert_eq!(v, left, "first disagrees on {:?}", input);
                    assert_eq!(w, right, "second disagrees on {:?}", input);
                    assert_eq!(rest, left_rest);
                    assert_eq!(rest, right_rest);
                }
                Maybe::Absent => {
                    assert!(left.is_absent());
                    assert!(right.is_absent());
                }
            }
        }
    }

    #[test]
    fn test_then_matches_bind_definition() {
        let cursor = SourceCursor::new("xy!");
        let direct = raw_character().then(raw_character()).parse(cursor).unwrap();
        let via_bind = raw_character()
            .bind(|a| raw_character().map(move |b| (a, b)))
            .parse(cursor)
            .unwrap();

        assert_eq!(direct, via_bind);
    }
}

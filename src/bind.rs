use crate::cursor::SourceCursor;
use crate::maybe::Maybe;
use crate::parser::{ParseResult, Parser};

/// Monadic sequencing: the value of the first parser picks the parser that
/// runs next, on the cursor the first one left behind
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor)? {
            Maybe::Present((value, next)) => (self.binder)(value).parse(next),
            Maybe::Absent => Ok(Maybe::Absent),
        }
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, Q>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Bind::new(self, binder)
    }
}

impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::raw::{raw_character, raw_literal, raw_sequence};
    use crate::primitive::{fail, succeed};
    use std::cell::Cell;

    #[test]
    fn test_bind_uses_first_value() {
        // A digit says how many characters follow
        let parser = raw_character().bind(|c| raw_sequence(c.to_digit(10).unwrap_or(0) as usize));

        let (payload, rest) = parser.parse(SourceCursor::new("3abcdef")).unwrap().unwrap();
        assert_eq!(payload, "abc");
        assert!(rest.equals("def"));
    }

    #[test]
    fn test_bind_second_fails() {
        let parser = raw_literal('a').bind(|_| raw_literal('b'));

        assert!(parser.parse(SourceCursor::new("ax")).unwrap().is_absent());
    }

    #[test]
    fn test_bind_does_not_call_binder_on_failure() {
        let calls = Cell::new(0);
        let parser = fail::<char>().bind(|c| {
            calls.set(calls.get() + 1);
            succeed(c)
        });

        assert!(parser.parse(SourceCursor::new("abc")).unwrap().is_absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_bind_function_syntax() {
        let parser = bind(raw_literal('x'), |x| succeed((x, x)));
        let (pair, _) = parser.parse(SourceCursor::new("x")).unwrap().unwrap();

        assert_eq!(pair, ('x', 'x'));
    }
}

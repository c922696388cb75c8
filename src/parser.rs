use crate::cursor::SourceCursor;
use crate::error::FatalError;
use crate::maybe::Maybe;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

/// Result of running a parser.
///
/// `Ok(Maybe::Absent)` is a recoverable failure that alternatives may try to
/// repair. `Err` is a fatal failure that propagates through every combinator.
pub type ParseResult<'code, T> = Result<Maybe<(T, SourceCursor<'code>)>, FatalError>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// On success returns the value together with the cursor past the
    /// consumed input. A recoverable failure consumes nothing: callers keep
    /// using the cursor they passed in.
    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Run `parser` on `cursor`.
///
/// The returned cursor may still have input left; rejecting trailing input is
/// up to the caller.
pub fn parse<'code, P>(parser: &P, cursor: SourceCursor<'code>) -> ParseResult<'code, P::Output>
where
    P: Parser<'code> + ?Sized,
{
    parser.parse(cursor)
}

/// Parser backed by a plain function or closure
pub struct FnParser<F, T> {
    f: F,
    _phantom: PhantomData<fn() -> T>,
}

impl<F, T> FnParser<F, T> {
    pub fn new(f: F) -> Self {
        FnParser {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<'code, F, T> Parser<'code> for FnParser<F, T>
where
    F: Fn(SourceCursor<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.f)(cursor)
    }
}

/// Convenience function to lift a closure into a parser
pub fn from_fn<'code, F, T>(f: F) -> FnParser<F, T>
where
    F: Fn(SourceCursor<'code>) -> ParseResult<'code, T>,
{
    FnParser::new(f)
}

/// Type-erased, cheaply clonable parser
///
/// Needed wherever parsers of different concrete types share a slot: lists
/// of alternatives, operator tables, recursive grammars.
pub struct BoxedParser<'code, T> {
    parser: Rc<dyn Parser<'code, Output = T> + 'code>,
}

impl<T> Clone for BoxedParser<'_, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<'code, T> BoxedParser<'code, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = T> + 'code,
    {
        BoxedParser {
            parser: Rc::new(parser),
        }
    }
}

impl<'code, T> BoxedParser<'code, T> {
    /// Non-owning handle, for grammars that refer back to themselves
    pub fn downgrade(&self) -> WeakParser<'code, T> {
        WeakParser {
            parser: Rc::downgrade(&self.parser),
        }
    }
}

/// Non-owning counterpart of [`BoxedParser`]
pub struct WeakParser<'code, T> {
    parser: Weak<dyn Parser<'code, Output = T> + 'code>,
}

impl<T> Clone for WeakParser<'_, T> {
    fn clone(&self) -> Self {
        WeakParser {
            parser: Weak::clone(&self.parser),
        }
    }
}

impl<'code, T> WeakParser<'code, T> {
    pub fn upgrade(&self) -> Option<BoxedParser<'code, T>> {
        self.parser.upgrade().map(|parser| BoxedParser { parser })
    }
}

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        BoxedParser::new(self)
    }
}

/// Implement BoxExt for all parsers
impl<'code, P> BoxExt<'code> for P where P: Parser<'code> + 'code {}

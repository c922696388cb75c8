use crate::cursor::SourceCursor;
use crate::error::FatalError;
use crate::maybe::Maybe;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always succeeds with a clone of its value, consuming nothing
#[derive(Debug, Clone)]
pub struct Succeed<T> {
    value: T,
}

impl<T> Succeed<T> {
    pub fn new(value: T) -> Self {
        Succeed { value }
    }
}

impl<'code, T: Clone> Parser<'code> for Succeed<T> {
    type Output = T;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(Maybe::Present((self.value.clone(), cursor)))
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed::new(value)
}

/// Parser that always fails recoverably, consuming nothing
pub struct Fail<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new() -> Self {
        Fail {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Fail<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, _cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(Maybe::Absent)
    }
}

/// Convenience function to create a Fail parser
pub fn fail<T>() -> Fail<T> {
    Fail::new()
}

/// Parser that aborts the whole parse with a [`FatalError`]
pub struct ErrorParser<T> {
    message: Cow<'static, str>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> ErrorParser<T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        ErrorParser {
            message: message.into(),
            _phantom: PhantomData,
        }
    }
}

impl<'code, T> Parser<'code> for ErrorParser<T> {
    type Output = T;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        let error = FatalError::new(self.message.clone(), cursor.location());
        tracing::debug!(
            reason = %self.message,
            line = error.line(),
            column = error.column(),
            "fatal parse error"
        );
        Err(error)
    }
}

/// Convenience function to create an ErrorParser
pub fn error<T>(message: impl Into<Cow<'static, str>>) -> ErrorParser<T> {
    ErrorParser::new(message)
}

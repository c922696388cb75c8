//! Parsers over the raw character stream. They neither skip comments nor
//! whitespace and do not depend on any settings.

use crate::cursor::SourceCursor;
use crate::maybe::Maybe;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that consumes and returns a single character
pub struct RawCharacter;

impl<'code> Parser<'code> for RawCharacter {
    type Output = char;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(cursor.current().map(|c| (c, cursor.advance())).into())
    }
}

/// Convenience function to create a RawCharacter parser
pub fn raw_character() -> RawCharacter {
    RawCharacter
}

/// Parser that matches a specific character
pub struct RawLiteral {
    expected: char,
}

impl RawLiteral {
    pub fn new(expected: char) -> Self {
        RawLiteral { expected }
    }
}

impl<'code> Parser<'code> for RawLiteral {
    type Output = char;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.current() {
            Some(c) if c == self.expected => Ok(Maybe::Present((c, cursor.advance()))),
            _ => Ok(Maybe::Absent),
        }
    }
}

/// Convenience function to create a RawLiteral parser
pub fn raw_literal(expected: char) -> RawLiteral {
    RawLiteral::new(expected)
}

/// Parser that consumes exactly `count` characters
pub struct RawSequence {
    count: usize,
}

impl RawSequence {
    pub fn new(count: usize) -> Self {
        RawSequence { count }
    }
}

impl<'code> Parser<'code> for RawSequence {
    type Output = String;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        let text = cursor.peek(self.count);
        if text.chars().count() < self.count {
            return Ok(Maybe::Absent);
        }

        let mut next = cursor;
        for _ in 0..self.count {
            next = next.advance();
        }
        Ok(Maybe::Present((text.to_string(), next)))
    }
}

/// Convenience function to create a RawSequence parser
pub fn raw_sequence(count: usize) -> RawSequence {
    RawSequence::new(count)
}

/// Parser that matches an exact string, case-sensitively
pub struct RawLiteralSequence {
    expected: Cow<'static, str>,
}

impl RawLiteralSequence {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for RawLiteralSequence {
    type Output = String;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        if !cursor.starts_with(&self.expected) {
            return Ok(Maybe::Absent);
        }

        let mut next = cursor;
        for _ in self.expected.chars() {
            next = next.advance();
        }
        Ok(Maybe::Present((self.expected.to_string(), next)))
    }
}

/// Convenience function to create a RawLiteralSequence parser
pub fn raw_literal_sequence(expected: impl Into<Cow<'static, str>>) -> RawLiteralSequence {
    RawLiteralSequence::new(expected)
}

/// Parser that consumes one character unless the input at the cursor starts
/// with one of the markers
///
/// Used to read a comment body one character at a time while watching for
/// its terminator.
pub struct CharNotStartingAny {
    markers: Vec<String>,
}

impl CharNotStartingAny {
    pub fn new(markers: Vec<String>) -> Self {
        CharNotStartingAny { markers }
    }
}

impl<'code> Parser<'code> for CharNotStartingAny {
    type Output = char;

    fn parse(&self, cursor: SourceCursor<'code>) -> ParseResult<'code, Self::Output> {
        let at_marker = self
            .markers
            .iter()
            .any(|marker| !marker.is_empty() && cursor.starts_with(marker));
        if at_marker {
            return Ok(Maybe::Absent);
        }
        RawCharacter.parse(cursor)
    }
}

/// Convenience function to create a CharNotStartingAny parser
pub fn char_not_starting_any(markers: Vec<String>) -> CharNotStartingAny {
    CharNotStartingAny::new(markers)
}

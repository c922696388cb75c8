use super::Lexer;
use crate::cursor::SourceCursor;
use crate::error::FatalError;
use crate::filter::FilterExt;
use crate::map::MapExt;
use crate::maybe::Maybe;
use crate::parser::{BoxExt, BoxedParser, Parser, from_fn};
use crate::some::SomeExt;

impl Lexer {
    /// A specific character of the logical stream
    pub fn literal<'code>(&self, expected: char) -> BoxedParser<'code, char> {
        self.character().matches(move |c| *c == expected).boxed()
    }

    /// An exact string over the logical stream, case-sensitively
    pub fn literal_sequence<'code>(&self, expected: impl Into<String>) -> BoxedParser<'code, String> {
        self.sequence(expected.into(), true)
    }

    /// Matches `expected` character by character and yields the text as it
    /// appears in the input. Case folding is ASCII only.
    pub(crate) fn sequence<'code>(
        &self,
        expected: String,
        case_sensitive: bool,
    ) -> BoxedParser<'code, String> {
        let character = self.character();
        from_fn(move |cursor: SourceCursor<'code>| {
            let mut cursor = cursor;
            let mut matched = String::with_capacity(expected.len());

            for want in expected.chars() {
                match character.parse(cursor)? {
                    Maybe::Present((got, next))
                        if got == want || (!case_sensitive && got.eq_ignore_ascii_case(&want)) =>
                    {
                        matched.push(got);
                        cursor = next;
                    }
                    _ => return Ok(Maybe::Absent),
                }
            }

            Ok(Maybe::Present((matched, cursor)))
        })
        .boxed()
    }

    pub fn digit<'code>(&self) -> BoxedParser<'code, char> {
        self.character().matches(char::is_ascii_digit).boxed()
    }

    pub fn letter<'code>(&self) -> BoxedParser<'code, char> {
        self.character().matches(char::is_ascii_alphabetic).boxed()
    }

    pub fn alphanumeric<'code>(&self) -> BoxedParser<'code, char> {
        self.character().matches(char::is_ascii_alphanumeric).boxed()
    }

    /// One or more alphanumerics
    pub fn word<'code>(&self) -> BoxedParser<'code, String> {
        self.alphanumeric()
            .some()
            .map(|chars| chars.into_iter().collect::<String>())
            .boxed()
    }

    /// One or more digits read as a base-10 number
    ///
    /// A literal too large for `i64` is a fatal error: the digits are clearly
    /// meant as a number, no alternative could make sense of them.
    pub fn integer<'code>(&self) -> BoxedParser<'code, i64> {
        let digits = self.digit().some();
        from_fn(move |cursor: SourceCursor<'code>| {
            let Maybe::Present((digits, next)) = digits.parse(cursor)? else {
                return Ok(Maybe::Absent);
            };

            let text: String = digits.into_iter().collect();
            match text.parse::<i64>() {
                Ok(value) => Ok(Maybe::Present((value, next))),
                Err(_) => Err(FatalError::new(
                    format!("integer literal out of range: {}", text),
                    cursor.location(),
                )),
            }
        })
        .boxed()
    }
}

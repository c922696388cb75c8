use crate::error::CodeLoc;

/// Immutable position in a source text
///
/// A cursor borrows the text it walks over; advancing yields a new cursor and
/// leaves the original untouched, so saved cursors stay valid and can be used
/// to backtrack. Equality compares the remaining (unconsumed) text.
#[derive(Debug, Copy, Clone)]
pub struct SourceCursor<'code> {
    source: &'code str,
    /// Byte offset into `source`; always on a character boundary
    offset: usize,
}

impl<'code> SourceCursor<'code> {
    pub fn new(source: &'code str) -> Self {
        SourceCursor { source, offset: 0 }
    }

    /// The character at the cursor, or `None` at end of input
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// A cursor one character further along. At end of input the cursor is
    /// returned unchanged.
    pub fn advance(self) -> Self {
        match self.current() {
            Some(c) => SourceCursor {
                source: self.source,
                offset: self.offset + c.len_utf8(),
            },
            None => self,
        }
    }

    /// The next `n` characters without advancing, or whatever is left if
    /// fewer remain.
    pub fn peek(&self, n: usize) -> &'code str {
        let rest = self.rest();
        match rest.char_indices().nth(n) {
            Some((end, _)) => &rest[..end],
            None => rest,
        }
    }

    /// Number of characters left to consume
    pub fn remaining_length(&self) -> usize {
        self.rest().chars().count()
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// The unconsumed part of the source
    pub fn rest(&self) -> &'code str {
        &self.source[self.offset..]
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Compares the remaining content to `text`
    pub fn equals(&self, text: &str) -> bool {
        self.rest() == text
    }

    /// Byte offset into the source
    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn source(&self) -> &'code str {
        self.source
    }

    pub fn location(&self) -> CodeLoc<'code> {
        CodeLoc::new(self.source, self.offset)
    }
}

impl PartialEq for SourceCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.rest() == other.rest()
    }
}

impl Eq for SourceCursor<'_> {}

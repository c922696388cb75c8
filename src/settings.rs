use crate::parser::Parser;
use std::fmt;
use std::rc::Rc;

/// Whitespace parser usable with any source lifetime
pub type CustomSpace = Rc<dyn for<'code> Parser<'code, Output = String>>;

/// One entry of the whitespace table
#[derive(Clone)]
pub enum WhitespaceToken {
    /// Matched literally over the comment-transparent character stream
    Literal(String),
    /// Arbitrary sub-parser
    Custom(CustomSpace),
}

impl WhitespaceToken {
    pub fn literal(text: impl Into<String>) -> Self {
        WhitespaceToken::Literal(text.into())
    }

    pub fn custom<P>(parser: P) -> Self
    where
        P: for<'code> Parser<'code, Output = String> + 'static,
    {
        WhitespaceToken::Custom(Rc::new(parser))
    }
}

impl fmt::Debug for WhitespaceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WhitespaceToken::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            WhitespaceToken::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Lexical configuration read by the [`Lexer`](crate::lexer::Lexer) at parse time
#[derive(Debug, Clone)]
pub struct ParserSettings {
    /// Tried in order, first match wins
    pub whitespace: Vec<WhitespaceToken>,
    /// Markers that start a line comment
    pub line_comment: Vec<String>,
    /// Markers that end a line comment; the marker itself is not part of the comment
    pub line_comment_end: Vec<String>,
    /// Default case sensitivity of `accept`
    pub case_sensitive: bool,
}

impl Default for ParserSettings {
    fn default() -> Self {
        ParserSettings {
            whitespace: [" ", "\t", "\n", "\r"]
                .into_iter()
                .map(WhitespaceToken::literal)
                .collect(),
            line_comment: Vec::new(),
            line_comment_end: vec!["\n".to_string()],
            case_sensitive: true,
        }
    }
}

impl ParserSettings {
    pub fn with_whitespace(mut self, tokens: Vec<WhitespaceToken>) -> Self {
        self.whitespace = tokens;
        self
    }

    /// Adds a line comment start marker
    pub fn with_line_comment(mut self, marker: impl Into<String>) -> Self {
        self.line_comment.push(marker.into());
        self
    }

    pub fn with_line_comment_end(mut self, markers: Vec<String>) -> Self {
        self.line_comment_end = markers;
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

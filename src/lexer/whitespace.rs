use super::Lexer;
use crate::and::{AndExt, First};
use crate::lazy::lazy;
use crate::many::ManyExt;
use crate::or::or_many;
use crate::parser::{BoxExt, BoxedParser, Parser};
use crate::settings::WhitespaceToken;

impl Lexer {
    /// One whitespace token from the settings, tried in the configured order
    pub fn space<'code>(&self) -> BoxedParser<'code, String> {
        let lexer = self.clone();
        lazy(move || {
            let settings = lexer.settings();
            let tokens: Vec<BoxedParser<'code, String>> = settings
                .whitespace
                .iter()
                .map(|token| match token {
                    WhitespaceToken::Literal(text) => lexer.literal_sequence(text.clone()),
                    WhitespaceToken::Custom(parser) => BoxedParser::new(parser.clone()),
                })
                .collect();
            or_many(tokens)
        })
        .boxed()
    }

    /// Zero or more whitespace tokens, then any line comments left before the
    /// end of input
    pub fn spaces<'code>(&self) -> BoxedParser<'code, Vec<String>> {
        self.space()
            .repeat()
            .first(self.line_comment().repeat())
            .boxed()
    }

    /// `parser` followed by insignificant whitespace and comments, which are
    /// discarded
    pub fn token<'code, P>(&self, parser: P) -> First<P, BoxedParser<'code, Vec<String>>>
    where
        P: Parser<'code>,
    {
        parser.first(self.spaces())
    }
}

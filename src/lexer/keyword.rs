use super::Lexer;
use crate::default::DefaultExt;
use crate::lazy::lazy;
use crate::or::OrExt;
use crate::parser::{BoxExt, BoxedParser};
use crate::primitive::error;

impl Lexer {
    /// Tokenized keyword match using the case sensitivity configured at
    /// parse time. Yields the keyword as written in the input.
    pub fn accept<'code>(&self, keyword: impl Into<String>) -> BoxedParser<'code, String> {
        let keyword = keyword.into();
        let lexer = self.clone();
        lazy(move || {
            let case_sensitive = lexer.settings().case_sensitive;
            lexer.accept_with_case(keyword.clone(), case_sensitive)
        })
        .boxed()
    }

    /// Tokenized keyword match with explicit case sensitivity
    pub fn accept_with_case<'code>(
        &self,
        keyword: impl Into<String>,
        case_sensitive: bool,
    ) -> BoxedParser<'code, String> {
        self.token(self.sequence(keyword.into(), case_sensitive)).boxed()
    }

    /// Like [`accept`](Self::accept), but a missing keyword is a fatal
    /// `expected '<keyword>'` error
    pub fn require<'code>(&self, keyword: impl Into<String>) -> BoxedParser<'code, String> {
        let keyword = keyword.into();
        let message = format!("expected '{}'", keyword);
        self.accept(keyword).or(error(message)).boxed()
    }

    /// Optional keyword: yields an empty string when it is missing
    pub fn allow<'code>(&self, keyword: impl Into<String>) -> BoxedParser<'code, String> {
        self.accept(keyword).or_default_to(String::new()).boxed()
    }
}

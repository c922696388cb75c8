use super::Lexer;
use super::raw::{char_not_starting_any, raw_character, raw_literal_sequence};
use crate::and::AndExt;
use crate::lazy::lazy;
use crate::many::ManyExt;
use crate::map::MapExt;
use crate::or::or_many;
use crate::parser::{BoxExt, BoxedParser};

impl Lexer {
    /// One line comment: a configured start marker followed by everything up
    /// to, but not including, an end marker or the end of input. Yields the
    /// comment body.
    pub fn line_comment<'code>(&self) -> BoxedParser<'code, String> {
        let lexer = self.clone();
        lazy(move || {
            let settings = lexer.settings();
            let start = or_many(
                settings
                    .line_comment
                    .iter()
                    .map(|marker| raw_literal_sequence(marker.clone()))
                    .collect(),
            );
            let body = char_not_starting_any(settings.line_comment_end.clone()).repeat();
            start
                .second(body)
                .map(|chars| chars.into_iter().collect::<String>())
        })
        .boxed()
    }

    /// One character of the logical stream: line comments in front of it are
    /// skipped.
    pub fn character<'code>(&self) -> BoxedParser<'code, char> {
        self.line_comment().repeat().second(raw_character()).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::SourceCursor;
    use crate::parser::Parser;
    use crate::settings::ParserSettings;
    use pretty_assertions::assert_eq;

    fn logical_text(lexer: &Lexer, input: &str) -> String {
        let (chars, rest) = lexer
            .character()
            .repeat()
            .parse(SourceCursor::new(input))
            .unwrap()
            .unwrap();
        assert!(rest.is_at_end(), "left over: {:?}", rest.rest());
        chars.into_iter().collect()
    }

    fn slash_lexer() -> Lexer {
        Lexer::new(ParserSettings::default().with_line_comment("//"))
    }

    #[test]
    fn test_line_comment_body() {
        let lexer = slash_lexer();
        let (body, rest) = lexer
            .line_comment()
            .parse(SourceCursor::new("// hello\nnext"))
            .unwrap()
            .unwrap();

        assert_eq!(body, " hello");
        assert!(rest.equals("\nnext"));
    }

    #[test]
    fn test_line_comment_until_end_of_input() {
        let lexer = slash_lexer();
        let (body, rest) = lexer
            .line_comment()
            .parse(SourceCursor::new("//tail"))
            .unwrap()
            .unwrap();

        assert_eq!(body, "tail");
        assert!(rest.is_at_end());
    }

    #[test]
    fn test_no_markers_no_comments() {
        let lexer = Lexer::default();

        assert!(lexer.line_comment().parse(SourceCursor::new("// x")).unwrap().is_absent());
        assert_eq!(logical_text(&lexer, "a//b"), "a//b");
    }

    #[test]
    fn test_comments_are_transparent() {
        let lexer = slash_lexer();

        assert_eq!(logical_text(&lexer, "ab// comment\ncd"), "ab\ncd");
    }

    #[test]
    fn test_consecutive_comments() {
        let lexer = slash_lexer();

        assert_eq!(logical_text(&lexer, "ab// one\n// two\ncd"), "ab\n\ncd");
        assert_eq!(logical_text(&lexer, "ab//one//two\ncd"), "ab\ncd");
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let lexer = slash_lexer();

        let (chars, rest) = lexer
            .character()
            .repeat()
            .parse(SourceCursor::new("ab// trailing"))
            .unwrap()
            .unwrap();

        // No character follows the comment, so it stays for `spaces` to eat
        assert_eq!(chars, vec!['a', 'b']);
        assert!(rest.equals("// trailing"));
    }

    #[test]
    fn test_custom_comment_end() {
        let lexer = Lexer::new(
            ParserSettings::default()
                .with_line_comment("#")
                .with_line_comment_end(vec![";".to_string()]),
        );

        assert_eq!(logical_text(&lexer, "x#note;y"), "x;y");
    }

    #[test]
    fn test_multiple_comment_markers() {
        let lexer = Lexer::new(
            ParserSettings::default()
                .with_line_comment("//")
                .with_line_comment("--"),
        );

        assert_eq!(logical_text(&lexer, "1--a\n2//b\n3"), "1\n2\n3");
    }

    #[test]
    fn test_settings_are_read_at_parse_time() {
        let lexer = Lexer::default();
        let character = lexer.character();
        let cursor = SourceCursor::new("//x\ny");

        let (c, _) = character.parse(cursor).unwrap().unwrap();
        assert_eq!(c, '/');

        lexer.configure(|settings| settings.line_comment.push("//".to_string()));
        let (c, _) = character.parse(cursor).unwrap().unwrap();
        assert_eq!(c, '\n');
    }
}

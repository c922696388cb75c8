use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for ReadablePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A location inside a source text, kept together with the text so it can be
/// rendered for humans.
#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// Byte offset into `code`; always on a character boundary
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// One-based line and column (columns count characters, not bytes).
    pub fn readable_position(&self) -> ReadablePosition {
        let consumed = &self.code[..self.loc];
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map_or(0, |i| i + 1);
        let column = consumed[line_start..].chars().count() + 1;
        ReadablePosition { line, column }
    }

    /// Up to 2 lines before and after the error line, with a pointer under
    /// the error column.
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        // `split` keeps a trailing empty line, which is where an error right
        // after a final newline points
        for (index, content) in self.code.split('\n').enumerate() {
            let number = index + 1;
            if number < first {
                continue;
            }
            if number > last {
                break;
            }

            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == pos.line {
                let pointer_offset = prefix.len() + pos.column - 1;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

/// Unrecoverable parse failure.
///
/// Raised once a grammar has committed to a construct and backtracking is no
/// longer meaningful. Unlike [`Maybe::Absent`](crate::Maybe::Absent) it is
/// never swallowed by `or`, `or_many`, `repeat` or `default`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {position}")]
pub struct FatalError {
    message: Cow<'static, str>,
    position: ReadablePosition,
    offset: usize,
    context: Vec<String>,
}

impl FatalError {
    pub fn new(message: impl Into<Cow<'static, str>>, loc: CodeLoc<'_>) -> Self {
        Self {
            message: message.into(),
            position: loc.readable_position(),
            offset: loc.position(),
            context: loc.context_lines(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// Byte offset into the parsed source
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Multi-line rendering with the surrounding source and a pointer.
    pub fn report(&self) -> String {
        let mut out = format!("Syntax error at {}: {}\n\n", self.position, self.message);
        for line in &self.context {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

//! Parser error types.

use crate::lexer::{Span, Token};

use super::ParserConfig;

/// Distinguishes input that cannot be tokenized from input that does not
/// match the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown character or unterminated string. Never backtracked over.
    Lex,
    /// Expected-but-absent terminal or sub-rule. Alternation and optional
    /// treat it as a failed branch.
    Syntax,
}

/// A lexing or parsing error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {}", .span.start)]
pub struct ParseError {
    /// Whether the error is lexical or syntactic.
    pub kind: ErrorKind,
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// Expected construct (if applicable).
    pub expected: Option<String>,
    /// Description of the token actually found.
    pub found: Option<String>,
}

impl ParseError {
    /// Creates a lexical error.
    #[must_use]
    pub fn lex(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ErrorKind::Lex,
            message: message.into(),
            span,
            expected: None,
            found: None,
        }
    }

    /// Creates a syntax error with a free-form message.
    #[must_use]
    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            span,
            expected: None,
            found: None,
        }
    }

    /// Creates an "expected X, found Y" syntax error at `found`.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: &Token) -> Self {
        let expected: String = expected.into();
        let found_str = found.describe();
        Self {
            kind: ErrorKind::Syntax,
            message: format!("expected {expected}, found {found_str}"),
            span: found.span,
            expected: Some(expected),
            found: Some(found_str),
        }
    }

    /// Byte offset of the error in the source.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }

    /// Returns true for syntax errors, the only kind combinators recover from.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax)
    }

    /// Returns true for lexical errors.
    #[must_use]
    pub const fn is_lex(&self) -> bool {
        matches!(self.kind, ErrorKind::Lex)
    }

    /// Renders the error with a window of the source and a caret under the
    /// failing position:
    ///
    /// ```text
    /// expected FROM, found 'WHERE' at position 9
    ///  SELECT * WHERE a=1;
    ///  ---------^
    /// ```
    #[must_use]
    pub fn render(&self, source: &str, config: &ParserConfig) -> String {
        let mut pos = self.span.start.min(source.len());
        while !source.is_char_boundary(pos) {
            pos -= 1;
        }
        let (head, tail) = source.split_at(pos);

        let skipped = head.chars().count().saturating_sub(config.context_before);
        let prefix = if skipped > 0 { "..." } else { "" };
        let shown_head: String = head.chars().skip(skipped).map(flatten_whitespace).collect();
        let shown_tail: String = tail
            .chars()
            .take(config.context_after)
            .map(flatten_whitespace)
            .collect();

        let caret_offset = prefix.len() + shown_head.chars().count();
        format!(
            "{self}\n {prefix}{shown_head}{shown_tail}\n {}^",
            "-".repeat(caret_offset)
        )
    }
}

// Newlines and tabs would break caret alignment.
fn flatten_whitespace(c: char) -> char {
    if c.is_control() { ' ' } else { c }
}

/// Result type for lexing and parsing.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_display_includes_position() {
        let err = ParseError::syntax("expected statement", Span::new(4, 5));
        assert_eq!(err.to_string(), "expected statement at position 4");
    }

    #[test]
    fn test_unexpected_records_expected_and_found() {
        let tok = Token::new(TokenKind::Identifier, "tbl", Span::new(9, 12));
        let err = ParseError::unexpected("FROM", &tok);
        assert!(err.is_syntax());
        assert_eq!(err.expected.as_deref(), Some("FROM"));
        assert_eq!(err.found.as_deref(), Some("'tbl'"));
        assert_eq!(err.message, "expected FROM, found 'tbl'");
        assert_eq!(err.position(), 9);
    }

    #[test]
    fn test_render_short_input() {
        let sql = "SELECT * WHERE a=1;";
        let err = ParseError::syntax("expected FROM", Span::new(9, 14));
        let rendered = err.render(sql, &ParserConfig::default());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "expected FROM at position 9");
        assert_eq!(lines[1], " SELECT * WHERE a=1;");
        assert_eq!(lines[2], " ---------^");
    }

    #[test]
    fn test_render_truncates_long_prefix() {
        let sql = "SELECT first_column, second_column FROM tbl WHERE x ? 1;";
        let pos = sql.find('?').unwrap();
        let err = ParseError::lex("unknown token '?'", Span::new(pos, pos + 1));
        let config = ParserConfig::default().context_before(5).context_after(3);
        let rendered = err.render(sql, &config);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], " ...RE x ? 1");
        assert_eq!(lines[2], " --------^");
    }

    #[test]
    fn test_render_replaces_newlines() {
        let sql = "SELECT *\nFROM";
        let err = ParseError::syntax("expected table list", Span::at(sql.len()));
        let rendered = err.render(sql, &ParserConfig::default());
        assert_eq!(rendered.lines().nth(1), Some(" SELECT * FROM"));
        assert_eq!(rendered.lines().nth(2), Some(" -------------^"));
    }
}

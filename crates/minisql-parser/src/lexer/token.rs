//! Token types for the SQL lexer.

use super::Span;

/// Keywords of the supported SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Statements
    Select,
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,
    From,

    // Clauses
    Where,
    Group,
    By,
    Having,
    Order,
    Asc,
    Desc,
    Limit,
    Offset,

    // Conditions
    And,
    Or,
    In,

    // Aliases
    As,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "VALUES" => Some(Self::Values),
            "UPDATE" => Some(Self::Update),
            "SET" => Some(Self::Set),
            "DELETE" => Some(Self::Delete),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "GROUP" => Some(Self::Group),
            "BY" => Some(Self::By),
            "HAVING" => Some(Self::Having),
            "ORDER" => Some(Self::Order),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "LIMIT" => Some(Self::Limit),
            "OFFSET" => Some(Self::Offset),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "IN" => Some(Self::In),
            "AS" => Some(Self::As),
            _ => None,
        }
    }

    /// Returns the keyword as an uppercase string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Delete => "DELETE",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Order => "ORDER",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::And => "AND",
            Self::Or => "OR",
            Self::In => "IN",
            Self::As => "AS",
        }
    }
}

/// The kind of token.
///
/// The kind never carries the token text; that lives on [`Token`] so the
/// kind stays `Copy` and can be compared cheaply by the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// SQL keyword
    Keyword(Keyword),

    // Separators
    /// ;
    Semicolon,
    /// ,
    Comma,
    /// (
    LeftParen,
    /// )
    RightParen,

    // Operators
    /// =
    Eq,
    /// <
    Lt,
    /// >
    Gt,
    /// <=
    LtEq,
    /// >=
    GtEq,
    /// <>
    NotEq,
    /// *
    Star,

    // Literals
    /// Quoted string (e.g., 'hello' or "hello")
    String,
    /// Number (e.g., 42 or 3.14)
    Number,
    /// Identifier (e.g., column_name)
    Identifier,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns true for keyword tokens.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self, Self::Keyword(_))
    }

    /// Returns true for `;`, `,`, `(` and `)`.
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(
            self,
            Self::Semicolon | Self::Comma | Self::LeftParen | Self::RightParen
        )
    }

    /// Returns true for comparison operators and `*`.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(
            self,
            Self::Eq | Self::Lt | Self::Gt | Self::LtEq | Self::GtEq | Self::NotEq | Self::Star
        )
    }

    /// Returns true for string, number and identifier tokens.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::String | Self::Number | Self::Identifier)
    }

    /// Human readable description used in error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Keyword(kw) => kw.as_str(),
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::Eq => "'='",
            Self::Lt => "'<'",
            Self::Gt => "'>'",
            Self::LtEq => "'<='",
            Self::GtEq => "'>='",
            Self::NotEq => "'<>'",
            Self::Star => "'*'",
            Self::String => "string",
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::Eof => "end of input",
        }
    }
}

/// A token with its text and span in the source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// Uppercased for keywords, escape-decoded for strings, verbatim
    /// otherwise.
    pub text: String,
    /// The location in the source code, quotes included for strings.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Creates the end-of-input token at `pos`.
    #[must_use]
    pub const fn eof(pos: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
            span: Span::at(pos),
        }
    }

    /// Byte offset where the token starts.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Text shown for this token in diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => String::from("end of input"),
            TokenKind::String => format!("string '{}'", self.text),
            _ => format!("'{}'", self.text),
        }
    }
}

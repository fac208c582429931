//! SQL tokenizer implementation.

use super::{Keyword, Span, Token, TokenKind};
use crate::parser::{ParseError, Result};

/// A pull-based lexer: the grammar asks for one token at a time, and may
/// rewind the lexer to an earlier offset when it backtracks.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// The source being tokenized.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Byte offset the next scan starts from.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.pos
    }

    /// Moves the scan position back (or forward) to `offset`, which must be
    /// an offset previously returned by [`Lexer::offset`].
    pub fn seek(&mut self, offset: usize) {
        self.pos = offset;
        self.start = offset;
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips ASCII control characters and spaces.
    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| u32::from(c) < 33) {
            self.advance();
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token whose text is the scanned source slice.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, &self.input[self.start..self.pos], self.make_span())
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => Token::new(
                TokenKind::Keyword(keyword),
                keyword.as_str(),
                self.make_span(),
            ),
            None => self.make_token(TokenKind::Identifier),
        }
    }

    /// Scans a number: digits with at most one embedded `.`.
    fn scan_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // A trailing `.` without digits still belongs to the number.
        if self.peek() == Some('.') {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        self.make_token(TokenKind::Number)
    }

    /// Scans a string literal; the opening quote is already consumed.
    ///
    /// A backslash makes the following character literal and is itself
    /// dropped, so `'a\'b'` yields `a'b` and `'a\nb'` yields `anb`.
    fn scan_string(&mut self, quote: char) -> Result<Token> {
        let mut value = String::new();
        let mut closed = false;

        loop {
            match self.advance() {
                Some(c) if c == quote => {
                    closed = true;
                    break;
                }
                Some('\\') => match self.advance() {
                    Some(escaped) => value.push(escaped),
                    None => break,
                },
                Some(c) => value.push(c),
                None => break,
            }
        }

        if !closed {
            return Err(ParseError::lex(
                "unterminated string literal",
                self.make_span(),
            ));
        }

        Ok(Token::new(TokenKind::String, value, self.make_span()))
    }

    /// Scans the next token.
    ///
    /// # Errors
    ///
    /// Returns a lexical `ParseError` for an unterminated string or a
    /// character that cannot start any token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return Ok(Token::eof(self.pos));
        };

        let token = match c {
            '\'' | '"' => return self.scan_string(c),

            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                }
                Some('>') => {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                }
                _ => self.make_token(TokenKind::Lt),
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }

            // Single-character tokens
            ';' => self.make_token(TokenKind::Semicolon),
            ',' => self.make_token(TokenKind::Comma),
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '=' => self.make_token(TokenKind::Eq),
            '*' => self.make_token(TokenKind::Star),

            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier(),

            _ => {
                return Err(ParseError::lex(
                    format!("unknown token '{c}'"),
                    self.make_span(),
                ));
            }
        };

        Ok(token)
    }

    /// Tokenizes the remaining input, ending with the EOF token.
    ///
    /// # Errors
    ///
    /// Returns the first lexical error encountered.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

//! SQL Lexer/Tokenizer
//!
//! A hand-written, pull-based lexer: the grammar requests one token at a
//! time and rewinds the lexer when it backtracks.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;

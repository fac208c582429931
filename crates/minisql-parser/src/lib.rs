//! # minisql-parser
//!
//! A parser for a small SQL dialect: `SELECT`, `INSERT`, `UPDATE` and
//! `DELETE` with `WHERE`, `GROUP BY`, `HAVING`, `ORDER BY` and `LIMIT`.
//!
//! This crate provides:
//! - A pull-based lexer producing keyword, separator, operator and literal
//!   tokens
//! - Generic parser combinators (sequence, alternation, repetition,
//!   optional) with backtracking
//! - The SQL grammar built from those combinators
//! - Clean and Flatten passes that reduce the concrete syntax tree to a
//!   compact abstract one
//!
//! ## Parsing
//!
//! ```rust
//! use minisql_parser::{parse, RuleType};
//!
//! let root = parse("SELECT MIN(price) AS cheapest FROM items WHERE qty > 0;").unwrap();
//! assert_eq!(root.rule(), RuleType::Stmts);
//!
//! let select = &root.children()[0];
//! assert_eq!(select.rule(), RuleType::SelectStmt);
//!
//! let func = select.find(RuleType::Func).unwrap();
//! assert_eq!(func.text(), Some("MIN"));
//! assert_eq!(func.children()[0].rule(), RuleType::FieldName);
//! ```
//!
//! ## Diagnostics
//!
//! Errors carry the byte offset of the offending token and can render a
//! caret diagram of the surrounding source:
//!
//! ```rust
//! use minisql_parser::Parser;
//!
//! let parser = Parser::new();
//! let sql = "SELECT * WHERE a = 1;";
//! let err = parser.parse(sql).unwrap_err();
//! assert_eq!(err.message, "expected FROM, found 'WHERE'");
//! println!("{}", err.render(sql, parser.config()));
//! ```

pub mod lexer;
pub mod parser;
pub mod tree;

pub use lexer::{Keyword, Lexer, Span, Token, TokenKind};
pub use parser::{parse, ErrorKind, ParseError, Parser, ParserConfig};
pub use tree::{Dump, LiteralValue, Node, RuleType};

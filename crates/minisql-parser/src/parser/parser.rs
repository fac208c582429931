//! SQL Parser entry points.

use tracing::debug;

use super::combinator::{Cursor, Match};
use super::config::ParserConfig;
use super::error::{ParseError, Result};
use super::grammar;
use crate::tree::{normalize, Node};

/// SQL Parser.
///
/// Holds only configuration; every call to [`Parser::parse`] gets its own
/// lexer and backtracking state, so one parser can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser with the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: ParserConfig::new(),
        }
    }

    /// Creates a parser with the given configuration.
    #[must_use]
    pub const fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses `sql` into the normalized syntax tree.
    ///
    /// The root is a `stmts` node with one child per statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input cannot be tokenized or does not
    /// match the grammar.
    pub fn parse(&self, sql: &str) -> Result<Node> {
        let cst = self.parse_cst(sql)?;
        let ast = normalize(cst);
        debug!(statements = ast.children().len(), "Normalized syntax tree");
        Ok(ast)
    }

    /// Parses `sql` into the concrete syntax tree, before Clean and Flatten.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input cannot be tokenized or does not
    /// match the grammar.
    pub fn parse_cst(&self, sql: &str) -> Result<Node> {
        debug!(len = sql.len(), "Parsing SQL");
        let mut cursor = Cursor::new(sql)?;
        match grammar::stmts(&mut cursor) {
            Ok(Match::One(root)) => Ok(root),
            Ok(_) => Err(cursor.expected("statement")),
            Err(err) => {
                let err = self.pick_error(err, cursor.take_furthest());
                debug!(position = err.position(), error = %err, "Parse failed");
                Err(err)
            }
        }
    }

    /// Chooses between the error that ended the parse and the furthest one
    /// swallowed while backtracking.
    fn pick_error(&self, last: ParseError, furthest: Option<ParseError>) -> ParseError {
        match furthest {
            Some(furthest)
                if self.config.report_furthest_error
                    && last.is_syntax()
                    && furthest.position() > last.position() =>
            {
                furthest
            }
            _ => last,
        }
    }
}

/// Parses `sql` with the default configuration.
///
/// # Errors
///
/// Returns a `ParseError` if the input cannot be tokenized or does not match
/// the grammar.
pub fn parse(sql: &str) -> Result<Node> {
    Parser::new().parse(sql)
}

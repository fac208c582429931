//! # minisql-cli
//!
//! Command-line front-end for `minisql-parser`: reads SQL from an
//! argument, a file or standard input and prints the syntax tree, or a
//! diagnostic pointing at the first error.

pub mod cli;
pub mod error;

use std::io::Read;

use minisql_parser::{Node, Parser};
use tracing::{debug, info};

pub use cli::{Cli, OutputFormat};
pub use error::{CliError, Result};

/// Parses the input selected by `cli` and returns the printed tree.
///
/// # Errors
///
/// Returns an error if the input cannot be read, does not parse, or the
/// tree cannot be serialized.
pub fn run(cli: &Cli, stdin: impl Read) -> Result<String> {
    let sql = cli.read_input(stdin)?;
    let parser = Parser::with_config(cli.parser_config());
    debug!(cst = cli.cst, format = ?cli.format, "Parsing input");

    let parsed = if cli.cst {
        parser.parse_cst(&sql)
    } else {
        parser.parse(&sql)
    };
    let tree = parsed.map_err(|source| CliError::Parse {
        rendered: source.render(&sql, parser.config()),
        source,
    })?;

    info!(statements = statement_count(&tree, cli.cst), "Parsed SQL");
    format_tree(&tree, cli.format)
}

/// Prints `tree` in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_tree(tree: &Node, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => tree.to_json()?,
        OutputFormat::Pretty => tree.to_json_pretty()?,
        OutputFormat::Outline => tree.to_string().trim_end().to_owned(),
    })
}

/// The CST keeps a `;` terminal after every statement.
fn statement_count(tree: &Node, cst: bool) -> usize {
    if cst {
        tree.children().iter().filter(|c| !c.is_terminal()).count()
    } else {
        tree.children().len()
    }
}

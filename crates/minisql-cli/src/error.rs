//! Error types for the command-line front-end.

use std::path::PathBuf;

use minisql_parser::ParseError;

/// Errors that can occur while reading, parsing or printing SQL.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The SQL file could not be read.
    #[error("Failed to read '{}': {source}", .path.display())]
    ReadFile {
        /// Path given with `--file`.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Standard input could not be read.
    #[error("Failed to read standard input: {0}")]
    ReadStdin(#[source] std::io::Error),

    /// The input does not parse.
    #[error("{rendered}")]
    Parse {
        /// Diagnostic with a source excerpt and a caret.
        rendered: String,
        /// The parser error.
        source: ParseError,
    },

    /// The tree could not be serialized.
    #[error("Failed to serialize syntax tree: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

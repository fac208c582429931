//! Command-line arguments.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use minisql_parser::ParserConfig;

use crate::error::{CliError, Result};

/// Parse minisql statements and print their syntax tree.
#[derive(Debug, Parser)]
#[command(name = "minisql")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SQL text to parse (read from --file or stdin if omitted).
    #[arg(conflicts_with = "file")]
    pub sql: Option<String>,

    /// Read the SQL from a file.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the concrete syntax tree instead of the normalized one.
    #[arg(long)]
    pub cst: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Characters of source shown before an error position.
    #[arg(long, env = "MINISQL_CONTEXT_BEFORE", default_value_t = ParserConfig::DEFAULT_CONTEXT_BEFORE)]
    pub context_before: usize,

    /// Characters of source shown from an error position onwards.
    #[arg(long, env = "MINISQL_CONTEXT_AFTER", default_value_t = ParserConfig::DEFAULT_CONTEXT_AFTER)]
    pub context_after: usize,

    /// Report the error that ended the parse rather than the one that got
    /// furthest into the input.
    #[arg(long)]
    pub first_error: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the syntax tree is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line.
    Json,
    /// Indented JSON.
    Pretty,
    /// One node per line, indented by depth.
    Outline,
}

impl Cli {
    /// Parser configuration selected by the flags.
    #[must_use]
    pub const fn parser_config(&self) -> ParserConfig {
        ParserConfig::new()
            .context_before(self.context_before)
            .context_after(self.context_after)
            .report_furthest_error(!self.first_error)
    }

    /// The SQL to parse: the positional argument, the file, or `stdin`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or `stdin` cannot be read.
    pub fn read_input(&self, mut stdin: impl Read) -> Result<String> {
        if let Some(sql) = &self.sql {
            return Ok(sql.clone());
        }
        if let Some(path) = &self.file {
            return std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
                path: path.clone(),
                source,
            });
        }
        let mut sql = String::new();
        stdin
            .read_to_string(&mut sql)
            .map_err(CliError::ReadStdin)?;
        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("minisql").chain(args.iter().copied()))
            .unwrap_or_else(|e| panic!("Failed to parse args {args:?}: {e}"))
    }

    #[test]
    fn test_defaults() {
        let cli = cli(&["SELECT * FROM t;"]);
        assert_eq!(cli.sql.as_deref(), Some("SELECT * FROM t;"));
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(!cli.cst);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_config_from_flags() {
        let cli = cli(&[
            "--context-before",
            "3",
            "--context-after",
            "7",
            "--first-error",
            "x",
        ]);
        let config = cli.parser_config();
        assert_eq!(config.context_before, 3);
        assert_eq!(config.context_after, 7);
        assert!(!config.report_furthest_error);
    }

    #[test]
    fn test_format_values() {
        assert_eq!(cli(&["--format", "json", "x"]).format, OutputFormat::Json);
        assert_eq!(cli(&["--format", "outline", "x"]).format, OutputFormat::Outline);
        assert!(Cli::try_parse_from(["minisql", "--format", "yaml", "x"]).is_err());
    }

    #[test]
    fn test_sql_and_file_conflict() {
        assert!(Cli::try_parse_from(["minisql", "--file", "q.sql", "SELECT"]).is_err());
    }

    #[test]
    fn test_read_input_prefers_argument() {
        let cli = cli(&["SELECT a FROM b;"]);
        let sql = cli.read_input(&b"ignored"[..]).unwrap();
        assert_eq!(sql, "SELECT a FROM b;");
    }

    #[test]
    fn test_read_input_from_stdin() {
        let cli = cli(&[]);
        let sql = cli.read_input(&b"DELETE FROM t;\n"[..]).unwrap();
        assert_eq!(sql, "DELETE FROM t;\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let cli = cli(&["--file", "/nonexistent/minisql/query.sql"]);
        let err = cli.read_input(&b""[..]).unwrap_err();
        assert!(matches!(err, CliError::ReadFile { .. }));
    }
}

//! SQL Parser
//!
//! A backtracking parser built from the combinators in [`combinator`], with
//! one grammar function per production.

pub mod combinator;
mod config;
mod error;
mod grammar;
#[allow(clippy::module_inception)]
mod parser;

pub use config::ParserConfig;
pub use error::{ErrorKind, ParseError, Result};
pub use parser::{parse, Parser};

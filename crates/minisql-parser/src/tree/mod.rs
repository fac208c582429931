//! Syntax tree: the node model, its serializable dump, and the Clean and
//! Flatten passes that turn a CST into the final AST.

mod dump;
mod node;
mod normalize;

pub use dump::Dump;
pub use node::{Descendants, LiteralValue, Node, RuleType};
pub use normalize::{clean, flatten, normalize};

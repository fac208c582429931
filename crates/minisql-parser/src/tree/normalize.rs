//! Tree normalization: Clean and Flatten turn the concrete syntax tree into
//! the minimal AST handed to consumers.
//!
//! Both passes are idempotent: running them on an already normalized tree
//! returns an identical tree.

use crate::lexer::{Keyword, TokenKind};

use super::{Node, RuleType};

/// Keywords whose terminals survive Clean because consumers need them:
/// `IN` tells a membership condition from a comparison, `OFFSET` tells
/// `LIMIT n OFFSET m` from `LIMIT m, n`.
const KEPT_KEYWORDS: &[Keyword] = &[Keyword::In, Keyword::Offset];

/// Runs Clean followed by Flatten.
#[must_use]
pub fn normalize(mut root: Node) -> Node {
    clean(&mut root);
    flatten(root)
}

/// Removes keyword and separator terminals, pre-order.
///
/// Operator terminals, literal leaves and the keywords in the allow-list
/// are kept; every other node keeps its (recursively cleaned) children.
pub fn clean(node: &mut Node) {
    node.children.retain(|child| !is_noise(child));
    for child in &mut node.children {
        clean(child);
    }
}

fn is_noise(node: &Node) -> bool {
    if !node.terminal {
        return false;
    }
    node.token.as_ref().is_some_and(|tok| match tok.kind {
        TokenKind::Keyword(kw) => !KEPT_KEYWORDS.contains(&kw),
        kind => kind.is_separator(),
    })
}

/// Collapses wrapper rules into their payload, post-order.
///
/// - Name-like wrappers (`identifier`, `fieldName`, `tableName`,
///   `funcName`, `operator`, `alias`, `star`) are replaced by their only
///   child, which takes over the wrapper's rule tag.
/// - `value` is replaced by its child, which keeps its `string`/`number`
///   tag.
/// - `func` absorbs the token of its `funcName` child, leaving only the
///   argument as a child; `showField` does the same with its leading
///   identifier when it has an argument, and its remaining identifiers
///   are tagged `fieldName`.
/// - `columnValues` drops the `=` terminals between names and values.
#[must_use]
pub fn flatten(mut node: Node) -> Node {
    node.children = std::mem::take(&mut node.children)
        .into_iter()
        .map(flatten)
        .collect();

    if node.terminal {
        return node;
    }

    match node.rule {
        RuleType::Identifier
        | RuleType::FieldName
        | RuleType::TableName
        | RuleType::FuncName
        | RuleType::Operator
        | RuleType::Alias
        | RuleType::Star => collapse(node, true),
        RuleType::Value => collapse(node, false),
        RuleType::Func => hoist_name(node),
        RuleType::ShowField => flatten_show_field(node),
        RuleType::ColumnValues => {
            node.children.retain(|c| c.rule != RuleType::Terminal);
            node
        }
        _ => node,
    }
}

/// Replaces a single-child wrapper with its child.
fn collapse(mut node: Node, relabel: bool) -> Node {
    if node.children.len() != 1 {
        return node;
    }
    let Some(mut child) = node.children.pop() else {
        return node;
    };
    if relabel {
        child.rule = node.rule;
    }
    child
}

fn hoist_name(mut node: Node) -> Node {
    if let Some(idx) = node
        .children
        .iter()
        .position(|c| c.rule == RuleType::FuncName)
    {
        let name = node.children.remove(idx);
        node.token = name.token;
    }
    node
}

fn flatten_show_field(mut node: Node) -> Node {
    let is_call = node.token.is_none()
        && node.children.len() == 2
        && node.children[0].rule == RuleType::Identifier;
    if is_call {
        let name = node.children.remove(0);
        node.token = name.token;
    }
    for child in &mut node.children {
        if child.rule == RuleType::Identifier {
            child.rule = RuleType::FieldName;
        }
    }
    node
}

//! Syntax tree node types shared by the CST and the normalized AST.

use core::fmt;

use crate::lexer::{Span, Token};

use super::dump::Dump;

/// The production (or literal class) a node was built by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleType {
    // Statements
    Stmts,
    SelectStmt,
    InsertStmt,
    UpdateStmt,
    DeleteStmt,

    // SELECT parts
    SelectFieldList,
    SelectField,
    Star,
    Func,
    FuncName,
    Alias,
    SelectTableList,
    SelectTable,

    // Names
    FieldName,
    TableName,

    // Conditions
    Where,
    ConditionOr,
    ConditionAnd,
    Condition,
    Operator,
    Value,

    // Trailing clauses
    GroupBy,
    ShowField,
    Having,
    OrderBy,
    OrderByField,
    OrderByAsc,
    OrderByDesc,
    Limit,

    // Lists
    FieldList,
    ValueList,
    ColumnValues,

    // Leaves
    /// A matched keyword, separator or operator token.
    Terminal,
    Identifier,
    String,
    Number,
    Integer,
}

impl RuleType {
    /// The rule name as written in the grammar.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stmts => "stmts",
            Self::SelectStmt => "selectStmt",
            Self::InsertStmt => "insertStmt",
            Self::UpdateStmt => "updateStmt",
            Self::DeleteStmt => "deleteStmt",
            Self::SelectFieldList => "selectFieldList",
            Self::SelectField => "selectField",
            Self::Star => "star",
            Self::Func => "func",
            Self::FuncName => "funcName",
            Self::Alias => "alias",
            Self::SelectTableList => "selectTableList",
            Self::SelectTable => "selectTable",
            Self::FieldName => "fieldName",
            Self::TableName => "tableName",
            Self::Where => "where",
            Self::ConditionOr => "conditionOr",
            Self::ConditionAnd => "conditionAnd",
            Self::Condition => "condition",
            Self::Operator => "operator",
            Self::Value => "value",
            Self::GroupBy => "groupBy",
            Self::ShowField => "showField",
            Self::Having => "having",
            Self::OrderBy => "orderBy",
            Self::OrderByField => "orderByField",
            Self::OrderByAsc => "orderByAsc",
            Self::OrderByDesc => "orderByDesc",
            Self::Limit => "limit",
            Self::FieldList => "fieldList",
            Self::ValueList => "valueList",
            Self::ColumnValues => "columnValues",
            Self::Terminal => "terminal",
            Self::Identifier => "identifier",
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
        }
    }

    /// Returns true for the statement rules that can appear under `stmts`.
    #[must_use]
    pub const fn is_statement(&self) -> bool {
        matches!(
            self,
            Self::SelectStmt | Self::InsertStmt | Self::UpdateStmt | Self::DeleteStmt
        )
    }

    /// Returns true for the leaf kinds that carry a literal value.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::String | Self::Number | Self::Integer)
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed value of a `string`, `number` or `integer` leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// Escape-decoded string body.
    String(String),
    /// Number without a decimal point.
    Integer(i64),
    /// Number with a decimal point, or an integer too large for `i64`.
    Float(f64),
}

impl LiteralValue {
    /// Computes the value of a literal leaf from its token text.
    fn from_leaf(rule: RuleType, text: &str) -> Option<Self> {
        match rule {
            RuleType::String => Some(Self::String(text.to_owned())),
            RuleType::Number | RuleType::Integer => Self::parse_number(text),
            _ => None,
        }
    }

    fn parse_number(text: &str) -> Option<Self> {
        if !text.contains('.') {
            if let Ok(i) = text.parse::<i64>() {
                return Some(Self::Integer(i));
            }
        }
        text.parse::<f64>().ok().map(Self::Float)
    }

    /// Returns the string if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer value.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a float for any numeric value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::String(_) => None,
        }
    }
}

/// A node of the concrete or abstract syntax tree.
///
/// Nodes own their children; the tree is built bottom-up, so there is no
/// link back to the parent. A terminal node has no children and always
/// carries a token. A non-terminal has a token only once Flatten has
/// hoisted a name onto it (`func`, `showField`).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) rule: RuleType,
    pub(crate) children: Vec<Node>,
    pub(crate) token: Option<Token>,
    pub(crate) terminal: bool,
}

impl Node {
    /// Creates a non-terminal node.
    #[must_use]
    pub const fn branch(rule: RuleType, children: Vec<Self>) -> Self {
        Self {
            rule,
            children,
            token: None,
            terminal: false,
        }
    }

    /// Creates a terminal node for a matched token.
    #[must_use]
    pub const fn leaf(rule: RuleType, token: Token) -> Self {
        Self {
            rule,
            children: Vec::new(),
            token: Some(token),
            terminal: true,
        }
    }

    /// The rule this node was built by (or re-tagged to by Flatten).
    #[must_use]
    pub const fn rule(&self) -> RuleType {
        self.rule
    }

    /// Ordered children.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// The token of a terminal, or the hoisted name of a call node.
    #[must_use]
    pub const fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Returns true for leaf nodes.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The token text, if the node carries a token.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.text.as_str())
    }

    /// Source span covered by this node and all of its descendants.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        let own = self.token.as_ref().map(|t| t.span);
        self.children
            .iter()
            .filter_map(Self::span)
            .fold(own, |acc, s| Some(acc.map_or(s, |a| a.merge(s))))
    }

    /// Literal value of a `string`, `number` or `integer` leaf.
    ///
    /// Computed from the token text on each call; other nodes return `None`.
    #[must_use]
    pub fn value(&self) -> Option<LiteralValue> {
        if !self.terminal {
            return None;
        }
        LiteralValue::from_leaf(self.rule, self.text()?)
    }

    /// The first node (pre-order, starting with `self`) with the given rule.
    #[must_use]
    pub fn find(&self, rule: RuleType) -> Option<&Self> {
        self.descendants().find(|n| n.rule == rule)
    }

    /// All nodes (pre-order, starting with `self`) with the given rule.
    #[must_use]
    pub fn find_all(&self, rule: RuleType) -> Vec<&Self> {
        self.descendants().filter(|n| n.rule == rule).collect()
    }

    /// Pre-order iterator over `self` and every descendant.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Plain structure of the tree: rule names, token text and children.
    #[must_use]
    pub fn dump(&self) -> Dump {
        Dump {
            rule: self.rule.as_str(),
            text: self.text().map(str::to_owned),
            children: self.children.iter().map(Self::dump).collect(),
        }
    }

    /// The dump serialized as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.dump())
    }

    /// The dump serialized as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.dump())
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.rule, indent = depth * 2)?;
        if let Some(text) = self.text() {
            write!(f, " {text:?}")?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_outline(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented outline, one node per line.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

/// Pre-order traversal returned by [`Node::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

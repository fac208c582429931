#![allow(dead_code)]

use minisql_parser::{parse as parse_sql, Node, ParseError, Parser, RuleType};

pub fn parse(sql: &str) -> Node {
    parse_sql(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_cst(sql: &str) -> Node {
    Parser::new()
        .parse_cst(sql)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    parse_sql(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

/// The only statement of a single-statement input.
pub fn statement(sql: &str) -> Node {
    let root = parse(sql);
    assert_eq!(
        root.children().len(),
        1,
        "Expected exactly one statement in: {sql}"
    );
    root.children()[0].clone()
}

/// The first node with `rule`, pre-order.
pub fn find(node: &Node, rule: RuleType) -> Node {
    node.find(rule)
        .unwrap_or_else(|| panic!("No {rule} node in:\n{node}"))
        .clone()
}

/// Single-line shape of a tree, e.g. `condition(fieldName:id operator:= number:1)`.
pub fn dump_shape(node: &Node) -> String {
    node.dump().to_string()
}

/// Shape of the first `rule` node of the only statement in `sql`.
pub fn shape_of(sql: &str, rule: RuleType) -> String {
    dump_shape(&find(&statement(sql), rule))
}

//! Tests for the shape of the normalized tree.

mod common;
use common::*;
use minisql_parser::lexer::TokenKind;
use minisql_parser::tree::{clean, flatten, normalize};
use minisql_parser::{LiteralValue, Node, RuleType};

const CORPUS: &[&str] = &[
    "SELECT * FROM tbl;",
    "SELECT a, MIN(b) AS lo FROM t AS x, u WHERE a = 1 AND b IN (1, 'two') OR c <> 'x';",
    "SELECT cat, COUNT(*) FROM t GROUP BY cat HAVING cat > 'm' ORDER BY COUNT(*) DESC LIMIT 3 OFFSET 6;",
    "INSERT INTO tbl (a, b) VALUES (1, 'x');",
    "UPDATE tbl SET a = 1, b = 'y' WHERE id >= 7;",
    "DELETE FROM tbl WHERE id IN (1, 2, 3); SELECT a FROM b LIMIT 1, 2;",
];

fn assert_normalized(node: &Node) {
    for n in node.descendants() {
        assert_ne!(n.rule(), RuleType::Identifier, "identifier left in:\n{node}");
        assert_ne!(n.rule(), RuleType::Value, "value wrapper left in:\n{node}");
        if let Some(token) = n.token().filter(|_| n.is_terminal()) {
            assert!(!token.kind.is_separator(), "separator left in:\n{node}");
            if let TokenKind::Keyword(kw) = token.kind {
                assert!(
                    matches!(kw.as_str(), "IN" | "OFFSET"),
                    "keyword {kw:?} left in:\n{node}"
                );
            }
        }
    }
}

#[test]
fn tree_root_is_stmts() {
    for sql in CORPUS {
        let root = parse(sql);
        assert_eq!(root.rule(), RuleType::Stmts);
        assert!(root.children().iter().all(|c| c.rule().is_statement()));
    }
}

#[test]
fn tree_single_statement_has_one_child() {
    assert_eq!(parse("SELECT * FROM tbl;").children().len(), 1);
}

#[test]
fn tree_statements_in_source_order() {
    let root = parse("UPDATE a SET x = 1; DELETE FROM b; INSERT INTO c VALUES (1); SELECT * FROM d;");
    let rules: Vec<RuleType> = root.children().iter().map(Node::rule).collect();
    assert_eq!(
        rules,
        vec![
            RuleType::UpdateStmt,
            RuleType::DeleteStmt,
            RuleType::InsertStmt,
            RuleType::SelectStmt,
        ]
    );
}

#[test]
fn tree_normalized_invariants() {
    for sql in CORPUS {
        assert_normalized(&parse(sql));
    }
}

#[test]
fn tree_normalize_is_idempotent() {
    for sql in CORPUS {
        let once = parse(sql);
        let twice = normalize(once.clone());
        assert_eq!(once, twice, "normalize is not idempotent for: {sql}");
    }
}

#[test]
fn tree_passes_are_individually_idempotent() {
    for sql in CORPUS {
        let mut cleaned = parse_cst(sql);
        clean(&mut cleaned);
        let mut again = cleaned.clone();
        clean(&mut again);
        assert_eq!(cleaned, again);

        let flat = flatten(cleaned);
        assert_eq!(flatten(flat.clone()), flat);
    }
}

#[test]
fn tree_cst_normalizes_to_ast() {
    for sql in CORPUS {
        assert_eq!(normalize(parse_cst(sql)), parse(sql));
    }
}

#[test]
fn tree_string_escapes_are_decoded() {
    let stmt = statement(r"SELECT * FROM t WHERE a = 'a\'b';");
    let s = find(&stmt, RuleType::String);
    assert_eq!(s.text(), Some("a'b"));
    assert_eq!(s.value(), Some(LiteralValue::String("a'b".to_owned())));
}

#[test]
fn tree_number_literals_are_verbatim() {
    let stmt = statement("SELECT * FROM t WHERE a IN (007, 1.50, 3.);");
    let list = find(&stmt, RuleType::ValueList);
    let texts: Vec<&str> = list
        .children()
        .iter()
        .filter_map(Node::text)
        .collect();
    assert_eq!(texts, vec!["007", "1.50", "3."]);
}

#[test]
fn tree_number_values() {
    let stmt = statement("SELECT * FROM t WHERE a IN (42, 0.5) LIMIT 9;");
    let values: Vec<Option<LiteralValue>> = stmt
        .find_all(RuleType::Number)
        .into_iter()
        .map(Node::value)
        .collect();
    assert_eq!(
        values,
        vec![Some(LiteralValue::Integer(42)), Some(LiteralValue::Float(0.5))]
    );
    assert_eq!(
        find(&stmt, RuleType::Integer).value(),
        Some(LiteralValue::Integer(9))
    );
}

#[test]
fn tree_spans_point_into_source() {
    let sql = "SELECT name FROM users;";
    let field = find(&statement(sql), RuleType::FieldName);
    let span = field.span().unwrap();
    assert_eq!(span.slice(sql), Some("name"));
}

#[test]
fn tree_json_dump() {
    let root = parse("SELECT MIN(*) FROM tbl;");
    let json: serde_json::Value = serde_json::from_str(&root.to_json().unwrap()).unwrap();
    let func = &json["children"][0]["children"][0]["children"][0]["children"][0];
    assert_eq!(func["rule"], "func");
    assert_eq!(func["text"], "MIN");
    assert_eq!(func["children"][0]["rule"], "star");
}

#[test]
fn tree_outline_display() {
    let root = parse("DELETE FROM t WHERE id = 1;");
    let outline = root.to_string();
    assert!(outline.starts_with("stmts\n  deleteStmt\n    tableName \"t\"\n"));
    assert!(outline.contains("\n            operator \"=\"\n"));
}

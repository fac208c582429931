//! Tests for SELECT statements.

mod common;
use common::*;
use minisql_parser::RuleType;

#[test]
fn select_star() {
    assert_eq!(
        dump_shape(&statement("SELECT * FROM tbl;")),
        "selectStmt(selectFieldList(selectField(star:*)) \
         selectTableList(selectTable(tableName:tbl)))"
    );
}

#[test]
fn select_columns_and_tables() {
    let stmt = statement("SELECT a, b AS bee FROM t1, t2 AS other;");
    assert_eq!(
        dump_shape(&find(&stmt, RuleType::SelectFieldList)),
        "selectFieldList(selectField(fieldName:a) selectField(fieldName:b alias:bee))"
    );
    assert_eq!(
        dump_shape(&find(&stmt, RuleType::SelectTableList)),
        "selectTableList(selectTable(tableName:t1) selectTable(tableName:t2 alias:other))"
    );
}

#[test]
fn select_func_with_star() {
    let func = find(&statement("SELECT MIN(*) FROM tbl;"), RuleType::Func);
    assert_eq!(func.text(), Some("MIN"));
    assert_eq!(func.children().len(), 1);
    assert_eq!(func.children()[0].rule(), RuleType::Star);
}

#[test]
fn select_func_with_field_and_alias() {
    assert_eq!(
        shape_of(
            "SELECT COUNT(id) AS total FROM tbl;",
            RuleType::SelectField
        ),
        "selectField(func:COUNT(fieldName:id) alias:total)"
    );
}

#[test]
fn select_where_comparison() {
    assert_eq!(
        shape_of("SELECT * FROM t WHERE price <= 9.5;", RuleType::Where),
        "where(conditionOr(conditionAnd(condition(fieldName:price operator:<= number:9.5))))"
    );
}

#[test]
fn select_group_by_having() {
    let stmt = statement(
        "SELECT category, MAX(price) FROM items GROUP BY category, MAX(price) HAVING category <> 'misc';",
    );
    assert_eq!(
        dump_shape(&find(&stmt, RuleType::GroupBy)),
        "groupBy(showField(fieldName:category) showField:MAX(fieldName:price))"
    );
    assert_eq!(
        dump_shape(&find(&stmt, RuleType::Having)),
        "having(conditionOr(conditionAnd(condition(fieldName:category operator:<> string:misc))))"
    );
}

#[test]
fn select_order_by() {
    assert_eq!(
        shape_of(
            "SELECT * FROM t ORDER BY created DESC, name ASC, id;",
            RuleType::OrderBy
        ),
        "orderBy(orderByField(showField(fieldName:created) orderByDesc) \
         orderByField(showField(fieldName:name) orderByAsc) \
         orderByField(showField(fieldName:id)))"
    );
}

#[test]
fn select_order_by_count_star() {
    assert_eq!(
        shape_of("SELECT * FROM t ORDER BY COUNT(*) DESC;", RuleType::OrderByField),
        "orderByField(showField:COUNT(star:*) orderByDesc)"
    );
}

#[test]
fn select_limit() {
    assert_eq!(
        shape_of("SELECT * FROM t LIMIT 10;", RuleType::Limit),
        "limit(integer:10)"
    );
}

#[test]
fn select_limit_offset_forms() {
    assert_eq!(
        shape_of("SELECT * FROM t LIMIT 10 OFFSET 20;", RuleType::Limit),
        "limit(integer:10 terminal:OFFSET integer:20)"
    );
    assert_eq!(
        shape_of("SELECT * FROM t LIMIT 20, 10;", RuleType::Limit),
        "limit(integer:20 integer:10)"
    );
}

#[test]
fn select_all_clauses() {
    let stmt = statement(
        "SELECT name, COUNT(id) AS n FROM users AS u \
         WHERE age >= 18 AND country IN ('NL', 'BE') \
         GROUP BY name HAVING n > 1 ORDER BY name LIMIT 5;",
    );
    let clauses: Vec<RuleType> = stmt.children().iter().map(|c| c.rule()).collect();
    assert_eq!(
        clauses,
        vec![
            RuleType::SelectFieldList,
            RuleType::SelectTableList,
            RuleType::Where,
            RuleType::GroupBy,
            RuleType::Having,
            RuleType::OrderBy,
            RuleType::Limit,
        ]
    );
}

#[test]
fn select_keywords_are_case_insensitive() {
    let upper = parse("SELECT a FROM t WHERE b = 1 ORDER BY a DESC LIMIT 3;");
    let lower = parse("select a from t where b = 1 order by a desc limit 3;");
    let mixed = parse("SeLeCt a FrOm t WhErE b = 1 OrDeR bY a DeSc LiMiT 3;");
    assert_eq!(dump_shape(&upper), dump_shape(&lower));
    assert_eq!(dump_shape(&upper), dump_shape(&mixed));
}

#[test]
fn select_identifier_case_is_preserved() {
    let stmt = statement("SELECT UserName FROM Accounts;");
    assert_eq!(find(&stmt, RuleType::FieldName).text(), Some("UserName"));
    assert_eq!(find(&stmt, RuleType::TableName).text(), Some("Accounts"));
}

#[test]
fn select_whitespace_is_insignificant() {
    let compact = parse("SELECT a,b FROM t WHERE a=1;");
    let spread = parse("SELECT\n\ta ,\n b\r\nFROM   t\nWHERE a\t=\t1\n;\n");
    assert_eq!(dump_shape(&compact), dump_shape(&spread));
}

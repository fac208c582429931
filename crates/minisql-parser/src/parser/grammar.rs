//! The SQL grammar, one function per production.
//!
//! ```text
//! stmts           = stmt ';' { stmt ';' } EOF
//! stmt            = selectStmt | updateStmt | insertStmt | deleteStmt
//! selectStmt      = SELECT selectFieldList FROM selectTableList
//!                   [where] [groupBy] [having] [orderBy] [limit]
//! insertStmt      = INSERT INTO tableName ['(' fieldList ')']
//!                   VALUES '(' valueList ')'
//! updateStmt      = UPDATE tableName SET columnValues [where]
//! deleteStmt      = DELETE FROM tableName [where]
//! selectFieldList = selectField { ',' selectField }
//! selectField     = (func | fieldName) [alias] | star
//! func            = funcName '(' (fieldName | star) ')'
//! alias           = AS identifier
//! selectTableList = selectTable { ',' selectTable }
//! selectTable     = tableName [alias]
//! where           = WHERE conditionOr
//! conditionOr     = conditionAnd { OR conditionAnd }
//! conditionAnd    = condition { AND condition }
//! condition       = fieldName operator value
//!                 | fieldName IN '(' valueList ')'
//! operator        = '<>' | '<=' | '>=' | '<' | '>' | '='
//! value           = string | number
//! groupBy         = GROUP BY showField { ',' showField }
//! showField       = identifier [ '(' (identifier | star) ')' ]
//! having          = HAVING conditionOr
//! orderBy         = ORDER BY orderByField { ',' orderByField }
//! orderByField    = showField [ASC | DESC]
//! limit           = LIMIT integer [(',' | OFFSET) integer]
//! fieldList       = fieldName { ',' fieldName }
//! valueList       = value { ',' value }
//! columnValues    = fieldName '=' value { ',' fieldName '=' value }
//! ```
//!
//! Keywords are matched with [`terminal`] where they decide between
//! alternatives and with [`expect`] once the statement is committed.

use crate::lexer::{Keyword, TokenKind};
use crate::tree::RuleType;

use super::combinator::{
    alternation, expect, leaf, optional, repetition, required, rule, sequence, terminal, Cursor,
    Outcome, Rule,
};

const fn kw(keyword: Keyword) -> TokenKind {
    TokenKind::Keyword(keyword)
}

/// `item { ',' item }` wrapped into a `rule_type` node.
fn comma_list(
    cursor: &mut Cursor<'_>,
    rule_type: RuleType,
    what: &'static str,
    item: Rule<'_>,
) -> Outcome {
    rule(
        rule_type,
        &sequence(&[
            item,
            &optional(&repetition(
                what,
                &sequence(&[&terminal(TokenKind::Comma), &required(what, item)]),
            )),
        ]),
    )(cursor)
}

/// Entry rule: one or more `;`-terminated statements, then end of input.
pub(super) fn stmts(cursor: &mut Cursor<'_>) -> Outcome {
    let found = rule(
        RuleType::Stmts,
        &repetition(
            "statement",
            &sequence(&[&statement, &expect(TokenKind::Semicolon)]),
        ),
    )(cursor)?;
    if !cursor.is_at_end() {
        return Err(cursor.expected("statement"));
    }
    Ok(found)
}

fn statement(cursor: &mut Cursor<'_>) -> Outcome {
    alternation(&[&select_stmt, &update_stmt, &insert_stmt, &delete_stmt])(cursor)
}

fn select_stmt(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::SelectStmt,
        &sequence(&[
            &terminal(kw(Keyword::Select)),
            &required("field list", &select_field_list),
            &expect(kw(Keyword::From)),
            &required("table list", &select_table_list),
            &optional(&where_clause),
            &optional(&group_by),
            &optional(&having),
            &optional(&order_by),
            &optional(&limit),
        ]),
    )(cursor)
}

fn insert_stmt(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::InsertStmt,
        &sequence(&[
            &terminal(kw(Keyword::Insert)),
            &expect(kw(Keyword::Into)),
            &required("table name", &table_name),
            &optional(&sequence(&[
                &terminal(TokenKind::LeftParen),
                &required("field list", &field_list),
                &expect(TokenKind::RightParen),
            ])),
            &expect(kw(Keyword::Values)),
            &expect(TokenKind::LeftParen),
            &required("value list", &value_list),
            &expect(TokenKind::RightParen),
        ]),
    )(cursor)
}

fn update_stmt(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::UpdateStmt,
        &sequence(&[
            &terminal(kw(Keyword::Update)),
            &required("table name", &table_name),
            &expect(kw(Keyword::Set)),
            &required("column assignment", &column_values),
            &optional(&where_clause),
        ]),
    )(cursor)
}

fn delete_stmt(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::DeleteStmt,
        &sequence(&[
            &terminal(kw(Keyword::Delete)),
            &expect(kw(Keyword::From)),
            &required("table name", &table_name),
            &optional(&where_clause),
        ]),
    )(cursor)
}

fn select_field_list(cursor: &mut Cursor<'_>) -> Outcome {
    comma_list(cursor, RuleType::SelectFieldList, "field", &select_field)
}

fn select_field(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::SelectField,
        &alternation(&[
            &sequence(&[&alternation(&[&func, &field_name]), &optional(&alias)]),
            &star,
        ]),
    )(cursor)
}

fn func(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::Func,
        &sequence(&[
            &func_name,
            &terminal(TokenKind::LeftParen),
            &required("field name or '*'", &alternation(&[&field_name, &star])),
            &expect(TokenKind::RightParen),
        ]),
    )(cursor)
}

fn alias(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::Alias,
        &sequence(&[
            &terminal(kw(Keyword::As)),
            &required("alias name", &identifier),
        ]),
    )(cursor)
}

fn star(cursor: &mut Cursor<'_>) -> Outcome {
    rule(RuleType::Star, &terminal(TokenKind::Star))(cursor)
}

fn select_table_list(cursor: &mut Cursor<'_>) -> Outcome {
    comma_list(cursor, RuleType::SelectTableList, "table", &select_table)
}

fn select_table(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::SelectTable,
        &sequence(&[&table_name, &optional(&alias)]),
    )(cursor)
}

fn where_clause(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::Where,
        &sequence(&[
            &terminal(kw(Keyword::Where)),
            &required("condition", &condition_or),
        ]),
    )(cursor)
}

fn condition_or(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::ConditionOr,
        &sequence(&[
            &condition_and,
            &optional(&repetition(
                "condition",
                &sequence(&[
                    &terminal(kw(Keyword::Or)),
                    &required("condition", &condition_and),
                ]),
            )),
        ]),
    )(cursor)
}

fn condition_and(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::ConditionAnd,
        &sequence(&[
            &condition,
            &optional(&repetition(
                "condition",
                &sequence(&[
                    &terminal(kw(Keyword::And)),
                    &required("condition", &condition),
                ]),
            )),
        ]),
    )(cursor)
}

fn condition(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::Condition,
        &alternation(&[
            &sequence(&[&field_name, &operator, &required("value", &value)]),
            &sequence(&[
                &field_name,
                &terminal(kw(Keyword::In)),
                &expect(TokenKind::LeftParen),
                &required("value list", &value_list),
                &expect(TokenKind::RightParen),
            ]),
        ]),
    )(cursor)
}

fn operator(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::Operator,
        &alternation(&[
            &terminal(TokenKind::NotEq),
            &terminal(TokenKind::LtEq),
            &terminal(TokenKind::GtEq),
            &terminal(TokenKind::Lt),
            &terminal(TokenKind::Gt),
            &terminal(TokenKind::Eq),
        ]),
    )(cursor)
}

fn value(cursor: &mut Cursor<'_>) -> Outcome {
    rule(RuleType::Value, &alternation(&[&string, &number]))(cursor)
}

fn group_by(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::GroupBy,
        &sequence(&[
            &terminal(kw(Keyword::Group)),
            &expect(kw(Keyword::By)),
            &required("field", &show_field),
            &optional(&repetition(
                "field",
                &sequence(&[
                    &terminal(TokenKind::Comma),
                    &required("field", &show_field),
                ]),
            )),
        ]),
    )(cursor)
}

fn show_field(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::ShowField,
        &sequence(&[
            &identifier,
            &optional(&sequence(&[
                &terminal(TokenKind::LeftParen),
                &required("field name or '*'", &alternation(&[&identifier, &star])),
                &expect(TokenKind::RightParen),
            ])),
        ]),
    )(cursor)
}

fn having(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::Having,
        &sequence(&[
            &terminal(kw(Keyword::Having)),
            &required("condition", &condition_or),
        ]),
    )(cursor)
}

fn order_by(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::OrderBy,
        &sequence(&[
            &terminal(kw(Keyword::Order)),
            &expect(kw(Keyword::By)),
            &required("field", &order_by_field),
            &optional(&repetition(
                "field",
                &sequence(&[
                    &terminal(TokenKind::Comma),
                    &required("field", &order_by_field),
                ]),
            )),
        ]),
    )(cursor)
}

fn order_by_field(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::OrderByField,
        &sequence(&[
            &show_field,
            &optional(&alternation(&[
                &rule(RuleType::OrderByAsc, &terminal(kw(Keyword::Asc))),
                &rule(RuleType::OrderByDesc, &terminal(kw(Keyword::Desc))),
            ])),
        ]),
    )(cursor)
}

fn limit(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::Limit,
        &sequence(&[
            &terminal(kw(Keyword::Limit)),
            &required("integer", &integer),
            &optional(&sequence(&[
                &alternation(&[
                    &terminal(TokenKind::Comma),
                    &terminal(kw(Keyword::Offset)),
                ]),
                &required("integer", &integer),
            ])),
        ]),
    )(cursor)
}

fn field_list(cursor: &mut Cursor<'_>) -> Outcome {
    comma_list(cursor, RuleType::FieldList, "field name", &field_name)
}

fn value_list(cursor: &mut Cursor<'_>) -> Outcome {
    comma_list(cursor, RuleType::ValueList, "value", &value)
}

fn column_values(cursor: &mut Cursor<'_>) -> Outcome {
    rule(
        RuleType::ColumnValues,
        &sequence(&[
            &field_name,
            &expect(TokenKind::Eq),
            &required("value", &value),
            &optional(&repetition(
                "column assignment",
                &sequence(&[
                    &terminal(TokenKind::Comma),
                    &required("field name", &field_name),
                    &expect(TokenKind::Eq),
                    &required("value", &value),
                ]),
            )),
        ]),
    )(cursor)
}

fn field_name(cursor: &mut Cursor<'_>) -> Outcome {
    rule(RuleType::FieldName, &identifier)(cursor)
}

fn table_name(cursor: &mut Cursor<'_>) -> Outcome {
    rule(RuleType::TableName, &identifier)(cursor)
}

fn func_name(cursor: &mut Cursor<'_>) -> Outcome {
    rule(RuleType::FuncName, &identifier)(cursor)
}

fn identifier(cursor: &mut Cursor<'_>) -> Outcome {
    leaf(cursor, RuleType::Identifier, |t| t.kind == TokenKind::Identifier)
}

fn string(cursor: &mut Cursor<'_>) -> Outcome {
    leaf(cursor, RuleType::String, |t| t.kind == TokenKind::String)
}

fn number(cursor: &mut Cursor<'_>) -> Outcome {
    leaf(cursor, RuleType::Number, |t| t.kind == TokenKind::Number)
}

/// A number without a decimal point.
fn integer(cursor: &mut Cursor<'_>) -> Outcome {
    leaf(cursor, RuleType::Integer, |t| {
        t.kind == TokenKind::Number && !t.text.contains('.')
    })
}

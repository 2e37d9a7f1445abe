#![allow(dead_code)]

use sqlparse_core::ast::{Select, Statement};
use sqlparse_core::SqlError;

pub fn parse(sql: &str) -> Statement {
    sqlparse_core::parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> SqlError {
    sqlparse_core::parse(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> Select {
    match parse(sql) {
        Statement::Select(s) => *s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

/// Parses `sql` and renders it back.
pub fn rendered(sql: &str) -> String {
    parse(sql).to_string()
}

/// Verifies that rendering is a fixed point and that the rendered SQL
/// parses back to the same tree.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = ast1.to_string();
    let ast2 = parse(&rendered1);
    let rendered2 = ast2.to_string();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
    assert_eq!(ast1, ast2, "Round-trip changed the tree for: {sql}");
}

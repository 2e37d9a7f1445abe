//! Tests for reading several statements from one buffer.

use sqlparse_core::ast::Statement;
use sqlparse_core::{parse_next, parse_next_strict_ddl, Code, Tokenizer};

fn all(sql: &str) -> Vec<String> {
    let mut tokenizer = Tokenizer::new(sql);
    let mut out = vec![];
    while let Some(stmt) = parse_next(&mut tokenizer).unwrap() {
        out.push(stmt.to_string());
    }
    out
}

#[test]
fn reads_each_statement() {
    assert_eq!(
        all("select 1; update t set a = 2; delete from t"),
        vec!["select 1", "update t set a = 2", "delete from t"]
    );
}

#[test]
fn skips_blank_statements() {
    assert_eq!(all(";;select 1;; ;\n/* c */ ; select 2;"), vec!["select 1", "select 2"]);
    assert!(all("").is_empty());
    assert!(all(" ; ; ").is_empty());
}

#[test]
fn semicolons_inside_literals() {
    assert_eq!(
        all("select ';' from t; select `a;b` from u"),
        vec!["select ';' from t", "select `a;b` from u"]
    );
}

#[test]
fn bind_vars_are_per_statement() {
    let mut tokenizer = Tokenizer::new("select :a from t; select ? from u where b = :b");

    parse_next(&mut tokenizer).unwrap().unwrap();
    assert!(tokenizer.bind_vars().contains("a"));
    assert_eq!(tokenizer.bind_vars().len(), 1);

    parse_next(&mut tokenizer).unwrap().unwrap();
    let vars = tokenizer.bind_vars();
    assert!(vars.contains("v1"));
    assert!(vars.contains("b"));
    assert!(!vars.contains("a"));

    assert!(parse_next(&mut tokenizer).unwrap().is_none());
}

#[test]
fn partial_ddl_in_a_batch() {
    let mut tokenizer = Tokenizer::new("alter table t frobnicate; select 1");

    let first = parse_next(&mut tokenizer).unwrap().unwrap();
    assert!(matches!(first, Statement::AlterTable(_)));
    assert!(!first.is_fully_parsed());

    let second = parse_next(&mut tokenizer).unwrap().unwrap();
    assert_eq!(second.to_string(), "select 1");
    assert!(second.is_fully_parsed());
}

#[test]
fn strict_ddl_in_a_batch() {
    let mut tokenizer = Tokenizer::new("alter table t frobnicate; select 1");
    let err = parse_next_strict_ddl(&mut tokenizer).unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
}

#[test]
fn error_stops_the_batch() {
    let mut tokenizer = Tokenizer::new("select 1; select from; select 3");
    assert!(parse_next(&mut tokenizer).unwrap().is_some());
    let err = parse_next(&mut tokenizer).unwrap_err();
    assert!(err.message().contains("from"));
}

#[test]
fn comments_belong_to_their_statement() {
    let mut tokenizer = Tokenizer::new("select /* one */ 1; select /* two */ 2");
    let first = parse_next(&mut tokenizer).unwrap().unwrap();
    let second = parse_next(&mut tokenizer).unwrap().unwrap();
    assert_eq!(first.comments().map(|c| c.0.clone()), Some(vec!["/* one */".to_string()]));
    assert_eq!(second.comments().map(|c| c.0.clone()), Some(vec!["/* two */".to_string()]));
}

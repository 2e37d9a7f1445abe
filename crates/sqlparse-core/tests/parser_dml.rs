//! Tests for INSERT, REPLACE, UPDATE and DELETE.

mod common;
use common::*;

use sqlparse_core::ast::{Expr, InsertAction, InsertRows, Statement, TableExpr};

fn insert(sql: &str) -> sqlparse_core::ast::Insert {
    match parse(sql) {
        Statement::Insert(i) => *i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

#[test]
fn insert_values() {
    let ins = insert("INSERT INTO t (a, b) VALUES (1, 'x'), (2, 'y')");
    assert_eq!(ins.action, InsertAction::Insert);
    assert_eq!(ins.columns.len(), 2);
    let InsertRows::Values(rows) = &ins.rows else {
        panic!("expected VALUES");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], Expr::int(2));
    assert_eq!(
        rendered("INSERT INTO t (a, b) VALUES (1, 'x'), (2, 'y')"),
        "insert into t (a, b) values (1, 'x'), (2, 'y')"
    );
}

#[test]
fn insert_without_into_or_columns() {
    assert_eq!(rendered("insert t values (1)"), "insert into t values (1)");
    assert_eq!(rendered("insert into t values ()"), "insert into t values ()");
}

#[test]
fn insert_ignore_and_replace() {
    let ins = insert("insert ignore into db.t values (1)");
    assert!(ins.ignore);
    assert_eq!(ins.table.qualifier.as_str(), "db");

    let rep = insert("replace into t (a) values (1)");
    assert_eq!(rep.action, InsertAction::Replace);
    assert_eq!(
        rendered("replace into t (a) values (1)"),
        "replace into t (a) values (1)"
    );
}

#[test]
fn insert_set_form() {
    assert_eq!(
        rendered("insert into t set a = 1, b = 'x'"),
        "insert into t (a, b) values (1, 'x')"
    );
}

#[test]
fn insert_select() {
    let ins = insert("insert into t (a) select b from u");
    assert!(matches!(ins.rows, InsertRows::Select(_)));
    assert_eq!(
        rendered("insert into t (a) (select b from u)"),
        "insert into t (a) select b from u"
    );
}

#[test]
fn insert_on_duplicate_key() {
    let ins = insert("insert into t (a) values (1) on duplicate key update a = a + 1");
    assert_eq!(ins.on_dup.len(), 1);
    assert_eq!(
        rendered("insert into t (a) values (1) on duplicate key update a = values(a)"),
        "insert into t (a) values (1) on duplicate key update a = values(a)"
    );
}

#[test]
fn update_statement() {
    let Statement::Update(upd) =
        parse("UPDATE t SET a = 1, t.b = b + 1 WHERE id = :id ORDER BY id LIMIT 10")
    else {
        panic!("expected UPDATE");
    };
    assert_eq!(upd.exprs.len(), 2);
    assert_eq!(upd.exprs[1].name.qualifier.name.as_str(), "t");
    assert!(upd.where_clause.is_some());
    assert_eq!(upd.order_by.len(), 1);
    assert!(upd.limit.is_some());
}

#[test]
fn update_multi_table() {
    assert_eq!(
        rendered("update a join b on a.id = b.id set a.x = b.y"),
        "update a join b on a.id = b.id set a.x = b.y"
    );
    assert_eq!(rendered("update ignore t set a = 1"), "update ignore t set a = 1");
}

#[test]
fn delete_statement() {
    let Statement::Delete(del) = parse("DELETE FROM t WHERE a = 1 LIMIT 5") else {
        panic!("expected DELETE");
    };
    assert!(del.targets.is_empty());
    assert_eq!(del.table_exprs, vec![TableExpr::table(sqlparse_core::ast::TableName::new("t"))]);
    assert!(del.limit.is_some());
}

#[test]
fn delete_multi_table() {
    let Statement::Delete(del) = parse("delete a, b from a join b on a.id = b.id where a.x = 1")
    else {
        panic!("expected DELETE");
    };
    assert_eq!(del.targets.len(), 2);
    assert_eq!(
        rendered("delete a from a join b on a.id = b.id"),
        "delete a from a join b on a.id = b.id"
    );
}

#[test]
fn dml_round_trips() {
    for sql in [
        "insert into t (a, b) values (1, 2)",
        "insert into t (a) values (:v) on duplicate key update a = 2",
        "update t set a = 1 where b in (1, 2) order by c desc limit 1",
        "delete from t where a is null",
        "delete /* c */ from t",
        "insert /* c */ into t values (1)",
    ] {
        round_trip(sql);
    }
}

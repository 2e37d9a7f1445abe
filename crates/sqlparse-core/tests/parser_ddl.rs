//! Tests for table and database DDL, including partially parsed statements.

mod common;
use common::*;

use sqlparse_core::ast::{AlterAction, ColumnKey, DataType, IndexKind, Statement};
use sqlparse_core::{parse_strict_ddl, Code};

#[test]
fn create_table_columns() {
    let Statement::CreateTable(create) = parse(
        "CREATE TABLE users (id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY, \
         email VARCHAR(255) NOT NULL UNIQUE, price DECIMAL(10, 2) DEFAULT 0, \
         state ENUM('on', 'off') COMMENT 'switch')",
    ) else {
        panic!("expected CREATE TABLE");
    };
    let spec = create.spec.expect("table spec");
    assert_eq!(spec.columns.len(), 4);

    let id = &spec.columns[0].ty;
    assert_eq!(id.data_type, DataType::Bigint);
    assert!(id.unsigned);
    assert!(id.autoincrement);
    assert_eq!(id.null, Some(false));
    assert_eq!(id.key, ColumnKey::Primary);

    assert_eq!(spec.columns[1].ty.length, Some(255));
    assert_eq!(spec.columns[1].ty.key, ColumnKey::Unique);
    assert_eq!(spec.columns[2].ty.scale, Some(2));
    assert_eq!(spec.columns[3].ty.data_type, DataType::Custom("enum".into()));
    assert_eq!(spec.columns[3].ty.values, vec!["on", "off"]);
    assert_eq!(spec.columns[3].ty.comment.as_deref(), Some("switch"));
}

#[test]
fn create_table_indexes_and_options() {
    let sql = "create table t (a int, b int, primary key (a), unique key ub (b), key ab (a, b)) \
               engine=InnoDB default charset=utf8mb4";
    let Statement::CreateTable(create) = parse(sql) else {
        panic!("expected CREATE TABLE");
    };
    let spec = create.spec.as_ref().expect("table spec");
    let kinds: Vec<_> = spec.indexes.iter().map(|i| i.kind).collect();
    assert_eq!(kinds, vec![IndexKind::Primary, IndexKind::Unique, IndexKind::Index]);
    assert_eq!(spec.options, "engine=InnoDB default charset=utf8mb4");
    assert!(create.fully_parsed);
    assert_eq!(
        create.to_string(),
        "create table t (a int, b int, primary key (a), unique key ub (b), key ab (a, b)) \
         engine=InnoDB default charset=utf8mb4"
    );
}

#[test]
fn create_table_if_not_exists_and_like() {
    assert_eq!(
        rendered("create table if not exists db.t (a int)"),
        "create table if not exists db.t (a int)"
    );
    assert_eq!(rendered("create table t like u"), "create table t like u");
    assert_eq!(rendered("create table t (like u)"), "create table t like u");
}

#[test]
fn alter_table_actions() {
    let Statement::AlterTable(alter) =
        parse("alter table t add column c int not null, drop d, add unique key uc (c)")
    else {
        panic!("expected ALTER TABLE");
    };
    assert_eq!(alter.actions.len(), 3);
    assert!(matches!(&alter.actions[1], AlterAction::DropColumn(c) if c.as_str() == "d"));
    assert!(matches!(&alter.actions[2], AlterAction::AddIndex(_)));
    assert_eq!(
        rendered("alter table t add c int, drop column d, rename as u"),
        "alter table t add column c int, drop column d, rename to u"
    );
}

#[test]
fn drop_rename_truncate() {
    let Statement::DropTable(drop) = parse("drop table if exists a, db.b") else {
        panic!("expected DROP TABLE");
    };
    assert!(drop.if_exists);
    assert_eq!(drop.tables.len(), 2);

    assert_eq!(
        rendered("rename table a to b, c to d"),
        "rename table a to b, c to d"
    );
    assert_eq!(rendered("truncate t"), "truncate table t");
    assert_eq!(rendered("truncate table db.t"), "truncate table db.t");
}

#[test]
fn database_statements() {
    assert_eq!(
        rendered("create database if not exists shop"),
        "create database if not exists shop"
    );
    assert_eq!(rendered("create schema shop"), "create database shop");
    assert_eq!(rendered("drop database if exists shop"), "drop database if exists shop");
}

#[test]
fn partial_ddl_keeps_prefix() {
    let stmt = parse("alter table t frobnicate");
    assert!(!stmt.is_fully_parsed());
    let Statement::AlterTable(alter) = &stmt else {
        panic!("expected ALTER TABLE");
    };
    assert_eq!(alter.table.name.as_str(), "t");
    assert!(alter.actions.is_empty());

    let stmt = parse("create database shop default character set utf8mb4");
    assert!(!stmt.is_fully_parsed());
    assert_eq!(stmt.to_string(), "create database shop");

    let stmt = parse("drop table a, b cascade");
    assert!(!stmt.is_fully_parsed());
    assert_eq!(stmt.to_string(), "drop table a, b");
}

#[test]
fn partial_ddl_skips_lexical_errors() {
    let stmt = parse("create table t (a int) 'unterminated");
    assert!(matches!(stmt, Statement::CreateTable(_)));
    assert!(!stmt.is_fully_parsed());
}

#[test]
fn strict_ddl_rejects_partial() {
    let err = parse_strict_ddl("alter table t frobnicate").unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
    assert!(err.message().contains("frobnicate"));

    assert!(parse_strict_ddl("create table t (a int)")
        .unwrap()
        .is_fully_parsed());
}

#[test]
fn partial_ddl_followed_by_statement() {
    let err = parse_err("alter table t frobnicate; select 1");
    assert_eq!(err.code(), Code::InvalidArgument);
    assert_eq!(
        err.message(),
        "extra characters encountered after end of DDL: 'select'"
    );

    // A trailing separator alone is fine
    assert!(!parse("alter table t frobnicate;").is_fully_parsed());
}

#[test]
fn non_ddl_errors_are_not_recovered() {
    let err = parse_err("select from where");
    assert_eq!(err.code(), Code::InvalidArgument);
}

#[test]
fn ddl_round_trips() {
    for sql in [
        "create table t (id int not null auto_increment primary key, name varchar(64) default 'x')",
        "create table t (a int, key ia (a)) engine=InnoDB",
        "alter table db.t add column a bigint unsigned, drop column b",
        "drop table t",
        "rename table a to b",
        "truncate table t",
        "create database d",
        "drop database d",
    ] {
        round_trip(sql);
    }
}

//! Tests for expression parsing and rendering.

mod common;
use common::*;

use sqlparse_core::ast::{BinaryOp, ComparisonOp, Expr, IsOp, LiteralKind, UnaryOp};
use sqlparse_core::parse_expr;

fn expr(sql: &str) -> Expr {
    parse_expr(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

fn canonical(sql: &str) -> String {
    expr(sql).to_string()
}

#[test]
fn arithmetic_precedence() {
    let Expr::Binary { op, right, .. } = expr("1 + 2 * 3") else {
        panic!("expected a binary expression");
    };
    assert_eq!(op, BinaryOp::Plus);
    assert!(matches!(*right, Expr::Binary { op: BinaryOp::Mult, .. }));

    assert_eq!(canonical("(1 + 2) * 3"), "(1 + 2) * 3");
    assert_eq!(canonical("1 + (2 * 3)"), "1 + 2 * 3");
    assert_eq!(canonical("a - (b - c)"), "a - (b - c)");
    assert_eq!(canonical("(a - b) - c"), "a - b - c");
}

#[test]
fn bitwise_precedence() {
    // ^ binds tighter than *, | looser than &
    assert_eq!(canonical("a * b ^ c"), "a * b ^ c");
    assert!(matches!(
        expr("a * b ^ c"),
        Expr::Binary { op: BinaryOp::Mult, .. }
    ));
    assert!(matches!(
        expr("a | b & c"),
        Expr::Binary { op: BinaryOp::BitOr, .. }
    ));
    assert!(matches!(
        expr("a << 1 + 2"),
        Expr::Binary { op: BinaryOp::ShiftLeft, .. }
    ));
}

#[test]
fn logical_precedence() {
    assert!(matches!(expr("a or b and c"), Expr::Or(..)));
    assert!(matches!(expr("a xor b and c"), Expr::Xor(..)));
    assert!(matches!(expr("a || b && c"), Expr::Or(..)));
    assert_eq!(canonical("(a or b) and c"), "(a or b) and c");
    assert_eq!(canonical("not a = 1 and b"), "not a = 1 and b");
    assert!(matches!(expr("not a = 1 and b"), Expr::And(..)));
}

#[test]
fn comparison_operators() {
    for (sql, op) in [
        ("a = 1", ComparisonOp::Eq),
        ("a != 1", ComparisonOp::NotEq),
        ("a <> 1", ComparisonOp::NotEq),
        ("a < 1", ComparisonOp::Lt),
        ("a <= 1", ComparisonOp::LtEq),
        ("a > 1", ComparisonOp::Gt),
        ("a >= 1", ComparisonOp::GtEq),
        ("a <=> 1", ComparisonOp::NullSafeEq),
    ] {
        assert!(
            matches!(expr(sql), Expr::Comparison { op: found, .. } if found == op),
            "wrong operator for {sql}"
        );
    }
    assert_eq!(canonical("a <> 1"), "a != 1");
}

#[test]
fn predicates() {
    assert_eq!(canonical("a in (1, 2)"), "a in (1, 2)");
    assert_eq!(canonical("a not in (1)"), "a not in (1)");
    assert_eq!(canonical("a not like 'x%'"), "a not like 'x%'");
    assert_eq!(canonical("a rlike '^x'"), "a regexp '^x'");
    assert_eq!(canonical("a not regexp 'y'"), "a not regexp 'y'");
    assert_eq!(canonical("a like 'x!%' escape '!'"), "a like 'x!%' escape '!'");
    assert_eq!(
        canonical("a not between 1 and 2"),
        "a not between 1 and 2"
    );
    assert!(matches!(
        expr("a is not null"),
        Expr::Is { op: IsOp::NotNull, .. }
    ));
    assert!(matches!(expr("a is true"), Expr::Is { op: IsOp::True, .. }));
    assert!(matches!(
        expr("a is not false"),
        Expr::Is { op: IsOp::NotFalse, .. }
    ));
}

#[test]
fn in_list_forms() {
    assert!(matches!(
        expr("a in ::ids"),
        Expr::Comparison { right, .. } if *right == Expr::ListArg("ids".into())
    ));
    assert!(matches!(
        expr("a in (select b from t)"),
        Expr::Comparison { right, .. } if matches!(*right, Expr::Subquery(_))
    ));
}

#[test]
fn between_binds_tighter_than_and() {
    let Expr::And(left, _) = expr("a between 1 and 2 and b") else {
        panic!("expected AND at the top");
    };
    assert!(matches!(*left, Expr::Between { negated: false, .. }));
}

#[test]
fn unary_operators() {
    assert!(matches!(
        expr("-a"),
        Expr::Unary { op: UnaryOp::Minus, .. }
    ));
    assert!(matches!(expr("~a"), Expr::Unary { op: UnaryOp::Tilde, .. }));
    assert!(matches!(expr("!a"), Expr::Unary { op: UnaryOp::Bang, .. }));
    assert_eq!(expr("+a"), Expr::column("a"));
    assert_eq!(canonical("- -1"), "- -1");
    assert_eq!(canonical("-(a + b)"), "-(a + b)");
}

#[test]
fn literals() {
    assert_eq!(expr("42"), Expr::int(42));
    assert_eq!(expr("'hello'"), Expr::string("hello"));
    assert_eq!(expr("\"dq\""), Expr::string("dq"));
    assert_eq!(expr("1.5e3"), Expr::literal(LiteralKind::Float, "1.5e3"));
    assert_eq!(expr("0x1F"), Expr::literal(LiteralKind::HexNum, "0x1F"));
    assert_eq!(expr("X'1F'"), Expr::literal(LiteralKind::HexVal, "1F"));
    assert_eq!(expr("0b101"), Expr::literal(LiteralKind::BitNum, "0b101"));
    assert_eq!(expr("b'101'"), Expr::literal(LiteralKind::BitVal, "101"));
    assert_eq!(expr("true"), Expr::Bool(true));
    assert_eq!(expr("null"), Expr::Null);
}

#[test]
fn string_escapes_round_trip() {
    assert_eq!(expr(r"'it\'s'"), Expr::string("it's"));
    assert_eq!(expr("'it''s'"), Expr::string("it's"));
    assert_eq!(canonical("'it''s'"), r"'it\'s'");
}

#[test]
fn columns_and_variables() {
    assert_eq!(expr("t.a"), Expr::qualified_column("t", "a"));
    assert_eq!(canonical("db.t.a"), "db.t.a");
    assert_eq!(canonical("`select`"), "`select`");
    assert_eq!(canonical("@x"), "@x");
    assert_eq!(canonical("@@session.autocommit"), "@@session.autocommit");
}

#[test]
fn bind_variables() {
    assert_eq!(expr(":id"), Expr::Argument("id".into()));
    assert_eq!(expr("?"), Expr::Argument("v1".into()));
    assert_eq!(expr("::ids"), Expr::ListArg("ids".into()));
}

#[test]
fn functions() {
    let Expr::FuncCall(call) = expr("count(distinct a)") else {
        panic!("expected a function call");
    };
    assert!(call.distinct);
    assert_eq!(call.args.len(), 1);

    assert_eq!(canonical("count(*)"), "count(*)");
    assert_eq!(canonical("coalesce(a, b, 1)"), "coalesce(a, b, 1)");
    assert_eq!(canonical("db.f(1)"), "db.f(1)");
    assert_eq!(canonical("now()"), "now()");
    assert_eq!(canonical("if(a, 1, 2)"), "if(a, 1, 2)");
}

#[test]
fn case_expressions() {
    assert_eq!(
        canonical("CASE a WHEN 1 THEN 'one' WHEN 2 THEN 'two' ELSE 'many' END"),
        "case a when 1 then 'one' when 2 then 'two' else 'many' end"
    );
    assert_eq!(
        canonical("case when a > 0 then 1 end"),
        "case when a > 0 then 1 end"
    );
}

#[test]
fn casts() {
    assert_eq!(canonical("cast(a as char(10))"), "cast(a as char(10))");
    assert_eq!(canonical("cast(a as decimal(10, 2))"), "cast(a as decimal(10, 2))");
    assert_eq!(canonical("cast(a as signed integer)"), "cast(a as signed)");
    assert_eq!(canonical("cast(a as unsigned)"), "cast(a as unsigned)");
}

#[test]
fn tuples_and_subqueries() {
    assert_eq!(expr("(a, b)"), Expr::Tuple(vec![Expr::column("a"), Expr::column("b")]));
    assert_eq!(expr("((a))"), Expr::column("a"));
    assert!(matches!(expr("(select 1)"), Expr::Subquery(_)));
    assert!(matches!(expr("exists (select 1)"), Expr::Exists(_)));
}

#[test]
fn expression_round_trips() {
    for sql in [
        "select a + b * c - d / e from t",
        "select (a + b) * c from t",
        "select a from t where not (a = 1 or b = 2)",
        "select a div 2, a mod 3, a % 4 from t",
        "select a from t where a & 1 = 0 and b | 2 > c ^ 3",
        "select a from t where (a, b) in ((1, 2), (3, 4))",
        "select -a, ~b, !c from t",
        "select a from t where a is null or b is not true",
        "select cast(a as unsigned) from t",
        "select a from t where a like :p escape '|'",
    ] {
        round_trip(sql);
    }
}

//! Canonical scopes for SET assignments.

use super::{rewrite, Cursor, NodeMut, Walk};
use crate::ast::{AtCount, ColIdent, Scope, SetExpr, Statement};
use crate::error::{Result, SqlError};

const SCOPE_PREFIXES: [(&str, Scope); 3] = [
    ("session.", Scope::Session),
    ("global.", Scope::Global),
    ("vitess_metadata.", Scope::VitessMetadata),
];

/// Rewrites every SET assignment to an explicit scope.
///
/// * `@@name` gets session scope and loses its sigils; `@@global.name` and
///   the other prefixed forms take the scope of the prefix.
/// * `@name` is left alone.
/// * A plain name with no scope or `LOCAL` scope gets session scope.
///
/// Running it again over its own output changes nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SetNormalizer {
    normalized: usize,
}

impl SetNormalizer {
    /// Creates a normalizer.
    #[must_use]
    pub const fn new() -> Self {
        Self { normalized: 0 }
    }

    /// The rewrite callback; normalizes the assignments under each node.
    ///
    /// # Errors
    ///
    /// See [`normalize_set_expr`].
    pub fn visit(&mut self, cursor: &mut Cursor<'_>) -> Result<Walk> {
        match cursor.node() {
            NodeMut::SetExpr(expr) => {
                normalize_set_expr(expr)?;
                self.normalized += 1;
                Ok(Walk::SkipChildren)
            }
            _ => Ok(Walk::Continue),
        }
    }

    /// The number of assignments normalized so far.
    #[must_use]
    pub const fn normalized(&self) -> usize {
        self.normalized
    }
}

/// Normalizes one assignment in place.
///
/// # Errors
///
/// Fails with [`crate::error::Code::InvalidArgument`] when a scope keyword
/// is combined with `@@name` or `@name`.
pub fn normalize_set_expr(expr: &mut SetExpr) -> Result<()> {
    match expr.name.at() {
        AtCount::DoubleAt => {
            if expr.scope != Scope::Implicit {
                return Err(SqlError::invalid_argument("cannot use scope and @@"));
            }
            let lowered = expr.name.lowered();
            let prefixed = SCOPE_PREFIXES
                .iter()
                .find_map(|&(prefix, scope)| {
                    lowered.strip_prefix(prefix).map(|rest| (rest, scope))
                });
            match prefixed {
                Some((rest, scope)) => {
                    expr.name = unquoted_column(rest);
                    expr.scope = scope;
                }
                None => {
                    expr.name = expr.name.clone().with_at(AtCount::NoAt);
                    expr.scope = Scope::Session;
                }
            }
        }
        AtCount::SingleAt => {
            if expr.scope != Scope::Implicit {
                return Err(SqlError::invalid_argument(
                    "cannot mix scope and user defined variables",
                ));
            }
        }
        AtCount::NoAt => {
            if matches!(expr.scope, Scope::Implicit | Scope::Local) {
                expr.scope = Scope::Session;
            }
        }
    }
    Ok(())
}

/// Normalizes the assignments of every SET statement within `stmt`.
///
/// # Errors
///
/// Returns the first error of [`normalize_set_expr`]; assignments before it
/// stay normalized.
pub fn normalize_set_statements(stmt: &mut Statement) -> Result<()> {
    let mut normalizer = SetNormalizer::new();
    rewrite(stmt, |cursor| normalizer.visit(cursor))?;
    tracing::trace!(assignments = normalizer.normalized(), "normalized set statements");
    Ok(())
}

/// Builds a column name, dropping one pair of surrounding backticks.
fn unquoted_column(name: &str) -> ColIdent {
    let name = name
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
        .unwrap_or(name);
    ColIdent::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;
    use crate::error::Code;
    use crate::parser::parse;

    fn set_expr(scope: Scope, name: &str, at: AtCount) -> SetExpr {
        SetExpr {
            scope,
            name: ColIdent::new_with_at(name, at),
            expr: Expr::int(1),
        }
    }

    fn normalized(sql: &str) -> String {
        let mut stmt = parse(sql).unwrap();
        normalize_set_statements(&mut stmt).unwrap();
        stmt.to_string()
    }

    #[test]
    fn test_double_at() {
        let mut expr = set_expr(Scope::Implicit, "Autocommit", AtCount::DoubleAt);
        normalize_set_expr(&mut expr).unwrap();
        assert_eq!(expr.scope, Scope::Session);
        assert_eq!(expr.name.at(), AtCount::NoAt);
        assert_eq!(expr.name.as_str(), "Autocommit");
    }

    #[test]
    fn test_double_at_prefixes() {
        for (name, scope, rest) in [
            ("session.x", Scope::Session, "x"),
            ("GLOBAL.Sql_Mode", Scope::Global, "sql_mode"),
            ("vitess_metadata.`k`", Scope::VitessMetadata, "k"),
        ] {
            let mut expr = set_expr(Scope::Implicit, name, AtCount::DoubleAt);
            normalize_set_expr(&mut expr).unwrap();
            assert_eq!(expr.scope, scope);
            assert_eq!(expr.name.as_str(), rest);
            assert_eq!(expr.name.at(), AtCount::NoAt);
        }
    }

    #[test]
    fn test_scope_conflicts() {
        let mut expr = set_expr(Scope::Global, "x", AtCount::DoubleAt);
        let err = normalize_set_expr(&mut expr).unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
        assert_eq!(err.message(), "cannot use scope and @@");

        let mut expr = set_expr(Scope::Session, "x", AtCount::SingleAt);
        let err = normalize_set_expr(&mut expr).unwrap_err();
        assert_eq!(err.message(), "cannot mix scope and user defined variables");
    }

    #[test]
    fn test_plain_names() {
        let mut expr = set_expr(Scope::Local, "x", AtCount::NoAt);
        normalize_set_expr(&mut expr).unwrap();
        assert_eq!(expr.scope, Scope::Session);

        let mut expr = set_expr(Scope::Global, "x", AtCount::NoAt);
        normalize_set_expr(&mut expr).unwrap();
        assert_eq!(expr.scope, Scope::Global);

        let mut expr = set_expr(Scope::Implicit, "x", AtCount::SingleAt);
        normalize_set_expr(&mut expr).unwrap();
        assert_eq!(expr.scope, Scope::Implicit);
        assert_eq!(expr.name.at(), AtCount::SingleAt);
    }

    #[test]
    fn test_statements() {
        assert_eq!(
            normalized("set @@global.x = 1, @y = 2, local z = 3, autocommit = on"),
            "set global x = 1, @y = 2, session z = 3, session autocommit = 'on'"
        );
    }

    #[test]
    fn test_idempotent() {
        let mut stmt = parse("set @@session.a = 1, @@b = 2, c = 3").unwrap();
        normalize_set_statements(&mut stmt).unwrap();
        let once = stmt.clone();
        normalize_set_statements(&mut stmt).unwrap();
        assert_eq!(stmt, once);
    }

    #[test]
    fn test_normalizer_counts() {
        let mut stmt = parse("set a = 1, b = 2").unwrap();
        let mut normalizer = SetNormalizer::new();
        rewrite(&mut stmt, |cursor| normalizer.visit(cursor)).unwrap();
        assert_eq!(normalizer.normalized(), 2);
    }

    #[test]
    fn test_error_from_statement() {
        let mut stmt = parse("set global @@x = 1").unwrap();
        let err = normalize_set_statements(&mut stmt).unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
    }
}

//! In-place AST rewriting.
//!
//! [`rewrite`] walks a statement in pre-order and hands every visited node to
//! a callback through a [`Cursor`]. The callback may mutate the node, replace
//! an expression, skip the node's children, or abort the walk with an error.
//! Children are visited in source order. When an expression is replaced, the
//! walk descends into the replacement.
//!
//! ```
//! use sqlparse_core::ast::Expr;
//! use sqlparse_core::parser::parse;
//! use sqlparse_core::rewrite::{rewrite, NodeMut, Walk};
//!
//! let mut stmt = parse("select a from t where b = :x").unwrap();
//! rewrite::<(), _>(&mut stmt, |cursor| {
//!     if matches!(cursor.node(), NodeMut::Expr(Expr::Argument(_))) {
//!         cursor.replace_expr(Expr::int(1));
//!     }
//!     Ok(Walk::Continue)
//! })
//! .unwrap();
//! assert_eq!(stmt.to_string(), "select a from t where b = 1");
//! ```

mod set_normalizer;

pub use set_normalizer::{normalize_set_expr, normalize_set_statements, SetNormalizer};

use std::marker::PhantomData;

use crate::ast::{
    CaseExpr, Expr, InsertRows, Limit, Order, Select, SelectExpr, SelectStatement, Set, SetExpr,
    Show, ShowFilter, SimpleTableExpr, Statement, TableExpr, Union,
};

/// What the walk does after the callback returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Visit the node's children.
    Continue,
    /// Move on to the next sibling.
    SkipChildren,
}

/// A mutable reference to a visited node.
#[derive(Debug)]
pub enum NodeMut<'n> {
    Statement(&'n mut Statement),
    Select(&'n mut Select),
    Set(&'n mut Set),
    SetExpr(&'n mut SetExpr),
    Expr(&'n mut Expr),
    TableExpr(&'n mut TableExpr),
}

/// The position of the walk.
#[derive(Debug)]
pub struct Cursor<'n> {
    node: NodeMut<'n>,
}

impl<'n> Cursor<'n> {
    /// The current node.
    pub fn node(&mut self) -> NodeMut<'_> {
        match &mut self.node {
            NodeMut::Statement(node) => NodeMut::Statement(&mut **node),
            NodeMut::Select(node) => NodeMut::Select(&mut **node),
            NodeMut::Set(node) => NodeMut::Set(&mut **node),
            NodeMut::SetExpr(node) => NodeMut::SetExpr(&mut **node),
            NodeMut::Expr(node) => NodeMut::Expr(&mut **node),
            NodeMut::TableExpr(node) => NodeMut::TableExpr(&mut **node),
        }
    }

    /// The current node if it is an expression.
    pub fn expr(&mut self) -> Option<&mut Expr> {
        match &mut self.node {
            NodeMut::Expr(expr) => Some(&mut **expr),
            _ => None,
        }
    }

    /// Replaces the current expression and returns the old one.
    ///
    /// Returns `None` and leaves the tree alone when the cursor is not on an
    /// expression.
    pub fn replace_expr(&mut self, expr: Expr) -> Option<Expr> {
        self.expr().map(|current| std::mem::replace(current, expr))
    }

    /// Consumes the cursor, returning the node with its full lifetime.
    #[must_use]
    pub fn into_node(self) -> NodeMut<'n> {
        self.node
    }
}

/// Rewrites `stmt` in place.
///
/// # Errors
///
/// Returns the first error produced by `pre`; nodes visited before it keep
/// their changes and the rest of the tree is not visited.
pub fn rewrite<E, F>(stmt: &mut Statement, pre: F) -> Result<(), E>
where
    F: FnMut(&mut Cursor<'_>) -> Result<Walk, E>,
{
    Rewriter::new(pre).statement(stmt)
}

/// Rewrites a standalone expression in place.
///
/// # Errors
///
/// See [`rewrite`].
pub fn rewrite_expr<E, F>(expr: &mut Expr, pre: F) -> Result<(), E>
where
    F: FnMut(&mut Cursor<'_>) -> Result<Walk, E>,
{
    Rewriter::new(pre).expr(expr)
}

struct Rewriter<F, E> {
    pre: F,
    error: PhantomData<fn() -> E>,
}

impl<E, F> Rewriter<F, E>
where
    F: FnMut(&mut Cursor<'_>) -> Result<Walk, E>,
{
    const fn new(pre: F) -> Self {
        Self {
            pre,
            error: PhantomData,
        }
    }

    /// Runs the callback; true when the children should be visited.
    fn visit(&mut self, node: NodeMut<'_>) -> Result<bool, E> {
        let mut cursor = Cursor { node };
        Ok((self.pre)(&mut cursor)? == Walk::Continue)
    }

    fn statement(&mut self, stmt: &mut Statement) -> Result<(), E> {
        if !self.visit(NodeMut::Statement(stmt))? {
            return Ok(());
        }
        match stmt {
            Statement::Select(select) => self.select(select),
            Statement::Union(union) => self.union(union),
            Statement::Insert(insert) => {
                match &mut insert.rows {
                    InsertRows::Values(rows) => {
                        for row in rows {
                            self.exprs(row)?;
                        }
                    }
                    InsertRows::Select(query) => self.select_statement(query)?,
                }
                for update in &mut insert.on_dup {
                    self.expr(&mut update.expr)?;
                }
                Ok(())
            }
            Statement::Update(update) => {
                self.table_exprs(&mut update.table_exprs)?;
                for assignment in &mut update.exprs {
                    self.expr(&mut assignment.expr)?;
                }
                self.opt_expr(update.where_clause.as_mut())?;
                self.tail(&mut update.order_by, update.limit.as_mut())
            }
            Statement::Delete(delete) => {
                self.table_exprs(&mut delete.table_exprs)?;
                self.opt_expr(delete.where_clause.as_mut())?;
                self.tail(&mut delete.order_by, delete.limit.as_mut())
            }
            Statement::Set(set) => self.set(set),
            Statement::Show(show) => match &mut **show {
                Show::Basic(basic) => match &mut basic.filter {
                    Some(ShowFilter::Where(expr)) => self.expr(expr),
                    _ => Ok(()),
                },
                Show::Other(_) => Ok(()),
            },
            Statement::CreateTable(create) => {
                if let Some(spec) = &mut create.spec {
                    for column in &mut spec.columns {
                        self.opt_expr(column.ty.default.as_mut())?;
                    }
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn select_statement(&mut self, query: &mut SelectStatement) -> Result<(), E> {
        match query {
            SelectStatement::Select(select) => self.select(select),
            SelectStatement::Union(union) => self.union(union),
        }
    }

    fn select(&mut self, select: &mut Select) -> Result<(), E> {
        if !self.visit(NodeMut::Select(select))? {
            return Ok(());
        }
        self.select_exprs(&mut select.exprs)?;
        self.table_exprs(&mut select.from)?;
        self.opt_expr(select.where_clause.as_mut())?;
        self.exprs(&mut select.group_by)?;
        self.opt_expr(select.having.as_mut())?;
        self.tail(&mut select.order_by, select.limit.as_mut())
    }

    fn union(&mut self, union: &mut Union) -> Result<(), E> {
        self.select_statement(&mut union.left)?;
        self.select_statement(&mut union.right)?;
        self.tail(&mut union.order_by, union.limit.as_mut())
    }

    fn set(&mut self, set: &mut Set) -> Result<(), E> {
        if !self.visit(NodeMut::Set(set))? {
            return Ok(());
        }
        for set_expr in &mut set.exprs {
            if self.visit(NodeMut::SetExpr(set_expr))? {
                self.expr(&mut set_expr.expr)?;
            }
        }
        Ok(())
    }

    fn table_exprs(&mut self, table_exprs: &mut [TableExpr]) -> Result<(), E> {
        table_exprs.iter_mut().try_for_each(|table| self.table_expr(table))
    }

    fn table_expr(&mut self, table: &mut TableExpr) -> Result<(), E> {
        if !self.visit(NodeMut::TableExpr(table))? {
            return Ok(());
        }
        match table {
            TableExpr::Aliased {
                expr: SimpleTableExpr::Subquery(query),
                ..
            } => self.select_statement(query),
            TableExpr::Aliased { .. } => Ok(()),
            TableExpr::Join(join) => {
                self.table_expr(&mut join.left)?;
                self.table_expr(&mut join.right)?;
                self.opt_expr(join.condition.on.as_mut())
            }
        }
    }

    fn select_exprs(&mut self, items: &mut [SelectExpr]) -> Result<(), E> {
        for item in items {
            if let SelectExpr::Aliased { expr, .. } = item {
                self.expr(expr)?;
            }
        }
        Ok(())
    }

    fn tail(&mut self, order_by: &mut [Order], limit: Option<&mut Limit>) -> Result<(), E> {
        for order in order_by {
            self.expr(&mut order.expr)?;
        }
        if let Some(limit) = limit {
            self.opt_expr(limit.offset.as_mut())?;
            self.expr(&mut limit.rowcount)?;
        }
        Ok(())
    }

    fn exprs(&mut self, exprs: &mut [Expr]) -> Result<(), E> {
        exprs.iter_mut().try_for_each(|expr| self.expr(expr))
    }

    fn opt_expr(&mut self, expr: Option<&mut Expr>) -> Result<(), E> {
        expr.map_or(Ok(()), |expr| self.expr(expr))
    }

    fn expr(&mut self, expr: &mut Expr) -> Result<(), E> {
        if !self.visit(NodeMut::Expr(expr))? {
            return Ok(());
        }
        match expr {
            Expr::And(left, right) | Expr::Or(left, right) | Expr::Xor(left, right) => {
                self.expr(left)?;
                self.expr(right)
            }
            Expr::Not(inner)
            | Expr::Is { expr: inner, .. }
            | Expr::Unary { expr: inner, .. }
            | Expr::Cast { expr: inner, .. } => self.expr(inner),
            Expr::Comparison {
                left,
                right,
                escape,
                ..
            } => {
                self.expr(left)?;
                self.expr(right)?;
                self.opt_expr(escape.as_deref_mut())
            }
            Expr::Between { expr, from, to, .. } => {
                self.expr(expr)?;
                self.expr(from)?;
                self.expr(to)
            }
            Expr::Binary { left, right, .. } => {
                self.expr(left)?;
                self.expr(right)
            }
            Expr::Tuple(items) => self.exprs(items),
            Expr::Subquery(query) | Expr::Exists(query) => self.select_statement(query),
            Expr::FuncCall(call) => self.select_exprs(&mut call.args),
            Expr::Case(case) => self.case(case),
            Expr::Literal { .. }
            | Expr::Bool(_)
            | Expr::Null
            | Expr::Column(_)
            | Expr::Argument(_)
            | Expr::ListArg(_)
            | Expr::Variable(_)
            | Expr::Default(_) => Ok(()),
        }
    }

    fn case(&mut self, case: &mut CaseExpr) -> Result<(), E> {
        self.opt_expr(case.expr.as_deref_mut())?;
        for when in &mut case.whens {
            self.expr(&mut when.cond)?;
            self.expr(&mut when.val)?;
        }
        self.opt_expr(case.else_expr.as_deref_mut())
    }
}

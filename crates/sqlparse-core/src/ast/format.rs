//! Canonical SQL rendering.
//!
//! Keywords are written in lower case, identifiers are quoted only when
//! needed, and parentheses are inserted only where operator precedence
//! requires them, so that parsing the rendered text yields the same tree.

use std::fmt::{self, Display, Formatter, Write};

use super::{
    is_plain_identifier, AlterAction, AtCount, CaseExpr, ColIdent, ColName, ColumnDefinition,
    ColumnKey, ColumnType, Comments, ConvertType, CreateDatabase, CreateTable, Delete, DropDatabase,
    DropTable, Expr, FuncCall, IndexDefinition, IndexKind, Insert, InsertAction, InsertRows,
    JoinTableExpr, Limit, LiteralKind, Lock, Order, Precedence, RenamePair, Select, SelectExpr,
    SelectStatement, Set, SetExpr, Show, ShowBasic, ShowCommand, ShowFilter, SimpleTableExpr,
    Statement, TableExpr, TableIdent, TableName, TableSpec, Union, Update, UpdateExpr,
};
use crate::dialect::Dialect;
use crate::lexer::{keyword_lookup, Keyword};

/// Items joined by a separator.
struct Sep<'a, T>(&'a [T], &'static str);

impl<T: Display> Display for Sep<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(self.1)?;
            }
            item.fmt(f)?;
        }
        Ok(())
    }
}

fn comma<T>(items: &[T]) -> Sep<'_, T> {
    Sep(items, ", ")
}

/// Writes `name`, backtick-quoted unless it is a plain identifier.
fn write_ident(f: &mut Formatter<'_>, name: &str) -> fmt::Result {
    if is_plain_identifier(name) {
        return f.write_str(name);
    }
    write_quoted_ident(f, name)
}

fn write_quoted_ident(f: &mut Formatter<'_>, name: &str) -> fmt::Result {
    f.write_char('`')?;
    for c in name.chars() {
        if c == '`' {
            f.write_char('`')?;
        }
        f.write_char(c)?;
    }
    f.write_char('`')
}

/// Writes a single-quoted string literal with backslash escapes.
fn write_string(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('\'')?;
    for c in value.chars() {
        match c {
            '\'' => f.write_str("\\'")?,
            '\\' => f.write_str("\\\\")?,
            '\0' => f.write_str("\\0")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{1a}' => f.write_str("\\Z")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('\'')
}

/// Writes `expr`, parenthesized if it binds looser than `min`, or as loose
/// as `min` when `strict` is set.
fn write_operand(f: &mut Formatter<'_>, expr: &Expr, min: u8, strict: bool) -> fmt::Result {
    let prec = expr.precedence();
    if prec < min || (strict && prec == min) {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

fn write_infix(
    f: &mut Formatter<'_>,
    left: &Expr,
    op: &str,
    right: &Expr,
    prec: u8,
) -> fmt::Result {
    write_operand(f, left, prec, false)?;
    write!(f, " {op} ")?;
    write_operand(f, right, prec, true)
}

impl Display for ColIdent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.at() {
            AtCount::NoAt => write_ident(f, self.as_str()),
            AtCount::SingleAt => {
                f.write_char('@')?;
                let plain = !self.is_empty()
                    && self
                        .as_str()
                        .chars()
                        .all(|c| c.is_alphanumeric() || matches!(c, '_' | '$' | '.'));
                if plain {
                    f.write_str(self.as_str())
                } else {
                    write_quoted_ident(f, self.as_str())
                }
            }
            AtCount::DoubleAt => write!(f, "@@{}", self.as_str()),
        }
    }
}

impl Display for TableIdent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_ident(f, self.as_str())
    }
}

impl Display for TableName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.qualifier.is_empty() {
            write!(f, "{}.", self.qualifier)?;
        }
        write!(f, "{}", self.name)
    }
}

impl Display for ColName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.qualifier.is_empty() {
            write!(f, "{}.", self.qualifier)?;
        }
        write!(f, "{}", self.name)
    }
}

impl Display for Comments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for comment in self.iter() {
            write!(f, "{comment} ")?;
        }
        Ok(())
    }
}

impl Display for ConvertType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data_type)?;
        match (self.length, self.scale) {
            (Some(length), Some(scale)) => write!(f, "({length}, {scale})"),
            (Some(length), None) => write!(f, "({length})"),
            _ => Ok(()),
        }
    }
}

impl Display for FuncCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.qualifier.is_empty() {
            write!(f, "{}.", self.qualifier)?;
        }
        let name = self.name.as_str();
        let keyword = keyword_lookup(name, Dialect::MySql);
        if self.name.at() == AtCount::NoAt && keyword.is_some_and(Keyword::is_function_name) {
            write!(f, "{name}(")?;
        } else {
            write!(f, "{}(", self.name)?;
        }
        if self.distinct {
            f.write_str("distinct ")?;
        }
        write!(f, "{})", comma(&self.args))
    }
}

impl Display for CaseExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("case ")?;
        if let Some(expr) = &self.expr {
            write!(f, "{expr} ")?;
        }
        for when in &self.whens {
            write!(f, "when {} then {} ", when.cond, when.val)?;
        }
        if let Some(else_expr) = &self.else_expr {
            write!(f, "else {else_expr} ")?;
        }
        f.write_str("end")
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { kind, value } => match kind {
                LiteralKind::Str => write_string(f, value),
                LiteralKind::HexVal => write!(f, "X'{value}'"),
                LiteralKind::BitVal => write!(f, "B'{value}'"),
                LiteralKind::Int
                | LiteralKind::Float
                | LiteralKind::HexNum
                | LiteralKind::BitNum => f.write_str(value),
            },
            Self::Bool(true) => f.write_str("true"),
            Self::Bool(false) => f.write_str("false"),
            Self::Null => f.write_str("null"),
            Self::Column(col) => write!(f, "{col}"),
            Self::Argument(name) => write!(f, ":{name}"),
            Self::ListArg(name) => write!(f, "::{name}"),
            Self::Variable(var) => write!(f, "{var}"),
            Self::Or(left, right) => write_infix(f, left, "or", right, Precedence::OR),
            Self::Xor(left, right) => write_infix(f, left, "xor", right, Precedence::XOR),
            Self::And(left, right) => write_infix(f, left, "and", right, Precedence::AND),
            Self::Not(expr) => {
                f.write_str("not ")?;
                write_operand(f, expr, Precedence::NOT, false)
            }
            Self::Comparison {
                op,
                left,
                right,
                escape,
            } => {
                write_infix(f, left, op.as_str(), right, Precedence::COMPARISON)?;
                if let Some(escape) = escape {
                    f.write_str(" escape ")?;
                    write_operand(f, escape, Precedence::COMPARISON, true)?;
                }
                Ok(())
            }
            Self::Between {
                expr,
                from,
                to,
                negated,
            } => {
                write_operand(f, expr, Precedence::COMPARISON, false)?;
                f.write_str(if *negated { " not between " } else { " between " })?;
                write_operand(f, from, Precedence::COMPARISON, true)?;
                f.write_str(" and ")?;
                write_operand(f, to, Precedence::COMPARISON, true)
            }
            Self::Is { expr, op } => {
                write_operand(f, expr, Precedence::COMPARISON, false)?;
                write!(f, " {}", op.as_str())
            }
            Self::Binary { op, left, right } => {
                write_infix(f, left, op.as_str(), right, op.precedence())
            }
            Self::Unary { op, expr } => {
                f.write_str(op.as_str())?;
                if matches!(**expr, Self::Unary { .. }) {
                    f.write_char(' ')?;
                }
                write_operand(f, expr, Precedence::UNARY, false)
            }
            Self::Tuple(exprs) => write!(f, "({})", comma(exprs)),
            Self::Subquery(query) => write!(f, "({query})"),
            Self::Exists(query) => write!(f, "exists ({query})"),
            Self::FuncCall(call) => write!(f, "{call}"),
            Self::Case(case) => write!(f, "{case}"),
            Self::Cast { expr, ty } => write!(f, "cast({expr} as {ty})"),
            Self::Default(None) => f.write_str("default"),
            Self::Default(Some(col)) => write!(f, "default({col})"),
        }
    }
}

impl Display for SelectExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Star(None) => f.write_char('*'),
            Self::Star(Some(table)) => write!(f, "{table}.*"),
            Self::Aliased { expr, alias } => {
                write!(f, "{expr}")?;
                if let Some(alias) = alias {
                    write!(f, " as {alias}")?;
                }
                Ok(())
            }
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.expr, self.direction.as_str())
    }
}

fn write_tail(
    f: &mut Formatter<'_>,
    order_by: &[Order],
    limit: Option<&Limit>,
    lock: Lock,
) -> fmt::Result {
    if !order_by.is_empty() {
        write!(f, " order by {}", comma(order_by))?;
    }
    if let Some(limit) = limit {
        write!(f, "{limit}")?;
    }
    match lock {
        Lock::None => Ok(()),
        Lock::ForUpdate => f.write_str(" for update"),
        Lock::ShareMode => f.write_str(" lock in share mode"),
    }
}

impl Display for Limit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(" limit ")?;
        if let Some(offset) = &self.offset {
            write!(f, "{offset}, ")?;
        }
        write!(f, "{}", self.rowcount)
    }
}

impl Display for Select {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "select {}", self.comments)?;
        if self.distinct {
            f.write_str("distinct ")?;
        }
        write!(f, "{}", comma(&self.exprs))?;
        if !self.from.is_empty() {
            write!(f, " from {}", comma(&self.from))?;
        }
        if let Some(where_clause) = &self.where_clause {
            write!(f, " where {where_clause}")?;
        }
        if !self.group_by.is_empty() {
            write!(f, " group by {}", comma(&self.group_by))?;
        }
        if let Some(having) = &self.having {
            write!(f, " having {having}")?;
        }
        write_tail(f, &self.order_by, self.limit.as_ref(), self.lock)
    }
}

impl SelectStatement {
    /// Returns true if the query has ORDER BY, LIMIT or a lock clause.
    fn has_tail(&self) -> bool {
        let (order_by, limit, lock) = match self {
            Self::Select(s) => (&s.order_by, &s.limit, s.lock),
            Self::Union(u) => (&u.order_by, &u.limit, u.lock),
        };
        !order_by.is_empty() || limit.is_some() || lock != Lock::None
    }
}

impl Display for Union {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.left.has_tail() {
            write!(f, "({})", self.left)?;
        } else {
            write!(f, "{}", self.left)?;
        }
        f.write_str(if self.distinct { " union " } else { " union all " })?;
        if self.right.has_tail() || matches!(self.right, SelectStatement::Union(_)) {
            write!(f, "({})", self.right)?;
        } else {
            write!(f, "{}", self.right)?;
        }
        write_tail(f, &self.order_by, self.limit.as_ref(), self.lock)
    }
}

impl Display for SelectStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(select) => write!(f, "{select}"),
            Self::Union(union) => write!(f, "{union}"),
        }
    }
}

impl Display for TableExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aliased { expr, alias } => {
                match expr {
                    SimpleTableExpr::Table(name) => write!(f, "{name}")?,
                    SimpleTableExpr::Subquery(query) => write!(f, "({query})")?,
                }
                if let Some(alias) = alias {
                    write!(f, " as {alias}")?;
                }
                Ok(())
            }
            Self::Join(join) => write!(f, "{join}"),
        }
    }
}

impl Display for JoinTableExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.left, self.join.as_str())?;
        if matches!(self.right, TableExpr::Join(_)) {
            write!(f, "({})", self.right)?;
        } else {
            write!(f, "{}", self.right)?;
        }
        if let Some(on) = &self.condition.on {
            write!(f, " on {on}")?;
        }
        if !self.condition.using.is_empty() {
            write!(f, " using ({})", comma(&self.condition.using))?;
        }
        Ok(())
    }
}

impl Display for UpdateExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.expr)
    }
}

struct Row<'a>(&'a [Expr]);

impl Display for Row<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({})", comma(self.0))
    }
}

impl Display for Insert {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let verb = match self.action {
            InsertAction::Insert => "insert",
            InsertAction::Replace => "replace",
        };
        write!(f, "{verb} {}", self.comments)?;
        if self.ignore {
            f.write_str("ignore ")?;
        }
        write!(f, "into {}", self.table)?;
        if !self.columns.is_empty() {
            write!(f, " ({})", comma(&self.columns))?;
        }
        match &self.rows {
            InsertRows::Values(rows) => {
                let rows: Vec<Row<'_>> = rows.iter().map(|r| Row(r)).collect();
                write!(f, " values {}", comma(&rows))?;
            }
            InsertRows::Select(query) => write!(f, " {query}")?,
        }
        if !self.on_dup.is_empty() {
            write!(f, " on duplicate key update {}", comma(&self.on_dup))?;
        }
        Ok(())
    }
}

impl Display for Update {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "update {}", self.comments)?;
        if self.ignore {
            f.write_str("ignore ")?;
        }
        write!(f, "{} set {}", comma(&self.table_exprs), comma(&self.exprs))?;
        if let Some(where_clause) = &self.where_clause {
            write!(f, " where {where_clause}")?;
        }
        write_tail(f, &self.order_by, self.limit.as_ref(), Lock::None)
    }
}

impl Display for Delete {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "delete {}", self.comments)?;
        if !self.targets.is_empty() {
            write!(f, "{} ", comma(&self.targets))?;
        }
        write!(f, "from {}", comma(&self.table_exprs))?;
        if let Some(where_clause) = &self.where_clause {
            write!(f, " where {where_clause}")?;
        }
        write_tail(f, &self.order_by, self.limit.as_ref(), Lock::None)
    }
}

impl Display for SetExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let scope = self.scope.as_str();
        if !scope.is_empty() {
            write!(f, "{scope} ")?;
        }
        write!(f, "{} = {}", self.name, self.expr)
    }
}

impl Display for Set {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "set {}{}", self.comments, comma(&self.exprs))
    }
}

impl Display for ShowFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Like(pattern) => {
                f.write_str(" like ")?;
                write_string(f, pattern)
            }
            Self::Where(expr) => write!(f, " where {expr}"),
        }
    }
}

impl Display for ShowBasic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("show ")?;
        let full = if self.full { "full " } else { "" };
        match self.command {
            ShowCommand::Databases => f.write_str("databases")?,
            ShowCommand::Tables => write!(f, "{full}tables")?,
            ShowCommand::Variables(scope) | ShowCommand::Status(scope) => {
                if !scope.as_str().is_empty() {
                    write!(f, "{} ", scope.as_str())?;
                }
                let what = if matches!(self.command, ShowCommand::Variables(_)) {
                    "variables"
                } else {
                    "status"
                };
                f.write_str(what)?;
            }
            ShowCommand::Columns => write!(f, "{full}columns from {}", self.table)?,
            ShowCommand::CreateTable => write!(f, "create table {}", self.table)?,
        }
        if let Some(db) = &self.db_name {
            write!(f, " from {db}")?;
        }
        if let Some(filter) = &self.filter {
            write!(f, "{filter}")?;
        }
        Ok(())
    }
}

impl Display for Show {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(show) => write!(f, "{show}"),
            Self::Other(text) => write!(f, "show {text}"),
        }
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data_type)?;
        if !self.values.is_empty() {
            f.write_char('(')?;
            for (i, value) in self.values.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_string(f, value)?;
            }
            f.write_char(')')?;
        } else {
            match (self.length, self.scale) {
                (Some(length), Some(scale)) => write!(f, "({length}, {scale})")?,
                (Some(length), None) => write!(f, "({length})")?,
                _ => {}
            }
        }
        if self.unsigned {
            f.write_str(" unsigned")?;
        }
        match self.null {
            Some(false) => f.write_str(" not null")?,
            Some(true) => f.write_str(" null")?,
            None => {}
        }
        if let Some(default) = &self.default {
            f.write_str(" default ")?;
            write_operand(f, default, Precedence::UNARY, false)?;
        }
        if self.autoincrement {
            f.write_str(" auto_increment")?;
        }
        match self.key {
            ColumnKey::None => {}
            ColumnKey::Primary => f.write_str(" primary key")?,
            ColumnKey::Unique => f.write_str(" unique key")?,
        }
        if let Some(comment) = &self.comment {
            f.write_str(" comment ")?;
            write_string(f, comment)?;
        }
        Ok(())
    }
}

impl Display for ColumnDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.ty)
    }
}

impl Display for IndexDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self.kind {
            IndexKind::Primary => "primary key",
            IndexKind::Unique => "unique key",
            IndexKind::Index => "key",
        })?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        write!(f, " ({})", comma(&self.columns))
    }
}

impl Display for TableSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}", comma(&self.columns))?;
        if !self.indexes.is_empty() {
            if !self.columns.is_empty() {
                f.write_str(", ")?;
            }
            write!(f, "{}", comma(&self.indexes))?;
        }
        f.write_char(')')?;
        if !self.options.is_empty() {
            write!(f, " {}", self.options)?;
        }
        Ok(())
    }
}

impl Display for CreateTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("create table ")?;
        if self.if_not_exists {
            f.write_str("if not exists ")?;
        }
        write!(f, "{}", self.table)?;
        if let Some(spec) = &self.spec {
            write!(f, " {spec}")?;
        }
        if let Some(like) = &self.like {
            write!(f, " like {like}")?;
        }
        Ok(())
    }
}

impl Display for AlterAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddColumn(column) => write!(f, "add column {column}"),
            Self::AddIndex(index) => write!(f, "add {index}"),
            Self::DropColumn(name) => write!(f, "drop column {name}"),
            Self::Rename(table) => write!(f, "rename to {table}"),
        }
    }
}

impl Display for DropTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("drop table ")?;
        if self.if_exists {
            f.write_str("if exists ")?;
        }
        write!(f, "{}", comma(&self.tables))
    }
}

impl Display for RenamePair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

impl Display for CreateDatabase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("create database ")?;
        if self.if_not_exists {
            f.write_str("if not exists ")?;
        }
        write!(f, "{}", self.name)
    }
}

impl Display for DropDatabase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("drop database ")?;
        if self.if_exists {
            f.write_str("if exists ")?;
        }
        write!(f, "{}", self.name)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(s) => write!(f, "{s}"),
            Self::Union(s) => write!(f, "{s}"),
            Self::Insert(s) => write!(f, "{s}"),
            Self::Update(s) => write!(f, "{s}"),
            Self::Delete(s) => write!(f, "{s}"),
            Self::Set(s) => write!(f, "{s}"),
            Self::Show(s) => write!(f, "{s}"),
            Self::Use(db) if db.is_empty() => f.write_str("use"),
            Self::Use(db) => write!(f, "use {db}"),
            Self::Begin => f.write_str("begin"),
            Self::Commit => f.write_str("commit"),
            Self::Rollback => f.write_str("rollback"),
            Self::CreateTable(s) => write!(f, "{s}"),
            Self::AlterTable(s) => write!(f, "alter table {} {}", s.table, comma(&s.actions)),
            Self::DropTable(s) => write!(f, "{s}"),
            Self::RenameTable(pairs) => write!(f, "rename table {}", comma(pairs)),
            Self::TruncateTable(table) => write!(f, "truncate table {table}"),
            Self::CreateDatabase(s) => write!(f, "{s}"),
            Self::DropDatabase(s) => write!(f, "{s}"),
            Self::OtherRead(text) | Self::OtherAdmin(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, ComparisonOp, UnaryOp};

    #[test]
    fn test_identifier_quoting() {
        assert_eq!(ColIdent::new("a").to_string(), "a");
        assert_eq!(ColIdent::new("select").to_string(), "`select`");
        assert_eq!(ColIdent::new("a`b").to_string(), "`a``b`");
        assert_eq!(ColIdent::new_with_at("x y", AtCount::SingleAt).to_string(), "@`x y`");
        assert_eq!(
            ColIdent::new_with_at("session.x", AtCount::DoubleAt).to_string(),
            "@@session.x"
        );
        assert_eq!(TableName::qualified("db", "t").to_string(), "db.t");
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(Expr::string("it's\n").to_string(), r"'it\'s\n'");
        assert_eq!(Expr::string(r"50\%").to_string(), r"'50\\%'");
    }

    #[test]
    fn test_minimal_parentheses() {
        let a = || Expr::column("a");
        let b = || Expr::column("b");
        let c = || Expr::column("c");

        let sum = a().binary(BinaryOp::Plus, b()).binary(BinaryOp::Mult, c());
        assert_eq!(sum.to_string(), "(a + b) * c");

        let right = a().binary(BinaryOp::Minus, b().binary(BinaryOp::Minus, c()));
        assert_eq!(right.to_string(), "a - (b - c)");

        let left = a().binary(BinaryOp::Minus, b()).binary(BinaryOp::Minus, c());
        assert_eq!(left.to_string(), "a - b - c");

        let logic = a().or(b()).and(c());
        assert_eq!(logic.to_string(), "(a or b) and c");

        let not = Expr::Not(Box::new(a().eq(b())));
        assert_eq!(not.to_string(), "not a = b");

        let neg = Expr::Unary {
            op: UnaryOp::Minus,
            expr: Box::new(Expr::Unary {
                op: UnaryOp::Minus,
                expr: Box::new(Expr::int(1)),
            }),
        };
        assert_eq!(neg.to_string(), "- -1");
    }

    #[test]
    fn test_comparison_forms() {
        let in_list = Expr::column("a").compare(
            ComparisonOp::NotIn,
            Expr::Tuple(vec![Expr::int(1), Expr::int(2)]),
        );
        assert_eq!(in_list.to_string(), "a not in (1, 2)");

        let between = Expr::Between {
            expr: Box::new(Expr::column("a")),
            from: Box::new(Expr::int(1)),
            to: Box::new(Expr::int(2)),
            negated: true,
        };
        assert_eq!(between.to_string(), "a not between 1 and 2");
    }

    #[test]
    fn test_select_rendering() {
        let select = Select {
            comments: Comments(vec!["/* c */".into()]),
            exprs: vec![SelectExpr::Star(None)],
            from: vec![TableExpr::table(TableName::new("t"))],
            where_clause: Some(Expr::column("a").eq(Expr::Argument("v1".into()))),
            limit: Some(Limit {
                offset: Some(Expr::int(5)),
                rowcount: Expr::int(10),
            }),
            lock: Lock::ForUpdate,
            ..Select::default()
        };
        assert_eq!(
            select.to_string(),
            "select /* c */ * from t where a = :v1 limit 5, 10 for update"
        );
    }

    #[test]
    fn test_statement_rendering() {
        assert_eq!(Statement::Use(TableIdent::default()).to_string(), "use");
        assert_eq!(Statement::Begin.to_string(), "begin");
        let drop = Statement::DropTable(DropTable {
            tables: vec![TableName::new("a"), TableName::new("b")],
            if_exists: true,
            fully_parsed: true,
        });
        assert_eq!(drop.to_string(), "drop table if exists a, b");
    }
}

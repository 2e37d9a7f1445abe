//! SQL statement AST types.

use super::{
    ColIdent, ColName, ColumnDefinition, Comments, Expr, IndexDefinition, TableIdent, TableName,
};

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// An ORDER BY clause entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Order {
    /// The expression to order by.
    pub expr: Expr,
    /// The direction (ASC or DESC).
    pub direction: OrderDirection,
}

/// A LIMIT clause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Limit {
    pub offset: Option<Expr>,
    pub rowcount: Expr,
}

/// Row locking requested by a SELECT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Lock {
    #[default]
    None,
    /// `FOR UPDATE`
    ForUpdate,
    /// `LOCK IN SHARE MODE`
    ShareMode,
}

/// One item of a select list or of function arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SelectExpr {
    /// `*` or `t.*`.
    Star(Option<TableName>),
    /// An expression with an optional alias.
    Aliased {
        expr: Expr,
        alias: Option<ColIdent>,
    },
}

impl SelectExpr {
    /// Creates an unaliased expression item.
    #[must_use]
    pub const fn expr(expr: Expr) -> Self {
        Self::Aliased { expr, alias: None }
    }
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum JoinType {
    /// `JOIN`, `INNER JOIN` or `CROSS JOIN`.
    Normal,
    /// `STRAIGHT_JOIN`
    Straight,
    /// `LEFT [OUTER] JOIN`
    Left,
    /// `RIGHT [OUTER] JOIN`
    Right,
    /// `NATURAL JOIN`
    Natural,
    /// `NATURAL LEFT [OUTER] JOIN`
    NaturalLeft,
    /// `NATURAL RIGHT [OUTER] JOIN`
    NaturalRight,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "join",
            Self::Straight => "straight_join",
            Self::Left => "left join",
            Self::Right => "right join",
            Self::Natural => "natural join",
            Self::NaturalLeft => "natural left join",
            Self::NaturalRight => "natural right join",
        }
    }
}

/// The condition of a join.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JoinCondition {
    pub on: Option<Expr>,
    pub using: Vec<ColIdent>,
}

/// A joined pair of table expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JoinTableExpr {
    pub left: TableExpr,
    pub join: JoinType,
    pub right: TableExpr,
    pub condition: JoinCondition,
}

/// What an aliased table expression reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SimpleTableExpr {
    /// A named table.
    Table(TableName),
    /// A derived table.
    Subquery(Box<SelectStatement>),
}

/// A table reference in FROM, UPDATE and DELETE clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TableExpr {
    /// A table or derived table with an optional alias.
    Aliased {
        expr: SimpleTableExpr,
        alias: Option<TableIdent>,
    },
    /// A join.
    Join(Box<JoinTableExpr>),
}

impl TableExpr {
    /// Creates an unaliased table reference.
    #[must_use]
    pub fn table(name: TableName) -> Self {
        Self::Aliased {
            expr: SimpleTableExpr::Table(name),
            alias: None,
        }
    }
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Select {
    pub comments: Comments,
    pub distinct: bool,
    pub exprs: Vec<SelectExpr>,
    pub from: Vec<TableExpr>,
    pub where_clause: Option<Expr>,
    pub group_by: Vec<Expr>,
    pub having: Option<Expr>,
    pub order_by: Vec<Order>,
    pub limit: Option<Limit>,
    pub lock: Lock,
}

/// A UNION of two queries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Union {
    pub left: SelectStatement,
    pub right: SelectStatement,
    /// `UNION ALL` when false.
    pub distinct: bool,
    pub order_by: Vec<Order>,
    pub limit: Option<Limit>,
    pub lock: Lock,
}

/// A query usable as a subquery, derived table or INSERT source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SelectStatement {
    Select(Box<Select>),
    Union(Box<Union>),
}

impl SelectStatement {
    /// Sets the lock clause of the outermost query.
    pub fn set_lock(&mut self, lock: Lock) {
        match self {
            Self::Select(select) => select.lock = lock,
            Self::Union(union) => union.lock = lock,
        }
    }
}

impl From<SelectStatement> for Statement {
    fn from(stmt: SelectStatement) -> Self {
        match stmt {
            SelectStatement::Select(select) => Self::Select(select),
            SelectStatement::Union(union) => Self::Union(union),
        }
    }
}

/// Whether an insert replaces conflicting rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InsertAction {
    Insert,
    Replace,
}

/// The rows of an INSERT.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InsertRows {
    /// `VALUES (...), (...)`
    Values(Vec<Vec<Expr>>),
    /// `SELECT ...`
    Select(SelectStatement),
}

/// A `col = expr` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UpdateExpr {
    pub name: ColName,
    pub expr: Expr,
}

/// An INSERT or REPLACE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Insert {
    pub action: InsertAction,
    pub comments: Comments,
    pub ignore: bool,
    pub table: TableName,
    pub columns: Vec<ColIdent>,
    pub rows: InsertRows,
    /// `ON DUPLICATE KEY UPDATE` assignments.
    pub on_dup: Vec<UpdateExpr>,
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Update {
    pub comments: Comments,
    pub ignore: bool,
    pub table_exprs: Vec<TableExpr>,
    pub exprs: Vec<UpdateExpr>,
    pub where_clause: Option<Expr>,
    pub order_by: Vec<Order>,
    pub limit: Option<Limit>,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Delete {
    pub comments: Comments,
    /// Tables deleted from in the multi-table form.
    pub targets: Vec<TableName>,
    pub table_exprs: Vec<TableExpr>,
    pub where_clause: Option<Expr>,
    pub order_by: Vec<Order>,
    pub limit: Option<Limit>,
}

/// The scope of a SET assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Scope {
    /// No scope written.
    #[default]
    Implicit,
    Session,
    Global,
    Local,
    VitessMetadata,
}

impl Scope {
    /// Returns the SQL keyword of the scope, empty for [`Scope::Implicit`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Implicit => "",
            Self::Session => "session",
            Self::Global => "global",
            Self::Local => "local",
            Self::VitessMetadata => "vitess_metadata",
        }
    }
}

/// One assignment of a SET statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SetExpr {
    pub scope: Scope,
    pub name: ColIdent,
    pub expr: Expr,
}

/// A SET statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Set {
    pub comments: Comments,
    pub exprs: Vec<SetExpr>,
}

/// The filter of a SHOW statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ShowFilter {
    /// `LIKE 'pattern'`
    Like(String),
    /// `WHERE expr`
    Where(Expr),
}

/// The SHOW commands with a structured representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ShowCommand {
    Databases,
    Tables,
    /// `SHOW [GLOBAL|SESSION] VARIABLES`
    Variables(Scope),
    /// `SHOW [GLOBAL|SESSION] STATUS`
    Status(Scope),
    Columns,
    CreateTable,
}

/// A structured SHOW statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShowBasic {
    pub command: ShowCommand,
    pub full: bool,
    /// The table of `SHOW COLUMNS` and `SHOW CREATE TABLE`.
    pub table: TableName,
    /// The database of `FROM db`.
    pub db_name: Option<TableIdent>,
    pub filter: Option<ShowFilter>,
}

/// A SHOW statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Show {
    Basic(ShowBasic),
    /// Any other SHOW; keeps the text after `SHOW`.
    Other(String),
}

/// `CREATE TABLE` contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableSpec {
    pub columns: Vec<ColumnDefinition>,
    pub indexes: Vec<IndexDefinition>,
    /// Table options after the definition list, verbatim.
    pub options: String,
}

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CreateTable {
    pub table: TableName,
    pub if_not_exists: bool,
    pub spec: Option<TableSpec>,
    /// `CREATE TABLE t LIKE other`
    pub like: Option<TableName>,
    pub fully_parsed: bool,
}

impl CreateTable {
    /// Creates the prefix node of `CREATE TABLE name`.
    #[must_use]
    pub const fn new(table: TableName) -> Self {
        Self {
            table,
            if_not_exists: false,
            spec: None,
            like: None,
            fully_parsed: true,
        }
    }
}

/// One ALTER TABLE action.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AlterAction {
    AddColumn(ColumnDefinition),
    AddIndex(IndexDefinition),
    DropColumn(ColIdent),
    /// `RENAME [TO|AS] name`
    Rename(TableName),
}

/// An ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlterTable {
    pub table: TableName,
    pub actions: Vec<AlterAction>,
    pub fully_parsed: bool,
}

/// A DROP TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DropTable {
    pub tables: Vec<TableName>,
    pub if_exists: bool,
    pub fully_parsed: bool,
}

/// One `from TO to` pair of RENAME TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenamePair {
    pub from: TableName,
    pub to: TableName,
}

/// A CREATE DATABASE or CREATE SCHEMA statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CreateDatabase {
    pub name: TableIdent,
    pub if_not_exists: bool,
    pub fully_parsed: bool,
}

/// A DROP DATABASE or DROP SCHEMA statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DropDatabase {
    pub name: TableIdent,
    pub if_exists: bool,
    pub fully_parsed: bool,
}

/// A top-level SQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Statement {
    Select(Box<Select>),
    Union(Box<Union>),
    Insert(Box<Insert>),
    Update(Box<Update>),
    Delete(Box<Delete>),
    Set(Box<Set>),
    Show(Box<Show>),
    /// `USE [db]`
    Use(TableIdent),
    Begin,
    Commit,
    Rollback,
    CreateTable(Box<CreateTable>),
    AlterTable(Box<AlterTable>),
    DropTable(DropTable),
    RenameTable(Vec<RenamePair>),
    TruncateTable(TableName),
    CreateDatabase(CreateDatabase),
    DropDatabase(DropDatabase),
    /// A read-only statement kept verbatim (`EXPLAIN`, `DESCRIBE`).
    OtherRead(String),
    /// An administrative statement kept verbatim (`REPAIR`, `GRANT`, ...).
    OtherAdmin(String),
}

impl Statement {
    /// Returns true for table and database DDL.
    #[must_use]
    pub const fn is_ddl(&self) -> bool {
        matches!(
            self,
            Self::CreateTable(_)
                | Self::AlterTable(_)
                | Self::DropTable(_)
                | Self::RenameTable(_)
                | Self::TruncateTable(_)
                | Self::CreateDatabase(_)
                | Self::DropDatabase(_)
        )
    }

    /// Marks a recoverable DDL statement as fully or partially parsed.
    /// Other statements are left unchanged.
    pub fn set_fully_parsed(&mut self, fully_parsed: bool) {
        match self {
            Self::CreateTable(s) => s.fully_parsed = fully_parsed,
            Self::AlterTable(s) => s.fully_parsed = fully_parsed,
            Self::DropTable(s) => s.fully_parsed = fully_parsed,
            Self::CreateDatabase(s) => s.fully_parsed = fully_parsed,
            Self::DropDatabase(s) => s.fully_parsed = fully_parsed,
            _ => {}
        }
    }

    /// Returns false only for DDL recovered from a syntax error.
    #[must_use]
    pub fn is_fully_parsed(&self) -> bool {
        match self {
            Self::CreateTable(s) => s.fully_parsed,
            Self::AlterTable(s) => s.fully_parsed,
            Self::DropTable(s) => s.fully_parsed,
            Self::CreateDatabase(s) => s.fully_parsed,
            Self::DropDatabase(s) => s.fully_parsed,
            _ => true,
        }
    }

    /// Returns the comments attached to the statement, if it carries any.
    #[must_use]
    pub fn comments(&self) -> Option<&Comments> {
        match self {
            Self::Select(s) => Some(&s.comments),
            Self::Insert(s) => Some(&s.comments),
            Self::Update(s) => Some(&s.comments),
            Self::Delete(s) => Some(&s.comments),
            Self::Set(s) => Some(&s.comments),
            _ => None,
        }
    }

    /// Returns the comments attached to the statement for modification.
    pub fn comments_mut(&mut self) -> Option<&mut Comments> {
        match self {
            Self::Select(s) => Some(&mut s.comments),
            Self::Insert(s) => Some(&mut s.comments),
            Self::Update(s) => Some(&mut s.comments),
            Self::Delete(s) => Some(&mut s.comments),
            Self::Set(s) => Some(&mut s.comments),
            _ => None,
        }
    }
}

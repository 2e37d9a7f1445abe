//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Every node renders back to canonical SQL through [`std::fmt::Display`].

mod comments;
mod expression;
mod format;
mod ident;
mod statement;
mod types;

pub use comments::Comments;
pub use expression::{
    BinaryOp, CaseExpr, ColName, ComparisonOp, Expr, FuncCall, IsOp, LiteralKind, Precedence,
    UnaryOp, When,
};
pub use ident::{is_plain_identifier, AtCount, ColIdent, TableIdent, TableName};
pub use statement::{
    AlterAction, AlterTable, CreateDatabase, CreateTable, Delete, DropDatabase, DropTable,
    Insert, InsertAction, InsertRows, JoinCondition, JoinTableExpr, JoinType, Limit, Lock, Order,
    OrderDirection, RenamePair, Scope, Select, SelectExpr, SelectStatement, Set, SetExpr, Show,
    ShowBasic, ShowCommand, ShowFilter, SimpleTableExpr, Statement, TableExpr, TableSpec, Union,
    Update, UpdateExpr,
};
pub use types::{
    ColumnDefinition, ColumnKey, ColumnType, ConvertType, DataType, IndexDefinition, IndexKind,
};

//! SQL data type and column definitions.

use core::fmt;

use super::{ColIdent, Expr};
use crate::lexer::Keyword;

/// SQL data types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DataType {
    // Integer types
    Bit,
    Tinyint,
    Smallint,
    Mediumint,
    Int,
    Integer,
    Bigint,

    // Fixed and floating point
    Decimal,
    Numeric,
    Float,
    Double,
    Real,

    // String and binary types
    Char,
    Varchar,
    Binary,
    Varbinary,
    Text,
    Blob,

    // Date/time types
    Date,
    Time,
    Datetime,
    Timestamp,

    // Other
    Boolean,
    Bool,
    Json,

    /// Any other type name, lower-cased (`enum`, `signed`, `mediumtext`, ...).
    Custom(String),
}

impl DataType {
    /// Returns the data type named by `keyword`, if any.
    #[must_use]
    pub const fn from_keyword(keyword: Keyword) -> Option<Self> {
        Some(match keyword {
            Keyword::Bit => Self::Bit,
            Keyword::Tinyint => Self::Tinyint,
            Keyword::Smallint => Self::Smallint,
            Keyword::Mediumint => Self::Mediumint,
            Keyword::Int => Self::Int,
            Keyword::Integer => Self::Integer,
            Keyword::Bigint => Self::Bigint,
            Keyword::Decimal => Self::Decimal,
            Keyword::Numeric => Self::Numeric,
            Keyword::Float => Self::Float,
            Keyword::Double => Self::Double,
            Keyword::Real => Self::Real,
            Keyword::Char => Self::Char,
            Keyword::Varchar => Self::Varchar,
            Keyword::Binary => Self::Binary,
            Keyword::Varbinary => Self::Varbinary,
            Keyword::Text => Self::Text,
            Keyword::Blob => Self::Blob,
            Keyword::Date => Self::Date,
            Keyword::Time => Self::Time,
            Keyword::Datetime => Self::Datetime,
            Keyword::Timestamp => Self::Timestamp,
            Keyword::Boolean => Self::Boolean,
            Keyword::Bool => Self::Bool,
            Keyword::Json => Self::Json,
            _ => return None,
        })
    }

    /// Returns the lower-case SQL name of the type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bit => "bit",
            Self::Tinyint => "tinyint",
            Self::Smallint => "smallint",
            Self::Mediumint => "mediumint",
            Self::Int => "int",
            Self::Integer => "integer",
            Self::Bigint => "bigint",
            Self::Decimal => "decimal",
            Self::Numeric => "numeric",
            Self::Float => "float",
            Self::Double => "double",
            Self::Real => "real",
            Self::Char => "char",
            Self::Varchar => "varchar",
            Self::Binary => "binary",
            Self::Varbinary => "varbinary",
            Self::Text => "text",
            Self::Blob => "blob",
            Self::Date => "date",
            Self::Time => "time",
            Self::Datetime => "datetime",
            Self::Timestamp => "timestamp",
            Self::Boolean => "boolean",
            Self::Bool => "bool",
            Self::Json => "json",
            Self::Custom(name) => name,
        }
    }

    /// Returns true for the integer family.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Bit
                | Self::Tinyint
                | Self::Smallint
                | Self::Mediumint
                | Self::Int
                | Self::Integer
                | Self::Bigint
        )
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The target type of a `CAST`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConvertType {
    pub data_type: DataType,
    pub length: Option<u32>,
    pub scale: Option<u32>,
}

impl ConvertType {
    /// Creates a target type without length.
    #[must_use]
    pub const fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            length: None,
            scale: None,
        }
    }
}

/// Key attribute declared inline on a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ColumnKey {
    #[default]
    None,
    Primary,
    Unique,
}

/// The type and attributes of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnType {
    /// Data type.
    pub data_type: DataType,
    /// Display length or precision.
    pub length: Option<u32>,
    /// Scale, for fixed and floating point types.
    pub scale: Option<u32>,
    /// Values of `enum(...)` and `set(...)`.
    pub values: Vec<String>,
    pub unsigned: bool,
    /// `Some(false)` for `NOT NULL`, `Some(true)` for an explicit `NULL`.
    pub null: Option<bool>,
    pub default: Option<Expr>,
    pub autoincrement: bool,
    pub key: ColumnKey,
    pub comment: Option<String>,
}

impl ColumnType {
    /// Creates a column type without attributes.
    #[must_use]
    pub const fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            length: None,
            scale: None,
            values: Vec::new(),
            unsigned: false,
            null: None,
            default: None,
            autoincrement: false,
            key: ColumnKey::None,
            comment: None,
        }
    }
}

/// A column definition for CREATE TABLE and ALTER TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnDefinition {
    /// Column name.
    pub name: ColIdent,
    /// Type and attributes.
    pub ty: ColumnType,
}

impl ColumnDefinition {
    /// Creates a new column definition.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: ColIdent::new(name),
            ty: ColumnType::new(data_type),
        }
    }

    /// Sets the column as NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.ty.null = Some(false);
        self
    }

    /// Sets the column as PRIMARY KEY.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.ty.key = ColumnKey::Primary;
        self
    }

    /// Sets the column as AUTO_INCREMENT.
    #[must_use]
    pub fn autoincrement(mut self) -> Self {
        self.ty.autoincrement = true;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default(mut self, expr: Expr) -> Self {
        self.ty.default = Some(expr);
        self
    }
}

/// The kind of a table-level index definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IndexKind {
    Primary,
    Unique,
    Index,
}

/// A table-level index definition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IndexDefinition {
    pub kind: IndexKind,
    /// Index name; primary keys have none.
    pub name: Option<ColIdent>,
    pub columns: Vec<ColIdent>,
}

//! Token types for the SQL tokenizer.

use std::borrow::Cow;

use super::Span;

macro_rules! keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// SQL keywords known to at least one dialect.
        ///
        /// Whether a word is a keyword, and whether it is reserved, depends on
        /// the dialect's keyword table; see [`crate::lexer::KeywordTable`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Returns the keyword as an upper-case string.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }
        }
    };
}

keywords! {
    // Queries
    Select => "SELECT",
    From => "FROM",
    Where => "WHERE",
    Group => "GROUP",
    By => "BY",
    Having => "HAVING",
    Order => "ORDER",
    Limit => "LIMIT",
    Offset => "OFFSET",
    Distinct => "DISTINCT",
    All => "ALL",
    Union => "UNION",
    Intersect => "INTERSECT",
    Except => "EXCEPT",
    For => "FOR",
    Lock => "LOCK",
    Share => "SHARE",
    Mode => "MODE",

    // Joins
    Join => "JOIN",
    Inner => "INNER",
    Left => "LEFT",
    Right => "RIGHT",
    Cross => "CROSS",
    Outer => "OUTER",
    Natural => "NATURAL",
    StraightJoin => "STRAIGHT_JOIN",
    On => "ON",
    Using => "USING",
    As => "AS",

    // Data manipulation
    Insert => "INSERT",
    Replace => "REPLACE",
    Ignore => "IGNORE",
    Into => "INTO",
    Values => "VALUES",
    Duplicate => "DUPLICATE",
    Update => "UPDATE",
    Delete => "DELETE",
    Set => "SET",

    // Session and administration
    Show => "SHOW",
    Full => "FULL",
    Tables => "TABLES",
    Databases => "DATABASES",
    Schemas => "SCHEMAS",
    Variables => "VARIABLES",
    Status => "STATUS",
    Columns => "COLUMNS",
    Fields => "FIELDS",
    Use => "USE",
    Begin => "BEGIN",
    Start => "START",
    Transaction => "TRANSACTION",
    Commit => "COMMIT",
    Rollback => "ROLLBACK",
    Work => "WORK",
    Session => "SESSION",
    Global => "GLOBAL",
    Local => "LOCAL",
    VitessMetadata => "VITESS_METADATA",
    Explain => "EXPLAIN",
    Describe => "DESCRIBE",
    Repair => "REPAIR",
    Optimize => "OPTIMIZE",
    Analyze => "ANALYZE",
    Grant => "GRANT",
    Revoke => "REVOKE",
    Unlock => "UNLOCK",
    Flush => "FLUSH",

    // Data definition
    Create => "CREATE",
    Alter => "ALTER",
    Drop => "DROP",
    Rename => "RENAME",
    Truncate => "TRUNCATE",
    Table => "TABLE",
    Database => "DATABASE",
    Schema => "SCHEMA",
    Add => "ADD",
    Column => "COLUMN",
    To => "TO",
    If => "IF",
    Exists => "EXISTS",
    Primary => "PRIMARY",
    Key => "KEY",
    Keys => "KEYS",
    Unique => "UNIQUE",
    Index => "INDEX",
    Default => "DEFAULT",
    AutoIncrement => "AUTO_INCREMENT",
    Comment => "COMMENT",
    Unsigned => "UNSIGNED",

    // Ordering
    Asc => "ASC",
    Desc => "DESC",

    // Operators and literals
    And => "AND",
    Or => "OR",
    Xor => "XOR",
    Not => "NOT",
    Is => "IS",
    Null => "NULL",
    True => "TRUE",
    False => "FALSE",
    In => "IN",
    Between => "BETWEEN",
    Like => "LIKE",
    Regexp => "REGEXP",
    Rlike => "RLIKE",
    Escape => "ESCAPE",
    Div => "DIV",
    Mod => "MOD",
    Case => "CASE",
    When => "WHEN",
    Then => "THEN",
    Else => "ELSE",
    End => "END",
    Cast => "CAST",

    // Data types
    Bit => "BIT",
    Tinyint => "TINYINT",
    Smallint => "SMALLINT",
    Mediumint => "MEDIUMINT",
    Int => "INT",
    Integer => "INTEGER",
    Bigint => "BIGINT",
    Decimal => "DECIMAL",
    Numeric => "NUMERIC",
    Float => "FLOAT",
    Double => "DOUBLE",
    Real => "REAL",
    Char => "CHAR",
    Varchar => "VARCHAR",
    Binary => "BINARY",
    Varbinary => "VARBINARY",
    Text => "TEXT",
    Blob => "BLOB",
    Date => "DATE",
    Time => "TIME",
    Datetime => "DATETIME",
    Timestamp => "TIMESTAMP",
    Boolean => "BOOLEAN",
    Bool => "BOOL",
    Json => "JSON",
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Literals
    /// String literal (`'abc'`, or `"abc"` where the dialect allows it).
    String,
    /// Integer literal (`42`).
    Integer,
    /// Decimal or floating-point literal (`3.14`, `.5`, `1e10`).
    Float,
    /// Hexadecimal number (`0x1F`).
    HexNum,
    /// Hexadecimal string (`X'1F'`).
    HexString,
    /// Bit number (`0b101`).
    BitNum,
    /// Bit string (`B'101'`).
    BitString,

    // Names
    /// Identifier, bare or quoted.
    Identifier,
    /// SQL keyword of the active dialect.
    Keyword(Keyword),
    /// Named or positional bind variable (`:name`, `?`).
    ValueArg,
    /// List bind variable (`::name`).
    ListArg,
    /// User-defined variable (`@name`).
    AtId,
    /// System variable (`@@name`).
    AtAtId,

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// =
    Eq,
    /// <=>
    NullSafeEq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// &
    BitAnd,
    /// |
    BitOr,
    /// ^
    BitXor,
    /// ~
    BitNot,
    /// !
    Bang,
    /// <<
    LeftShift,
    /// >>
    RightShift,
    /// &&
    AmpAmp,
    /// ||
    PipePipe,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,

    // Special
    /// A comment, returned only when [`super::Tokenizer::set_allow_comments`] is on.
    Comment,
    /// A lexical error; the tokenizer's last error holds the details.
    Error,
    /// End of input.
    Eof,
}

impl Keyword {
    /// Returns true for keywords that are also accepted as function names
    /// when directly followed by `(`.
    #[must_use]
    pub const fn is_function_name(self) -> bool {
        matches!(
            self,
            Self::Left
                | Self::Right
                | Self::Replace
                | Self::Insert
                | Self::If
                | Self::Mod
                | Self::Char
                | Self::Database
                | Self::Schema
                | Self::Values
                | Self::Date
                | Self::Time
                | Self::Timestamp
        )
    }
}

impl TokenKind {
    /// Returns true for the kinds that carry a literal value.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::String
                | Self::Integer
                | Self::Float
                | Self::HexNum
                | Self::HexString
                | Self::BitNum
                | Self::BitString
        )
    }
}

/// A token with its processed text and its location in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The processed text: unescaped string contents, unquoted identifier,
    /// variable name without sigils, or the raw text for everything else.
    pub text: Cow<'a, str>,
    /// The location in the source.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<Cow<'a, str>>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Creates an end-of-input token at `pos`.
    #[must_use]
    pub const fn eof(pos: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: Cow::Borrowed(""),
            span: Span::new(pos, pos),
        }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Detaches the token from the source buffer.
    #[must_use]
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            text: Cow::Owned(self.text.into_owned()),
            span: self.span,
        }
    }
}

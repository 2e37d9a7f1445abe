//! Expression AST types.

use super::{ColIdent, ConvertType, SelectExpr, SelectStatement, TableIdent, TableName};

/// The lexical family of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LiteralKind {
    /// String literal; the value is unescaped.
    Str,
    /// Integer literal.
    Int,
    /// Decimal or floating-point literal.
    Float,
    /// Hexadecimal number (`0x1F`); the value keeps its prefix.
    HexNum,
    /// Hexadecimal string (`X'1F'`); the value is the digits.
    HexVal,
    /// Bit number (`0b101`); the value keeps its prefix.
    BitNum,
    /// Bit string (`B'101'`); the value is the digits.
    BitVal,
}

/// A possibly qualified column reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColName {
    /// The column.
    pub name: ColIdent,
    /// The table, empty when unqualified.
    pub qualifier: TableName,
}

impl ColName {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ColIdent::new(name),
            qualifier: TableName::default(),
        }
    }

    /// Creates a column reference qualified by a table.
    #[must_use]
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: ColIdent::new(name),
            qualifier: TableName::new(table),
        }
    }
}

/// Comparison operators, including the set and pattern predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ComparisonOp {
    Eq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    NotEq,
    NullSafeEq,
    In,
    NotIn,
    Like,
    NotLike,
    Regexp,
    NotRegexp,
}

impl ComparisonOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::NotEq => "!=",
            Self::NullSafeEq => "<=>",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Like => "like",
            Self::NotLike => "not like",
            Self::Regexp => "regexp",
            Self::NotRegexp => "not regexp",
        }
    }

    /// Returns the negated form of `IN`, `LIKE` and `REGEXP`.
    #[must_use]
    pub const fn negated(self) -> Option<Self> {
        match self {
            Self::In => Some(Self::NotIn),
            Self::Like => Some(Self::NotLike),
            Self::Regexp => Some(Self::NotRegexp),
            _ => None,
        }
    }
}

/// `IS` predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IsOp {
    Null,
    NotNull,
    True,
    NotTrue,
    False,
    NotFalse,
}

impl IsOp {
    /// Returns the SQL representation of the predicate.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "is null",
            Self::NotNull => "is not null",
            Self::True => "is true",
            Self::NotTrue => "is not true",
            Self::False => "is false",
            Self::NotFalse => "is not false",
        }
    }
}

/// Arithmetic and bitwise binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BinaryOp {
    BitAnd,
    BitOr,
    BitXor,
    Plus,
    Minus,
    Mult,
    Div,
    IntDiv,
    Mod,
    ShiftLeft,
    ShiftRight,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mult => "*",
            Self::Div => "/",
            Self::IntDiv => "div",
            Self::Mod => "%",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
        }
    }

    /// Returns the precedence of the operator (higher = binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::BitOr => Precedence::BIT_OR,
            Self::BitAnd => Precedence::BIT_AND,
            Self::ShiftLeft | Self::ShiftRight => Precedence::SHIFT,
            Self::Plus | Self::Minus => Precedence::ADDITIVE,
            Self::Mult | Self::Div | Self::IntDiv | Self::Mod => Precedence::MULTIPLICATIVE,
            Self::BitXor => Precedence::BIT_XOR,
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UnaryOp {
    /// Negation (-)
    Minus,
    /// Bitwise NOT (~)
    Tilde,
    /// Logical NOT (!)
    Bang,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minus => "-",
            Self::Tilde => "~",
            Self::Bang => "!",
        }
    }
}

/// Operator precedence levels, lowest first.
///
/// The parser binds with these levels and the formatter uses them to decide
/// where parentheses are needed.
pub struct Precedence;

impl Precedence {
    pub const OR: u8 = 1;
    pub const XOR: u8 = 2;
    pub const AND: u8 = 3;
    pub const NOT: u8 = 4;
    pub const COMPARISON: u8 = 5;
    pub const BIT_OR: u8 = 6;
    pub const BIT_AND: u8 = 7;
    pub const SHIFT: u8 = 8;
    pub const ADDITIVE: u8 = 9;
    pub const MULTIPLICATIVE: u8 = 10;
    pub const BIT_XOR: u8 = 11;
    pub const UNARY: u8 = 12;
    pub const ATOM: u8 = 13;
}

/// A function call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FuncCall {
    /// The database qualifier, empty when absent.
    pub qualifier: TableIdent,
    /// The function name.
    pub name: ColIdent,
    /// Whether DISTINCT was specified.
    pub distinct: bool,
    /// The arguments; `count(*)` has a single star argument.
    pub args: Vec<SelectExpr>,
}

/// One `WHEN cond THEN val` arm of a CASE expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct When {
    pub cond: Expr,
    pub val: Expr,
}

/// A CASE expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CaseExpr {
    /// The operand of a simple CASE.
    pub expr: Option<Box<Expr>>,
    pub whens: Vec<When>,
    pub else_expr: Option<Box<Expr>>,
}

/// An SQL expression.
///
/// Parentheses are not represented; grouping is implied by the tree shape
/// and restored on display from operator precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expr {
    /// A literal value, kept as text.
    Literal {
        /// The lexical family.
        kind: LiteralKind,
        /// The literal text.
        value: String,
    },

    /// `TRUE` or `FALSE`.
    Bool(bool),

    /// `NULL`.
    Null,

    /// A column reference.
    Column(ColName),

    /// A named or positional bind variable (`:name`, `?`).
    Argument(String),

    /// A list bind variable (`::name`).
    ListArg(String),

    /// A user-defined or system variable (`@x`, `@@x`).
    Variable(ColIdent),

    /// `left AND right`
    And(Box<Expr>, Box<Expr>),

    /// `left OR right`
    Or(Box<Expr>, Box<Expr>),

    /// `left XOR right`
    Xor(Box<Expr>, Box<Expr>),

    /// `NOT expr`
    Not(Box<Expr>),

    /// A comparison, set-membership or pattern predicate.
    Comparison {
        op: ComparisonOp,
        left: Box<Expr>,
        right: Box<Expr>,
        /// The `ESCAPE` clause of `LIKE`.
        escape: Option<Box<Expr>>,
    },

    /// `expr [NOT] BETWEEN from AND to`
    Between {
        expr: Box<Expr>,
        from: Box<Expr>,
        to: Box<Expr>,
        negated: bool,
    },

    /// `expr IS ...`
    Is { expr: Box<Expr>, op: IsOp },

    /// An arithmetic or bitwise binary expression.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// A unary expression.
    Unary { op: UnaryOp, expr: Box<Expr> },

    /// A parenthesized list of two or more values, or the list of `IN`.
    Tuple(Vec<Expr>),

    /// A subquery used as a value.
    Subquery(Box<SelectStatement>),

    /// `EXISTS (subquery)`
    Exists(Box<SelectStatement>),

    /// A function call.
    FuncCall(FuncCall),

    /// A CASE expression.
    Case(CaseExpr),

    /// `CAST(expr AS type)`
    Cast { expr: Box<Expr>, ty: ConvertType },

    /// `DEFAULT` or `DEFAULT(col)`.
    Default(Option<ColIdent>),
}

impl Expr {
    /// Creates a column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(ColName::new(name))
    }

    /// Creates a qualified column reference.
    #[must_use]
    pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column(ColName::qualified(table, name))
    }

    /// Creates a literal.
    #[must_use]
    pub fn literal(kind: LiteralKind, value: impl Into<String>) -> Self {
        Self::Literal {
            kind,
            value: value.into(),
        }
    }

    /// Creates an integer literal.
    #[must_use]
    pub fn int(value: i64) -> Self {
        Self::literal(LiteralKind::Int, value.to_string())
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::literal(LiteralKind::Str, value)
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            op,
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    /// Creates a comparison.
    #[must_use]
    pub fn compare(self, op: ComparisonOp, right: Self) -> Self {
        Self::Comparison {
            op,
            left: Box::new(self),
            right: Box::new(right),
            escape: None,
        }
    }

    /// Creates an equality comparison.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.compare(ComparisonOp::Eq, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        Self::And(Box::new(self), Box::new(right))
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        Self::Or(Box::new(self), Box::new(right))
    }

    /// Returns the binding precedence of the expression's top operator.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Or(..) => Precedence::OR,
            Self::Xor(..) => Precedence::XOR,
            Self::And(..) => Precedence::AND,
            Self::Not(_) => Precedence::NOT,
            Self::Comparison { .. } | Self::Between { .. } | Self::Is { .. } => {
                Precedence::COMPARISON
            }
            Self::Binary { op, .. } => op.precedence(),
            Self::Unary { .. } => Precedence::UNARY,
            _ => Precedence::ATOM,
        }
    }

    /// Returns true if the expression is a literal, boolean or NULL.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Literal { .. } | Self::Bool(_) | Self::Null)
    }
}

//! Identifier types.

use crate::dialect::Dialect;

/// How many `@` signs preceded a column identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AtCount {
    /// A plain name.
    #[default]
    NoAt,
    /// A user-defined variable (`@name`).
    SingleAt,
    /// A system variable (`@@name`).
    DoubleAt,
}

impl AtCount {
    /// The sigil written before the name.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::NoAt => "",
            Self::SingleAt => "@",
            Self::DoubleAt => "@@",
        }
    }
}

/// A case-insensitive column, alias or variable name.
///
/// The original spelling is kept for display; comparisons that follow SQL
/// semantics go through [`ColIdent::lowered`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColIdent {
    val: String,
    lowered: String,
    at: AtCount,
}

impl ColIdent {
    /// Creates a plain identifier.
    #[must_use]
    pub fn new(val: impl Into<String>) -> Self {
        Self::new_with_at(val, AtCount::NoAt)
    }

    /// Creates an identifier preceded by `at` sigils.
    #[must_use]
    pub fn new_with_at(val: impl Into<String>, at: AtCount) -> Self {
        let val = val.into();
        let lowered = val.to_lowercase();
        Self { val, lowered, at }
    }

    /// The identifier as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.val
    }

    /// The lower-cased identifier.
    #[must_use]
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// The sigils that preceded the identifier.
    #[must_use]
    pub const fn at(&self) -> AtCount {
        self.at
    }

    /// Returns the same name with different sigils.
    #[must_use]
    pub fn with_at(mut self, at: AtCount) -> Self {
        self.at = at;
        self
    }

    /// Returns true if the name is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.val.is_empty()
    }

    /// Compares case-insensitively against `other`.
    #[must_use]
    pub fn equal_str(&self, other: &str) -> bool {
        self.lowered == other.to_lowercase()
    }

    /// Compares two identifiers case-insensitively, ignoring sigils.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.lowered == other.lowered
    }
}

impl From<&str> for ColIdent {
    fn from(val: &str) -> Self {
        Self::new(val)
    }
}

/// A case-sensitive table or database name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableIdent {
    v: String,
}

impl TableIdent {
    /// Creates a table identifier.
    #[must_use]
    pub fn new(v: impl Into<String>) -> Self {
        Self { v: v.into() }
    }

    /// The identifier as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.v
    }

    /// Returns true if the name is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }
}

impl From<&str> for TableIdent {
    fn from(v: &str) -> Self {
        Self::new(v)
    }
}

/// A table name with an optional database qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableName {
    /// The table.
    pub name: TableIdent,
    /// The database, empty when unqualified.
    pub qualifier: TableIdent,
}

impl TableName {
    /// Creates an unqualified table name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: TableIdent::new(name),
            qualifier: TableIdent::default(),
        }
    }

    /// Creates a qualified table name.
    #[must_use]
    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: TableIdent::new(name),
            qualifier: TableIdent::new(qualifier),
        }
    }

    /// Returns true if no table is named.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Returns true if `name` can be written without quotes.
///
/// Names that are reserved in any supported dialect, start with a digit, or
/// contain characters outside `[A-Za-z0-9_$]` need quoting.
#[must_use]
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return false;
    }
    [Dialect::MySql, Dialect::Generic].iter().all(|dialect| {
        let table = dialect.keywords();
        table.lookup(name).map_or(true, |kw| !table.is_reserved(kw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_ident_case_insensitive() {
        let ident = ColIdent::new("MyCol");
        assert_eq!(ident.as_str(), "MyCol");
        assert_eq!(ident.lowered(), "mycol");
        assert!(ident.equal_str("MYCOL"));
        assert!(ident.equal(&ColIdent::new_with_at("mycol", AtCount::SingleAt)));
    }

    #[test]
    fn test_col_ident_at() {
        let ident = ColIdent::new_with_at("x", AtCount::DoubleAt);
        assert_eq!(ident.at().prefix(), "@@");
        assert_eq!(ident.with_at(AtCount::NoAt).at(), AtCount::NoAt);
    }

    #[test]
    fn test_table_name() {
        let name = TableName::qualified("db", "t");
        assert_eq!(name.qualifier.as_str(), "db");
        assert!(!name.is_empty());
        assert!(TableName::default().is_empty());
    }

    #[test]
    fn test_plain_identifier() {
        assert!(is_plain_identifier("col_1"));
        assert!(is_plain_identifier("status"));
        assert!(!is_plain_identifier("select"));
        assert!(!is_plain_identifier("1col"));
        assert!(!is_plain_identifier("a b"));
        assert!(!is_plain_identifier(""));
    }
}

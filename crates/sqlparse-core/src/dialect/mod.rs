//! SQL dialect support.
//!
//! Dialects differ in which words are keywords, which of those are reserved,
//! how double quotes are read and which comment forms exist. Each dialect
//! supplies a static keyword table that the keyword cache is built from.

mod generic;
mod mysql;

pub use generic::GENERIC_KEYWORDS;
pub use mysql::MYSQL_KEYWORDS;

use crate::lexer::{keyword_table, KeywordDef, KeywordTable};

/// The SQL dialects understood by the tokenizer and parser.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// MySQL, including Vitess extensions such as `vitess_metadata`.
    #[default]
    MySql,
    /// A generic ANSI-flavoured dialect.
    Generic,
}

impl Dialect {
    /// Returns the name of the dialect.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Generic => "generic",
        }
    }

    /// Returns the identifier quote character.
    #[must_use]
    pub const fn identifier_quote(&self) -> char {
        match self {
            Self::MySql => '`',
            Self::Generic => '"',
        }
    }

    /// Whether `"..."` delimits a string literal rather than an identifier.
    #[must_use]
    pub const fn double_quoted_strings(&self) -> bool {
        matches!(self, Self::MySql)
    }

    /// Whether `#` starts a line comment.
    #[must_use]
    pub const fn hash_comments(&self) -> bool {
        matches!(self, Self::MySql)
    }

    /// Whether `--` needs trailing whitespace to start a comment.
    #[must_use]
    pub const fn strict_dash_comments(&self) -> bool {
        matches!(self, Self::MySql)
    }

    /// The keyword declarations of this dialect.
    #[must_use]
    pub fn keyword_defs(&self) -> &'static [KeywordDef] {
        match self {
            Self::MySql => MYSQL_KEYWORDS,
            Self::Generic => GENERIC_KEYWORDS,
        }
    }

    /// The shared keyword table of this dialect.
    #[must_use]
    pub fn keywords(&self) -> &'static KeywordTable {
        keyword_table(*self)
    }

    /// Quotes an identifier, doubling embedded quote characters.
    #[must_use]
    pub fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        let mut out = String::with_capacity(name.len() + 2);
        out.push(quote);
        for c in name.chars() {
            if c == quote {
                out.push(quote);
            }
            out.push(c);
        }
        out.push(quote);
        out
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Self::MySql),
            "generic" | "ansi" => Ok(Self::Generic),
            other => Err(format!("unknown dialect: {other}")),
        }
    }
}

//! Dialect-scoped keyword cache.
//!
//! Each dialect declares its keywords as a static slice of [`KeywordDef`].
//! The first lookup for a dialect builds a [`KeywordTable`] from that slice;
//! the table is immutable afterwards and shared by every tokenizer, so
//! concurrent lookups need no locking.
//!
//! Lookup is case-insensitive. Words of up to [`INLINE_WORD_LEN`] ASCII bytes
//! are lowered into a stack buffer, so the common path does not allocate.

use std::sync::OnceLock;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use super::Keyword;
use crate::dialect::Dialect;

/// Longest word lowered without allocating.
pub const INLINE_WORD_LEN: usize = 32;

/// A keyword declaration supplied by a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordDef {
    /// Lower-case keyword text.
    pub name: &'static str,
    /// The keyword the text resolves to.
    pub keyword: Keyword,
    /// Whether the keyword may not be used as a bare identifier.
    pub reserved: bool,
}

impl KeywordDef {
    /// Declares a reserved keyword.
    #[must_use]
    pub const fn reserved(name: &'static str, keyword: Keyword) -> Self {
        Self {
            name,
            keyword,
            reserved: true,
        }
    }

    /// Declares a non-reserved keyword.
    #[must_use]
    pub const fn unreserved(name: &'static str, keyword: Keyword) -> Self {
        Self {
            name,
            keyword,
            reserved: false,
        }
    }
}

/// Errors detected while building a keyword table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeywordTableError {
    /// A declaration has an empty name.
    #[error("keyword {0:?} declared with an empty name")]
    EmptyName(Keyword),

    /// Two declarations share the same text.
    #[error("keyword {name:?} declared twice")]
    Duplicate {
        /// The duplicated text.
        name: &'static str,
    },

    /// A declared keyword does not resolve to its own token.
    #[error("keyword {name:?} resolves to {found:?} instead of {expected:?}")]
    Mismatch {
        /// The declared text.
        name: &'static str,
        /// The declared keyword.
        expected: Keyword,
        /// What the lookup returned.
        found: Option<Keyword>,
    },
}

/// Case-insensitive keyword lookup table for one dialect.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    by_name: FxHashMap<&'static str, Keyword>,
    reserved: FxHashSet<Keyword>,
    names: FxHashMap<Keyword, &'static str>,
}

impl KeywordTable {
    /// Builds and validates a table from keyword declarations.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is empty or declared twice, or if a
    /// declaration does not round-trip through [`KeywordTable::lookup`].
    pub fn build(defs: &[KeywordDef]) -> Result<Self, KeywordTableError> {
        let mut by_name = FxHashMap::default();
        let mut reserved = FxHashSet::default();
        let mut names = FxHashMap::default();
        by_name.reserve(defs.len());

        for def in defs {
            if def.name.is_empty() {
                return Err(KeywordTableError::EmptyName(def.keyword));
            }
            if by_name.insert(def.name, def.keyword).is_some() {
                return Err(KeywordTableError::Duplicate { name: def.name });
            }
            if def.reserved {
                reserved.insert(def.keyword);
            }
            names.entry(def.keyword).or_insert(def.name);
        }

        let table = Self {
            by_name,
            reserved,
            names,
        };
        for def in defs {
            let found = table.lookup(def.name);
            if found != Some(def.keyword) {
                return Err(KeywordTableError::Mismatch {
                    name: def.name,
                    expected: def.keyword,
                    found,
                });
            }
        }
        Ok(table)
    }

    /// Looks up `word` case-insensitively.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Keyword> {
        let bytes = word.as_bytes();
        if bytes.is_empty() {
            return None;
        }
        if bytes.len() <= INLINE_WORD_LEN && bytes.is_ascii() {
            let mut buf = [0u8; INLINE_WORD_LEN];
            let lowered = &mut buf[..bytes.len()];
            lowered.copy_from_slice(bytes);
            lowered.make_ascii_lowercase();
            let lowered = std::str::from_utf8(lowered).ok()?;
            return self.by_name.get(lowered).copied();
        }
        self.by_name.get(word.to_lowercase().as_str()).copied()
    }

    /// Returns true if `keyword` is reserved in this table.
    #[must_use]
    pub fn is_reserved(&self, keyword: Keyword) -> bool {
        self.reserved.contains(&keyword)
    }

    /// Returns true if this table declares `keyword`.
    #[must_use]
    pub fn contains(&self, keyword: Keyword) -> bool {
        self.names.contains_key(&keyword)
    }

    /// Returns the declared text of `keyword`, if this table declares it.
    #[must_use]
    pub fn name_of(&self, keyword: Keyword) -> Option<&'static str> {
        self.names.get(&keyword).copied()
    }

    /// Number of declared keyword texts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if the table declares no keywords.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

static MYSQL_TABLE: OnceLock<KeywordTable> = OnceLock::new();
static GENERIC_TABLE: OnceLock<KeywordTable> = OnceLock::new();

/// Returns the shared keyword table of `dialect`, building it on first use.
///
/// The built-in tables are validated by this crate's tests; should a table
/// ever fail validation, an empty table is used and the failure is logged.
#[must_use]
pub fn keyword_table(dialect: Dialect) -> &'static KeywordTable {
    let cell = match dialect {
        Dialect::MySql => &MYSQL_TABLE,
        Dialect::Generic => &GENERIC_TABLE,
    };
    cell.get_or_init(|| {
        let defs = dialect.keyword_defs();
        match KeywordTable::build(defs) {
            Ok(table) => {
                tracing::debug!(
                    dialect = dialect.name(),
                    keywords = table.len(),
                    "built keyword table"
                );
                table
            }
            Err(err) => {
                tracing::error!(dialect = dialect.name(), %err, "invalid keyword table");
                KeywordTable {
                    by_name: FxHashMap::default(),
                    reserved: FxHashSet::default(),
                    names: FxHashMap::default(),
                }
            }
        }
    })
}

/// Looks up `word` in the keyword table of `dialect`.
#[must_use]
pub fn keyword_lookup(word: &str, dialect: Dialect) -> Option<Keyword> {
    keyword_table(dialect).lookup(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{GENERIC_KEYWORDS, MYSQL_KEYWORDS};

    #[test]
    fn test_mysql_keyword_table_round_trips() {
        for def in MYSQL_KEYWORDS {
            assert_eq!(
                keyword_lookup(def.name, Dialect::MySql),
                Some(def.keyword),
                "keyword {:?} failed to match",
                def.name
            );
            assert_eq!(
                keyword_lookup(&def.name.to_ascii_uppercase(), Dialect::MySql),
                Some(def.keyword)
            );
        }
    }

    #[test]
    fn test_generic_keyword_table_round_trips() {
        for def in GENERIC_KEYWORDS {
            assert_eq!(keyword_lookup(def.name, Dialect::Generic), Some(def.keyword));
        }
    }

    #[test]
    fn test_tables_are_valid() {
        assert!(KeywordTable::build(MYSQL_KEYWORDS).is_ok());
        assert!(KeywordTable::build(GENERIC_KEYWORDS).is_ok());
        assert_eq!(keyword_table(Dialect::MySql).len(), MYSQL_KEYWORDS.len());
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(keyword_lookup("SeLeCt", Dialect::MySql), Some(Keyword::Select));
        assert_eq!(keyword_lookup("not_a_keyword", Dialect::MySql), None);
        assert_eq!(keyword_lookup("", Dialect::MySql), None);
    }

    #[test]
    fn test_lookup_long_and_non_ascii_words() {
        let long = "x".repeat(INLINE_WORD_LEN + 10);
        assert_eq!(keyword_lookup(&long, Dialect::MySql), None);
        assert_eq!(keyword_lookup("sélect", Dialect::MySql), None);
    }

    #[test]
    fn test_dialect_scoping() {
        assert_eq!(keyword_lookup("div", Dialect::MySql), Some(Keyword::Div));
        assert_eq!(keyword_lookup("div", Dialect::Generic), None);
        assert_eq!(
            keyword_lookup("vitess_metadata", Dialect::MySql),
            Some(Keyword::VitessMetadata)
        );
        assert_eq!(keyword_lookup("vitess_metadata", Dialect::Generic), None);
    }

    #[test]
    fn test_reserved_flags() {
        let mysql = keyword_table(Dialect::MySql);
        assert!(mysql.is_reserved(Keyword::Select));
        assert!(!mysql.is_reserved(Keyword::Status));
        assert!(mysql.is_reserved(Keyword::Key));

        let generic = keyword_table(Dialect::Generic);
        assert!(!generic.is_reserved(Keyword::Key));
        assert!(generic.contains(Keyword::Select));
        assert!(!generic.contains(Keyword::Xor));
        assert_eq!(generic.name_of(Keyword::Select), Some("select"));
    }

    #[test]
    fn test_build_rejects_duplicates() {
        let defs = [
            KeywordDef::reserved("select", Keyword::Select),
            KeywordDef::reserved("select", Keyword::From),
        ];
        assert_eq!(
            KeywordTable::build(&defs).unwrap_err(),
            KeywordTableError::Duplicate { name: "select" }
        );
    }

    #[test]
    fn test_build_rejects_empty_and_unlowered_names() {
        let empty = [KeywordDef::reserved("", Keyword::Select)];
        assert_eq!(
            KeywordTable::build(&empty).unwrap_err(),
            KeywordTableError::EmptyName(Keyword::Select)
        );

        let upper = [KeywordDef::reserved("SELECT", Keyword::Select)];
        assert!(matches!(
            KeywordTable::build(&upper).unwrap_err(),
            KeywordTableError::Mismatch { name: "SELECT", found: None, .. }
        ));
    }
}

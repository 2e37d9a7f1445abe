//! Parser configuration.

use crate::dialect::Dialect;
use crate::lexer::DEFAULT_MAX_NESTING;

/// Options that control how SQL text is parsed.
///
/// # Example
///
/// ```
/// use sqlparse_core::dialect::Dialect;
/// use sqlparse_core::parser::ParserConfig;
///
/// let config = ParserConfig::default()
///     .with_dialect(Dialect::Generic)
///     .with_strict_ddl(true);
/// assert_eq!(config.max_nesting, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct ParserConfig {
    /// The SQL dialect.
    pub dialect: Dialect,
    /// Fail on DDL that only parses partially instead of returning the
    /// recognised prefix.
    pub strict_ddl: bool,
    /// Discard MySQL executable comments (`/*! ... */`).
    pub skip_special_comments: bool,
    /// Maximum parenthesis nesting depth.
    pub max_nesting: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            strict_ddl: false,
            skip_special_comments: false,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

impl ParserConfig {
    /// Sets the dialect.
    #[must_use]
    pub const fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Sets strict DDL mode.
    #[must_use]
    pub const fn with_strict_ddl(mut self, strict: bool) -> Self {
        self.strict_ddl = strict;
        self
    }

    /// Sets whether executable comments are discarded.
    #[must_use]
    pub const fn with_skip_special_comments(mut self, skip: bool) -> Self {
        self.skip_special_comments = skip;
        self
    }

    /// Sets the nesting limit.
    #[must_use]
    pub const fn with_max_nesting(mut self, max: usize) -> Self {
        self.max_nesting = max;
        self
    }
}

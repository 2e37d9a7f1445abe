//! Parser error types.

use thiserror::Error;

use crate::error::SqlError;
use crate::lexer::{LexError, Span};

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token the grammar does not accept at this point.
    #[error("syntax error at position {} near '{near}'", span.end)]
    Syntax {
        /// The text of the offending token.
        near: String,
        /// The location of the offending token.
        span: Span,
    },

    /// The tokenizer stopped on a lexical error.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The statement holds no tokens.
    #[error("query was empty")]
    EmptyQuery,

    /// Input continues after a recovered DDL statement.
    #[error("extra characters encountered after end of DDL: '{0}'")]
    ExtraCharacters(String),
}

impl ParseError {
    /// Creates a syntax error at the given token.
    #[must_use]
    pub fn syntax(near: impl Into<String>, span: Span) -> Self {
        Self::Syntax {
            near: near.into(),
            span,
        }
    }

    /// Returns the location the error refers to, if known.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Syntax { span, .. } => Some(*span),
            Self::Lex(err) => Some(Span::new(err.position(), err.position())),
            Self::EmptyQuery | Self::ExtraCharacters(_) => None,
        }
    }
}

impl From<ParseError> for SqlError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::EmptyQuery => Self::empty_query(),
            err => Self::invalid_argument(err.to_string()),
        }
    }
}

//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written, dialect-aware tokenizer that produces
//! a stream of tokens and records bind variables, nesting and comments on
//! the way.

mod keywords;
mod span;
mod token;
mod tokenizer;

pub use keywords::{keyword_lookup, keyword_table, KeywordDef, KeywordTable, KeywordTableError};
pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::{BindVars, LexError, Tokenizer, DEFAULT_MAX_NESTING};

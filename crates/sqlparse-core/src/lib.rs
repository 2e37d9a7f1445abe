//! # sqlparse-core
//!
//! A dialect-aware SQL tokenizer and parser for the MySQL family, with an
//! AST that renders back to canonical SQL.
//!
//! This crate provides:
//! - A hand-written tokenizer that records bind variables and comments
//! - A recursive descent parser with Pratt expression parsing and
//!   recovery of partially parsed DDL
//! - In-place AST rewriting, including SET scope normalization
//! - Query hint merging, LIKE-to-regex compilation and statement splitting
//!
//! ## Parsing
//!
//! ```rust
//! use sqlparse_core::{parse, Statement};
//!
//! let stmt = parse("SELECT id, email FROM users WHERE age > 18").unwrap();
//! assert!(matches!(stmt, Statement::Select(_)));
//! assert_eq!(stmt.to_string(), "select id, email from users where age > 18");
//! ```
//!
//! ## Partial DDL
//!
//! DDL the grammar only partly covers still yields its recognised prefix:
//!
//! ```rust
//! use sqlparse_core::{parse, parse_strict_ddl};
//!
//! let stmt = parse("create table t (id int) partition by hash(id)").unwrap();
//! assert!(stmt.is_fully_parsed());
//!
//! let stmt = parse("alter table t frobnicate").unwrap();
//! assert!(!stmt.is_fully_parsed());
//! assert!(parse_strict_ddl("alter table t frobnicate").is_err());
//! ```

pub mod ast;
pub mod dialect;
pub mod error;
pub mod lexer;
pub mod like;
pub mod parser;
pub mod rewrite;
pub mod split;

pub use ast::{Comments, Expr, Statement};
pub use dialect::Dialect;
pub use error::{Code, Result, SqlError};
pub use lexer::{BindVars, Token, TokenKind, Tokenizer};
pub use like::like_to_regex;
pub use parser::{
    parse, parse_expr, parse_next, parse_next_strict_ddl, parse_strict_ddl, parse_with_bind_vars,
    table_from_statement, ParseError, ParserConfig, SqlParser,
};
pub use rewrite::{normalize_set_statements, rewrite, Cursor, NodeMut, Walk};
pub use split::{split_statement, split_statement_to_pieces};

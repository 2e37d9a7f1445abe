//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//!
//! The free functions use the default [`ParserConfig`] (MySQL, lenient DDL);
//! [`SqlParser`] runs the same operations with any configuration. Each parse
//! borrows its scratch state from a process-wide [`ParserPool`].
//!
//! ```
//! use sqlparse_core::ast::Statement;
//! use sqlparse_core::parser;
//!
//! let (stmt, bind_vars) = parser::parse_with_bind_vars("select * from t where id = :id").unwrap();
//! assert!(matches!(stmt, Statement::Select(_)));
//! assert!(bind_vars.contains("id"));
//! ```

mod config;
mod ddl;
mod error;
#[allow(clippy::module_inception)]
mod parser;
mod pool;
mod pratt;
mod query;
mod session;

pub use config::ParserConfig;
pub use error::ParseError;
pub use parser::Parser;
pub use pool::{global as global_pool, ParserPool, ParserState, PooledState};
pub use pratt::{infix_precedence, token_to_binary_op, token_to_comparison_op, token_to_unary_op};

use crate::ast::{Expr, SimpleTableExpr, Statement, TableExpr, TableName};
use crate::error::{Result, SqlError};
use crate::lexer::{BindVars, Tokenizer};

/// A parser front end bound to one configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlParser {
    config: ParserConfig,
}

impl SqlParser {
    /// Creates a parser with the given configuration.
    #[must_use]
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Creates a tokenizer over `sql` set up for this configuration.
    #[must_use]
    pub fn tokenizer<'a>(&self, sql: &'a str) -> Tokenizer<'a> {
        let mut tokenizer = Tokenizer::with_dialect(sql, self.config.dialect);
        tokenizer.set_skip_special_comments(self.config.skip_special_comments);
        tokenizer.set_max_nesting(self.config.max_nesting);
        tokenizer
    }

    /// Parses a single statement.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::error::Code::InvalidArgument`] on a syntax error,
    /// or with the empty-query state if `sql` holds no statement.
    pub fn parse(&self, sql: &str) -> Result<Statement> {
        self.parse_with_bind_vars(sql).map(|(stmt, _)| stmt)
    }

    /// Parses a single statement and returns the bind variables it uses.
    ///
    /// # Errors
    ///
    /// See [`SqlParser::parse`].
    pub fn parse_with_bind_vars(&self, sql: &str) -> Result<(Statement, BindVars)> {
        let mut tokenizer = self.tokenizer(sql);
        let stmt = self.run(&mut tokenizer)?.ok_or_else(SqlError::empty_query)?;
        tracing::trace!(sql, "parsed statement");
        Ok((stmt, tokenizer.take_bind_vars()))
    }

    /// Parses the next statement of a multi-statement buffer.
    ///
    /// Skips a leading `;` and blank statements, and returns `Ok(None)` at
    /// the end of input. On success the tokenizer is left just past the
    /// statement's `;` and its bind variables hold those of the statement.
    ///
    /// # Errors
    ///
    /// See [`SqlParser::parse`].
    pub fn parse_next(&self, tokenizer: &mut Tokenizer<'_>) -> Result<Option<Statement>> {
        loop {
            tokenizer.skip_separator();
            if tokenizer.is_at_end() {
                return Ok(None);
            }
            tokenizer.reset();
            tokenizer.set_multi(true);
            if let Some(stmt) = self.run(tokenizer)? {
                return Ok(Some(stmt));
            }
        }
    }

    /// Parses a standalone expression.
    ///
    /// # Errors
    ///
    /// See [`SqlParser::parse`].
    pub fn parse_expr(&self, sql: &str) -> Result<Expr> {
        let mut tokenizer = self.tokenizer(sql);
        let mut state = pool::global().acquire();
        let mut parser = Parser::new(&mut tokenizer, &mut state, self.config.max_nesting);
        Ok(parser.parse_standalone_expr()?)
    }

    fn run(&self, tokenizer: &mut Tokenizer<'_>) -> Result<Option<Statement>> {
        let mut state = pool::global().acquire();
        let mut parser = Parser::new(tokenizer, &mut state, self.config.max_nesting);
        Ok(parser.parse_statement(self.config.strict_ddl)?)
    }
}

/// Parses a single MySQL statement.
///
/// DDL that only partially parses is returned with
/// [`Statement::is_fully_parsed`] false.
///
/// # Errors
///
/// See [`SqlParser::parse`].
pub fn parse(sql: &str) -> Result<Statement> {
    SqlParser::default().parse(sql)
}

/// Parses a single statement and returns its bind variables.
///
/// # Errors
///
/// See [`SqlParser::parse`].
pub fn parse_with_bind_vars(sql: &str) -> Result<(Statement, BindVars)> {
    SqlParser::default().parse_with_bind_vars(sql)
}

/// Parses a single statement, failing on partially parsed DDL.
///
/// # Errors
///
/// See [`SqlParser::parse`].
pub fn parse_strict_ddl(sql: &str) -> Result<Statement> {
    SqlParser::new(ParserConfig::default().with_strict_ddl(true)).parse(sql)
}

/// Parses the next statement from `tokenizer`.
///
/// # Errors
///
/// See [`SqlParser::parse`].
pub fn parse_next(tokenizer: &mut Tokenizer<'_>) -> Result<Option<Statement>> {
    SqlParser::default().parse_next(tokenizer)
}

/// Parses the next statement from `tokenizer`, failing on partially parsed
/// DDL.
///
/// # Errors
///
/// See [`SqlParser::parse`].
pub fn parse_next_strict_ddl(tokenizer: &mut Tokenizer<'_>) -> Result<Option<Statement>> {
    SqlParser::new(ParserConfig::default().with_strict_ddl(true)).parse_next(tokenizer)
}

/// Parses a standalone expression.
///
/// # Errors
///
/// See [`SqlParser::parse`].
pub fn parse_expr(sql: &str) -> Result<Expr> {
    SqlParser::default().parse_expr(sql)
}

/// Returns the table of a single-table SELECT.
///
/// # Errors
///
/// Fails with [`crate::error::Code::InvalidArgument`] if `sql` does not
/// parse, is not a SELECT, or reads from anything but one plain table.
pub fn table_from_statement(sql: &str) -> Result<TableName> {
    let Statement::Select(select) = parse(sql)? else {
        return Err(SqlError::invalid_argument(format!(
            "unrecognized statement: {sql}"
        )));
    };
    match select.from.as_slice() {
        [TableExpr::Aliased {
            expr: SimpleTableExpr::Table(name),
            ..
        }] => Ok(name.clone()),
        _ => Err(SqlError::invalid_argument("table expression is complex")),
    }
}

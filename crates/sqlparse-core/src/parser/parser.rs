//! SQL Parser implementation.

use std::collections::VecDeque;

use super::error::ParseError;
use super::pool::ParserState;
use crate::ast::{Comments, Expr, InsertAction, Statement, TableName};
use crate::lexer::{Keyword, KeywordTable, LexError, Token, TokenKind, Tokenizer};

/// A buffered token with the block comments that preceded it.
struct Lookahead<'a> {
    token: Token<'a>,
    comments: Vec<String>,
}

/// SQL Parser.
///
/// Pulls tokens from a [`Tokenizer`] on demand and keeps a small lookahead
/// buffer. The end-of-input token (EOF, or the error token that stopped the
/// tokenizer) is held apart and returned for every read past the buffer.
pub struct Parser<'t, 'a> {
    tokenizer: &'t mut Tokenizer<'a>,
    pub(super) keywords: &'static KeywordTable,
    pub(super) state: &'t mut ParserState,
    lookahead: VecDeque<Lookahead<'a>>,
    end: Token<'a>,
    ended: bool,
    max_depth: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    /// Creates a parser reading from `tokenizer` with scratch storage in
    /// `state`.
    pub fn new(
        tokenizer: &'t mut Tokenizer<'a>,
        state: &'t mut ParserState,
        max_nesting: usize,
    ) -> Self {
        let keywords = tokenizer.dialect().keywords();
        let pos = tokenizer.pos();
        Self {
            tokenizer,
            keywords,
            state,
            lookahead: VecDeque::new(),
            end: Token::eof(pos),
            ended: false,
            max_depth: max_nesting.saturating_mul(2),
        }
    }

    /// Parses a single SQL statement.
    ///
    /// Returns `Ok(None)` if the input holds no statement. A DDL statement
    /// whose prefix was recognised is returned marked as not fully parsed
    /// when the rest fails to parse, unless `strict_ddl` is set.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a valid SQL statement.
    pub fn parse_statement(&mut self, strict_ddl: bool) -> Result<Option<Statement>, ParseError> {
        match self.peek_kind() {
            TokenKind::Eof => return Ok(None),
            TokenKind::Semicolon if self.peek_kind_nth(1) == TokenKind::Eof => return Ok(None),
            _ => {}
        }

        match self.parse_command().and_then(|stmt| self.finish(stmt)) {
            Ok(stmt) => {
                self.state.partial_ddl = None;
                Ok(Some(stmt))
            }
            Err(err) => match self.state.partial_ddl.take() {
                Some(stmt) if !strict_ddl => self.recover(stmt, &err).map(Some),
                _ => Err(err),
            },
        }
    }

    /// Parses a standalone expression.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a single expression.
    pub fn parse_standalone_expr(&mut self) -> Result<Expr, ParseError> {
        if self.check(TokenKind::Eof) {
            return Err(ParseError::EmptyQuery);
        }
        let expr = self.parse_expr()?;
        self.eat(TokenKind::Semicolon);
        if !self.check(TokenKind::Eof) {
            return Err(self.unexpected());
        }
        Ok(expr)
    }

    fn parse_command(&mut self) -> Result<Statement, ParseError> {
        match self.peek_kind() {
            TokenKind::Keyword(Keyword::Select) | TokenKind::LeftParen => {
                Ok(self.parse_select_statement()?.into())
            }
            TokenKind::Keyword(Keyword::Insert) => self.parse_insert(InsertAction::Insert),
            TokenKind::Keyword(Keyword::Replace) => self.parse_insert(InsertAction::Replace),
            TokenKind::Keyword(Keyword::Update) => self.parse_update(),
            TokenKind::Keyword(Keyword::Delete) => self.parse_delete(),
            TokenKind::Keyword(Keyword::Set) => self.parse_set(),
            TokenKind::Keyword(Keyword::Show) => self.parse_show(),
            TokenKind::Keyword(Keyword::Use) => self.parse_use(),
            TokenKind::Keyword(Keyword::Begin | Keyword::Start) => self.parse_begin(),
            TokenKind::Keyword(Keyword::Commit) => {
                self.advance();
                self.eat_keyword(Keyword::Work);
                Ok(Statement::Commit)
            }
            TokenKind::Keyword(Keyword::Rollback) => {
                self.advance();
                self.eat_keyword(Keyword::Work);
                Ok(Statement::Rollback)
            }
            TokenKind::Keyword(Keyword::Create) => self.parse_create(),
            TokenKind::Keyword(Keyword::Alter) => self.parse_alter(),
            TokenKind::Keyword(Keyword::Drop) => self.parse_drop(),
            TokenKind::Keyword(Keyword::Rename) => self.parse_rename(),
            TokenKind::Keyword(Keyword::Truncate) => self.parse_truncate(),
            TokenKind::Keyword(Keyword::Explain | Keyword::Describe | Keyword::Desc) => {
                Ok(Statement::OtherRead(self.rest_of_statement()?))
            }
            TokenKind::Keyword(
                Keyword::Repair
                | Keyword::Optimize
                | Keyword::Analyze
                | Keyword::Grant
                | Keyword::Revoke
                | Keyword::Lock
                | Keyword::Unlock
                | Keyword::Flush,
            ) => Ok(Statement::OtherAdmin(self.rest_of_statement()?)),
            _ => Err(self.unexpected()),
        }
    }

    /// Consumes the optional `;` and requires the end of the statement.
    fn finish(&mut self, stmt: Statement) -> Result<Statement, ParseError> {
        self.eat(TokenKind::Semicolon);
        if !self.check(TokenKind::Eof) {
            return Err(self.unexpected());
        }
        Ok(stmt)
    }

    /// Returns the recognised DDL prefix after skipping the rest of the
    /// statement.
    fn recover(&mut self, mut stmt: Statement, err: &ParseError) -> Result<Statement, ParseError> {
        if self.skip_statement() == TokenKind::Semicolon && !self.check(TokenKind::Eof) {
            let text = self.peek().text.to_string();
            return Err(ParseError::ExtraCharacters(text));
        }
        tracing::debug!(%err, "ignoring error parsing DDL");
        stmt.set_fully_parsed(false);
        Ok(stmt)
    }

    /// Skips to the end of the current statement and returns the kind of the
    /// terminating token.
    fn skip_statement(&mut self) -> TokenKind {
        while let Some(buffered) = self.lookahead.pop_front() {
            if buffered.token.kind == TokenKind::Semicolon {
                return TokenKind::Semicolon;
            }
        }
        if self.ended && self.end.kind == TokenKind::Eof {
            return TokenKind::Eof;
        }

        self.tokenizer.set_skip_to_end(true);
        let token = self.tokenizer.scan();
        let kind = token.kind;
        self.ended = kind == TokenKind::Eof;
        if self.ended {
            self.end = token;
        }
        kind
    }

    /// Returns the source text from the current token to the end of the
    /// statement, consuming it.
    pub(super) fn rest_of_statement(&mut self) -> Result<String, ParseError> {
        let start = self.peek().span.start;
        let mut end = start;
        loop {
            match self.peek_kind() {
                TokenKind::Semicolon | TokenKind::Eof => break,
                TokenKind::Error => return Err(self.unexpected()),
                _ => end = self.advance().span.end,
            }
        }
        Ok(self.tokenizer.input()[start..end].to_owned())
    }

    /// Runs `parse` one nesting level deeper.
    pub(super) fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.deepen()?;
        let result = parse(self);
        self.state.depth -= 1;
        result
    }

    /// Runs `parse`, which builds a left-deep chain by calling
    /// [`Self::deepen`] once per link, and restores the depth afterwards.
    ///
    /// Every link makes the finished tree one level deeper, so chains share
    /// the nesting limit with parentheses.
    pub(super) fn chain<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let base = self.state.depth;
        let result = parse(self);
        self.state.depth = base;
        result
    }

    /// Enters one more nesting level.
    pub(super) fn deepen(&mut self) -> Result<(), ParseError> {
        if self.state.depth >= self.max_depth {
            let pos = self.peek().span.start;
            return Err(ParseError::Lex(LexError::MaxNesting { pos }));
        }
        self.state.depth += 1;
        Ok(())
    }

    // === Token helpers ===

    fn fill(&mut self, n: usize) {
        while self.lookahead.len() <= n && !self.ended {
            let token = self.tokenizer.scan();
            let comments = self.tokenizer.take_comments();
            if matches!(token.kind, TokenKind::Eof | TokenKind::Error) {
                self.end = token;
                self.ended = true;
            } else {
                self.lookahead.push_back(Lookahead { token, comments });
            }
        }
    }

    /// Returns the current token.
    pub(super) fn peek(&mut self) -> &Token<'a> {
        self.peek_nth(0)
    }

    /// Returns the token `n` positions ahead.
    pub(super) fn peek_nth(&mut self, n: usize) -> &Token<'a> {
        self.fill(n);
        self.lookahead.get(n).map_or(&self.end, |buffered| &buffered.token)
    }

    pub(super) fn peek_kind(&mut self) -> TokenKind {
        self.peek().kind
    }

    pub(super) fn peek_kind_nth(&mut self, n: usize) -> TokenKind {
        self.peek_nth(n).kind
    }

    /// Consumes and returns the current token.
    pub(super) fn advance(&mut self) -> Token<'a> {
        self.fill(0);
        self.lookahead
            .pop_front()
            .map_or_else(|| self.end.clone(), |buffered| buffered.token)
    }

    /// Checks if the current token is of the given kind.
    pub(super) fn check(&mut self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Checks if the current token is the given keyword.
    pub(super) fn check_keyword(&mut self, keyword: Keyword) -> bool {
        self.check(TokenKind::Keyword(keyword))
    }

    /// Consumes the current token if it is of the given kind.
    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        let found = self.check(kind);
        if found {
            self.advance();
        }
        found
    }

    /// Consumes the current token if it is the given keyword.
    pub(super) fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        self.eat(TokenKind::Keyword(keyword))
    }

    /// Expects a token of the given kind.
    pub(super) fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected())
        }
    }

    /// Expects the given keyword.
    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        self.expect(TokenKind::Keyword(keyword)).map(|_| ())
    }

    /// Builds the error for the current token.
    pub(super) fn unexpected(&mut self) -> ParseError {
        let token = self.peek().clone();
        if token.kind == TokenKind::Error {
            if let Some(err) = self.tokenizer.last_error() {
                return ParseError::Lex(err.clone());
            }
        }
        ParseError::syntax(token.text, token.span)
    }

    /// Takes the comments written between the statement keyword and the
    /// current token.
    pub(super) fn statement_comments(&mut self) -> Comments {
        self.fill(0);
        self.lookahead
            .front_mut()
            .map(|buffered| Comments::new(std::mem::take(&mut buffered.comments)))
            .unwrap_or_default()
    }

    // === Identifiers ===

    /// Returns true if the token `n` positions ahead can be an identifier.
    pub(super) fn is_ident_at(&mut self, n: usize) -> bool {
        match self.peek_kind_nth(n) {
            TokenKind::Identifier => true,
            TokenKind::Keyword(keyword) => !self.keywords.is_reserved(keyword),
            _ => false,
        }
    }

    /// Parses an identifier; non-reserved keywords are accepted.
    pub(super) fn parse_ident(&mut self) -> Result<String, ParseError> {
        if self.is_ident_at(0) {
            Ok(self.advance().text.into_owned())
        } else {
            Err(self.unexpected())
        }
    }

    /// Parses an identifier after a `.`, where any keyword is accepted.
    pub(super) fn parse_any_ident(&mut self) -> Result<String, ParseError> {
        match self.peek_kind() {
            TokenKind::Identifier | TokenKind::Keyword(_) => Ok(self.advance().text.into_owned()),
            _ => Err(self.unexpected()),
        }
    }

    /// Parses `name` or `db.name`.
    pub(super) fn parse_table_name(&mut self) -> Result<TableName, ParseError> {
        let first = self.parse_ident()?;
        if self.eat(TokenKind::Dot) {
            let name = self.parse_any_ident()?;
            return Ok(TableName::qualified(first, name));
        }
        Ok(TableName::new(first))
    }

    /// Parses an unsigned integer literal.
    pub(super) fn parse_u32(&mut self) -> Result<u32, ParseError> {
        let token = self.peek();
        if token.kind == TokenKind::Integer {
            if let Ok(value) = token.text.parse() {
                self.advance();
                return Ok(value);
            }
        }
        Err(self.unexpected())
    }

    /// Parses a string literal.
    pub(super) fn parse_string(&mut self) -> Result<String, ParseError> {
        self.expect(TokenKind::String).map(|token| token.text.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, Select, SelectExpr, SelectStatement};
    use crate::lexer::DEFAULT_MAX_NESTING;

    fn parse(sql: &str) -> Result<Option<Statement>, ParseError> {
        let mut tokenizer = Tokenizer::new(sql);
        let mut state = ParserState::default();
        Parser::new(&mut tokenizer, &mut state, DEFAULT_MAX_NESTING).parse_statement(false)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("  /* only a comment */ "), Ok(None));
        assert_eq!(parse(";"), Ok(None));
    }

    #[test]
    fn test_simple_select() {
        let stmt = parse("SELECT 1;").unwrap().unwrap();
        let Statement::Select(select) = stmt else {
            panic!("expected select");
        };
        assert_eq!(select.exprs, vec![SelectExpr::expr(Expr::int(1))]);
    }

    #[test]
    fn test_trailing_tokens() {
        let err = parse("select 1 select 2").unwrap_err();
        assert_eq!(err.to_string(), "syntax error at position 15 near 'select'");
    }

    #[test]
    fn test_lexical_error_reported() {
        let err = parse("select 'abc").unwrap_err();
        assert!(matches!(err, ParseError::Lex(LexError::UnterminatedString { pos: 7 })));
    }

    #[test]
    fn test_lookahead_keeps_comments() {
        let mut tokenizer = Tokenizer::new("select /* a */ 1");
        let mut state = ParserState::default();
        let mut parser = Parser::new(&mut tokenizer, &mut state, DEFAULT_MAX_NESTING);
        assert!(parser.check_keyword(Keyword::Select));
        assert_eq!(parser.peek_kind_nth(1), TokenKind::Integer);
        parser.advance();
        assert_eq!(parser.statement_comments().0, vec!["/* a */".to_string()]);
        assert!(parser.statement_comments().is_empty());
    }

    #[test]
    fn test_depth_limit() {
        let sql = format!("select {}1", "~".repeat(10));
        let mut tokenizer = Tokenizer::new(&sql);
        let mut state = ParserState::default();
        let err = Parser::new(&mut tokenizer, &mut state, 2)
            .parse_statement(false)
            .unwrap_err();
        assert!(matches!(err, ParseError::Lex(LexError::MaxNesting { .. })));
        assert_eq!(state.depth, 0);
    }

    #[test]
    fn test_parenthesized_select_statement() {
        let stmt = parse("(select a)").unwrap().unwrap();
        let expected: Statement = SelectStatement::Select(Box::new(Select {
            exprs: vec![SelectExpr::expr(Expr::column("a"))],
            ..Select::default()
        }))
        .into();
        assert_eq!(stmt, expected);
    }
}

//! SET, SHOW, USE and transaction statements.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    AtCount, ColIdent, Expr, Scope, Set, SetExpr, Show, ShowBasic, ShowCommand, ShowFilter,
    Statement, TableIdent, TableName,
};
use crate::lexer::{Keyword, TokenKind};

const fn scope_of(keyword: Keyword) -> Option<Scope> {
    match keyword {
        Keyword::Session => Some(Scope::Session),
        Keyword::Global => Some(Scope::Global),
        Keyword::Local => Some(Scope::Local),
        Keyword::VitessMetadata => Some(Scope::VitessMetadata),
        _ => None,
    }
}

impl Parser<'_, '_> {
    /// Parses `SET [scope] name = value[, ...]`.
    pub(super) fn parse_set(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        let comments = self.statement_comments();

        let mut exprs = vec![self.parse_set_expr()?];
        while self.eat(TokenKind::Comma) {
            exprs.push(self.parse_set_expr()?);
        }

        Ok(Statement::Set(Box::new(Set { comments, exprs })))
    }

    fn parse_set_expr(&mut self) -> Result<SetExpr, ParseError> {
        // A scope word directly followed by `=` is a variable name.
        let scope = match self.peek_kind() {
            TokenKind::Keyword(keyword) if self.peek_kind_nth(1) != TokenKind::Eq => {
                scope_of(keyword).map_or(Scope::Implicit, |scope| {
                    self.advance();
                    scope
                })
            }
            _ => Scope::Implicit,
        };

        let token = self.peek().clone();
        let name = match token.kind {
            TokenKind::AtId => {
                self.advance();
                ColIdent::new_with_at(token.text, AtCount::SingleAt)
            }
            TokenKind::AtAtId => {
                self.advance();
                ColIdent::new_with_at(token.text, AtCount::DoubleAt)
            }
            _ => {
                let name = self.parse_ident()?;
                // SET NAMES and SET CHARSET are not variable assignments.
                if name.eq_ignore_ascii_case("names") || name.eq_ignore_ascii_case("charset") {
                    return Err(ParseError::syntax(token.text, token.span));
                }
                ColIdent::new(name)
            }
        };

        self.expect(TokenKind::Eq)?;
        let expr = if self.eat_keyword(Keyword::On) {
            Expr::string("on")
        } else {
            self.parse_expr()?
        };

        Ok(SetExpr { scope, name, expr })
    }

    /// Parses SHOW.
    pub(super) fn parse_show(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        if let Some(basic) = self.parse_show_basic()? {
            return Ok(Statement::Show(Box::new(Show::Basic(basic))));
        }
        if matches!(self.peek_kind(), TokenKind::Eof | TokenKind::Semicolon) {
            return Err(self.unexpected());
        }
        let text = self.rest_of_statement()?;
        Ok(Statement::Show(Box::new(Show::Other(text))))
    }

    /// Parses the SHOW commands with a structured form. Returns `None`
    /// without consuming anything for the others.
    fn parse_show_basic(&mut self) -> Result<Option<ShowBasic>, ParseError> {
        let full = self.check_keyword(Keyword::Full);
        let at = usize::from(full);

        let (command, words) = match (self.peek_kind_nth(at), self.peek_kind_nth(at + 1)) {
            (TokenKind::Keyword(Keyword::Databases | Keyword::Schemas), _) if !full => {
                (ShowCommand::Databases, 1)
            }
            (TokenKind::Keyword(Keyword::Tables), _) => (ShowCommand::Tables, 1),
            (TokenKind::Keyword(Keyword::Columns | Keyword::Fields), _) => {
                (ShowCommand::Columns, 1)
            }
            (TokenKind::Keyword(Keyword::Variables), _) if !full => {
                (ShowCommand::Variables(Scope::Implicit), 1)
            }
            (TokenKind::Keyword(Keyword::Status), _) if !full => {
                (ShowCommand::Status(Scope::Implicit), 1)
            }
            (
                TokenKind::Keyword(
                    scope @ (Keyword::Global
                    | Keyword::Session
                    | Keyword::Local
                    | Keyword::VitessMetadata),
                ),
                TokenKind::Keyword(what @ (Keyword::Variables | Keyword::Status)),
            ) if !full => {
                let scope = match scope {
                    Keyword::Global => Scope::Global,
                    Keyword::VitessMetadata => Scope::VitessMetadata,
                    _ => Scope::Session,
                };
                if what == Keyword::Variables {
                    (ShowCommand::Variables(scope), 2)
                } else {
                    (ShowCommand::Status(scope), 2)
                }
            }
            (TokenKind::Keyword(Keyword::Create), TokenKind::Keyword(Keyword::Table))
                if !full =>
            {
                (ShowCommand::CreateTable, 2)
            }
            _ => return Ok(None),
        };
        for _ in 0..at + words {
            self.advance();
        }

        let mut basic = ShowBasic {
            command,
            full,
            table: TableName::default(),
            db_name: None,
            filter: None,
        };
        match command {
            ShowCommand::Tables => basic.db_name = self.parse_show_db()?,
            ShowCommand::Columns => {
                if !self.eat_keyword(Keyword::From) {
                    self.expect_keyword(Keyword::In)?;
                }
                basic.table = self.parse_table_name()?;
                basic.db_name = self.parse_show_db()?;
            }
            ShowCommand::CreateTable => {
                basic.table = self.parse_table_name()?;
                return Ok(Some(basic));
            }
            _ => {}
        }
        basic.filter = self.parse_show_filter()?;

        Ok(Some(basic))
    }

    /// Parses an optional `FROM db` or `IN db`.
    fn parse_show_db(&mut self) -> Result<Option<TableIdent>, ParseError> {
        if self.eat_keyword(Keyword::From) || self.eat_keyword(Keyword::In) {
            return Ok(Some(TableIdent::new(self.parse_ident()?)));
        }
        Ok(None)
    }

    fn parse_show_filter(&mut self) -> Result<Option<ShowFilter>, ParseError> {
        if self.eat_keyword(Keyword::Like) {
            return Ok(Some(ShowFilter::Like(self.parse_string()?)));
        }
        if self.eat_keyword(Keyword::Where) {
            return Ok(Some(ShowFilter::Where(self.parse_expr()?)));
        }
        Ok(None)
    }

    /// Parses `USE [db]`.
    pub(super) fn parse_use(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        if matches!(self.peek_kind(), TokenKind::Eof | TokenKind::Semicolon) {
            return Ok(Statement::Use(TableIdent::default()));
        }
        Ok(Statement::Use(TableIdent::new(self.parse_ident()?)))
    }

    /// Parses `BEGIN [WORK]` and `START TRANSACTION`.
    pub(super) fn parse_begin(&mut self) -> Result<Statement, ParseError> {
        if self.eat_keyword(Keyword::Start) {
            self.expect_keyword(Keyword::Transaction)?;
        } else {
            self.expect_keyword(Keyword::Begin)?;
            self.eat_keyword(Keyword::Work);
        }
        Ok(Statement::Begin)
    }
}

//! Table and database DDL.
//!
//! Each statement records its recognised prefix in the parser state as soon
//! as the table or database name is known, so a failure further on can fall
//! back to a partially parsed statement.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    AlterAction, AlterTable, ColIdent, ColumnDefinition, ColumnKey, ColumnType, CreateDatabase,
    CreateTable, DataType, DropDatabase, DropTable, IndexDefinition, IndexKind, Precedence,
    RenamePair, Statement, TableIdent, TableSpec,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_, '_> {
    /// Parses CREATE TABLE and CREATE DATABASE.
    pub(super) fn parse_create(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        match self.peek_kind() {
            TokenKind::Keyword(Keyword::Table) => {
                self.advance();
                self.parse_create_table()
            }
            TokenKind::Keyword(Keyword::Database | Keyword::Schema) => {
                self.advance();
                let if_not_exists = self.parse_if_not_exists()?;
                let stmt = Statement::CreateDatabase(CreateDatabase {
                    name: TableIdent::new(self.parse_ident()?),
                    if_not_exists,
                    fully_parsed: true,
                });
                // Database options are not modelled.
                self.state.partial_ddl = Some(stmt.clone());
                Ok(stmt)
            }
            _ => Err(self.unexpected()),
        }
    }

    fn parse_create_table(&mut self) -> Result<Statement, ParseError> {
        let if_not_exists = self.parse_if_not_exists()?;
        let mut create = CreateTable::new(self.parse_table_name()?);
        create.if_not_exists = if_not_exists;
        self.state.partial_ddl = Some(Statement::CreateTable(Box::new(create.clone())));

        if self.eat_keyword(Keyword::Like) {
            create.like = Some(self.parse_table_name()?);
        } else if self.check(TokenKind::LeftParen)
            && self.peek_kind_nth(1) == TokenKind::Keyword(Keyword::Like)
        {
            self.advance();
            self.advance();
            create.like = Some(self.parse_table_name()?);
            self.expect(TokenKind::RightParen)?;
        } else {
            self.expect(TokenKind::LeftParen)?;
            create.spec = Some(self.parse_table_spec()?);
        }

        Ok(Statement::CreateTable(Box::new(create)))
    }

    /// Parses the definition list after `(` and the verbatim table options.
    fn parse_table_spec(&mut self) -> Result<TableSpec, ParseError> {
        let mut spec = TableSpec::default();
        loop {
            match self.peek_kind() {
                TokenKind::Keyword(
                    Keyword::Primary | Keyword::Unique | Keyword::Key | Keyword::Index,
                ) => spec.indexes.push(self.parse_index_definition()?),
                _ => spec.columns.push(self.parse_column_definition()?),
            }
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RightParen)?;
        spec.options = self.rest_of_statement()?;
        Ok(spec)
    }

    /// Parses `PRIMARY KEY (cols)`, `UNIQUE [KEY|INDEX] [name] (cols)` or
    /// `KEY|INDEX [name] (cols)`.
    fn parse_index_definition(&mut self) -> Result<IndexDefinition, ParseError> {
        let kind = match self.peek_kind() {
            TokenKind::Keyword(Keyword::Primary) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                IndexKind::Primary
            }
            TokenKind::Keyword(Keyword::Unique) => {
                self.advance();
                if !self.eat_keyword(Keyword::Key) {
                    self.eat_keyword(Keyword::Index);
                }
                IndexKind::Unique
            }
            TokenKind::Keyword(Keyword::Key | Keyword::Index) => {
                self.advance();
                IndexKind::Index
            }
            _ => return Err(self.unexpected()),
        };

        let name = if kind != IndexKind::Primary && self.is_ident_at(0) {
            Some(ColIdent::new(self.parse_ident()?))
        } else {
            None
        };

        self.expect(TokenKind::LeftParen)?;
        let columns = self.parse_column_list()?;
        self.expect(TokenKind::RightParen)?;

        Ok(IndexDefinition {
            kind,
            name,
            columns,
        })
    }

    /// Parses `name type [attributes]`.
    fn parse_column_definition(&mut self) -> Result<ColumnDefinition, ParseError> {
        let name = ColIdent::new(self.parse_ident()?);
        let ty = self.parse_column_type()?;
        Ok(ColumnDefinition { name, ty })
    }

    fn parse_column_type(&mut self) -> Result<ColumnType, ParseError> {
        let mut ty = ColumnType::new(self.parse_data_type()?);

        if matches!(&ty.data_type, DataType::Custom(name) if name == "enum" || name == "set") {
            self.expect(TokenKind::LeftParen)?;
            ty.values.push(self.parse_string()?);
            while self.eat(TokenKind::Comma) {
                ty.values.push(self.parse_string()?);
            }
            self.expect(TokenKind::RightParen)?;
        } else {
            (ty.length, ty.scale) = self.parse_length_scale()?;
        }

        // Column attributes, in any order
        loop {
            match self.peek_kind() {
                TokenKind::Keyword(Keyword::Unsigned) => {
                    self.advance();
                    ty.unsigned = true;
                }
                TokenKind::Keyword(Keyword::Not) => {
                    self.advance();
                    self.expect_keyword(Keyword::Null)?;
                    ty.null = Some(false);
                }
                TokenKind::Keyword(Keyword::Null) => {
                    self.advance();
                    ty.null = Some(true);
                }
                TokenKind::Keyword(Keyword::Default) => {
                    self.advance();
                    ty.default = Some(self.parse_expr_bp(Precedence::UNARY)?);
                }
                TokenKind::Keyword(Keyword::AutoIncrement) => {
                    self.advance();
                    ty.autoincrement = true;
                }
                TokenKind::Keyword(Keyword::Primary) => {
                    self.advance();
                    self.expect_keyword(Keyword::Key)?;
                    ty.key = ColumnKey::Primary;
                }
                TokenKind::Keyword(Keyword::Key) => {
                    self.advance();
                    ty.key = ColumnKey::Primary;
                }
                TokenKind::Keyword(Keyword::Unique) => {
                    self.advance();
                    self.eat_keyword(Keyword::Key);
                    ty.key = ColumnKey::Unique;
                }
                TokenKind::Keyword(Keyword::Comment) => {
                    self.advance();
                    ty.comment = Some(self.parse_string()?);
                }
                _ => break,
            }
        }

        Ok(ty)
    }

    fn parse_if_not_exists(&mut self) -> Result<bool, ParseError> {
        if !self.eat_keyword(Keyword::If) {
            return Ok(false);
        }
        self.expect_keyword(Keyword::Not)?;
        self.expect_keyword(Keyword::Exists)?;
        Ok(true)
    }

    fn parse_if_exists(&mut self) -> Result<bool, ParseError> {
        if !self.eat_keyword(Keyword::If) {
            return Ok(false);
        }
        self.expect_keyword(Keyword::Exists)?;
        Ok(true)
    }

    /// Parses ALTER TABLE.
    pub(super) fn parse_alter(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        self.expect_keyword(Keyword::Table)?;
        let mut alter = AlterTable {
            table: self.parse_table_name()?,
            actions: vec![],
            fully_parsed: true,
        };
        self.state.partial_ddl = Some(Statement::AlterTable(Box::new(alter.clone())));

        loop {
            alter.actions.push(self.parse_alter_action()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        Ok(Statement::AlterTable(Box::new(alter)))
    }

    fn parse_alter_action(&mut self) -> Result<AlterAction, ParseError> {
        match self.peek_kind() {
            TokenKind::Keyword(Keyword::Add) => {
                self.advance();
                match self.peek_kind() {
                    TokenKind::Keyword(
                        Keyword::Primary | Keyword::Unique | Keyword::Key | Keyword::Index,
                    ) => Ok(AlterAction::AddIndex(self.parse_index_definition()?)),
                    _ => {
                        self.eat_keyword(Keyword::Column);
                        Ok(AlterAction::AddColumn(self.parse_column_definition()?))
                    }
                }
            }
            TokenKind::Keyword(Keyword::Drop) => {
                self.advance();
                self.eat_keyword(Keyword::Column);
                Ok(AlterAction::DropColumn(ColIdent::new(self.parse_ident()?)))
            }
            TokenKind::Keyword(Keyword::Rename) => {
                self.advance();
                if !self.eat_keyword(Keyword::To) {
                    self.eat_keyword(Keyword::As);
                }
                Ok(AlterAction::Rename(self.parse_table_name()?))
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Parses DROP TABLE and DROP DATABASE.
    pub(super) fn parse_drop(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        match self.peek_kind() {
            TokenKind::Keyword(Keyword::Table) => {
                self.advance();
                let mut drop = DropTable {
                    tables: vec![],
                    if_exists: self.parse_if_exists()?,
                    fully_parsed: true,
                };
                loop {
                    drop.tables.push(self.parse_table_name()?);
                    self.state.partial_ddl = Some(Statement::DropTable(drop.clone()));
                    if !self.eat(TokenKind::Comma) {
                        break;
                    }
                }
                Ok(Statement::DropTable(drop))
            }
            TokenKind::Keyword(Keyword::Database | Keyword::Schema) => {
                self.advance();
                let if_exists = self.parse_if_exists()?;
                let stmt = Statement::DropDatabase(DropDatabase {
                    name: TableIdent::new(self.parse_ident()?),
                    if_exists,
                    fully_parsed: true,
                });
                self.state.partial_ddl = Some(stmt.clone());
                Ok(stmt)
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Parses `RENAME TABLE a TO b[, ...]`.
    pub(super) fn parse_rename(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        self.expect_keyword(Keyword::Table)?;
        let mut pairs = vec![];
        loop {
            let from = self.parse_table_name()?;
            self.expect_keyword(Keyword::To)?;
            let to = self.parse_table_name()?;
            pairs.push(RenamePair { from, to });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(Statement::RenameTable(pairs))
    }

    /// Parses `TRUNCATE [TABLE] name`.
    pub(super) fn parse_truncate(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        self.eat_keyword(Keyword::Table);
        Ok(Statement::TruncateTable(self.parse_table_name()?))
    }
}

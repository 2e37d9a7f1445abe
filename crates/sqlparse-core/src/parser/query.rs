//! SELECT, UNION and the DML statements.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    ColIdent, ColName, Delete, Expr, Insert, InsertAction, InsertRows, JoinCondition,
    JoinTableExpr, JoinType, Limit, Lock, Order, OrderDirection, Select, SelectExpr,
    SelectStatement, SimpleTableExpr, Statement, TableExpr, TableIdent, TableName, Union, Update,
    UpdateExpr,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_, '_> {
    /// Parses a SELECT, possibly parenthesized, with any UNION chain.
    pub(super) fn parse_select_statement(&mut self) -> Result<SelectStatement, ParseError> {
        self.nested(Self::parse_union)
    }

    fn parse_union(&mut self) -> Result<SelectStatement, ParseError> {
        self.chain(Self::parse_union_chain)
    }

    fn parse_union_chain(&mut self) -> Result<SelectStatement, ParseError> {
        let (mut stmt, _) = self.parse_select_operand()?;

        while self.eat_keyword(Keyword::Union) {
            self.deepen()?;
            let distinct = !self.eat_keyword(Keyword::All);
            if distinct {
                self.eat_keyword(Keyword::Distinct);
            }
            let (mut right, parenthesized) = self.parse_select_operand()?;

            let mut union = Union {
                left: stmt,
                right: SelectStatement::Select(Box::default()),
                distinct,
                order_by: vec![],
                limit: None,
                lock: Lock::None,
            };
            // A bare trailing SELECT lends its ORDER BY, LIMIT and lock to the
            // whole union.
            if let (SelectStatement::Select(select), false) = (&mut right, parenthesized) {
                union.order_by = std::mem::take(&mut select.order_by);
                union.limit = select.limit.take();
                union.lock = std::mem::replace(&mut select.lock, Lock::None);
            }
            union.right = right;
            stmt = SelectStatement::Union(Box::new(union));
        }

        Ok(stmt)
    }

    /// Parses one operand of a union; the flag tells whether it was
    /// parenthesized.
    fn parse_select_operand(&mut self) -> Result<(SelectStatement, bool), ParseError> {
        if self.eat(TokenKind::LeftParen) {
            let stmt = self.parse_select_statement()?;
            self.expect(TokenKind::RightParen)?;
            return Ok((stmt, true));
        }
        let select = self.parse_select()?;
        Ok((SelectStatement::Select(Box::new(select)), false))
    }

    /// Parses a single SELECT.
    fn parse_select(&mut self) -> Result<Select, ParseError> {
        self.expect_keyword(Keyword::Select)?;
        let comments = self.statement_comments();

        // DISTINCT or ALL
        let distinct = self.eat_keyword(Keyword::Distinct);
        if !distinct {
            self.eat_keyword(Keyword::All);
        }

        let mut exprs = vec![self.parse_select_expr()?];
        while self.eat(TokenKind::Comma) {
            exprs.push(self.parse_select_expr()?);
        }

        // FROM clause (optional for expressions like SELECT 1+1)
        let from = if self.eat_keyword(Keyword::From) {
            self.parse_table_exprs()?
        } else {
            vec![]
        };

        let where_clause = self.parse_where()?;

        let group_by = if self.eat_keyword(Keyword::Group) {
            self.expect_keyword(Keyword::By)?;
            self.parse_expr_list()?
        } else {
            vec![]
        };

        let having = if self.eat_keyword(Keyword::Having) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let order_by = self.parse_order_by()?;
        let limit = self.parse_limit()?;
        let lock = self.parse_lock()?;

        Ok(Select {
            comments,
            distinct,
            exprs,
            from,
            where_clause,
            group_by,
            having,
            order_by,
            limit,
            lock,
        })
    }

    /// Parses one item of a select list.
    fn parse_select_expr(&mut self) -> Result<SelectExpr, ParseError> {
        if self.eat(TokenKind::Star) {
            return Ok(SelectExpr::Star(None));
        }

        // t.* and db.t.*
        if self.is_ident_at(0) && self.peek_kind_nth(1) == TokenKind::Dot {
            if self.peek_kind_nth(2) == TokenKind::Star {
                let table = self.parse_ident()?;
                self.advance();
                self.advance();
                return Ok(SelectExpr::Star(Some(TableName::new(table))));
            }
            if self.peek_kind_nth(3) == TokenKind::Dot && self.peek_kind_nth(4) == TokenKind::Star
            {
                let db = self.parse_ident()?;
                self.advance();
                let table = self.parse_any_ident()?;
                self.advance();
                self.advance();
                return Ok(SelectExpr::Star(Some(TableName::qualified(db, table))));
            }
        }

        let expr = self.parse_expr()?;
        let alias = self.parse_alias()?.map(ColIdent::new);
        Ok(SelectExpr::Aliased { expr, alias })
    }

    /// Parses an optional `[AS] alias`.
    fn parse_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat_keyword(Keyword::As) {
            if self.check(TokenKind::String) {
                return self.parse_string().map(Some);
            }
            return self.parse_ident().map(Some);
        }
        if self.is_ident_at(0) {
            return self.parse_ident().map(Some);
        }
        Ok(None)
    }

    /// Parses a comma-separated list of table expressions.
    pub(super) fn parse_table_exprs(&mut self) -> Result<Vec<TableExpr>, ParseError> {
        let mut exprs = vec![self.parse_table_expr()?];
        while self.eat(TokenKind::Comma) {
            exprs.push(self.parse_table_expr()?);
        }
        Ok(exprs)
    }

    /// Parses a table factor followed by any joins.
    fn parse_table_expr(&mut self) -> Result<TableExpr, ParseError> {
        self.chain(Self::parse_join_chain)
    }

    fn parse_join_chain(&mut self) -> Result<TableExpr, ParseError> {
        let mut left = self.parse_table_factor()?;

        while let Some(join) = self.parse_join_type()? {
            self.deepen()?;
            let right = self.parse_table_factor()?;
            let condition = self.parse_join_condition(join)?;
            left = TableExpr::Join(Box::new(JoinTableExpr {
                left,
                join,
                right,
                condition,
            }));
        }

        Ok(left)
    }

    /// Parses a table name, a derived table or a parenthesized table
    /// expression.
    fn parse_table_factor(&mut self) -> Result<TableExpr, ParseError> {
        if self.eat(TokenKind::LeftParen) {
            if self.check_keyword(Keyword::Select) {
                let query = self.parse_select_statement()?;
                self.expect(TokenKind::RightParen)?;
                let alias = self.parse_table_alias()?;
                return Ok(TableExpr::Aliased {
                    expr: SimpleTableExpr::Subquery(Box::new(query)),
                    alias,
                });
            }
            let expr = self.nested(Self::parse_table_expr)?;
            self.expect(TokenKind::RightParen)?;
            return Ok(expr);
        }

        let name = self.parse_table_name()?;
        let alias = self.parse_table_alias()?;
        Ok(TableExpr::Aliased {
            expr: SimpleTableExpr::Table(name),
            alias,
        })
    }

    fn parse_table_alias(&mut self) -> Result<Option<TableIdent>, ParseError> {
        if self.eat_keyword(Keyword::As) || self.is_ident_at(0) {
            return Ok(Some(TableIdent::new(self.parse_ident()?)));
        }
        Ok(None)
    }

    /// Parses a join operator, if one follows.
    fn parse_join_type(&mut self) -> Result<Option<JoinType>, ParseError> {
        let join = match self.peek_kind() {
            TokenKind::Keyword(Keyword::Join) => {
                self.advance();
                JoinType::Normal
            }
            TokenKind::Keyword(Keyword::Inner | Keyword::Cross) => {
                self.advance();
                self.expect_keyword(Keyword::Join)?;
                JoinType::Normal
            }
            TokenKind::Keyword(Keyword::StraightJoin) => {
                self.advance();
                JoinType::Straight
            }
            TokenKind::Keyword(Keyword::Left) => {
                self.advance();
                self.eat_keyword(Keyword::Outer);
                self.expect_keyword(Keyword::Join)?;
                JoinType::Left
            }
            TokenKind::Keyword(Keyword::Right) => {
                self.advance();
                self.eat_keyword(Keyword::Outer);
                self.expect_keyword(Keyword::Join)?;
                JoinType::Right
            }
            TokenKind::Keyword(Keyword::Natural) => {
                self.advance();
                let join = if self.eat_keyword(Keyword::Left) {
                    self.eat_keyword(Keyword::Outer);
                    JoinType::NaturalLeft
                } else if self.eat_keyword(Keyword::Right) {
                    self.eat_keyword(Keyword::Outer);
                    JoinType::NaturalRight
                } else {
                    JoinType::Natural
                };
                self.expect_keyword(Keyword::Join)?;
                join
            }
            _ => return Ok(None),
        };
        Ok(Some(join))
    }

    /// Parses the ON or USING clause of a join.
    ///
    /// LEFT and RIGHT joins require one, natural joins take none and
    /// STRAIGHT_JOIN only accepts ON.
    fn parse_join_condition(&mut self, join: JoinType) -> Result<JoinCondition, ParseError> {
        let mut condition = JoinCondition::default();
        if matches!(
            join,
            JoinType::Natural | JoinType::NaturalLeft | JoinType::NaturalRight
        ) {
            return Ok(condition);
        }

        if self.eat_keyword(Keyword::On) {
            condition.on = Some(self.parse_expr()?);
        } else if join != JoinType::Straight && self.eat_keyword(Keyword::Using) {
            self.expect(TokenKind::LeftParen)?;
            condition.using = self.parse_column_list()?;
            self.expect(TokenKind::RightParen)?;
        } else if matches!(join, JoinType::Left | JoinType::Right) {
            return Err(self.unexpected());
        }

        Ok(condition)
    }

    /// Parses a comma-separated list of plain column names.
    pub(super) fn parse_column_list(&mut self) -> Result<Vec<ColIdent>, ParseError> {
        let mut columns = vec![ColIdent::new(self.parse_ident()?)];
        while self.eat(TokenKind::Comma) {
            columns.push(ColIdent::new(self.parse_ident()?));
        }
        Ok(columns)
    }

    pub(super) fn parse_where(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.eat_keyword(Keyword::Where) {
            Ok(Some(self.parse_expr()?))
        } else {
            Ok(None)
        }
    }

    /// Parses an optional ORDER BY list.
    pub(super) fn parse_order_by(&mut self) -> Result<Vec<Order>, ParseError> {
        if !self.eat_keyword(Keyword::Order) {
            return Ok(vec![]);
        }
        self.expect_keyword(Keyword::By)?;

        let mut items = vec![];
        loop {
            let expr = self.parse_expr()?;
            let direction = if self.eat_keyword(Keyword::Desc) {
                OrderDirection::Desc
            } else {
                self.eat_keyword(Keyword::Asc);
                OrderDirection::Asc
            };
            items.push(Order { expr, direction });

            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }

    /// Parses `LIMIT n`, `LIMIT offset, n` or `LIMIT n OFFSET offset`.
    pub(super) fn parse_limit(&mut self) -> Result<Option<Limit>, ParseError> {
        if !self.eat_keyword(Keyword::Limit) {
            return Ok(None);
        }
        let first = self.parse_expr()?;
        let limit = if self.eat(TokenKind::Comma) {
            Limit {
                offset: Some(first),
                rowcount: self.parse_expr()?,
            }
        } else if self.eat_keyword(Keyword::Offset) {
            Limit {
                offset: Some(self.parse_expr()?),
                rowcount: first,
            }
        } else {
            Limit {
                offset: None,
                rowcount: first,
            }
        };
        Ok(Some(limit))
    }

    fn parse_lock(&mut self) -> Result<Lock, ParseError> {
        if self.eat_keyword(Keyword::For) {
            self.expect_keyword(Keyword::Update)?;
            return Ok(Lock::ForUpdate);
        }
        if self.check_keyword(Keyword::Lock)
            && self.peek_kind_nth(1) == TokenKind::Keyword(Keyword::In)
        {
            self.advance();
            self.advance();
            self.expect_keyword(Keyword::Share)?;
            self.expect_keyword(Keyword::Mode)?;
            return Ok(Lock::ShareMode);
        }
        Ok(Lock::None)
    }

    /// Parses INSERT or REPLACE.
    pub(super) fn parse_insert(&mut self, action: InsertAction) -> Result<Statement, ParseError> {
        self.advance();
        let comments = self.statement_comments();
        let ignore = self.eat_keyword(Keyword::Ignore);
        self.eat_keyword(Keyword::Into);
        let table = self.parse_table_name()?;

        // A parenthesized SELECT is the row source, not a column list.
        let mut columns = vec![];
        if self.check(TokenKind::LeftParen)
            && self.peek_kind_nth(1) != TokenKind::Keyword(Keyword::Select)
        {
            self.advance();
            if !self.check(TokenKind::RightParen) {
                loop {
                    columns.push(self.parse_insert_column()?);
                    if !self.eat(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect(TokenKind::RightParen)?;
        }

        let rows = if self.eat_keyword(Keyword::Values) {
            let mut rows = vec![];
            loop {
                self.expect(TokenKind::LeftParen)?;
                let row = if self.check(TokenKind::RightParen) {
                    vec![]
                } else {
                    self.parse_expr_list()?
                };
                self.expect(TokenKind::RightParen)?;
                rows.push(row);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            InsertRows::Values(rows)
        } else if columns.is_empty() && self.eat_keyword(Keyword::Set) {
            // INSERT ... SET a = 1, b = 2 is INSERT ... (a, b) VALUES (1, 2)
            let mut row = vec![];
            for update in self.parse_update_list()? {
                columns.push(update.name.name);
                row.push(update.expr);
            }
            InsertRows::Values(vec![row])
        } else {
            InsertRows::Select(self.parse_select_statement()?)
        };

        let on_dup = if self.eat_keyword(Keyword::On) {
            self.expect_keyword(Keyword::Duplicate)?;
            self.expect_keyword(Keyword::Key)?;
            self.expect_keyword(Keyword::Update)?;
            self.parse_update_list()?
        } else {
            vec![]
        };

        Ok(Statement::Insert(Box::new(Insert {
            action,
            comments,
            ignore,
            table,
            columns,
            rows,
            on_dup,
        })))
    }

    /// Parses an insert column; a qualified name keeps only the column.
    fn parse_insert_column(&mut self) -> Result<ColIdent, ParseError> {
        let mut name = self.parse_ident()?;
        while self.eat(TokenKind::Dot) {
            name = self.parse_any_ident()?;
        }
        Ok(ColIdent::new(name))
    }

    /// Parses `col = expr[, ...]`.
    fn parse_update_list(&mut self) -> Result<Vec<UpdateExpr>, ParseError> {
        let mut exprs = vec![];
        loop {
            let name = self.parse_column_name()?;
            self.expect(TokenKind::Eq)?;
            let expr = self.parse_expr()?;
            exprs.push(UpdateExpr { name, expr });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(exprs)
    }

    /// Parses `col`, `t.col` or `db.t.col`.
    fn parse_column_name(&mut self) -> Result<ColName, ParseError> {
        let first = self.parse_ident()?;
        if !self.eat(TokenKind::Dot) {
            return Ok(ColName::new(first));
        }
        let second = self.parse_any_ident()?;
        if !self.eat(TokenKind::Dot) {
            return Ok(ColName::qualified(first, second));
        }
        let name = self.parse_any_ident()?;
        Ok(ColName {
            name: ColIdent::new(name),
            qualifier: TableName::qualified(first, second),
        })
    }

    /// Parses UPDATE.
    pub(super) fn parse_update(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        let comments = self.statement_comments();
        let ignore = self.eat_keyword(Keyword::Ignore);
        let table_exprs = self.parse_table_exprs()?;
        self.expect_keyword(Keyword::Set)?;
        let exprs = self.parse_update_list()?;
        let where_clause = self.parse_where()?;
        let order_by = self.parse_order_by()?;
        let limit = self.parse_limit()?;

        Ok(Statement::Update(Box::new(Update {
            comments,
            ignore,
            table_exprs,
            exprs,
            where_clause,
            order_by,
            limit,
        })))
    }

    /// Parses DELETE in its single and multi-table forms.
    pub(super) fn parse_delete(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        let comments = self.statement_comments();

        let (targets, table_exprs) = if self.eat_keyword(Keyword::From) {
            let refs = self.parse_table_exprs()?;
            if self.check_keyword(Keyword::Using) {
                // DELETE FROM a, b USING ... names the targets first.
                let Some(targets) = refs.iter().map(plain_table).collect::<Option<Vec<_>>>()
                else {
                    return Err(self.unexpected());
                };
                self.advance();
                (targets, self.parse_table_exprs()?)
            } else {
                (vec![], refs)
            }
        } else {
            let mut targets = vec![self.parse_table_name()?];
            while self.eat(TokenKind::Comma) {
                targets.push(self.parse_table_name()?);
            }
            self.expect_keyword(Keyword::From)?;
            (targets, self.parse_table_exprs()?)
        };

        let where_clause = self.parse_where()?;
        let order_by = self.parse_order_by()?;
        let limit = self.parse_limit()?;

        Ok(Statement::Delete(Box::new(Delete {
            comments,
            targets,
            table_exprs,
            where_clause,
            order_by,
            limit,
        })))
    }
}

/// Returns the name of an unaliased table reference.
fn plain_table(expr: &TableExpr) -> Option<TableName> {
    match expr {
        TableExpr::Aliased {
            expr: SimpleTableExpr::Table(name),
            alias: None,
        } => Some(name.clone()),
        _ => None,
    }
}

//! Pratt expression parser for operator precedence.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    AtCount, BinaryOp, CaseExpr, ColIdent, ColName, ComparisonOp, ConvertType, DataType, Expr,
    FuncCall, IsOp, LiteralKind, Precedence, SelectExpr, TableIdent, TableName, UnaryOp, When,
};
use crate::lexer::{Keyword, TokenKind};

/// Returns the precedence of a token in infix position.
///
/// Returns `None` if the token is not an infix operator. `NOT` only acts as
/// an infix operator in front of `IN`, `LIKE`, `BETWEEN` and `REGEXP`; the
/// caller checks the following token.
#[must_use]
pub const fn infix_precedence(kind: TokenKind) -> Option<u8> {
    Some(match kind {
        TokenKind::Keyword(Keyword::Or) | TokenKind::PipePipe => Precedence::OR,
        TokenKind::Keyword(Keyword::Xor) => Precedence::XOR,
        TokenKind::Keyword(Keyword::And) | TokenKind::AmpAmp => Precedence::AND,
        TokenKind::Eq
        | TokenKind::NullSafeEq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::LtEq
        | TokenKind::Gt
        | TokenKind::GtEq
        | TokenKind::Keyword(
            Keyword::Is
            | Keyword::In
            | Keyword::Between
            | Keyword::Like
            | Keyword::Regexp
            | Keyword::Rlike
            | Keyword::Not,
        ) => Precedence::COMPARISON,
        TokenKind::BitOr => Precedence::BIT_OR,
        TokenKind::BitAnd => Precedence::BIT_AND,
        TokenKind::LeftShift | TokenKind::RightShift => Precedence::SHIFT,
        TokenKind::Plus | TokenKind::Minus => Precedence::ADDITIVE,
        TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Percent
        | TokenKind::Keyword(Keyword::Div | Keyword::Mod) => Precedence::MULTIPLICATIVE,
        TokenKind::BitXor => Precedence::BIT_XOR,
        _ => return None,
    })
}

/// Converts a token to a comparison operator.
#[must_use]
pub const fn token_to_comparison_op(kind: TokenKind) -> Option<ComparisonOp> {
    Some(match kind {
        TokenKind::Eq => ComparisonOp::Eq,
        TokenKind::NullSafeEq => ComparisonOp::NullSafeEq,
        TokenKind::NotEq => ComparisonOp::NotEq,
        TokenKind::Lt => ComparisonOp::Lt,
        TokenKind::LtEq => ComparisonOp::LtEq,
        TokenKind::Gt => ComparisonOp::Gt,
        TokenKind::GtEq => ComparisonOp::GtEq,
        TokenKind::Keyword(Keyword::In) => ComparisonOp::In,
        TokenKind::Keyword(Keyword::Like) => ComparisonOp::Like,
        TokenKind::Keyword(Keyword::Regexp | Keyword::Rlike) => ComparisonOp::Regexp,
        _ => return None,
    })
}

/// Converts a token to an arithmetic or bitwise operator.
#[must_use]
pub const fn token_to_binary_op(kind: TokenKind) -> Option<BinaryOp> {
    Some(match kind {
        TokenKind::BitOr => BinaryOp::BitOr,
        TokenKind::BitAnd => BinaryOp::BitAnd,
        TokenKind::BitXor => BinaryOp::BitXor,
        TokenKind::LeftShift => BinaryOp::ShiftLeft,
        TokenKind::RightShift => BinaryOp::ShiftRight,
        TokenKind::Plus => BinaryOp::Plus,
        TokenKind::Minus => BinaryOp::Minus,
        TokenKind::Star => BinaryOp::Mult,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Keyword(Keyword::Div) => BinaryOp::IntDiv,
        TokenKind::Percent | TokenKind::Keyword(Keyword::Mod) => BinaryOp::Mod,
        _ => return None,
    })
}

/// Converts a token to a unary operator.
#[must_use]
pub const fn token_to_unary_op(kind: TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Minus => Some(UnaryOp::Minus),
        TokenKind::BitNot => Some(UnaryOp::Tilde),
        TokenKind::Bang => Some(UnaryOp::Bang),
        _ => None,
    }
}

const fn literal_kind(kind: TokenKind) -> Option<LiteralKind> {
    Some(match kind {
        TokenKind::String => LiteralKind::Str,
        TokenKind::Integer => LiteralKind::Int,
        TokenKind::Float => LiteralKind::Float,
        TokenKind::HexNum => LiteralKind::HexNum,
        TokenKind::HexString => LiteralKind::HexVal,
        TokenKind::BitNum => LiteralKind::BitNum,
        TokenKind::BitString => LiteralKind::BitVal,
        _ => return None,
    })
}

impl Parser<'_, '_> {
    /// Parses a full expression.
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_bp(Precedence::OR)
    }

    /// Parses an expression whose operators bind at least as tight as
    /// `min`.
    pub(super) fn parse_expr_bp(&mut self, min: u8) -> Result<Expr, ParseError> {
        self.nested(|parser| parser.parse_expr_inner(min))
    }

    fn parse_expr_inner(&mut self, min: u8) -> Result<Expr, ParseError> {
        self.chain(|parser| parser.parse_infix_chain(min))
    }

    fn parse_infix_chain(&mut self, min: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_prefix()?;

        loop {
            let kind = self.peek_kind();
            let Some(prec) = infix_precedence(kind) else {
                break;
            };
            if prec < min {
                break;
            }
            if kind == TokenKind::Keyword(Keyword::Not)
                && !matches!(
                    self.peek_kind_nth(1),
                    TokenKind::Keyword(
                        Keyword::In
                            | Keyword::Like
                            | Keyword::Between
                            | Keyword::Regexp
                            | Keyword::Rlike
                    )
                )
            {
                break;
            }
            self.deepen()?;
            lhs = self.parse_infix(lhs, prec)?;
        }

        Ok(lhs)
    }

    fn parse_infix(&mut self, lhs: Expr, prec: u8) -> Result<Expr, ParseError> {
        let token = self.advance();
        let next = prec + 1;
        let lhs = Box::new(lhs);

        match token.kind {
            TokenKind::Keyword(Keyword::Or) | TokenKind::PipePipe => {
                Ok(Expr::Or(lhs, Box::new(self.parse_expr_bp(next)?)))
            }
            TokenKind::Keyword(Keyword::Xor) => {
                Ok(Expr::Xor(lhs, Box::new(self.parse_expr_bp(next)?)))
            }
            TokenKind::Keyword(Keyword::And) | TokenKind::AmpAmp => {
                Ok(Expr::And(lhs, Box::new(self.parse_expr_bp(next)?)))
            }
            TokenKind::Keyword(Keyword::Is) => {
                let negated = self.eat_keyword(Keyword::Not);
                let op = match (self.peek_kind(), negated) {
                    (TokenKind::Keyword(Keyword::Null), false) => IsOp::Null,
                    (TokenKind::Keyword(Keyword::Null), true) => IsOp::NotNull,
                    (TokenKind::Keyword(Keyword::True), false) => IsOp::True,
                    (TokenKind::Keyword(Keyword::True), true) => IsOp::NotTrue,
                    (TokenKind::Keyword(Keyword::False), false) => IsOp::False,
                    (TokenKind::Keyword(Keyword::False), true) => IsOp::NotFalse,
                    _ => return Err(self.unexpected()),
                };
                self.advance();
                Ok(Expr::Is { expr: lhs, op })
            }
            TokenKind::Keyword(Keyword::Not) => {
                let token = self.advance();
                self.parse_predicate(lhs, token.kind, true, next)
            }
            TokenKind::Keyword(
                Keyword::In | Keyword::Like | Keyword::Between | Keyword::Regexp | Keyword::Rlike,
            ) => self.parse_predicate(lhs, token.kind, false, next),
            kind => {
                if let Some(op) = token_to_comparison_op(kind) {
                    let right = self.parse_expr_bp(next)?;
                    return Ok(Expr::Comparison {
                        op,
                        left: lhs,
                        right: Box::new(right),
                        escape: None,
                    });
                }
                match token_to_binary_op(kind) {
                    Some(op) => Ok(Expr::Binary {
                        op,
                        left: lhs,
                        right: Box::new(self.parse_expr_bp(next)?),
                    }),
                    None => Err(ParseError::syntax(token.text, token.span)),
                }
            }
        }
    }

    /// Parses the right-hand side of `[NOT] IN|LIKE|BETWEEN|REGEXP`; the
    /// operator keyword is consumed.
    fn parse_predicate(
        &mut self,
        lhs: Box<Expr>,
        kind: TokenKind,
        negated: bool,
        next: u8,
    ) -> Result<Expr, ParseError> {
        if kind == TokenKind::Keyword(Keyword::Between) {
            let from = self.parse_expr_bp(next)?;
            self.expect_keyword(Keyword::And)?;
            let to = self.parse_expr_bp(next)?;
            return Ok(Expr::Between {
                expr: lhs,
                from: Box::new(from),
                to: Box::new(to),
                negated,
            });
        }

        let Some(mut op) = token_to_comparison_op(kind) else {
            return Err(self.unexpected());
        };
        if negated {
            op = op.negated().unwrap_or(op);
        }

        let (right, escape) = if op == ComparisonOp::In || op == ComparisonOp::NotIn {
            (self.parse_in_list()?, None)
        } else {
            let right = self.parse_expr_bp(next)?;
            let escape = if self.eat_keyword(Keyword::Escape) {
                Some(Box::new(self.parse_expr_bp(next)?))
            } else {
                None
            };
            (right, escape)
        };

        Ok(Expr::Comparison {
            op,
            left: lhs,
            right: Box::new(right),
            escape,
        })
    }

    /// Parses the operand of `IN`: a list bind variable, a subquery or a
    /// parenthesized value list.
    fn parse_in_list(&mut self) -> Result<Expr, ParseError> {
        if self.check(TokenKind::ListArg) {
            let token = self.advance();
            return Ok(Expr::ListArg(token.text.into_owned()));
        }
        self.expect(TokenKind::LeftParen)?;
        let expr = if self.check_keyword(Keyword::Select) {
            Expr::Subquery(Box::new(self.parse_select_statement()?))
        } else {
            Expr::Tuple(self.parse_expr_list()?)
        };
        self.expect(TokenKind::RightParen)?;
        Ok(expr)
    }

    /// Parses a prefix expression.
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let kind = self.peek_kind();

        if let Some(op) = token_to_unary_op(kind) {
            self.advance();
            let operand = self.parse_expr_bp(Precedence::UNARY)?;
            return Ok(Expr::Unary {
                op,
                expr: Box::new(operand),
            });
        }

        match kind {
            TokenKind::Plus => {
                self.advance();
                self.parse_expr_bp(Precedence::UNARY)
            }
            TokenKind::Keyword(Keyword::Not) => {
                self.advance();
                let operand = self.parse_expr_bp(Precedence::NOT)?;
                Ok(Expr::Not(Box::new(operand)))
            }
            _ => self.parse_primary(),
        }
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let kind = self.peek_kind();

        if let Some(kind) = literal_kind(kind) {
            let token = self.advance();
            return Ok(Expr::literal(kind, token.text.into_owned()));
        }

        match kind {
            TokenKind::Keyword(Keyword::True) => {
                self.advance();
                Ok(Expr::Bool(true))
            }
            TokenKind::Keyword(Keyword::False) => {
                self.advance();
                Ok(Expr::Bool(false))
            }
            TokenKind::Keyword(Keyword::Null) => {
                self.advance();
                Ok(Expr::Null)
            }

            // Bind variables
            TokenKind::ValueArg => Ok(Expr::Argument(self.advance().text.into_owned())),
            TokenKind::ListArg => Ok(Expr::ListArg(self.advance().text.into_owned())),

            // Variables
            TokenKind::AtId => {
                let name = self.advance().text.into_owned();
                Ok(Expr::Variable(ColIdent::new_with_at(name, AtCount::SingleAt)))
            }
            TokenKind::AtAtId => {
                let name = self.advance().text.into_owned();
                Ok(Expr::Variable(ColIdent::new_with_at(name, AtCount::DoubleAt)))
            }

            TokenKind::LeftParen => self.parse_paren_expr(),

            TokenKind::Keyword(Keyword::Exists) => {
                self.advance();
                self.expect(TokenKind::LeftParen)?;
                let query = self.parse_select_statement()?;
                self.expect(TokenKind::RightParen)?;
                Ok(Expr::Exists(Box::new(query)))
            }
            TokenKind::Keyword(Keyword::Case) => self.parse_case_expr(),
            TokenKind::Keyword(Keyword::Cast) if self.peek_kind_nth(1) == TokenKind::LeftParen => {
                self.parse_cast_expr()
            }
            TokenKind::Keyword(Keyword::Default) => {
                self.advance();
                if !self.eat(TokenKind::LeftParen) {
                    return Ok(Expr::Default(None));
                }
                let name = self.parse_ident()?;
                self.expect(TokenKind::RightParen)?;
                Ok(Expr::Default(Some(ColIdent::new(name))))
            }

            TokenKind::Keyword(kw)
                if kw.is_function_name() && self.peek_kind_nth(1) == TokenKind::LeftParen =>
            {
                let name = self.advance().text.into_owned();
                self.parse_function_call(TableIdent::default(), name)
            }

            _ if self.is_ident_at(0) => self.parse_column_or_function(),

            _ => Err(self.unexpected()),
        }
    }

    /// Parses a parenthesized expression, tuple or subquery.
    fn parse_paren_expr(&mut self) -> Result<Expr, ParseError> {
        self.expect(TokenKind::LeftParen)?;
        if self.check_keyword(Keyword::Select) {
            let query = self.parse_select_statement()?;
            self.expect(TokenKind::RightParen)?;
            return Ok(Expr::Subquery(Box::new(query)));
        }

        let mut exprs = self.parse_expr_list()?;
        self.expect(TokenKind::RightParen)?;
        if exprs.len() == 1 {
            if let Some(expr) = exprs.pop() {
                return Ok(expr);
            }
        }
        Ok(Expr::Tuple(exprs))
    }

    /// Parses `name`, `a.name`, `a.b.name` or a (qualified) function call.
    fn parse_column_or_function(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_ident()?;
        if self.check(TokenKind::LeftParen) {
            return self.parse_function_call(TableIdent::default(), first);
        }
        if !self.eat(TokenKind::Dot) {
            return Ok(Expr::Column(ColName::new(first)));
        }

        let second = self.parse_any_ident()?;
        if self.check(TokenKind::LeftParen) {
            return self.parse_function_call(TableIdent::new(first), second);
        }
        if !self.eat(TokenKind::Dot) {
            return Ok(Expr::Column(ColName {
                name: ColIdent::new(second),
                qualifier: TableName::new(first),
            }));
        }

        let third = self.parse_any_ident()?;
        Ok(Expr::Column(ColName {
            name: ColIdent::new(third),
            qualifier: TableName::qualified(first, second),
        }))
    }

    /// Parses the argument list of a function call; the name is consumed.
    fn parse_function_call(
        &mut self,
        qualifier: TableIdent,
        name: String,
    ) -> Result<Expr, ParseError> {
        self.expect(TokenKind::LeftParen)?;
        let distinct = self.eat_keyword(Keyword::Distinct);

        let mut args = vec![];
        if !self.check(TokenKind::RightParen) {
            loop {
                if self.eat(TokenKind::Star) {
                    args.push(SelectExpr::Star(None));
                } else {
                    args.push(SelectExpr::expr(self.parse_expr()?));
                }
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightParen)?;

        Ok(Expr::FuncCall(FuncCall {
            qualifier,
            name: ColIdent::new(name),
            distinct,
            args,
        }))
    }

    /// Parses a CASE expression.
    fn parse_case_expr(&mut self) -> Result<Expr, ParseError> {
        self.expect_keyword(Keyword::Case)?;

        let expr = if self.check_keyword(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };

        let mut whens = vec![];
        while self.eat_keyword(Keyword::When) {
            let cond = self.parse_expr()?;
            self.expect_keyword(Keyword::Then)?;
            let val = self.parse_expr()?;
            whens.push(When { cond, val });
        }
        if whens.is_empty() {
            return Err(self.unexpected());
        }

        let else_expr = if self.eat_keyword(Keyword::Else) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_keyword(Keyword::End)?;

        Ok(Expr::Case(CaseExpr {
            expr,
            whens,
            else_expr,
        }))
    }

    /// Parses `CAST(expr AS type)`.
    fn parse_cast_expr(&mut self) -> Result<Expr, ParseError> {
        self.expect_keyword(Keyword::Cast)?;
        self.expect(TokenKind::LeftParen)?;
        let expr = self.parse_expr()?;
        self.expect_keyword(Keyword::As)?;
        let ty = self.parse_convert_type()?;
        self.expect(TokenKind::RightParen)?;
        Ok(Expr::Cast {
            expr: Box::new(expr),
            ty,
        })
    }

    /// Parses the target type of a CAST.
    fn parse_convert_type(&mut self) -> Result<ConvertType, ParseError> {
        let data_type = self.parse_data_type()?;
        if matches!(&data_type, DataType::Custom(name) if name == "signed" || name == "unsigned")
        {
            // SIGNED INTEGER is the same as SIGNED
            let _ = self.eat_keyword(Keyword::Integer) || self.eat_keyword(Keyword::Int);
            return Ok(ConvertType::new(data_type));
        }
        let (length, scale) = self.parse_length_scale()?;
        Ok(ConvertType {
            data_type,
            length,
            scale,
        })
    }

    /// Parses a data type name.
    pub(super) fn parse_data_type(&mut self) -> Result<DataType, ParseError> {
        let token = self.peek().clone();
        let data_type = match token.kind {
            TokenKind::Keyword(Keyword::Unsigned) => DataType::Custom("unsigned".into()),
            TokenKind::Keyword(Keyword::Set) => DataType::Custom("set".into()),
            TokenKind::Keyword(kw) => match DataType::from_keyword(kw) {
                Some(data_type) => data_type,
                None if !self.keywords.is_reserved(kw) => {
                    DataType::Custom(token.text.to_lowercase())
                }
                None => return Err(self.unexpected()),
            },
            TokenKind::Identifier => DataType::Custom(token.text.to_lowercase()),
            _ => return Err(self.unexpected()),
        };
        self.advance();
        Ok(data_type)
    }

    /// Parses an optional `(length[, scale])` suffix.
    pub(super) fn parse_length_scale(&mut self) -> Result<(Option<u32>, Option<u32>), ParseError> {
        if !self.eat(TokenKind::LeftParen) {
            return Ok((None, None));
        }
        let length = self.parse_u32()?;
        let scale = if self.eat(TokenKind::Comma) {
            Some(self.parse_u32()?)
        } else {
            None
        };
        self.expect(TokenKind::RightParen)?;
        Ok((Some(length), scale))
    }

    /// Parses a comma-separated list of expressions.
    pub(super) fn parse_expr_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![self.parse_expr()?];
        while self.eat(TokenKind::Comma) {
            exprs.push(self.parse_expr()?);
        }
        Ok(exprs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_ordering() {
        let add = infix_precedence(TokenKind::Plus).unwrap();
        let mul = infix_precedence(TokenKind::Star).unwrap();
        assert!(mul > add);

        let and = infix_precedence(TokenKind::Keyword(Keyword::And)).unwrap();
        let or = infix_precedence(TokenKind::Keyword(Keyword::Or)).unwrap();
        assert!(and > or);
        assert_eq!(infix_precedence(TokenKind::PipePipe), Some(or));

        let eq = infix_precedence(TokenKind::Eq).unwrap();
        assert!(eq > and);
        assert!(infix_precedence(TokenKind::BitOr).unwrap() > eq);
        assert!(infix_precedence(TokenKind::BitXor).unwrap() > mul);
    }

    #[test]
    fn test_token_to_binary_op() {
        assert_eq!(token_to_binary_op(TokenKind::Plus), Some(BinaryOp::Plus));
        assert_eq!(
            token_to_binary_op(TokenKind::Keyword(Keyword::Div)),
            Some(BinaryOp::IntDiv)
        );
        assert_eq!(
            token_to_binary_op(TokenKind::Keyword(Keyword::Mod)),
            Some(BinaryOp::Mod)
        );
        assert_eq!(token_to_binary_op(TokenKind::Eq), None);
    }

    #[test]
    fn test_token_to_comparison_op() {
        assert_eq!(
            token_to_comparison_op(TokenKind::Keyword(Keyword::Rlike)),
            Some(ComparisonOp::Regexp)
        );
        assert_eq!(token_to_comparison_op(TokenKind::Plus), None);
    }

    #[test]
    fn test_token_to_unary_op() {
        assert_eq!(token_to_unary_op(TokenKind::Minus), Some(UnaryOp::Minus));
        assert_eq!(token_to_unary_op(TokenKind::Bang), Some(UnaryOp::Bang));
        assert_eq!(token_to_unary_op(TokenKind::Plus), None);
    }
}

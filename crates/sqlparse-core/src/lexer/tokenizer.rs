//! SQL Tokenizer implementation.

use std::borrow::Cow;

use rustc_hash::FxHashSet;
use thiserror::Error;

use super::{KeywordTable, Span, Token, TokenKind};
use crate::dialect::Dialect;

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_NESTING: usize = 200;

/// The set of bind variable names found in a statement.
pub type BindVars = FxHashSet<String>;

/// Lexical errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal is missing its closing quote.
    #[error("unterminated string literal at position {pos}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        pos: usize,
    },

    /// A quoted identifier is missing its closing quote.
    #[error("unterminated quoted identifier at position {pos}")]
    UnterminatedIdentifier {
        /// Byte offset of the opening quote.
        pos: usize,
    },

    /// A block comment is missing its closing `*/`.
    #[error("unterminated comment at position {pos}")]
    UnterminatedComment {
        /// Byte offset of the opening `/*`.
        pos: usize,
    },

    /// A hex or bit literal contains invalid digits.
    #[error("invalid {kind} literal at position {pos}")]
    InvalidLiteral {
        /// Literal family, `hex` or `bit`.
        kind: &'static str,
        /// Byte offset of the literal.
        pos: usize,
    },

    /// A character that starts no token.
    #[error("unexpected character {ch:?} at position {pos}")]
    UnexpectedChar {
        /// The character.
        ch: char,
        /// Byte offset of the character.
        pos: usize,
    },

    /// Parentheses nest deeper than the configured limit.
    #[error("max nesting level reached at position {pos}")]
    MaxNesting {
        /// Byte offset of the opening parenthesis.
        pos: usize,
    },
}

impl LexError {
    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnterminatedString { pos }
            | Self::UnterminatedIdentifier { pos }
            | Self::UnterminatedComment { pos }
            | Self::InvalidLiteral { pos, .. }
            | Self::UnexpectedChar { pos, .. }
            | Self::MaxNesting { pos } => *pos,
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_bind_char(c: char) -> bool {
    is_ident_char(c) || c == '.'
}

/// A restartable tokenizer over one SQL buffer.
///
/// Besides producing tokens the tokenizer records the bind variables it
/// meets, tracks parenthesis nesting, and collects block comments so the
/// parser can attach them to the statement that follows.
pub struct Tokenizer<'a> {
    input: &'a str,
    dialect: Dialect,
    keywords: &'static KeywordTable,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    nesting: usize,
    max_nesting: usize,
    bind_vars: BindVars,
    positional: usize,
    comments: Vec<String>,
    last_error: Option<LexError>,
    /// Set after an error token; every later scan yields EOF.
    errored: bool,
    skip_to_end: bool,
    skip_special_comments: bool,
    in_special_comment: bool,
    allow_comments: bool,
    multi: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a MySQL tokenizer for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_dialect(input, Dialect::MySql)
    }

    /// Creates a tokenizer for the given input and dialect.
    #[must_use]
    pub fn with_dialect(input: &'a str, dialect: Dialect) -> Self {
        Self {
            input,
            dialect,
            keywords: dialect.keywords(),
            pos: 0,
            start: 0,
            nesting: 0,
            max_nesting: DEFAULT_MAX_NESTING,
            bind_vars: BindVars::default(),
            positional: 0,
            comments: Vec::new(),
            last_error: None,
            errored: false,
            skip_to_end: false,
            skip_special_comments: false,
            in_special_comment: false,
            allow_comments: false,
            multi: false,
        }
    }

    /// The input buffer.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// The active dialect.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The current byte position.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// The current parenthesis nesting depth.
    #[must_use]
    pub const fn nesting(&self) -> usize {
        self.nesting
    }

    /// Bind variables seen since the last reset.
    #[must_use]
    pub const fn bind_vars(&self) -> &BindVars {
        &self.bind_vars
    }

    /// Takes the bind variables seen since the last reset.
    pub fn take_bind_vars(&mut self) -> BindVars {
        std::mem::take(&mut self.bind_vars)
    }

    /// The lexical error that stopped scanning, if any.
    #[must_use]
    pub const fn last_error(&self) -> Option<&LexError> {
        self.last_error.as_ref()
    }

    /// Takes the block comments skipped since the last call.
    pub fn take_comments(&mut self) -> Vec<String> {
        std::mem::take(&mut self.comments)
    }

    /// Makes the next scan skip the rest of the current statement.
    ///
    /// The skip stops at the terminating `;` or end of input and returns that
    /// token. Lexical errors met while skipping are ignored.
    pub fn set_skip_to_end(&mut self, skip: bool) {
        self.skip_to_end = skip;
        if skip {
            self.errored = false;
        }
    }

    /// Discards MySQL executable comments (`/*! ... */`) instead of scanning
    /// their contents.
    pub fn set_skip_special_comments(&mut self, skip: bool) {
        self.skip_special_comments = skip;
    }

    /// In multi-statement mode a `;` ends the input: it is scanned as EOF and
    /// the position is left just past it.
    pub fn set_multi(&mut self, multi: bool) {
        self.multi = multi;
    }

    /// Returns comments as [`TokenKind::Comment`] tokens instead of
    /// collecting them.
    pub fn set_allow_comments(&mut self, allow: bool) {
        self.allow_comments = allow;
    }

    /// Sets the parenthesis nesting limit.
    pub fn set_max_nesting(&mut self, max: usize) {
        self.max_nesting = max;
    }

    /// Resets the scanning state for another statement, keeping the input
    /// buffer and the position.
    pub fn reset(&mut self) {
        self.nesting = 0;
        self.bind_vars.clear();
        self.positional = 0;
        self.comments.clear();
        self.last_error = None;
        self.errored = false;
        self.skip_to_end = false;
        self.in_special_comment = false;
        self.multi = false;
    }

    /// Returns true if only whitespace remains.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.input[self.pos..].trim_start().is_empty()
    }

    /// Skips blanks and at most one statement separator.
    pub fn skip_separator(&mut self) {
        self.eat_while(char::is_whitespace);
        if self.peek() == Some(';') {
            self.advance();
            self.eat_while(char::is_whitespace);
        }
    }

    /// Scans the next token.
    pub fn scan(&mut self) -> Token<'a> {
        if self.skip_to_end {
            self.skip_to_end = false;
            return self.skip_statement();
        }
        if self.errored {
            return Token::eof(self.pos);
        }
        self.scan_token()
    }

    /// Tokenizes the remaining input, up to and including EOF.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn skip_statement(&mut self) -> Token<'a> {
        let saved = self.last_error.take();
        let token = loop {
            let token = self.scan_token();
            self.errored = false;
            if matches!(token.kind, TokenKind::Semicolon | TokenKind::Eof) {
                break token;
            }
        };
        self.last_error = saved;
        token
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character `n` positions ahead without advancing.
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(n)
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Creates a span from start to current position.
    const fn span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    fn raw(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    /// Creates a token over the raw text of the current span.
    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, self.raw(), self.span())
    }

    fn error(&mut self, err: LexError) -> Token<'a> {
        tracing::trace!(%err, "lexical error");
        let token = self.make_token(TokenKind::Error);
        self.last_error = Some(err);
        self.errored = true;
        token
    }

    /// Skips whitespace and comments. Returns a token when a comment must be
    /// surfaced or a comment is unterminated.
    fn skip_trivia(&mut self) -> Option<Token<'a>> {
        loop {
            self.eat_while(char::is_whitespace);
            self.start = self.pos;
            match (self.peek(), self.peek_nth(1)) {
                (Some('-'), Some('-'))
                    if !self.dialect.strict_dash_comments()
                        || self.peek_nth(2).map_or(true, char::is_whitespace) =>
                {
                    if let Some(token) = self.line_comment() {
                        return Some(token);
                    }
                }
                (Some('#'), _) if self.dialect.hash_comments() => {
                    if let Some(token) = self.line_comment() {
                        return Some(token);
                    }
                }
                (Some('/'), Some('*')) => {
                    if let Some(token) = self.block_comment() {
                        return Some(token);
                    }
                }
                (Some('*'), Some('/')) if self.in_special_comment => {
                    self.pos += 2;
                    self.in_special_comment = false;
                }
                _ => return None,
            }
        }
    }

    fn line_comment(&mut self) -> Option<Token<'a>> {
        self.eat_while(|c| c != '\n');
        self.allow_comments
            .then(|| self.make_token(TokenKind::Comment))
    }

    fn block_comment(&mut self) -> Option<Token<'a>> {
        self.pos += 2;
        let special = self.peek() == Some('!');
        if special && !self.skip_special_comments && !self.in_special_comment {
            self.advance();
            self.eat_while(|c| c.is_ascii_digit());
            self.in_special_comment = true;
            return None;
        }
        match self.input[self.pos..].find("*/") {
            Some(offset) => self.pos += offset + 2,
            None => {
                self.pos = self.input.len();
                return Some(self.error(LexError::UnterminatedComment { pos: self.start }));
            }
        }
        if self.allow_comments {
            return Some(self.make_token(TokenKind::Comment));
        }
        if !special {
            self.comments.push(self.raw().to_owned());
        }
        None
    }

    fn scan_token(&mut self) -> Token<'a> {
        if let Some(token) = self.skip_trivia() {
            return token;
        }
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            '(' => {
                self.nesting += 1;
                if self.nesting > self.max_nesting {
                    return self.error(LexError::MaxNesting { pos: self.start });
                }
                self.make_token(TokenKind::LeftParen)
            }
            ')' => {
                self.nesting = self.nesting.saturating_sub(1);
                self.make_token(TokenKind::RightParen)
            }
            ',' => self.make_token(TokenKind::Comma),
            ';' if self.multi => Token::new(TokenKind::Eof, "", Span::new(self.pos, self.pos)),
            ';' => self.make_token(TokenKind::Semicolon),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '%' => self.make_token(TokenKind::Percent),
            '^' => self.make_token(TokenKind::BitXor),
            '~' => self.make_token(TokenKind::BitNot),
            '=' => self.make_token(TokenKind::Eq),
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                self.pos = self.start;
                self.scan_number()
            }
            '.' => self.make_token(TokenKind::Dot),
            '<' => {
                if self.eat('=') {
                    if self.eat('>') {
                        self.make_token(TokenKind::NullSafeEq)
                    } else {
                        self.make_token(TokenKind::LtEq)
                    }
                } else if self.eat('>') {
                    self.make_token(TokenKind::NotEq)
                } else if self.eat('<') {
                    self.make_token(TokenKind::LeftShift)
                } else {
                    self.make_token(TokenKind::Lt)
                }
            }
            '>' => {
                if self.eat('=') {
                    self.make_token(TokenKind::GtEq)
                } else if self.eat('>') {
                    self.make_token(TokenKind::RightShift)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '!' => {
                if self.eat('=') {
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.make_token(TokenKind::Bang)
                }
            }
            '|' => {
                if self.eat('|') {
                    self.make_token(TokenKind::PipePipe)
                } else {
                    self.make_token(TokenKind::BitOr)
                }
            }
            '&' => {
                if self.eat('&') {
                    self.make_token(TokenKind::AmpAmp)
                } else {
                    self.make_token(TokenKind::BitAnd)
                }
            }
            '?' => {
                self.positional += 1;
                let name = format!("v{}", self.positional);
                self.bind_vars.insert(name.clone());
                Token::new(TokenKind::ValueArg, name, self.span())
            }
            ':' => self.scan_bind_var(),
            '@' => self.scan_variable(),

            // String literals
            '\'' => self.scan_string('\''),
            '"' if self.dialect.double_quoted_strings() => self.scan_string('"'),

            // Quoted identifiers
            '"' | '`' => self.scan_quoted_identifier(c),

            // Hex and bit strings
            'X' | 'x' if self.peek() == Some('\'') => self.scan_digit_string(TokenKind::HexString),
            'B' | 'b' if self.peek() == Some('\'') => self.scan_digit_string(TokenKind::BitString),

            c if c.is_ascii_digit() => {
                self.pos = self.start;
                self.scan_number()
            }

            // Identifiers and keywords
            c if is_ident_start(c) => self.scan_identifier(),

            ch => self.error(LexError::UnexpectedChar {
                ch,
                pos: self.start,
            }),
        }
    }

    /// Scans an identifier or keyword; the first character is consumed.
    fn scan_identifier(&mut self) -> Token<'a> {
        self.eat_while(is_ident_char);
        let text = self.raw();
        match self.keywords.lookup(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier),
        }
    }

    /// Scans a quoted identifier; the opening quote is consumed.
    fn scan_quoted_identifier(&mut self, quote: char) -> Token<'a> {
        match self.scan_quoted(quote, false) {
            Some(text) => Token::new(TokenKind::Identifier, text, self.span()),
            None => self.error(LexError::UnterminatedIdentifier { pos: self.start }),
        }
    }

    /// Scans a string literal; the opening quote is consumed.
    fn scan_string(&mut self, quote: char) -> Token<'a> {
        match self.scan_quoted(quote, true) {
            Some(text) => Token::new(TokenKind::String, text, self.span()),
            None => self.error(LexError::UnterminatedString { pos: self.start }),
        }
    }

    /// Scans up to the closing `quote`, decoding doubled quotes and, when
    /// `escapes` is set, backslash escapes. Returns `None` at end of input.
    fn scan_quoted(&mut self, quote: char, escapes: bool) -> Option<Cow<'a, str>> {
        let input = self.input;
        let content_start = self.pos;
        let mut decoded: Option<String> = None;

        loop {
            let at = self.pos;
            let c = self.advance()?;
            if c == quote {
                if self.eat(quote) {
                    decoded
                        .get_or_insert_with(|| input[content_start..at].to_owned())
                        .push(quote);
                    continue;
                }
                return Some(match decoded {
                    Some(value) => Cow::Owned(value),
                    None => Cow::Borrowed(&input[content_start..at]),
                });
            }
            if escapes && c == '\\' {
                let escaped = self.advance()?;
                let out = decoded.get_or_insert_with(|| input[content_start..at].to_owned());
                match escaped {
                    '0' => out.push('\0'),
                    'b' => out.push('\u{8}'),
                    'n' => out.push('\n'),
                    'r' => out.push('\r'),
                    't' => out.push('\t'),
                    'Z' => out.push('\u{1a}'),
                    // LIKE wildcards keep their escape.
                    '%' | '_' => {
                        out.push('\\');
                        out.push(escaped);
                    }
                    other => out.push(other),
                }
                continue;
            }
            if let Some(out) = decoded.as_mut() {
                out.push(c);
            }
        }
    }

    /// Scans `X'..'` or `B'..'`; the prefix letter is consumed.
    fn scan_digit_string(&mut self, kind: TokenKind) -> Token<'a> {
        self.advance();
        let content_start = self.pos;
        let Some(offset) = self.input[self.pos..].find('\'') else {
            self.pos = self.input.len();
            return self.error(LexError::UnterminatedString { pos: self.start });
        };
        let content = &self.input[content_start..content_start + offset];
        self.pos = content_start + offset + 1;

        let (valid, family) = if kind == TokenKind::HexString {
            (
                content.len() % 2 == 0 && content.chars().all(|c| c.is_ascii_hexdigit()),
                "hex",
            )
        } else {
            (content.chars().all(|c| c == '0' || c == '1'), "bit")
        };
        if !valid {
            return self.error(LexError::InvalidLiteral {
                kind: family,
                pos: self.start,
            });
        }
        Token::new(kind, content, self.span())
    }

    /// Scans a number. Digits running into letters form an identifier.
    fn scan_number(&mut self) -> Token<'a> {
        if self.peek() == Some('0') {
            match self.peek_nth(1) {
                Some('x' | 'X') if self.peek_nth(2).is_some_and(|c| c.is_ascii_hexdigit()) => {
                    self.pos += 2;
                    self.eat_while(|c| c.is_ascii_hexdigit());
                    return self.finish_number(TokenKind::HexNum);
                }
                Some('b' | 'B') if self.peek_nth(2).is_some_and(|c| c == '0' || c == '1') => {
                    self.pos += 2;
                    self.eat_while(|c| c == '0' || c == '1');
                    return self.finish_number(TokenKind::BitNum);
                }
                _ => {}
            }
        }

        let mut kind = TokenKind::Integer;
        self.eat_while(|c| c.is_ascii_digit());

        if self.peek() == Some('.') {
            kind = TokenKind::Float;
            self.advance();
            self.eat_while(|c| c.is_ascii_digit());
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let has_exponent = match self.peek_nth(1) {
                Some('+' | '-') => self.peek_nth(2).is_some_and(|c| c.is_ascii_digit()),
                Some(c) => c.is_ascii_digit(),
                None => false,
            };
            if has_exponent {
                kind = TokenKind::Float;
                self.pos += 2;
                self.eat_while(|c| c.is_ascii_digit());
            }
        }

        self.finish_number(kind)
    }

    fn finish_number(&mut self, kind: TokenKind) -> Token<'a> {
        if kind != TokenKind::Float && self.peek().is_some_and(is_ident_char) {
            return self.scan_identifier();
        }
        self.make_token(kind)
    }

    /// Scans `:name` or `::name`; the first colon is consumed.
    fn scan_bind_var(&mut self) -> Token<'a> {
        let list = self.peek() == Some(':');
        let sigil = if list { 2 } else { 1 };
        if !self.peek_nth(sigil - 1).is_some_and(is_bind_char) {
            return self.error(LexError::UnexpectedChar {
                ch: ':',
                pos: self.start,
            });
        }
        if list {
            self.advance();
        }
        self.eat_while(is_bind_char);
        let name = &self.input[self.start + sigil..self.pos];
        self.bind_vars.insert(name.to_owned());
        let kind = if list {
            TokenKind::ListArg
        } else {
            TokenKind::ValueArg
        };
        Token::new(kind, name, self.span())
    }

    /// Scans `@name` or `@@name`; the first `@` is consumed.
    fn scan_variable(&mut self) -> Token<'a> {
        if self.eat('@') {
            let name_start = self.pos;
            loop {
                match self.peek() {
                    Some('`') => {
                        self.advance();
                        if self.scan_quoted('`', false).is_none() {
                            return self.error(LexError::UnterminatedIdentifier { pos: self.start });
                        }
                    }
                    Some(c) if is_bind_char(c) => {
                        self.advance();
                    }
                    _ => break,
                }
            }
            if self.pos == name_start {
                return self.error(LexError::UnexpectedChar {
                    ch: '@',
                    pos: self.start,
                });
            }
            let name = &self.input[name_start..self.pos];
            return Token::new(TokenKind::AtAtId, name, self.span());
        }

        match self.peek() {
            Some(quote @ ('\'' | '"' | '`')) => {
                self.advance();
                match self.scan_quoted(quote, quote != '`') {
                    Some(name) => Token::new(TokenKind::AtId, name, self.span()),
                    None => self.error(LexError::UnterminatedIdentifier { pos: self.start }),
                }
            }
            Some(c) if is_bind_char(c) => {
                let name_start = self.pos;
                self.eat_while(is_bind_char);
                let name = &self.input[name_start..self.pos];
                Token::new(TokenKind::AtId, name, self.span())
            }
            _ => self.error(LexError::UnexpectedChar {
                ch: '@',
                pos: self.start,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Keyword;

    fn tokenize(input: &str) -> Vec<Token<'_>> {
        Tokenizer::new(input).tokenize()
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn texts(input: &str) -> Vec<String> {
        tokenize(input)
            .into_iter()
            .filter(|t| !t.is_eof())
            .map(|t| t.text.into_owned())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0].kind, TokenKind::Eof));
        assert_eq!(token_kinds("   \n\t  "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            token_kinds("SELECT a FROM t"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Identifier,
                TokenKind::Keyword(Keyword::From),
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
        assert_eq!(texts("select `my col`"), vec!["select", "my col"]);
        assert_eq!(texts("`a``b`"), vec!["a`b"]);
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            token_kinds("SELECT -- comment\nFROM # hash\n/* block */ t"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_mysql_dash_comment_needs_space() {
        assert_eq!(
            token_kinds("1--1"),
            vec![
                TokenKind::Integer,
                TokenKind::Minus,
                TokenKind::Minus,
                TokenKind::Integer,
                TokenKind::Eof,
            ]
        );
        let generic: Vec<_> = Tokenizer::with_dialect("1--1", Dialect::Generic)
            .tokenize()
            .into_iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(generic, vec![TokenKind::Integer, TokenKind::Eof]);
    }

    #[test]
    fn test_block_comments_are_collected() {
        let mut tokenizer = Tokenizer::new("select /* a */ /*+ hint */ 1");
        assert_eq!(tokenizer.scan().kind, TokenKind::Keyword(Keyword::Select));
        assert!(tokenizer.take_comments().is_empty());
        assert_eq!(tokenizer.scan().kind, TokenKind::Integer);
        assert_eq!(tokenizer.take_comments(), vec!["/* a */", "/*+ hint */"]);
    }

    #[test]
    fn test_allow_comments() {
        let mut tokenizer = Tokenizer::new("/* a */ 1 -- b");
        tokenizer.set_allow_comments(true);
        let kinds: Vec<_> = tokenizer.tokenize().into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Comment,
                TokenKind::Integer,
                TokenKind::Comment,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_special_comments() {
        assert_eq!(texts("select /*!40101 1 */ from t"), vec!["select", "1", "from", "t"]);

        let mut tokenizer = Tokenizer::new("select /*!40101 1 */ from t");
        tokenizer.set_skip_special_comments(true);
        let kinds: Vec<_> = tokenizer.tokenize().into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(texts(r"'a\nb'"), vec!["a\nb"]);
        assert_eq!(texts(r"'it''s'"), vec!["it's"]);
        assert_eq!(texts(r"'\0\Z\b'"), vec!["\0\u{1a}\u{8}"]);
        assert_eq!(texts(r"'50\%'"), vec![r"50\%"]);
        assert_eq!(texts(r"'a\_b'"), vec![r"a\_b"]);
        assert_eq!(texts(r"'\q'"), vec!["q"]);
        assert_eq!(texts(r#"'\'\"\\'"#), vec![r#"'"\"#]);
    }

    #[test]
    fn test_unescaped_string_is_borrowed() {
        let tokens = tokenize("'plain'");
        assert!(matches!(tokens[0].text, Cow::Borrowed("plain")));
    }

    #[test]
    fn test_double_quotes_per_dialect() {
        assert_eq!(tokenize("\"x\"")[0].kind, TokenKind::String);
        let generic = Tokenizer::with_dialect("\"x\"", Dialect::Generic).tokenize();
        assert_eq!(generic[0].kind, TokenKind::Identifier);
        assert_eq!(generic[0].text, "x");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            token_kinds("1 1.5 .5 1e10 2E-3 0x1F 0b101 X'1F' b'01'"),
            vec![
                TokenKind::Integer,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::HexNum,
                TokenKind::BitNum,
                TokenKind::HexString,
                TokenKind::BitString,
                TokenKind::Eof,
            ]
        );
        assert_eq!(texts("X'1F' 0x1F"), vec!["1F", "0x1F"]);
    }

    #[test]
    fn test_digits_then_letters_form_identifier() {
        let tokens = tokenize("1a 0xzz");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "1a");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "0xzz");
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            token_kinds("<=> <= <> != < << >= >> > && || & | ^ ~ !"),
            vec![
                TokenKind::NullSafeEq,
                TokenKind::LtEq,
                TokenKind::NotEq,
                TokenKind::NotEq,
                TokenKind::Lt,
                TokenKind::LeftShift,
                TokenKind::GtEq,
                TokenKind::RightShift,
                TokenKind::Gt,
                TokenKind::AmpAmp,
                TokenKind::PipePipe,
                TokenKind::BitAnd,
                TokenKind::BitOr,
                TokenKind::BitXor,
                TokenKind::BitNot,
                TokenKind::Bang,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_bind_vars() {
        let mut tokenizer = Tokenizer::new("select :a, ::list, ?, ? from t where x = :b.c");
        let tokens = tokenizer.tokenize();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert!(kinds.contains(&TokenKind::ListArg));
        assert_eq!(tokens[1].text, "a");
        assert_eq!(tokens[3].text, "list");
        assert_eq!(tokens[5].text, "v1");
        assert_eq!(tokens[7].text, "v2");

        let mut names: Vec<_> = tokenizer.take_bind_vars().into_iter().collect();
        names.sort();
        assert_eq!(names, vec!["a", "b.c", "list", "v1", "v2"]);
    }

    #[test]
    fn test_variables() {
        let tokens = tokenize("@a @'x y' @`b` @@session.sql_mode @@global.`x`");
        assert_eq!(tokens[0].kind, TokenKind::AtId);
        assert_eq!(tokens[0].text, "a");
        assert_eq!(tokens[1].text, "x y");
        assert_eq!(tokens[2].text, "b");
        assert_eq!(tokens[3].kind, TokenKind::AtAtId);
        assert_eq!(tokens[3].text, "session.sql_mode");
        assert_eq!(tokens[4].text, "global.`x`");

        let mut tokenizer = Tokenizer::new("@a @@b");
        let _ = tokenizer.tokenize();
        assert!(tokenizer.bind_vars().is_empty());
    }

    #[test]
    fn test_nesting() {
        let mut tokenizer = Tokenizer::new("((1)");
        tokenizer.scan();
        tokenizer.scan();
        assert_eq!(tokenizer.nesting(), 2);
        tokenizer.scan();
        tokenizer.scan();
        assert_eq!(tokenizer.nesting(), 1);
    }

    #[test]
    fn test_max_nesting() {
        let sql = "(".repeat(DEFAULT_MAX_NESTING + 1);
        let mut tokenizer = Tokenizer::new(&sql);
        let tokens = tokenizer.tokenize();
        assert_eq!(tokens[tokens.len() - 2].kind, TokenKind::Error);
        assert_eq!(
            tokenizer.last_error(),
            Some(&LexError::MaxNesting {
                pos: DEFAULT_MAX_NESTING
            })
        );
        assert!(tokenizer
            .last_error()
            .is_some_and(|e| e.to_string().starts_with("max nesting level reached")));
    }

    #[test]
    fn test_error_then_eof_forever() {
        let mut tokenizer = Tokenizer::new("select 'abc");
        assert_eq!(tokenizer.scan().kind, TokenKind::Keyword(Keyword::Select));
        assert_eq!(tokenizer.scan().kind, TokenKind::Error);
        assert_eq!(tokenizer.scan().kind, TokenKind::Eof);
        assert_eq!(tokenizer.scan().kind, TokenKind::Eof);
        assert_eq!(
            tokenizer.last_error(),
            Some(&LexError::UnterminatedString { pos: 7 })
        );
    }

    #[test]
    fn test_lexical_errors() {
        let cases = [
            ("`abc", LexError::UnterminatedIdentifier { pos: 0 }),
            ("/* abc", LexError::UnterminatedComment { pos: 0 }),
            ("X'1'", LexError::InvalidLiteral { kind: "hex", pos: 0 }),
            ("B'12'", LexError::InvalidLiteral { kind: "bit", pos: 0 }),
            ("a \\ b", LexError::UnexpectedChar { ch: '\\', pos: 2 }),
            ("a : b", LexError::UnexpectedChar { ch: ':', pos: 2 }),
        ];
        for (sql, expected) in cases {
            let mut tokenizer = Tokenizer::new(sql);
            let _ = tokenizer.tokenize();
            assert_eq!(tokenizer.last_error(), Some(&expected), "input: {sql}");
        }
    }

    #[test]
    fn test_multi_mode_stops_at_semicolon() {
        let mut tokenizer = Tokenizer::new("select 1; select 2");
        tokenizer.set_multi(true);
        assert_eq!(tokenizer.scan().kind, TokenKind::Keyword(Keyword::Select));
        assert_eq!(tokenizer.scan().kind, TokenKind::Integer);
        assert_eq!(tokenizer.scan().kind, TokenKind::Eof);
        assert_eq!(tokenizer.pos(), 9);
        assert_eq!(tokenizer.scan().kind, TokenKind::Keyword(Keyword::Select));
    }

    #[test]
    fn test_skip_to_end() {
        let mut tokenizer = Tokenizer::new("create table t (a 'x' $ ; select");
        tokenizer.scan();
        tokenizer.set_skip_to_end(true);
        assert_eq!(tokenizer.scan().kind, TokenKind::Semicolon);
        assert_eq!(tokenizer.scan().kind, TokenKind::Keyword(Keyword::Select));
    }

    #[test]
    fn test_reset_keeps_position() {
        let mut tokenizer = Tokenizer::new("(:a 'x");
        let _ = tokenizer.tokenize();
        let pos = tokenizer.pos();
        tokenizer.reset();
        assert_eq!(tokenizer.pos(), pos);
        assert_eq!(tokenizer.nesting(), 0);
        assert!(tokenizer.bind_vars().is_empty());
        assert!(tokenizer.last_error().is_none());
    }

    #[test]
    fn test_skip_separator() {
        let mut tokenizer = Tokenizer::new("  ;  select");
        tokenizer.skip_separator();
        assert_eq!(tokenizer.pos(), 5);
        assert!(!tokenizer.is_at_end());
        assert!(Tokenizer::new("   ").is_at_end());
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("select  abc");
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(8, 11));
        assert_eq!(tokens[2].span, Span::new(11, 11));
    }
}

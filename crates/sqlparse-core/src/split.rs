//! Splitting SQL blobs into statements.
//!
//! Statement boundaries come from the tokenizer, so a `;` inside a string,
//! quoted identifier or comment never splits.

use crate::error::{Result, SqlError};
use crate::lexer::{TokenKind, Tokenizer};
use crate::parser::ParseError;

fn lex_error(tokenizer: &Tokenizer<'_>) -> Option<SqlError> {
    tokenizer
        .last_error()
        .map(|err| ParseError::Lex(err.clone()).into())
}

/// Splits off the first statement of `blob`.
///
/// Returns the statement without its `;` and the remainder after it. With
/// no `;` the whole blob is the statement.
///
/// # Errors
///
/// Fails with [`crate::error::Code::InvalidArgument`] on a lexical error
/// before the first `;`.
pub fn split_statement(blob: &str) -> Result<(&str, &str)> {
    let mut tokenizer = Tokenizer::new(blob);
    let token = loop {
        let token = tokenizer.scan();
        if matches!(
            token.kind,
            TokenKind::Semicolon | TokenKind::Eof | TokenKind::Error
        ) {
            break token;
        }
    };
    if let Some(err) = lex_error(&tokenizer) {
        return Err(err);
    }
    if token.kind == TokenKind::Semicolon {
        return Ok((&blob[..token.span.start], &blob[token.span.end..]));
    }
    Ok((blob, ""))
}

/// Splits `blob` into its statements.
///
/// Pieces keep their surrounding whitespace and lose their `;`. Pieces
/// holding no token (only blanks or comments) are dropped.
///
/// # Errors
///
/// Fails with [`crate::error::Code::InvalidArgument`] on a lexical error.
///
/// # Example
///
/// ```
/// use sqlparse_core::split::split_statement_to_pieces;
///
/// let pieces = split_statement_to_pieces("select ';'; select 2;").unwrap();
/// assert_eq!(pieces, vec!["select ';'", " select 2"]);
/// ```
pub fn split_statement_to_pieces(blob: &str) -> Result<Vec<&str>> {
    // Most blobs hold one statement and at most a final `;`.
    if blob.is_empty() {
        return Ok(vec![]);
    }
    match blob.find(';') {
        None => return Ok(vec![blob]),
        Some(pos) if pos == blob.len() - 1 => return Ok(vec![&blob[..pos]]),
        Some(_) => {}
    }

    let mut tokenizer = Tokenizer::new(blob);
    let mut pieces = Vec::with_capacity(16);
    let mut begin = 0;
    let mut empty = true;
    loop {
        let token = tokenizer.scan();
        match token.kind {
            TokenKind::Semicolon => {
                if !empty {
                    pieces.push(&blob[begin..token.span.start]);
                    empty = true;
                }
                begin = token.span.end;
            }
            TokenKind::Eof | TokenKind::Error => {
                if !empty && begin < blob.len() {
                    pieces.push(&blob[begin..]);
                }
                break;
            }
            _ => empty = false,
        }
    }

    if let Some(err) = lex_error(&tokenizer) {
        return Err(err);
    }
    tracing::trace!(pieces = pieces.len(), "split statements");
    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Code;

    #[test]
    fn test_split_statement() {
        assert_eq!(
            split_statement("select 1; select 2").unwrap(),
            ("select 1", " select 2")
        );
        assert_eq!(split_statement("select 1").unwrap(), ("select 1", ""));
        assert_eq!(
            split_statement("select ';' from t; x").unwrap(),
            ("select ';' from t", " x")
        );
    }

    #[test]
    fn test_pieces_fast_paths() {
        assert!(split_statement_to_pieces("").unwrap().is_empty());
        assert_eq!(split_statement_to_pieces("select 1").unwrap(), vec!["select 1"]);
        assert_eq!(split_statement_to_pieces("select 1;").unwrap(), vec!["select 1"]);
    }

    #[test]
    fn test_pieces() {
        assert_eq!(split_statement_to_pieces("a; b;").unwrap(), vec!["a", " b"]);
        assert_eq!(
            split_statement_to_pieces("a;; /* c */ ;b").unwrap(),
            vec!["a", "b"]
        );
        assert_eq!(
            split_statement_to_pieces("select `a;b` from t; select '--;'").unwrap(),
            vec!["select `a;b` from t", " select '--;'"]
        );
    }

    #[test]
    fn test_pieces_lex_error() {
        let err = split_statement_to_pieces("select 1; select 'x").unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
    }
}

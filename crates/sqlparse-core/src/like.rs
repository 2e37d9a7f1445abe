//! Compiling SQL LIKE patterns to regular expressions.

use regex::{Regex, RegexBuilder};

use crate::ast::ShowFilter;

/// Translates a LIKE pattern to an anchored regular expression source.
///
/// `%` matches any run of characters and `_` exactly one. A backslash makes
/// the next character literal; a trailing lone backslash matches itself.
/// Everything else is escaped.
#[must_use]
pub fn like_to_regex_source(pattern: &str) -> String {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push('^');

    let mut chars = pattern.chars();
    let mut buf = [0u8; 4];
    while let Some(c) = chars.next() {
        match c {
            '%' => source.push_str(".*"),
            '_' => source.push('.'),
            '\\' => {
                let literal = chars.next().unwrap_or('\\');
                source.push_str(&regex::escape(literal.encode_utf8(&mut buf)));
            }
            c => source.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }

    if pattern.is_empty() {
        source.push_str(".*");
    }
    source.push('$');
    source
}

/// Compiles a LIKE pattern. `%` and `_` match line breaks too.
///
/// # Errors
///
/// Returns the regex error if the translated pattern does not compile, for
/// instance when it exceeds the regex size limit.
///
/// # Example
///
/// ```
/// use sqlparse_core::like::like_to_regex;
///
/// let re = like_to_regex("key%").unwrap();
/// assert!(re.is_match("keyboard"));
/// assert!(!re.is_match("ke"));
/// ```
pub fn like_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&like_to_regex_source(pattern))
        .dot_matches_new_line(true)
        .build()
}

impl ShowFilter {
    /// Compiles the LIKE pattern of the filter; `None` for a WHERE filter.
    ///
    /// # Errors
    ///
    /// See [`like_to_regex`].
    pub fn like_regex(&self) -> Result<Option<Regex>, regex::Error> {
        match self {
            Self::Like(pattern) => like_to_regex(pattern).map(Some),
            Self::Where(_) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;

    #[test]
    fn test_empty_pattern() {
        assert_eq!(like_to_regex_source(""), "^.*$");
        assert!(like_to_regex("").unwrap().is_match(""));
    }

    #[test]
    fn test_wildcards() {
        assert_eq!(like_to_regex_source("key%"), "^key.*$");
        assert_eq!(like_to_regex_source("%val1%val2%"), "^.*val1.*val2.*$");
        assert_eq!(like_to_regex_source("_val1_val2%"), "^.val1.val2.*$");

        let re = like_to_regex("_val1_val2%").unwrap();
        assert!(re.is_match("xval1yval2tail"));
        assert!(!re.is_match("val1yval2"));
    }

    #[test]
    fn test_metacharacters_escaped() {
        assert_eq!(like_to_regex_source("?.*?"), r"^\?\.\*\?$");
        let re = like_to_regex("?.*?").unwrap();
        assert!(re.is_match("?.*?"));
        assert!(!re.is_match("a.bb?"));
    }

    #[test]
    fn test_escaped_wildcards() {
        let re = like_to_regex(r"100\%\_x").unwrap();
        assert!(re.is_match("100%_x"));
        assert!(!re.is_match("100abx"));
        assert!(!re.is_match("100%ax"));
    }

    #[test]
    fn test_trailing_backslash() {
        let re = like_to_regex("a\\").unwrap();
        assert!(re.is_match("a\\"));
        assert!(!re.is_match("a"));
    }

    #[test]
    fn test_wildcards_match_line_breaks() {
        let re = like_to_regex("a%d").unwrap();
        assert!(re.is_match("a\nbccc\nd"));
        assert!(like_to_regex("a_b").unwrap().is_match("a\nb"));
    }

    #[test]
    fn test_show_filter() {
        let filter = ShowFilter::Like("t%".into());
        assert!(filter.like_regex().unwrap().unwrap().is_match("tables"));
        assert!(ShowFilter::Where(Expr::Null).like_regex().unwrap().is_none());
    }
}

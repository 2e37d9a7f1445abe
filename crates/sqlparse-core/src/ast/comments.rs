//! Statement comments and query hints.

use crate::error::{Code, Result, SqlError};

const HINT_PREFIX: &str = "/*+";

/// The block comments attached to a statement, verbatim and in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Comments(pub Vec<String>);

impl Comments {
    /// Creates a comment list.
    #[must_use]
    pub const fn new(comments: Vec<String>) -> Self {
        Self(comments)
    }

    /// Returns true if there are no comments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the comments.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the query hint comment (`/*+ ... */`), if any.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.iter().find(|c| c.starts_with(HINT_PREFIX))
    }

    /// Merges `hint` into the query hint comment.
    ///
    /// An empty hint leaves the comments as they are, returning `None` when
    /// there are none. Otherwise the hint is appended to the existing hint
    /// comment unless that comment already contains it, or a new
    /// `/*+ hint */` comment is created. Either way the hint comment is moved
    /// to the front and the other comments keep their order.
    ///
    /// # Errors
    ///
    /// Fails with [`Code::Internal`] if there is more than one hint comment
    /// or the hint comment is not terminated.
    pub fn add_query_hint(&self, hint: &str) -> Result<Option<Self>> {
        if hint.is_empty() {
            if self.is_empty() {
                return Ok(None);
            }
            return Ok(Some(self.clone()));
        }

        let mut merged = None;
        let mut others = Vec::with_capacity(self.0.len() + 1);
        for comment in &self.0 {
            if !comment.starts_with(HINT_PREFIX) {
                others.push(comment.clone());
                continue;
            }
            if merged.is_some() {
                return Err(SqlError::new(Code::Internal, "Must have only one query hint"));
            }
            let Some(end) = comment.find("*/") else {
                return Err(SqlError::new(Code::Internal, "Query hint comment is malformed"));
            };
            merged = Some(if comment.contains(hint) {
                comment.clone()
            } else {
                format!("{} {hint} */", comment[..end].trim())
            });
        }

        let hint_comment = merged.unwrap_or_else(|| format!("{HINT_PREFIX} {hint} */"));
        let mut comments = Vec::with_capacity(others.len() + 1);
        comments.push(hint_comment);
        comments.extend(others);
        Ok(Some(Self(comments)))
    }
}

impl From<Vec<String>> for Comments {
    fn from(comments: Vec<String>) -> Self {
        Self(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comments(list: &[&str]) -> Comments {
        Comments(list.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_empty_hint() {
        assert_eq!(Comments::default().add_query_hint("").unwrap(), None);
        let existing = comments(&["/* a */"]);
        assert_eq!(existing.add_query_hint("").unwrap(), Some(existing.clone()));
    }

    #[test]
    fn test_hint_synthesized() {
        assert_eq!(
            Comments::default().add_query_hint("USE_INDEX(i)").unwrap(),
            Some(comments(&["/*+ USE_INDEX(i) */"]))
        );
        assert_eq!(
            comments(&["/* a */"]).add_query_hint("H").unwrap(),
            Some(comments(&["/*+ H */", "/* a */"]))
        );
    }

    #[test]
    fn test_hint_merged_and_moved_first() {
        let merged = comments(&["/* a */", "/*+ A */", "/* b */"])
            .add_query_hint("B")
            .unwrap();
        assert_eq!(merged, Some(comments(&["/*+ A B */", "/* a */", "/* b */"])));
    }

    #[test]
    fn test_hint_already_present() {
        let merged = comments(&["/*+ A B */"]).add_query_hint("B").unwrap();
        assert_eq!(merged, Some(comments(&["/*+ A B */"])));
    }

    #[test]
    fn test_hint_errors() {
        let err = comments(&["/*+ A */", "/*+ B */"])
            .add_query_hint("C")
            .unwrap_err();
        assert_eq!(err.code(), Code::Internal);
        assert_eq!(err.message(), "Must have only one query hint");

        let err = comments(&["/*+ A"]).add_query_hint("C").unwrap_err();
        assert_eq!(err.message(), "Query hint comment is malformed");
    }

    #[test]
    fn test_hint_lookup() {
        let list = comments(&["/* a */", "/*+ H */"]);
        assert_eq!(list.hint(), Some("/*+ H */"));
        assert_eq!(comments(&["/* a */"]).hint(), None);
    }
}

use std::{error::Error, fmt};

use crate::cursor::{Cursor, Input};

/// Every parser returns either the remaining input plus a value, or a [`ParseError`].
pub type ParseResult<I, V> = Result<(Cursor<I>, V), ParseError<I>>;

/// Where a parse failed, and optionally why.
///
/// `at` is never ahead of the cursor handed to the parser that produced the error.
#[derive(Clone, PartialEq)]
pub struct ParseError<I> {
    at: Cursor<I>,
    reason: Option<String>,
}

impl<I: Input> ParseError<I> {
    pub fn new(at: Cursor<I>, reason: impl Into<String>) -> Self {
        Self {
            at,
            reason: Some(reason.into()),
        }
    }

    /// an error without a reason
    pub fn bare(at: Cursor<I>) -> Self {
        Self { at, reason: None }
    }

    #[inline]
    pub fn at(&self) -> &Cursor<I> {
        &self.at
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.at.offset()
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// same reason, reported at another position
    pub fn relocate(self, at: Cursor<I>) -> Self {
        Self { at, ..self }
    }

    pub fn with_reason(self, reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            ..self
        }
    }

    /// Whichever error got further into the input. Ties keep `self`.
    ///
    /// Combinators never do this themselves; callers that want "furthest failure wins"
    /// reporting fold their errors through here.
    pub fn furthest(self, other: Self) -> Self {
        if other.offset() > self.offset() {
            other
        } else {
            self
        }
    }

    pub fn into_parts(self) -> (Cursor<I>, Option<String>) {
        (self.at, self.reason)
    }
}

#[inline]
pub fn failure<I: Input>(at: Cursor<I>, reason: impl Into<String>) -> ParseError<I> {
    ParseError::new(at, reason)
}

impl<I: Input> fmt::Display for ParseError<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "{reason} at {at}", at = self.at)?,
            None => write!(f, "parse failed at {at}", at = self.at)?,
        };
        Ok(())
    }
}

impl<I: Input> fmt::Debug for ParseError<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ParseError")
            .field("at", &self.at)
            .field("reason", &self.reason)
            .finish()
    }
}

impl<I: Input> Error for ParseError<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_error_accessors() {
        let c = Cursor::from("abc").drop_first(1);
        let e = ParseError::new(c, "expected 'x'");
        assert_eq!(e.reason(), Some("expected 'x'"));
        assert_eq!(e.offset(), 1);
        assert_eq!(e.at().rest(), "bc");

        let e = e.relocate(Cursor::from("abc"));
        assert_eq!(e.offset(), 0);
        assert_eq!(e.reason(), Some("expected 'x'"));

        let (at, reason) = ParseError::bare(c).into_parts();
        assert_eq!(at, c);
        assert_eq!(reason, None);
    }

    #[test]
    fn test_error_display() {
        let c = Cursor::from("abc").drop_first(2);
        assert_eq!(
            failure(c, "expected 'x'").to_string(),
            "expected 'x' at offset 2 |\"c\"|"
        );
        assert_eq!(
            ParseError::bare(c).to_string(),
            "parse failed at offset 2 |\"c\"|"
        );
    }

    #[test]
    fn test_furthest() {
        let c = Cursor::from("abcdef");
        let near = failure(c.drop_first(1), "near");
        let far = failure(c.drop_first(4), "far");
        assert_eq!(near.clone().furthest(far.clone()).reason(), Some("far"));
        assert_eq!(far.clone().furthest(near).reason(), Some("far"));

        let tie = failure(c.drop_first(4), "tie");
        assert_eq!(far.furthest(tie).reason(), Some("far"));
    }

    #[test]
    fn test_error_as_std_error() {
        fn boxed() -> Result<(), Box<dyn Error>> {
            let e = failure(Cursor::from("z"), "expected end of input");
            Err(Box::new(e))
        }
        assert!(boxed().unwrap_err().to_string().starts_with("expected end of input"));
    }
}

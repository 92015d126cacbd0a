use crate::cursor::Input;
use crate::parser::Parser;
use crate::primitive::{match_element, match_prefix, MatchElement, MatchPrefix};

/// Values that can stand for a parser matching themselves.
///
/// ```
/// use braid::prelude::*;
///
/// let kv = "key".lit().then('='.lit()).then("value".lit());
/// assert!(parse_all(&kv, "key=value").is_ok());
/// ```
pub trait Literal<I: Input> {
    type Parser: Parser<I>;

    fn lit(self) -> Self::Parser;
}

impl<'a> Literal<&'a str> for &'a str {
    type Parser = MatchPrefix<&'a str>;

    fn lit(self) -> Self::Parser {
        match_prefix(self)
    }
}

impl<'a> Literal<&'a str> for char {
    type Parser = MatchElement<&'a str>;

    fn lit(self) -> Self::Parser {
        match_element(self)
    }
}

impl<'a, T> Literal<&'a [T]> for &'a [T]
where
    T: Clone + PartialEq + std::fmt::Debug,
{
    type Parser = MatchPrefix<&'a [T]>;

    fn lit(self) -> Self::Parser {
        match_prefix(self)
    }
}

impl<'a> Literal<&'a [u8]> for u8 {
    type Parser = MatchElement<&'a [u8]>;

    fn lit(self) -> Self::Parser {
        match_element(self)
    }
}

//! Single step matchers.
//!
//! Each consumes either a fixed prefix or exactly one element, and never looks past what
//! it consumes. Running out of input is always a failure; only [`crate::assertion::eof`]
//! succeeds on empty input.

use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::RangeInclusive;

use crate::cursor::{Cursor, Input};
use crate::error::{self, ParseResult};
use crate::logging::Loggable;
use crate::parser::Parser;

#[inline]
fn step<I, A, F, M>(
    cur: Cursor<I>,
    action: &'static str,
    args: &A,
    accept: F,
    on_empty: impl FnOnce() -> String,
    on_mismatch: M,
) -> ParseResult<I, I::Element>
where
    I: Input,
    A: Debug + ?Sized,
    F: FnOnce(&I::Element) -> bool,
    M: FnOnce(&I::Element) -> String,
{
    cur.log_inputs(action, args);
    let Some(found) = cur.first() else {
        let e = error::failure(cur.clone(), on_empty());
        cur.log_failure(action, args, &e);
        return Err(e);
    };
    if accept(&found) {
        let rest = cur.drop_first(1);
        rest.log_success_with_result(action, args, &found);
        Ok((rest, found))
    } else {
        let e = error::failure(cur.clone(), on_mismatch(&found));
        cur.log_failure(action, args, &e);
        Err(e)
    }
}

/// Matches `pattern` as a prefix, yielding the matched part of the input.
#[derive(Debug, Clone)]
pub struct MatchPrefix<I> {
    pattern: I,
    len: usize,
}

pub fn match_prefix<I: Input>(pattern: I) -> MatchPrefix<I> {
    let len = pattern.count();
    MatchPrefix { pattern, len }
}

impl<I: Input> Parser<I> for MatchPrefix<I> {
    type Output = I;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, I> {
        let action = "match_prefix";
        cur.log_inputs(action, &self.pattern);
        if cur.starts_with(&self.pattern) {
            let matched = cur.take_first(self.len);
            let rest = cur.drop_first(self.len);
            rest.log_success(action, &self.pattern);
            Ok((rest, matched))
        } else {
            let e = error::failure(cur.clone(), format!("expected {:?}", self.pattern));
            cur.log_failure(action, &self.pattern, &e);
            Err(e)
        }
    }
}

/// Matches one element equal to `element`.
///
/// Behaves like `match_prefix` of a one element pattern, but yields the element rather
/// than a slice of the input. Reasons render the element itself, so on `&str` a mismatch
/// reads `expected 'x'` where the prefix form would say `expected "x"`.
#[derive(Debug, Clone)]
pub struct MatchElement<I: Input> {
    element: I::Element,
}

pub fn match_element<I: Input>(element: I::Element) -> MatchElement<I> {
    MatchElement { element }
}

impl<I: Input> Parser<I> for MatchElement<I> {
    type Output = I::Element;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, I::Element> {
        let expected = &self.element;
        step(
            cur,
            "match_element",
            expected,
            |e| e == expected,
            || format!("expected {expected:?} but found nothing"),
            |_| format!("expected {expected:?}"),
        )
    }
}

/// Matches one element within an inclusive range.
#[derive(Debug, Clone)]
pub struct MatchRange<I: Input> {
    range: RangeInclusive<I::Element>,
}

pub fn match_range<I>(range: RangeInclusive<I::Element>) -> MatchRange<I>
where
    I: Input,
    I::Element: PartialOrd,
{
    MatchRange { range }
}

impl<I> Parser<I> for MatchRange<I>
where
    I: Input,
    I::Element: PartialOrd,
{
    type Output = I::Element;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, I::Element> {
        let range = &self.range;
        step(
            cur,
            "match_range",
            range,
            |e| range.contains(e),
            || format!("expected {range:?} but found nothing"),
            |found| format!("expected {range:?}, found {found:?}"),
        )
    }
}

/// Matches one element that is a member of the set.
#[derive(Debug, Clone)]
pub struct MatchOneOf<I: Input> {
    set: Vec<I::Element>,
}

pub fn match_one_of<I: Input>(set: impl IntoIterator<Item = I::Element>) -> MatchOneOf<I> {
    MatchOneOf {
        set: set.into_iter().collect(),
    }
}

impl<I: Input> Parser<I> for MatchOneOf<I> {
    type Output = I::Element;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, I::Element> {
        let set = &self.set;
        step(
            cur,
            "match_one_of",
            set,
            |e| set.contains(e),
            || format!("expected one of {set:?} but found nothing"),
            |found| format!("expected one of {set:?}, found {found:?}"),
        )
    }
}

/// Matches one element satisfying a predicate.
///
/// The predicate can't be rendered into a message, so failures just say "match failed".
/// Wrap in [`Parser::named`] for something better.
pub struct MatchIf<I, F> {
    predicate: F,
    input: PhantomData<fn() -> I>,
}

pub fn match_if<I, F>(predicate: F) -> MatchIf<I, F>
where
    I: Input,
    F: Fn(&I::Element) -> bool,
{
    MatchIf {
        predicate,
        input: PhantomData,
    }
}

impl<I, F: Clone> Clone for MatchIf<I, F> {
    fn clone(&self) -> Self {
        MatchIf {
            predicate: self.predicate.clone(),
            input: PhantomData,
        }
    }
}

impl<I, F> Debug for MatchIf<I, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "MatchIf<{}>", std::any::type_name::<I>())
    }
}

impl<I, F> Parser<I> for MatchIf<I, F>
where
    I: Input,
    F: Fn(&I::Element) -> bool,
{
    type Output = I::Element;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, I::Element> {
        step(
            cur,
            "match_if",
            "",
            |e| (self.predicate)(e),
            || "unexpected end of input".to_string(),
            |_| "match failed".to_string(),
        )
    }
}

/// Matches one element that is not equal to `element`.
#[derive(Debug, Clone)]
pub struct RejectElement<I: Input> {
    element: I::Element,
}

pub fn reject_element<I: Input>(element: I::Element) -> RejectElement<I> {
    RejectElement { element }
}

impl<I: Input> Parser<I> for RejectElement<I> {
    type Output = I::Element;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, I::Element> {
        let rejected = &self.element;
        step(
            cur,
            "reject_element",
            rejected,
            |e| e != rejected,
            || format!("expected anything but {rejected:?} but found nothing"),
            |found| format!("unexpected {found:?}"),
        )
    }
}

/// Matches one element that equals none of the elements given.
#[derive(Debug, Clone)]
pub struct RejectAnyOf<I: Input> {
    set: Vec<I::Element>,
}

pub fn reject_any_of<I: Input>(set: impl IntoIterator<Item = I::Element>) -> RejectAnyOf<I> {
    RejectAnyOf {
        set: set.into_iter().collect(),
    }
}

impl<I: Input> Parser<I> for RejectAnyOf<I> {
    type Output = I::Element;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, I::Element> {
        let set = &self.set;
        step(
            cur,
            "reject_any_of",
            set,
            |e| !set.contains(e),
            || format!("expected none of {set:?} but found nothing"),
            |found| format!("unexpected {found:?}, expected none of {set:?}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[derive(Debug, Clone, PartialEq)]
    enum Tok {
        Num(i32),
        Plus,
        Minus,
    }

    #[test]
    fn test_match_prefix() {
        let (c, v) = match_prefix("ab").parse(Cursor::from("abc")).unwrap();
        assert_eq!(v, "ab");
        assert_eq!(c.rest(), "c");
        assert_eq!(c.offset(), 2);

        let e = match_prefix("ab").parse(Cursor::from("axc")).unwrap_err();
        assert_eq!(e.reason(), Some("expected \"ab\""));
        assert_eq!(e.offset(), 0);

        assert!(match_prefix("ab").parse(Cursor::from("a")).is_err());
        assert!(match_prefix("ab").parse(Cursor::from("")).is_err());

        // multi byte characters count as one element each
        let (c, v) = match_prefix("日本").parse(Cursor::from("日本語")).unwrap();
        assert_eq!(v, "日本");
        assert_eq!(c.offset(), 2);
    }

    #[test]
    fn test_match_prefix_tokens() {
        let toks = [Tok::Num(1), Tok::Plus, Tok::Num(2)];
        let pat = [Tok::Num(1), Tok::Plus];
        let (c, v) = match_prefix(&pat[..]).parse(Cursor::from(&toks[..])).unwrap();
        assert_eq!(v, &pat[..]);
        assert_eq!(c.rest(), &[Tok::Num(2)][..]);
    }

    #[test]
    fn test_match_element() {
        let (c, v) = match_element('x').parse(Cursor::from("xyz")).unwrap();
        assert_eq!(v, 'x');
        assert_eq!(c.rest(), "yz");

        let e = match_element('x').parse(Cursor::from("")).unwrap_err();
        assert_eq!(e.reason(), Some("expected 'x' but found nothing"));

        let e = match_element('x').parse(Cursor::from("abc")).unwrap_err();
        assert_eq!(e.reason(), Some("expected 'x'"));
        assert_eq!(e.offset(), 0);

        // same position and consumption as the one element prefix, element rendered as such
        let as_prefix = match_prefix("x").parse(Cursor::from("abc")).unwrap_err();
        assert_eq!(as_prefix.at(), e.at());
        assert_eq!(as_prefix.reason(), Some("expected \"x\""));
        let (c1, _) = match_element('x').parse(Cursor::from("xy")).unwrap();
        let (c2, _) = match_prefix("x").parse(Cursor::from("xy")).unwrap();
        assert_eq!(c1, c2);

        let toks = [Tok::Minus];
        assert!(match_element(Tok::Minus).parse(Cursor::from(&toks[..])).is_ok());
        assert!(match_element(Tok::Plus).parse(Cursor::from(&toks[..])).is_err());
    }

    #[test]
    fn test_match_range() {
        let digit = match_range('0'..='9');
        assert_eq!(digit.parse(Cursor::from("0")).unwrap().1, '0');
        assert_eq!(digit.parse(Cursor::from("9x")).unwrap().1, '9');

        let out_of_range = digit.parse(Cursor::from("a")).unwrap_err();
        let empty = digit.parse(Cursor::from("")).unwrap_err();
        assert_ne!(out_of_range.reason(), empty.reason());
        assert_eq!(out_of_range.reason(), Some("expected '0'..='9', found 'a'"));
        assert_eq!(empty.reason(), Some("expected '0'..='9' but found nothing"));

        let bytes = b"\x05\x10";
        let low = match_range(0_u8..=7);
        let (c, v) = low.parse(Cursor::from(&bytes[..])).unwrap();
        assert_eq!(v, 5);
        assert!(low.parse(c).is_err());
    }

    #[test]
    fn test_match_one_of() {
        let sign = match_one_of(['+', '-']);
        assert_eq!(sign.parse(Cursor::from("-1")).unwrap().1, '-');
        assert_eq!(sign.parse(Cursor::from("+1")).unwrap().1, '+');
        assert!(sign.parse(Cursor::from("1")).is_err());
        assert!(sign.parse(Cursor::from("")).is_err());

        let ops = match_one_of(vec![Tok::Plus, Tok::Minus]);
        let toks = [Tok::Plus, Tok::Num(3)];
        let (c, v) = ops.parse(Cursor::from(&toks[..])).unwrap();
        assert_eq!(v, Tok::Plus);
        assert!(ops.parse(c).is_err());
    }

    #[test]
    fn test_match_if() {
        let alnum = match_if(|c: &char| c.is_alphanumeric());
        assert_eq!(alnum.parse(Cursor::from("b")).unwrap().1, 'b');

        let e = alnum.parse(Cursor::from("!")).unwrap_err();
        assert_eq!(e.reason(), Some("match failed"));
        let e = alnum.parse(Cursor::from("")).unwrap_err();
        assert_eq!(e.reason(), Some("unexpected end of input"));

        let num = match_if(|t: &Tok| matches!(t, Tok::Num(_)));
        let toks = [Tok::Num(7)];
        assert_eq!(num.parse(Cursor::from(&toks[..])).unwrap().1, Tok::Num(7));
        assert!(format!("{:?}", num.clone()).starts_with("MatchIf"));
    }

    #[test]
    fn test_reject_element() {
        let not_quote = reject_element('"');
        let (c, v) = not_quote.parse(Cursor::from("a\"")).unwrap();
        assert_eq!(v, 'a');
        let e = not_quote.parse(c).unwrap_err();
        assert_eq!(e.reason(), Some("unexpected '\"'"));
        assert_eq!(e.offset(), 1);
        assert!(not_quote.parse(Cursor::from("")).is_err());
    }

    #[test]
    fn test_reject_any_of() {
        let plain = reject_any_of("[]".chars());
        assert_eq!(plain.parse(Cursor::from("x]")).unwrap().1, 'x');

        // fails without consuming on any member
        let e = plain.parse(Cursor::from("]x")).unwrap_err();
        assert_eq!(e.offset(), 0);
        let e = plain.parse(Cursor::from("[x")).unwrap_err();
        assert_eq!(e.offset(), 0);

        assert!(plain.parse(Cursor::from("")).is_err());
    }
}

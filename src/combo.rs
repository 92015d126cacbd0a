//! Sequencing, repetition, optionality and alternation.

use log::log_enabled;
use log::Level::Trace;

use crate::cursor::{Cursor, Input};
use crate::either::Either;
use crate::error::{ParseError, ParseResult};
use crate::logging::Loggable;
use crate::parser::Parser;
use crate::{LABEL, LOG_TARGET};

/// `left` then `right` on what `left` left over.
///
/// A failure of either side is reported at the cursor the composition started from, with
/// the inner reason kept. That anchors errors at the start of the enclosing rule rather
/// than at the exact element that mismatched.
#[derive(Debug, Clone)]
pub struct Compose<P, Q> {
    left: P,
    right: Q,
}

impl<P, Q> Compose<P, Q> {
    pub fn new(left: P, right: Q) -> Self {
        Self { left, right }
    }
}

pub fn compose<P, Q>(left: P, right: Q) -> Compose<P, Q> {
    Compose::new(left, right)
}

impl<I, P, Q> Parser<I> for Compose<P, Q>
where
    I: Input,
    P: Parser<I>,
    Q: Parser<I>,
{
    type Output = (P::Output, Q::Output);

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, Self::Output> {
        let (rest, a) = self.left.parse(cur.clone()).map_err(|e| {
            cur.log_failure("compose", "left", &e);
            e.relocate(cur.clone())
        })?;
        let (rest, b) = self.right.parse(rest).map_err(|e| {
            cur.log_failure("compose", "right", &e);
            e.relocate(cur.clone())
        })?;
        Ok((rest, (a, b)))
    }
}

// Iterative so that stack use doesn't grow with the input. A success that consumed
// nothing would repeat identically forever, so it is kept once and ends the loop.
fn repeat<I, P>(parser: &P, mut cur: Cursor<I>, values: &mut Vec<P::Output>) -> Cursor<I>
where
    I: Input,
    P: Parser<I>,
{
    loop {
        match parser.parse(cur.clone()) {
            Ok((next, value)) => {
                values.push(value);
                if next.offset() == cur.offset() {
                    next.log_success("repeat (zero width)", values.len());
                    return next;
                }
                cur = next;
            }
            Err(_) => {
                cur.log_success("repeat", values.len());
                return cur;
            }
        }
    }
}

/// Zero or more. Never fails; the failure that stops it is dropped.
#[derive(Debug, Clone)]
pub struct Rep<P> {
    parser: P,
}

impl<P> Rep<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

pub fn rep<P>(parser: P) -> Rep<P> {
    Rep::new(parser)
}

impl<I, P> Parser<I> for Rep<P>
where
    I: Input,
    P: Parser<I>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, Self::Output> {
        cur.log_inputs("rep", "");
        let mut values = Vec::new();
        let rest = repeat(&self.parser, cur, &mut values);
        Ok((rest, values))
    }
}

/// One or more. Fails, unchanged, only if the first application fails.
#[derive(Debug, Clone)]
pub struct Rep1<P> {
    parser: P,
}

impl<P> Rep1<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

pub fn rep1<P>(parser: P) -> Rep1<P> {
    Rep1::new(parser)
}

impl<I, P> Parser<I> for Rep1<P>
where
    I: Input,
    P: Parser<I>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, Self::Output> {
        cur.log_inputs("rep1", "");
        let (next, first) = self.parser.parse(cur.clone())?;
        let mut values = vec![first];
        if next.offset() == cur.offset() {
            return Ok((next, values));
        }
        let rest = repeat(&self.parser, next, &mut values);
        Ok((rest, values))
    }
}

/// Optional. Never fails; on failure yields `None` and consumes nothing.
#[derive(Debug, Clone)]
pub struct Opt<P> {
    parser: P,
}

impl<P> Opt<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

pub fn opt<P>(parser: P) -> Opt<P> {
    Opt::new(parser)
}

impl<I, P> Parser<I> for Opt<P>
where
    I: Input,
    P: Parser<I>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, Self::Output> {
        match self.parser.parse(cur.clone()) {
            Ok((rest, value)) => Ok((rest, Some(value))),
            Err(e) => {
                cur.log_success("opt (absent)", e.reason());
                Ok((cur, None))
            }
        }
    }
}

/// Alternation between differently typed parsers, tagging which one matched.
///
/// Unlike [`Or`], when both fail the reasons are not kept: the error is bare, at the
/// starting cursor.
#[derive(Debug, Clone)]
pub struct Choice<P, Q> {
    left: P,
    right: Q,
}

impl<P, Q> Choice<P, Q> {
    pub fn new(left: P, right: Q) -> Self {
        Self { left, right }
    }
}

pub fn either<P, Q>(left: P, right: Q) -> Choice<P, Q> {
    Choice::new(left, right)
}

impl<I, P, Q> Parser<I> for Choice<P, Q>
where
    I: Input,
    P: Parser<I>,
    Q: Parser<I>,
{
    type Output = Either<P::Output, Q::Output>;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, Self::Output> {
        if let Ok((rest, l)) = self.left.parse(cur.clone()) {
            return Ok((rest, Either::Left(l)));
        }
        if let Ok((rest, r)) = self.right.parse(cur.clone()) {
            return Ok((rest, Either::Right(r)));
        }
        let e = ParseError::bare(cur.clone());
        cur.log_failure("either", "", &e);
        Err(e)
    }
}

/// Left biased alternation between parsers of the same output type.
///
/// Both branches start from the same cursor. When both fail the error sits at that cursor
/// and its reason joins the branches' non-empty reasons with `" or "`.
#[derive(Debug, Clone)]
pub struct Or<P, Q> {
    left: P,
    right: Q,
}

impl<P, Q> Or<P, Q> {
    pub fn new(left: P, right: Q) -> Self {
        Self { left, right }
    }
}

pub fn or<P, Q>(left: P, right: Q) -> Or<P, Q> {
    Or::new(left, right)
}

impl<I, P, Q> Parser<I> for Or<P, Q>
where
    I: Input,
    P: Parser<I>,
    Q: Parser<I, Output = P::Output>,
{
    type Output = P::Output;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, Self::Output> {
        let e1 = match self.left.parse(cur.clone()) {
            Ok(success) => return Ok(success),
            Err(e) => e,
        };
        let e2 = match self.right.parse(cur.clone()) {
            Ok(success) => return Ok(success),
            Err(e) => e,
        };
        let reasons: Vec<&str> = [e1.reason(), e2.reason()]
            .into_iter()
            .flatten()
            .filter(|r| !r.is_empty())
            .collect();
        let e = if reasons.is_empty() {
            ParseError::bare(cur.clone())
        } else {
            ParseError::new(cur.clone(), reasons.join(" or "))
        };
        cur.log_failure("or", "", &e);
        Err(e)
    }
}

/// Transforms the value of a successful parse.
#[derive(Debug, Clone)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, f: F) -> Self {
        Self { parser, f }
    }
}

pub fn map<P, F>(parser: P, f: F) -> Map<P, F> {
    Map::new(parser, f)
}

impl<I, P, F, U> Parser<I> for Map<P, F>
where
    I: Input,
    P: Parser<I>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    #[inline]
    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, U> {
        self.parser
            .parse(cur)
            .map(|(rest, value)| (rest, (self.f)(value)))
    }
}

/// Gives a parser a name.
///
/// While it runs the name labels the trace output, and a failure is reported as
/// `expected <name>` (at the same position).
#[derive(Debug, Clone)]
pub struct Named<P> {
    parser: P,
    label: &'static str,
}

impl<P> Named<P> {
    pub fn new(parser: P, label: &'static str) -> Self {
        Self { parser, label }
    }
}

pub fn named<P>(parser: P, label: &'static str) -> Named<P> {
    Named::new(parser, label)
}

impl<I, P> Parser<I> for Named<P>
where
    I: Input,
    P: Parser<I>,
{
    type Output = P::Output;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, Self::Output> {
        let res = if log_enabled!(target: LOG_TARGET, Trace) {
            let outer = LABEL.with(|f| f.replace(self.label));
            cur.log_inputs("named", self.label);
            let res = self.parser.parse(cur);
            LABEL.with(|f| f.set(outer));
            res
        } else {
            self.parser.parse(cur)
        };
        res.map_err(|e| e.with_reason(format!("expected {}", self.label)))
    }
}

//! Conjunction, lookahead, negation and the two sentinels.
//!
//! Apart from `and` (which consumes what its left side consumes) none of these move the
//! cursor.

use std::fmt::{self, Debug};
use std::marker::PhantomData;

use crate::cursor::{Cursor, Input};
use crate::error::{self, ParseResult};
use crate::logging::Loggable;
use crate::parser::Parser;

/// Both parsers must match the same input; the left one supplies value and remainder.
///
/// This is intersection, not sequencing: `right` runs on the original cursor and whatever
/// it consumes is ignored. Both sides always run. If both fail, the left failure is
/// reported.
#[derive(Debug, Clone)]
pub struct And<P, Q> {
    left: P,
    right: Q,
}

impl<P, Q> And<P, Q> {
    pub fn new(left: P, right: Q) -> Self {
        Self { left, right }
    }
}

pub fn and<P, Q>(left: P, right: Q) -> And<P, Q> {
    And::new(left, right)
}

impl<I, P, Q> Parser<I> for And<P, Q>
where
    I: Input,
    P: Parser<I>,
    Q: Parser<I>,
{
    type Output = P::Output;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, Self::Output> {
        let left = self.left.parse(cur.clone());
        let right = self.right.parse(cur.clone());
        match (left, right) {
            (Ok(success), Ok(_)) => Ok(success),
            (Err(e), _) | (Ok(_), Err(e)) => {
                cur.log_failure("and", "", &e);
                Err(e)
            }
        }
    }
}

/// Runs a parser but hands back the original cursor, so nothing is consumed.
#[derive(Debug, Clone)]
pub struct LookAhead<P> {
    parser: P,
}

impl<P> LookAhead<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

pub fn look_ahead<P>(parser: P) -> LookAhead<P> {
    LookAhead::new(parser)
}

impl<I, P> Parser<I> for LookAhead<P>
where
    I: Input,
    P: Parser<I>,
{
    type Output = P::Output;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, Self::Output> {
        let (_, value) = self.parser.parse(cur.clone())?;
        Ok((cur, value))
    }
}

/// Succeeds, consuming nothing, exactly when the inner parser fails.
#[derive(Debug, Clone)]
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

pub fn not<P>(parser: P) -> Not<P> {
    Not::new(parser)
}

impl<I, P> Parser<I> for Not<P>
where
    I: Input,
    P: Parser<I>,
    P::Output: Debug,
{
    type Output = ();

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, ()> {
        match self.parser.parse(cur.clone()) {
            Ok((_, value)) => {
                let e = error::failure(cur.clone(), format!("unexpected {value:?}"));
                cur.log_failure("not", "", &e);
                Err(e)
            }
            Err(_) => Ok((cur, ())),
        }
    }
}

/// Matches only at the end of input.
pub struct Eof<I> {
    input: PhantomData<fn() -> I>,
}

pub fn eof<I: Input>() -> Eof<I> {
    Eof { input: PhantomData }
}

impl<I> Clone for Eof<I> {
    fn clone(&self) -> Self {
        Eof { input: PhantomData }
    }
}

impl<I> Debug for Eof<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Eof")
    }
}

impl<I: Input> Parser<I> for Eof<I> {
    type Output = ();

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, ()> {
        if cur.is_empty() {
            cur.log_success("eof", "");
            Ok((cur, ()))
        } else {
            let e = error::failure(cur.clone(), "expected end of input");
            cur.log_failure("eof", "", &e);
            Err(e)
        }
    }
}

/// Always fails. Stands in for a rule that hasn't been written (or bound) yet.
pub struct Placeholder<I, T> {
    marker: PhantomData<fn() -> (I, T)>,
}

pub fn placeholder<I: Input, T>() -> Placeholder<I, T> {
    Placeholder {
        marker: PhantomData,
    }
}

impl<I, T> Clone for Placeholder<I, T> {
    fn clone(&self) -> Self {
        Placeholder {
            marker: PhantomData,
        }
    }
}

impl<I, T> Debug for Placeholder<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Placeholder -> {}", std::any::type_name::<T>())
    }
}

pub(crate) const NOT_YET_IMPLEMENTED: &str = "not yet implemented";

impl<I: Input, T> Parser<I> for Placeholder<I, T> {
    type Output = T;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, T> {
        let e = error::failure(cur.clone(), NOT_YET_IMPLEMENTED);
        cur.log_failure("placeholder", "", &e);
        Err(e)
    }
}

use std::fmt;

use log::trace;

use crate::assertion::{And, LookAhead, Not};
use crate::combo::{Choice, Compose, Map, Named, Opt, Or, Rep, Rep1};
use crate::cursor::{Cursor, Input};
use crate::error::{ParseError, ParseResult};
use crate::{assertion, LOG_TARGET};

/// A pure function from a cursor to a [`ParseResult`].
///
/// The same cursor always gives the same result, and a parser keeps no state between
/// calls, so one parser value can be shared freely (across threads too, if its parts are
/// `Sync`). Closures `Fn(Cursor<I>) -> ParseResult<I, T>` are parsers.
///
/// The provided methods build combinators by chaining; each has a free function
/// equivalent in [`crate::combo`] or [`crate::assertion`].
pub trait Parser<I: Input> {
    type Output;

    fn parse(&self, cursor: Cursor<I>) -> ParseResult<I, Self::Output>;

    /// sequence: `self` then `next`, yielding both values
    fn then<Q>(self, next: Q) -> Compose<Self, Q>
    where
        Self: Sized,
        Q: Parser<I>,
    {
        Compose::new(self, next)
    }

    fn rep(self) -> Rep<Self>
    where
        Self: Sized,
    {
        Rep::new(self)
    }

    fn rep1(self) -> Rep1<Self>
    where
        Self: Sized,
    {
        Rep1::new(self)
    }

    fn opt(self) -> Opt<Self>
    where
        Self: Sized,
    {
        Opt::new(self)
    }

    fn or<Q>(self, other: Q) -> Or<Self, Q>
    where
        Self: Sized,
        Q: Parser<I, Output = Self::Output>,
    {
        Or::new(self, other)
    }

    fn either<Q>(self, other: Q) -> Choice<Self, Q>
    where
        Self: Sized,
        Q: Parser<I>,
    {
        Choice::new(self, other)
    }

    /// both must match the same input, `self` supplies the result
    fn and<Q>(self, other: Q) -> And<Self, Q>
    where
        Self: Sized,
        Q: Parser<I>,
    {
        And::new(self, other)
    }

    fn look_ahead(self) -> LookAhead<Self>
    where
        Self: Sized,
    {
        LookAhead::new(self)
    }

    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }

    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, f)
    }

    fn named(self, label: &'static str) -> Named<Self>
    where
        Self: Sized,
    {
        Named::new(self, label)
    }

    fn boxed<'p>(self) -> BoxedParser<'p, I, Self::Output>
    where
        Self: Sized + Send + Sync + 'p,
    {
        BoxedParser::new(self)
    }
}

impl<I, T, F> Parser<I> for F
where
    I: Input,
    F: Fn(Cursor<I>) -> ParseResult<I, T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<I>) -> ParseResult<I, T> {
        trace!(target: LOG_TARGET, "#### Fn(Cursor) @{}", cursor.offset());
        (self)(cursor)
    }
}

/// A type erased parser.
pub struct BoxedParser<'p, I, T> {
    inner: Box<dyn Parser<I, Output = T> + Send + Sync + 'p>,
}

impl<'p, I: Input, T> BoxedParser<'p, I, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<I, Output = T> + Send + Sync + 'p,
    {
        Self {
            inner: Box::new(parser),
        }
    }
}

impl<'p, I: Input, T> Parser<I> for BoxedParser<'p, I, T> {
    type Output = T;

    #[inline]
    fn parse(&self, cursor: Cursor<I>) -> ParseResult<I, T> {
        self.inner.parse(cursor)
    }
}

impl<'p, I, T> fmt::Debug for BoxedParser<'p, I, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BoxedParser -> {}", std::any::type_name::<T>())
    }
}

/// Run `parser` over the whole of `input`: it must match and leave nothing behind.
pub fn parse_all<I, P>(parser: &P, input: I) -> Result<P::Output, ParseError<I>>
where
    I: Input,
    P: Parser<I>,
{
    let (rest, value) = parser.parse(Cursor::new(input))?;
    assertion::eof().parse(rest)?;
    Ok(value)
}

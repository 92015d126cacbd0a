//! Recursive grammars.
//!
//! A grammar that refers to itself needs some indirection, since a parser value cannot
//! contain itself. Two ways are offered:
//!
//! - [`lazy`] takes a factory (usually a plain `fn`) and builds the parser afresh each time
//!   it runs. The factory can mention `lazy(itself)` without any cycle in the types, as long
//!   as it returns something nameable such as a [`BoxedParser`].
//! - [`Rule`] is a shared cell, declared first and defined later. Clones of a rule see the
//!   same definition. Inside its own definition (or that of a rule it owns) refer to it
//!   through [`Rule::handle`], which does not keep it alive.
//!
//! ```
//! use braid::prelude::*;
//!
//! // nested := '(' nested? ')'   yielding the nesting depth
//! let nested: Rule<&str, usize> = Rule::new();
//! nested
//!     .define(
//!         match_element('(')
//!             .then(nested.handle().opt())
//!             .then(match_element(')'))
//!             .map(|((_, inner), _)| inner.unwrap_or(0) + 1),
//!     )
//!     .unwrap();
//! assert_eq!(parse_all(&nested, "((()))").unwrap(), 3);
//! ```
//!
//! A rule that holds a clone (rather than a handle) of itself is a reference cycle and is
//! never freed.

use std::error::Error;
use std::fmt;
use std::sync::{Arc, Weak};

use log::debug;
use once_cell::sync::OnceCell;

use crate::assertion::NOT_YET_IMPLEMENTED;
use crate::cursor::{Cursor, Input};
use crate::error::{self, ParseResult};
use crate::logging::Loggable;
use crate::parser::{BoxedParser, Parser};
use crate::LOG_TARGET;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleError {
    AlreadyDefined,
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::AlreadyDefined => write!(f, "rule has already been defined"),
        }
    }
}

impl Error for RuleError {}

/// A parser declared now and defined later.
///
/// Until [`Rule::define`] is called the rule fails everywhere, exactly like
/// [`crate::assertion::placeholder`]. A rule can be defined only once, after which it is
/// immutable and can be shared between threads.
pub struct Rule<'p, I, T> {
    cell: Arc<OnceCell<BoxedParser<'p, I, T>>>,
}

impl<'p, I: Input, T> Rule<'p, I, T> {
    pub fn new() -> Self {
        Self {
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// Bind the rule (and every clone of it) to `parser`.
    pub fn define<P>(&self, parser: P) -> Result<(), RuleError>
    where
        P: Parser<I, Output = T> + Send + Sync + 'p,
    {
        self.cell
            .set(BoxedParser::new(parser))
            .map_err(|_| RuleError::AlreadyDefined)?;
        debug!(target: LOG_TARGET, "rule -> {} defined", std::any::type_name::<T>());
        Ok(())
    }

    pub fn is_defined(&self) -> bool {
        self.cell.get().is_some()
    }

    /// A parser that runs this rule without owning it.
    pub fn handle(&self) -> RuleRef<'p, I, T> {
        RuleRef {
            cell: Arc::downgrade(&self.cell),
        }
    }
}

impl<'p, I: Input, T> Default for Rule<'p, I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p, I, T> Clone for Rule<'p, I, T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<'p, I, T> fmt::Debug for Rule<'p, I, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = if self.cell.get().is_some() {
            "defined"
        } else {
            "undefined"
        };
        write!(f, "Rule({state}) -> {}", std::any::type_name::<T>())
    }
}

fn run<I: Input, T>(cell: &OnceCell<BoxedParser<'_, I, T>>, cur: Cursor<I>) -> ParseResult<I, T> {
    match cell.get() {
        Some(parser) => parser.parse(cur),
        None => {
            let e = error::failure(cur.clone(), NOT_YET_IMPLEMENTED);
            cur.log_failure("rule", "undefined", &e);
            Err(e)
        }
    }
}

impl<'p, I: Input, T> Parser<I> for Rule<'p, I, T> {
    type Output = T;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, T> {
        run(&self.cell, cur)
    }
}

/// Non-owning reference to a [`Rule`], see [`Rule::handle`].
///
/// Parses exactly as the rule does while some `Rule` clone is alive. Afterwards it fails
/// with `rule dropped`.
pub struct RuleRef<'p, I, T> {
    cell: Weak<OnceCell<BoxedParser<'p, I, T>>>,
}

impl<'p, I, T> Clone for RuleRef<'p, I, T> {
    fn clone(&self) -> Self {
        Self {
            cell: Weak::clone(&self.cell),
        }
    }
}

impl<'p, I, T> fmt::Debug for RuleRef<'p, I, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RuleRef -> {}", std::any::type_name::<T>())
    }
}

impl<'p, I: Input, T> Parser<I> for RuleRef<'p, I, T> {
    type Output = T;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, T> {
        match self.cell.upgrade() {
            Some(cell) => run(&cell, cur),
            None => {
                let e = error::failure(cur.clone(), "rule dropped");
                cur.log_failure("rule", "dropped", &e);
                Err(e)
            }
        }
    }
}

/// Builds its parser from `factory` each time it runs.
#[derive(Clone)]
pub struct Lazy<F> {
    factory: F,
}

pub fn lazy<F>(factory: F) -> Lazy<F> {
    Lazy { factory }
}

impl<F> fmt::Debug for Lazy<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Lazy")
    }
}

impl<I, F, P> Parser<I> for Lazy<F>
where
    I: Input,
    F: Fn() -> P,
    P: Parser<I>,
{
    type Output = P::Output;

    fn parse(&self, cur: Cursor<I>) -> ParseResult<I, P::Output> {
        (self.factory)().parse(cur)
    }
}

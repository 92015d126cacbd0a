//! Parser combinators over any sliceable input.
//!
//! A [`Parser`](prelude::Parser) is a pure function from a [`Cursor`](prelude::Cursor) to
//! either a value plus the cursor after it, or a [`ParseError`](prelude::ParseError). Small
//! primitives (`match_prefix`, `match_element`, `match_range`, ...) are glued together
//! with combinators, either as free functions or by chaining:
//!
//! ```
//! use braid::prelude::*;
//!
//! let digits = match_range('0'..='9').rep1();
//! let signed = match_element('-').opt().then(digits).map(|(sign, ds): (Option<char>, Vec<char>)| {
//!     let n: i64 = ds.iter().collect::<String>().parse().unwrap_or(0);
//!     if sign.is_some() { -n } else { n }
//! });
//! assert_eq!(parse_all(&signed, "-42").unwrap(), -42);
//! ```
//!
//! Input is anything implementing [`Input`](prelude::Input): `&str` (by `char`) and
//! `&[T]` (by `T`, so bytes or a token stream) out of the box.
//!
//! Tracing goes through the `log` crate under target `braid`; run with
//! `RUST_LOG=braid=trace` to see each step.
#![allow(mixed_script_confusables)]
#![warn(clippy::all)]
#![warn(clippy::correctness)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]

use std::cell::Cell;

pub mod assertion;
pub mod combo;
pub mod cursor;
pub mod either;
pub mod error;
pub mod literal;
mod logging;
pub mod parser;
pub mod primitive;
pub mod rule;
mod util;

pub mod prelude;

pub(crate) const LOG_TARGET: &str = "braid";

thread_local!(pub(crate) static LABEL: Cell<&'static str> = Cell::new(""));

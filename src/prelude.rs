pub use crate::assertion::{and, eof, look_ahead, not, placeholder};
pub use crate::combo::{compose, either, map, named, opt, or, rep, rep1};
pub use crate::cursor::{Cursor, Input};
pub use crate::either::Either;
pub use crate::error::{ParseError, ParseResult};
pub use crate::literal::Literal;
pub use crate::parser::{parse_all, BoxedParser, Parser};
pub use crate::primitive::{
    match_element, match_if, match_one_of, match_prefix, match_range, reject_any_of,
    reject_element,
};
pub use crate::rule::{lazy, Rule, RuleError, RuleRef};

use std::fmt::Debug;

use braid::prelude::*;

/// Parse `input`, expecting `value` with `rest` left over.
#[track_caller]
pub fn assert_parses<I, P>(parser: &P, input: I, value: P::Output, rest: I)
where
    I: Input + PartialEq,
    P: Parser<I>,
    P::Output: PartialEq + Debug,
{
    match parser.parse(Cursor::new(input.clone())) {
        Ok((cur, v)) => {
            assert_eq!(v, value, "value parsing {input:?}");
            assert_eq!(cur.rest(), rest, "remainder parsing {input:?}");
        }
        Err(e) => panic!("parsing {input:?} failed: {e}"),
    }
}

/// Parse `input`, expecting a failure. Returns it for further checks.
#[track_caller]
pub fn assert_rejects<I, P>(parser: &P, input: I) -> ParseError<I>
where
    I: Input,
    P: Parser<I>,
    P::Output: Debug,
{
    match parser.parse(Cursor::new(input.clone())) {
        Ok((cur, v)) => panic!("parsing {input:?} gave {v:?} at {cur}, expected failure"),
        Err(e) => e,
    }
}

use std::fmt;

use crate::logging::Loggable;
use crate::util;

/// A sequence that a [`Cursor`] can walk over.
///
/// Implemented for `&str` (elements are `char`) and for slices, which covers token
/// arrays and byte buffers. Every count and offset is measured in elements, never bytes.
pub trait Input: Clone + fmt::Debug {
    type Element: Clone + PartialEq + fmt::Debug;

    /// peek without consuming
    fn first(&self) -> Option<Self::Element>;

    /// the suffix after `n` elements (empty if there are fewer than `n`)
    fn drop_first(&self, n: usize) -> Self;

    /// the prefix of (at most) `n` elements
    fn take_first(&self, n: usize) -> Self;

    fn starts_with(&self, pattern: &Self) -> bool;

    fn is_empty(&self) -> bool;

    fn count(&self) -> usize;
}

impl<'a> Input for &'a str {
    type Element = char;

    #[inline]
    fn first(&self) -> Option<char> {
        self.chars().next()
    }

    fn drop_first(&self, n: usize) -> Self {
        let s: &'a str = self;
        match s.char_indices().nth(n) {
            Some((i, _)) => &s[i..],
            None => "",
        }
    }

    fn take_first(&self, n: usize) -> Self {
        let s: &'a str = self;
        match s.char_indices().nth(n) {
            Some((i, _)) => &s[..i],
            None => s,
        }
    }

    #[inline]
    fn starts_with(&self, pattern: &Self) -> bool {
        str::starts_with(self, *pattern)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }

    fn count(&self) -> usize {
        self.chars().count()
    }
}

impl<'a, T> Input for &'a [T]
where
    T: Clone + PartialEq + fmt::Debug,
{
    type Element = T;

    #[inline]
    fn first(&self) -> Option<T> {
        <[T]>::first(self).cloned()
    }

    fn drop_first(&self, n: usize) -> Self {
        let s: &'a [T] = self;
        &s[n.min(s.len())..]
    }

    fn take_first(&self, n: usize) -> Self {
        let s: &'a [T] = self;
        &s[..n.min(s.len())]
    }

    #[inline]
    fn starts_with(&self, pattern: &Self) -> bool {
        <[T]>::starts_with(self, pattern)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

/// An immutable position in the input.
///
/// Holds the remaining input plus the number of elements consumed to get here.
/// Consuming never mutates a cursor, it hands back a new one. Two cursors over the
/// same input at the same offset compare equal.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Cursor<I> {
    input: I,
    offset: usize,
}

impl<I: Input> Cursor<I> {
    pub fn new(input: I) -> Self {
        let cur = Self { input, offset: 0 };
        cur.log_success("Cursor::new", "");
        cur
    }

    #[inline]
    pub fn first(&self) -> Option<I::Element> {
        Input::first(&self.input)
    }

    pub fn drop_first(&self, n: usize) -> Self {
        let input = Input::drop_first(&self.input, n);
        // only count when exhausted, there were at most n elements left
        let n = if Input::is_empty(&input) {
            n.min(self.count())
        } else {
            n
        };
        Self {
            input,
            offset: self.offset + n,
        }
    }

    pub(crate) fn take_first(&self, n: usize) -> I {
        Input::take_first(&self.input, n)
    }

    #[inline]
    pub fn starts_with(&self, pattern: &I) -> bool {
        Input::starts_with(&self.input, pattern)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        Input::is_empty(&self.input)
    }

    #[inline]
    pub fn count(&self) -> usize {
        Input::count(&self.input)
    }

    /// elements consumed since the cursor was created
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// the unconsumed input
    #[inline]
    pub fn rest(&self) -> I {
        self.input.clone()
    }

    /// Padded rendering of the next few elements. Costs the same however much input is
    /// left.
    pub(crate) fn preview(&self) -> String {
        util::formatter(&self.take_first(util::PREVIEW_WIDTH))
    }
}

impl<'a> From<&'a str> for Cursor<&'a str> {
    #[inline]
    fn from(s: &'a str) -> Self {
        Cursor::new(s)
    }
}

impl<'a, T> From<&'a [T]> for Cursor<&'a [T]>
where
    T: Clone + PartialEq + fmt::Debug,
{
    #[inline]
    fn from(s: &'a [T]) -> Self {
        Cursor::new(s)
    }
}

impl<I: Input> fmt::Display for Cursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "offset {} {}",
            self.offset,
            self.preview().trim_end()
        )
    }
}

impl<I: Input> fmt::Debug for Cursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset)
            .field("input", &format_args!("{}", self.preview().trim_end()))
            .finish()
    }
}

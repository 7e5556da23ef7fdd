//! Pull-based cursors over finite sequences.
//!
//! The whole compiler front end is driven through these two building blocks:
//! a plain index cursor over a sequence ([`SequenceCursor`]) and a wrapper
//! adding exactly one element of look-ahead ([`Peekable`]). The tokenizer
//! reads characters through a peekable cursor and is itself a [`Cursor`] of
//! tokens, which the parser in turn reads through another peekable wrapper.


use std::fmt;

/// Error returned when reading past the end of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted;

impl fmt::Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attempted to read past the end of an exhausted cursor")
    }
}

impl std::error::Error for Exhausted {}

/// A finite, pull-based cursor.
///
/// `is_over()` is idempotent; `next()` fails once the cursor is exhausted.
/// The error type must absorb [`Exhausted`] so compound cursors (such as the
/// tokenizer) can surface exhaustion alongside their own failures.
pub trait Cursor {
    type Item;
    type Error: From<Exhausted>;

    /// True iff the cursor has no further elements to yield.
    fn is_over(&self) -> bool;

    /// Yields the next element, or fails if `is_over()`.
    fn next(&mut self) -> Result<Self::Item, Self::Error>;
}

/// Index cursor over an owned sequence of elements.
pub struct SequenceCursor<T> {
    items: Vec<T>,
    position: usize,
}

impl<T> SequenceCursor<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, position: 0 }
    }
}

impl SequenceCursor<char> {
    /// Cursor over the characters of a source string.
    pub fn from_source(source: &str) -> Self {
        Self::new(source.chars().collect())
    }
}

impl<T: Clone> Cursor for SequenceCursor<T> {
    type Item = T;
    type Error = Exhausted;

    fn is_over(&self) -> bool {
        self.position >= self.items.len()
    }

    fn next(&mut self) -> Result<T, Exhausted> {
        let item = self.items.get(self.position).cloned().ok_or(Exhausted)?;
        self.position += 1;
        Ok(item)
    }
}

/// Wraps a cursor with a single slot of look-ahead.
///
/// At most one element is ever buffered ahead of the underlying cursor.
pub struct Peekable<I: Cursor> {
    inner: I,
    slot: Option<I::Item>,
}

impl<I: Cursor> Peekable<I> {
    pub fn new(inner: I) -> Self {
        Self { inner, slot: None }
    }

    /// Returns the next element without consuming it.
    ///
    /// Repeated calls with no intervening `next()` return the same element
    /// and never pull from the underlying cursor again.
    pub fn peek(&mut self) -> Result<&I::Item, I::Error> {
        if self.slot.is_none() {
            self.slot = Some(self.inner.next()?);
        }

        match self.slot.as_ref() {
            Some(item) => Ok(item),
            None => Err(Exhausted.into()),
        }
    }
}

impl<I: Cursor> Cursor for Peekable<I> {
    type Item = I::Item;
    type Error = I::Error;

    fn is_over(&self) -> bool {
        self.slot.is_none() && self.inner.is_over()
    }

    fn next(&mut self) -> Result<I::Item, I::Error> {
        match self.slot.take() {
            Some(item) => Ok(item),
            None => self.inner.next(),
        }
    }
}

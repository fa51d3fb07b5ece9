//! Forward-only cursor over `[index, end)` of a [`Source`].
//!
//! A cursor is either active (`index < end`) or exhausted (`index == end`).
//! Exhaustion is absorbing: the cursor is never reset, callers drop it and ask
//! the view for a fresh one.

use core::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::number::{Number, Primitive};
use crate::source::{IndexSource, PrimitiveSource, SliceSource, Source};

/// Cursor over a validated range of a borrowed store.
#[derive(Debug, Clone)]
pub struct RangeIter<S> {
    source: S,
    index: usize,
    end: usize,
}

pub type ArrayIter<'a, T> = RangeIter<SliceSource<'a, T>>;
pub type PrimitiveIter<'a, P> = RangeIter<PrimitiveSource<'a, P>>;
pub type IntIter<'a> = PrimitiveIter<'a, i32>;
pub type LongIter<'a> = PrimitiveIter<'a, i64>;
pub type DoubleIter<'a> = PrimitiveIter<'a, f64>;
pub type IndexIter<'a, I, T> = RangeIter<IndexSource<'a, I, T>>;

// Slice-backed cursors are a fat pointer plus two indices.
static_assertions::assert_eq_size!(ArrayIter<'static, u8>, [usize; 4]);
static_assertions::assert_eq_size!(IntIter<'static>, [usize; 4]);
static_assertions::assert_impl_all!(ArrayIter<'static, u8>: Send, Sync, Clone);

impl<S: Source> RangeIter<S> {
    pub(crate) fn new(source: S, index: usize, end: usize) -> Self {
        debug_assert!(index <= end, "cursor start {index} past end {end}");
        RangeIter { source, index, end }
    }

    /// True while elements remain. Never changes state.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.index < self.end
    }

    /// Reads the element at the current position and advances past it.
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] once the cursor has reached its end.
    #[inline]
    pub fn try_next(&mut self) -> Result<S::Item> {
        if self.index >= self.end {
            return Err(Error::Exhausted);
        }
        let item = self.source.read(self.index);
        self.index += 1;
        Ok(item)
    }

    /// Views are read-only, so removal always fails.
    ///
    /// # Errors
    ///
    /// Always [`Error::Unsupported`].
    pub fn remove(&mut self) -> Result<()> {
        Err(Error::Unsupported("remove through an immutable cursor"))
    }

    /// Drains the cursor, calling `action` on each remaining element in
    /// ascending index order.
    pub fn for_each_remaining(&mut self, mut action: impl FnMut(S::Item)) {
        while self.index < self.end {
            let item = self.source.read(self.index);
            self.index += 1;
            action(item);
        }
    }

    /// Index of the next element to be read.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn remaining(&self) -> usize {
        self.end - self.index
    }
}

impl<S: Source> Iterator for RangeIter<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }

    fn fold<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, S::Item) -> B,
    {
        let mut acc = init;
        for index in self.index..self.end {
            acc = f(acc, self.source.read(index));
        }
        acc
    }
}

impl<S: Source> ExactSizeIterator for RangeIter<S> {}

impl<S: Source> FusedIterator for RangeIter<S> {}

// --- Unboxed and boxed accessors for primitive cursors ---

impl<P: Primitive> RangeIter<PrimitiveSource<'_, P>> {
    /// Unboxed accessor. Consumes the same position as [`Iterator::next`]
    /// and [`next_boxed`](Self::next_boxed).
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] once the cursor has reached its end.
    #[inline]
    pub fn next_primitive(&mut self) -> Result<P> {
        self.try_next()
    }

    /// Boxed accessor for consumers that do not know the element kind.
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] once the cursor has reached its end.
    pub fn next_boxed(&mut self) -> Result<Number> {
        self.try_next().map(Primitive::boxed)
    }

    pub fn for_each_remaining_boxed(&mut self, mut action: impl FnMut(Number)) {
        self.for_each_remaining(|value| action(value.boxed()));
    }
}

impl IntIter<'_> {
    /// # Errors
    ///
    /// [`Error::Exhausted`] once the cursor has reached its end.
    pub fn next_int(&mut self) -> Result<i32> {
        self.next_primitive()
    }
}

impl LongIter<'_> {
    /// # Errors
    ///
    /// [`Error::Exhausted`] once the cursor has reached its end.
    pub fn next_long(&mut self) -> Result<i64> {
        self.next_primitive()
    }
}

impl DoubleIter<'_> {
    /// # Errors
    ///
    /// [`Error::Exhausted`] once the cursor has reached its end.
    pub fn next_double(&mut self) -> Result<f64> {
        self.next_primitive()
    }
}

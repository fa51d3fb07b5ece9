//! Read-only window `[start, end)` over a borrowed store.

use crate::cursor::RangeIter;
use crate::number::{Number, Primitive};
use crate::segment::Segments;
use crate::source::{IndexSource, PrimitiveSource, SliceSource, Source};

/// A view over a validated range. Owns no elements.
///
/// Every call to [`iter`](RangeIterable::iter) starts an independent cursor at
/// `start`; cursors never observe each other's position.
#[derive(Debug, Clone, Copy)]
pub struct RangeIterable<S> {
    source: S,
    start: usize,
    end: usize,
}

pub type ArrayIterable<'a, T> = RangeIterable<SliceSource<'a, T>>;
pub type PrimitiveIterable<'a, P> = RangeIterable<PrimitiveSource<'a, P>>;
pub type IntIterable<'a> = PrimitiveIterable<'a, i32>;
pub type LongIterable<'a> = PrimitiveIterable<'a, i64>;
pub type DoubleIterable<'a> = PrimitiveIterable<'a, f64>;
pub type IndexIterable<'a, I, T> = RangeIterable<IndexSource<'a, I, T>>;

static_assertions::assert_impl_all!(ArrayIterable<'static, u8>: Copy, Send, Sync);

impl<S: Source> RangeIterable<S> {
    pub(crate) fn new(source: S, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "view start {start} past end {end}");
        RangeIterable { source, start, end }
    }

    /// A fresh cursor positioned at `start`.
    pub fn iter(&self) -> RangeIter<S> {
        RangeIter::new(self.source, self.start, self.end)
    }

    /// Calls `action` on every element in ascending index order, reading the
    /// store directly rather than through a cursor.
    pub fn for_each(&self, mut action: impl FnMut(S::Item)) {
        for index in self.start..self.end {
            action(self.source.read(index));
        }
    }

    pub fn segments(&self) -> Segments<S> {
        Segments::new(self.source, self.start, self.end)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<P: Primitive> RangeIterable<PrimitiveSource<'_, P>> {
    /// Same traversal as [`for_each`](RangeIterable::for_each), with each
    /// element erased to a [`Number`].
    pub fn for_each_boxed(&self, mut action: impl FnMut(Number)) {
        self.for_each(|value| action(value.boxed()));
    }
}

impl<S: Source> IntoIterator for RangeIterable<S> {
    type Item = S::Item;
    type IntoIter = RangeIter<S>;

    fn into_iter(self) -> RangeIter<S> {
        self.iter()
    }
}

impl<S: Source> IntoIterator for &RangeIterable<S> {
    type Item = S::Item;
    type IntoIter = RangeIter<S>;

    fn into_iter(self) -> RangeIter<S> {
        self.iter()
    }
}

//! Size-annotated traversal handle for bulk and divide-and-conquer consumers.

use bitflags::bitflags;

use crate::source::Source;

bitflags! {
    /// Properties a [`Segments`] guarantees to its consumer.
    ///
    /// Views borrow their store immutably for their whole lifetime, so both
    /// flags are always reported. An [`Indexable`](crate::Indexable) with
    /// interior mutability can still change under a traversal; that is on the
    /// implementor.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct Characteristics: u8 {
        /// `len` is exact and every split reports an exact `len` too.
        const SIZED = 1;
        /// The store is not structurally modified during traversal.
        const IMMUTABLE = 1 << 1;
    }
}

/// A splittable traversal over `[lo, hi)` of a [`Source`].
#[derive(Debug, Clone)]
pub struct Segments<S> {
    source: S,
    lo: usize,
    hi: usize,
}

impl<S: Source> Segments<S> {
    pub(crate) fn new(source: S, lo: usize, hi: usize) -> Self {
        debug_assert!(lo <= hi);
        Segments { source, lo, hi }
    }

    /// Exact number of elements not yet traversed.
    pub fn len(&self) -> usize {
        self.hi - self.lo
    }

    pub fn is_empty(&self) -> bool {
        self.lo == self.hi
    }

    pub fn characteristics(&self) -> Characteristics {
        Characteristics::SIZED | Characteristics::IMMUTABLE
    }

    pub fn has_characteristics(&self, flags: Characteristics) -> bool {
        self.characteristics().contains(flags)
    }

    /// Feeds the next element to `action`. Returns `false` if none remained.
    pub fn try_advance(&mut self, action: impl FnOnce(S::Item)) -> bool {
        if self.lo >= self.hi {
            return false;
        }
        let item = self.source.read(self.lo);
        self.lo += 1;
        action(item);
        true
    }

    pub fn for_each_remaining(&mut self, mut action: impl FnMut(S::Item)) {
        while self.lo < self.hi {
            let item = self.source.read(self.lo);
            self.lo += 1;
            action(item);
        }
    }

    /// Hands off the lower half of the remaining range.
    ///
    /// On success `self` keeps `[mid, hi)` and the returned segment covers
    /// `[lo, mid)`. Returns `None` when fewer than two elements remain.
    pub fn try_split(&mut self) -> Option<Self> {
        let mid = self.lo + (self.hi - self.lo) / 2;
        if self.lo >= mid {
            return None;
        }
        let prefix = Segments::new(self.source, self.lo, mid);
        self.lo = mid;
        Some(prefix)
    }
}

impl<S: Source> Iterator for Segments<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let mut next = None;
        self.try_advance(|item| next = Some(item));
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<S: Source> ExactSizeIterator for Segments<S> {}

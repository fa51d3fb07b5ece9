//! Backing stores a view can read from.
//!
//! A [`Source`] is a cheap, copyable handle to borrowed storage. Cursors and
//! views are generic over it, so the three store kinds (reference slices,
//! primitive slices and [`Indexable`] objects) share one cursor and one view
//! implementation.

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use crate::error::Result;
use crate::indexable::Indexable;
use crate::number::Primitive;

/// Read access to borrowed storage by index.
///
/// Callers only pass indices inside a range validated against the store, so
/// `read` is not expected to check bounds again.
pub trait Source: Copy {
    type Item;

    fn read(&self, index: usize) -> Self::Item;
}

/// Reference slice. Yields borrowed elements without copying them.
pub struct SliceSource<'a, T> {
    array: &'a [T],
}

impl<'a, T> SliceSource<'a, T> {
    pub(crate) fn new(array: &'a [T]) -> Self {
        SliceSource { array }
    }
}

// --- Manual Clone/Copy/Debug to avoid T: Clone/Copy/Debug bounds ---

impl<T> Clone for SliceSource<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceSource<'_, T> {}

impl<T> fmt::Debug for SliceSource<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceSource")
            .field("len", &self.array.len())
            .field("element_type", &core::any::type_name::<T>())
            .finish()
    }
}

impl<'a, T> Source for SliceSource<'a, T> {
    type Item = &'a T;

    #[inline]
    fn read(&self, index: usize) -> &'a T {
        &self.array[index]
    }
}

/// Primitive slice. Yields elements by value.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveSource<'a, P> {
    array: &'a [P],
}

impl<'a, P: Primitive> PrimitiveSource<'a, P> {
    pub(crate) fn new(array: &'a [P]) -> Self {
        PrimitiveSource { array }
    }
}

impl<P: Primitive> Source for PrimitiveSource<'_, P> {
    type Item = P;

    #[inline]
    fn read(&self, index: usize) -> P {
        self.array[index]
    }
}

/// Arbitrary [`Indexable`]. Every read goes through
/// [`Indexable::get`](Indexable::get) and may fail.
pub struct IndexSource<'a, I: ?Sized, T> {
    indexable: &'a I,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, I: ?Sized + Indexable<T>, T> IndexSource<'a, I, T> {
    pub(crate) fn new(indexable: &'a I) -> Self {
        IndexSource {
            indexable,
            _marker: PhantomData,
        }
    }
}

impl<I: ?Sized, T> Clone for IndexSource<'_, I, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: ?Sized, T> Copy for IndexSource<'_, I, T> {}

impl<I: ?Sized, T> fmt::Debug for IndexSource<'_, I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexSource")
            .field("indexable", &core::any::type_name::<I>())
            .field("element_type", &core::any::type_name::<T>())
            .finish()
    }
}

impl<I: ?Sized + Indexable<T>, T> Source for IndexSource<'_, I, T> {
    type Item = Result<T>;

    #[inline]
    fn read(&self, index: usize) -> Result<T> {
        self.indexable.get(index)
    }
}

/// A possibly absent array argument.
///
/// Lets the factories accept plain borrows as well as `Option`s, so that an
/// absent store is reported as [`Error::NullReference`](crate::Error) instead
/// of being unrepresentable.
pub trait IntoStore<'a, T> {
    fn into_store(self) -> Option<&'a [T]>;
}

impl<'a, T> IntoStore<'a, T> for &'a [T] {
    fn into_store(self) -> Option<&'a [T]> {
        Some(self)
    }
}

impl<'a, T, const N: usize> IntoStore<'a, T> for &'a [T; N] {
    fn into_store(self) -> Option<&'a [T]> {
        Some(self.as_slice())
    }
}

impl<'a, T> IntoStore<'a, T> for &'a Vec<T> {
    fn into_store(self) -> Option<&'a [T]> {
        Some(self.as_slice())
    }
}

impl<'a, T, S: IntoStore<'a, T>> IntoStore<'a, T> for Option<S> {
    fn into_store(self) -> Option<&'a [T]> {
        self.and_then(IntoStore::into_store)
    }
}

/// A possibly absent mutable array argument, for adapters that write through.
pub trait IntoStoreMut<'a, T> {
    fn into_store_mut(self) -> Option<&'a mut [T]>;
}

impl<'a, T> IntoStoreMut<'a, T> for &'a mut [T] {
    fn into_store_mut(self) -> Option<&'a mut [T]> {
        Some(self)
    }
}

impl<'a, T, const N: usize> IntoStoreMut<'a, T> for &'a mut [T; N] {
    fn into_store_mut(self) -> Option<&'a mut [T]> {
        Some(self.as_mut_slice())
    }
}

impl<'a, T> IntoStoreMut<'a, T> for &'a mut Vec<T> {
    fn into_store_mut(self) -> Option<&'a mut [T]> {
        Some(self.as_mut_slice())
    }
}

impl<'a, T, S: IntoStoreMut<'a, T>> IntoStoreMut<'a, T> for Option<S> {
    fn into_store_mut(self) -> Option<&'a mut [T]> {
        self.and_then(IntoStoreMut::into_store_mut)
    }
}

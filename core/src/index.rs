//! Views over arbitrary [`Indexable`] stores.
//!
//! Each element is read through [`Indexable::get`], so cursors and views yield
//! `Result<T>`: a caller-supplied store may fail inside the declared length.
//! Arrays can take this path too, wrapped by the `*_array*` functions.
//!
//! ```
//! use iteray_core::index;
//!
//! let mut array = [1, 2, 3];
//! let indexable = index::indexable(&mut array).unwrap();
//!
//! let values: Result<Vec<i32>, _> = index::iterator(&indexable, 3).unwrap().collect();
//! assert_eq!(values, Ok(vec![1, 2, 3]));
//! ```

use crate::cursor::{IndexIter, RangeIter};
use crate::error::Result;
use crate::guard;
use crate::indexable::{ArrayIndexable, Indexable};
use crate::source::{IndexSource, IntoStore, IntoStoreMut};
use crate::view::{IndexIterable, RangeIterable};

/// Wraps a mutable array in an [`ArrayIndexable`] handle.
///
/// # Errors
///
/// [`Error::NullReference`](crate::Error::NullReference) if `store` is absent.
pub fn indexable<'a, T>(store: impl IntoStoreMut<'a, T>) -> Result<ArrayIndexable<'a, T>> {
    guard::require(store.into_store_mut(), "array").map(ArrayIndexable::new)
}

/// View over a whole [`ArrayIndexable`], sized by the array it wraps.
///
/// # Errors
///
/// [`Error::NullReference`](crate::Error::NullReference) if `indexable` is absent.
pub fn iterable_adapter<'a, 'b, T: Clone>(
    indexable: impl Into<Option<&'a ArrayIndexable<'b, T>>>,
) -> Result<IndexIterable<'a, ArrayIndexable<'b, T>, T>>
where
    'b: 'a,
{
    let indexable = guard::require(indexable.into(), "indexable")?;
    Ok(RangeIterable::new(IndexSource::new(indexable), 0, indexable.len()))
}

/// Cursor over a whole [`ArrayIndexable`].
///
/// # Errors
///
/// See [`iterable_adapter`].
pub fn iterator_adapter<'a, 'b, T: Clone>(
    indexable: impl Into<Option<&'a ArrayIndexable<'b, T>>>,
) -> Result<IndexIter<'a, ArrayIndexable<'b, T>, T>>
where
    'b: 'a,
{
    let indexable = guard::require(indexable.into(), "indexable")?;
    Ok(RangeIter::new(IndexSource::new(indexable), 0, indexable.len()))
}

/// View over `[0, length)` of `indexable`.
///
/// The store has no discoverable extent, so `length` is only checked for
/// being non-negative. Reads past the store's real end fail at `get`.
///
/// # Errors
///
/// - [`Error::NullReference`](crate::Error::NullReference) if `indexable` is absent.
/// - [`Error::OutOfRange`](crate::Error::OutOfRange) naming `length` if it is negative.
pub fn iterable<'a, I, T>(
    indexable: impl Into<Option<&'a I>>,
    length: isize,
) -> Result<IndexIterable<'a, I, T>>
where
    I: ?Sized + Indexable<T> + 'a,
{
    let indexable = guard::require(indexable.into(), "indexable")?;
    let end = guard::length(length)?;
    Ok(RangeIterable::new(IndexSource::new(indexable), 0, end))
}

/// Cursor over `[0, length)` of `indexable`.
///
/// # Errors
///
/// See [`iterable`].
pub fn iterator<'a, I, T>(
    indexable: impl Into<Option<&'a I>>,
    length: isize,
) -> Result<IndexIter<'a, I, T>>
where
    I: ?Sized + Indexable<T> + 'a,
{
    let indexable = guard::require(indexable.into(), "indexable")?;
    let end = guard::length(length)?;
    Ok(RangeIter::new(IndexSource::new(indexable), 0, end))
}

/// View over a whole array, read through its [`Indexable`] implementation.
///
/// # Errors
///
/// [`Error::NullReference`](crate::Error::NullReference) if `store` is absent.
pub fn iterable_array<'a, T: Clone>(
    store: impl IntoStore<'a, T>,
) -> Result<IndexIterable<'a, [T], T>> {
    let array = guard::require_store(store)?;
    Ok(RangeIterable::new(IndexSource::new(array), 0, array.len()))
}

/// # Errors
///
/// [`Error::NullReference`](crate::Error::NullReference) if `store` is absent,
/// otherwise as [`check_start`](crate::bounds::check_start).
pub fn iterable_array_from<'a, T: Clone>(
    store: impl IntoStore<'a, T>,
    start: isize,
) -> Result<IndexIterable<'a, [T], T>> {
    let array = guard::require_store(store)?;
    let (start, end) = guard::range_from(array.len(), start)?;
    Ok(RangeIterable::new(IndexSource::new(array), start, end))
}

/// # Errors
///
/// [`Error::NullReference`](crate::Error::NullReference) if `store` is absent,
/// otherwise as [`check_range`](crate::bounds::check_range).
pub fn iterable_array_range<'a, T: Clone>(
    store: impl IntoStore<'a, T>,
    start: isize,
    end: isize,
) -> Result<IndexIterable<'a, [T], T>> {
    let array = guard::require_store(store)?;
    let (start, end) = guard::range(array.len(), start, end)?;
    Ok(RangeIterable::new(IndexSource::new(array), start, end))
}

/// # Errors
///
/// See [`iterable_array`].
pub fn iterator_array<'a, T: Clone>(store: impl IntoStore<'a, T>) -> Result<IndexIter<'a, [T], T>> {
    let array = guard::require_store(store)?;
    Ok(RangeIter::new(IndexSource::new(array), 0, array.len()))
}

/// # Errors
///
/// See [`iterable_array_from`].
pub fn iterator_array_from<'a, T: Clone>(
    store: impl IntoStore<'a, T>,
    start: isize,
) -> Result<IndexIter<'a, [T], T>> {
    let array = guard::require_store(store)?;
    let (start, end) = guard::range_from(array.len(), start)?;
    Ok(RangeIter::new(IndexSource::new(array), start, end))
}

/// # Errors
///
/// See [`iterable_array_range`].
pub fn iterator_array_range<'a, T: Clone>(
    store: impl IntoStore<'a, T>,
    start: isize,
    end: isize,
) -> Result<IndexIter<'a, [T], T>> {
    let array = guard::require_store(store)?;
    let (start, end) = guard::range(array.len(), start, end)?;
    Ok(RangeIter::new(IndexSource::new(array), start, end))
}

//! Views over reference arrays.
//!
//! Elements are yielded as `&'a T`; nothing is cloned.
//!
//! ```
//! use iteray_core::array;
//!
//! let words = ["a", "b", "c", "d"];
//! let view = array::iterable_range(&words, 1, 3).unwrap();
//! assert_eq!(view.iter().copied().collect::<Vec<_>>(), ["b", "c"]);
//! ```

use crate::cursor::{ArrayIter, RangeIter};
use crate::error::Result;
use crate::guard;
use crate::source::{IntoStore, SliceSource};
use crate::view::{ArrayIterable, RangeIterable};

/// View over the whole array.
///
/// # Errors
///
/// [`Error::NullReference`](crate::Error::NullReference) if `store` is absent.
pub fn iterable<'a, T>(store: impl IntoStore<'a, T>) -> Result<ArrayIterable<'a, T>> {
    let array = guard::require_store(store)?;
    Ok(RangeIterable::new(SliceSource::new(array), 0, array.len()))
}

/// View over `[start, len)`.
///
/// # Errors
///
/// [`Error::NullReference`](crate::Error::NullReference) if `store` is absent,
/// otherwise as [`check_start`](crate::bounds::check_start).
pub fn iterable_from<'a, T>(
    store: impl IntoStore<'a, T>,
    start: isize,
) -> Result<ArrayIterable<'a, T>> {
    let array = guard::require_store(store)?;
    let (start, end) = guard::range_from(array.len(), start)?;
    Ok(RangeIterable::new(SliceSource::new(array), start, end))
}

/// View over `[start, end)`.
///
/// # Errors
///
/// [`Error::NullReference`](crate::Error::NullReference) if `store` is absent,
/// otherwise as [`check_range`](crate::bounds::check_range).
pub fn iterable_range<'a, T>(
    store: impl IntoStore<'a, T>,
    start: isize,
    end: isize,
) -> Result<ArrayIterable<'a, T>> {
    let array = guard::require_store(store)?;
    let (start, end) = guard::range(array.len(), start, end)?;
    Ok(RangeIterable::new(SliceSource::new(array), start, end))
}

/// Cursor over the whole array.
///
/// # Errors
///
/// See [`iterable`].
pub fn iterator<'a, T>(store: impl IntoStore<'a, T>) -> Result<ArrayIter<'a, T>> {
    let array = guard::require_store(store)?;
    Ok(RangeIter::new(SliceSource::new(array), 0, array.len()))
}

/// Cursor over `[start, len)`.
///
/// # Errors
///
/// See [`iterable_from`].
pub fn iterator_from<'a, T>(store: impl IntoStore<'a, T>, start: isize) -> Result<ArrayIter<'a, T>> {
    let array = guard::require_store(store)?;
    let (start, end) = guard::range_from(array.len(), start)?;
    Ok(RangeIter::new(SliceSource::new(array), start, end))
}

/// Cursor over `[start, end)`.
///
/// # Errors
///
/// See [`iterable_range`].
pub fn iterator_range<'a, T>(
    store: impl IntoStore<'a, T>,
    start: isize,
    end: isize,
) -> Result<ArrayIter<'a, T>> {
    let array = guard::require_store(store)?;
    let (start, end) = guard::range(array.len(), start, end)?;
    Ok(RangeIter::new(SliceSource::new(array), start, end))
}

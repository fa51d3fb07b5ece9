//! Views over `i32`, `i64` and `f64` arrays that yield elements by value.
//!
//! One set of functions serves all three kinds; the element type picks the
//! cursor through [`Primitive`]. The returned cursors and views expose both
//! the unboxed path ([`next_primitive`](crate::PrimitiveIter::next_primitive),
//! [`for_each`](crate::RangeIterable::for_each)) and the boxed one
//! ([`next_boxed`](crate::PrimitiveIter::next_boxed),
//! [`for_each_boxed`](crate::PrimitiveIterable::for_each_boxed)).
//!
//! ```
//! use iteray_core::{primitive, Number};
//!
//! let array = [10, 20, 30, 40];
//! let mut it = primitive::iterator_from(&array, 2).unwrap();
//! assert_eq!(it.next_int(), Ok(30));
//! assert_eq!(it.next_boxed(), Ok(Number::Int(40)));
//! assert!(!it.has_next());
//! ```

use crate::cursor::{PrimitiveIter, RangeIter};
use crate::error::Result;
use crate::guard;
use crate::number::Primitive;
use crate::source::{IntoStore, PrimitiveSource};
use crate::view::{PrimitiveIterable, RangeIterable};

/// View over the whole array.
///
/// # Errors
///
/// [`Error::NullReference`](crate::Error::NullReference) if `store` is absent.
pub fn iterable<'a, P: Primitive>(store: impl IntoStore<'a, P>) -> Result<PrimitiveIterable<'a, P>> {
    let array = guard::require_store(store)?;
    Ok(RangeIterable::new(PrimitiveSource::new(array), 0, array.len()))
}

/// View over `[start, len)`.
///
/// # Errors
///
/// [`Error::NullReference`](crate::Error::NullReference) if `store` is absent,
/// otherwise as [`check_start`](crate::bounds::check_start).
pub fn iterable_from<'a, P: Primitive>(
    store: impl IntoStore<'a, P>,
    start: isize,
) -> Result<PrimitiveIterable<'a, P>> {
    let array = guard::require_store(store)?;
    let (start, end) = guard::range_from(array.len(), start)?;
    Ok(RangeIterable::new(PrimitiveSource::new(array), start, end))
}

/// View over `[start, end)`.
///
/// # Errors
///
/// [`Error::NullReference`](crate::Error::NullReference) if `store` is absent,
/// otherwise as [`check_range`](crate::bounds::check_range).
pub fn iterable_range<'a, P: Primitive>(
    store: impl IntoStore<'a, P>,
    start: isize,
    end: isize,
) -> Result<PrimitiveIterable<'a, P>> {
    let array = guard::require_store(store)?;
    let (start, end) = guard::range(array.len(), start, end)?;
    Ok(RangeIterable::new(PrimitiveSource::new(array), start, end))
}

/// Cursor over the whole array.
///
/// # Errors
///
/// See [`iterable`].
pub fn iterator<'a, P: Primitive>(store: impl IntoStore<'a, P>) -> Result<PrimitiveIter<'a, P>> {
    let array = guard::require_store(store)?;
    Ok(RangeIter::new(PrimitiveSource::new(array), 0, array.len()))
}

/// Cursor over `[start, len)`.
///
/// # Errors
///
/// See [`iterable_from`].
pub fn iterator_from<'a, P: Primitive>(
    store: impl IntoStore<'a, P>,
    start: isize,
) -> Result<PrimitiveIter<'a, P>> {
    let array = guard::require_store(store)?;
    let (start, end) = guard::range_from(array.len(), start)?;
    Ok(RangeIter::new(PrimitiveSource::new(array), start, end))
}

/// Cursor over `[start, end)`.
///
/// # Errors
///
/// See [`iterable_range`].
pub fn iterator_range<'a, P: Primitive>(
    store: impl IntoStore<'a, P>,
    start: isize,
    end: isize,
) -> Result<PrimitiveIter<'a, P>> {
    let array = guard::require_store(store)?;
    let (start, end) = guard::range(array.len(), start, end)?;
    Ok(RangeIter::new(PrimitiveSource::new(array), start, end))
}

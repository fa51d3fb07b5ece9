//! Zero-copy, bounds-checked range views over arrays and [`Indexable`] stores.
//!
//! A view is a read-only window `[start, end)` over borrowed storage. It
//! never copies the store and hands out any number of independent cursors.
//! Three store kinds are supported, each with its own factory module:
//!
//! | Module | Store | Element |
//! |--------|-------|---------|
//! | [`array`] | `&[T]` | `&T` |
//! | [`primitive`] | `&[i32]`, `&[i64]`, `&[f64]` | by value, or boxed as [`Number`] |
//! | [`index`] | any `I: Indexable<T>` | `Result<T>` |
//!
//! Every factory comes in three forms: whole store, `_from(start)` and
//! `_range(start, end)`, returning either a view (`iterable*`) or a cursor
//! (`iterator*`).
//!
//! ```
//! use iteray_core::{array, Error};
//!
//! let array = [1, 2, 3, 4, 5];
//! let mut it = array::iterator_range(&array, 1, 4).unwrap();
//! assert_eq!(it.try_next(), Ok(&2));
//! assert_eq!(it.try_next(), Ok(&3));
//! assert_eq!(it.try_next(), Ok(&4));
//! assert!(!it.has_next());
//! assert_eq!(it.try_next(), Err(Error::Exhausted));
//!
//! assert_eq!(array::iterable_range(&array, 3, 2).unwrap_err(), Error::InvalidRange { start: 3, end: 2 });
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod array;
pub mod bounds;
pub mod index;
pub mod primitive;

mod cursor;
mod error;
mod guard;
mod indexable;
mod number;
mod segment;
mod source;
mod view;

pub use cursor::{ArrayIter, DoubleIter, IndexIter, IntIter, LongIter, PrimitiveIter, RangeIter};
pub use error::{Error, Result};
pub use indexable::{
    ArrayIndexable, DoubleArrayIndexable, Indexable, IntArrayIndexable, LongArrayIndexable,
};
pub use number::{Number, Primitive};
pub use segment::{Characteristics, Segments};
pub use source::{IndexSource, IntoStore, IntoStoreMut, PrimitiveSource, SliceSource, Source};
pub use view::{
    ArrayIterable, DoubleIterable, IndexIterable, IntIterable, LongIterable, PrimitiveIterable,
    RangeIterable,
};

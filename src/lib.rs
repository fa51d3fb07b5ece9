//! Iteray - zero-copy range views over arrays
//!
//! # Overview
//!
//! Iteray hands out read-only iteration views over a sub-range `[start, end)`
//! of a backing store without copying elements or allocating a buffer. Views
//! borrow the store, so the borrow checker keeps it alive and unmodified for as
//! long as any view or cursor exists.
//!
//! # Quick Start
//!
//! ```
//! use iteray::{array, primitive, Error, Number};
//!
//! // Reference arrays yield borrowed elements.
//! let words = ["alpha", "beta", "gamma", "delta"];
//! let view = array::iterable_range(&words, 1, 3).unwrap();
//! assert_eq!(view.iter().copied().collect::<Vec<_>>(), ["beta", "gamma"]);
//!
//! // Primitive arrays yield values, with a boxed path for generic consumers.
//! let samples = [10, 20, 30, 40];
//! let mut it = primitive::iterator_from(&samples, 2).unwrap();
//! assert_eq!(it.next_int(), Ok(30));
//! assert_eq!(it.next_boxed(), Ok(Number::Int(40)));
//! assert_eq!(it.next_int(), Err(Error::Exhausted));
//!
//! // Bounds are validated before any element is read.
//! assert_eq!(array::iterable_from(&words, -1).unwrap_err(), Error::OutOfRange(-1));
//! ```
//!
//! # Custom stores
//!
//! Anything implementing [`Indexable`] can be viewed by declaring its length:
//!
//! ```
//! use iteray::{index, Error, Indexable, Result};
//!
//! struct Evens;
//!
//! impl Indexable<usize> for Evens {
//!     fn get(&self, index: usize) -> Result<usize> {
//!         Ok(index * 2)
//!     }
//!
//!     fn set(&mut self, _index: usize, _value: usize) -> Result<()> {
//!         Err(Error::Unsupported("set"))
//!     }
//! }
//!
//! let view = index::iterable(&Evens, 4).unwrap();
//! let evens: Result<Vec<usize>> = view.iter().collect();
//! assert_eq!(evens, Ok(vec![0, 2, 4, 6]));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Re-export public API from iteray_core
pub use iteray_core::{array, bounds, index, primitive};

pub use iteray_core::{Error, Result};

pub use iteray_core::{
    ArrayIndexable, DoubleArrayIndexable, Indexable, IntArrayIndexable, LongArrayIndexable,
};

pub use iteray_core::{Number, Primitive};

pub use iteray_core::{
    ArrayIter, ArrayIterable, Characteristics, DoubleIter, DoubleIterable, IndexIter,
    IndexIterable, IndexSource, IntIter, IntIterable, IntoStore, IntoStoreMut, LongIter, LongIterable,
    PrimitiveIter, PrimitiveIterable, PrimitiveSource, RangeIter, RangeIterable, Segments,
    SliceSource, Source,
};

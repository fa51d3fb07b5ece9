//! Random-access capability over a fixed-length sequence.

use crate::error::{Error, Result};

/// Get/set by index.
///
/// Implementations rely on the bounds checking of their backing store; an
/// index outside the store yields [`Error::OutOfRange`]. Views only ever call
/// [`get`](Indexable::get), so `set` is reachable only by whoever owns the
/// store mutably.
pub trait Indexable<T> {
    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index` is outside the backing store.
    fn get(&self, index: usize) -> Result<T>;

    /// Replaces the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index` is outside the backing store.
    fn set(&mut self, index: usize, value: T) -> Result<()>;
}

impl<T: Clone> Indexable<T> for [T] {
    fn get(&self, index: usize) -> Result<T> {
        <[T]>::get(self, index)
            .cloned()
            .ok_or(Error::out_of_range_at(index))
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        let slot = self
            .get_mut(index)
            .ok_or(Error::out_of_range_at(index))?;
        *slot = value;
        Ok(())
    }
}

/// An [`Indexable`] handle over a borrowed array.
///
/// Holds the array by reference; no element is copied until it is read.
#[derive(Debug)]
pub struct ArrayIndexable<'a, T> {
    array: &'a mut [T],
}

pub type IntArrayIndexable<'a> = ArrayIndexable<'a, i32>;
pub type LongArrayIndexable<'a> = ArrayIndexable<'a, i64>;
pub type DoubleArrayIndexable<'a> = ArrayIndexable<'a, f64>;

impl<'a, T> ArrayIndexable<'a, T> {
    pub(crate) fn new(array: &'a mut [T]) -> Self {
        ArrayIndexable { array }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        self.array
    }
}

impl<T: Clone> Indexable<T> for ArrayIndexable<'_, T> {
    fn get(&self, index: usize) -> Result<T> {
        Indexable::get(&*self.array, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        Indexable::set(&mut *self.array, index, value)
    }
}

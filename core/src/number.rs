//! Primitive element types and their type-erased form.
//!
//! Cursors over `i32`, `i64` and `f64` slices share one implementation
//! parametrized by [`Primitive`]. Generic consumers that cannot name the
//! element type receive a [`Number`] instead.

use core::fmt::Debug;

/// A primitive value erased to a single type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i32),
    Long(i64),
    Double(f64),
}

impl Number {
    /// Recovers the typed value, or `None` if `P` is a different kind.
    pub fn get<P: Primitive>(self) -> Option<P> {
        P::unbox(self)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Long(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Double(value)
    }
}

mod private {
    pub trait Sealed {}
}

/// An element type with a dedicated unboxed path.
///
/// This is a sealed trait: the three kinds are fixed.
pub trait Primitive: private::Sealed + Copy + PartialEq + Debug + Into<Number> + 'static {
    /// Erases the value for a generic consumer.
    fn boxed(self) -> Number {
        self.into()
    }

    /// Recovers a value of this kind from its erased form.
    fn unbox(number: Number) -> Option<Self>;
}

impl private::Sealed for i32 {}
impl private::Sealed for i64 {}
impl private::Sealed for f64 {}

impl Primitive for i32 {
    fn unbox(number: Number) -> Option<Self> {
        match number {
            Number::Int(value) => Some(value),
            _ => None,
        }
    }
}

impl Primitive for i64 {
    fn unbox(number: Number) -> Option<Self> {
        match number {
            Number::Long(value) => Some(value),
            _ => None,
        }
    }
}

impl Primitive for f64 {
    fn unbox(number: Number) -> Option<Self> {
        match number {
            Number::Double(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_unbox() {
        assert_eq!(7i32.boxed(), Number::Int(7));
        assert_eq!(7i64.boxed(), Number::Long(7));
        assert_eq!(1.5f64.boxed(), Number::Double(1.5));

        assert_eq!(Number::Int(7).get::<i32>(), Some(7));
        assert_eq!(Number::Int(7).get::<i64>(), None);
        assert_eq!(Number::Double(2.5).get::<f64>(), Some(2.5));
    }
}

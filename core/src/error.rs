//! Error types for range views.
//!
//! Every error here is a contract violation by the caller. Nothing is retried
//! or recovered internally; the error is returned at the point of violation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised by the factories, cursors and [`Indexable`](crate::Indexable)
/// adapters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A required backing store was absent.
    #[error("null reference: {0} is absent")]
    NullReference(&'static str),

    /// A single index (start, end or explicit length) violates its bounds.
    #[error("index out of range: {0}")]
    OutOfRange(isize),

    /// The lower bound exceeds the upper bound.
    #[error("invalid range: start({start}) > end({end})")]
    InvalidRange { start: isize, end: isize },

    /// `next` was called on an exhausted cursor.
    #[error("no such element")]
    Exhausted,

    /// A mutating operation was attempted through a read-only view.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

impl Error {
    /// Out-of-range error for an unsigned index reported by a backing store.
    ///
    /// Indices beyond `isize::MAX` cannot address any slice, so they saturate.
    pub fn out_of_range_at(index: usize) -> Self {
        Error::OutOfRange(isize::try_from(index).unwrap_or(isize::MAX))
    }
}

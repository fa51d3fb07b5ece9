//! Argument checks performed by every factory before a view is built.
//!
//! Wraps the pure checks in [`bounds`](crate::bounds) with logging, so that
//! rejected calls can be traced without the checker itself having side
//! effects.

use crate::bounds;
use crate::error::{Error, Result};
use crate::source::IntoStore;

pub(crate) fn require_store<'a, T>(store: impl IntoStore<'a, T>) -> Result<&'a [T]> {
    store.into_store().ok_or_else(|| {
        tracing::debug!("Rejected absent array");
        Error::NullReference("array")
    })
}

pub(crate) fn require<T>(value: Option<T>, what: &'static str) -> Result<T> {
    value.ok_or_else(|| {
        tracing::debug!(what, "Rejected absent store");
        Error::NullReference(what)
    })
}

pub(crate) fn range(len: usize, start: isize, end: isize) -> Result<(usize, usize)> {
    let range = bounds::check_range(len, start, end)
        .inspect_err(|error| tracing::debug!(len, start, end, %error, "Rejected range"))?;
    tracing::trace!(len, start, end, "Range view");
    Ok(range)
}

pub(crate) fn range_from(len: usize, start: isize) -> Result<(usize, usize)> {
    let start = bounds::check_start(start, len)
        .inspect_err(|error| tracing::debug!(len, start, %error, "Rejected start"))?;
    tracing::trace!(len, start, "Range view");
    Ok((start, len))
}

pub(crate) fn length(len: isize) -> Result<usize> {
    bounds::check_length(len)
        .inspect_err(|error| tracing::debug!(len, %error, "Rejected length"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_logging;

    #[test]
    fn test_require_store() {
        init_test_logging();
        let array = [1, 2];
        assert_eq!(require_store(&array), Ok(&array[..]));
        assert_eq!(require_store(None::<&[i32]>), Err(Error::NullReference("array")));
    }

    #[test]
    fn test_range_helpers_pass_through_checks() {
        init_test_logging();
        assert_eq!(range(4, 1, 3), Ok((1, 3)));
        assert_eq!(range(4, 1, 5), Err(Error::OutOfRange(5)));
        assert_eq!(range_from(4, 4), Ok((4, 4)));
        assert_eq!(range_from(4, -2), Err(Error::OutOfRange(-2)));
        assert_eq!(length(-1), Err(Error::OutOfRange(-1)));
        assert_eq!(require(None::<&u8>, "indexable"), Err(Error::NullReference("indexable")));
    }
}

//! Bounds validation shared by every factory.
//!
//! Indices arrive as `isize` so that negative values can be reported instead of
//! being unrepresentable. Once validated, a range is handed out as `usize`.

use crate::error::{Error, Result};

/// Validates `0 <= start <= end <= len`.
///
/// # Errors
///
/// - [`Error::OutOfRange`] naming `start` if it is negative.
/// - [`Error::InvalidRange`] if `start > end`.
/// - [`Error::OutOfRange`] naming `end` if it exceeds `len`.
pub fn check_range(len: usize, start: isize, end: isize) -> Result<(usize, usize)> {
    if start < 0 {
        return Err(Error::OutOfRange(start));
    }
    if start > end {
        return Err(Error::InvalidRange { start, end });
    }
    // `end >= start >= 0` here, so `unsigned_abs` is the identity.
    let end_index = end.unsigned_abs();
    if end_index > len {
        return Err(Error::OutOfRange(end));
    }
    Ok((start.unsigned_abs(), end_index))
}

/// Validates `0 <= start <= len`.
///
/// # Errors
///
/// - [`Error::OutOfRange`] naming `start` if it is negative.
/// - [`Error::InvalidRange`] naming `start` and `len` if `start > len`.
pub fn check_start(start: isize, len: usize) -> Result<usize> {
    if start < 0 {
        return Err(Error::OutOfRange(start));
    }
    let start_index = start.unsigned_abs();
    if start_index > len {
        return Err(Error::InvalidRange {
            start,
            end: isize::try_from(len).unwrap_or(isize::MAX),
        });
    }
    Ok(start_index)
}

/// Validates an explicit length supplied for a store with no discoverable
/// extent.
///
/// # Errors
///
/// [`Error::OutOfRange`] naming `len` if it is negative.
pub fn check_length(len: isize) -> Result<usize> {
    if len < 0 {
        return Err(Error::OutOfRange(len));
    }
    Ok(len.unsigned_abs())
}

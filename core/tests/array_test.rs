//! Tests for views over reference arrays.

mod common;

use iteray_core::{Characteristics, Error, array};
use pretty_assertions::assert_eq;

// =============================================================================
// Iterators
// =============================================================================

#[test]
fn iterator_full() {
    let array = ["a", "b", "c", "d"];
    let mut it = array::iterator(&array).unwrap();
    for expected in &array {
        assert!(it.has_next());
        assert_eq!(it.try_next(), Ok(expected));
    }
    assert!(!it.has_next());
    assert_eq!(it.try_next(), Err(Error::Exhausted));
}

#[test]
fn iterator_range() {
    let array = [1, 2, 3, 4, 5];
    let mut it = array::iterator_range(&array, 1, 4).unwrap();
    assert_eq!(it.try_next(), Ok(&2));
    assert_eq!(it.try_next(), Ok(&3));
    assert_eq!(it.try_next(), Ok(&4));
    assert!(!it.has_next());
    assert_eq!(it.try_next(), Err(Error::Exhausted));
}

#[test]
fn iterator_from_start() {
    let array = vec![String::from("x"), String::from("y"), String::from("z")];
    let it = array::iterator_from(&array, 1).unwrap();
    assert_eq!(it.map(String::as_str).collect::<Vec<_>>(), ["y", "z"]);
}

#[test]
fn iterator_empty() {
    let array: [u8; 0] = [];
    let mut it = array::iterator(&array).unwrap();
    assert!(!it.has_next());
    assert_eq!(it.try_next(), Err(Error::Exhausted));
}

#[test]
fn iterator_remove_unsupported() {
    let array = [1, 2];
    let mut it = array::iterator(&array).unwrap();
    assert!(matches!(it.remove(), Err(Error::Unsupported(_))));
    assert_eq!(it.try_next(), Ok(&1));
    assert!(matches!(it.remove(), Err(Error::Unsupported(_))));
}

#[test]
fn iterator_for_each_remaining() {
    let array = [5, 6, 7, 8];
    let mut it = array::iterator_range(&array, 1, 3).unwrap();
    let mut sum = 0;
    it.for_each_remaining(|v| sum += v);
    assert_eq!(sum, 6 + 7);
    assert!(!it.has_next());
}

// =============================================================================
// Iterables
// =============================================================================

#[test]
fn iterable_yields_range_in_order() {
    let array = [1, 2, 3, 4, 5];
    for start in 0..=array.len() {
        for end in start..=array.len() {
            let view = array::iterable_range(&array, start as isize, end as isize).unwrap();
            let collected: Vec<i32> = view.iter().copied().collect();
            assert_eq!(collected, &array[start..end]);
        }
    }
}

#[test]
fn iterable_for_each_matches_cursor() {
    let array = ["p", "q", "r"];
    let view = array::iterable_from(&array, 1).unwrap();

    let mut direct = Vec::new();
    view.for_each(|s| direct.push(*s));
    let mut drained = Vec::new();
    view.iter().for_each_remaining(|s| drained.push(*s));

    assert_eq!(direct, ["q", "r"]);
    assert_eq!(direct, drained);
}

#[test]
fn iterable_cursors_are_independent() {
    let array = [1, 2, 3];
    let view = array::iterable(&array).unwrap();
    let mut a = view.iter();
    let mut b = view.iter();
    a.next();
    a.next();
    assert_eq!(b.next(), Some(&1));
    assert_eq!(a.next(), Some(&3));
    assert_eq!(b.count(), 2);
}

#[test]
fn iterable_segments() {
    let array = [1, 2, 3, 4];
    let view = array::iterable(&array).unwrap();
    let mut suffix = view.segments();

    assert_eq!(suffix.len(), 4);
    assert!(suffix.has_characteristics(Characteristics::SIZED | Characteristics::IMMUTABLE));

    let prefix = suffix.try_split().unwrap();
    assert_eq!(prefix.copied().collect::<Vec<_>>(), [1, 2]);
    assert_eq!(suffix.copied().collect::<Vec<_>>(), [3, 4]);
}

#[test]
fn iterable_views_alias_the_store() {
    let mut array = [1, 2, 3];
    {
        let view = array::iterable(&array).unwrap();
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    }
    array[0] = 10;
    let view = array::iterable(&array).unwrap();
    assert_eq!(view.iter().next(), Some(&10));
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn rejects_absent_store() {
    common::init_logging();
    let absent: Option<&[i32]> = None;
    assert_eq!(array::iterable(absent).unwrap_err(), Error::NullReference("array"));
    assert_eq!(array::iterable_from(absent, 0).unwrap_err(), Error::NullReference("array"));
    assert_eq!(array::iterable_range(absent, 0, 0).unwrap_err(), Error::NullReference("array"));
    assert_eq!(array::iterator(absent).unwrap_err(), Error::NullReference("array"));
    assert_eq!(array::iterator_from(absent, 0).unwrap_err(), Error::NullReference("array"));
    assert_eq!(array::iterator_range(absent, 0, 0).unwrap_err(), Error::NullReference("array"));
    // Null is reported before bounds.
    assert_eq!(array::iterator_range(absent, 3, 2).unwrap_err(), Error::NullReference("array"));
}

#[test]
fn rejects_invalid_bounds() {
    common::init_logging();
    let array = [1, 2, 3];
    assert_eq!(array::iterable_from(&array, -1).unwrap_err(), Error::OutOfRange(-1));
    assert_eq!(
        array::iterable_from(&array, 4).unwrap_err(),
        Error::InvalidRange { start: 4, end: 3 }
    );
    assert_eq!(
        array::iterable_range(&array, 3, 2).unwrap_err(),
        Error::InvalidRange { start: 3, end: 2 }
    );
    assert_eq!(array::iterator_range(&array, 0, 4).unwrap_err(), Error::OutOfRange(4));
    assert_eq!(array::iterator_range(&array, 1, 5).unwrap_err(), Error::OutOfRange(5));
}

#[test]
fn accepts_present_option() {
    let array = [1, 2];
    let view = array::iterable(Some(&array)).unwrap();
    assert_eq!(view.len(), 2);
}

//! Core traits and types for sortkit.
//!
//! This module defines:
//! - [`Comparator`]: The ordering capability every comparator-based algorithm is generic over.
//! - [`NaturalOrder`], [`ReverseOrder`], [`PartialOrder`]: Ready-made comparators.
//! - [`SortRange`] and [`SortConfig`]: Explicit configuration for range-scoped sorts.
//! - ValidatedRange: Internal clamped form of a [`SortRange`].

use std::cmp::Ordering;
use std::ops::RangeInclusive;

/// Default partition size at or below which divide-and-conquer sorts switch to insertion sort.
pub const DEFAULT_INSERTION_THRESHOLD: usize = 10;

/// A total preorder over `T`.
///
/// Every comparator-based algorithm in this crate takes a `Comparator` explicitly instead of
/// relying on `Ord`, so the same element type can be sorted by different keys or directions.
///
/// The comparator must be consistent and transitive. This is not checked: an inconsistent
/// comparator yields an unspecified permutation of the input, but never panics or loops.
///
/// Any closure `Fn(&T, &T) -> Ordering` is a comparator:
///
/// ```
/// use sortkit::prelude::*;
///
/// let words = vec!["ccc", "a", "bb"];
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
///
/// assert_eq!(merge_sort(&words, by_len), vec!["a", "bb", "ccc"]);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders elements by their reversed [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<T: Ord + ?Sized> Comparator<T> for ReverseOrder {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Orders elements by [`PartialOrd`], treating incomparable pairs as equal.
///
/// Suitable for floats without NaN. With NaN present the order is not a total preorder; use
/// [`numeric_sort`](crate::numeric::numeric_sort) for such data instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartialOrder;

impl<T: PartialOrd + ?Sized> Comparator<T> for PartialOrder {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }
}

/// Flips the order of the wrapped comparator.
///
/// ```
/// use sortkit::core::{NaturalOrder, Reversed};
/// use sortkit::merge_sort;
///
/// assert_eq!(merge_sort(&[1, 3, 2], Reversed(NaturalOrder)), vec![3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Inclusive index range `[start, end]` of the part of a sequence to sort.
///
/// Indices are clamped into the sequence bounds when the sort runs; a range that is empty after
/// clamping leaves the sequence untouched.
///
/// # Examples
///
/// ```
/// use sortkit::core::SortRange;
///
/// let whole = SortRange::full();
/// let middle: SortRange = (1, 3).into();
/// let same: SortRange = (1..=3).into();
///
/// assert_eq!(whole.start, 0);
/// assert_eq!(whole.end, None);
/// assert_eq!(middle, same);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SortRange {
    /// First index to sort. Defaults to `0`.
    pub start: usize,
    /// Last index to sort, inclusive. `None` means `len - 1`.
    pub end: Option<usize>,
}

impl SortRange {
    /// The whole sequence.
    pub const fn full() -> Self {
        Self {
            start: 0,
            end: None,
        }
    }

    /// The inclusive range `[start, end]`.
    pub const fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Clamps the range against a sequence of length `len`.
    pub(crate) fn validate(&self, len: usize) -> ValidatedRange {
        if len == 0 {
            return ValidatedRange {
                start: 0,
                end: 0,
                should_sort: false,
            };
        }

        let last = len - 1;
        let start = self.start.min(last);
        let end = self.end.unwrap_or(last).min(last);

        ValidatedRange {
            start,
            end,
            should_sort: start <= end,
        }
    }
}

impl From<(usize, usize)> for SortRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl From<RangeInclusive<usize>> for SortRange {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

/// Configuration shared by the quicksort family.
///
/// ```
/// use sortkit::core::{SortConfig, SortRange};
///
/// let config = SortConfig::new().with_range((2, 7)).with_threshold(4);
///
/// assert_eq!(config.range, SortRange::new(2, 7));
/// assert_eq!(config.insertion_threshold, 4);
/// assert_eq!(SortConfig::default().insertion_threshold, 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    /// Part of the sequence to sort. Defaults to the whole sequence.
    pub range: SortRange,
    /// Partitions of at most this many elements are finished with insertion sort.
    pub insertion_threshold: usize,
}

impl SortConfig {
    /// Whole sequence, [`DEFAULT_INSERTION_THRESHOLD`].
    pub const fn new() -> Self {
        Self {
            range: SortRange::full(),
            insertion_threshold: DEFAULT_INSERTION_THRESHOLD,
        }
    }

    /// Restricts sorting to `range`.
    pub fn with_range(mut self, range: impl Into<SortRange>) -> Self {
        self.range = range.into();
        self
    }

    /// Sets the partition size at or below which insertion sort takes over.
    pub const fn with_threshold(mut self, insertion_threshold: usize) -> Self {
        self.insertion_threshold = insertion_threshold;
        self
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SortRange> for SortConfig {
    fn from(range: SortRange) -> Self {
        Self::new().with_range(range)
    }
}

/// A [`SortRange`] clamped to concrete, in-bounds indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ValidatedRange {
    pub start: usize,
    pub end: usize,
    pub should_sort: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_in_bounds() {
        let v = SortRange::new(1, 3).validate(5);
        assert_eq!((v.start, v.end, v.should_sort), (1, 3, true));
    }

    #[test]
    fn test_validate_empty_sequence() {
        assert!(!SortRange::full().validate(0).should_sort);
        assert!(!SortRange::new(3, 9).validate(0).should_sort);
    }

    #[test]
    fn test_validate_clamps_end() {
        let v = SortRange::new(0, 100).validate(5);
        assert_eq!((v.start, v.end, v.should_sort), (0, 4, true));
    }

    #[test]
    fn test_validate_clamps_start() {
        let v = SortRange::new(5, 10).validate(3);
        assert_eq!((v.start, v.end, v.should_sort), (2, 2, true));
    }

    #[test]
    fn test_validate_inverted_range() {
        let v = SortRange::new(3, 1).validate(5);
        assert!(!v.should_sort);
    }

    #[test]
    fn test_comparators() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(ReverseOrder.compare(&1, &2), Ordering::Greater);
        assert_eq!(PartialOrder.compare(&f64::NAN, &1.0), Ordering::Equal);
        assert_eq!(Reversed(NaturalOrder).compare(&1, &2), Ordering::Greater);

        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        assert_eq!(by_abs.compare(&-3, &2), Ordering::Greater);
    }
}

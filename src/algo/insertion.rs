//! Bounded insertion sort.

use super::insertion_sort_range;
use crate::core::{Comparator, SortRange};

/// Sorts the elements of `data` inside `range` and returns the result as a new vector.
///
/// Elements outside the range are copied through unchanged. The sort is stable and runs in
/// O(n) on nearly sorted input, O(n²) in the worst case.
///
/// # Examples
///
/// ```
/// use sortkit::prelude::*;
///
/// let data = vec![1, 3, 2, 5, 4];
/// assert_eq!(insertion_sort(&data, NaturalOrder, (1, 3)), vec![1, 2, 3, 5, 4]);
/// assert_eq!(insertion_sort(&data, NaturalOrder, SortRange::full()), vec![1, 2, 3, 4, 5]);
/// ```
pub fn insertion_sort<T, C>(data: &[T], cmp: C, range: impl Into<SortRange>) -> Vec<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let mut result = data.to_vec();
    insertion_sort_mut(&mut result, cmp, range);
    result
}

/// Sorts the elements of `data` inside `range` in place.
///
/// Indices are clamped to the slice; a range that is empty after clamping does nothing.
pub fn insertion_sort_mut<T, C>(data: &mut [T], cmp: C, range: impl Into<SortRange>)
where
    C: Comparator<T>,
{
    let range = range.into().validate(data.len());
    if range.should_sort {
        insertion_sort_range(data, &cmp, range.start, range.end);
    }
}

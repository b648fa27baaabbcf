//! Comparator-driven sorting algorithms.
//!
//! Every algorithm comes in two forms:
//! - a copy-on-sort function (e.g. [`quick_sort`]) that leaves its input untouched and returns a
//!   new `Vec<T>`;
//! - an in-place function (e.g. [`quick_sort_mut`]) that the copying form delegates to.
//!
//! The algorithms share a small set of building blocks defined here:
//! - **Bounded Insertion Sort**: stable, range-scoped, and the base case of every
//!   divide-and-conquer algorithm.
//! - **Median-of-three**: pivot selection for the quicksort family.
//!
//! | Algorithm | Stable | Range-scoped | Stack depth |
//! |---|---|---|---|
//! | [`insertion_sort`] | yes | yes | O(1) |
//! | [`merge_sort`] | yes | no | O(log n) |
//! | [`quick_sort`] | no | yes | O(log n) |
//! | [`dual_pivot_quick_sort`] | no | yes | O(log n) |
//! | [`run_sort`] | yes | yes | O(1) |
//! | [`hybrid_sort`] | no | no | O(log n) |

use crate::core::Comparator;

pub mod dual_pivot;
pub mod hybrid;
pub mod insertion;
pub mod merge;
pub mod network;
pub mod quick;
pub mod runs;

pub use dual_pivot::{dual_pivot_quick_sort, dual_pivot_quick_sort_mut};
pub use hybrid::{hybrid_sort, hybrid_sort_mut};
pub use insertion::{insertion_sort, insertion_sort_mut};
pub use merge::{merge_sort, merge_sort_mut};
pub use network::sort_network;
pub use quick::{quick_sort, quick_sort_mut};
pub use runs::{run_sort, run_sort_mut};

/// Stable insertion sort of the inclusive range `[low, high]`.
///
/// Each element is moved left past every element that compares strictly greater, so equal
/// elements keep their relative order. Requires `high < data.len()`; a range with `high <= low`
/// is a no-op.
pub(crate) fn insertion_sort_range<T, C>(data: &mut [T], cmp: &C, low: usize, high: usize)
where
    C: Comparator<T> + ?Sized,
{
    for i in (low + 1)..=high {
        let mut hole = i;
        while hole > low && cmp.compare(&data[hole - 1], &data[i]).is_gt() {
            hole -= 1;
        }
        if hole < i {
            data[hole..=i].rotate_right(1);
        }
    }
}

/// Finishes `[low, high]` with insertion sort when it holds at most `threshold` elements.
///
/// Returns `true` if the range was sorted.
#[inline]
pub(crate) fn apply_insertion_sort_if_needed<T, C>(
    data: &mut [T],
    cmp: &C,
    low: usize,
    high: usize,
    threshold: usize,
) -> bool
where
    C: Comparator<T> + ?Sized,
{
    if high - low < threshold {
        insertion_sort_range(data, cmp, low, high);
        return true;
    }
    false
}

/// Index of the median of `data[a]`, `data[b]` and `data[c]`.
#[inline]
pub(crate) fn median_of_three<T, C>(data: &[T], cmp: &C, a: usize, b: usize, c: usize) -> usize
where
    C: Comparator<T> + ?Sized,
{
    let less = |x: usize, y: usize| cmp.compare(&data[x], &data[y]).is_lt();

    if less(a, b) {
        if less(b, c) {
            b
        } else if less(a, c) {
            c
        } else {
            a
        }
    } else if less(a, c) {
        a
    } else if less(b, c) {
        c
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NaturalOrder;

    #[test]
    fn test_insertion_range_only() {
        let mut data = [9, 4, 3, 2, 1, 0];
        insertion_sort_range(&mut data, &NaturalOrder, 1, 4);
        assert_eq!(data, [9, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_insertion_threshold_is_inclusive() {
        let mut data = [3, 1, 4, 1, 5];
        assert!(apply_insertion_sort_if_needed(&mut data, &NaturalOrder, 0, 4, 5));
        assert_eq!(data, [1, 1, 3, 4, 5]);

        let mut data = [5, 2, 8, 1, 9, 3, 7, 6];
        assert!(!apply_insertion_sort_if_needed(&mut data, &NaturalOrder, 0, 7, 3));
        assert_eq!(data, [5, 2, 8, 1, 9, 3, 7, 6]);
    }

    #[test]
    fn test_median_of_three_all_orders() {
        let perms = [
            [1, 2, 3],
            [1, 3, 2],
            [2, 1, 3],
            [2, 3, 1],
            [3, 1, 2],
            [3, 2, 1],
        ];
        for data in perms {
            let m = median_of_three(&data, &NaturalOrder, 0, 1, 2);
            assert_eq!(data[m], 2, "input {:?}", data);
        }
        let m = median_of_three(&[7, 7, 7], &NaturalOrder, 0, 1, 2);
        assert!(m < 3);
    }
}

//! Dual-pivot quicksort.
//!
//! Two pivots `p <= q` split a partition into three parts in a single pass:
//!
//! ```text
//! [ p | < p | p <= x <= q | > q | q ]
//!  low      lp            rp      high
//! ```
//!
//! Each pivot is the median of three samples spaced a third of the partition apart, one set
//! anchored at the low end and one at the high end. The two smaller parts are sorted recursively
//! and the largest is handled by the enclosing loop, which bounds the call depth to O(log n).

use super::{apply_insertion_sort_if_needed, median_of_three};
use crate::core::{Comparator, SortConfig};

/// Final positions of the two pivots after partitioning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PartitionResult {
    pub left_pivot_index: usize,
    pub right_pivot_index: usize,
}

/// Returns a copy of `data` with the configured range sorted.
///
/// Tends to beat [`quick_sort`](super::quick_sort) on inputs with many distinct values. Not
/// stable.
///
/// # Examples
///
/// ```
/// use sortkit::prelude::*;
///
/// let data = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
/// assert_eq!(
///     dual_pivot_quick_sort(&data, NaturalOrder, SortConfig::default()),
///     vec![1, 1, 2, 3, 3, 4, 5, 5, 6, 9]
/// );
///
/// let empty: Vec<i32> = Vec::new();
/// assert!(dual_pivot_quick_sort(&empty, NaturalOrder, SortConfig::default()).is_empty());
/// ```
pub fn dual_pivot_quick_sort<T, C>(data: &[T], cmp: C, config: SortConfig) -> Vec<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let mut result = data.to_vec();
    dual_pivot_quick_sort_mut(&mut result, cmp, config);
    result
}

/// Sorts the configured range of `data` in place.
pub fn dual_pivot_quick_sort_mut<T, C>(data: &mut [T], cmp: C, config: SortConfig)
where
    C: Comparator<T>,
{
    let range = config.range.validate(data.len());
    if range.should_sort {
        sort_range(
            data,
            &cmp,
            range.start,
            range.end,
            config.insertion_threshold,
        );
    }
}

fn sort_range<T, C>(data: &mut [T], cmp: &C, mut low: usize, mut high: usize, threshold: usize)
where
    C: Comparator<T>,
{
    while low < high {
        if apply_insertion_sort_if_needed(data, cmp, low, high, threshold) {
            return;
        }

        let PartitionResult {
            left_pivot_index,
            right_pivot_index,
        } = partition(data, cmp, low, high);

        // Half-open bounds of the three parts.
        let mut parts = [
            (low, left_pivot_index),
            (left_pivot_index + 1, right_pivot_index),
            (right_pivot_index + 1, high + 1),
        ];

        // Equal pivots mean the middle part only holds values equal to both.
        if cmp
            .compare(&data[left_pivot_index], &data[right_pivot_index])
            .is_eq()
        {
            parts[1] = (right_pivot_index, right_pivot_index);
        }

        let widest = parts
            .iter()
            .enumerate()
            .max_by_key(|(_, (start, end))| end - start)
            .map_or(0, |(i, _)| i);

        for (i, &(start, end)) in parts.iter().enumerate() {
            if i != widest && end - start > 1 {
                sort_range(data, cmp, start, end - 1, threshold);
            }
        }

        let (start, end) = parts[widest];
        if end - start <= 1 {
            return;
        }
        low = start;
        high = end - 1;
    }
}

/// Chooses two pivots, moves them to `low` and `high`, and partitions `[low, high]`.
///
/// Requires `low < high`.
fn partition<T, C>(data: &mut [T], cmp: &C, low: usize, high: usize) -> PartitionResult
where
    C: Comparator<T>,
{
    let gap = ((high - low) / 3).max(1);

    let left_candidate = median_of_three(data, cmp, low, low + gap, (low + 2 * gap).min(high));
    let right_candidate = median_of_three(
        data,
        cmp,
        high.saturating_sub(2 * gap).max(low),
        high - gap,
        high,
    );

    data.swap(low, left_candidate);
    // Follow the right candidate if the first swap moved it.
    let right_candidate = if right_candidate == low {
        left_candidate
    } else if right_candidate == left_candidate {
        low
    } else {
        right_candidate
    };
    data.swap(high, right_candidate);

    if cmp.compare(&data[low], &data[high]).is_gt() {
        data.swap(low, high);
    }

    let mut lt = low + 1;
    let mut gt = high - 1;
    let mut k = low + 1;

    while k <= gt {
        if cmp.compare(&data[k], &data[low]).is_lt() {
            data.swap(k, lt);
            lt += 1;
        } else if cmp.compare(&data[k], &data[high]).is_gt() {
            while k < gt && cmp.compare(&data[gt], &data[high]).is_gt() {
                gt -= 1;
            }
            data.swap(k, gt);
            gt -= 1;

            // Skipped when the scan met `k`: that element is already placed above `gt`.
            if k <= gt && cmp.compare(&data[k], &data[low]).is_lt() {
                data.swap(k, lt);
                lt += 1;
            }
        }
        k += 1;
    }

    lt -= 1;
    gt += 1;
    data.swap(low, lt);
    data.swap(high, gt);

    PartitionResult {
        left_pivot_index: lt,
        right_pivot_index: gt,
    }
}

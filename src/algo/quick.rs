//! Hybrid quicksort.
//!
//! - **Pivot**: median of the first, middle and last element of the partition.
//! - **Partition**: Hoare-style two-pointer scan.
//! - **Stack bound**: recurses into the smaller side and loops on the larger one, so the call
//!   depth stays O(log n) even on adversarial input.
//! - **Cutoff**: partitions of at most `insertion_threshold` elements use insertion sort.

use super::{apply_insertion_sort_if_needed, median_of_three};
use crate::core::{Comparator, SortConfig};

/// Returns a copy of `data` with the configured range sorted.
///
/// Not stable.
///
/// # Examples
///
/// ```
/// use sortkit::prelude::*;
///
/// let data = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// assert_eq!(
///     quick_sort(&data, NaturalOrder, SortConfig::default()),
///     vec![1, 1, 2, 3, 4, 5, 6, 9]
/// );
///
/// let config = SortConfig::new().with_range((0, 3)).with_threshold(2);
/// assert_eq!(quick_sort(&data, NaturalOrder, config), vec![1, 1, 3, 4, 5, 9, 2, 6]);
/// ```
pub fn quick_sort<T, C>(data: &[T], cmp: C, config: SortConfig) -> Vec<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let mut result = data.to_vec();
    quick_sort_mut(&mut result, cmp, config);
    result
}

/// Sorts the configured range of `data` in place.
pub fn quick_sort_mut<T, C>(data: &mut [T], cmp: C, config: SortConfig)
where
    T: Clone,
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
    T: Clone,
    C: Comparator<T>,
{
    while low < high {
        if apply_insertion_sort_if_needed(data, cmp, low, high, threshold) {
            return;
        }

        // `partition` returns `high` only when the pivot is the largest value, so splitting at
        // `high - 1` is still a valid partition and guarantees progress.
        let split = partition(data, cmp, low, high).min(high - 1);

        if split + 1 - low < high - split {
            sort_range(data, cmp, low, split, threshold);
            low = split + 1;
        } else {
            sort_range(data, cmp, split + 1, high, threshold);
            high = split;
        }
    }
}

/// Hoare partition of `[low, high]` around the median-of-three value.
///
/// Returns `split` such that every element of `[low, split]` is `<=` the pivot and every element
/// of `[split + 1, high]` is `>=` the pivot.
fn partition<T, C>(data: &mut [T], cmp: &C, low: usize, high: usize) -> usize
where
    T: Clone,
    C: Comparator<T>,
{
    let mid = low + (high - low) / 2;
    let pivot = data[median_of_three(data, cmp, low, mid, high)].clone();

    let mut left = low;
    let mut right = high;

    loop {
        while left < high && cmp.compare(&data[left], &pivot).is_lt() {
            left += 1;
        }
        while right > low && cmp.compare(&data[right], &pivot).is_gt() {
            right -= 1;
        }

        if left >= right {
            return right;
        }

        data.swap(left, right);
        left += 1;
        right -= 1;
    }
}

//! General-purpose hybrid sort: sorting networks, insertion sort and introsort.
//!
//! - **Tiny inputs** (at most 5 elements): [`sort_network`](super::sort_network).
//! - **Small partitions** (at most [`INSERTION_THRESHOLD`] elements): insertion sort.
//! - **Large partitions**: quicksort with a three-way partition, so runs of equal keys are
//!   settled in one pass. The pivot is a median of three below [`NINTHER_THRESHOLD`] elements and
//!   a ninther (median of three medians) above it.
//! - **Depth limit**: after `2 * floor(log2(n))` partitioning rounds the partition falls back to
//!   heapsort, which caps the worst case at O(n log n).

use super::{insertion_sort_range, median_of_three, sort_network};
use crate::core::Comparator;
use std::cmp::Ordering;

const NETWORK_THRESHOLD: usize = 5;
const INSERTION_THRESHOLD: usize = 24;
const NINTHER_THRESHOLD: usize = 128;

/// Returns a sorted copy of `data`.
///
/// Not stable.
///
/// # Examples
///
/// ```
/// use sortkit::prelude::*;
///
/// let data: Vec<u32> = (0..500).map(|i| (i * 7919) % 500).collect();
/// let sorted = hybrid_sort(&data, NaturalOrder);
///
/// assert_eq!(sorted, (0..500).collect::<Vec<_>>());
/// ```
pub fn hybrid_sort<T, C>(data: &[T], cmp: C) -> Vec<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let mut result = data.to_vec();
    hybrid_sort_mut(&mut result, cmp);
    result
}

/// Sorts `data` in place.
pub fn hybrid_sort_mut<T, C>(data: &mut [T], cmp: C)
where
    T: Clone,
    C: Comparator<T>,
{
    let len = data.len();
    if len <= 1 {
        return;
    }
    if len <= NETWORK_THRESHOLD {
        sort_network(data, &cmp, 0, len - 1);
        return;
    }
    if len <= INSERTION_THRESHOLD {
        insertion_sort_range(data, &cmp, 0, len - 1);
        return;
    }

    let depth_limit = 2 * len.ilog2() as usize;
    introsort(data, &cmp, 0, len - 1, depth_limit);
}

fn introsort<T, C>(data: &mut [T], cmp: &C, mut low: usize, mut high: usize, mut depth_limit: usize)
where
    T: Clone,
    C: Comparator<T>,
{
    while high > low {
        if high - low < INSERTION_THRESHOLD {
            insertion_sort_range(data, cmp, low, high);
            return;
        }

        if depth_limit == 0 {
            heap_sort(&mut data[low..=high], cmp);
            return;
        }
        depth_limit -= 1;

        let pivot = choose_pivot(data, cmp, low, high);
        let (lt, gt) = partition_three_way(data, cmp, low, high, pivot);

        // `[low, lt)` < pivot, `[lt, gt)` == pivot, `[gt, high]` > pivot.
        if lt - low < high + 1 - gt {
            if lt > low {
                introsort(data, cmp, low, lt - 1, depth_limit);
            }
            low = gt;
        } else {
            if gt <= high {
                introsort(data, cmp, gt, high, depth_limit);
            }
            if lt == low {
                return;
            }
            high = lt - 1;
        }
    }
}

fn choose_pivot<T, C>(data: &[T], cmp: &C, low: usize, high: usize) -> usize
where
    C: Comparator<T>,
{
    let len = high - low + 1;
    let mid = low + len / 2;

    if len < NINTHER_THRESHOLD {
        return median_of_three(data, cmp, low, mid, high);
    }

    let gap = len / 8;
    let m1 = median_of_three(data, cmp, low, low + gap, low + 2 * gap);
    let m2 = median_of_three(data, cmp, mid - gap, mid, mid + gap);
    let m3 = median_of_three(data, cmp, high - 2 * gap, high - gap, high);
    median_of_three(data, cmp, m1, m2, m3)
}

/// Dijkstra three-way partition of `[low, high]` around `data[pivot]`.
///
/// Returns `(lt, gt)` with `[low, lt)` less than, `[lt, gt)` equal to and `[gt, high]` greater
/// than the pivot.
fn partition_three_way<T, C>(
    data: &mut [T],
    cmp: &C,
    low: usize,
    high: usize,
    pivot: usize,
) -> (usize, usize)
where
    T: Clone,
    C: Comparator<T>,
{
    let pivot = data[pivot].clone();
    let mut lt = low;
    let mut i = low;
    let mut gt = high + 1;

    while i < gt {
        match cmp.compare(&data[i], &pivot) {
            Ordering::Less => {
                data.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                data.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }

    (lt, gt)
}

/// In-place heapsort of the whole slice.
fn heap_sort<T, C>(data: &mut [T], cmp: &C)
where
    C: Comparator<T>,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    for root in (0..len / 2).rev() {
        sift_down(data, cmp, root, len);
    }

    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(data, cmp, 0, end);
    }
}

fn sift_down<T, C>(data: &mut [T], cmp: &C, mut root: usize, end: usize)
where
    C: Comparator<T>,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && cmp.compare(&data[child], &data[child + 1]).is_lt() {
            child += 1;
        }
        if !cmp.compare(&data[root], &data[child]).is_lt() {
            break;
        }
        data.swap(root, child);
        root = child;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NaturalOrder;

    #[test]
    fn test_heap_sort() {
        let mut data = [5, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9];
        heap_sort(&mut data, &NaturalOrder);
        assert_eq!(data, [1, 1, 2, 3, 4, 5, 5, 5, 5, 6, 7, 8, 9, 9, 9]);
    }

    #[test]
    fn test_partition_three_way() {
        let mut data = [3, 5, 3, 1, 3, 4, 2, 3];
        let high = data.len() - 1;
        let (lt, gt) = partition_three_way(&mut data, &NaturalOrder, 0, high, 0);

        assert!(data[..lt].iter().all(|&x| x < 3));
        assert!(data[lt..gt].iter().all(|&x| x == 3));
        assert!(data[gt..].iter().all(|&x| x > 3));
        assert_eq!(gt - lt, 4);
    }

    #[test]
    fn test_depth_limit_falls_back_to_heap_sort() {
        let data: Vec<i32> = (0..300).rev().collect();
        let mut sorted = data.clone();
        introsort(&mut sorted, &NaturalOrder, 0, data.len() - 1, 0);
        assert_eq!(sorted, (0..300).collect::<Vec<_>>());
    }

    #[test]
    fn test_ninther_path() {
        let data: Vec<u64> = (0..4096u64).map(|i| i.wrapping_mul(0x9E37_79B9) % 1000).collect();
        let mut expected = data.clone();
        expected.sort_unstable();
        assert_eq!(hybrid_sort(&data, NaturalOrder), expected);
    }
}

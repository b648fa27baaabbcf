//! Run-based hybrid sort in the style of TimSort.
//!
//! 1. Computes `min_run` so that the number of runs is close to a power of two.
//! 2. Insertion-sorts every `min_run`-sized chunk of the range.
//! 3. Merges adjacent runs in passes of doubling width until one run remains.

use super::insertion_sort_range;
use crate::core::{Comparator, SortRange};

/// Ranges shorter than this are sorted as a single run.
const MIN_MERGE: usize = 32;

/// Returns a copy of `data` with `range` sorted.
///
/// The sort is stable.
///
/// # Examples
///
/// ```
/// use sortkit::prelude::*;
///
/// let data = vec![5, 4, 3, 2, 1];
/// assert_eq!(run_sort(&data, NaturalOrder, (1, 3)), vec![5, 2, 3, 4, 1]);
/// ```
pub fn run_sort<T, C>(data: &[T], cmp: C, range: impl Into<SortRange>) -> Vec<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let mut result = data.to_vec();
    run_sort_mut(&mut result, cmp, range);
    result
}

/// Sorts `range` of `data` in place.
pub fn run_sort_mut<T, C>(data: &mut [T], cmp: C, range: impl Into<SortRange>)
where
    T: Clone,
    C: Comparator<T>,
{
    let range = range.into().validate(data.len());
    if range.should_sort && range.start < range.end {
        sort_range(data, &cmp, range.start, range.end);
    }
}

/// Halves `n` until it drops below [`MIN_MERGE`], adding one if any shifted-out bit was set.
pub(crate) fn min_run_length(mut n: usize) -> usize {
    let mut r = 0;
    while n >= MIN_MERGE {
        r |= n & 1;
        n >>= 1;
    }
    n + r
}

fn sort_range<T, C>(data: &mut [T], cmp: &C, start: usize, end: usize)
where
    T: Clone,
    C: Comparator<T>,
{
    let n = end - start + 1;
    let min_run = min_run_length(n);

    let mut run_start = start;
    while run_start <= end {
        let run_end = (run_start + min_run - 1).min(end);
        insertion_sort_range(data, cmp, run_start, run_end);
        run_start += min_run;
    }

    let mut buffer = Vec::with_capacity(n.min(min_run.saturating_mul(2)));
    let mut width = min_run;
    while width < n {
        let mut left = start;
        while left <= end {
            let mid = left + width - 1;
            let right = (left + 2 * width - 1).min(end);
            if mid < right {
                merge_runs(data, cmp, left, mid, right, &mut buffer);
            }
            left += 2 * width;
        }
        width *= 2;
    }
}

/// Merges the sorted runs `[left, mid]` and `[mid + 1, right]`.
///
/// Only the left run is copied out; the right run is consumed in place. On ties the left run
/// wins, which keeps the merge stable.
fn merge_runs<T, C>(
    data: &mut [T],
    cmp: &C,
    left: usize,
    mid: usize,
    right: usize,
    buffer: &mut Vec<T>,
) where
    T: Clone,
    C: Comparator<T>,
{
    // Already in order.
    if !cmp.compare(&data[mid + 1], &data[mid]).is_lt() {
        return;
    }

    buffer.clear();
    buffer.extend_from_slice(&data[left..=mid]);

    let mut i = 0;
    let mut j = mid + 1;
    let mut out = left;

    while i < buffer.len() && j <= right {
        if cmp.compare(&data[j], &buffer[i]).is_lt() {
            // `out < j`, and every slot in `[out, j)` has been copied out already.
            data.swap(out, j);
            j += 1;
        } else {
            data[out] = buffer[i].clone();
            i += 1;
        }
        out += 1;
    }

    let rest = buffer.len() - i;
    data[out..out + rest].clone_from_slice(&buffer[i..]);
}

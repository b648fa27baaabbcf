//! Iterative quicksort for NaN-free numeric slices.
//!
//! Pending partitions live on an explicit stack of half-open ranges instead of the call stack.
//! The larger side of every split is pushed first, so the smaller side is processed next and the
//! stack holds at most O(log n) entries.

use num_traits::Float;

/// Partitions of at most this many elements are finished with insertion sort.
const INSERTION_CUTOFF: usize = 16;

/// Sorts `data`, which must not contain NaN.
pub(super) fn sort<F: Float>(data: &mut [F], ascending: bool) {
    let before = |a: F, b: F| if ascending { a < b } else { a > b };

    let mut stack = vec![(0, data.len())];

    while let Some((start, end)) = stack.pop() {
        if end - start <= INSERTION_CUTOFF {
            insertion_sort(&mut data[start..end], before);
            continue;
        }

        let pivot = start + partition(&mut data[start..end], before);
        let left = (start, pivot);
        let right = (pivot + 1, end);

        if pivot - start > end - (pivot + 1) {
            stack.push(left);
            stack.push(right);
        } else {
            stack.push(right);
            stack.push(left);
        }
    }
}

fn insertion_sort<F: Float>(data: &mut [F], before: impl Fn(F, F) -> bool) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && before(key, data[j - 1]) {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

/// Partitions `data` around a median-of-three pivot and returns the pivot's final index.
///
/// Requires at least three elements. The sorted sample leaves sentinels at both ends, so the
/// inner scans need no bounds checks.
fn partition<F: Float>(data: &mut [F], before: impl Fn(F, F) -> bool) -> usize {
    let high = data.len() - 1;
    let mid = high / 2;

    if before(data[mid], data[0]) {
        data.swap(0, mid);
    }
    if before(data[high], data[0]) {
        data.swap(0, high);
    }
    if before(data[high], data[mid]) {
        data.swap(mid, high);
    }

    // Park the pivot next to the upper sentinel.
    data.swap(mid, high - 1);
    let pivot = data[high - 1];

    let mut i = 0;
    let mut j = high - 1;
    loop {
        i += 1;
        while before(data[i], pivot) {
            i += 1;
        }
        j -= 1;
        while before(pivot, data[j]) {
            j -= 1;
        }
        if i >= j {
            break;
        }
        data.swap(i, j);
    }

    data.swap(i, high - 1);
    i
}

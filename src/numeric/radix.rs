//! LSD radix sort, base 256, for integral values.
//!
//! Negative values are sorted by magnitude in their own bucket, so every key is a non-negative
//! `u64`. The three groups are then stitched together:
//!
//! - ascending: negatives by descending magnitude, zeros, positives by ascending magnitude;
//! - descending: the mirror image.

use cuneiform::cuneiform;
use num_traits::Float;
use std::mem;

/// Number of buckets per digit pass (one byte).
const RADIX_BUCKETS: usize = 256;
const DIGIT_BITS: u32 = 8;

// Cache-aligned counts struct.
#[cuneiform]
struct RadixCounts {
    data: [usize; RADIX_BUCKETS],
}

/// Values paired with their magnitude keys.
struct Group<F> {
    keys: Vec<u64>,
    values: Vec<F>,
}

impl<F: Float> Group<F> {
    fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    fn push(&mut self, key: u64, value: F) {
        self.keys.push(key);
        self.values.push(value);
    }
}

/// Sorts integral `data` in place.
///
/// Returns `false`, leaving `data` untouched, if some magnitude does not fit in a `u64`.
pub(super) fn sort<F: Float>(data: &mut [F], ascending: bool) -> bool {
    let mut negative = Group::new();
    let mut positive = Group::new();
    let mut zeros = Vec::new();

    for &value in data.iter() {
        let Some(key) = value.abs().to_u64() else {
            return false;
        };
        if key == 0 {
            zeros.push(value);
        } else if value < F::zero() {
            negative.push(key, value);
        } else {
            positive.push(key, value);
        }
    }

    sort_by_key(&mut negative);
    sort_by_key(&mut positive);

    let (first, last) = if ascending {
        (negative.values, positive.values)
    } else {
        (positive.values, negative.values)
    };

    // Both groups are in ascending magnitude; the first group is emitted reversed.
    let ordered = first
        .iter()
        .rev()
        .chain(zeros.iter())
        .chain(last.iter());
    data.iter_mut()
        .zip(ordered)
        .for_each(|(slot, &value)| *slot = value);

    true
}

/// Stable LSD radix sort of a group by its keys.
///
/// 1. Counts the frequency of each byte value of the current digit.
/// 2. Computes prefix sums to find the first output slot of each bucket.
/// 3. Scatters keys and values into scratch buffers, then swaps buffers.
///
/// Stops after the highest non-zero digit of the largest key.
fn sort_by_key<F: Float>(group: &mut Group<F>) {
    let len = group.keys.len();
    if len <= 1 {
        return;
    }

    let max = group.keys.iter().copied().max().unwrap_or(0);
    let mut scratch_keys = vec![0u64; len];
    let mut scratch_values = group.values.clone();

    let mut shift = 0;
    while shift < u64::BITS && max >> shift > 0 {
        let mut counts = RadixCounts {
            data: [0; RADIX_BUCKETS],
        };
        let counts = &mut counts.data;

        group
            .keys
            .iter()
            .for_each(|&key| counts[digit(key, shift)] += 1);

        let mut offsets = [0usize; RADIX_BUCKETS];
        let mut sum = 0;
        offsets
            .iter_mut()
            .zip(counts.iter())
            .for_each(|(offset, &count)| {
                *offset = sum;
                sum += count;
            });

        group
            .keys
            .iter()
            .zip(group.values.iter())
            .for_each(|(&key, &value)| {
                let bucket = digit(key, shift);
                let pos = offsets[bucket];
                scratch_keys[pos] = key;
                scratch_values[pos] = value;
                offsets[bucket] += 1;
            });

        mem::swap(&mut group.keys, &mut scratch_keys);
        mem::swap(&mut group.values, &mut scratch_values);
        shift += DIGIT_BITS;
    }
}

#[inline(always)]
fn digit(key: u64, shift: u32) -> usize {
    ((key >> shift) & 0xff) as usize
}

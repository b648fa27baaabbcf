//! Counting sort for integral values with a small span.

use num_traits::Float;

/// Sorts `data` by distributing every value into a table with one slot per integer between
/// `min` and the maximum.
///
/// Returns `false`, leaving `data` untouched, if some value cannot be mapped to a table slot.
pub(super) fn sort<F: Float>(data: &mut [F], min: F, ascending: bool) -> bool {
    let Some(keys) = data
        .iter()
        .map(|&value| (value - min).to_usize())
        .collect::<Option<Vec<usize>>>()
    else {
        return false;
    };

    let span = keys.iter().copied().max().unwrap_or(0);
    let mut slots = vec![0usize; span + 1];
    keys.iter().for_each(|&key| slots[key] += 1);

    // Counts become the first output position of each value.
    let mut next = 0;
    let place = |slot: &mut usize| {
        let count = *slot;
        *slot = next;
        next += count;
    };
    if ascending {
        slots.iter_mut().for_each(place);
    } else {
        slots.iter_mut().rev().for_each(place);
    }

    let source = data.to_vec();
    source.iter().zip(&keys).for_each(|(&value, &key)| {
        data[slots[key]] = value;
        slots[key] += 1;
    });

    true
}

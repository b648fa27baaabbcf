//! Top-down merge sort.
//!
//! Each level of the recursion splits its owned vector in two, sorts both halves and merges them
//! into a freshly allocated vector. Elements are moved, never cloned, after the initial copy.

use crate::core::Comparator;
use std::mem;

/// Returns a sorted copy of `data`.
///
/// The sort is stable: on ties the merge always takes from the left half first.
///
/// # Examples
///
/// ```
/// use sortkit::prelude::*;
///
/// let pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// let sorted = merge_sort(&pairs, |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
///
/// assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn merge_sort<T, C>(data: &[T], cmp: C) -> Vec<T>
where
    T: Clone,
    C: Comparator<T>,
{
    sort_owned(data.to_vec(), &cmp)
}

/// Sorts `data` in place.
///
/// If `cmp` panics, `data` is left empty.
pub fn merge_sort_mut<T, C>(data: &mut Vec<T>, cmp: C)
where
    C: Comparator<T>,
{
    let owned = mem::take(data);
    *data = sort_owned(owned, &cmp);
}

fn sort_owned<T, C>(mut data: Vec<T>, cmp: &C) -> Vec<T>
where
    C: Comparator<T>,
{
    if data.len() <= 1 {
        return data;
    }

    let right = data.split_off(data.len() / 2);
    let left = sort_owned(data, cmp);
    let right = sort_owned(right, cmp);
    merge(left, right, cmp)
}

/// Stable linear merge of two sorted vectors.
fn merge<T, C>(left: Vec<T>, right: Vec<T>, cmp: &C) -> Vec<T>
where
    C: Comparator<T>,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp.compare(r, l).is_lt(),
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NaturalOrder;

    #[test]
    fn test_merge_prefers_left_on_ties() {
        let left = vec![(1, 'l'), (3, 'l')];
        let right = vec![(1, 'r'), (2, 'r')];
        let merged = merge(left, right, &|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        assert_eq!(merged, vec![(1, 'l'), (1, 'r'), (2, 'r'), (3, 'l')]);
    }

    #[test]
    fn test_merge_sort_mut_moves_without_clone() {
        // `String` is moved through the recursion rather than cloned.
        let mut data: Vec<String> = ["pear", "fig", "apple"].iter().map(|s| s.to_string()).collect();
        merge_sort_mut(&mut data, NaturalOrder);
        assert_eq!(data, vec!["apple", "fig", "pear"]);
    }
}

//! Fixed sorting networks for two to five elements.

use crate::core::Comparator;

/// Sorts `data[low..=high]` with an optimal compare-exchange network.
///
/// Handles ranges of 2 to 5 elements. Any other length is left untouched, so callers must pick
/// a different algorithm for larger ranges. Not stable.
///
/// # Examples
///
/// ```
/// use sortkit::prelude::*;
///
/// let mut data = [0, 5, 3, 4, 1, 2, 0];
/// sort_network(&mut data, &NaturalOrder, 1, 5);
/// assert_eq!(data, [0, 1, 2, 3, 4, 5, 0]);
/// ```
pub fn sort_network<T, C>(data: &mut [T], cmp: &C, low: usize, high: usize)
where
    C: Comparator<T> + ?Sized,
{
    if high < low {
        return;
    }

    let pairs: &[(usize, usize)] = match high - low + 1 {
        2 => &[(0, 1)],
        3 => &[(0, 1), (1, 2), (0, 1)],
        4 => &[(0, 2), (1, 3), (0, 1), (2, 3), (1, 2)],
        5 => &[
            (0, 3),
            (1, 4),
            (0, 2),
            (1, 3),
            (0, 1),
            (2, 4),
            (1, 2),
            (3, 4),
            (2, 3),
        ],
        _ => return,
    };

    for &(a, b) in pairs {
        compare_exchange(data, cmp, low + a, low + b);
    }
}

#[inline(always)]
fn compare_exchange<T, C>(data: &mut [T], cmp: &C, a: usize, b: usize)
where
    C: Comparator<T> + ?Sized,
{
    if cmp.compare(&data[a], &data[b]).is_gt() {
        data.swap(a, b);
    }
}

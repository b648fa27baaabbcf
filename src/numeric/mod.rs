//! Adaptive numeric sort.
//!
//! [`numeric_sort`] inspects the input once, producing a [`NumericClassification`], and then
//! routes to the cheapest strategy that applies. The first matching rule wins:
//!
//! | Rule | Strategy |
//! |---|---|
//! | length ≤ 1 | [`NumericStrategy::Trivial`]: nothing to do |
//! | length = 2 | [`NumericStrategy::Pair`]: one compare-and-swap |
//! | length = 3 | [`NumericStrategy::Triple`]: three compare-and-swaps |
//! | any NaN | [`NumericStrategy::NanSegregated`]: numbers sorted, NaNs moved to the end |
//! | integral, `max - min < min(2n, 1_000_000)` | [`NumericStrategy::Counting`]: O(n + k) |
//! | integral, n > 100, magnitudes fit `u64` | [`NumericStrategy::Radix`]: LSD base 256 |
//! | otherwise | [`NumericStrategy::Quick`]: iterative quicksort |
//!
//! NaN always sorts last, in both directions and at every length.

use num_traits::Float;

mod counting;
mod quick;
mod radix;

/// Value spans at or above this never use counting sort.
pub const COUNTING_MAX_SPAN: usize = 1_000_000;

/// Integral inputs must be longer than this to use radix sort.
pub const RADIX_MIN_LEN: usize = 100;

/// Strategy chosen by the dispatcher for a given input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericStrategy {
    Trivial,
    Pair,
    Triple,
    NanSegregated,
    Counting,
    Radix,
    Quick,
}

/// Facts about a numeric sequence that drive strategy selection.
///
/// Computed in one pass and never cached between calls.
///
/// # Examples
///
/// ```
/// use sortkit::numeric::{NumericClassification, NumericStrategy};
///
/// let c = NumericClassification::of(&[4.0, -1.0, 2.0, 2.0, 7.0]);
/// assert_eq!((c.min, c.max), (-1.0, 7.0));
/// assert!(c.all_integral && !c.has_nan);
/// assert_eq!(c.strategy(), NumericStrategy::Counting);
///
/// let c = NumericClassification::of(&[0.5, 0.25, 1.5, 0.75]);
/// assert_eq!(c.strategy(), NumericStrategy::Quick);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericClassification<F> {
    pub len: usize,
    /// Smallest non-NaN value, `+inf` if there is none.
    pub min: F,
    /// Largest non-NaN value, `-inf` if there is none.
    pub max: F,
    /// Every non-NaN value is finite with no fractional part.
    pub all_integral: bool,
    pub has_nan: bool,
}

impl<F: Float> NumericClassification<F> {
    pub fn of(data: &[F]) -> Self {
        let mut min = F::infinity();
        let mut max = F::neg_infinity();
        let mut all_integral = true;
        let mut has_nan = false;

        for &value in data {
            if value.is_nan() {
                has_nan = true;
                continue;
            }
            min = min.min(value);
            max = max.max(value);
            // `fract` of an infinity is NaN, so infinities are not integral.
            if all_integral && value.fract() != F::zero() {
                all_integral = false;
            }
        }

        Self {
            len: data.len(),
            min,
            max,
            all_integral,
            has_nan,
        }
    }

    /// The strategy [`numeric_sort`] uses for the classified input.
    pub fn strategy(&self) -> NumericStrategy {
        match self.len {
            0 | 1 => NumericStrategy::Trivial,
            2 => NumericStrategy::Pair,
            3 => NumericStrategy::Triple,
            _ if self.has_nan => NumericStrategy::NanSegregated,
            _ if self.counting_applicable() => NumericStrategy::Counting,
            _ if self.radix_applicable() => NumericStrategy::Radix,
            _ => NumericStrategy::Quick,
        }
    }

    fn counting_applicable(&self) -> bool {
        if !self.all_integral || self.len == 0 {
            return false;
        }
        let span = self.max - self.min;
        let below = |limit: usize| F::from(limit).is_some_and(|limit| span < limit);
        below(self.len.saturating_mul(2)) && below(COUNTING_MAX_SPAN)
    }

    fn radix_applicable(&self) -> bool {
        self.all_integral
            && self.len > RADIX_MIN_LEN
            && self.min.abs().to_u64().is_some()
            && self.max.abs().to_u64().is_some()
    }
}

/// Returns a sorted copy of `data`.
///
/// `ascending = false` sorts from largest to smallest. NaN values always end up last.
///
/// # Examples
///
/// ```
/// use sortkit::numeric_sort;
///
/// assert_eq!(numeric_sort(&[-5.0, -2.0, 0.0, 3.0, 1.0], false), vec![3.0, 1.0, 0.0, -2.0, -5.0]);
///
/// let sorted = numeric_sort(&[3.0, 1.0, f64::NAN, 2.0], true);
/// assert_eq!(&sorted[..3], &[1.0, 2.0, 3.0]);
/// assert!(sorted[3].is_nan());
/// ```
pub fn numeric_sort<F: Float>(data: &[F], ascending: bool) -> Vec<F> {
    let mut result = data.to_vec();
    numeric_sort_mut(&mut result, ascending);
    result
}

/// Sorts `data` in place. See [`numeric_sort`].
pub fn numeric_sort_mut<F: Float>(data: &mut [F], ascending: bool) {
    let classification = NumericClassification::of(data);

    match classification.strategy() {
        NumericStrategy::Trivial => {}
        NumericStrategy::Pair => compare_and_swap(data, 0, 1, ascending),
        NumericStrategy::Triple => {
            compare_and_swap(data, 0, 1, ascending);
            compare_and_swap(data, 1, 2, ascending);
            compare_and_swap(data, 0, 1, ascending);
        }
        NumericStrategy::NanSegregated => {
            let numbers = move_nan_to_end(data);
            quick::sort(&mut data[..numbers], ascending);
        }
        NumericStrategy::Counting => {
            if !counting::sort(data, classification.min, ascending) {
                quick::sort(data, ascending);
            }
        }
        NumericStrategy::Radix => {
            if !radix::sort(data, ascending) {
                quick::sort(data, ascending);
            }
        }
        NumericStrategy::Quick => quick::sort(data, ascending),
    }
}

/// `true` if `a` belongs after `b`. NaN belongs after every number in both directions.
#[inline]
fn out_of_order<F: Float>(a: F, b: F, ascending: bool) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (true, b_nan) => !b_nan,
        (false, true) => false,
        (false, false) if ascending => a > b,
        (false, false) => a < b,
    }
}

#[inline]
fn compare_and_swap<F: Float>(data: &mut [F], a: usize, b: usize, ascending: bool) {
    if out_of_order(data[a], data[b], ascending) {
        data.swap(a, b);
    }
}

/// Moves every NaN behind every number, keeping the numbers in order.
///
/// Returns the number of non-NaN values.
fn move_nan_to_end<F: Float>(data: &mut [F]) -> usize {
    let mut write = 0;
    for read in 0..data.len() {
        if !data[read].is_nan() {
            data.swap(write, read);
            write += 1;
        }
    }
    write
}

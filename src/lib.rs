//! # sortkit
//!
//! `sortkit` is a comparator-driven sorting engine: a family of classic and hybrid sorting
//! algorithms sharing one [`Comparator`] abstraction, plus an adaptive sort for floating-point
//! data that picks between counting sort, radix sort and quicksort by looking at the input.
//!
//! ## Key Features
//!
//! - **Explicit comparators**: Every algorithm is generic over [`Comparator`], implemented by
//!   [`NaturalOrder`], [`ReverseOrder`], [`PartialOrder`] and any `Fn(&T, &T) -> Ordering`.
//! - **Copy-on-sort by default**: [`quick_sort`] and friends return a new `Vec<T>` and never touch
//!   their input. The `*_mut` variants sort in place.
//! - **Range-scoped sorting**: Insertion sort, both quicksorts and the run-based sort accept a
//!   [`SortRange`]; elements outside it are left exactly as they were.
//! - **Bounded stack**: The quicksorts recurse only into the smaller partition, and the numeric
//!   quicksort uses an explicit stack, so adversarial input cannot exhaust the call stack.
//! - **Adaptive numeric sort**: [`numeric_sort`] handles `f32` and `f64`, places NaN last in both
//!   directions, and runs in O(n + k) on integral data with a small value span.
//!
//! ## Usage
//!
//! ### Comparator sorts
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let data = vec![3, 1, 4, 1, 5, 9, 2, 6];
//!
//! assert_eq!(quick_sort(&data, NaturalOrder, SortConfig::default()), vec![1, 1, 2, 3, 4, 5, 6, 9]);
//! assert_eq!(run_sort(&data, ReverseOrder, SortRange::full()), vec![9, 6, 5, 4, 3, 2, 1, 1]);
//!
//! // Only indices 1..=3 are sorted.
//! assert_eq!(insertion_sort(&data, NaturalOrder, (1, 3)), vec![3, 1, 1, 4, 5, 9, 2, 6]);
//! ```
//!
//! ### Custom ordering
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! let users = vec![
//!     User { name: "Carol", age: 41 },
//!     User { name: "Alice", age: 29 },
//!     User { name: "Bob", age: 29 },
//! ];
//!
//! // Stable: Alice stays ahead of Bob.
//! let by_age = merge_sort(&users, |a: &User, b: &User| a.age.cmp(&b.age));
//! let names: Vec<_> = by_age.iter().map(|u| u.name).collect();
//! assert_eq!(names, ["Alice", "Bob", "Carol"]);
//! ```
//!
//! ### Numeric data
//!
//! ```rust
//! use sortkit::numeric_sort;
//!
//! let sorted = numeric_sort(&[2.5, f64::NAN, -1.0, 7.25], false);
//! assert_eq!(&sorted[..3], &[7.25, 2.5, -1.0]);
//! assert!(sorted[3].is_nan());
//! ```
//!
//! ## Choosing an Algorithm
//!
//! - Need stability: [`merge_sort`] or [`run_sort`].
//! - General purpose, unstable: [`hybrid_sort`].
//! - Partial ranges with a tunable insertion cutoff: [`quick_sort`] or [`dual_pivot_quick_sort`].
//! - `f32`/`f64` data, possibly with NaN: [`numeric_sort`].
//!
//! No algorithm here allocates more than O(n) scratch memory, and the whole input must fit in
//! memory.

pub mod algo;
pub mod core;
pub mod numeric;

pub use crate::algo::{
    dual_pivot_quick_sort, dual_pivot_quick_sort_mut, hybrid_sort, hybrid_sort_mut,
    insertion_sort, insertion_sort_mut, merge_sort, merge_sort_mut, quick_sort, quick_sort_mut,
    run_sort, run_sort_mut, sort_network,
};
pub use crate::core::{
    Comparator, DEFAULT_INSERTION_THRESHOLD, NaturalOrder, PartialOrder, ReverseOrder, Reversed,
    SortConfig, SortRange,
};
pub use crate::numeric::{NumericClassification, NumericStrategy, numeric_sort, numeric_sort_mut};

pub mod prelude {
    pub use crate::algo::{
        dual_pivot_quick_sort, dual_pivot_quick_sort_mut, hybrid_sort, hybrid_sort_mut,
        insertion_sort, insertion_sort_mut, merge_sort, merge_sort_mut, quick_sort,
        quick_sort_mut, run_sort, run_sort_mut, sort_network,
    };
    pub use crate::core::{
        Comparator, NaturalOrder, PartialOrder, ReverseOrder, SortConfig, SortRange,
    };
    pub use crate::numeric::{numeric_sort, numeric_sort_mut};
}

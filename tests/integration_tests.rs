use sortkit::Reversed;
use sortkit::prelude::*;

fn numeric_ascending(a: &i32, b: &i32) -> std::cmp::Ordering {
    a.cmp(b)
}

#[test]
fn test_quick_sort_basic() {
    let input = vec![3, 1, 4, 1, 5, 9, 2, 6];
    let sorted = quick_sort(&input, numeric_ascending, SortConfig::default());
    assert_eq!(sorted, vec![1, 1, 2, 3, 4, 5, 6, 9]);
}

#[test]
fn test_dual_pivot_empty() {
    let input: Vec<i32> = vec![];
    assert!(dual_pivot_quick_sort(&input, numeric_ascending, SortConfig::default()).is_empty());
}

#[test]
fn test_run_sort_range() {
    let input = vec![5, 4, 3, 2, 1];
    assert_eq!(
        run_sort(&input, numeric_ascending, SortRange::new(1, 3)),
        vec![5, 2, 3, 4, 1]
    );
}

#[test]
fn test_insertion_sort_range() {
    let input = vec![1, 3, 2, 5, 4];
    assert_eq!(
        insertion_sort(&input, numeric_ascending, (1, 3)),
        vec![1, 2, 3, 5, 4]
    );
}

#[test]
fn test_numeric_nan_last() {
    let sorted = numeric_sort(&[3.0, 1.0, f64::NAN, 2.0], true);
    assert_eq!(&sorted[..3], &[1.0, 2.0, 3.0]);
    assert!(sorted[3].is_nan());
}

#[test]
fn test_numeric_descending() {
    assert_eq!(
        numeric_sort(&[-5.0, -2.0, 0.0, 3.0, 1.0], false),
        vec![3.0, 1.0, 0.0, -2.0, -5.0]
    );
}

#[test]
fn test_input_not_mutated() {
    let input = vec![9, 7, 5, 3, 1, 8, 6, 4, 2, 0, 11, 10];
    let snapshot = input.clone();

    let _ = insertion_sort(&input, NaturalOrder, SortRange::full());
    let _ = merge_sort(&input, NaturalOrder);
    let _ = quick_sort(&input, NaturalOrder, SortConfig::default());
    let _ = dual_pivot_quick_sort(&input, NaturalOrder, SortConfig::default());
    let _ = run_sort(&input, NaturalOrder, SortRange::full());
    let _ = hybrid_sort(&input, NaturalOrder);

    assert_eq!(input, snapshot);
}

#[test]
fn test_empty_and_single() {
    let empty: Vec<i32> = vec![];
    let single = vec![42];

    for data in [&empty, &single] {
        assert_eq!(&insertion_sort(data, NaturalOrder, SortRange::full()), data);
        assert_eq!(&merge_sort(data, NaturalOrder), data);
        assert_eq!(&quick_sort(data, NaturalOrder, SortConfig::default()), data);
        assert_eq!(
            &dual_pivot_quick_sort(data, NaturalOrder, SortConfig::default()),
            data
        );
        assert_eq!(&run_sort(data, NaturalOrder, SortRange::full()), data);
        assert_eq!(&hybrid_sort(data, NaturalOrder), data);
    }

    let empty_f: Vec<f64> = vec![];
    assert!(numeric_sort(&empty_f, true).is_empty());
    assert_eq!(numeric_sort(&[1.5], false), vec![1.5]);
}

#[test]
fn test_out_of_bounds_range_is_clamped() {
    let input = vec![4, 3, 2, 1];

    assert_eq!(
        insertion_sort(&input, NaturalOrder, (1, 100)),
        vec![4, 1, 2, 3]
    );
    assert_eq!(
        quick_sort(
            &input,
            NaturalOrder,
            SortConfig::new().with_range((0, usize::MAX))
        ),
        vec![1, 2, 3, 4]
    );
    // Start past the end clamps onto the last element: a one-element range.
    assert_eq!(run_sort(&input, NaturalOrder, (10, 20)), input);
}

#[test]
fn test_inverted_range_is_noop() {
    let input = vec![4, 3, 2, 1];
    let config = SortConfig::new().with_range((3, 1));

    assert_eq!(insertion_sort(&input, NaturalOrder, (3, 1)), input);
    assert_eq!(quick_sort(&input, NaturalOrder, config), input);
    assert_eq!(dual_pivot_quick_sort(&input, NaturalOrder, config), input);
    assert_eq!(run_sort(&input, NaturalOrder, (3, 1)), input);
}

#[test]
fn test_range_inclusive_syntax() {
    let input = vec![9, 8, 7, 6, 5, 4];
    assert_eq!(
        dual_pivot_quick_sort(&input, NaturalOrder, SortConfig::new().with_range(2..=4)),
        vec![9, 8, 5, 6, 7, 4]
    );
}

#[test]
fn test_reverse_order() {
    let input = vec![2, 7, 1, 8, 2, 8, 1, 8];
    let expected = vec![8, 8, 8, 7, 2, 2, 1, 1];

    assert_eq!(merge_sort(&input, ReverseOrder), expected);
    assert_eq!(quick_sort(&input, ReverseOrder, SortConfig::default()), expected);
    assert_eq!(merge_sort(&input, Reversed(NaturalOrder)), expected);
}

#[test]
fn test_strings() {
    let input = vec!["banana", "apple", "cherry", "date"];
    let expected = vec!["apple", "banana", "cherry", "date"];

    assert_eq!(merge_sort(&input, NaturalOrder), expected);
    assert_eq!(run_sort(&input, NaturalOrder, SortRange::full()), expected);
    assert_eq!(hybrid_sort(&input, NaturalOrder), expected);
}

#[test]
fn test_in_place_variants() {
    let expected: Vec<i32> = (0..64).collect();
    let shuffled: Vec<i32> = (0..64).map(|i| (i * 37) % 64).collect();

    let mut data = shuffled.clone();
    insertion_sort_mut(&mut data, NaturalOrder, SortRange::full());
    assert_eq!(data, expected);

    let mut data = shuffled.clone();
    merge_sort_mut(&mut data, NaturalOrder);
    assert_eq!(data, expected);

    let mut data = shuffled.clone();
    quick_sort_mut(&mut data, NaturalOrder, SortConfig::default());
    assert_eq!(data, expected);

    let mut data = shuffled.clone();
    dual_pivot_quick_sort_mut(&mut data, NaturalOrder, SortConfig::default());
    assert_eq!(data, expected);

    let mut data = shuffled.clone();
    run_sort_mut(&mut data, NaturalOrder, SortRange::full());
    assert_eq!(data, expected);

    let mut data = shuffled;
    hybrid_sort_mut(&mut data, NaturalOrder);
    assert_eq!(data, expected);

    let mut floats = vec![0.5, -0.25, 3.0, 1.0];
    numeric_sort_mut(&mut floats, true);
    assert_eq!(floats, vec![-0.25, 0.5, 1.0, 3.0]);
}

#[test]
fn test_edge_cases() {
    let cases: Vec<Vec<u64>> = vec![
        vec![1, 2, 3, 4, 5, 6],
        vec![6, 5, 4, 3, 2, 1],
        vec![7; 128],
        vec![u64::MIN, 1, u64::MAX, 0, u64::MAX - 1, 2],
        vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        (0..200).map(|i| i % 2).collect(),
    ];

    for case in &cases {
        let mut expected = case.clone();
        expected.sort_unstable();

        assert_eq!(insertion_sort(case, NaturalOrder, SortRange::full()), expected);
        assert_eq!(merge_sort(case, NaturalOrder), expected);
        assert_eq!(quick_sort(case, NaturalOrder, SortConfig::default()), expected);
        assert_eq!(
            dual_pivot_quick_sort(case, NaturalOrder, SortConfig::default()),
            expected
        );
        assert_eq!(run_sort(case, NaturalOrder, SortRange::full()), expected);
        assert_eq!(hybrid_sort(case, NaturalOrder), expected);
    }
}

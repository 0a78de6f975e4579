//! Unit tests for set operations.

#![cfg(feature = "set")]

use collection_ops::error::OpsError;
use collection_ops::ordered::OrderedSet;
use collection_ops::set;
use rstest::rstest;

fn ordered<T: std::hash::Hash + Eq>(elements: impl IntoIterator<Item = T>) -> OrderedSet<T> {
    elements.into_iter().collect()
}

fn elements_of<T: Clone>(set: &OrderedSet<T>) -> Vec<T> {
    set.iter().cloned().collect()
}

// =============================================================================
// map / flat_map
// =============================================================================

#[rstest]
fn test_map_applies_mapper() {
    let result = set::map(&ordered([1, 2, 3]), |number| number * 2);
    assert_eq!(elements_of(&result), vec![2, 4, 6]);
}

#[rstest]
fn test_map_collapses_equal_outputs() {
    let result = set::map(&ordered([1, 2, 3, 4]), |number| number % 2);
    assert_eq!(result.len(), 2);
    assert_eq!(elements_of(&result), vec![1, 0]);
}

#[rstest]
fn test_map_accepts_a_vec_with_duplicates() {
    let input = vec!["a", "b", "a"];
    let result = set::map(&input, |letter| letter.to_uppercase());
    assert_eq!(elements_of(&result), vec!["A".to_string(), "B".to_string()]);
}

#[rstest]
fn test_flat_map_unions_results() {
    let result = set::flat_map(&ordered([1, 2, 3]), |number| vec![*number, number + 1]);
    assert_eq!(elements_of(&result), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_flat_map_optional_skips_none() {
    let result = set::flat_map_optional(&ordered([1, 2, 3]), |number| {
        (*number != 2).then(|| [*number * 100])
    });
    assert_eq!(elements_of(&result), vec![100, 300]);
}

// =============================================================================
// filter / filter_all
// =============================================================================

#[rstest]
fn test_filter_keeps_matching_elements() {
    let result = set::filter(&ordered([1, 2, 3, 4, 5, 6]), |number| number % 2 == 0);
    assert_eq!(elements_of(&result), vec![2, 4, 6]);
}

#[rstest]
fn test_filter_all_combines_with_and() {
    let predicates: [&dyn Fn(&i32) -> bool; 2] = [&|number| *number > 2, &|number| number % 2 == 1];
    let result = set::filter_all(&ordered(1..=9), &predicates);
    assert_eq!(elements_of(&result), vec![3, 5, 7, 9]);
}

#[rstest]
fn test_filter_all_optional_missing_predicate() {
    let predicates: [Option<fn(&i32) -> bool>; 1] = [None];
    assert_eq!(
        set::filter_all_optional(&ordered([1]), &predicates),
        Err(OpsError::MissingArgument {
            operation: "set::filter_all_optional",
            argument: "predicate",
        })
    );
}

// =============================================================================
// reduce / queries
// =============================================================================

#[rstest]
fn test_reduce_sums() {
    let sum = set::reduce(&ordered([1, 2, 3, 4]), 0, |accumulator, number| accumulator + number);
    assert_eq!(sum, 10);
}

#[rstest]
fn test_reduce_empty_returns_identity() {
    let empty: OrderedSet<i32> = OrderedSet::default();
    assert_eq!(set::reduce(&empty, -1, |accumulator, number| accumulator + number), -1);
}

#[rstest]
fn test_find_uses_iteration_order() {
    let input = ordered([5, 3, 8, 1]);
    assert_eq!(set::find(&input, |number| *number < 5), Some(&3));
    assert_eq!(set::find(&input, |number| *number > 10), None);
}

#[rstest]
fn test_any_all_none() {
    let input = ordered([2, 4, 6]);
    assert!(set::any(&input, |number| *number == 4));
    assert!(set::all(&input, |number| number % 2 == 0));
    assert!(set::none(&input, |number| number % 2 == 1));
    assert!(!set::none(&input, |number| *number == 6));
}

#[rstest]
fn test_queries_on_empty_set() {
    let empty: OrderedSet<i32> = OrderedSet::default();
    assert!(!set::any(&empty, |_| true));
    assert!(set::all(&empty, |_| false));
    assert!(set::none(&empty, |_| true));
}

// =============================================================================
// take / drop
// =============================================================================

#[rstest]
#[case(0, vec![])]
#[case(2, vec![10, 20])]
#[case(5, vec![10, 20, 30])]
fn test_take(#[case] count: i64, #[case] expected: Vec<i32>) {
    let result = set::take(&ordered([10, 20, 30]), count).unwrap();
    assert_eq!(elements_of(&result), expected);
}

#[rstest]
#[case(0, vec![10, 20, 30])]
#[case(2, vec![30])]
#[case(5, vec![])]
fn test_drop(#[case] count: i64, #[case] expected: Vec<i32>) {
    let result = set::drop(&ordered([10, 20, 30]), count).unwrap();
    assert_eq!(elements_of(&result), expected);
}

#[rstest]
fn test_take_and_drop_reject_negative_counts() {
    let input = ordered([1, 2, 3]);
    assert!(matches!(
        set::take(&input, -1),
        Err(OpsError::NegativeCount { operation: "set::take", .. })
    ));
    assert!(matches!(
        set::drop(&input, -7_i8),
        Err(OpsError::NegativeCount { operation: "set::drop", count: -7, .. })
    ));
}

// =============================================================================
// zip / distinct / partition
// =============================================================================

#[rstest]
fn test_zip_pairs_in_iteration_order() {
    let letters = ordered(['a', 'b', 'c']);
    let numbers = ordered([1, 2]);
    let result = set::zip(&letters, &numbers, |letter, number| format!("{letter}{number}"));
    assert_eq!(elements_of(&result), vec!["a1".to_string(), "b2".to_string()]);
}

#[rstest]
fn test_zip_collapses_equal_combinations() {
    let result = set::zip(&ordered([1, 2, 3]), &ordered([3, 2, 1]), |a, b| a + b);
    assert_eq!(elements_of(&result), vec![4]);
}

#[rstest]
fn test_distinct_returns_equal_copy_of_set() {
    let input = ordered([3, 1, 2]);
    let result = set::distinct(&input);
    assert_eq!(result, input);
    assert_eq!(elements_of(&result), vec![3, 1, 2]);
}

#[rstest]
fn test_distinct_deduplicates_sequence_input() {
    let result = set::distinct(&[2, 2, 1, 2]);
    assert_eq!(elements_of(&result), vec![2, 1]);
}

#[rstest]
fn test_partition_splits_every_element_once() {
    let (even, odd) = set::partition(&ordered(1..=6), |number| number % 2 == 0);
    assert_eq!(elements_of(&even), vec![2, 4, 6]);
    assert_eq!(elements_of(&odd), vec![1, 3, 5]);
}

// =============================================================================
// Fused operations
// =============================================================================

#[rstest]
fn test_map_then_filter() {
    let result = set::map_then_filter(&ordered([1, 2, 3, 4]), |number| number * 3, |tripled| *tripled > 6);
    assert_eq!(elements_of(&result), vec![9, 12]);
}

#[rstest]
fn test_filter_then_map() {
    let result = set::filter_then_map(&ordered([1, 2, 3, 4]), |number| *number > 2, |number| number % 2);
    assert_eq!(elements_of(&result), vec![1, 0]);
}

#[rstest]
fn test_operations_leave_input_untouched() {
    let input = ordered([1, 2, 3]);
    let snapshot = input.clone();

    let _ = set::map(&input, |number| number + 1);
    let _ = set::filter(&input, |number| *number > 1);
    let _ = set::partition(&input, |number| *number > 1);
    let _ = set::drop(&input, 1);

    assert_eq!(input, snapshot);
    assert_eq!(elements_of(&input), vec![1, 2, 3]);
}

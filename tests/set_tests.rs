//! Unit tests for Set.
//!
//! These tests exercise the container API and the set algebra through the
//! public interface, including edge cases around empty and equal sets.

use mathset::{Set, set};
use rstest::{fixture, rstest};

#[fixture]
fn fellowship() -> Set<String> {
    ["Frodo", "Sam", "Gandalf", "Legolas"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[fixture]
fn hobbits() -> Set<String> {
    ["Frodo", "Sam", "Took", "Merry"]
        .into_iter()
        .map(String::from)
        .collect()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: Set<i32> = Set::new();
    assert!(set.is_empty());
    assert_eq!(set.cardinality(), 0);
}

#[rstest]
fn test_default_creates_empty_set() {
    let set: Set<i32> = Set::default();
    assert!(set.is_empty());
}

#[rstest]
fn test_from_array_and_vec_agree() {
    let from_array = Set::from([3, 1, 2]);
    let from_vec = Set::from(vec![1, 2, 3, 3]);
    assert_eq!(from_array, from_vec);
}

#[rstest]
fn test_macro_matches_collect() {
    let collected: Set<i32> = (1..=4).collect();
    assert_eq!(set![1, 2, 3, 4], collected);
}

// =============================================================================
// Insert / Remove / Contains
// =============================================================================

#[rstest]
fn test_insert_duplicate_does_not_increase_cardinality() {
    let mut set = Set::new();
    set.insert(42);
    set.insert(42);
    assert_eq!(set.len(), 1);
}

#[rstest]
fn test_remove_absent_element_never_fails() {
    let mut set: Set<i32> = Set::new();
    assert!(!set.remove(&1));
    assert!(set.is_empty());
}

#[rstest]
fn test_contains_with_borrowed_form() {
    let set: Set<String> = ["hello".to_string()].into_iter().collect();
    assert!(set.contains("hello"));
    assert!(!set.contains("world"));
}

#[rstest]
fn test_extend_by_reference() {
    let mut set = set![1];
    set.extend(&[2, 3, 1]);
    assert_eq!(set, set![1, 2, 3]);
}

// =============================================================================
// Rendering
// =============================================================================

#[rstest]
fn test_string_set_renders_sorted() {
    let mut set = Set::new();
    set.insert("c".to_string());
    set.insert("a".to_string());
    set.insert("b".to_string());
    assert_eq!(set.to_string(), "{a, b, c}");
}

#[rstest]
fn test_rendering_is_stable_across_calls(fellowship: Set<String>) {
    assert_eq!(fellowship.to_string(), fellowship.to_string());
    assert_eq!(fellowship.to_string(), "{Frodo, Gandalf, Legolas, Sam}");
}

#[rstest]
fn test_nested_set_renders_inner_sets() {
    let nested = set![set!["b", "a"]];
    assert_eq!(nested.to_string(), "{{a, b}}");
}

// =============================================================================
// Algebra
// =============================================================================

#[rstest]
fn test_string_intersection(fellowship: Set<String>, hobbits: Set<String>) {
    let expected: Set<String> = ["Frodo", "Sam"].into_iter().map(String::from).collect();
    assert_eq!(hobbits.intersection(&fellowship), expected);
}

#[rstest]
fn test_union_contains_both(fellowship: Set<String>, hobbits: Set<String>) {
    let union = fellowship.union(&hobbits);
    assert_eq!(union.len(), 6);
    assert!(fellowship.is_subset(&union));
    assert!(hobbits.is_subset(&union));
}

#[rstest]
fn test_difference_and_symmetric_difference(fellowship: Set<String>, hobbits: Set<String>) {
    let only_fellowship = fellowship.difference(&hobbits);
    let only_hobbits = hobbits.difference(&fellowship);
    let either = fellowship.symmetric_difference(&hobbits);

    assert_eq!(only_fellowship.to_string(), "{Gandalf, Legolas}");
    assert_eq!(only_hobbits.to_string(), "{Merry, Took}");
    assert_eq!(either, only_fellowship.union(&only_hobbits));
}

#[rstest]
#[case::empty(0)]
#[case::small(10)]
#[case::large(10_000)]
fn test_intersection_with_self_is_identity(#[case] size: i32) {
    let set: Set<i32> = (0..size).collect();
    assert_eq!(set.intersection(&set), set);
}

#[rstest]
fn test_equal_sets_are_subsets_but_not_proper() {
    let set_a = set![1, 2, 3];
    let set_b = set![3, 2, 1];

    assert_eq!(set_a, set_b);
    assert!(set_a.is_subset(&set_b));
    assert!(set_a.is_superset(&set_b));
    assert!(!set_a.is_proper_subset(&set_b));
    assert!(!set_a.is_proper_superset(&set_b));
}

#[rstest]
fn test_empty_set_is_subset_of_everything() {
    let empty: Set<i32> = Set::new();
    assert!(empty.is_subset(&set![1]));
    assert!(empty.is_proper_subset(&set![1]));
    assert!(empty.is_subset(&empty));
    assert!(!empty.is_proper_subset(&empty));
}

#[rstest]
fn test_results_are_independent_of_operands() {
    let set_a = set![1, 2];
    let set_b = set![2, 3];

    let mut union = set_a.union(&set_b);
    union.insert(99);
    union.remove(&1);

    assert_eq!(set_a, set![1, 2]);
    assert_eq!(set_b, set![2, 3]);
}

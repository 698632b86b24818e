//! Tests for the hash builder selected by the `fxhash` / `ahash` features.
//!
//! Every test here must pass with the default builder and with either
//! fast-hash feature enabled.

use mathset::{HashBuilder, Set, set};
use rstest::rstest;
use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Builder Selection
// =============================================================================

#[rstest]
fn test_builder_hashes_consistently() {
    let builder = HashBuilder::default();
    assert_eq!(builder.hash_one("alpha"), builder.hash_one("alpha"));
}

#[cfg(feature = "fxhash")]
#[rstest]
fn test_fxhash_builder_is_selected() {
    static_assertions::assert_type_eq_all!(HashBuilder, rustc_hash::FxBuildHasher);
}

// =============================================================================
// Set Hash Independence
// =============================================================================

/// Two sets built separately carry separate builders; equal contents must
/// still produce equal set hashes.
#[rstest]
fn test_equal_sets_hash_equally_across_builders() {
    let set1: Set<String> = ["alpha", "beta", "gamma"].into_iter().map(String::from).collect();
    let set2: Set<String> = ["gamma", "alpha", "beta"].into_iter().map(String::from).collect();

    assert_eq!(set1, set2);
    assert_eq!(hash_of(&set1), hash_of(&set2));
}

#[rstest]
fn test_different_sets_hash_differently() {
    assert_ne!(hash_of(&set![1, 2, 3]), hash_of(&set![1, 2, 4]));
    assert_ne!(hash_of(&set![1]), hash_of(&Set::<i32>::new()));
}

// =============================================================================
// Large Scale Tests (hash function stress test)
// =============================================================================

#[rstest]
fn test_large_scale_insert_and_contains() {
    const COUNT: i32 = 10_000;

    let set: Set<i32> = (0..COUNT).collect();

    for element in 0..COUNT {
        assert!(set.contains(&element), "Set should contain {element}");
    }
    for element in COUNT..(COUNT + 100) {
        assert!(!set.contains(&element), "Set should not contain {element}");
    }
    assert_eq!(Ok(set.len()), usize::try_from(COUNT));
}

#[rstest]
fn test_string_elements_large_scale() {
    const COUNT: usize = 1_000;

    let set: Set<String> = (0..COUNT).map(|index| format!("key_{index}")).collect();

    for index in 0..COUNT {
        let key = format!("key_{index}");
        assert!(set.contains(&key), "Failed to find {key}");
    }
    assert_eq!(set.len(), COUNT);
}

#[rstest]
fn test_nested_sets_large_scale() {
    let subsets: Set<Set<u16>> = (0..500_u16).map(|index| set![index, index + 1]).collect();
    assert_eq!(subsets.len(), 500);
    assert!(subsets.contains(&set![43, 42]));
}

// =============================================================================
// Edge Case Tests
// =============================================================================

#[rstest]
fn test_similar_elements() {
    let set = set!["a", "aa", "aaa", "aaaa"];
    assert_eq!(set.len(), 4);
    assert!(set.contains("aaa"));
}

#[rstest]
fn test_special_character_elements() {
    let set = set!["\0", "\n", "\t", " ", ""];
    assert_eq!(set.len(), 5);
    assert!(set.contains(""));
    assert!(set.contains("\0"));
}

#[rstest]
fn test_boundary_integer_elements() {
    let set = set![i64::MIN, i64::MAX, 0, -1];
    assert_eq!(set.len(), 4);
    assert!(set.contains(&i64::MIN));
    assert!(set.contains(&i64::MAX));
}

//! Relational and algebraic operations on [`Set`].
//!
//! Every operation borrows both operands and never mutates them. The
//! result-producing operations return a freshly allocated set holding
//! clones of the selected elements.
//!
//! The algebraic operations are also available as operators on set
//! references, following the conventions of [`std::collections::HashSet`]:
//!
//! | Operator  | Method                                           |
//! |-----------|--------------------------------------------------|
//! | `&a \| &b` | [`union`](Set::union)                           |
//! | `&a & &b` | [`intersection`](Set::intersection)              |
//! | `&a - &b` | [`difference`](Set::difference)                  |
//! | `&a ^ &b` | [`symmetric_difference`](Set::symmetric_difference) |
//!
//! # Examples
//!
//! ```rust
//! use mathset::Set;
//!
//! let set_a: Set<i32> = [1, 2, 3].into_iter().collect();
//! let set_b: Set<i32> = [2, 3, 4].into_iter().collect();
//!
//! assert_eq!(&set_a | &set_b, Set::from([1, 2, 3, 4]));
//! assert_eq!(&set_a & &set_b, Set::from([2, 3]));
//! assert_eq!(&set_a - &set_b, Set::from([1]));
//! assert_eq!(&set_a ^ &set_b, Set::from([1, 4]));
//! ```

use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::Set;

// =============================================================================
// Relations
// =============================================================================

impl<T: Eq + Hash> Set<T> {
    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// # Arguments
    ///
    /// * `other` - The set that may contain every element of `self`
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`; O(1) when `self` is larger than `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::Set;
    ///
    /// let subset: Set<i32> = [1, 2].into_iter().collect();
    /// let superset: Set<i32> = [1, 2, 3].into_iter().collect();
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(subset.is_subset(&subset));
    /// assert!(!superset.is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        // A larger set can never fit inside a smaller one
        if self.len() > other.len() {
            return false;
        }

        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    ///
    /// # Arguments
    ///
    /// * `other` - The set whose elements are looked up in `self`
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is a subset of `other` and the two differ.
    ///
    /// # Arguments
    ///
    /// * `other` - The set that must strictly contain `self`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::Set;
    ///
    /// let small: Set<i32> = [1].into_iter().collect();
    /// let large: Set<i32> = [1, 2].into_iter().collect();
    ///
    /// assert!(small.is_proper_subset(&large));
    /// assert!(!large.is_proper_subset(&large));
    /// ```
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Returns `true` if `self` is a superset of `other` and the two differ.
    ///
    /// # Arguments
    ///
    /// * `other` - The set that `self` must strictly contain
    #[must_use]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        self.len() > other.len() && self.is_superset(other)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// # Arguments
    ///
    /// * `other` - The set to compare against
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = smaller_first(self, other);
        !smaller.iter().any(|element| larger.contains(element))
    }
}

// =============================================================================
// Algebra
// =============================================================================

impl<T: Clone + Eq + Hash> Set<T> {
    /// Returns the elements that are in `self` or in `other`.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set to union with
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::Set;
    ///
    /// let set_a: Set<i32> = [1, 2].into_iter().collect();
    /// let set_b: Set<i32> = [2, 3].into_iter().collect();
    ///
    /// let union = set_a.union(&set_b);
    /// assert_eq!(union.len(), 3);
    /// assert_eq!(set_a.len(), 2); // operands unchanged
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len().max(other.len()));
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }

    /// Returns the elements that are in both `self` and `other`.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set to intersect with
    ///
    /// The smaller operand is scanned and each element is looked up in the
    /// larger one, so the cost is bounded by the smaller cardinality
    /// whichever operand is `self`.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::Set;
    ///
    /// let set_a: Set<&str> = ["frodo", "sam", "merry"].into_iter().collect();
    /// let set_b: Set<&str> = ["frodo", "sam", "gandalf"].into_iter().collect();
    ///
    /// assert_eq!(set_a.intersection(&set_b), Set::from(["frodo", "sam"]));
    /// assert_eq!(set_a.intersection(&set_b), set_b.intersection(&set_a));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        // Iterate over the smaller set and probe the larger one
        let (smaller, larger) = smaller_first(self, other);

        let mut result = Self::with_capacity(smaller.len());
        for element in smaller {
            if larger.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Returns the elements of `self` that are not in `other` (`self \ other`).
    ///
    /// # Arguments
    ///
    /// * `other` - The set to subtract
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::Set;
    ///
    /// let set_a: Set<i32> = [1, 2, 3].into_iter().collect();
    /// let set_b: Set<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// assert_eq!(set_a.difference(&set_b), Set::from([1]));
    /// assert_eq!(set_b.difference(&set_a), Set::from([4]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len());
        for element in self {
            if !other.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Returns the elements that are in exactly one of `self` and `other`.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set to compare with
    ///
    /// Each operand is scanned once; no intermediate sets are built.
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::Set;
    ///
    /// let set_a: Set<i32> = [1, 2, 3].into_iter().collect();
    /// let set_b: Set<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// assert_eq!(set_a.symmetric_difference(&set_b), Set::from([1, 4]));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        // (A - B) ∪ (B - A), collected in one pass over each operand
        let mut result = Self::new();
        for element in self {
            if !other.contains(element) {
                result.insert(element.clone());
            }
        }
        for element in other {
            if !self.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }
}

/// Orders two operands so that the one with fewer elements comes first.
fn smaller_first<'a, T>(left: &'a Set<T>, right: &'a Set<T>) -> (&'a Set<T>, &'a Set<T>) {
    if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Clone + Eq + Hash> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, other: &Set<T>) -> Set<T> {
        self.union(other)
    }
}

impl<T: Clone + Eq + Hash> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, other: &Set<T>) -> Set<T> {
        self.intersection(other)
    }
}

impl<T: Clone + Eq + Hash> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn sub(self, other: &Set<T>) -> Set<T> {
        self.difference(other)
    }
}

impl<T: Clone + Eq + Hash> BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitxor(self, other: &Set<T>) -> Set<T> {
        self.symmetric_difference(other)
    }
}

static_assertions::assert_not_impl_any!(
    &'static Set<i32>: BitOr<&'static Set<i64>>,
    BitAnd<&'static Set<i64>>,
    Sub<&'static std::collections::HashSet<i32>>
);

// =============================================================================
// Tests
// =============================================================================

//! Mutable hash set with mathematical set semantics.
//!
//! This module provides [`Set`], an unordered collection of unique
//! elements backed by [`std::collections::HashSet`].
//!
//! # Overview
//!
//! - O(1) expected `insert`, `remove` and `contains`
//! - O(1) `len` and `is_empty`
//! - Set algebra (union, intersection, difference, symmetric difference)
//!   and subset relations, see the [`algebra`] submodule
//!
//! Binary operations only accept another `Set<T>`. There is a single
//! concrete representation, so mixing containers is rejected by the
//! compiler rather than at run time.
//!
//! # Examples
//!
//! ```rust
//! use mathset::Set;
//!
//! let mut set = Set::new();
//! set.insert(1);
//! set.insert(2);
//! set.insert(2);
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(&1));
//!
//! set.remove(&1);
//! assert!(!set.contains(&1));
//! ```

pub mod algebra;

use std::borrow::Borrow;
use std::collections::hash_set;
use std::collections::{HashSet, TryReserveError};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::hasher::{HashBuilder, fingerprint};

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of unique elements.
///
/// Elements are compared with [`Eq`] and located with [`Hash`]. Iteration
/// order is unspecified and may differ between two sets holding the same
/// elements.
///
/// # Time Complexity
///
/// | Operation              | Complexity (expected) |
/// |------------------------|-----------------------|
/// | `new`                  | O(1)                  |
/// | `insert`               | O(1)                  |
/// | `remove`               | O(1)                  |
/// | `contains`             | O(1)                  |
/// | `len`                  | O(1)                  |
/// | `union`                | O(n + m)              |
/// | `intersection`         | O(min(n, m))          |
/// | `difference`           | O(n)                  |
/// | `symmetric_difference` | O(n + m)              |
///
/// # Examples
///
/// ```rust
/// use mathset::Set;
///
/// let set = Set::singleton("frodo");
/// assert!(set.contains("frodo"));
/// assert!(!set.contains("sam"));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    elements: HashSet<T, HashBuilder>,
}

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: HashSet::with_hasher(HashBuilder::default()),
        }
    }

    /// Creates a new empty set with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::Set;
    ///
    /// let set: Set<i32> = Set::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: HashSet::with_capacity_and_hasher(capacity, HashBuilder::default()),
        }
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::Set;
    ///
    /// let set: Set<i32> = [1, 2, 2, 3].into_iter().collect();
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the cardinality of the set. Same as [`len`](Self::len).
    #[inline]
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes every element, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns an iterator over the elements, in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::Set;
    ///
    /// let set: Set<i32> = [1, 2, 3].into_iter().collect();
    /// let sum: i32 = set.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[must_use]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.elements.iter(),
        }
    }
}

impl<T: Eq + Hash> Set<T> {
    /// Creates a set containing a single element.
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.insert(element);
        set
    }

    /// Adds an element to the set.
    ///
    /// Inserting an element that is already present leaves the set
    /// unchanged. Returns `true` if the element was newly added.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to insert
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(7));
    /// assert!(!set.insert(7));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        self.elements.insert(element)
    }

    /// Removes an element from the set.
    ///
    /// Removing an absent element is a no-op. Returns `true` if the
    /// element was present.
    ///
    /// The element may be any borrowed form of the set's element type.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to remove
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::Set;
    ///
    /// let mut set: Set<String> = ["sam".to_string()].into_iter().collect();
    /// assert!(set.remove("sam"));
    /// assert!(!set.remove("sam"));
    /// assert!(set.is_empty());
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.remove(element)
    }

    /// Returns `true` if the set contains the element.
    ///
    /// The element may be any borrowed form of the set's element type.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to check for
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains(element)
    }

    /// Reserves room for at least `additional` more elements.
    ///
    /// # Errors
    ///
    /// Returns the allocator's [`TryReserveError`] when the new capacity
    /// overflows or the allocation fails. The set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::Set;
    ///
    /// let mut set: Set<u8> = Set::new();
    /// assert!(set.try_reserve(16).is_ok());
    /// assert!(set.capacity() >= 16);
    /// assert!(set.try_reserve(usize::MAX).is_err());
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.elements.try_reserve(additional)
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::Set;
    ///
    /// let mut set: Set<i32> = (1..=6).collect();
    /// set.retain(|element| element % 2 == 0);
    /// assert_eq!(set, Set::from([2, 4, 6]));
    /// ```
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.retain(predicate);
    }
}

impl<T: Clone> Set<T> {
    /// Returns a snapshot of the elements as a vector.
    ///
    /// Every element appears exactly once, in unspecified order. The
    /// vector owns clones of the elements, so later changes to the set do
    /// not affect it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathset::Set;
    ///
    /// let mut set: Set<i32> = [3, 1, 2].into_iter().collect();
    /// let mut snapshot = set.to_vec();
    /// set.insert(4);
    ///
    /// snapshot.sort_unstable();
    /// assert_eq!(snapshot, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the elements of a [`Set`].
pub struct SetIterator<'a, T> {
    inner: hash_set::Iter<'a, T>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the elements of a [`Set`].
pub struct SetIntoIterator<T> {
    inner: hash_set::IntoIter<T>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a, T: Eq + Hash + Copy + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().copied());
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Eq + Hash> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().all(|element| other.contains(element))
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

/// Order-independent: element fingerprints are combined with wrapping
/// addition, so equal sets hash equally whatever their iteration order.
impl<T: Eq + Hash> Hash for Set<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self
            .iter()
            .map(fingerprint)
            .fold(0_u64, u64::wrapping_add);
        state.write_usize(self.len());
        state.write_u64(combined);
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the set as `{e1, e2, ...}`.
///
/// Elements are sorted by their rendered text, so the output is
/// deterministic and textual elements appear in lexicographic order.
///
/// ```rust
/// use mathset::Set;
///
/// let set: Set<&str> = ["c", "a", "b"].into_iter().collect();
/// assert_eq!(set.to_string(), "{a, b, c}");
///
/// let empty: Set<&str> = Set::new();
/// assert_eq!(empty.to_string(), "{}");
/// ```
impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered: Vec<String> = self.iter().map(ToString::to_string).collect();
        rendered.sort_unstable();

        write!(formatter, "{{")?;
        let mut first = true;
        for element in &rendered {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Set<Set<String>>: Eq, Hash);
static_assertions::assert_not_impl_any!(Set<i32>: PartialEq<Set<i64>>, PartialEq<HashSet<i32>>);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

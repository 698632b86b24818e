//! Ordered pairs.

use std::fmt;

/// An ordered pair `(first, second)`.
///
/// Pairs are the elements of a Cartesian product. Equality, ordering and
/// hashing are structural: two pairs are equal iff both components are.
///
/// # Examples
///
/// ```rust
/// use mathset::Pair;
///
/// let pair = Pair::new("N", "BK");
/// assert_eq!(pair.first(), &"N");
/// assert_eq!(pair.second(), &"BK");
/// assert_ne!(pair, pair.swap());
/// assert_eq!(pair.to_string(), "(N, BK)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair<T> {
    first: T,
    second: T,
}

impl<T> Pair<T> {
    /// Creates a pair from its two components.
    #[inline]
    #[must_use]
    pub const fn new(first: T, second: T) -> Self {
        Self { first, second }
    }

    /// Returns the first component.
    #[inline]
    #[must_use]
    pub const fn first(&self) -> &T {
        &self.first
    }

    /// Returns the second component.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> &T {
        &self.second
    }

    /// Returns the pair with its components exchanged.
    #[inline]
    #[must_use]
    pub fn swap(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }

    /// Consumes the pair, returning its components as a tuple.
    #[inline]
    #[must_use]
    pub fn into_tuple(self) -> (T, T) {
        (self.first, self.second)
    }
}

impl<T> From<(T, T)> for Pair<T> {
    fn from((first, second): (T, T)) -> Self {
        Self::new(first, second)
    }
}

impl<T> From<Pair<T>> for (T, T) {
    fn from(pair: Pair<T>) -> Self {
        pair.into_tuple()
    }
}

impl<T: fmt::Display> fmt::Display for Pair<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}

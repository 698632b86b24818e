use std::hash::Hash;

use crate::{Pair, Set};

/// Returns every ordered pair `(x, y)` with `x` from `left` and `y` from
/// `right`.
///
/// The result has exactly `left.len() * right.len()` elements and is empty
/// when either operand is empty.
///
/// # Arguments
///
/// * `left` - The set supplying the first component of each pair
/// * `right` - The set supplying the second component of each pair
///
/// # Complexity
///
/// O(n * m)
///
/// # Examples
///
/// ```rust
/// use mathset::{Pair, Set};
/// use mathset::derived::cartesian_product;
///
/// let left: Set<i32> = [1, 2].into_iter().collect();
/// let right: Set<i32> = [3, 4].into_iter().collect();
///
/// let product = cartesian_product(&left, &right);
/// assert_eq!(product.len(), 4);
/// assert!(product.contains(&Pair::new(1, 3)));
/// assert!(product.contains(&Pair::new(2, 4)));
/// assert!(!product.contains(&Pair::new(3, 1)));
/// ```
#[must_use]
pub fn cartesian_product<T>(left: &Set<T>, right: &Set<T>) -> Set<Pair<T>>
where
    T: Clone + Eq + Hash,
{
    let capacity = left.len().checked_mul(right.len()).unwrap_or_default();
    let mut product = Set::with_capacity(capacity);

    for first in left {
        for second in right {
            product.insert(Pair::new(first.clone(), second.clone()));
        }
    }
    product
}

impl<T: Clone + Eq + Hash> Set<T> {
    /// Returns the Cartesian product `self × other`.
    ///
    /// See [`cartesian_product`].
    #[must_use]
    pub fn cartesian_product(&self, other: &Self) -> Set<Pair<T>> {
        cartesian_product(self, other)
    }
}

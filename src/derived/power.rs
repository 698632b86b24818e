use std::hash::Hash;

use crate::{Set, SetError};

/// Largest input cardinality whose power set [`try_power_set`] attempts to
/// build for element type `T`.
///
/// The `2^limit` subsets, at `size_of::<Set<T>>()` bytes each, still fit in
/// the `isize::MAX` bytes a single allocation may span. Larger inputs are
/// rejected before anything is allocated.
///
/// # Examples
///
/// ```rust
/// use mathset::derived::power_set_limit;
///
/// assert!(power_set_limit::<u8>() < usize::BITS);
/// assert!(power_set_limit::<String>() >= 16);
/// ```
#[must_use]
pub const fn power_set_limit<T>() -> u32 {
    (isize::MAX.unsigned_abs() / size_of::<Set<T>>()).ilog2()
}

/// Returns every subset of `set`, including the empty set and `set` itself.
///
/// The result has exactly `2^n` elements for an input of `n` elements; the
/// power set of the empty set is `{{}}`. Every subset is an independently
/// owned [`Set`], so changing one never affects another or the input.
///
/// Subsets are built by doubling: starting from `{{}}`, each element of
/// `set` is added to a copy of every subset discovered so far.
///
/// # Panics
///
/// The result holds `2^n` sets, so inputs beyond a few dozen elements
/// exhaust memory, and inputs above [`power_set_limit`] overflow the
/// allocation size. Use [`try_power_set`] to get an error instead.
///
/// # Complexity
///
/// O(n * 2^n)
///
/// # Examples
///
/// ```rust
/// use mathset::Set;
/// use mathset::derived::power_set;
///
/// let set: Set<i32> = [1, 2].into_iter().collect();
/// let subsets = power_set(&set);
///
/// assert_eq!(subsets.len(), 4);
/// assert!(subsets.contains(&Set::new()));
/// assert!(subsets.contains(&Set::from([1])));
/// assert!(subsets.contains(&Set::from([2])));
/// assert!(subsets.contains(&Set::from([1, 2])));
/// ```
#[must_use]
pub fn power_set<T>(set: &Set<T>) -> Set<Set<T>>
where
    T: Clone + Eq + Hash,
{
    let expected = u32::try_from(set.len())
        .ok()
        .and_then(|exponent| 1_usize.checked_shl(exponent))
        .unwrap_or_default();

    let subsets = double_subsets(set, Vec::with_capacity(expected));

    let mut result = Set::with_capacity(subsets.len());
    result.extend(subsets);
    result
}

/// Returns every subset of `set`, or an error if the power set cannot be
/// allocated.
///
/// Both the subset buffer and the resulting set are reserved up front, so
/// an oversized input fails before any subset is built.
///
/// # Errors
///
/// Returns [`SetError::PowerSetTooLarge`] when the input has more than
/// [`power_set_limit`] elements, or when the allocator cannot provide room
/// for `2^n` subsets.
///
/// # Examples
///
/// ```rust
/// use mathset::Set;
/// use mathset::derived::try_power_set;
///
/// let set: Set<char> = ['a', 'b', 'c'].into_iter().collect();
/// let subsets = try_power_set(&set).unwrap();
/// assert_eq!(subsets.len(), 8);
///
/// let huge: Set<u8> = (0..60).collect();
/// assert!(try_power_set(&huge).is_err());
/// ```
pub fn try_power_set<T>(set: &Set<T>) -> Result<Set<Set<T>>, SetError>
where
    T: Clone + Eq + Hash,
{
    let limit = power_set_limit::<T>();
    let too_large = || SetError::PowerSetTooLarge {
        cardinality: set.len(),
        limit,
    };

    let expected = u32::try_from(set.len())
        .ok()
        .filter(|&cardinality| cardinality <= limit)
        .map(|cardinality| 1_usize << cardinality)
        .ok_or_else(too_large)?;

    let mut subsets: Vec<Set<T>> = Vec::new();
    subsets
        .try_reserve_exact(expected)
        .map_err(|_| too_large())?;
    let mut result: Set<Set<T>> = Set::new();
    result.try_reserve(expected).map_err(|_| too_large())?;

    result.extend(double_subsets(set, subsets));
    Ok(result)
}

/// Pushes `{}` and then, for each element, an extended copy of every subset
/// pushed so far.
fn double_subsets<T>(set: &Set<T>, mut subsets: Vec<Set<T>>) -> Vec<Set<T>>
where
    T: Clone + Eq + Hash,
{
    subsets.push(Set::new());

    for element in set {
        let discovered = subsets.len();
        for index in 0..discovered {
            let mut extended = subsets[index].clone();
            extended.insert(element.clone());
            subsets.push(extended);
        }
    }

    subsets
}

impl<T: Clone + Eq + Hash> Set<T> {
    /// Returns every subset of `self`.
    ///
    /// See [`power_set`].
    #[must_use]
    pub fn power_set(&self) -> Set<Self> {
        power_set(self)
    }
}

//! Construction macro for [`Set`](crate::Set).

/// Creates a [`Set`](crate::Set) containing the given elements.
///
/// Duplicate elements are collapsed. With no arguments the macro expands
/// to an empty set whose element type is inferred from context.
///
/// # Examples
///
/// ```
/// use mathset::{Set, set};
///
/// let empty: Set<i32> = set![];
/// assert!(empty.is_empty());
///
/// let digits = set![1, 2, 3, 3];
/// assert_eq!(digits.len(), 3);
///
/// let names = set!["frodo", "sam",];
/// assert!(names.contains("sam"));
/// ```
#[macro_export]
macro_rules! set {
    // Empty set
    () => {
        $crate::Set::new()
    };

    // One or more elements, optional trailing comma
    ($($element:expr),+ $(,)?) => {{
        let mut set = $crate::Set::new();
        $(
            set.insert($element);
        )+
        set
    }};
}

//! Error types for checked set construction.

/// Errors reported by checked set operations.
///
/// Every core operation on [`Set`](crate::Set) is total. The only checked
/// operation is [`try_power_set`](crate::derived::try_power_set), which
/// refuses inputs whose power set cannot be allocated.
///
/// # Examples
///
/// ```rust
/// use mathset::SetError;
///
/// let error = SetError::PowerSetTooLarge { cardinality: 64, limit: 63 };
/// assert_eq!(
///     format!("{error}"),
///     "power set of 64 elements is not representable (at most 63 elements supported)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// The `2^cardinality` subsets do not fit in memory.
    PowerSetTooLarge {
        /// Cardinality of the input set.
        cardinality: usize,
        /// Largest input cardinality attempted for the element type, see
        /// [`power_set_limit`](crate::derived::power_set_limit).
        limit: u32,
    },
}

impl std::fmt::Display for SetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PowerSetTooLarge { cardinality, limit } => write!(
                formatter,
                "power set of {cardinality} elements is not representable \
                 (at most {limit} elements supported)"
            ),
        }
    }
}

impl std::error::Error for SetError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_power_set_too_large_display() {
        let error = SetError::PowerSetTooLarge {
            cardinality: 70,
            limit: 63,
        };
        assert_eq!(
            format!("{error}"),
            "power set of 70 elements is not representable (at most 63 elements supported)"
        );
    }

    #[rstest]
    fn test_error_trait_object() {
        let error: Box<dyn std::error::Error> = Box::new(SetError::PowerSetTooLarge {
            cardinality: 64,
            limit: 63,
        });
        assert!(error.source().is_none());
        assert!(error.to_string().starts_with("power set of 64"));
    }
}

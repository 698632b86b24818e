//! Hash builder selection and element fingerprints.
//!
//! The container's hash builder is chosen at compile time:
//!
//! - `fxhash` feature: [`rustc_hash::FxBuildHasher`]
//! - `ahash` feature: [`ahash::RandomState`]
//! - otherwise: [`std::collections::hash_map::RandomState`]
//!
//! When both fast-hash features are enabled, `fxhash` takes precedence.
//!
//! Fingerprints are independent of the selected builder. They always use
//! an unkeyed [`DefaultHasher`], so two equal sets produce the same
//! [`Hash`] output even when their builders were seeded differently.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hash builder used by [`Set`](crate::Set).
#[cfg(feature = "fxhash")]
pub type HashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by [`Set`](crate::Set).
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type HashBuilder = ahash::RandomState;

/// Hash builder used by [`Set`](crate::Set).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type HashBuilder = std::collections::hash_map::RandomState;

/// Computes the hash of a value using an unkeyed `DefaultHasher`.
pub(crate) fn fingerprint<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

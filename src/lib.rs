//! # mathset
//!
//! Generic, in-memory mathematical sets for Rust.
//!
//! ## Overview
//!
//! - **Container**: [`Set`], a mutable collection of unique elements with
//!   O(1) expected insertion, removal and membership tests
//! - **Set Algebra**: union, intersection, difference, symmetric difference,
//!   equality and (proper) subset / superset relations
//! - **Derived Constructors**: Cartesian product ([`Pair`] elements) and
//!   power set
//! - **Heterogeneous Elements**: the closed [`Element`] enum
//!
//! All binary operations take another `Set<T>` of the same element type;
//! mixing representations is a compile-time error.
//!
//! ## Feature Flags
//!
//! - `derived` (default): Cartesian product and power set
//! - `fxhash`: hash elements with `rustc-hash`'s `FxBuildHasher`
//! - `ahash`: hash elements with `ahash::RandomState`
//!
//! ## Example
//!
//! ```rust
//! use mathset::prelude::*;
//!
//! let fellowship = set!["Frodo", "Sam", "Gandalf", "Legolas"];
//! let hobbits = set!["Frodo", "Sam", "Merry", "Pippin"];
//!
//! let both = fellowship.intersection(&hobbits);
//! assert_eq!(both.to_string(), "{Frodo, Sam}");
//! assert!(both.is_proper_subset(&hobbits));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container, its element helpers and the `set!` macro.
///
/// # Usage
///
/// ```rust
/// use mathset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::element::Element;
    pub use crate::error::SetError;
    pub use crate::pair::Pair;
    pub use crate::set;
    pub use crate::set::Set;

    #[cfg(feature = "derived")]
    pub use crate::derived::{cartesian_product, power_set, power_set_limit, try_power_set};
}

mod macros;

pub mod element;
pub mod error;
pub mod hasher;
pub mod pair;
pub mod set;

#[cfg(feature = "derived")]
pub mod derived;

pub use element::Element;
pub use error::SetError;
pub use hasher::HashBuilder;
pub use pair::Pair;
pub use set::{Set, SetIntoIterator, SetIterator};

//! Constructors derived from the set algebra.
//!
//! - [`cartesian_product`]: all ordered pairs drawn from two sets
//! - [`power_set`]: all subsets of a set
//! - [`try_power_set`]: [`power_set`] that reports an error instead of
//!   failing to allocate, see [`power_set_limit`]
//!
//! Both constructors are also available as methods on [`Set`](crate::Set).
//!
//! # Examples
//!
//! ```rust
//! use mathset::Set;
//! use mathset::derived::{cartesian_product, power_set};
//!
//! let pieces: Set<&str> = ["N", "M", "W"].into_iter().collect();
//! let colours: Set<&str> = ["BK", "BN"].into_iter().collect();
//! assert_eq!(cartesian_product(&pieces, &colours).len(), 6);
//!
//! let digits: Set<i32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(power_set(&digits).len(), 8);
//! ```

mod power;
mod product;

pub use power::{power_set, power_set_limit, try_power_set};
pub use product::cartesian_product;

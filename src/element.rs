//! Closed element type for heterogeneous sets.
//!
//! [`Set`](crate::Set) is parametric over a single element type. When one
//! set has to hold values of different kinds, use [`Element`]: a closed
//! enum with structural equality per variant, so hashing and equality stay
//! well defined. Values of different variants are never equal, even when
//! they render identically.
//!
//! # Examples
//!
//! ```rust
//! use mathset::{Element, Set};
//!
//! let mixed: Set<Element> = [Element::from(1), Element::from("one"), Element::from(true)]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(mixed.len(), 3);
//! assert!(mixed.contains(&Element::Text("one".to_string())));
//! assert!(!mixed.contains(&Element::Text("1".to_string())));
//! ```

use std::fmt;

/// A value of one of the supported element kinds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    /// A signed integer.
    Integer(i64),
    /// A text value.
    Text(String),
    /// A boolean.
    Boolean(bool),
    /// A single character.
    Character(char),
    /// The unit value.
    Unit,
}

impl Element {
    /// Returns `true` if this is a [`Element::Text`] value.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns the text if this is a [`Element::Text`] value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Returns the integer if this is an [`Element::Integer`] value.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<char> for Element {
    fn from(value: char) -> Self {
        Self::Character(value)
    }
}

impl From<()> for Element {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

impl fmt::Display for Element {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Text(text) => write!(formatter, "{text}"),
            Self::Boolean(value) => write!(formatter, "{value}"),
            Self::Character(value) => write!(formatter, "{value}"),
            Self::Unit => write!(formatter, "()"),
        }
    }
}

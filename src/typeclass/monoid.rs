//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optio::maybe::Maybe;
//! use optio::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//!
//! let parts = vec![Maybe::some(String::from("a")), Maybe::NONE, Maybe::some(String::from("b"))];
//! assert_eq!(Maybe::combine_all(parts), Maybe::some(String::from("ab")));
//! ```

use super::semigroup::Semigroup;
use super::wrappers::{First, Last};
use crate::maybe::Maybe;

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element of an iterator, starting from `empty`.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether `self` is the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Monoid;
    ///
    /// assert!(Maybe::<String>::NONE.is_empty_value());
    /// assert!(!Maybe::some(String::new()).is_empty_value());
    /// ```
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<A: Semigroup> Monoid for Maybe<A> {
    fn empty() -> Self {
        Self::None
    }
}

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(Maybe::None)
    }
}

impl<A> Monoid for Last<A> {
    fn empty() -> Self {
        Self(Maybe::None)
    }
}

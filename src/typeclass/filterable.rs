//! Filterable and Compactable type classes - dropping elements from a structure.
//!
//! [`Compactable`] removes the empty slots of a structure whose elements are
//! themselves optional (or split a structure of `Result`s into its two
//! sides). [`Filterable`] builds on it to remove elements by predicate.
//!
//! For `Maybe`, a structure of at most one element, both collapse a
//! present-but-rejected value into `None`.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! fa.filter_map(Maybe::some) == fa
//! ```
//!
//! ## Annihilation
//!
//! ```text
//! fa.filter_map(|_| Maybe::NONE) == empty
//! ```
//!
//! ## Consistency
//!
//! ```text
//! fa.filter(p) == fa.filter_map(|a| if p(&a) { Maybe::some(a) } else { Maybe::NONE })
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optio::maybe::Maybe;
//! use optio::typeclass::{Compactable, Filterable};
//!
//! let even = Filterable::filter(Maybe::some(4), |x: &i32| x % 2 == 0);
//! assert_eq!(even, Maybe::some(4));
//!
//! let nested: Maybe<Maybe<i32>> = Maybe::some(Maybe::NONE);
//! let compacted: Maybe<i32> = Compactable::compact(nested);
//! assert_eq!(compacted, Maybe::NONE);
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;

/// A type class for structures whose optional elements can be flattened away.
pub trait Compactable: TypeConstructor {
    /// Removes every empty element, unwrapping the present ones.
    fn compact<B>(self) -> Self::WithType<B>
    where
        Self::Inner: Into<Maybe<B>>;

    /// Splits a structure of `Result`s into its failures and its successes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Compactable;
    ///
    /// let parsed: Maybe<Result<i32, String>> = Maybe::some(Err("bad".to_string()));
    /// let (errors, values): (Maybe<String>, Maybe<i32>) = Compactable::separate(parsed);
    /// assert_eq!(errors, Maybe::some("bad".to_string()));
    /// assert_eq!(values, Maybe::NONE);
    /// ```
    fn separate<B, E>(self) -> (Self::WithType<E>, Self::WithType<B>)
    where
        Self::Inner: Into<Result<B, E>>;
}

/// A type class for structures whose elements can be removed by predicate.
pub trait Filterable: Compactable {
    /// Keeps only the elements satisfying `predicate`.
    #[must_use]
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Self::Inner) -> bool;

    /// Maps every element to an optional value and keeps the present ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Filterable;
    ///
    /// let parse = |s: &str| Maybe::from_result(s.parse::<i32>());
    /// assert_eq!(Filterable::filter_map(Maybe::some("7"), parse), Maybe::some(7));
    /// assert_eq!(Filterable::filter_map(Maybe::some("x"), parse), Maybe::NONE);
    /// ```
    fn filter_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Maybe<B>;

    /// Splits the structure into the rejected and the accepted elements.
    fn partition<P>(self, predicate: P) -> (Self, Self)
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Compactable for Maybe<A> {
    fn compact<B>(self) -> Maybe<B>
    where
        A: Into<Maybe<B>>,
    {
        match self {
            Self::Some(inner) => inner.into(),
            Self::None => Maybe::None,
        }
    }

    fn separate<B, E>(self) -> (Maybe<E>, Maybe<B>)
    where
        A: Into<Result<B, E>>,
    {
        match self {
            Self::Some(inner) => match inner.into() {
                Ok(value) => (Maybe::None, Maybe::Some(value)),
                Err(error) => (Maybe::Some(error), Maybe::None),
            },
            Self::None => (Maybe::None, Maybe::None),
        }
    }
}

impl<A> Filterable for Maybe<A> {
    fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    fn filter_map<B, F>(self, mut function: F) -> Maybe<B>
    where
        F: FnMut(A) -> Maybe<B>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    fn partition<P>(self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&A) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => (Self::None, Self::Some(value)),
            Self::Some(value) => (Self::Some(value), Self::None),
            Self::None => (Self::None, Self::None),
        }
    }
}

//! Newtype wrappers that pick a different monoid for `Maybe`.
//!
//! `Maybe<A>` on its own combines two present values with `A`'s semigroup.
//! When `A` has no semigroup, or when one of the values should simply win,
//! wrap it instead:
//!
//! - [`First`]: keeps the leftmost present value
//! - [`Last`]: keeps the rightmost present value
//!
//! Both have `Maybe::None` as their identity element.
//!
//! # Examples
//!
//! ```rust
//! use optio::maybe::Maybe;
//! use optio::typeclass::{First, Last, Monoid};
//!
//! let settings = vec![Maybe::NONE, Maybe::some("env"), Maybe::some("file")];
//!
//! let first = First::combine_all(settings.iter().copied().map(First::from));
//! assert_eq!(first.into_inner(), Maybe::some("env"));
//!
//! let last = Last::combine_all(settings.into_iter().map(Last::from));
//! assert_eq!(last.into_inner(), Maybe::some("file"));
//! ```

use crate::maybe::Maybe;

// =============================================================================
// First Wrapper
// =============================================================================

/// A `Maybe` whose `combine` keeps the leftmost present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct First<A>(pub Maybe<A>);

impl<A> First<A> {
    /// Creates a new `First` wrapping the given value.
    #[inline]
    pub const fn new(value: Maybe<A>) -> Self {
        Self(value)
    }

    /// Consumes the `First` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> Maybe<A> {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &Maybe<A> {
        &self.0
    }
}

impl<A> Default for First<A> {
    fn default() -> Self {
        Self(Maybe::None)
    }
}

impl<A> From<Maybe<A>> for First<A> {
    fn from(value: Maybe<A>) -> Self {
        Self(value)
    }
}

// =============================================================================
// Last Wrapper
// =============================================================================

/// A `Maybe` whose `combine` keeps the rightmost present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Last<A>(pub Maybe<A>);

impl<A> Last<A> {
    /// Creates a new `Last` wrapping the given value.
    #[inline]
    pub const fn new(value: Maybe<A>) -> Self {
        Self(value)
    }

    /// Consumes the `Last` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> Maybe<A> {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &Maybe<A> {
        &self.0
    }
}

impl<A> Default for Last<A> {
    fn default() -> Self {
        Self(Maybe::None)
    }
}

impl<A> From<Maybe<A>> for Last<A> {
    fn from(value: Maybe<A>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_is_absent() {
        assert_eq!(First::<i32>::default().into_inner(), Maybe::NONE);
        assert_eq!(Last::<i32>::default().into_inner(), Maybe::NONE);
    }

    #[rstest]
    fn from_maybe_wraps() {
        assert_eq!(First::from(Maybe::some(1)), First::new(Maybe::some(1)));
        assert_eq!(Last::from(Maybe::some(1)).as_inner(), &Maybe::some(1));
    }
}

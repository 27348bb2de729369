//! Alternative type class - choice between applicative computations.
//!
//! `Alternative` extends `Applicative` with:
//!
//! - `empty`: the failed computation (for `Maybe`, `None`)
//! - `alt`: the first success of two computations
//! - `guard`: success with `()` when a condition holds
//! - `optional`: a computation that always succeeds, recording whether the
//!   original one did
//! - `choice`: the first success of many computations
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! empty.alt(x) == x
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! x.alt(empty) == x
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```
//!
//! ## Left Distributivity
//!
//! ```text
//! (fa.alt(fb)).fmap(f) == fa.fmap(f).alt(fb.fmap(f))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optio::maybe::Maybe;
//! use optio::typeclass::{Alternative, Functor};
//!
//! let first: Maybe<i32> = Maybe::NONE;
//! assert_eq!(first.alt(Maybe::some(42)), Maybe::some(42));
//!
//! fn positive(n: i32) -> Maybe<i32> {
//!     <Maybe<()>>::guard(n > 0).fmap(move |_| n)
//! }
//! assert_eq!(positive(5), Maybe::some(5));
//! assert_eq!(positive(-3), Maybe::NONE);
//! ```

use super::applicative::Applicative;
use crate::maybe::Maybe;

/// A type class for applicative functors with a monoid structure.
///
/// Unlike [`Maybe::or_else`], `alt` takes its fallback as an already
/// evaluated value.
pub trait Alternative: Applicative {
    /// Returns the identity element for `alt`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Alternative;
    ///
    /// let empty: Maybe<i32> = <Maybe<()>>::empty();
    /// assert_eq!(empty, Maybe::NONE);
    /// ```
    fn empty<B>() -> Self::WithType<B>;

    /// Returns `self` if it succeeded, otherwise `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Alternative;
    ///
    /// assert_eq!(Maybe::some(1).alt(Maybe::some(2)), Maybe::some(1));
    /// assert_eq!(Maybe::NONE.alt(Maybe::some(2)), Maybe::some(2));
    /// ```
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Succeeds with `()` if `condition` holds, otherwise returns `empty`.
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Makes the computation always succeed, wrapping the original outcome
    /// in a `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Alternative;
    ///
    /// assert_eq!(Maybe::some(42).optional(), Maybe::some(Maybe::some(42)));
    /// assert_eq!(Maybe::<i32>::NONE.optional(), Maybe::some(Maybe::NONE));
    /// ```
    fn optional(self) -> Self::WithType<Maybe<Self::Inner>>
    where
        Self: Sized;

    /// Returns the first success among `alternatives`, or `empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Alternative;
    ///
    /// let candidates = vec![Maybe::NONE, Maybe::some(1), Maybe::some(2)];
    /// assert_eq!(Maybe::choice(candidates), Maybe::some(1));
    ///
    /// let nothing: Vec<Maybe<i32>> = vec![Maybe::NONE, Maybe::NONE];
    /// assert_eq!(Maybe::choice(nothing), Maybe::NONE);
    /// ```
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

impl<A> Alternative for Maybe<A> {
    #[inline]
    fn empty<B>() -> Maybe<B> {
        Maybe::None
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or_else(|| alternative)
    }

    #[inline]
    fn optional(self) -> Maybe<Self> {
        Maybe::Some(self)
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .find(Self::is_some)
            .unwrap_or(Self::None)
    }
}

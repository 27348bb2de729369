//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map`, which lets the result of
//! one step decide the next step. For `Maybe`, this is how operations that
//! may each fail to produce a value are sequenced: the first `None` stops
//! the chain.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optio::maybe::Maybe;
//! use optio::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     Maybe::from_result(s.parse::<i32>()).filter(|&n| n > 0)
//! }
//!
//! let result = Maybe::some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::some(n * 2));
//! assert_eq!(result, Maybe::some(84));
//!
//! let rejected = Maybe::some("-1").flat_map(parse_positive);
//! assert_eq!(rejected, Maybe::NONE);
//! ```

use super::applicative::Applicative;
use crate::maybe::Maybe;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Monad;
    ///
    /// let y = Maybe::some(5).flat_map(|n| Maybe::some(n * 2));
    /// assert_eq!(y, Maybe::some(10));
    ///
    /// let w = Maybe::some(5).flat_map(|n| if n > 10 { Maybe::some(n) } else { Maybe::NONE });
    /// assert_eq!(w, Maybe::NONE);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// If `self` is absent, the absence propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::some(5).then(Maybe::some("hello")), Maybe::some("hello"));
    /// assert_eq!(Maybe::<i32>::NONE.then(Maybe::some("hello")), Maybe::NONE);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.chain(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn safe_divide(dividend: i32, divisor: i32) -> Maybe<i32> {
        if divisor == 0 {
            Maybe::NONE
        } else {
            Maybe::some(dividend / divisor)
        }
    }

    #[rstest]
    fn flat_map_some_to_some() {
        assert_eq!(Maybe::some(10).flat_map(|n| safe_divide(n, 2)), Maybe::some(5));
    }

    #[rstest]
    fn flat_map_some_to_none() {
        assert_eq!(Maybe::some(10).flat_map(|n| safe_divide(n, 0)), Maybe::NONE);
    }

    #[rstest]
    fn flat_map_none() {
        assert_eq!(Maybe::<i32>::NONE.flat_map(|n| safe_divide(n, 2)), Maybe::NONE);
    }

    #[rstest]
    fn and_then_alias() {
        let by_flat_map = Maybe::some(8).flat_map(|n| safe_divide(n, 4));
        let by_and_then = Maybe::some(8).and_then(|n| safe_divide(n, 4));
        assert_eq!(by_flat_map, by_and_then);
    }

    #[rstest]
    fn left_identity_law() {
        let function = |n: i32| safe_divide(100, n);
        for value in [0, 1, 7] {
            assert_eq!(<Maybe<()>>::pure(value).flat_map(function), function(value));
        }
    }

    #[rstest]
    #[case(Maybe::some(3))]
    #[case(Maybe::NONE)]
    fn right_identity_law(#[case] value: Maybe<i32>) {
        assert_eq!(value.flat_map(Maybe::some), value);
    }

    #[rstest]
    #[case(Maybe::some(12))]
    #[case(Maybe::some(0))]
    #[case(Maybe::NONE)]
    fn associativity_law(#[case] value: Maybe<i32>) {
        let first = |n: i32| safe_divide(24, n);
        let second = |n: i32| safe_divide(n, 2);
        assert_eq!(
            value.flat_map(first).flat_map(second),
            value.flat_map(|x| first(x).flat_map(second))
        );
    }

    #[rstest]
    fn chained_lookups_short_circuit() {
        let users = [("alice", 1), ("bob", 2)];
        let emails = [(1, "alice@example.com")];

        let find_user = |name: &str| {
            Maybe::from_nullable(users.iter().find(|(user, _)| *user == name).map(|(_, id)| *id))
        };
        let find_email = |id: i32| {
            Maybe::from_nullable(emails.iter().find(|(key, _)| *key == id).map(|(_, email)| *email))
        };

        assert_eq!(find_user("alice").flat_map(find_email), Maybe::some("alice@example.com"));
        assert_eq!(find_user("bob").flat_map(find_email), Maybe::NONE);
        assert_eq!(find_user("carol").flat_map(find_email), Maybe::NONE);
    }
}

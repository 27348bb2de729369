//! Applicative type class - applying functions within a context.
//!
//! `Applicative` extends `Functor` with `pure`, which lifts a plain value
//! into the context, and `map2`, which combines two independent values in
//! the context. For `Maybe`, combining succeeds only if every input is
//! present.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optio::maybe::Maybe;
//! use optio::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::some(42));
//!
//! let sum = Maybe::some(3).map2(Maybe::some(4), |x, y| x + y);
//! assert_eq!(sum, Maybe::some(7));
//! ```

use super::functor::Functor;
use crate::maybe::Maybe;

/// A type class for functors that can lift values and combine independent
/// computations.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Applicative;
    ///
    /// let x: Maybe<&str> = <Maybe<()>>::pure("hello");
    /// assert_eq!(x, Maybe::some("hello"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::some(1).map2(Maybe::some(2), |x, y| x + y), Maybe::some(3));
    /// assert_eq!(Maybe::some(1).map2(Maybe::<i32>::NONE, |x, y| x + y), Maybe::NONE);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Requires both values and keeps the left one.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Requires both values and keeps the right one.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::some(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::some(5)), Maybe::some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip(other).map(|(a, b)| function(a, b))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Some(a), Maybe::Some(b), Maybe::Some(c)) => Maybe::Some(function(a, b, c)),
            _ => Maybe::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pure_creates_some() {
        let value: Maybe<i32> = <Maybe<()>>::pure(42);
        assert_eq!(value, Maybe::some(42));
    }

    #[rstest]
    #[case(Maybe::some(1), Maybe::some(2), Maybe::some(3))]
    #[case(Maybe::some(1), Maybe::NONE, Maybe::NONE)]
    #[case(Maybe::NONE, Maybe::some(2), Maybe::NONE)]
    #[case(Maybe::NONE, Maybe::NONE, Maybe::NONE)]
    fn map2_requires_both(
        #[case] first: Maybe<i32>,
        #[case] second: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(first.map2(second, |x, y| x + y), expected);
    }

    #[rstest]
    fn map3_all_some() {
        let result = Maybe::some(1).map3(Maybe::some(2), Maybe::some(3), |x, y, z| x + y + z);
        assert_eq!(result, Maybe::some(6));
    }

    #[rstest]
    fn map3_with_none() {
        let result = Maybe::some(1).map3(Maybe::<i32>::NONE, Maybe::some(3), |x, y, z| x + y + z);
        assert_eq!(result, Maybe::NONE);
    }

    #[rstest]
    fn product_variants() {
        assert_eq!(Maybe::some(1).product(Maybe::some("a")), Maybe::some((1, "a")));
        assert_eq!(Maybe::some(1).product_left(Maybe::some("a")), Maybe::some(1));
        assert_eq!(Maybe::some(1).product_right(Maybe::some("a")), Maybe::some("a"));
        assert_eq!(Maybe::some(1).product_left(Maybe::<&str>::NONE), Maybe::NONE);
    }

    #[rstest]
    fn apply_with_none_function() {
        let function: Maybe<fn(i32) -> i32> = Maybe::NONE;
        assert_eq!(function.apply(Maybe::some(5)), Maybe::NONE);
    }

    #[rstest]
    fn homomorphism_law() {
        let function = |x: i32| x * 3;
        let left = <Maybe<()>>::pure(function).apply(<Maybe<()>>::pure(4));
        let right: Maybe<i32> = <Maybe<()>>::pure(function(4));
        assert_eq!(left, right);
    }
}

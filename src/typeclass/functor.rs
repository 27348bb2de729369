//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to the value(s) it contains while
//! keeping its shape. For `Maybe`, the shape is "present" or "absent": a
//! `Some` stays a `Some`, and `None` stays `None` without the function
//! being called.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optio::maybe::Maybe;
//! use optio::typeclass::Functor;
//!
//! let some_value = Maybe::some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Maybe::some("5".to_string()));
//!
//! let none_value: Maybe<i32> = Maybe::NONE;
//! assert_eq!(none_value.fmap(|n| n.to_string()), Maybe::NONE);
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::some(5).fmap(|n| n * 2), Maybe::some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the original untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Functor;
    ///
    /// let name = Maybe::some("hello".to_string());
    /// assert_eq!(name.fmap_ref(|s| s.len()), Maybe::some(5));
    /// assert_eq!(name, Maybe::some("hello".to_string()));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::some(5).replace("replaced"), Maybe::some("replaced"));
    /// assert_eq!(Maybe::<i32>::NONE.replace("replaced"), Maybe::NONE);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fmap_some() {
        let value: Maybe<String> = Maybe::some(5).fmap(|n| n.to_string());
        assert_eq!(value, Maybe::some("5".to_string()));
    }

    #[rstest]
    fn fmap_none() {
        let value: Maybe<String> = Maybe::<i32>::NONE.fmap(|n| n.to_string());
        assert_eq!(value, Maybe::NONE);
    }

    #[rstest]
    fn fmap_ref_keeps_original() {
        let original = Maybe::some("hello".to_string());
        let length = original.fmap_ref(String::len);
        assert_eq!(length, Maybe::some(5));
        assert_eq!(original, Maybe::some("hello".to_string()));
    }

    #[rstest]
    #[case(Maybe::some(5), Maybe::some(()))]
    #[case(Maybe::NONE, Maybe::NONE)]
    fn void_keeps_shape(#[case] input: Maybe<i32>, #[case] expected: Maybe<()>) {
        assert_eq!(input.void(), expected);
    }

    #[rstest]
    fn identity_law() {
        for value in [Maybe::some(1), Maybe::NONE] {
            assert_eq!(value.fmap(|x| x), value);
        }
    }

    #[rstest]
    fn composition_law() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        for value in [Maybe::some(3), Maybe::NONE] {
            assert_eq!(
                value.fmap(add_one).fmap(double),
                value.fmap(|x| double(add_one(x)))
            );
        }
    }
}

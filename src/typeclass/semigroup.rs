//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Maybe
//!
//! `Maybe<A>` is a semigroup whenever `A` is. Two present values are
//! combined with `A`'s operation, and an absent value is skipped:
//!
//! ```rust
//! use optio::maybe::Maybe;
//! use optio::typeclass::Semigroup;
//!
//! let left = Maybe::some(String::from("foo"));
//! let right = Maybe::some(String::from("bar"));
//! assert_eq!(left.combine(right), Maybe::some(String::from("foobar")));
//!
//! let only = Maybe::some(vec![1]);
//! assert_eq!(only.combine(Maybe::NONE), Maybe::some(vec![1]));
//! ```
//!
//! For "first present wins" or "last present wins" instead, see
//! [`First`](super::First) and [`Last`](super::Last).

use super::wrappers::{First, Last};
use crate::maybe::Maybe;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values by cloning them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::typeclass::Semigroup;
    ///
    /// let a = String::from("Hello, ");
    /// let b = String::from("World!");
    /// assert_eq!(a.combine_ref(&b), "Hello, World!");
    /// assert_eq!(a, "Hello, ");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("ab").combine_n(3), "ababab");
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Combines every element of an iterator, or returns `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::reduce_all(words), Maybe::some(String::from("abc")));
    /// assert_eq!(String::reduce_all(Vec::new()), Maybe::NONE);
    /// ```
    fn reduce_all<I>(iterator: I) -> Maybe<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
            .into()
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}

// =============================================================================
// Maybe Implementation
// =============================================================================

impl<A: Semigroup> Semigroup for Maybe<A> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => Self::Some(left.combine(right)),
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            (Self::None, Self::None) => Self::None,
        }
    }
}

// =============================================================================
// First / Last Implementations
// =============================================================================

impl<A> Semigroup for First<A> {
    fn combine(self, other: Self) -> Self {
        if self.0.is_some() { self } else { other }
    }
}

impl<A> Semigroup for Last<A> {
    fn combine(self, other: Self) -> Self {
        if other.0.is_some() { other } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        assert_eq!(String::from("foo").combine(String::from("bar")), "foobar");
    }

    #[rstest]
    fn vec_combine_ref_keeps_operands() {
        let left = vec![1, 2];
        let right = vec![3];
        assert_eq!(left.combine_ref(&right), vec![1, 2, 3]);
        assert_eq!(left, vec![1, 2]);
    }

    #[rstest]
    #[case(Maybe::some("a"), Maybe::some("b"), Maybe::some("ab"))]
    #[case(Maybe::some("a"), Maybe::NONE, Maybe::some("a"))]
    #[case(Maybe::NONE, Maybe::some("b"), Maybe::some("b"))]
    #[case(Maybe::NONE, Maybe::NONE, Maybe::NONE)]
    fn maybe_combine_skips_absent(
        #[case] left: Maybe<&str>,
        #[case] right: Maybe<&str>,
        #[case] expected: Maybe<&str>,
    ) {
        let owned = |value: Maybe<&str>| value.map(String::from);
        assert_eq!(owned(left).combine(owned(right)), owned(expected));
    }

    #[rstest]
    fn maybe_associativity() {
        let a = Maybe::some(vec![1]);
        let b = Maybe::NONE;
        let c = Maybe::some(vec![3]);
        assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    #[rstest]
    #[case(Maybe::some(1), Maybe::some(2), Maybe::some(1), Maybe::some(2))]
    #[case(Maybe::some(1), Maybe::NONE, Maybe::some(1), Maybe::some(1))]
    #[case(Maybe::NONE, Maybe::some(2), Maybe::some(2), Maybe::some(2))]
    #[case(Maybe::NONE, Maybe::NONE, Maybe::NONE, Maybe::NONE)]
    fn first_and_last_pick_a_side(
        #[case] left: Maybe<i32>,
        #[case] right: Maybe<i32>,
        #[case] first: Maybe<i32>,
        #[case] last: Maybe<i32>,
    ) {
        assert_eq!(First(left).combine(First(right)), First(first));
        assert_eq!(Last(left).combine(Last(right)), Last(last));
    }

    #[rstest]
    #[should_panic(expected = "combine_n requires count > 0")]
    fn combine_n_rejects_zero() {
        let _ = String::from("x").combine_n(0);
    }

    #[rstest]
    fn reduce_all_of_maybes() {
        let values = vec![Maybe::some(vec![1]), Maybe::NONE, Maybe::some(vec![2])];
        assert_eq!(Maybe::reduce_all(values), Maybe::some(Maybe::some(vec![1, 2])));
    }
}

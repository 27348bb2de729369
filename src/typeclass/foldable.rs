//! Foldable type class - reducing a structure to a summary value.
//!
//! A `Maybe` is a structure holding zero or one element, so every fold
//! either returns the initial value untouched or applies the function once.
//!
//! # Examples
//!
//! ```rust
//! use optio::maybe::Maybe;
//! use optio::typeclass::Foldable;
//!
//! assert_eq!(Maybe::some(5).fold_left(10, |acc, x| acc + x), 15);
//! assert_eq!(Maybe::<i32>::NONE.fold_left(10, |acc, x| acc + x), 10);
//! assert_eq!(Maybe::some(5).to_list(), vec![5]);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::maybe::Maybe;

/// A type class for structures that can be folded to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Foldable;
    ///
    /// let joined = Maybe::some("b").fold_left(String::from("a"), |acc, x| acc + x);
    /// assert_eq!(joined, "ab");
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Foldable;
    ///
    /// let joined = Maybe::some("a").fold_right(String::from("b"), |x, acc| x.to_string() + &acc);
    /// assert_eq!(joined, "ab");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Foldable;
    ///
    /// let text: String = Maybe::some(42).fold_map(|n| n.to_string());
    /// assert_eq!(text, "42");
    ///
    /// let nothing: String = Maybe::<i32>::NONE.fold_map(|n| n.to_string());
    /// assert_eq!(nothing, "");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects all elements into a `Vec`, in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Foldable;
    ///
    /// assert_eq!(Foldable::find(Maybe::some(4), |x| *x > 3), Maybe::some(4));
    /// assert_eq!(Foldable::find(Maybe::some(2), |x| *x > 3), Maybe::NONE);
    /// ```
    fn find<P>(self, mut predicate: P) -> Maybe<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(Maybe::None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Maybe::Some(element)
            } else {
                Maybe::None
            }
        })
    }

    /// Checks whether any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Checks whether every element satisfies the predicate.
    ///
    /// Vacuously true for an empty structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    /// use optio::typeclass::Foldable;
    ///
    /// assert!(Maybe::some(4).for_all(|x| *x % 2 == 0));
    /// assert!(!Maybe::some(3).for_all(|x| *x % 2 == 0));
    /// assert!(Maybe::<i32>::NONE.for_all(|x| *x > 100));
    /// ```
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !Foldable::exists(self, |element| !predicate(element))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Foldable for Maybe<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Some(value) => function(init, value),
            Self::None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Some(value) => function(value, init),
            Self::None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::some(5), 15)]
    #[case(Maybe::NONE, 10)]
    fn fold_left_applies_once_or_not_at_all(#[case] value: Maybe<i32>, #[case] expected: i32) {
        assert_eq!(value.fold_left(10, |acc, x| acc + x), expected);
    }

    #[rstest]
    fn fold_right_passes_element_first() {
        let folded = Maybe::some(3).fold_right(Vec::new(), |x, mut acc| {
            acc.push(x);
            acc
        });
        assert_eq!(folded, vec![3]);
    }

    #[rstest]
    #[case(Maybe::some(5), false, 1)]
    #[case(Maybe::NONE, true, 0)]
    fn emptiness_and_length(
        #[case] value: Maybe<i32>,
        #[case] empty: bool,
        #[case] length: usize,
    ) {
        assert_eq!(Foldable::is_empty(&value), empty);
        assert_eq!(value.length(), length);
    }

    #[rstest]
    fn to_list_of_none_is_empty() {
        assert_eq!(Maybe::<i32>::NONE.to_list(), Vec::<i32>::new());
    }

    #[rstest]
    fn fold_map_into_vec() {
        let collected: Vec<i32> = Maybe::some(2).fold_map(|x| vec![x, x]);
        assert_eq!(collected, vec![2, 2]);
    }

    #[rstest]
    #[case(Maybe::some(4), true)]
    #[case(Maybe::some(2), false)]
    #[case(Maybe::NONE, false)]
    fn exists_through_trait(#[case] value: Maybe<i32>, #[case] expected: bool) {
        assert_eq!(Foldable::exists(&value, |x| *x > 3), expected);
    }

    #[rstest]
    fn find_on_none_never_calls_predicate() {
        let found = Foldable::find(Maybe::<i32>::NONE, |_| panic!("predicate called"));
        assert_eq!(found, Maybe::NONE);
    }
}

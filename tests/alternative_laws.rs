#![cfg(feature = "typeclass")]
//! Property-based tests for the Alternative laws of `Maybe`.
//!
//! ## Monoid Laws
//!
//! 1. **Left Identity**: `empty.alt(x) == x`
//! 2. **Right Identity**: `x.alt(empty) == x`
//! 3. **Associativity**: `(x.alt(y)).alt(z) == x.alt(y.alt(z))`
//!
//! ## Interaction with Applicative
//!
//! 4. **Left Absorption**: `empty.apply(x) == empty`
//! 5. **Right Absorption**: `ff.apply(empty) == empty`
//! 6. **Left Distributivity**: `(fa.alt(fb)).fmap(f) == fa.fmap(f).alt(fb.fmap(f))`

use optio::maybe::Maybe;
use optio::typeclass::{Alternative, Applicative, Functor};
use proptest::prelude::*;
use rstest::rstest;

fn maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

proptest! {
    #[test]
    fn prop_left_identity(value in maybe_i32()) {
        let empty: Maybe<i32> = <Maybe<()>>::empty();
        prop_assert_eq!(empty.alt(value), value);
    }

    #[test]
    fn prop_right_identity(value in maybe_i32()) {
        let empty: Maybe<i32> = <Maybe<()>>::empty();
        prop_assert_eq!(value.alt(empty), value);
    }

    #[test]
    fn prop_associativity(x in maybe_i32(), y in maybe_i32(), z in maybe_i32()) {
        prop_assert_eq!(x.alt(y).alt(z), x.alt(y.alt(z)));
    }

    #[test]
    fn prop_left_absorption(value in maybe_i32()) {
        let empty: Maybe<fn(i32) -> i32> = <Maybe<()>>::empty();
        let result: Maybe<i32> = empty.apply(value);
        prop_assert_eq!(result, Maybe::NONE);
    }

    #[test]
    fn prop_right_absorption(_value in any::<i32>()) {
        let function: Maybe<fn(i32) -> i32> = Maybe::some(|x| x.wrapping_mul(2));
        let empty: Maybe<i32> = <Maybe<()>>::empty();
        let result: Maybe<i32> = function.apply(empty);
        prop_assert_eq!(result, Maybe::NONE);
    }

    #[test]
    fn prop_left_distributivity(fa in maybe_i32(), fb in maybe_i32()) {
        let function = |n: i32| n.wrapping_mul(2);
        let left = fa.alt(fb).fmap(function);
        let right = fa.fmap(function).alt(fb.fmap(function));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_alt_agrees_with_lazy_or_else(x in maybe_i32(), y in maybe_i32()) {
        prop_assert_eq!(x.alt(y), x.or_else(|| y));
    }

    #[test]
    fn prop_choice_is_folded_alt(candidates in prop::collection::vec(maybe_i32(), 0..8)) {
        let folded = candidates
            .iter()
            .copied()
            .fold(Maybe::NONE, Alternative::alt);
        prop_assert_eq!(Maybe::choice(candidates), folded);
    }
}

#[rstest]
fn guard_true_returns_pure_unit() {
    let result: Maybe<()> = <Maybe<()>>::guard(true);
    assert_eq!(result, Maybe::some(()));
}

#[rstest]
fn guard_false_returns_empty() {
    let result: Maybe<()> = <Maybe<()>>::guard(false);
    assert_eq!(result, Maybe::NONE);
}

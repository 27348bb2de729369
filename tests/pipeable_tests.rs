//! Integration tests for the curried, data-last combinators.
//!
//! Every combinator returns a reusable `Fn`, so the same stage is applied to
//! several inputs here.

use optio::maybe::pipeable::{
    alt, ap, chain, chain_first, chain_nullable, compact, elem, exists, filter, filter_map,
    flat_map, flatten, fold, from_nullable, from_nullable_k, from_predicate, get_or_else, is_none,
    is_some, map, none, partition, r#match, require, separate, some, tap, to_nullable,
    to_undefined, try_catch,
};
use optio::maybe::{Maybe, MissingValueError};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn none_and_some() {
    assert_eq!(none::<i32>(), Maybe::NONE);
    assert_eq!(some(1), Maybe::some(1));
    assert!(is_some(&some(1)));
    assert!(is_none(&none::<i32>()));
}

#[rstest]
fn from_nullable_cases() {
    assert_eq!(from_nullable::<i32>(None), none());
    assert_eq!(from_nullable(Some(1)), some(1));
}

#[rstest]
#[case(-1, none())]
#[case(1, some(1))]
fn from_predicate_non_negative(#[case] input: i32, #[case] expected: Maybe<i32>) {
    let non_negative = from_predicate(|n: &i32| *n >= 0);
    assert_eq!(non_negative(input), expected);
}

#[rstest]
fn from_nullable_k_lifts_lookup() {
    let words = ["zero", "one", "two"];
    let word_at = from_nullable_k(|index: usize| words.get(index).copied());

    assert_eq!(word_at(1), some("one"));
    assert_eq!(word_at(5), none());
}

#[rstest]
fn try_catch_keeps_only_success() {
    assert_eq!(try_catch(|| "42".parse::<i32>()), some(42));
    assert_eq!(try_catch(|| "4x2".parse::<i32>()), none());
}

#[rstest]
fn exists_and_elem() {
    let is_even = exists(|n: &i32| n % 2 == 0);
    assert!(is_even(some(2)));
    assert!(!is_even(some(3)));
    assert!(!is_even(none()));

    let is_seven = elem(7);
    assert!(is_seven(some(7)));
    assert!(!is_seven(some(8)));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
#[case(some(3), Some(3))]
#[case(none(), None)]
fn nullable_conversions(#[case] value: Maybe<i32>, #[case] expected: Option<i32>) {
    assert_eq!(to_nullable(value), expected);
    assert_eq!(to_undefined(value), expected);
}

#[rstest]
fn get_or_else_reused_across_inputs() {
    let calls = Cell::new(0);
    let or_zero = get_or_else(|| {
        calls.set(calls.get() + 1);
        0
    });

    assert_eq!(or_zero(some(1)), 1);
    assert_eq!(or_zero(some(2)), 2);
    assert_eq!(calls.get(), 0);

    assert_eq!(or_zero(none()), 0);
    assert_eq!(or_zero(none()), 0);
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn match_and_fold_are_the_same() {
    let describe = r#match(|| "value is none".to_string(), |v: i32| format!("value containing {v}"));
    let folded = fold(|| "value is none".to_string(), |v: i32| format!("value containing {v}"));

    assert_eq!(describe(some(1)), "value containing 1");
    assert_eq!(describe(none()), "value is none");
    assert_eq!(folded(some(1)), describe(some(1)));
    assert_eq!(folded(none()), describe(none()));
}

#[rstest]
fn require_with_label() {
    let user_id = require::<u64>("user id");
    assert_eq!(user_id(some(7)), Ok(7));
    assert_eq!(user_id(none()), Err(MissingValueError { what: "user id" }));
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_filter_chain() {
    let square = map(|x: i32| x * x);
    let positive = filter(|x: &i32| *x > 0);
    let halve = chain(|x: i32| if x % 2 == 0 { some(x / 2) } else { none() });

    assert_eq!(square(some(3)), some(9));
    assert_eq!(square(none()), none());
    assert_eq!(positive(some(-1)), none());
    assert_eq!(positive(some(1)), some(1));
    assert_eq!(halve(some(4)), some(2));
    assert_eq!(halve(some(3)), none());
    assert_eq!(halve(none()), none());
}

#[rstest]
fn flat_map_is_chain() {
    let lookup = |key: &'static str| if key == "a" { some(1) } else { none() };
    let by_chain = chain(lookup);
    let by_flat_map = flat_map(lookup);

    for key in [some("a"), some("b"), none()] {
        assert_eq!(by_chain(key), by_flat_map(key));
    }
}

#[rstest]
fn filter_map_and_partition() {
    let parse = filter_map(|s: &'static str| Maybe::from_result(s.parse::<u8>()));
    assert_eq!(parse(some("8")), some(8));
    assert_eq!(parse(some("-8")), none());

    let split = partition(|n: &i32| *n > 10);
    assert_eq!(split(some(11)), (none(), some(11)));
    assert_eq!(split(some(9)), (some(9), none()));
    assert_eq!(split(none()), (none(), none()));
}

#[rstest]
fn chain_nullable_and_chain_first() {
    let first_char = chain_nullable(|s: String| s.chars().next());
    assert_eq!(first_char(some("abc".to_string())), some('a'));
    assert_eq!(first_char(some(String::new())), none());

    let must_be_even = chain_first(|n: &i32| if n % 2 == 0 { some(()) } else { none() });
    assert_eq!(must_be_even(some(4)), some(4));
    assert_eq!(must_be_even(some(5)), none());
}

#[rstest]
fn tap_runs_for_each_present_value() {
    let total = Cell::new(0);
    let record = tap(|n: &i32| total.set(total.get() + n));

    assert_eq!(record(some(2)), some(2));
    assert_eq!(record(none()), none());
    assert_eq!(record(some(3)), some(3));
    assert_eq!(total.get(), 5);
}

#[rstest]
fn alt_falls_back_lazily() {
    let calls = Cell::new(0);
    let or_default = alt(|| {
        calls.set(calls.get() + 1);
        some(0)
    });

    assert_eq!(or_default(some(5)), some(5));
    assert_eq!(calls.get(), 0);
    assert_eq!(or_default(none()), some(0));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn ap_applies_wrapped_function() {
    let to_ten = ap::<i32, i32, fn(i32) -> i32>(some(10));
    assert_eq!(to_ten(some(|n| n + 1)), some(11));
    assert_eq!(to_ten(none()), none());

    let to_nothing = ap::<i32, i32, fn(i32) -> i32>(none());
    assert_eq!(to_nothing(some(|n| n + 1)), none());
}

#[rstest]
fn flatten_compact_separate() {
    assert_eq!(flatten(some(some(1))), some(1));
    assert_eq!(compact(some(none::<i32>())), none());

    let parsed: Maybe<Result<i32, String>> = some(Ok(1));
    assert_eq!(separate(parsed), (none(), some(1)));
}

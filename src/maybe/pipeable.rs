//! Curried, data-last combinators over [`Maybe`].
//!
//! Each transformation here takes its configuration (a function, a
//! predicate, a default) first and returns a function from `Maybe` to the
//! result. The returned functions implement [`Fn`], so one pipeline stage
//! can be applied to many values, and they slot directly into `pipe!`.
//!
//! # Examples
//!
//! ```rust
//! use optio::pipe;
//! use optio::maybe::Maybe;
//! use optio::maybe::pipeable::{filter, map, some, none};
//!
//! let square = map(|x: i32| x * x);
//! let positive = filter(|x: &i32| *x > 0);
//!
//! let results: Vec<Maybe<i32>> = vec![some(0), none(), some(4), some(5)]
//!     .into_iter()
//!     .map(|value| pipe!(value, &square, &positive))
//!     .collect();
//!
//! assert_eq!(results, vec![none(), none(), some(16), some(25)]);
//! ```

use super::{Maybe, MissingValueError};

// =============================================================================
// Construction
// =============================================================================

/// Returns the absent value.
#[inline]
pub const fn none<A>() -> Maybe<A> {
    Maybe::None
}

/// Wraps a value in `Some`.
#[inline]
pub const fn some<A>(value: A) -> Maybe<A> {
    Maybe::Some(value)
}

/// Converts a nullable value into a `Maybe`.
///
/// # Examples
///
/// ```rust
/// use optio::maybe::pipeable::{from_nullable, none, some};
///
/// assert_eq!(from_nullable::<i32>(None), none());
/// assert_eq!(from_nullable(Some(1)), some(1));
/// ```
#[inline]
pub fn from_nullable<A>(value: Option<A>) -> Maybe<A> {
    Maybe::from_nullable(value)
}

/// Builds a constructor that yields `Some(x)` when `predicate(x)` holds and
/// `None` otherwise.
///
/// # Examples
///
/// ```rust
/// use optio::maybe::pipeable::{from_predicate, none, some};
///
/// let non_negative = from_predicate(|n: &i32| *n >= 0);
/// assert_eq!(non_negative(-1), none());
/// assert_eq!(non_negative(1), some(1));
/// ```
#[inline]
pub fn from_predicate<A, P>(predicate: P) -> impl Fn(A) -> Maybe<A>
where
    P: Fn(&A) -> bool,
{
    move |value| Maybe::from_predicate(value, &predicate)
}

/// Lifts a nullable-returning function into a `Maybe`-returning one.
///
/// # Examples
///
/// ```rust
/// use optio::maybe::pipeable::{from_nullable_k, none, some};
///
/// let first_word = from_nullable_k(|text: &str| text.split_whitespace().next());
/// assert_eq!(first_word("hello world"), some("hello"));
/// assert_eq!(first_word("   "), none());
/// ```
#[inline]
pub fn from_nullable_k<X, A, F>(function: F) -> impl Fn(X) -> Maybe<A>
where
    F: Fn(X) -> Option<A>,
{
    move |input| Maybe::from_nullable(function(input))
}

/// Runs a fallible computation, keeping its value and discarding its error.
///
/// # Examples
///
/// ```rust
/// use optio::maybe::pipeable::{try_catch, none, some};
///
/// assert_eq!(try_catch(|| "7".parse::<u8>()), some(7));
/// assert_eq!(try_catch(|| "700".parse::<u8>()), none());
/// ```
#[inline]
pub fn try_catch<A, E, F>(thunk: F) -> Maybe<A>
where
    F: FnOnce() -> Result<A, E>,
{
    Maybe::from_result(thunk())
}

// =============================================================================
// Inspection
// =============================================================================

/// Returns `true` for `Some`.
#[inline]
pub const fn is_some<A>(maybe: &Maybe<A>) -> bool {
    maybe.is_some()
}

/// Returns `true` for `None`.
#[inline]
pub const fn is_none<A>(maybe: &Maybe<A>) -> bool {
    maybe.is_none()
}

/// Builds a test for "present and satisfying `predicate`".
#[inline]
pub fn exists<A, P>(predicate: P) -> impl Fn(Maybe<A>) -> bool
where
    P: Fn(&A) -> bool,
{
    move |maybe| maybe.exists(&predicate)
}

/// Builds a test for "present and equal to `candidate`".
#[inline]
pub fn elem<A>(candidate: A) -> impl Fn(Maybe<A>) -> bool
where
    A: PartialEq,
{
    move |maybe| maybe.elem(&candidate)
}

// =============================================================================
// Extraction
// =============================================================================

/// Converts into a nullable value.
#[inline]
pub fn to_nullable<A>(maybe: Maybe<A>) -> Option<A> {
    maybe.to_nullable()
}

/// Converts into an "undefined-able" value; identical to [`to_nullable`].
#[inline]
pub fn to_undefined<A>(maybe: Maybe<A>) -> Option<A> {
    maybe.to_undefined()
}

/// Builds an extractor returning the payload, or `default()` for `None`.
///
/// `default` runs on every `None` it meets and never on `Some`.
///
/// # Examples
///
/// ```rust
/// use optio::maybe::pipeable::{get_or_else, none, some};
///
/// let or_zero = get_or_else(|| 0);
/// assert_eq!(or_zero(some(5)), 5);
/// assert_eq!(or_zero(none()), 0);
/// ```
#[inline]
pub fn get_or_else<A, D>(default: D) -> impl Fn(Maybe<A>) -> A
where
    D: Fn() -> A,
{
    move |maybe| maybe.get_or_else(&default)
}

/// Builds an eliminator running `on_none` or `on_some`, exactly one per call.
///
/// # Examples
///
/// ```rust
/// use optio::maybe::pipeable::{r#match, none, some};
///
/// let describe = r#match(
///     || "value is none".to_string(),
///     |value: i32| format!("value containing {}", value),
/// );
///
/// assert_eq!(describe(some(1)), "value containing 1");
/// assert_eq!(describe(none()), "value is none");
/// ```
#[inline]
pub fn r#match<A, B, N, S>(on_none: N, on_some: S) -> impl Fn(Maybe<A>) -> B
where
    N: Fn() -> B,
    S: Fn(A) -> B,
{
    move |maybe| maybe.fold(&on_none, &on_some)
}

/// Alias of [`r#match`].
#[inline]
pub fn fold<A, B, N, S>(on_none: N, on_some: S) -> impl Fn(Maybe<A>) -> B
where
    N: Fn() -> B,
    S: Fn(A) -> B,
{
    r#match(on_none, on_some)
}

/// Builds an extractor that requires the value to be present.
///
/// # Examples
///
/// ```rust
/// use optio::maybe::pipeable::{require, none, some};
///
/// let require_port = require::<u16>("port");
/// assert_eq!(require_port(some(80)), Ok(80));
/// assert!(require_port(none()).is_err());
/// ```
#[inline]
pub fn require<A>(what: &'static str) -> impl Fn(Maybe<A>) -> Result<A, MissingValueError> {
    move |maybe| maybe.require(what)
}

// =============================================================================
// Transformation
// =============================================================================

/// Builds a transformation applying `function` to the payload of `Some`.
#[inline]
pub fn map<A, B, F>(function: F) -> impl Fn(Maybe<A>) -> Maybe<B>
where
    F: Fn(A) -> B,
{
    move |maybe| maybe.map(&function)
}

/// Builds a transformation keeping `Some(v)` only when `predicate(v)` holds.
#[inline]
pub fn filter<A, P>(predicate: P) -> impl Fn(Maybe<A>) -> Maybe<A>
where
    P: Fn(&A) -> bool,
{
    move |maybe| maybe.filter(&predicate)
}

/// Builds a transformation that maps and filters in one step.
#[inline]
pub fn filter_map<A, B, F>(function: F) -> impl Fn(Maybe<A>) -> Maybe<B>
where
    F: Fn(A) -> Maybe<B>,
{
    move |maybe| maybe.filter_map(&function)
}

/// Builds a splitter returning `(failed, passed)`.
#[inline]
pub fn partition<A, P>(predicate: P) -> impl Fn(Maybe<A>) -> (Maybe<A>, Maybe<A>)
where
    P: Fn(&A) -> bool,
{
    move |maybe| maybe.partition(&predicate)
}

/// Builds a sequencing step: `Some(v)` becomes `function(v)`, `None` stays.
///
/// # Examples
///
/// ```rust
/// use optio::pipe;
/// use optio::maybe::pipeable::{chain, none, some};
///
/// let reciprocal = chain(|x: f64| if x == 0.0 { none() } else { some(1.0 / x) });
///
/// assert_eq!(pipe!(some(4.0), &reciprocal), some(0.25));
/// assert_eq!(pipe!(some(0.0), &reciprocal), none());
/// assert_eq!(pipe!(none(), &reciprocal), none());
/// ```
#[inline]
pub fn chain<A, B, F>(function: F) -> impl Fn(Maybe<A>) -> Maybe<B>
where
    F: Fn(A) -> Maybe<B>,
{
    move |maybe| maybe.chain(&function)
}

/// Alias of [`chain`].
#[inline]
pub fn flat_map<A, B, F>(function: F) -> impl Fn(Maybe<A>) -> Maybe<B>
where
    F: Fn(A) -> Maybe<B>,
{
    chain(function)
}

/// Builds a sequencing step for a nullable-returning function.
#[inline]
pub fn chain_nullable<A, B, F>(function: F) -> impl Fn(Maybe<A>) -> Maybe<B>
where
    F: Fn(A) -> Option<B>,
{
    move |maybe| maybe.chain_nullable(&function)
}

/// Builds a validation step that keeps the value when `function` yields `Some`.
#[inline]
pub fn chain_first<A, B, F>(function: F) -> impl Fn(Maybe<A>) -> Maybe<A>
where
    F: Fn(&A) -> Maybe<B>,
{
    move |maybe| maybe.chain_first(&function)
}

/// Builds a step that observes the payload and passes the value on unchanged.
#[inline]
pub fn tap<A, F>(function: F) -> impl Fn(Maybe<A>) -> Maybe<A>
where
    F: Fn(&A),
{
    move |maybe| maybe.tap(&function)
}

/// Builds a fallback step: `None` is replaced by `alternative()`.
///
/// # Examples
///
/// ```rust
/// use optio::maybe::pipeable::{alt, none, some};
///
/// let or_default_port = alt(|| some(8080));
/// assert_eq!(or_default_port(some(80)), some(80));
/// assert_eq!(or_default_port(none()), some(8080));
/// ```
#[inline]
pub fn alt<A, F>(alternative: F) -> impl Fn(Maybe<A>) -> Maybe<A>
where
    F: Fn() -> Maybe<A>,
{
    move |maybe| maybe.or_else(&alternative)
}

/// Builds an application step feeding `value` into a `Maybe` of function.
///
/// # Examples
///
/// ```rust
/// use optio::maybe::pipeable::{ap, none, some};
///
/// let with_two = ap::<i32, i32, fn(i32) -> i32>(some(2));
/// assert_eq!(with_two(some(|x| x * 10)), some(20));
/// assert_eq!(with_two(none()), none());
/// ```
#[inline]
pub fn ap<A, B, F>(value: Maybe<A>) -> impl Fn(Maybe<F>) -> Maybe<B>
where
    A: Clone,
    F: FnOnce(A) -> B,
{
    move |function| function.ap(value.clone())
}

/// Removes one level of nesting.
#[inline]
pub fn flatten<A>(maybe: Maybe<Maybe<A>>) -> Maybe<A> {
    maybe.flatten()
}

/// Alias of [`flatten`] using the `Compactable` vocabulary.
#[inline]
pub fn compact<A>(maybe: Maybe<Maybe<A>>) -> Maybe<A> {
    maybe.flatten()
}

/// Splits a `Maybe` of `Result` into `(errors, successes)`.
#[inline]
pub fn separate<A, E>(maybe: Maybe<Result<A, E>>) -> (Maybe<E>, Maybe<A>) {
    maybe.separate()
}

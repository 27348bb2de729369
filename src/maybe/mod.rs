//! Maybe type - a value that may or may not be present.
//!
//! This module provides the `Maybe<A>` type, which is either `None`
//! (absence) or `Some(A)` (presence). It is an immutable value: no method
//! hands out mutable access to the payload, and every combinator returns a
//! new `Maybe`.
//!
//! Combinators come in two flavours:
//!
//! - Inherent methods on [`Maybe`], for method-chaining style.
//! - Curried free functions in [`pipeable`], which take their configuration
//!   first and return a function over `Maybe`. These compose with `pipe!`.
//!
//! Every transformation is the identity on `None`: the supplied function is
//! not called at all.
//!
//! # Examples
//!
//! ```rust
//! use optio::maybe::Maybe;
//!
//! let present = Maybe::some(3);
//! let absent: Maybe<i32> = Maybe::NONE;
//!
//! assert_eq!(present.map(|x| x * 2), Maybe::some(6));
//! assert_eq!(absent.map(|x| x * 2), Maybe::NONE);
//!
//! let description = present.fold(
//!     || "value is none".to_string(),
//!     |value| format!("value containing {}", value),
//! );
//! assert_eq!(description, "value containing 3");
//! ```

mod error;
pub mod pipeable;

pub use error::MissingValueError;

use std::fmt;

/// A value that is either absent (`None`) or present (`Some(A)`).
///
/// `Maybe` is a closed sum type, so `Maybe::<Option<i32>>::Some(None)` and
/// `Maybe::None` are different values.
///
/// Ordering places `None` before any `Some`; two `Some` values compare by
/// their payloads.
///
/// # Type Parameters
///
/// * `A` - The type of the payload
///
/// # Examples
///
/// ```rust
/// use optio::maybe::Maybe;
///
/// let some: Maybe<i32> = Maybe::Some(1);
/// let none: Maybe<i32> = Maybe::None;
///
/// assert!(some.is_some());
/// assert!(none < some);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// The absent variant. Carries no payload.
    None,
    /// The present variant, carrying exactly one value.
    Some(A),
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy, Eq, Ord, std::hash::Hash);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Maybe<String>: Copy);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

impl<A> Maybe<A> {
    /// The absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// let absent: Maybe<String> = Maybe::NONE;
    /// assert!(absent.is_none());
    /// ```
    pub const NONE: Self = Self::None;

    // =========================================================================
    // Construction
    // =========================================================================

    /// Returns the absent value. Equivalent to [`Maybe::NONE`].
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Wraps a value in `Some`. This cannot fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some("a"), Maybe::Some("a"));
    /// ```
    #[inline]
    pub const fn some(value: A) -> Self {
        Self::Some(value)
    }

    /// Converts a nullable value into a `Maybe`.
    ///
    /// `None` becomes `Maybe::None`, `Some(x)` becomes `Maybe::Some(x)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::NONE);
    /// assert_eq!(Maybe::from_nullable(Some(1)), Maybe::some(1));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<A>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Returns `Some(value)` if the predicate holds for `value`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::from_predicate(1, |n| *n >= 0), Maybe::some(1));
    /// assert_eq!(Maybe::from_predicate(-1, |n| *n >= 0), Maybe::NONE);
    /// ```
    #[inline]
    pub fn from_predicate<P>(value: A, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        if predicate(&value) {
            Self::Some(value)
        } else {
            Self::None
        }
    }

    /// Keeps the success value of a `Result`, discarding the error.
    #[inline]
    pub fn from_result<E>(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Some(value),
            Err(_) => Self::None,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is the `None` value.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the payload, producing a `Maybe<&A>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// let name = Maybe::some("optio".to_string());
    /// assert_eq!(name.as_ref().map(|s| s.len()), Maybe::some(5));
    /// // name is still available
    /// assert!(name.is_some());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns `true` if this is `Some` and the predicate holds for the payload.
    ///
    /// The predicate is not called on `None`.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` if this is `Some` and the payload equals `candidate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// assert!(Maybe::some(1).elem(&1));
    /// assert!(!Maybe::some(1).elem(&2));
    /// assert!(!Maybe::<i32>::NONE.elem(&1));
    /// ```
    #[inline]
    pub fn elem(&self, candidate: &A) -> bool
    where
        A: PartialEq,
    {
        self.exists(|value| value == candidate)
    }

    /// Returns an iterator over the payload: one item for `Some`, none for `None`.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&A> {
        self.as_ref().to_nullable().into_iter()
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Converts into a nullable value: `Some(x)` for `Some(x)`, `None` for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).to_nullable(), Some(1));
    /// assert_eq!(Maybe::<i32>::NONE.to_nullable(), None);
    /// ```
    #[inline]
    pub fn to_nullable(self) -> Option<A> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Converts into an "undefined-able" value.
    ///
    /// Rust has a single absence marker, so this coincides with
    /// [`Maybe::to_nullable`].
    #[inline]
    pub fn to_undefined(self) -> Option<A> {
        self.to_nullable()
    }

    /// Returns the payload, or the result of `default` if this is `None`.
    ///
    /// `default` is only invoked on the `None` path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).get_or_else(|| 0), 1);
    /// assert_eq!(Maybe::NONE.get_or_else(|| 0), 0);
    ///
    /// // The default is not evaluated for Some
    /// let value = Maybe::some(1).get_or_else(|| unreachable!());
    /// assert_eq!(value, 1);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    /// Eliminates the `Maybe` by running exactly one of two functions.
    ///
    /// This is "pattern matching as a function"; the pipeable forms are
    /// [`pipeable::fold`] and `pipeable::r#match`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// let describe = |value: Maybe<i32>| {
    ///     value.fold(|| "value is none".to_string(), |v| format!("value containing {}", v))
    /// };
    ///
    /// assert_eq!(describe(Maybe::some(1)), "value containing 1");
    /// assert_eq!(describe(Maybe::NONE), "value is none");
    /// ```
    #[inline]
    pub fn fold<B, N, S>(self, on_none: N, on_some: S) -> B
    where
        N: FnOnce() -> B,
        S: FnOnce(A) -> B,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Converts into a `Result`, using `error` for the `None` case.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` if this is `None`.
    #[inline]
    pub fn to_result<E>(self, error: E) -> Result<A, E> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(error),
        }
    }

    /// Converts into a `Result`, computing the error lazily for the `None` case.
    ///
    /// # Errors
    ///
    /// Returns `Err(error())` if this is `None`.
    #[inline]
    pub fn to_result_with<E, F>(self, error: F) -> Result<A, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(error()),
        }
    }

    /// Requires the value to be present.
    ///
    /// # Errors
    ///
    /// Returns [`MissingValueError`] naming `what` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// fn port(configured: Maybe<u16>) -> Result<u16, Box<dyn std::error::Error>> {
    ///     let port = configured.require("port")?;
    ///     Ok(port)
    /// }
    ///
    /// assert_eq!(port(Maybe::some(8080)).unwrap(), 8080);
    /// assert_eq!(
    ///     port(Maybe::NONE).unwrap_err().to_string(),
    ///     "port: expected a value, found none"
    /// );
    /// ```
    #[inline]
    pub fn require(self, what: &'static str) -> Result<A, MissingValueError> {
        self.to_result_with(|| MissingValueError { what })
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies a function to the payload of `Some`; `None` passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).map(|x| x * x), Maybe::some(4));
    /// assert_eq!(Maybe::<i32>::NONE.map(|x| x * x), Maybe::NONE);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Keeps `Some(v)` only if the predicate holds for `v`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(4).filter(|x| *x > 0), Maybe::some(4));
    /// assert_eq!(Maybe::some(0).filter(|x| *x > 0), Maybe::NONE);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.chain(|value| Self::from_predicate(value, predicate))
    }

    /// Maps and filters in one step: `Some(v)` becomes `function(v)`.
    ///
    /// Behaves exactly like [`Maybe::chain`]; the separate name mirrors the
    /// `Filterable` vocabulary.
    #[inline]
    pub fn filter_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.chain(function)
    }

    /// Splits by a predicate into `(failed, passed)`.
    ///
    /// At most one side is `Some`. For `None`, both sides are `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(3).partition(|x| *x > 2), (Maybe::NONE, Maybe::some(3)));
    /// assert_eq!(Maybe::some(1).partition(|x| *x > 2), (Maybe::some(1), Maybe::NONE));
    /// ```
    #[inline]
    pub fn partition<P>(self, predicate: P) -> (Self, Self)
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    (Self::None, Self::Some(value))
                } else {
                    (Self::Some(value), Self::None)
                }
            }
            Self::None => (Self::None, Self::None),
        }
    }

    /// Applies a `Maybe`-returning function to the payload and returns its
    /// result directly, so no `Maybe<Maybe<B>>` is produced.
    ///
    /// This is the sequencing primitive: each step may independently fail
    /// to produce a value, and the first `None` short-circuits the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::NONE }
    /// }
    ///
    /// assert_eq!(Maybe::some(8).chain(half).chain(half), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).chain(half).chain(half), Maybe::NONE);
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Like [`Maybe::chain`], for a function returning a nullable value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// let first_char = Maybe::some("abc").chain_nullable(|s| s.chars().next());
    /// assert_eq!(first_char, Maybe::some('a'));
    ///
    /// let empty = Maybe::some("").chain_nullable(|s| s.chars().next());
    /// assert_eq!(empty, Maybe::NONE);
    /// ```
    #[inline]
    pub fn chain_nullable<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.chain(|value| Maybe::from_nullable(function(value)))
    }

    /// Runs `function` on the payload and keeps `self` if it yields `Some`.
    ///
    /// Useful for validations that need the value but do not transform it.
    #[inline]
    #[must_use]
    pub fn chain_first<B, F>(self, function: F) -> Self
    where
        F: FnOnce(&A) -> Maybe<B>,
    {
        self.chain(|value| {
            if function(&value).is_some() {
                Self::Some(value)
            } else {
                Self::None
            }
        })
    }

    /// Runs `function` on the payload for its side effect and returns `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let value = Maybe::some(1).tap(|v| seen.push(*v)).map(|v| v + 1);
    /// assert_eq!(value, Maybe::some(2));
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    /// Returns `self` if it is `Some`, otherwise the result of `alternative`.
    ///
    /// `alternative` is only invoked on the `None` path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).or_else(|| Maybe::some(2)), Maybe::some(1));
    /// assert_eq!(Maybe::NONE.or_else(|| Maybe::some(2)), Maybe::some(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => alternative(),
        }
    }

    /// Pairs two values if both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).zip(Maybe::some("a")), Maybe::some((1, "a")));
    /// assert_eq!(Maybe::some(1).zip(Maybe::<&str>::NONE), Maybe::NONE);
    /// ```
    #[inline]
    pub fn zip<B>(self, other: Maybe<B>) -> Maybe<(A, B)> {
        match (self, other) {
            (Self::Some(first), Maybe::Some(second)) => Maybe::Some((first, second)),
            _ => Maybe::None,
        }
    }

    /// Applies a fallible function to the payload.
    ///
    /// `None` yields `Ok(Maybe::None)` without calling `function`.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `function`, unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// let parsed = Maybe::some("42").try_map(|s| s.parse::<i32>());
    /// assert_eq!(parsed, Ok(Maybe::some(42)));
    ///
    /// let failed = Maybe::some("x").try_map(|s| s.parse::<i32>());
    /// assert!(failed.is_err());
    ///
    /// let skipped = Maybe::<&str>::NONE.try_map(|s| s.parse::<i32>());
    /// assert_eq!(skipped, Ok(Maybe::NONE));
    /// ```
    #[inline]
    pub fn try_map<B, E, F>(self, function: F) -> Result<Maybe<B>, E>
    where
        F: FnOnce(A) -> Result<B, E>,
    {
        match self {
            Self::Some(value) => function(value).map(Maybe::Some),
            Self::None => Ok(Maybe::None),
        }
    }
}

impl<A: Default> Maybe<A> {
    /// Returns the payload, or `A::default()` if this is `None`.
    #[inline]
    pub fn get_or_default(self) -> A {
        self.get_or_else(A::default)
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::some(1));
    /// assert_eq!(Maybe::some(Maybe::<i32>::NONE).flatten(), Maybe::NONE);
    /// assert_eq!(Maybe::<Maybe<i32>>::NONE.flatten(), Maybe::NONE);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        self.chain(|inner| inner)
    }
}

impl<A, E> Maybe<Result<A, E>> {
    /// Splits a `Maybe` of `Result` into `(errors, successes)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// let ok: Maybe<Result<i32, String>> = Maybe::some(Ok(1));
    /// assert_eq!(ok.separate(), (Maybe::NONE, Maybe::some(1)));
    ///
    /// let err: Maybe<Result<i32, String>> = Maybe::some(Err("bad".to_string()));
    /// assert_eq!(err.separate(), (Maybe::some("bad".to_string()), Maybe::NONE));
    /// ```
    #[inline]
    pub fn separate(self) -> (Maybe<E>, Maybe<A>) {
        match self {
            Self::Some(Ok(value)) => (Maybe::None, Maybe::Some(value)),
            Self::Some(Err(error)) => (Maybe::Some(error), Maybe::None),
            Self::None => (Maybe::None, Maybe::None),
        }
    }
}

impl<F> Maybe<F> {
    /// Applies a function held in a `Maybe` to a value held in a `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optio::maybe::Maybe;
    ///
    /// let increment = Maybe::some(|x: i32| x + 1);
    /// assert_eq!(increment.ap(Maybe::some(1)), Maybe::some(2));
    /// assert_eq!(increment.ap(Maybe::NONE), Maybe::NONE);
    /// ```
    #[inline]
    pub fn ap<A, B>(self, value: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, value) {
            (Self::Some(function), Maybe::Some(value)) => Maybe::Some(function(value)),
            _ => Maybe::None,
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A> Default for Maybe<A> {
    /// Returns `None`.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    /// Renders `none` or `some(<payload>)`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "some({value})"),
            Self::None => formatter.write_str("none"),
        }
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        Self::from_nullable(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(value: Maybe<A>) -> Self {
        value.to_nullable()
    }
}

impl<A, E> From<Result<A, E>> for Maybe<A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        Self::from_result(result)
    }
}

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.to_nullable().into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Maybe<A> {
    type Item = &'a A;
    type IntoIter = std::option::IntoIter<&'a A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

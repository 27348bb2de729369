//! Error type for turning absence into a failure at an API boundary.
//!
//! `Maybe` itself never fails: absence is represented as data. This error
//! only exists for callers that need a `Result` (for example to use `?`
//! inside a function returning `Result`).

/// Represents a required value that turned out to be `None`.
///
/// Produced by [`Maybe::require`](super::Maybe::require).
///
/// # Examples
///
/// ```rust
/// use optio::maybe::{Maybe, MissingValueError};
///
/// let error = MissingValueError { what: "user id" };
/// assert_eq!(
///     format!("{}", error),
///     "user id: expected a value, found none"
/// );
///
/// let absent: Maybe<u64> = Maybe::NONE;
/// assert_eq!(absent.require("user id"), Err(error));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissingValueError {
    /// A short description of the value that was expected.
    pub what: &'static str,
}

impl std::fmt::Display for MissingValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: expected a value, found none", self.what)
    }
}

impl std::error::Error for MissingValueError {}

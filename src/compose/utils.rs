//! Helper functions for composition.

/// Returns its argument unchanged.
///
/// Useful as a no-op stage, or as the `on_some` branch of a fold.
///
/// # Examples
///
/// ```
/// use optio::compose::identity;
/// use optio::maybe::Maybe;
///
/// assert_eq!(Maybe::some(5).fold(|| 0, identity), 5);
/// assert_eq!(Maybe::some(5).map(identity), Maybe::some(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

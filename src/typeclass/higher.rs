//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! The [`TypeConstructor`] trait works around this with a Generic Associated
//! Type that re-applies the same constructor to a different payload type,
//! which is what the `Functor`/`Applicative`/`Monad` signatures need.
//!
//! # Example
//!
//! ```rust
//! use optio::maybe::Maybe;
//! use optio::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Maybe<i32> = Maybe::some(42);
//! let cleared: Maybe<String> = reset(present);
//! assert_eq!(cleared, Maybe::NONE);
//! ```

use crate::maybe::Maybe;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Maybe<i32>`, `WithType<String>` is `Maybe<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

//! # optio
//!
//! An immutable optional-value container for Rust with pure, composable
//! combinators and functional type-class instances.
//!
//! ## Overview
//!
//! [`Maybe<A>`](maybe::Maybe) is a closed two-variant type: either
//! `Maybe::None` (absence) or `Maybe::Some(value)` (presence). Values are
//! never mutated in place; every combinator produces a new `Maybe`.
//!
//! - **Container**: construction, extraction and transformation of `Maybe`
//! - **Pipeable functions**: curried, data-last versions of every combinator
//! - **Type Classes**: Functor, Applicative, Monad, Alternative, Foldable, etc.
//! - **Function Composition**: `pipe!` and `compose!` macros
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and the `Maybe` instances
//! - `compose`: Function composition utilities
//! - `serde`: Serialization of `Maybe` and its monoid wrappers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optio::prelude::*;
//! use optio::maybe::pipeable::{filter, get_or_else, map};
//!
//! let squared_positive = |value: Maybe<i32>| {
//!     pipe!(value, map(|x: i32| x * x), filter(|x: &i32| *x > 0), get_or_else(|| -1))
//! };
//!
//! assert_eq!(squared_positive(Maybe::some(4)), 16);
//! assert_eq!(squared_positive(Maybe::some(0)), -1);
//! assert_eq!(squared_positive(Maybe::NONE), -1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container, its error type and, depending on enabled
/// features, the type classes and composition utilities.
///
/// # Usage
///
/// ```rust
/// use optio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::maybe::{Maybe, MissingValueError};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod maybe;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

pub use maybe::Maybe;

//! Type class traits implemented by [`Maybe`](crate::maybe::Maybe).
//!
//! The inherent methods on `Maybe` cover everyday use. These traits expose
//! the same behavior through the usual functional abstractions so that code
//! can be written once against the abstraction:
//!
//! - [`Functor`]: Mapping over the contained value
//! - [`Applicative`]: Lifting values and combining independent computations
//! - [`Monad`]: Sequencing computations that may produce nothing
//! - [`Alternative`]: Choosing the first computation that produced a value
//! - [`Foldable`]: Reducing to a summary value
//! - [`Filterable`], [`Compactable`]: Dropping rejected or empty values
//! - [`Semigroup`], [`Monoid`]: Combining values associatively
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! which is what lets `fmap` on a `Maybe<A>` name `Maybe<B>` as its result.
//!
//! ## Monoid Wrappers
//!
//! - [`First`], [`Last`]: `Maybe` monoids where one side wins
//!
//! # Examples
//!
//! ```rust
//! use optio::maybe::Maybe;
//! use optio::typeclass::{Applicative, Functor, Monad};
//!
//! let width = Maybe::some(3);
//! let height = Maybe::some(4);
//!
//! let area = width.map2(height, |w, h| w * h).fmap(|a| a * 2);
//! assert_eq!(area, Maybe::some(24));
//!
//! let halved = area.flat_map(|a| if a % 2 == 0 { Maybe::some(a / 2) } else { Maybe::NONE });
//! assert_eq!(halved, Maybe::some(12));
//! ```

mod alternative;
mod applicative;
mod filterable;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use filterable::{Compactable, Filterable};
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{First, Last};

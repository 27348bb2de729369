//! Function composition utilities for building `Maybe` pipelines.
//!
//! The combinators in [`maybe::pipeable`](crate::maybe::pipeable) are
//! data-last: each one is configured up front and returns a function that
//! still waits for the `Maybe`. These macros string such functions together.
//!
//! - [`pipe!`]: apply functions to a value left-to-right (data flow style)
//! - [`compose!`]: build a new function right-to-left (mathematical style)
//! - [`identity`]: the function that returns its argument unchanged
//!
//! # Examples
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use optio::pipe;
//! use optio::maybe::pipeable::{filter, get_or_else, map, some};
//!
//! let result = pipe!(
//!     some(3),
//!     map(|x: i32| x * x),
//!     filter(|x: &i32| *x > 5),
//!     get_or_else(|| 0)
//! );
//! assert_eq!(result, 9);
//! ```
//!
//! ## Reusable stage (right-to-left)
//!
//! ```
//! use optio::compose;
//! use optio::maybe::Maybe;
//! use optio::maybe::pipeable::{chain, map};
//!
//! let halve = |x: i32| if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::NONE };
//! let halve_then_label = compose!(map(|x: i32| format!("#{x}")), chain(halve));
//!
//! assert_eq!(halve_then_label(Maybe::some(8)), Maybe::some("#4".to_string()));
//! assert_eq!(halve_then_label(Maybe::some(7)), Maybe::NONE);
//! assert_eq!(halve_then_label(Maybe::NONE), Maybe::NONE);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//! - **Pipe/Compose**: `pipe!(x, f, g) == compose!(g, f)(x)`

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::identity;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;

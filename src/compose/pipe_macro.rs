//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// Each stage only needs to implement [`FnOnce`]. Stages can be borrowed
/// (`&stage`) when the same stage is reused across several pipelines.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ## Transform then extract
///
/// ```
/// use optio::pipe;
/// use optio::maybe::pipeable::{from_nullable, get_or_else, map};
///
/// let port = pipe!(
///     from_nullable(Some("8080")),
///     map(|raw: &str| raw.len()),
///     get_or_else(|| 0)
/// );
/// assert_eq!(port, 4);
/// ```
///
/// ## Short-circuiting on absence
///
/// ```
/// use optio::pipe;
/// use optio::maybe::Maybe;
/// use optio::maybe::pipeable::{chain, r#match};
///
/// let describe = r#match(|| "nothing".to_string(), |n: i32| format!("got {n}"));
/// let reciprocal = chain(|n: i32| if n == 0 { Maybe::NONE } else { Maybe::some(100 / n) });
///
/// assert_eq!(pipe!(Maybe::some(4), &reciprocal, &describe), "got 25");
/// assert_eq!(pipe!(Maybe::some(0), &reciprocal, &describe), "nothing");
/// assert_eq!(pipe!(Maybe::NONE, &reciprocal, &describe), "nothing");
/// ```
///
/// ## Equivalence with compose
///
/// ```
/// use optio::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(pipe!(10, f, g, h), compose!(h, g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}

//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// The result is a `move` closure owning every composed function, so a
/// composed `Maybe` pipeline can be stored and applied many times.
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use optio::compose;
/// use optio::maybe::Maybe;
/// use optio::maybe::pipeable::{filter, map, to_nullable};
///
/// let even_square = compose!(to_nullable, filter(|x: &i32| x % 2 == 0), map(|x: i32| x * x));
///
/// assert_eq!(even_square(Maybe::some(4)), Some(16));
/// assert_eq!(even_square(Maybe::some(3)), None);
/// assert_eq!(even_square(Maybe::NONE), None);
/// ```
///
/// ## Verifying associativity
///
/// ```
/// use optio::compose;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let left = compose!(f, compose!(g, h));
/// let right = compose!(compose!(f, g), h);
///
/// assert_eq!(left(10), right(10));
/// ```
#[macro_export]
macro_rules! compose {
    // Single function: identity composition
    ($function:expr) => {
        $function
    };

    // compose!(f, g)(x) = f(g(x))
    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}

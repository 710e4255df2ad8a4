//! The `compose!` macro for composing any number of dynamic functions.
//!
//! This module provides the [`compose!`] macro which composes functions
//! from right to left, following the mathematical notation for function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)` is equivalent to `compose(f, compose(g, h))`: the
/// rightmost function is applied first and every intermediate result is
/// spread into the next function as described for
/// [`compose`](crate::compose::compose).
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged (identity composition)
/// - `compose!(f, g)` - Returns `compose(f, g)`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// Every argument must be an expression of type
/// [`Function`](crate::value::Function).
///
/// # Examples
///
/// ```
/// use pointfree::{args, compose};
/// use pointfree::value::{Function, Value};
///
/// let add_one = Function::new("add_one", |arguments| Ok(Value::Int(arguments.int("add_one", 0)? + 1)));
/// let double = Function::new("double", |arguments| Ok(Value::Int(arguments.int("double", 0)? * 2)));
/// let square = Function::new("square", |arguments| {
///     let value = arguments.int("square", 0)?;
///     Ok(Value::Int(value * value))
/// });
///
/// // add_one(double(square(3))) = add_one(double(9)) = add_one(18) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed.call(args![3]), Ok(Value::Int(19)));
/// ```
#[macro_export]
macro_rules! compose {
    // Single function: identity composition
    ($function:expr $(,)?) => {
        $function
    };

    // Two functions: basic composition
    ($outer_function:expr, $inner_function:expr $(,)?) => {
        $crate::compose::compose($outer_function, $inner_function)
    };

    // Three or more functions: recursive composition
    // compose!(f, g, h, ...) = compose(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::compose(
            $outer_function,
            $crate::compose!($($remaining_functions),+),
        )
    };
}

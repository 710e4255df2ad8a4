//! Helper functions (combinators) for function composition.
//!
//! This module provides fundamental combinators that are commonly used
//! in functional programming:
//!
//! - [`identity`]: Normalizes variadic results (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the first two arguments of a function (C combinator)
//!
//! These functions serve as building blocks for more complex function compositions.

use crate::value::{Arguments, Function, Value};

/// Returns a single value unchanged, or several values as a tuple.
///
/// This normalizes variadic returns for [`compose`](super::compose): a
/// function ending in `identity` returns one value when it has one and a
/// spreadable tuple otherwise. No values at all give the empty tuple.
///
/// # Examples
///
/// ```
/// use pointfree::compose::identity;
/// use pointfree::value::Value;
///
/// assert_eq!(identity(vec![Value::Int(1)]), Value::Int(1));
/// assert_eq!(
///     identity(vec![Value::Int(1), Value::Int(2)]),
///     Value::from((1, 2))
/// );
/// assert_eq!(identity(vec![]), Value::tuple([]));
/// ```
pub fn identity(mut values: Vec<Value>) -> Value {
    if values.len() == 1 {
        values.remove(0)
    } else {
        Value::Tuple(values)
    }
}

/// Returns [`identity`] as a function over positional arguments.
///
/// # Use with function composition
///
/// ```
/// use pointfree::args;
/// use pointfree::compose::{compose, identity_function};
/// use pointfree::value::{Function, Value};
///
/// let double = Function::new("double", |arguments| {
///     Ok(Value::Int(arguments.int("double", 0)? * 2))
/// });
///
/// let composed = compose(identity_function(), double.clone());
/// assert_eq!(composed.call(args![5]), double.call(args![5]));
/// ```
pub fn identity_function() -> Function {
    Function::new("identity", |arguments: Arguments| {
        let (positional, _) = arguments.into_parts();
        Ok(identity(positional))
    })
}

/// Creates a function that always returns the given value, ignoring its arguments.
///
/// Also known as the K combinator in combinatory logic.
///
/// # Examples
///
/// ```
/// use pointfree::args;
/// use pointfree::compose::constant;
/// use pointfree::value::Value;
///
/// let always_five = constant(Value::Int(5));
/// assert_eq!(always_five.call(args![100]), Ok(Value::Int(5)));
/// assert_eq!(always_five.call(args!["ignored"; x = 1]), Ok(Value::Int(5)));
/// ```
pub fn constant(value: Value) -> Function {
    Function::new(format!("constant({value})"), move |_| Ok(value.clone()))
}

/// Swaps the first two positional arguments of a function.
///
/// Given `f(a, b, ...)`, returns `g` such that `g(b, a, ...) = f(a, b, ...)`.
/// Calls with fewer than two positional arguments are forwarded unchanged.
///
/// Also known as the C combinator (flip) in combinatory logic.
/// Useful for partial application when you want to fix the second argument
/// instead of the first.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use pointfree::args;
/// use pointfree::compose::flip;
/// use pointfree::value::{Function, Value};
///
/// let divide = Function::new("divide", |arguments| {
///     Ok(Value::Float(arguments.float("divide", 0)? / arguments.float("divide", 1)?))
/// });
///
/// let flipped_divide = flip(divide.clone());
///
/// assert_eq!(divide.call(args![10.0, 2.0]), Ok(Value::Float(5.0)));
/// assert_eq!(flipped_divide.call(args![10.0, 2.0]), Ok(Value::Float(0.2)));
/// ```
pub fn flip(function: Function) -> Function {
    let name = format!("flip({})", function.name());
    Function::new(name, move |arguments| {
        let (mut positional, keyword) = arguments.into_parts();
        if positional.len() >= 2 {
            positional.swap(0, 1);
        }
        function.call(Arguments::from_parts(positional, keyword))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use rstest::rstest;

    fn pair() -> Function {
        Function::new("pair", |arguments| {
            let (positional, _) = arguments.into_parts();
            Ok(Value::Tuple(positional))
        })
    }

    #[rstest]
    fn test_identity_keeps_single_tuple_intact() {
        let tuple = Value::from((1, 2));
        assert_eq!(identity(vec![tuple.clone()]), tuple);
    }

    #[rstest]
    fn test_constant_name() {
        assert_eq!(constant(Value::from("hello")).name(), "constant(hello)");
    }

    #[rstest]
    fn test_flip_keeps_trailing_arguments() {
        let flipped = flip(pair());
        assert_eq!(
            flipped.call(args![1, 2, 3]),
            Ok(Value::from((2, 1, 3)))
        );
    }

    #[rstest]
    fn test_flip_with_single_argument() {
        assert_eq!(flip(pair()).call(args![1]), Ok(Value::tuple([Value::Int(1)])));
    }

    #[rstest]
    fn test_double_flip_is_identity() {
        let twice = flip(flip(pair()));
        assert_eq!(twice.call(args![1, 2]), pair().call(args![1, 2]));
    }
}

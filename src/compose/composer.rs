//! Composition of dynamic functions.

use crate::value::{Arguments, Function};
use tracing::trace;

/// Composes two functions right to left.
///
/// `compose(outer, inner)(args)` calls `inner(args)` first. If the result is
/// a tuple its elements become the positional arguments of `outer`,
/// otherwise the result is passed as `outer`'s single argument. Keyword
/// arguments only reach `inner`.
///
/// # Laws
///
/// - **Spreading**: `compose(g, f)(x) == g(f(x))` when `f(x)` is a single
///   value, and `g(*f(x))` when it is a tuple.
/// - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
/// - **Identity**: `compose(identity, f) == f` for non-tuple results, and
///   `compose(f, identity) == f` for single-argument calls.
///
/// # Examples
///
/// ```rust
/// use pointfree::args;
/// use pointfree::compose::compose;
/// use pointfree::value::{Function, Value};
///
/// let divmod = Function::new("divmod", |arguments| {
///     let (dividend, divisor) = (arguments.int("divmod", 0)?, arguments.int("divmod", 1)?);
///     Ok(Value::from((dividend / divisor, dividend % divisor)))
/// });
/// let add = Function::new("add", |arguments| {
///     Ok(Value::Int(arguments.int("add", 0)? + arguments.int("add", 1)?))
/// });
///
/// // The tuple returned by divmod is spread into add.
/// let quotient_plus_remainder = compose(add, divmod);
/// assert_eq!(quotient_plus_remainder.call(args![17, 5]), Ok(Value::Int(5)));
/// ```
pub fn compose(outer: Function, inner: Function) -> Function {
    let name = format!("{}.{}", outer.name(), inner.name());
    Function::new(name, move |arguments| {
        let intermediate = inner.call(arguments)?;
        trace!(
            outer = outer.name(),
            inner = inner.name(),
            intermediate = intermediate.type_name(),
            "composing"
        );
        outer.call(Arguments::from_positional(intermediate.spread()))
    })
}

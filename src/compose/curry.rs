//! Fixed-arity currying over dynamic functions.
//!
//! A [`Curried`] function is an explicit state object: the target, its
//! declared arity and the positional arguments accumulated so far. Every
//! application step returns a new state, so one curried function can start
//! any number of independent chains.
//!
//! # Firing
//!
//! Accumulation and invocation are separate steps. A call made while fewer
//! than `arity` arguments are accumulated extends the accumulation, even if
//! it brings the count to or past the arity. The first call made once the
//! count has reached the arity invokes the target with exactly the
//! accumulated arguments; whatever that call itself passes is discarded.
//!
//! ```text
//! curry(f, 2)(1, 2)    => pending, two arguments accumulated
//! curry(f, 2)(1, 2)(x) => f(1, 2), x is discarded
//! ```

use super::Step;
use crate::error::CallError;
use crate::value::{Arguments, Callable, Function, Value};
use std::fmt;
use tracing::{debug, trace};

/// A function that accumulates positional arguments until its arity is reached.
///
/// # Examples
///
/// ```rust
/// use pointfree::compose::{curry, Step};
/// use pointfree::value::{Function, Value};
///
/// let volume = Function::new("volume", |arguments| {
///     Ok(Value::Int(
///         arguments.int("volume", 0)? * arguments.int("volume", 1)? * arguments.int("volume", 2)?,
///     ))
/// });
///
/// let curried = curry(volume, 3);
/// let with_width = curried.apply([Value::Int(2)]).unwrap().pending().unwrap();
/// let saturated = with_width
///     .apply([Value::Int(3), Value::Int(4)])
///     .unwrap()
///     .pending()
///     .unwrap();
///
/// assert!(saturated.is_saturated());
/// assert_eq!(saturated.invoke(), Ok(Value::Int(24)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Curried {
    target: Function,
    arity: usize,
    accumulated: Vec<Value>,
}

impl Curried {
    /// Creates a curried function with nothing accumulated.
    pub const fn new(target: Function, arity: usize) -> Self {
        Self {
            target,
            arity,
            accumulated: Vec::new(),
        }
    }

    /// Returns the target function.
    pub const fn target(&self) -> &Function {
        &self.target
    }

    /// Returns the declared arity.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the arguments accumulated so far.
    pub fn accumulated(&self) -> &[Value] {
        &self.accumulated
    }

    /// Returns how many more arguments are needed before the next call fires.
    pub const fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.accumulated.len())
    }

    /// Returns `true` if the next call invokes the target.
    pub const fn is_saturated(&self) -> bool {
        self.accumulated.len() >= self.arity
    }

    /// Returns a new state with `values` appended, regardless of arity.
    #[must_use]
    pub fn accumulate(&self, values: impl IntoIterator<Item = Value>) -> Self {
        let mut accumulated = self.accumulated.clone();
        accumulated.extend(values);
        Self {
            target: self.target.clone(),
            arity: self.arity,
            accumulated,
        }
    }

    /// Applies one call's positional arguments.
    ///
    /// Before saturation the arguments are accumulated and a new state is
    /// returned. Once saturated the target is invoked with the accumulated
    /// arguments and `values` is discarded.
    ///
    /// # Errors
    ///
    /// Returns whatever error the target reports when it is invoked.
    pub fn apply(&self, values: impl IntoIterator<Item = Value>) -> Result<Step<Self>, CallError> {
        if self.is_saturated() {
            let discarded = values.into_iter().count();
            if discarded > 0 {
                trace!(
                    function = self.target.name(),
                    discarded,
                    "saturated curry ignores call arguments"
                );
            }
            self.invoke().map(Step::Done)
        } else {
            let next = self.accumulate(values);
            trace!(
                function = self.target.name(),
                arity = self.arity,
                accumulated = next.accumulated.len(),
                "accumulated curried arguments"
            );
            Ok(Step::Pending(next))
        }
    }

    /// Invokes the target with the accumulated arguments, saturated or not.
    ///
    /// # Errors
    ///
    /// Returns whatever error the target reports.
    pub fn invoke(&self) -> Result<Value, CallError> {
        debug!(
            function = self.target.name(),
            arguments = self.accumulated.len(),
            "invoking curried function"
        );
        self.target
            .call(Arguments::from_positional(self.accumulated.iter().cloned()))
    }

    /// Returns a function that appends its arguments and invokes the target at once.
    ///
    /// Pipelines use this to run a stage with the arguments collected by the
    /// stage that wraps it.
    pub fn saturating(&self) -> Function {
        let curried = self.clone();
        Function::new(format!("{}!", self.target.name()), move |arguments| {
            let (positional, _) = arguments.into_parts();
            curried.accumulate(positional).invoke()
        })
    }
}

impl Callable for Curried {
    fn call(&self, arguments: Arguments) -> Result<Value, CallError> {
        let (positional, keyword) = arguments.into_parts();
        if let Some(name) = keyword.into_keys().next() {
            return Err(CallError::UnexpectedKeyword {
                function: self.target.name().to_string(),
                name,
            });
        }
        self.apply(positional).map(Step::into_value)
    }
}

impl From<Curried> for Function {
    fn from(curried: Curried) -> Self {
        let name = format!("curry({}, {})", curried.target.name(), curried.arity);
        Self::from_callable(name, curried)
    }
}

impl fmt::Display for Curried {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "curry({}, {})[{}/{}]",
            self.target.name(),
            self.arity,
            self.accumulated.len(),
            self.arity
        )
    }
}

/// Wraps `target` so it can receive its positional arguments across several calls.
///
/// # Examples
///
/// ```rust
/// use pointfree::args;
/// use pointfree::compose::curry;
/// use pointfree::value::{Function, Value};
///
/// let add = Function::new("add", |arguments| {
///     Ok(Value::Int(arguments.int("add", 0)? + arguments.int("add", 1)?))
/// });
///
/// let add = Function::from(curry(add, 2));
/// let add_five = add.call(args![5]).unwrap();
/// let saturated = add_five.call(args![3]).unwrap();
///
/// // The saturated curry fires on the next call.
/// assert_eq!(saturated.call(args![]), Ok(Value::Int(8)));
/// ```
pub const fn curry(target: Function, arity: usize) -> Curried {
    Curried::new(target, arity)
}

static_assertions::assert_impl_all!(Curried: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use rstest::rstest;

    fn collect() -> Function {
        Function::new("collect", |arguments| {
            let (positional, _) = arguments.into_parts();
            Ok(Value::List(positional))
        })
    }

    #[rstest]
    #[case(3, 0, 3)]
    #[case(3, 2, 1)]
    #[case(3, 3, 0)]
    #[case(2, 5, 0)]
    fn test_remaining(#[case] arity: usize, #[case] supplied: i64, #[case] expected: usize) {
        let curried = curry(collect(), arity).accumulate((0..supplied).map(Value::Int));
        assert_eq!(curried.remaining(), expected);
    }

    #[rstest]
    fn test_zero_arity_fires_on_first_call() {
        let step = curry(collect(), 0).apply([Value::Int(9)]).unwrap();
        assert_eq!(step, Step::Done(Value::List(vec![])));
    }

    #[rstest]
    fn test_over_supply_is_accumulated() {
        let curried = curry(collect(), 1)
            .apply([Value::Int(1), Value::Int(2)])
            .unwrap()
            .pending()
            .unwrap();

        assert_eq!(
            curried.invoke(),
            Ok(Value::List(vec![Value::Int(1), Value::Int(2)]))
        );
    }

    #[rstest]
    fn test_keyword_arguments_are_rejected() {
        let function = Function::from(curry(collect(), 1));
        assert_eq!(
            function.call(args![; x = 1]),
            Err(CallError::UnexpectedKeyword {
                function: "collect".to_string(),
                name: "x".to_string(),
            })
        );
    }

    #[rstest]
    fn test_saturating_prefixes_accumulated_arguments() {
        let partially_applied = curry(collect(), 3).accumulate([Value::Int(1)]);
        let saturating = partially_applied.saturating();

        assert_eq!(
            saturating.call(args![2]),
            Ok(Value::List(vec![Value::Int(1), Value::Int(2)]))
        );
    }

    #[rstest]
    fn test_display() {
        let curried = curry(collect(), 2).accumulate([Value::Int(1)]);
        assert_eq!(format!("{curried}"), "curry(collect, 2)[1/2]");
    }
}

//! The outcome of applying arguments to a deferred or curried function.

use crate::value::{Function, Value};

/// Either the result of invoking the target, or the next partial application.
///
/// Through the dynamic calling convention a pending step is surfaced as a
/// [`Value::Function`], see [`Step::into_value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Step<T> {
    /// The target was invoked and produced this value.
    Done(Value),
    /// The target was not invoked; apply more arguments to this.
    Pending(T),
}

impl<T> Step<T> {
    /// Returns `true` if the target was invoked.
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Returns the produced value, if any.
    pub fn done(self) -> Option<Value> {
        match self {
            Self::Done(value) => Some(value),
            Self::Pending(_) => None,
        }
    }

    /// Returns the pending partial application, if any.
    pub fn pending(self) -> Option<T> {
        match self {
            Self::Done(_) => None,
            Self::Pending(next) => Some(next),
        }
    }
}

impl<T> Step<T>
where
    T: Into<Function>,
{
    /// Converts the step into a value, wrapping a pending step as a function.
    pub fn into_value(self) -> Value {
        match self {
            Self::Done(value) => value,
            Self::Pending(next) => Value::Function(next.into()),
        }
    }
}

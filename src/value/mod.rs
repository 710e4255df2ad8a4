//! Dynamic values passed through deferred calls, curried functions and pipelines.
//!
//! Every function that takes part in partial application receives an
//! [`Arguments`] snapshot and returns a [`Value`]. Using one tagged union for
//! all runtime values lets a call be assembled piece by piece before its
//! target is known to accept the pieces, which is the whole point of
//! placeholder-based binding.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::value::{Function, Value};
//! use pointfree::args;
//!
//! let add = Function::new("add", |arguments| {
//!     arguments.expect_len("add", 2)?;
//!     Ok(Value::Int(arguments.int("add", 0)? + arguments.int("add", 1)?))
//! });
//!
//! assert_eq!(add.call(args![2, 3]), Ok(Value::Int(5)));
//! ```

mod arguments;
mod function;

pub use arguments::Arguments;
pub use function::{Callable, Function};

use crate::error::CallError;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A runtime value.
///
/// Equality is structural. Floats compare by bit pattern and functions by
/// identity, which makes `Value` usable as a map key.
#[derive(Debug, Clone)]
pub enum Value {
    /// The unit value `()`.
    Unit,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// A fixed-size heterogeneous tuple. Spread into positional arguments by composition.
    Tuple(Vec<Value>),
    /// A list. Never spread.
    List(Vec<Value>),
    /// A callable function.
    Function(Function),
}

impl Value {
    /// Creates a tuple value.
    pub fn tuple(values: impl IntoIterator<Item = Self>) -> Self {
        Self::Tuple(values.into_iter().collect())
    }

    /// Returns the name of the runtime type, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Unit => "Unit",
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::Str(_) => "Str",
            Self::Tuple(_) => "Tuple",
            Self::List(_) => "List",
            Self::Function(_) => "Function",
        }
    }

    /// Returns the integer if this is an `Int`.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float if this is a `Float`.
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean if this is a `Bool`.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the function if this is a `Function`.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns `true` if this value is callable.
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Converts the value into positional arguments.
    ///
    /// A tuple contributes its elements, any other value contributes itself.
    ///
    /// ```rust
    /// use pointfree::value::Value;
    ///
    /// assert_eq!(Value::Int(1).spread(), vec![Value::Int(1)]);
    /// assert_eq!(
    ///     Value::tuple([Value::Int(1), Value::Int(2)]).spread(),
    ///     vec![Value::Int(1), Value::Int(2)]
    /// );
    /// ```
    pub fn spread(self) -> Vec<Self> {
        match self {
            Self::Tuple(values) => values,
            other => vec![other],
        }
    }

    /// Calls the value with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::NotCallable`] if the value is not a function, and
    /// otherwise whatever the function itself reports.
    pub fn call(&self, arguments: Arguments) -> Result<Self, CallError> {
        match self {
            Self::Function(function) => function.call(arguments),
            other => Err(CallError::NotCallable {
                type_name: other.type_name(),
            }),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unit, Self::Unit) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left.to_bits() == right.to_bits(),
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Tuple(left), Self::Tuple(right)) | (Self::List(left), Self::List(right)) => {
                left == right
            }
            (Self::Function(left), Self::Function(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Unit => {}
            Self::Bool(value) => value.hash(state),
            Self::Int(value) => value.hash(state),
            Self::Float(value) => value.to_bits().hash(state),
            Self::Str(value) => value.hash(state),
            Self::Tuple(values) | Self::List(values) => values.hash(state),
            Self::Function(function) => function.address().hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => write!(formatter, "()"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value:?}"),
            Self::Str(value) => write!(formatter, "{value}"),
            Self::Tuple(values) => {
                write!(formatter, "(")?;
                write_separated(formatter, values)?;
                if values.len() == 1 {
                    write!(formatter, ",")?;
                }
                write!(formatter, ")")
            }
            Self::List(values) => {
                write!(formatter, "[")?;
                write_separated(formatter, values)?;
                write!(formatter, "]")
            }
            Self::Function(function) => write!(formatter, "<function {}>", function.name()),
        }
    }
}

fn write_separated(formatter: &mut fmt::Formatter<'_>, values: &[Value]) -> fmt::Result {
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            write!(formatter, ", ")?;
        }
        write!(formatter, "{value}")?;
    }
    Ok(())
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::List(values)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl<A, B> From<(A, B)> for Value
where
    A: Into<Self>,
    B: Into<Self>,
{
    fn from((first, second): (A, B)) -> Self {
        Self::Tuple(vec![first.into(), second.into()])
    }
}

impl<A, B, C> From<(A, B, C)> for Value
where
    A: Into<Self>,
    B: Into<Self>,
    C: Into<Self>,
{
    fn from((first, second, third): (A, B, C)) -> Self {
        Self::Tuple(vec![first.into(), second.into(), third.into()])
    }
}

//! Shared, thread-safe function handles.

use super::{Arguments, Value};
use crate::error::CallError;
use std::fmt;
use std::sync::Arc;

/// Something that can be invoked with an [`Arguments`] snapshot.
///
/// Native closures, deferred calls and curried functions all implement this
/// trait, so each of them can appear wherever a [`Function`] is expected.
pub trait Callable: Send + Sync {
    /// Invokes the callable.
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying computation reports.
    fn call(&self, arguments: Arguments) -> Result<Value, CallError>;
}

struct Native<F>(F);

impl<F> Callable for Native<F>
where
    F: Fn(Arguments) -> Result<Value, CallError> + Send + Sync,
{
    fn call(&self, arguments: Arguments) -> Result<Value, CallError> {
        (self.0)(arguments)
    }
}

/// A named, cheaply clonable handle to a [`Callable`].
///
/// Cloning shares the underlying callable. Two handles are equal only when
/// they share the same callable.
///
/// # Examples
///
/// ```rust
/// use pointfree::value::{Arguments, Function, Value};
///
/// let negate = Function::new("negate", |arguments| {
///     Ok(Value::Int(-arguments.int("negate", 0)?))
/// });
///
/// assert_eq!(negate.name(), "negate");
/// assert_eq!(
///     negate.call(Arguments::from_positional([Value::Int(4)])),
///     Ok(Value::Int(-4))
/// );
/// ```
#[derive(Clone)]
pub struct Function {
    name: Arc<str>,
    callable: Arc<dyn Callable>,
}

impl Function {
    /// Wraps a native closure.
    pub fn new<F>(name: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn(Arguments) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self::from_callable(name, Native(body))
    }

    /// Wraps any [`Callable`].
    pub fn from_callable<C>(name: impl Into<Arc<str>>, callable: C) -> Self
    where
        C: Callable + 'static,
    {
        Self {
            name: name.into(),
            callable: Arc::new(callable),
        }
    }

    /// Returns the function's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the function.
    ///
    /// # Errors
    ///
    /// Returns whatever error the function reports.
    pub fn call(&self, arguments: Arguments) -> Result<Value, CallError> {
        self.callable.call(arguments)
    }

    /// Returns `true` if both handles share the same callable.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callable, &other.callable)
    }

    pub(crate) fn address(&self) -> usize {
        Arc::as_ptr(&self.callable).cast::<()>() as usize
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Function").field(&self.name).finish()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Function {}

static_assertions::assert_impl_all!(Function: Send, Sync, Clone);

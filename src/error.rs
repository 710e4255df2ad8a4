//! Error types for dynamic function invocation.
//!
//! The framework itself never validates argument counts before a call. These
//! errors are reported by the functions being called (or by the value layer
//! when something that is not a function is called), and they travel back
//! unchanged through deferred calls, curried functions and compositions.

use thiserror::Error;

/// Represents a failure raised while invoking a [`Function`](crate::value::Function).
///
/// # Examples
///
/// ```rust
/// use pointfree::CallError;
///
/// let error = CallError::ArityMismatch {
///     function: "add".to_string(),
///     expected: 2,
///     actual: 1,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "add: expected 2 positional argument(s), got 1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// The function received a different number of positional arguments than it accepts.
    #[error("{function}: expected {expected} positional argument(s), got {actual}")]
    ArityMismatch {
        /// Name of the function that rejected the call.
        function: String,
        /// Number of positional arguments the function accepts.
        expected: usize,
        /// Number of positional arguments it received.
        actual: usize,
    },

    /// An argument had the wrong runtime type.
    #[error("{function}: argument {argument} expected {expected}, got {actual}")]
    TypeMismatch {
        /// Name of the function that rejected the call.
        function: String,
        /// Human readable position of the argument (`#0`, `` `x` ``).
        argument: String,
        /// Expected type name.
        expected: &'static str,
        /// Actual type name.
        actual: &'static str,
    },

    /// A required keyword argument was not supplied.
    #[error("{function}: missing keyword argument `{name}`")]
    MissingKeyword {
        /// Name of the function that rejected the call.
        function: String,
        /// The missing keyword.
        name: String,
    },

    /// A keyword argument was passed to a function that only takes positional arguments.
    #[error("{function}: unexpected keyword argument `{name}`")]
    UnexpectedKeyword {
        /// Name of the function that rejected the call.
        function: String,
        /// The offending keyword.
        name: String,
    },

    /// A value that is not a function was called.
    #[error("value of type {type_name} is not callable")]
    NotCallable {
        /// Runtime type name of the value.
        type_name: &'static str,
    },

    /// The function failed for a reason of its own.
    #[error("{function}: {message}")]
    Failed {
        /// Name of the failing function.
        function: String,
        /// Description of the failure.
        message: String,
    },
}

impl CallError {
    /// Creates a [`CallError::Failed`] for user-defined failures.
    pub fn failed(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            function: function.into(),
            message: message.into(),
        }
    }
}

/// Represents a failure to normalize constructor arguments against a
/// [`Signature`](crate::registry::Signature).
#[cfg(feature = "registry")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// More positional values than declared parameters.
    #[error("{registry}: takes {expected} positional argument(s) but {actual} were given")]
    TooManyPositional {
        /// Name of the registry.
        registry: String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of positional values supplied.
        actual: usize,
    },

    /// A keyword that names no declared parameter.
    #[error("{registry}: unexpected keyword argument `{name}`")]
    UnknownKeyword {
        /// Name of the registry.
        registry: String,
        /// The unknown keyword.
        name: String,
    },

    /// A parameter bound both positionally and by keyword.
    #[error("{registry}: got multiple values for argument `{name}`")]
    DuplicateArgument {
        /// Name of the registry.
        registry: String,
        /// The parameter bound twice.
        name: String,
    },

    /// A required parameter without a value.
    #[error("{registry}: missing required argument `{name}`")]
    MissingArgument {
        /// Name of the registry.
        registry: String,
        /// The missing parameter.
        name: String,
    },

    /// A key parameter that is not declared in the signature.
    #[error("{registry}: key parameter `{name}` is not declared")]
    UndeclaredKeyParameter {
        /// Name of the registry.
        registry: String,
        /// The undeclared key parameter.
        name: String,
    },

    /// The constructor failed.
    #[error(transparent)]
    Construction(#[from] CallError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_type_mismatch_display() {
        let error = CallError::TypeMismatch {
            function: "double".to_string(),
            argument: "#0".to_string(),
            expected: "Int",
            actual: "Str",
        };
        assert_eq!(
            format!("{error}"),
            "double: argument #0 expected Int, got Str"
        );
    }

    #[rstest]
    fn test_not_callable_display() {
        let error = CallError::NotCallable { type_name: "Int" };
        assert_eq!(format!("{error}"), "value of type Int is not callable");
    }

    #[rstest]
    fn test_failed_constructor() {
        let error = CallError::failed("divide", "division by zero");
        assert_eq!(format!("{error}"), "divide: division by zero");
    }

    #[cfg(feature = "registry")]
    #[rstest]
    fn test_registry_error_wraps_call_error() {
        let error = RegistryError::from(CallError::failed("Connection", "refused"));
        assert_eq!(format!("{error}"), "Connection: refused");
    }
}

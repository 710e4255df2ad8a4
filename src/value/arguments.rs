//! Immutable argument snapshots.

use super::Value;
use crate::error::CallError;
use std::collections::BTreeMap;

/// The arguments of one call: ordered positional values plus a name-keyed mapping.
///
/// The typed accessors ([`int`](Self::int), [`float`](Self::float),
/// [`string`](Self::string), ...) report failures as [`CallError`]s
/// attributed to the calling function, so native functions can use `?`.
///
/// # Examples
///
/// ```rust
/// use pointfree::args;
/// use pointfree::value::Value;
///
/// let arguments = args![1, "two"; scale = 3.0];
///
/// assert_eq!(arguments.positional(), &[Value::Int(1), Value::from("two")]);
/// assert_eq!(arguments.get_keyword("scale"), Some(&Value::Float(3.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    positional: Vec<Value>,
    keyword: BTreeMap<String, Value>,
}

impl Arguments {
    /// Creates an empty argument set.
    pub const fn new() -> Self {
        Self {
            positional: Vec::new(),
            keyword: BTreeMap::new(),
        }
    }

    /// Creates an argument set with positional values only.
    pub fn from_positional(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            positional: values.into_iter().collect(),
            keyword: BTreeMap::new(),
        }
    }

    /// Creates an argument set with keyword values only.
    pub fn from_keyword<K>(entries: impl IntoIterator<Item = (K, Value)>) -> Self
    where
        K: Into<String>,
    {
        Self {
            positional: Vec::new(),
            keyword: entries
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    /// Creates an argument set from both parts.
    pub const fn from_parts(positional: Vec<Value>, keyword: BTreeMap<String, Value>) -> Self {
        Self {
            positional,
            keyword,
        }
    }

    /// Appends a positional value.
    #[must_use]
    pub fn with_positional(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a keyword value, replacing any previous value for the same name.
    #[must_use]
    pub fn with_keyword(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(name.into(), value.into());
        self
    }

    /// Returns the positional values.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Returns the keyword values.
    pub const fn keyword(&self) -> &BTreeMap<String, Value> {
        &self.keyword
    }

    /// Returns the number of positional values.
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// Returns `true` if there are neither positional nor keyword values.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    /// Returns the positional value at `index`.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Returns the keyword value for `name`.
    pub fn get_keyword(&self, name: &str) -> Option<&Value> {
        self.keyword.get(name)
    }

    /// Splits the snapshot into its parts.
    pub fn into_parts(self) -> (Vec<Value>, BTreeMap<String, Value>) {
        (self.positional, self.keyword)
    }

    /// Fails unless exactly `expected` positional values are present.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::ArityMismatch`] on a count mismatch.
    pub fn expect_len(&self, function: &str, expected: usize) -> Result<(), CallError> {
        if self.positional.len() == expected {
            Ok(())
        } else {
            Err(CallError::ArityMismatch {
                function: function.to_string(),
                expected,
                actual: self.positional.len(),
            })
        }
    }

    /// Returns the positional value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::ArityMismatch`] if there is no such value.
    pub fn value(&self, function: &str, index: usize) -> Result<&Value, CallError> {
        self.positional
            .get(index)
            .ok_or_else(|| CallError::ArityMismatch {
                function: function.to_string(),
                expected: index + 1,
                actual: self.positional.len(),
            })
    }

    /// Returns the positional integer at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::ArityMismatch`] if the value is missing and
    /// [`CallError::TypeMismatch`] if it is not an `Int`.
    pub fn int(&self, function: &str, index: usize) -> Result<i64, CallError> {
        let value = self.value(function, index)?;
        value
            .as_int()
            .ok_or_else(|| mismatch(function, format!("#{index}"), "Int", value))
    }

    /// Returns the positional float at `index`. Integers are widened.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::ArityMismatch`] if the value is missing and
    /// [`CallError::TypeMismatch`] if it is not numeric.
    #[allow(clippy::cast_precision_loss)]
    pub fn float(&self, function: &str, index: usize) -> Result<f64, CallError> {
        let value = self.value(function, index)?;
        match value {
            Value::Float(number) => Ok(*number),
            Value::Int(number) => Ok(*number as f64),
            other => Err(mismatch(function, format!("#{index}"), "Float", other)),
        }
    }

    /// Returns the positional string at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::ArityMismatch`] if the value is missing and
    /// [`CallError::TypeMismatch`] if it is not a `Str`.
    pub fn string(&self, function: &str, index: usize) -> Result<&str, CallError> {
        let value = self.value(function, index)?;
        value
            .as_str()
            .ok_or_else(|| mismatch(function, format!("#{index}"), "Str", value))
    }

    /// Returns the keyword value for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::MissingKeyword`] if it is absent.
    pub fn keyword_value(&self, function: &str, name: &str) -> Result<&Value, CallError> {
        self.keyword
            .get(name)
            .ok_or_else(|| CallError::MissingKeyword {
                function: function.to_string(),
                name: name.to_string(),
            })
    }

    /// Returns the keyword integer for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::MissingKeyword`] if it is absent and
    /// [`CallError::TypeMismatch`] if it is not an `Int`.
    pub fn keyword_int(&self, function: &str, name: &str) -> Result<i64, CallError> {
        let value = self.keyword_value(function, name)?;
        value
            .as_int()
            .ok_or_else(|| mismatch(function, format!("`{name}`"), "Int", value))
    }
}

fn mismatch(function: &str, argument: String, expected: &'static str, actual: &Value) -> CallError {
    CallError::TypeMismatch {
        function: function.to_string(),
        argument,
        expected,
        actual: actual.type_name(),
    }
}

/// Builds an [`Arguments`] snapshot.
///
/// Positional values come first, separated by commas. Keyword values follow a
/// semicolon as `name = value` pairs. Every value goes through
/// [`Value::from`](crate::value::Value).
///
/// # Syntax
///
/// - `args![]` - no arguments
/// - `args![a, b]` - positional only
/// - `args![; x = a]` - keyword only
/// - `args![a; x = b, y = c]` - both
///
/// # Examples
///
/// ```rust
/// use pointfree::args;
/// use pointfree::value::Value;
///
/// let arguments = args![10; label = "ten"];
/// assert_eq!(arguments.get(0), Some(&Value::Int(10)));
/// assert_eq!(arguments.get_keyword("label"), Some(&Value::from("ten")));
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::value::Arguments::new()
    };

    ($($positional:expr),+ $(,)?) => {
        $crate::value::Arguments::new()
            $(.with_positional($crate::value::Value::from($positional)))+
    };

    ($($positional:expr),* ; $($name:ident = $value:expr),+ $(,)?) => {
        $crate::value::Arguments::new()
            $(.with_positional($crate::value::Value::from($positional)))*
            $(.with_keyword(stringify!($name), $crate::value::Value::from($value)))+
    };
}

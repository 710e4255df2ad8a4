//! Constructor signatures and argument normalization.

use crate::error::RegistryError;
use crate::value::{Arguments, Value};

/// A declared constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    default: Option<Value>,
}

impl Parameter {
    /// Creates a parameter that must be supplied.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// Creates a parameter with a default value.
    pub fn optional(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }

    /// Returns the parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default value, if any.
    pub const fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// The ordered parameter list of a constructor.
///
/// # Examples
///
/// ```rust
/// use pointfree::args;
/// use pointfree::registry::Signature;
/// use pointfree::value::Value;
///
/// let signature = Signature::new().required("a").required("b").optional("c", 3);
///
/// let positional = signature.normalize("Test", &args![1, 2]).unwrap();
/// let mixed = signature.normalize("Test", &args![1; c = 3, b = 2]).unwrap();
///
/// assert_eq!(positional, mixed);
/// assert_eq!(positional.get("c"), Some(&Value::Int(3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    parameters: Vec<Parameter>,
}

impl Signature {
    /// Creates a signature without parameters.
    pub const fn new() -> Self {
        Self {
            parameters: Vec::new(),
        }
    }

    /// Appends a required parameter.
    #[must_use]
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter::required(name));
        self
    }

    /// Appends a parameter with a default value.
    #[must_use]
    pub fn optional(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.parameters.push(Parameter::optional(name, default));
        self
    }

    /// Returns the parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Returns `true` if a parameter with this name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.parameters.iter().any(|parameter| parameter.name == name)
    }

    /// Binds `arguments` to the declared parameters.
    ///
    /// Positional values bind in declaration order, keyword values by name,
    /// and parameters left unbound take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] naming `registry` when there are more
    /// positional values than parameters, a keyword names no parameter, a
    /// parameter is bound twice, or a required parameter stays unbound.
    pub fn normalize(
        &self,
        registry: &str,
        arguments: &Arguments,
    ) -> Result<BoundArguments, RegistryError> {
        if arguments.positional_len() > self.parameters.len() {
            return Err(RegistryError::TooManyPositional {
                registry: registry.to_string(),
                expected: self.parameters.len(),
                actual: arguments.positional_len(),
            });
        }

        let mut slots: Vec<Option<Value>> = vec![None; self.parameters.len()];
        for (slot, value) in slots.iter_mut().zip(arguments.positional()) {
            *slot = Some(value.clone());
        }

        for (name, value) in arguments.keyword() {
            let index = self
                .parameters
                .iter()
                .position(|parameter| &parameter.name == name)
                .ok_or_else(|| RegistryError::UnknownKeyword {
                    registry: registry.to_string(),
                    name: name.clone(),
                })?;
            if slots[index].is_some() {
                return Err(RegistryError::DuplicateArgument {
                    registry: registry.to_string(),
                    name: name.clone(),
                });
            }
            slots[index] = Some(value.clone());
        }

        self.parameters
            .iter()
            .zip(slots)
            .map(|(parameter, slot)| {
                slot.or_else(|| parameter.default.clone())
                    .map(|value| (parameter.name.clone(), value))
                    .ok_or_else(|| RegistryError::MissingArgument {
                        registry: registry.to_string(),
                        name: parameter.name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|entries| BoundArguments { entries })
    }
}

/// Constructor arguments bound to parameter names, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundArguments {
    entries: Vec<(String, Value)>,
}

impl BoundArguments {
    /// Returns the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value)
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of bound parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parameter is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the bound values as keyword arguments.
    pub fn to_arguments(&self) -> Arguments {
        Arguments::from_keyword(self.entries.iter().cloned())
    }

    pub(crate) fn project(&self, names: &[String]) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(name, _)| names.contains(name))
                .cloned()
                .collect(),
        }
    }
}

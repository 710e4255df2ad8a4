//! Memoized construction keyed by normalized constructor arguments.
//!
//! A [`Registry`] wraps a constructor and returns the same shared instance
//! for calls that bind the same values to its [`Signature`], no matter how
//! those values were passed. `make(1, 2)`, `make(1, b = 2)` and
//! `make(1, 2, c = 3)` with `c` defaulting to `3` all reach one instance.
//!
//! The key can be narrowed to a subset of parameters with
//! [`Registry::with_key_parameters`]; the first call for a key then decides
//! the values of the remaining parameters. [`Registry::singleton`] narrows
//! the key to nothing at all.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use pointfree::args;
//! use pointfree::registry::{Registry, Signature};
//!
//! let registry = Registry::new(
//!     "Point",
//!     Signature::new().required("x").optional("y", 0),
//!     |bound| Ok((bound.to_arguments().keyword_int("Point", "x")?, bound.to_arguments().keyword_int("Point", "y")?)),
//! );
//!
//! let first = registry.get_or_create(&args![1]).unwrap();
//! let second = registry.get_or_create(&args![; x = 1, y = 0]).unwrap();
//!
//! assert!(Arc::ptr_eq(&first, &second));
//! assert_eq!(*first, (1, 0));
//! assert_eq!(registry.len(), 1);
//! ```

mod signature;

pub use signature::{BoundArguments, Parameter, Signature};

use crate::error::{CallError, RegistryError};
use crate::value::Arguments;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

#[cfg(feature = "fxhash")]
type InstanceMap<T> = rustc_hash::FxHashMap<BoundArguments, Arc<T>>;

#[cfg(not(feature = "fxhash"))]
type InstanceMap<T> = std::collections::HashMap<BoundArguments, Arc<T>>;

type Constructor<T> = dyn Fn(&BoundArguments) -> Result<T, CallError> + Send + Sync;

/// A memoizing constructor.
///
/// The constructor runs while the registry is locked, so it runs at most
/// once per key even under concurrent calls. It must not call back into the
/// same registry.
pub struct Registry<T> {
    name: String,
    signature: Signature,
    key_parameters: Option<Vec<String>>,
    constructor: Box<Constructor<T>>,
    instances: Mutex<InstanceMap<T>>,
}

impl<T> Registry<T> {
    /// Creates a registry keyed by every parameter of `signature`.
    pub fn new<F>(name: impl Into<String>, signature: Signature, constructor: F) -> Self
    where
        F: Fn(&BoundArguments) -> Result<T, CallError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            signature,
            key_parameters: None,
            constructor: Box::new(constructor),
            instances: Mutex::new(InstanceMap::default()),
        }
    }

    /// Creates a registry that holds at most one instance.
    ///
    /// Arguments are still checked against `signature`, and the first
    /// successful call decides the instance.
    pub fn singleton<F>(name: impl Into<String>, signature: Signature, constructor: F) -> Self
    where
        F: Fn(&BoundArguments) -> Result<T, CallError> + Send + Sync + 'static,
    {
        Self {
            key_parameters: Some(Vec::new()),
            ..Self::new(name, signature, constructor)
        }
    }

    /// Restricts the memoization key to the named parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UndeclaredKeyParameter`] if a name is not a
    /// parameter of the signature.
    pub fn with_key_parameters<I, S>(mut self, names: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names
            .into_iter()
            .map(Into::into)
            .map(|name| {
                if self.signature.contains(&name) {
                    Ok(name)
                } else {
                    Err(RegistryError::UndeclaredKeyParameter {
                        registry: self.name.clone(),
                        name,
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.key_parameters = Some(names);
        Ok(self)
    }

    /// Returns the registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the constructor signature.
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Returns the instance for `arguments`, constructing it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if `arguments` do not fit the signature, or wraps the
    /// constructor's error in [`RegistryError::Construction`]. A failed
    /// construction stores nothing.
    pub fn get_or_create(&self, arguments: &Arguments) -> Result<Arc<T>, RegistryError> {
        let bound = self.signature.normalize(&self.name, arguments)?;
        let key = self.key(&bound);

        let mut instances = self.instances.lock();
        if let Some(instance) = instances.get(&key) {
            trace!(registry = %self.name, key = ?key, "reusing instance");
            return Ok(Arc::clone(instance));
        }

        let instance = Arc::new((self.constructor)(&bound)?);
        debug!(registry = %self.name, key = ?key, "created instance");
        instances.insert(key, Arc::clone(&instance));
        Ok(instance)
    }

    /// Returns `true` if an instance exists for `arguments`.
    ///
    /// # Errors
    ///
    /// Returns an error if `arguments` do not fit the signature.
    pub fn contains(&self, arguments: &Arguments) -> Result<bool, RegistryError> {
        let bound = self.signature.normalize(&self.name, arguments)?;
        Ok(self.instances.lock().contains_key(&self.key(&bound)))
    }

    /// Returns the number of stored instances.
    pub fn len(&self) -> usize {
        self.instances.lock().len()
    }

    /// Returns `true` if no instance is stored.
    pub fn is_empty(&self) -> bool {
        self.instances.lock().is_empty()
    }

    /// Drops every stored instance.
    pub fn clear(&self) {
        self.instances.lock().clear();
        debug!(registry = %self.name, "cleared instances");
    }

    fn key(&self, bound: &BoundArguments) -> BoundArguments {
        match &self.key_parameters {
            Some(names) => bound.project(names),
            None => bound.clone(),
        }
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Registry")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .field("key_parameters", &self.key_parameters)
            .field("instances", &self.len())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Registry<i64>: Send, Sync);

//! Deferred calls: function calls built before all of their arguments are known.
//!
//! A [`DeferredCall`] pairs a target function with positional and keyword
//! [`Argument`]s, some of which may be placeholders. Applying further
//! arguments substitutes every placeholder it can. When no placeholder is
//! left the target is invoked, otherwise a new, more resolved deferred call
//! is returned and the original is left untouched.

use super::{Argument, Placeholder, Step};
use crate::error::CallError;
use crate::value::{Arguments, Callable, Function, Value};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, trace};

/// A target function together with a snapshot of its (possibly incomplete) arguments.
///
/// # Invariants
///
/// - Applying arguments to a call without holes invokes the target exactly once.
/// - Applying arguments to a call that still has holes afterwards never
///   invokes the target; a new `DeferredCall` is returned instead.
/// - Resolution never mutates `self`, so a call can be reused to start
///   several independent chains.
///
/// # Examples
///
/// ```rust
/// use pointfree::args;
/// use pointfree::compose::{DeferredCall, Placeholder, Step};
/// use pointfree::value::{Function, Value};
///
/// let subtract = Function::new("subtract", |arguments| {
///     Ok(Value::Int(arguments.int("subtract", 0)? - arguments.int("subtract", 1)?))
/// });
///
/// // subtract(_, 10)
/// let minus_ten = DeferredCall::new(subtract).hole(Placeholder::index(0)).arg(10);
///
/// assert_eq!(minus_ten.apply(&args![25]), Ok(Step::Done(Value::Int(15))));
/// assert!(!minus_ten.apply(&args![]).unwrap().is_done());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DeferredCall {
    target: Function,
    positional: Vec<Argument>,
    keyword: BTreeMap<String, Argument>,
}

impl DeferredCall {
    /// Creates a deferred call of `target` without arguments.
    pub const fn new(target: Function) -> Self {
        Self {
            target,
            positional: Vec::new(),
            keyword: BTreeMap::new(),
        }
    }

    /// Appends a concrete positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(Argument::Bound(value.into()));
        self
    }

    /// Appends a positional placeholder.
    #[must_use]
    pub fn hole(mut self, placeholder: Placeholder) -> Self {
        self.positional.push(Argument::Hole(placeholder));
        self
    }

    /// Sets a concrete keyword argument.
    #[must_use]
    pub fn keyword(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword
            .insert(name.into(), Argument::Bound(value.into()));
        self
    }

    /// Sets a keyword placeholder.
    #[must_use]
    pub fn keyword_hole(mut self, name: impl Into<String>, placeholder: Placeholder) -> Self {
        self.keyword.insert(name.into(), Argument::Hole(placeholder));
        self
    }

    /// Returns the target function.
    pub const fn target(&self) -> &Function {
        &self.target
    }

    /// Returns the positional arguments.
    pub fn positional(&self) -> &[Argument] {
        &self.positional
    }

    /// Returns the keyword arguments.
    pub const fn keywords(&self) -> &BTreeMap<String, Argument> {
        &self.keyword
    }

    /// Iterates over the unresolved placeholders, positional ones first.
    pub fn holes(&self) -> impl Iterator<Item = &Placeholder> {
        self.positional
            .iter()
            .chain(self.keyword.values())
            .filter_map(Argument::as_hole)
    }

    /// Returns `true` if no placeholder is left.
    pub fn is_resolved(&self) -> bool {
        self.holes().next().is_none()
    }

    /// Substitutes placeholders from `arguments` without invoking anything.
    pub fn resolve(&self, arguments: &Arguments) -> Self {
        Self {
            target: self.target.clone(),
            positional: self
                .positional
                .iter()
                .map(|argument| argument.resolve(arguments))
                .collect(),
            keyword: self
                .keyword
                .iter()
                .map(|(name, argument)| (name.clone(), argument.resolve(arguments)))
                .collect(),
        }
    }

    /// Applies the arguments of one call.
    ///
    /// Invokes the target if every placeholder is now resolved, otherwise
    /// returns the partially resolved call.
    ///
    /// # Errors
    ///
    /// Returns whatever error the target reports when it is invoked.
    pub fn apply(&self, arguments: &Arguments) -> Result<Step<Self>, CallError> {
        let resolved = self.resolve(arguments);
        let remaining = resolved.holes().count();
        trace!(
            function = self.target.name(),
            supplied_positional = arguments.positional_len(),
            supplied_keyword = arguments.keyword().len(),
            remaining,
            "resolved deferred call"
        );
        if remaining == 0 {
            debug!(function = self.target.name(), "invoking deferred call");
            resolved.invoke().map(Step::Done)
        } else {
            debug!(function = self.target.name(), remaining, "deferred call still pending");
            Ok(Step::Pending(resolved))
        }
    }

    fn invoke(self) -> Result<Value, CallError> {
        let positional = self
            .positional
            .into_iter()
            .filter_map(Argument::into_value)
            .collect();
        let keyword = self
            .keyword
            .into_iter()
            .filter_map(|(name, argument)| argument.into_value().map(|value| (name, value)))
            .collect();
        self.target.call(Arguments::from_parts(positional, keyword))
    }
}

impl Callable for DeferredCall {
    fn call(&self, arguments: Arguments) -> Result<Value, CallError> {
        self.apply(&arguments).map(Step::into_value)
    }
}

impl From<DeferredCall> for Function {
    fn from(call: DeferredCall) -> Self {
        let name = format!("{}(..)", call.target.name());
        Self::from_callable(name, call)
    }
}

impl fmt::Display for DeferredCall {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}(", self.target.name())?;
        let keyword = self
            .keyword
            .iter()
            .map(|(name, argument)| format!("{name}={argument}"));
        let rendered: Vec<String> = self
            .positional
            .iter()
            .map(ToString::to_string)
            .chain(keyword)
            .collect();
        write!(formatter, "{})", rendered.join(", "))
    }
}

/// Builds a deferred call of `target`.
///
/// This is the entry point for placeholder-based partial application. The
/// returned call is invoked through [`DeferredCall::apply`] or, as a
/// [`Function`], through the dynamic calling convention.
///
/// # Examples
///
/// ```rust
/// use pointfree::args;
/// use pointfree::compose::{bind, Argument, Placeholder};
/// use pointfree::value::{Function, Value};
///
/// let scale = Function::new("scale", |arguments| {
///     Ok(Value::Int(arguments.int("scale", 0)? * arguments.keyword_int("scale", "by")?))
/// });
///
/// let call = bind(
///     scale,
///     [Argument::Hole(Placeholder::index(0))],
///     [("by".to_string(), Argument::Hole(Placeholder::named("factor")))],
/// );
///
/// let step = call.apply(&args![7; factor = 3]).unwrap();
/// assert_eq!(step.done(), Some(Value::Int(21)));
/// ```
pub fn bind(
    target: Function,
    positional: impl IntoIterator<Item = Argument>,
    keyword: impl IntoIterator<Item = (String, Argument)>,
) -> DeferredCall {
    DeferredCall {
        target,
        positional: positional.into_iter().collect(),
        keyword: keyword.into_iter().collect(),
    }
}

static_assertions::assert_impl_all!(DeferredCall: Send, Sync, Clone);

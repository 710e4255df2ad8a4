//! Pipeline stages: deferred calls resolved against a shared state and
//! composed with the next curried stage.
//!
//! Building a pipeline takes three steps:
//!
//! 1. [`stage`] captures a target and its arguments, placeholders included.
//! 2. [`Stage::then`] names the next stage, a [`Curried`] function.
//! 3. [`StageLink::with_state`] resolves the captured placeholders against a
//!    [`State`] (its entries act as keyword arguments) and returns a new
//!    [`Curried`] with the next stage's arity.
//!
//! Because the result is itself curried, it can serve as the next stage of
//! another link, and chains of any length compose uniformly. [`assemble`]
//! folds a list of stages onto a terminal stage in one go.
//!
//! # What the resolution produces
//!
//! - A function value: `next` runs first and its result feeds the function
//! - A still-pending call: `next` runs first and the call receives its result
//! - Plain data: the data is spliced in as `next`'s leading arguments
//!
//! Arguments `next` has already accumulated, spliced data included, carry
//! over to the returned curry, so its remaining arity matches `next`'s.

use super::{Argument, Curried, DeferredCall, Step, bind, compose, identity_function};
use crate::error::CallError;
use crate::value::{Arguments, Function, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Shared state threaded through a pipeline. Entries resolve named placeholders.
pub type State = BTreeMap<String, Value>;

/// A deferred call waiting to be linked to the next stage of a pipeline.
///
/// # Examples
///
/// ```rust
/// use pointfree::compose::{curry, stage, Argument, Placeholder, State};
/// use pointfree::value::{Function, Value};
///
/// let increment = Function::new("increment", |arguments| {
///     Ok(Value::Int(arguments.int("increment", 0)? + 1))
/// });
/// let double = Function::new("double", |arguments| {
///     Ok(Value::Int(arguments.int("double", 0)? * 2))
/// });
///
/// let state = State::from([("a".to_string(), Value::Int(10))]);
/// let pipeline = stage(increment, [Argument::Hole(Placeholder::named("a"))], [])
///     .then(curry(double, 1))
///     .with_state(&state)
///     .unwrap();
///
/// // increment(a) is spliced into double, which fires on the next call.
/// assert_eq!(pipeline.apply([]).unwrap().done(), Some(Value::Int(22)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    call: DeferredCall,
}

impl Stage {
    /// Creates a stage from a deferred call.
    pub const fn new(call: DeferredCall) -> Self {
        Self { call }
    }

    /// Returns the captured deferred call.
    pub const fn call(&self) -> &DeferredCall {
        &self.call
    }

    /// Links this stage to the stage that runs after it in data order.
    pub fn then(&self, next: Curried) -> StageLink {
        StageLink {
            stage: self.clone(),
            next,
        }
    }
}

impl From<DeferredCall> for Stage {
    fn from(call: DeferredCall) -> Self {
        Self::new(call)
    }
}

/// A stage linked to its next stage, waiting for the shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct StageLink {
    stage: Stage,
    next: Curried,
}

impl StageLink {
    /// Returns the stage.
    pub const fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Returns the next stage.
    pub const fn next(&self) -> &Curried {
        &self.next
    }

    /// Resolves the stage against `state` and composes it with the next stage.
    ///
    /// The returned function has the next stage's declared arity.
    ///
    /// # Errors
    ///
    /// If the state resolves every placeholder, the stage's target is invoked
    /// here and its error is returned.
    pub fn with_state(&self, state: &State) -> Result<Curried, CallError> {
        let arguments = Arguments::from_parts(Vec::new(), state.clone());
        let (outer, seed) = match self.stage.call.apply(&arguments)? {
            Step::Done(Value::Function(function)) => {
                debug!(
                    stage = self.stage.call.target().name(),
                    next = self.next.target().name(),
                    "stage resolved to a function"
                );
                (function, Vec::new())
            }
            Step::Done(value) => {
                debug!(
                    stage = self.stage.call.target().name(),
                    next = self.next.target().name(),
                    spliced = %value,
                    "stage resolved to data"
                );
                (identity_function(), value.spread())
            }
            Step::Pending(call) => {
                debug!(
                    stage = self.stage.call.target().name(),
                    next = self.next.target().name(),
                    holes = call.holes().count(),
                    "stage still pending after state"
                );
                (Function::from(call), Vec::new())
            }
        };
        let fresh = Curried::new(self.next.target().clone(), self.next.arity());
        let composed = compose(outer, fresh.saturating());
        let carried = self.next.accumulated().iter().cloned().chain(seed);
        Ok(Curried::new(composed, self.next.arity()).accumulate(carried))
    }
}

/// Captures `target` and its arguments as a pipeline stage.
///
/// This mirrors [`bind`](super::bind); the resulting [`Stage`] is resolved
/// once the next stage and the shared state are known.
pub fn stage(
    target: Function,
    positional: impl IntoIterator<Item = Argument>,
    keyword: impl IntoIterator<Item = (String, Argument)>,
) -> Stage {
    Stage::new(bind(target, positional, keyword))
}

/// Builds `stages[0] . stages[1] . ... . terminal` against one shared state.
///
/// Stages are linked right to left: the last stage is linked to `terminal`,
/// the one before it to the result, and so on.
///
/// # Errors
///
/// Returns the first error raised while resolving a stage against `state`.
///
/// # Examples
///
/// ```rust
/// use pointfree::compose::{assemble, curry, stage, Argument, Placeholder, State};
/// use pointfree::value::{Function, Value};
///
/// let add = Function::new("add", |arguments| {
///     Ok(Value::Int(arguments.int("add", 0)? + arguments.keyword_int("add", "amount")?))
/// });
/// let double = Function::new("double", |arguments| {
///     Ok(Value::Int(arguments.int("double", 0)? * 2))
/// });
///
/// let add_offset = stage(
///     add,
///     [Argument::Hole(Placeholder::index(0))],
///     [("amount".to_string(), Argument::Hole(Placeholder::named("offset")))],
/// );
/// let state = State::from([("offset".to_string(), Value::Int(10))]);
///
/// // add_offset(double(x))
/// let pipeline = assemble([add_offset], curry(double, 1), &state).unwrap();
/// let saturated = pipeline.apply([Value::Int(5)]).unwrap().pending().unwrap();
/// assert_eq!(saturated.invoke(), Ok(Value::Int(20)));
/// ```
pub fn assemble(
    stages: impl IntoIterator<Item = Stage>,
    terminal: Curried,
    state: &State,
) -> Result<Curried, CallError> {
    let stages: Vec<Stage> = stages.into_iter().collect();
    stages
        .iter()
        .rev()
        .try_fold(terminal, |next, stage| stage.then(next).with_state(state))
}

static_assertions::assert_impl_all!(Stage: Send, Sync, Clone);
static_assertions::assert_impl_all!(StageLink: Send, Sync, Clone);

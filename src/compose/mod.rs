//! Placeholder-based partial application, currying and pipeline composition.
//!
//! This module provides the building blocks for point-free pipelines over
//! dynamic [`Function`](crate::value::Function)s. A call can be assembled
//! before all of its arguments are known, completed piece by piece, and
//! chained with other calls through a shared state.
//!
//! # Overview
//!
//! - [`Placeholder`]: A positional or named hole in an argument list
//! - [`bind`] / [`DeferredCall`]: A call that invokes its target once every hole is filled
//! - [`curry`] / [`Curried`]: Accumulates positional arguments up to a fixed arity
//! - [`compose`] / [`compose!`]: Right-to-left composition that spreads tuple results
//! - [`stage`] / [`assemble`]: Pipeline stages resolved against a shared [`State`]
//!
//! # Helper Functions
//!
//! - [`identity`]: Normalizes variadic results to one value or a tuple
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the first two arguments of a function
//!
//! # Examples
//!
//! ## Deferred calls
//!
//! ```
//! use pointfree::args;
//! use pointfree::compose::{DeferredCall, Placeholder, Step};
//! use pointfree::value::{Function, Value};
//!
//! let greet = Function::new("greet", |arguments| {
//!     Ok(Value::from(format!(
//!         "{}, {}{}",
//!         arguments.string("greet", 0)?,
//!         arguments.string("greet", 1)?,
//!         arguments.string("greet", 2)?
//!     )))
//! });
//!
//! // greet("Hello", _name, _2)
//! let hello = DeferredCall::new(greet)
//!     .arg("Hello")
//!     .hole(Placeholder::named("name"))
//!     .hole(Placeholder::index(2));
//!
//! // Only the name arrives, so the positional hole keeps index 2.
//! let waiting = hello.apply(&args![; name = "Alice"]).unwrap().pending().unwrap();
//! assert_eq!(waiting.holes().count(), 1);
//!
//! // The third of three positional arguments fills it.
//! let greeting = waiting.apply(&args!["a", "b", "!"]).unwrap();
//! assert_eq!(greeting, Step::Done(Value::from("Hello, Alice!")));
//! ```
//!
//! ## Currying
//!
//! ```
//! use pointfree::compose::curry;
//! use pointfree::value::{Function, Value};
//!
//! let add = Function::new("add", |arguments| {
//!     Ok(Value::Int(arguments.int("add", 0)? + arguments.int("add", 1)?))
//! });
//!
//! let add_five = curry(add, 2).apply([Value::Int(5)]).unwrap().pending().unwrap();
//! let saturated = add_five.apply([Value::Int(3)]).unwrap().pending().unwrap();
//! assert_eq!(saturated.apply([]).unwrap().done(), Some(Value::Int(8)));
//! ```
//!
//! # Mathematical Background
//!
//! ## Placeholder substitution
//!
//! Positional placeholders are relative to the call that resolves them. A
//! placeholder that is out of range survives with its index lowered by the
//! number of arguments supplied:
//!
//! ```text
//! bind(f, _2)(a, b)    = bind(f, _0)
//! bind(f, _2)(a, b)(c) = f(c)
//! ```
//!
//! ## Function Composition
//!
//! ```text
//! compose(f, g)(x) = f(g(x))      when g(x) is a single value
//! compose(f, g)(x) = f(*g(x))     when g(x) is a tuple
//! ```
//!
//! ## Pipelines
//!
//! ```text
//! assemble([s1, s2], t, state) = s1 . s2 . t, with free variables taken from state
//! ```
//!
//! # Laws
//!
//! - **Full supply**: `bind(f, args)() == f(args)` when `args` holds no placeholder
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Double Flip Identity**: `flip(flip(f)) == f`

mod binder;
mod compose_macro;
mod composer;
mod curry;
mod placeholder;
mod stage;
mod step;
mod utils;

pub use binder::{DeferredCall, bind};
pub use composer::compose;
pub use curry::{Curried, curry};
pub use placeholder::{Argument, Placeholder, Slot};
pub use stage::{Stage, StageLink, State, assemble, stage};
pub use step::Step;
pub use utils::{constant, flip, identity, identity_function};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;

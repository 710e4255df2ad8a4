//! # pointfree
//!
//! Placeholder-based partial application, currying and pipeline composition
//! over dynamically typed functions.
//!
//! ## Overview
//!
//! Every function handled by this crate shares one calling convention: it
//! takes [`Arguments`](value::Arguments) (positional and keyword values) and
//! returns a [`Value`](value::Value) or a [`CallError`]. On top of that
//! convention the crate provides:
//!
//! - **Placeholders**: positional and named holes that later calls fill in
//! - **Deferred calls**: `bind` captures a call and invokes it once no hole remains
//! - **Currying**: accumulates positional arguments up to a fixed arity
//! - **Composition**: right-to-left composition that spreads tuple results
//! - **Pipelines**: stages resolved against a shared state and chained together
//! - **Registries**: memoized construction keyed by normalized arguments
//!
//! ## Feature Flags
//!
//! - `compose`: Placeholders, deferred calls, currying, composition and pipelines
//! - `registry`: Memoizing constructors
//! - `serde`: Serialization of placeholders
//! - `fxhash`: Faster hashing for registry storage
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pointfree::prelude::*;
//!
//! let add = Function::new("add", |arguments| {
//!     Ok(Value::Int(arguments.int("add", 0)? + arguments.int("add", 1)?))
//! });
//!
//! // add(_1, 10)
//! let add_ten = bind(add, [Argument::Hole(Placeholder::index(1)), Argument::from(Value::Int(10))], []);
//!
//! // The first argument is skipped, the second fills the hole.
//! assert_eq!(
//!     add_ten.apply(&args!["skipped", 5]),
//!     Ok(Step::Done(Value::Int(15)))
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and macros.
///
/// # Usage
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::args;
    pub use crate::error::CallError;
    pub use crate::value::{Arguments, Callable, Function, Value};

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "registry")]
    pub use crate::error::RegistryError;
    #[cfg(feature = "registry")]
    pub use crate::registry::{BoundArguments, Registry, Signature};
}

pub mod error;
pub mod value;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "registry")]
pub mod registry;

pub use error::CallError;
#[cfg(feature = "registry")]
pub use error::RegistryError;

//! Placeholders for arguments that are not known yet.
//!
//! A [`Placeholder`] marks a hole in a deferred call. It refers either to a
//! positional index or to a keyword name of the arguments that a *later* call
//! will supply. Resolution never mutates a placeholder; it yields the
//! supplied value or a fresh placeholder.
//!
//! # Index shifting
//!
//! Positional indices are always relative to the arguments of the call being
//! resolved. When fewer arguments arrive than the index needs, the
//! placeholder survives with its index lowered by the number of arguments
//! that did arrive, so the next call can still reach it:
//!
//! ```text
//! P(2) resolved against (a, b)  =>  P(0)
//! P(0) resolved against (c)     =>  c
//! ```

use crate::value::{Arguments, Value};
use std::fmt;

/// Where a placeholder takes its value from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    /// The positional argument at this index.
    Index(usize),
    /// The keyword argument with this name.
    Name(String),
}

impl fmt::Display for Slot {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => write!(formatter, "{name}"),
        }
    }
}

/// An immutable token standing for an argument that has not been supplied.
///
/// Two placeholders are equal when their slots are equal, and they hash by
/// slot.
///
/// # Examples
///
/// ```rust
/// use pointfree::args;
/// use pointfree::compose::{Argument, Placeholder};
/// use pointfree::value::Value;
///
/// let third = Placeholder::index(2);
///
/// // Only two positional arguments: the index shifts down by two.
/// assert_eq!(
///     third.resolve(&args![1, 2]),
///     Argument::Hole(Placeholder::index(0))
/// );
/// assert_eq!(
///     third.resolve(&args![1, 2, 3]),
///     Argument::Bound(Value::Int(3))
/// );
///
/// let named = Placeholder::named("x");
/// assert_eq!(named.resolve(&args![; x = 5]), Argument::Bound(Value::Int(5)));
/// assert_eq!(named.resolve(&args![; y = 5]), Argument::Hole(named.clone()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placeholder {
    slot: Slot,
}

impl Placeholder {
    /// Creates a placeholder for the positional argument at `index`.
    pub const fn index(index: usize) -> Self {
        Self {
            slot: Slot::Index(index),
        }
    }

    /// Creates a placeholder for the keyword argument `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            slot: Slot::Name(name.into()),
        }
    }

    /// Returns the slot this placeholder refers to.
    pub const fn slot(&self) -> &Slot {
        &self.slot
    }

    /// Resolves the placeholder against the arguments of one call.
    ///
    /// - index `i` with `i < n` positional arguments: the `i`-th argument;
    /// - index `i` with `i >= n`: a new placeholder for index `i - n`;
    /// - name present among the keyword arguments: its value;
    /// - name absent: this placeholder, unchanged.
    pub fn resolve(&self, arguments: &Arguments) -> Argument {
        match &self.slot {
            Slot::Index(index) => arguments.get(*index).map_or_else(
                || Argument::Hole(Self::index(index - arguments.positional_len())),
                |value| Argument::Bound(value.clone()),
            ),
            Slot::Name(name) => arguments.get_keyword(name).map_or_else(
                || Argument::Hole(self.clone()),
                |value| Argument::Bound(value.clone()),
            ),
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "_{}", self.slot)
    }
}

/// An argument of a deferred call: either a concrete value or a hole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// A concrete value.
    Bound(Value),
    /// A value still to be supplied.
    Hole(Placeholder),
}

impl Argument {
    /// Returns `true` if this argument holds a concrete value.
    pub const fn is_bound(&self) -> bool {
        matches!(self, Self::Bound(_))
    }

    /// Returns the placeholder if this argument is a hole.
    pub const fn as_hole(&self) -> Option<&Placeholder> {
        match self {
            Self::Hole(placeholder) => Some(placeholder),
            Self::Bound(_) => None,
        }
    }

    /// Substitutes a hole from the given arguments. Bound values pass through.
    pub fn resolve(&self, arguments: &Arguments) -> Self {
        match self {
            Self::Bound(_) => self.clone(),
            Self::Hole(placeholder) => placeholder.resolve(arguments),
        }
    }

    /// Returns the concrete value, or `None` for a hole.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Bound(value) => Some(value),
            Self::Hole(_) => None,
        }
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Self::Bound(value)
    }
}

impl From<Placeholder> for Argument {
    fn from(placeholder: Placeholder) -> Self {
        Self::Hole(placeholder)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bound(value) => write!(formatter, "{value}"),
            Self::Hole(placeholder) => write!(formatter, "{placeholder}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case(0, Argument::Bound(Value::from("a")))]
    #[case(1, Argument::Bound(Value::from("b")))]
    #[case(2, Argument::Hole(Placeholder::index(0)))]
    #[case(5, Argument::Hole(Placeholder::index(3)))]
    fn test_index_resolution(#[case] index: usize, #[case] expected: Argument) {
        let arguments = args!["a", "b"];
        assert_eq!(Placeholder::index(index).resolve(&arguments), expected);
    }

    #[rstest]
    fn test_index_ignores_keywords() {
        let placeholder = Placeholder::index(0);
        assert_eq!(
            placeholder.resolve(&args![; x = 1]),
            Argument::Hole(Placeholder::index(0))
        );
    }

    #[rstest]
    fn test_name_ignores_positionals() {
        let placeholder = Placeholder::named("x");
        assert_eq!(
            placeholder.resolve(&args![1, 2]),
            Argument::Hole(Placeholder::named("x"))
        );
    }

    #[rstest]
    fn test_equality_and_hash_follow_slot() {
        let set: HashSet<Placeholder> = [
            Placeholder::index(0),
            Placeholder::index(0),
            Placeholder::named("0"),
            Placeholder::named("x"),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 3);
        assert_ne!(Placeholder::index(0), Placeholder::named("0"));
    }

    #[rstest]
    fn test_bound_argument_passes_through() {
        let argument = Argument::Bound(Value::Int(7));
        assert_eq!(argument.resolve(&args![1, 2, 3]), argument);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(format!("{}", Placeholder::index(1)), "_1");
        assert_eq!(format!("{}", Placeholder::named("rate")), "_rate");
    }
}
